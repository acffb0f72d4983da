use std::collections::HashMap;

use egui::Pos2;

use crate::config::EditorConfig;
use crate::element::{Angle, ElementId, ElementKind, Point, Segment, Triangle};
use crate::error::{EditorError, EditorResult};
use crate::geometry::hit_testing::{angle_degrees, centroid, is_within, midpoint};
use crate::proof::ProofStep;

/// Owns every committed entity of one diagram plus the proof-step log.
///
/// Collections keep insertion order, which is also the tie-break order for
/// all proximity lookups. There is no deletion.
#[derive(Debug, Default)]
pub struct EntityStore {
    points: Vec<Point>,
    segments: Vec<Segment>,
    triangles: Vec<Triangle>,
    angles: Vec<Angle>,
    proof_steps: Vec<ProofStep>,
    index: HashMap<ElementId, (ElementKind, usize)>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn angles(&self) -> &[Angle] {
        &self.angles
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn point(&self, id: &str) -> Option<&Point> {
        match self.index.get(id) {
            Some((ElementKind::Point, slot)) => self.points.get(*slot),
            _ => None,
        }
    }

    pub fn point_pos(&self, id: &str) -> Option<Pos2> {
        self.point(id).map(Point::pos)
    }

    pub fn segment(&self, id: &str) -> Option<&Segment> {
        match self.index.get(id) {
            Some((ElementKind::Segment, slot)) => self.segments.get(*slot),
            _ => None,
        }
    }

    pub fn angle(&self, id: &str) -> Option<&Angle> {
        match self.index.get(id) {
            Some((ElementKind::Angle, slot)) => self.angles.get(*slot),
            _ => None,
        }
    }

    fn reserve(&mut self, id: &str, kind: ElementKind, slot: usize) -> EditorResult<()> {
        if self.index.contains_key(id) {
            return Err(EditorError::DuplicateId(id.to_owned()));
        }
        self.index.insert(id.to_owned(), (kind, slot));
        Ok(())
    }

    fn require_points(&self, ids: &[&str]) -> EditorResult<()> {
        match ids.iter().find(|id| self.point(id).is_none()) {
            Some(missing) => Err(EditorError::UnknownPoint((*missing).to_owned())),
            None => Ok(()),
        }
    }

    pub fn add_point(&mut self, point: Point) -> EditorResult<()> {
        self.reserve(point.id(), ElementKind::Point, self.points.len())?;
        self.points.push(point);
        Ok(())
    }

    pub fn add_segment(&mut self, segment: Segment) -> EditorResult<()> {
        self.require_points(&[segment.p1(), segment.p2()])?;
        self.reserve(segment.id(), ElementKind::Segment, self.segments.len())?;
        self.segments.push(segment);
        Ok(())
    }

    pub fn add_triangle(&mut self, triangle: Triangle) -> EditorResult<()> {
        let [p1, p2, p3] = triangle.points();
        self.require_points(&[p1.as_str(), p2.as_str(), p3.as_str()])?;
        self.reserve(triangle.id(), ElementKind::Triangle, self.triangles.len())?;
        self.triangles.push(triangle);
        Ok(())
    }

    pub fn add_angle(&mut self, angle: Angle) -> EditorResult<()> {
        self.require_points(&[angle.p1(), angle.vertex(), angle.p2()])?;
        self.reserve(angle.id(), ElementKind::Angle, self.angles.len())?;
        self.angles.push(angle);
        Ok(())
    }

    /// Move a point in place. Returns false if `id` is not a stored point.
    pub fn move_point(&mut self, id: &str, pos: Pos2) -> bool {
        let Some((ElementKind::Point, slot)) = self.index.get(id).copied() else {
            return false;
        };
        match self.points.get_mut(slot) {
            Some(point) => {
                point.set_pos(pos);
                true
            }
            None => false,
        }
    }

    pub fn segment_endpoints(&self, segment: &Segment) -> Option<(Pos2, Pos2)> {
        Some((self.point_pos(segment.p1())?, self.point_pos(segment.p2())?))
    }

    pub fn triangle_vertices(&self, triangle: &Triangle) -> Option<[Pos2; 3]> {
        let [p1, p2, p3] = triangle.points();
        Some([self.point_pos(p1)?, self.point_pos(p2)?, self.point_pos(p3)?])
    }

    /// `(p1, vertex, p2)` positions
    pub fn angle_rays(&self, angle: &Angle) -> Option<(Pos2, Pos2, Pos2)> {
        Some((
            self.point_pos(angle.p1())?,
            self.point_pos(angle.vertex())?,
            self.point_pos(angle.p2())?,
        ))
    }

    pub fn segment_length(&self, id: &str) -> Option<f32> {
        let (a, b) = self.segment_endpoints(self.segment(id)?)?;
        Some(a.distance(b))
    }

    /// Angle value in degrees, see [`angle_degrees`]
    pub fn angle_value(&self, id: &str) -> Option<f32> {
        let (p1, vertex, p2) = self.angle_rays(self.angle(id)?)?;
        Some(angle_degrees(p1, vertex, p2))
    }

    pub fn find_point_near(&self, pos: Pos2, tolerance: f32) -> Option<&Point> {
        self.points
            .iter()
            .find(|point| is_within(pos, point.pos(), tolerance))
    }

    /// Coarse hit test against segment midpoints
    pub fn find_segment_near(&self, pos: Pos2, tolerance: f32) -> Option<&Segment> {
        self.segments.iter().find(|segment| {
            self.segment_endpoints(segment)
                .is_some_and(|(a, b)| is_within(pos, midpoint(a, b), tolerance))
        })
    }

    /// Coarse hit test against triangle centroids
    pub fn find_triangle_near(&self, pos: Pos2, tolerance: f32) -> Option<&Triangle> {
        self.triangles.iter().find(|triangle| {
            self.triangle_vertices(triangle)
                .is_some_and(|[a, b, c]| is_within(pos, centroid(a, b, c), tolerance))
        })
    }

    /// Coarse hit test against angle vertices
    pub fn find_angle_near(&self, pos: Pos2, tolerance: f32) -> Option<&Angle> {
        self.angles.iter().find(|angle| {
            self.point_pos(angle.vertex())
                .is_some_and(|vertex| is_within(pos, vertex, tolerance))
        })
    }

    /// First element hit in priority order Point, Segment, Triangle, Angle
    pub fn hit_test(&self, pos: Pos2, config: &EditorConfig) -> Option<(ElementKind, ElementId)> {
        if let Some(point) = self.find_point_near(pos, config.snap_tolerance) {
            return Some((ElementKind::Point, point.id().to_owned()));
        }
        if let Some(segment) = self.find_segment_near(pos, config.segment_hit_tolerance) {
            return Some((ElementKind::Segment, segment.id().to_owned()));
        }
        if let Some(triangle) = self.find_triangle_near(pos, config.triangle_hit_tolerance) {
            return Some((ElementKind::Triangle, triangle.id().to_owned()));
        }
        self.find_angle_near(pos, config.angle_hit_tolerance)
            .map(|angle| (ElementKind::Angle, angle.id().to_owned()))
    }

    pub fn add_proof_step(&mut self, step: ProofStep) {
        self.proof_steps.push(step);
    }

    /// Committed proof steps in commit order
    pub fn list_proof_steps(&self) -> &[ProofStep] {
        &self.proof_steps
    }
}
