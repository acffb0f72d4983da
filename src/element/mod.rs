use std::fmt;

use egui::Pos2;

/// Human-readable element id such as `P1` or `S2`
pub type ElementId = String;

/// The kinds of diagram elements a proof step can reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Point,
    Segment,
    Triangle,
    Angle,
}

impl ElementKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::Segment => "Segment",
            Self::Triangle => "Triangle",
            Self::Angle => "Angle",
        }
    }
}

/// A committed point. Its id never changes, only its position.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    id: ElementId,
    pos: Pos2,
}

impl Point {
    pub fn new(id: impl Into<ElementId>, pos: Pos2) -> Self {
        Self { id: id.into(), pos }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn pos(&self) -> Pos2 {
        self.pos
    }

    pub(crate) fn set_pos(&mut self, pos: Pos2) {
        self.pos = pos;
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point {}({:.1}, {:.1})", self.id, self.pos.x, self.pos.y)
    }
}

/// A straight segment between two stored points.
///
/// Endpoints are held by id, so moving a point moves every segment using it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    id: ElementId,
    p1: ElementId,
    p2: ElementId,
}

impl Segment {
    pub fn new(id: impl Into<ElementId>, p1: impl Into<ElementId>, p2: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            p1: p1.into(),
            p2: p2.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn p1(&self) -> &str {
        &self.p1
    }

    pub fn p2(&self) -> &str {
        &self.p2
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Segment {}({}, {})", self.id, self.p1, self.p2)
    }
}

/// Three stored points; order is kept for display only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triangle {
    id: ElementId,
    points: [ElementId; 3],
}

impl Triangle {
    pub fn new(
        id: impl Into<ElementId>,
        p1: impl Into<ElementId>,
        p2: impl Into<ElementId>,
        p3: impl Into<ElementId>,
    ) -> Self {
        Self {
            id: id.into(),
            points: [p1.into(), p2.into(), p3.into()],
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn points(&self) -> &[ElementId; 3] {
        &self.points
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [p1, p2, p3] = &self.points;
        write!(f, "Triangle {}({}, {}, {})", self.id, p1, p2, p3)
    }
}

/// The angle from ray `vertex -> p1` to ray `vertex -> p2`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Angle {
    id: ElementId,
    p1: ElementId,
    vertex: ElementId,
    p2: ElementId,
}

impl Angle {
    pub fn new(
        id: impl Into<ElementId>,
        p1: impl Into<ElementId>,
        vertex: impl Into<ElementId>,
        p2: impl Into<ElementId>,
    ) -> Self {
        Self {
            id: id.into(),
            p1: p1.into(),
            vertex: vertex.into(),
            p2: p2.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn p1(&self) -> &str {
        &self.p1
    }

    pub fn vertex(&self) -> &str {
        &self.vertex
    }

    pub fn p2(&self) -> &str {
        &self.p2
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Angle {}({}, {}, {})", self.id, self.p1, self.vertex, self.p2)
    }
}
