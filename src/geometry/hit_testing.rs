use egui::Pos2;

// Default hit radii in canvas units
pub const SNAP_TOLERANCE: f32 = 15.0;
pub const SEGMENT_HIT_TOLERANCE: f32 = 20.0;
pub const TRIANGLE_HIT_TOLERANCE: f32 = 30.0;
pub const ANGLE_HIT_TOLERANCE: f32 = 20.0;

/// Strictly-less-than proximity test used by every hit test
pub fn is_within(pos: Pos2, target: Pos2, tolerance: f32) -> bool {
    pos.distance(target) < tolerance
}

pub fn midpoint(a: Pos2, b: Pos2) -> Pos2 {
    Pos2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

pub fn centroid(a: Pos2, b: Pos2, c: Pos2) -> Pos2 {
    Pos2::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0)
}

/// Direction of the ray `from -> to` in radians, in screen coordinates
pub fn ray_angle(from: Pos2, to: Pos2) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Signed angle from ray `vertex -> p1` to ray `vertex -> p2`, normalized to [0, 360) degrees
pub fn angle_degrees(p1: Pos2, vertex: Pos2, p2: Pos2) -> f32 {
    let degrees = (ray_angle(vertex, p2) - ray_angle(vertex, p1)).to_degrees();
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if normalized >= 360.0 { 0.0 } else { normalized }
}
