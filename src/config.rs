use serde::{Deserialize, Serialize};

use crate::geometry::hit_testing::{
    ANGLE_HIT_TOLERANCE, SEGMENT_HIT_TOLERANCE, SNAP_TOLERANCE, TRIANGLE_HIT_TOLERANCE,
};

/// User-tunable editor settings. This is the only state persisted between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct EditorConfig {
    /// Radius for snapping, drag targeting and point selection
    pub snap_tolerance: f32,
    /// Radius around a segment's midpoint
    pub segment_hit_tolerance: f32,
    /// Radius around a triangle's centroid
    pub triangle_hit_tolerance: f32,
    /// Radius around an angle's vertex
    pub angle_hit_tolerance: f32,
    /// Draw id labels next to elements
    pub show_labels: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            snap_tolerance: SNAP_TOLERANCE,
            segment_hit_tolerance: SEGMENT_HIT_TOLERANCE,
            triangle_hit_tolerance: TRIANGLE_HIT_TOLERANCE,
            angle_hit_tolerance: ANGLE_HIT_TOLERANCE,
            show_labels: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.snap_tolerance, 15.0);
        assert_eq!(config.segment_hit_tolerance, 20.0);
        assert_eq!(config.triangle_hit_tolerance, 30.0);
        assert_eq!(config.angle_hit_tolerance, 20.0);
        assert!(config.show_labels);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: EditorConfig = serde_json::from_str(r#"{ "snap_tolerance": 8.0 }"#).unwrap();
        assert_eq!(config.snap_tolerance, 8.0);
        assert_eq!(config.triangle_hit_tolerance, 30.0);
        assert!(config.show_labels);
    }
}
