use std::collections::HashMap;

pub const POINT_PREFIX: &str = "P";
pub const TEMP_POINT_PREFIX: &str = "TEMP_P";
pub const SEGMENT_PREFIX: &str = "S";
pub const TRIANGLE_PREFIX: &str = "T";
pub const ANGLE_PREFIX: &str = "A";
pub const STEP_PREFIX: &str = "Step";

/// Per-prefix monotonic counters producing ids like `P1`, `S3`, `Step2`.
///
/// Ids are never reused. Uniqueness across entity kinds comes from the
/// prefixes, not from a shared counter.
#[derive(Debug, Default, Clone)]
pub struct IdAllocator {
    counters: HashMap<String, u64>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the counter for `prefix` and return `prefix` + counter.
    pub fn next_id(&mut self, prefix: &str) -> String {
        let counter = self.counters.entry(prefix.to_owned()).or_insert(0);
        *counter += 1;
        format!("{prefix}{counter}")
    }

    /// Number of ids handed out so far for `prefix`.
    pub fn issued(&self, prefix: &str) -> u64 {
        self.counters.get(prefix).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_one() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.next_id(POINT_PREFIX), "P1");
        assert_eq!(ids.next_id(POINT_PREFIX), "P2");
        assert_eq!(ids.issued(POINT_PREFIX), 2);
    }

    #[test]
    fn test_prefixes_are_independent() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.next_id(POINT_PREFIX), "P1");
        assert_eq!(ids.next_id(SEGMENT_PREFIX), "S1");
        assert_eq!(ids.next_id(TEMP_POINT_PREFIX), "TEMP_P1");
        assert_eq!(ids.next_id(POINT_PREFIX), "P2");
        assert_eq!(ids.next_id(STEP_PREFIX), "Step1");
        assert_eq!(ids.issued(ANGLE_PREFIX), 0);
    }
}
