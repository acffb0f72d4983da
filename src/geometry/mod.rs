pub mod hit_testing;

pub use hit_testing::{angle_degrees, centroid, midpoint};
