pub mod descriptor;
pub mod gpx;

pub use descriptor::{decode_descriptor, DecodeOutcome};
pub use gpx::extract_waypoints;
