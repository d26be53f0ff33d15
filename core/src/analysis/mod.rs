pub mod duration;
pub mod foils;
pub mod maneuvers;
pub mod pipeline;

pub use maneuvers::ManeuverTracker;
pub use pipeline::{analyze, AnalyzerOptions};
