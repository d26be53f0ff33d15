//! Telemetry-decoding and aggregation core for the sailing-race
//! analysis platform.
//!
//! The modules follow the upload pipeline end to end: GPX waypoint
//! extraction, descriptor decoding, foil-zone classification, maneuver
//! detection, and the duration-weighted reduction into route points
//! and summary statistics.

pub mod analysis;
pub mod catalog;
pub mod ingest;
pub mod prelude;
pub mod report;
pub mod telemetry;

pub use analysis::pipeline::{analyze, AnalyzerOptions};
pub use prelude::{AnalyzeError, AnalyzeResult};
pub use report::{AnalysisReport, AnalysisStats, RoutePoint, SailStats};
