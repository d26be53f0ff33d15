use serde::{Deserialize, Serialize};

/// One decoded waypoint enriched with foil classification, emitted in
/// route order. Field names serialize to the camelCase transport
/// schema consumed by the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoutePoint {
    pub time: String,
    pub hdg: String,
    pub twa: String,
    pub abs_twa: i32,
    pub sail: String,
    pub sog: f64,
    pub tws: f64,
    pub is_foils_active: bool,
    pub is_foils100: bool,
    /// Nonzero only while in the full-performance zone.
    pub dist_gain: f64,
}

/// Usage summary for one catalog sail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SailStats {
    pub name: String,
    pub category: String,
    pub usage_percent: i64,
    pub foil_time_percent: i64,
    pub total_time_minutes: i64,
}

/// Summary statistics reduced from one full scan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisStats {
    /// "{h}h {m}m" over the whole waypoint sequence.
    pub total_duration: String,
    pub total_duration_minutes: f64,
    pub sail_changes: u32,
    pub gybe_tack_count: u32,
    pub percent_foils100: i64,
    pub total_dist_gain: f64,
    pub total_foil_time_saved: String,
    /// One entry per catalog sail, in catalog order, even when unused.
    pub paid_sail_stats: Vec<SailStats>,
}

/// Complete result of one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisReport {
    pub points: Vec<RoutePoint>,
    pub stats: AnalysisStats,
}
