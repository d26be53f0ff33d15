use std::collections::HashMap;

use log::{debug, info};

use crate::analysis::duration::{self, GapEstimator, MS_PER_MINUTE};
use crate::analysis::foils;
use crate::analysis::maneuvers::ManeuverTracker;
use crate::catalog::SailCatalog;
use crate::ingest::descriptor::{decode_descriptor, DecodeOutcome};
use crate::ingest::gpx::extract_waypoints;
use crate::prelude::AnalyzeResult;
use crate::report::{AnalysisReport, AnalysisStats, RoutePoint, SailStats};
use crate::telemetry::ScanMetrics;

/// Knobs for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalyzerOptions {
    /// Assumed gap when a waypoint pair lacks usable timestamps.
    pub fallback_gap_minutes: f64,
    /// Sail set attributed in the per-sail statistics.
    pub catalog: SailCatalog,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            fallback_gap_minutes: 10.0,
            catalog: SailCatalog::paid_sails(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct SailUsage {
    total_minutes: f64,
    foil_minutes: f64,
}

/// Runs the full decode-classify-aggregate pipeline over one GPX text.
///
/// Waypoints whose descriptor is absent or unmatched yield no route
/// point but still contribute elapsed time to the totals and prime the
/// timestamp memory for the next gap. The only fatal condition is a
/// document that is not well-formed XML.
pub fn analyze(xml: &str, options: &AnalyzerOptions) -> AnalyzeResult<AnalysisReport> {
    let waypoints = extract_waypoints(xml)?;

    let mut points = Vec::new();
    let mut metrics = ScanMetrics::new();
    let mut gaps = GapEstimator::new(options.fallback_gap_minutes);
    let mut maneuvers = ManeuverTracker::new();

    let mut total_duration_ms = 0.0;
    let mut foils100_minutes = 0.0;
    let mut total_dist_gain = 0.0;
    let mut saved_minutes = 0.0;

    let mut usage: HashMap<&str, SailUsage> = options
        .catalog
        .entries()
        .iter()
        .map(|entry| (entry.name.as_str(), SailUsage::default()))
        .collect();

    for (index, waypoint) in waypoints.iter().enumerate() {
        let current_time = waypoint
            .time
            .as_deref()
            .and_then(duration::parse_waypoint_time);

        let duration_minutes = gaps.advance(index, current_time);
        total_duration_ms += duration_minutes * MS_PER_MINUTE;

        let sample = match decode_descriptor(waypoint.desc.as_deref()) {
            DecodeOutcome::Decoded(sample) => sample,
            DecodeOutcome::Unmatched => {
                metrics.record_skipped();
                debug!("waypoint {} skipped: descriptor did not decode", index);
                continue;
            }
        };
        metrics.record_decoded();

        let zone = foils::classify(sample.tws, sample.abs_twa);
        let dist_gain = if zone.full {
            foils100_minutes += duration_minutes;
            saved_minutes += foils::time_saved_minutes(duration_minutes);
            let gain = foils::distance_gain(sample.sog, duration_minutes);
            total_dist_gain += gain;
            gain
        } else {
            0.0
        };

        if let Some(tracked) = usage.get_mut(sample.sail.as_str()) {
            tracked.total_minutes += duration_minutes;
            if zone.active {
                tracked.foil_minutes += duration_minutes;
            }
        }

        maneuvers.observe(&sample.sail, sample.twa);

        let resolved_time = current_time
            .unwrap_or_else(|| duration::synthesize_time(index, options.fallback_gap_minutes));

        points.push(RoutePoint {
            time: duration::iso_millis(resolved_time),
            hdg: sample.hdg,
            twa: sample.twa.to_string(),
            abs_twa: sample.abs_twa,
            sail: sample.sail,
            sog: sample.sog,
            tws: sample.tws,
            is_foils_active: zone.active,
            is_foils100: zone.full,
            dist_gain,
        });
    }

    let total_duration_minutes = total_duration_ms / MS_PER_MINUTE;

    let paid_sail_stats = options
        .catalog
        .entries()
        .iter()
        .map(|entry| {
            let tracked = usage
                .get(entry.name.as_str())
                .copied()
                .unwrap_or_default();
            SailStats {
                name: entry.name.clone(),
                category: entry.category.clone(),
                usage_percent: percent(tracked.total_minutes, total_duration_minutes),
                foil_time_percent: percent(tracked.foil_minutes, tracked.total_minutes),
                total_time_minutes: tracked.total_minutes.round() as i64,
            }
        })
        .collect();

    let stats = AnalysisStats {
        total_duration: duration::format_duration_ms(total_duration_ms),
        total_duration_minutes,
        sail_changes: maneuvers.sail_changes(),
        gybe_tack_count: maneuvers.gybe_tack_count(),
        percent_foils100: percent(foils100_minutes, total_duration_minutes),
        total_dist_gain: round2(total_dist_gain),
        total_foil_time_saved: duration::format_saved_minutes(saved_minutes),
        paid_sail_stats,
    };

    info!(
        "analysis complete: {} waypoints ({} decoded, {} skipped), {:.1} min total",
        metrics.total(),
        metrics.decoded(),
        metrics.skipped(),
        total_duration_minutes
    );

    Ok(AnalysisReport { points, stats })
}

fn percent(part: f64, whole: f64) -> i64 {
    if whole > 0.0 {
        ((part / whole) * 100.0).round() as i64
    } else {
        0
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
