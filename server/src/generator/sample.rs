use chrono::{DateTime, Duration, SecondsFormat, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Configuration for generating a synthetic telemetry export.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    pub waypoints: usize,
    pub gap_minutes: i64,
    pub sail: String,
    pub twa: i32,
    pub sog: f64,
    pub tws: f64,
    /// Bounded jitter applied to SOG/TWS, in knots.
    pub jitter: f64,
    pub seed: u64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            waypoints: 12,
            gap_minutes: 1,
            sail: "Code 0".to_string(),
            twa: 90,
            sog: 20.5,
            tws: 18.0,
            jitter: 0.0,
            seed: 0,
        }
    }
}

fn start_time() -> DateTime<Utc> {
    // 2024-01-01T00:00:00Z
    DateTime::<Utc>::from_timestamp_millis(1_704_067_200_000).unwrap_or_default()
}

/// Builds a GPX document whose descriptors follow the simulator export
/// format understood by the decoder.
pub fn build_gpx_document(config: &SampleConfig) -> String {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let start = start_time();

    let mut body = String::new();
    for index in 0..config.waypoints {
        let stamp = start + Duration::minutes(config.gap_minutes * index as i64);
        let jitter = if config.jitter > 0.0 {
            rng.gen_range(-config.jitter..config.jitter)
        } else {
            0.0
        };
        let _ = writeln!(
            body,
            "  <wpt lat=\"47.0\" lon=\"-3.0\">\n    <time>{}</time>\n    <desc>HDG:45 TWA:{} {} SOG:{:.1} kt TWS:{:.1} kt</desc>\n  </wpt>",
            stamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            config.twa,
            config.sail,
            config.sog + jitter,
            config.tws + jitter,
        );
    }

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<gpx version=\"1.1\" creator=\"sample-generator\">\n{}</gpx>\n",
        body
    )
}
