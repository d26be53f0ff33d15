use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

pub const MS_PER_MINUTE: f64 = 60_000.0;
const MS_PER_HOUR: f64 = 3_600_000.0;

/// Parses a waypoint `<time>` value. Anything unparseable counts as a
/// missing timestamp and falls back to the fixed gap.
pub fn parse_waypoint_time(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if let Ok(stamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(stamp.with_timezone(&Utc));
    }
    // Some exports omit the zone suffix; those stamps are taken as UTC.
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Tracks the elapsed gap between consecutive waypoints.
///
/// Gaps are signed: out-of-order timestamps produce negative elapsed
/// time, which is deliberately left uncorrected. The timestamp memory
/// updates on every stamped waypoint, decoded or not, and persists
/// across waypoints with no stamp at all.
pub struct GapEstimator {
    fallback_minutes: f64,
    prev_time: Option<DateTime<Utc>>,
}

impl GapEstimator {
    pub fn new(fallback_minutes: f64) -> Self {
        Self {
            fallback_minutes,
            prev_time: None,
        }
    }

    /// Elapsed minutes contributed by waypoint `index`. The first
    /// waypoint always contributes zero; afterwards a pair of known
    /// timestamps yields their signed difference and anything else
    /// yields the fallback gap.
    pub fn advance(&mut self, index: usize, current: Option<DateTime<Utc>>) -> f64 {
        let elapsed = match (self.prev_time, current) {
            (Some(prev), Some(now)) => (now - prev).num_milliseconds() as f64 / MS_PER_MINUTE,
            _ if index > 0 => self.fallback_minutes,
            _ => 0.0,
        };
        if current.is_some() {
            self.prev_time = current;
        }
        elapsed
    }
}

/// Timestamp synthesized for route points whose waypoint carried no
/// `<time>`: epoch plus index times the fallback gap.
pub fn synthesize_time(index: usize, fallback_minutes: f64) -> DateTime<Utc> {
    let millis = (index as f64 * fallback_minutes * MS_PER_MINUTE) as i64;
    DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or_default()
}

/// RFC 3339 with millisecond precision and a `Z` suffix, matching the
/// transport schema's time strings.
pub fn iso_millis(stamp: DateTime<Utc>) -> String {
    stamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// "{h}h {m}m" over a millisecond total, flooring both fields.
pub fn format_duration_ms(total_ms: f64) -> String {
    let hours = (total_ms / MS_PER_HOUR).floor() as i64;
    let minutes = ((total_ms % MS_PER_HOUR) / MS_PER_MINUTE).floor() as i64;
    format!("{}h {}m", hours, minutes)
}

/// "{h}h {m}m" over a minute total; hours floored, remainder rounded.
pub fn format_saved_minutes(total_minutes: f64) -> String {
    let hours = (total_minutes / 60.0).floor() as i64;
    let minutes = (total_minutes % 60.0).round() as i64;
    format!("{}h {}m", hours, minutes)
}
