use regex::Regex;
use std::sync::OnceLock;

use crate::prelude::DecodedSample;

/// Result of matching one waypoint descriptor against the export
/// format. Unmatched descriptors are expected input, not errors; the
/// caller keeps counting elapsed time for them.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeOutcome {
    Decoded(DecodedSample),
    Unmatched,
}

/// Descriptor pattern produced by the simulator export:
/// `HDG:<int> TWA:<int> <sail> SOG:<num> kt TWS:<num> kt`.
///
/// The sail name is the shortest run of text between the TWA token and
/// the SOG token. SOG/TWS digits may carry a decimal comma.
fn descriptor_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"HDG:(-?\d+)\s+TWA:(-?\d+)\s+(.*?)\s+SOG:([\d,.]+)\s+kt\s+TWS:([\d,.]+)\s+kt")
            .unwrap()
    })
}

/// Decimal commas show up in exports from comma-locale machines; this
/// is the single normalization point before any numeric parse.
fn normalize_decimal(raw: &str) -> String {
    raw.replace(',', ".")
}

/// Matches one free-text descriptor against the telemetry pattern.
pub fn decode_descriptor(desc: Option<&str>) -> DecodeOutcome {
    match desc.and_then(try_decode) {
        Some(sample) => DecodeOutcome::Decoded(sample),
        None => DecodeOutcome::Unmatched,
    }
}

fn try_decode(text: &str) -> Option<DecodedSample> {
    let caps = descriptor_pattern().captures(text)?;
    let twa: i32 = caps[2].parse().ok()?;
    let sog: f64 = normalize_decimal(&caps[4]).parse().ok()?;
    let tws: f64 = normalize_decimal(&caps[5]).parse().ok()?;
    Some(DecodedSample {
        hdg: caps[1].to_string(),
        twa,
        abs_twa: twa.abs(),
        sail: caps[3].trim().to_string(),
        sog,
        tws,
    })
}
