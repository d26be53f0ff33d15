/// Raw waypoint lifted from one `<wpt>` element. Both children are
/// optional in real exports.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawWaypoint {
    pub time: Option<String>,
    pub desc: Option<String>,
}

/// Sailing parameters decoded from one waypoint descriptor.
///
/// The heading is kept as signed text because it is only ever
/// displayed, never compared numerically.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedSample {
    pub hdg: String,
    pub twa: i32,
    pub abs_twa: i32,
    pub sail: String,
    pub sog: f64,
    pub tws: f64,
}

/// Fatal error for an analysis run.
///
/// Unmatched descriptors and missing timestamps are absorbed inside
/// the scan; only a document that is not well-formed XML aborts it.
#[derive(thiserror::Error, Debug)]
pub enum AnalyzeError {
    #[error("malformed document: {0}")]
    MalformedDocument(String),
}

pub type AnalyzeResult<T> = Result<T, AnalyzeError>;
