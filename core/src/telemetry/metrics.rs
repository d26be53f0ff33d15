/// Run-local counters describing how a scan consumed its waypoints.
///
/// Each analysis run owns its own recorder, so there is no shared
/// state between concurrent runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScanMetrics {
    decoded: usize,
    skipped: usize,
}

impl ScanMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_decoded(&mut self) {
        self.decoded += 1;
    }

    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    pub fn decoded(&self) -> usize {
        self.decoded
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn total(&self) -> usize {
        self.decoded + self.skipped
    }
}
