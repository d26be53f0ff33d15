use anyhow::Context;
use foilcore::{analyze, AnalysisReport, AnalyzerOptions};

/// Binds a set of analyzer options to the core pipeline. Cheap to
/// clone; both the CLI and the HTTP surface run through it.
#[derive(Clone)]
pub struct Runner {
    options: AnalyzerOptions,
}

impl Runner {
    pub fn new(options: AnalyzerOptions) -> Self {
        Self { options }
    }

    pub fn execute(&self, file_content: &str) -> anyhow::Result<AnalysisReport> {
        analyze(file_content, &self.options).context("analyzing GPX document")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::sample::{build_gpx_document, SampleConfig};

    #[test]
    fn runner_executes_generated_document() {
        let runner = Runner::new(AnalyzerOptions::default());
        let document = build_gpx_document(&SampleConfig::default());
        let report = runner.execute(&document).unwrap();
        assert_eq!(report.points.len(), 12);
        assert_eq!(report.stats.percent_foils100, 100);
    }

    #[test]
    fn synthetic_round_trip_duration() {
        // N waypoints one minute apart, all in the full-performance
        // zone: the first contributes no elapsed time.
        let config = SampleConfig {
            waypoints: 31,
            gap_minutes: 1,
            ..SampleConfig::default()
        };
        let runner = Runner::new(AnalyzerOptions::default());
        let report = runner.execute(&build_gpx_document(&config)).unwrap();
        assert_eq!(report.stats.total_duration_minutes, 30.0);
        assert_eq!(report.stats.percent_foils100, 100);
        assert_eq!(report.stats.total_duration, "0h 30m");
        assert_eq!(report.stats.sail_changes, 0);
    }

    #[test]
    fn runner_surfaces_malformed_documents() {
        let runner = Runner::new(AnalyzerOptions::default());
        assert!(runner.execute("<gpx><wpt>").is_err());
    }
}
