use anyhow::Context;
use foilcore::catalog::{SailCatalog, SailEntry};
use foilcore::AnalyzerOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_fallback_gap() -> f64 {
    10.0
}

fn default_port() -> u16 {
    8787
}

/// Workflow settings for the driver, loadable from YAML.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// Assumed gap between waypoints with no usable timestamps.
    #[serde(default = "default_fallback_gap")]
    pub fallback_gap_minutes: f64,
    /// Replaces the built-in paid-sail catalog when present.
    #[serde(default)]
    pub catalog: Option<Vec<SailEntry>>,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            fallback_gap_minutes: default_fallback_gap(),
            catalog: None,
            port: default_port(),
        }
    }
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn to_options(&self) -> AnalyzerOptions {
        AnalyzerOptions {
            fallback_gap_minutes: self.fallback_gap_minutes,
            catalog: match &self.catalog {
                Some(entries) => SailCatalog::new(entries.clone()),
                None => SailCatalog::paid_sails(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_uses_paid_sail_catalog() {
        let options = WorkflowConfig::default().to_options();
        assert_eq!(options.fallback_gap_minutes, 10.0);
        assert_eq!(options.catalog.entries().len(), 5);
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"fallback_gap_minutes: 5\nport: 9001\n")
            .unwrap();
        let path = temp.into_temp_path();
        let config = WorkflowConfig::load(&path).unwrap();
        assert_eq!(config.fallback_gap_minutes, 5.0);
        assert_eq!(config.port, 9001);
        assert!(config.catalog.is_none());
    }

    #[test]
    fn config_load_accepts_catalog_override() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"catalog:\n  - id: main\n    name: Grand-voile\n    category: Standard\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let options = WorkflowConfig::load(&path).unwrap().to_options();
        assert_eq!(options.catalog.entries().len(), 1);
        assert_eq!(options.catalog.entries()[0].name, "Grand-voile");
    }

    #[test]
    fn config_load_fails_on_missing_file() {
        assert!(WorkflowConfig::load("no/such/config.yaml").is_err());
    }
}
