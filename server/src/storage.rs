use chrono::{DateTime, Utc};
use foilcore::AnalysisReport;
use serde::Serialize;
use std::sync::Mutex;

/// One archived analysis run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredAnalysis {
    pub id: u64,
    pub file_name: String,
    pub created_at: DateTime<Utc>,
    pub report: AnalysisReport,
}

/// Append-only in-memory archive of past runs with auto-incrementing
/// ids. Placeholder persistence: records are never queried or evicted
/// and do not survive the process.
pub struct MemStorage {
    inner: Mutex<Inner>,
}

struct Inner {
    next_id: u64,
    analyses: Vec<StoredAnalysis>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                analyses: Vec::new(),
            }),
        }
    }

    /// Appends a run and returns its assigned id.
    pub fn create_analysis(&self, file_name: &str, report: AnalysisReport) -> u64 {
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let id = guard.next_id;
        guard.next_id += 1;
        guard.analyses.push(StoredAnalysis {
            id,
            file_name: file_name.to_string(),
            created_at: Utc::now(),
            report,
        });
        id
    }

    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .analyses
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}
