use std::collections::HashMap;
use std::sync::RwLock;

use crate::models::AnalysisReport;

/// Capability to store analysis results keyed by generated id.
///
/// Reports are written once per request and read-only afterwards; the
/// analysis core takes this as an injected dependency instead of touching
/// any process-global state.
pub trait ResultStore: Send + Sync {
    /// Store a report, returning its generated id
    fn put(&self, report: AnalysisReport) -> String;
    /// Fetch a stored report by id
    fn get(&self, id: &str) -> Option<AnalysisReport>;
}

/// In-memory store; no eviction, contents are lost on restart
#[derive(Default)]
pub struct MemoryStore {
    results: RwLock<HashMap<String, AnalysisReport>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultStore for MemoryStore {
    fn put(&self, report: AnalysisReport) -> String {
        let id = uuid::Uuid::new_v4().simple().to_string();
        self.results
            .write()
            .expect("result store lock poisoned")
            .insert(id.clone(), report);
        id
    }

    fn get(&self, id: &str) -> Option<AnalysisReport> {
        self.results
            .read()
            .expect("result store lock poisoned")
            .get(id)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SentimentBreakdown, Transcript};
    use crate::translate::testing::StubTranslator;

    async fn sample_report() -> AnalysisReport {
        let transcript = Transcript::new(vec![]).unwrap();
        crate::analysis::analyze(&transcript, &StubTranslator::failing()).await
    }

    #[tokio::test]
    async fn test_put_then_get_roundtrip() {
        let store = MemoryStore::new();
        let report = sample_report().await;

        let id = store.put(report);
        assert_eq!(id.len(), 32); // dashless v4 uuid

        let fetched = store.get(&id).expect("stored report should exist");
        let SentimentBreakdown { positive, .. } = fetched.sentiment;
        assert_eq!(positive, "0.00%");
    }

    #[tokio::test]
    async fn test_unknown_id_is_none() {
        let store = MemoryStore::new();
        assert!(store.get("missing").is_none());
    }

    #[tokio::test]
    async fn test_each_put_gets_fresh_id() {
        let store = MemoryStore::new();
        let first = store.put(sample_report().await);
        let second = store.put(sample_report().await);
        assert_ne!(first, second);
        assert!(store.get(&first).is_some());
        assert!(store.get(&second).is_some());
    }
}
