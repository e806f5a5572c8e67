use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::models::{Provider, Seeker};

/// Errors that can occur when loading profile records
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Persistence boundary the matching service reads records through
pub trait ProfileStore {
    fn get_seeker_by_id(&self, seeker_id: &str) -> Result<Option<Seeker>, StoreError>;

    /// Whole candidate pool, firms and individuals alike
    fn list_providers(&self) -> Result<Vec<Provider>, StoreError>;
}

/// On-disk dataset shape
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub seekers: Vec<Seeker>,
    #[serde(default)]
    pub providers: Vec<Provider>,
}

/// Store holding every record in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    seekers: HashMap<String, Seeker>,
    providers: Vec<Provider>,
}

impl InMemoryStore {
    pub fn new(seekers: Vec<Seeker>, providers: Vec<Provider>) -> Self {
        Self {
            seekers: seekers.into_iter().map(|s| (s.id.clone(), s)).collect(),
            providers,
        }
    }

    pub fn from_dataset(dataset: Dataset) -> Self {
        Self::new(dataset.seekers, dataset.providers)
    }

    /// Parse a JSON dataset (`{"seekers": [...], "providers": [...]}`)
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let dataset: Dataset = serde_json::from_str(json)?;
        tracing::debug!(
            "Loaded dataset with {} seekers and {} providers",
            dataset.seekers.len(),
            dataset.providers.len()
        );
        Ok(Self::from_dataset(dataset))
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    pub fn insert_seeker(&mut self, seeker: Seeker) {
        self.seekers.insert(seeker.id.clone(), seeker);
    }

    pub fn add_provider(&mut self, provider: Provider) {
        self.providers.push(provider);
    }

    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }
}

impl ProfileStore for InMemoryStore {
    fn get_seeker_by_id(&self, seeker_id: &str) -> Result<Option<Seeker>, StoreError> {
        Ok(self.seekers.get(seeker_id).cloned())
    }

    fn list_providers(&self) -> Result<Vec<Provider>, StoreError> {
        Ok(self.providers.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET: &str = r#"{
        "seekers": [
            {"id": "s1", "name": "Ledgerly", "industries": ["Fintech"],
             "stage": "Seed", "targetAmount": 1000000}
        ],
        "providers": [
            {"kind": "firm", "id": "f1", "name": "North Fund", "firmType": "Venture Capital",
             "checkSizeMin": 500000, "checkSizeMax": 1500000},
            {"kind": "individual", "id": "i1", "name": "Dana", "typicalCheckSize": "$25K-$100K"}
        ]
    }"#;

    #[test]
    fn test_from_json_str() {
        let store = InMemoryStore::from_json_str(DATASET).unwrap();
        let seeker = store.get_seeker_by_id("s1").unwrap().unwrap();
        assert_eq!(seeker.target_amount, Some(1_000_000.0));
        assert_eq!(store.list_providers().unwrap().len(), 2);
        assert!(store.get_seeker_by_id("missing").unwrap().is_none());
    }

    #[test]
    fn test_build_store_incrementally() {
        let mut store = InMemoryStore::default();
        store.insert_seeker(Seeker {
            id: "s2".to_string(),
            ..Default::default()
        });
        store.add_provider(Provider::Firm(crate::models::InvestmentFirm {
            id: "f2".to_string(),
            name: "South".to_string(),
            ..Default::default()
        }));

        assert_eq!(store.provider_count(), 1);
        assert!(store.get_seeker_by_id("s2").unwrap().is_some());

        // Re-inserting replaces the record under the same id
        store.insert_seeker(Seeker {
            id: "s2".to_string(),
            name: Some("Renamed".to_string()),
            ..Default::default()
        });
        let seeker = store.get_seeker_by_id("s2").unwrap().unwrap();
        assert_eq!(seeker.name.as_deref(), Some("Renamed"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = InMemoryStore::from_json_str(r#"{"providers": [{"kind": "bank"}]}"#).unwrap_err();
        assert!(matches!(err, StoreError::SerializationError(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = InMemoryStore::from_json_file("/nonexistent/capmatch.json").unwrap_err();
        assert!(matches!(err, StoreError::IoError(_)));
    }
}
