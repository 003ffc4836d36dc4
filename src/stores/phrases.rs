use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::{error, info};
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

use super::write_json;
use crate::content_filter::ContentFilter;

/// Shortest phrase accepted by `submit`, in characters
pub const MIN_PHRASE_LENGTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomPhrase {
    pub text: String,
    pub author_id: String,
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PhraseFile {
    #[serde(default)]
    custom_responses: Vec<CustomPhrase>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhraseRejection {
    #[error("phrase is shorter than 10 characters")]
    TooShort,
    #[error("phrase contains disallowed words")]
    Offensive,
    #[error("phrase could not be saved")]
    Persistence,
}

#[derive(Clone)]
pub struct CustomPhraseStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl CustomPhraseStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CustomPhraseStore {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<PhraseFile> {
        if !tokio::fs::try_exists(&self.path).await? {
            write_json(&self.path, &PhraseFile::default()).await?;
            info!("Created phrase store at {}", self.path.display());
            return Ok(PhraseFile::default());
        }

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("reading {}", self.path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", self.path.display()))
    }

    /// Append a phrase as-is. Validation belongs to `submit`.
    pub async fn add(&self, text: &str, author_id: &str) -> bool {
        let _guard = self.write_lock.lock().await;

        let result = async {
            let mut data = self.read().await?;
            data.custom_responses.push(CustomPhrase {
                text: text.to_string(),
                author_id: author_id.to_string(),
                added_at: Utc::now(),
            });
            write_json(&self.path, &data).await
        }
        .await;

        match result {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to add custom phrase: {:#}", e);
                false
            }
        }
    }

    /// Validate, filter and store a user submission.
    pub async fn submit(
        &self,
        text: &str,
        author_id: &str,
        filter: &ContentFilter,
    ) -> Result<String, PhraseRejection> {
        let text = text.trim();
        if text.chars().count() < MIN_PHRASE_LENGTH {
            return Err(PhraseRejection::TooShort);
        }
        if filter.contains_offensive_content(text) {
            return Err(PhraseRejection::Offensive);
        }

        let filtered = filter.filter_text(text);
        if self.add(&filtered, author_id).await {
            Ok(filtered)
        } else {
            Err(PhraseRejection::Persistence)
        }
    }

    pub async fn get_all(&self) -> Result<Vec<CustomPhrase>> {
        Ok(self.read().await?.custom_responses)
    }

    pub async fn len(&self) -> Result<usize> {
        Ok(self.read().await?.custom_responses.len())
    }

    pub async fn random(&self) -> Result<Option<CustomPhrase>> {
        let phrases = self.get_all().await?;
        Ok(phrases.choose(&mut rand::rng()).cloned())
    }

    /// Remove by zero-based index; later entries shift down by one.
    pub async fn remove_at(&self, index: usize) -> bool {
        let _guard = self.write_lock.lock().await;

        let result = async {
            let mut data = self.read().await?;
            if index >= data.custom_responses.len() {
                return Ok(false);
            }
            data.custom_responses.remove(index);
            write_json(&self.path, &data).await?;
            Ok::<_, anyhow::Error>(true)
        }
        .await;

        result.unwrap_or_else(|e| {
            error!("Failed to remove custom phrase {}: {:#}", index, e);
            false
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> CustomPhraseStore {
        CustomPhraseStore::new(dir.path().join("data").join("responses.json"))
    }

    #[tokio::test]
    async fn test_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(store.get_all().await.unwrap().is_empty());
        let raw = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, serde_json::json!({ "custom_responses": [] }));
    }

    #[tokio::test]
    async fn test_add_and_get_all() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(store.add("Câu cà khịa số một", "42").await);
        let phrases = store.get_all().await.unwrap();
        assert_eq!(phrases.len(), 1);
        assert_eq!(phrases[0].text, "Câu cà khịa số một");
        assert_eq!(phrases[0].author_id, "42");
    }

    #[tokio::test]
    async fn test_file_uses_camel_case_fields() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.add("Một câu khá dài đây", "7").await;

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let entry = &value["custom_responses"][0];
        assert_eq!(entry["authorId"], "7");
        assert!(entry["addedAt"].as_str().unwrap().ends_with('Z'));
    }

    #[tokio::test]
    async fn test_reads_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("responses.json");
        std::fs::write(
            &path,
            r#"{"custom_responses":[{"text":"Có sẵn từ trước rồi","authorId":"1","addedAt":"2024-05-01T10:00:00.000Z"}]}"#,
        )
        .unwrap();

        let store = CustomPhraseStore::new(&path);
        let phrases = store.get_all().await.unwrap();
        assert_eq!(phrases[0].text, "Có sẵn từ trước rồi");
        assert_eq!(phrases[0].added_at.to_rfc3339(), "2024-05-01T10:00:00+00:00");
    }

    #[tokio::test]
    async fn test_remove_at_shifts_entries() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        for text in ["phrase number zero", "phrase number one", "phrase number two"] {
            assert!(store.add(text, "1").await);
        }

        assert!(store.remove_at(1).await);
        assert_eq!(store.len().await.unwrap(), 2);
        let texts: Vec<String> = store
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.text)
            .collect();
        assert_eq!(texts, vec!["phrase number zero", "phrase number two"]);
    }

    #[tokio::test]
    async fn test_remove_at_out_of_bounds() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.add("only one phrase here", "1").await;

        assert!(!store.remove_at(1).await);
        assert!(!store.remove_at(usize::MAX).await);
        assert_eq!(store.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_random_on_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.random().await.unwrap().is_none());

        store.add("the one and only phrase", "1").await;
        let picked = store.random().await.unwrap().unwrap();
        assert_eq!(picked.text, "the one and only phrase");
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("responses.json");
        std::fs::write(&path, "not json").unwrap();

        let store = CustomPhraseStore::new(&path);
        assert!(store.get_all().await.is_err());
        assert!(!store.add("cannot be stored now", "1").await);
        assert!(!store.remove_at(0).await);
    }

    #[tokio::test]
    async fn test_submit_validation() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let filter = ContentFilter::new();

        assert_eq!(store.submit("ngắn quá", "1", &filter).await, Err(PhraseRejection::TooShort));
        assert_eq!(
            store.submit("đồ chó ghẻ lười biếng", "1", &filter).await,
            Err(PhraseRejection::Offensive)
        );

        let stored = store
            .submit("  Bạn code như chạy deadline vậy  ", "1", &filter)
            .await
            .unwrap();
        assert_eq!(stored, "Bạn code như chạy deadline vậy");
        assert_eq!(store.get_all().await.unwrap()[0].text, stored);
    }

    #[tokio::test]
    async fn test_concurrent_adds_are_not_lost() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut handles = Vec::new();
        for i in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.add(&format!("concurrent phrase {}", i), "1").await
            }));
        }
        for handle in handles {
            assert!(handle.await.unwrap());
        }

        assert_eq!(store.get_all().await.unwrap().len(), 8);
    }
}
