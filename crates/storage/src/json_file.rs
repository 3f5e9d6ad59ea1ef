use std::{
    collections::BTreeMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::Context;
use log::debug;
use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Key, SwapSuggestion, domain, insert, suggestions_of};

/// Key-value cache persisted as a single JSON object.
///
/// A missing file is treated as an empty cache. The store assumes a single
/// writer.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, serde_json::Value>, Error> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("{} does not exist yet", self.path.display());
                Ok(BTreeMap::new())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn get<T: DeserializeOwned + Default>(&self, key: Key) -> Result<T, Error> {
        match self.read_entries()?.remove(key.as_ref()) {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(T::default()),
        }
    }

    fn set<T: Serialize>(&self, key: Key, value: &T) -> Result<(), Error> {
        let mut entries = self.read_entries()?;
        entries.insert(key.as_ref().to_string(), serde_json::to_value(value)?);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
        }

        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}

impl domain::SwapSuggestionRepository for JsonFileStore {
    fn read_suggestions(
        &self,
        user_id: domain::UserID,
    ) -> Result<Vec<domain::SwapSuggestion>, domain::ReadError> {
        let suggestions: Vec<SwapSuggestion> = self.get(Key::SwapSuggestions)?;
        Ok(suggestions_of(suggestions, user_id))
    }

    fn write_suggestion(
        &self,
        suggestion: domain::SwapSuggestion,
    ) -> Result<domain::SwapSuggestion, domain::WriteError> {
        let mut suggestions: Vec<SwapSuggestion> = self.get(Key::SwapSuggestions)?;
        insert(&mut suggestions, SwapSuggestion::from(&suggestion));
        self.set(Key::SwapSuggestions, &suggestions)?;
        Ok(suggestion)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::{SuggestionService, SwapSuggestionRepository};

    fn suggestion(user: u128, exercise: &str, day: u32) -> domain::SwapSuggestion {
        domain::SwapSuggestion {
            user_id: user.into(),
            exercise: exercise.to_string(),
            suggested_at: NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
        }
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("cache.json"));
        assert_eq!(store.read_suggestions(1.into()).unwrap(), vec![]);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_write_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("cache.json");

        let store = JsonFileStore::new(&path);
        store.write_suggestion(suggestion(1, "Push-Up", 1)).unwrap();
        store.write_suggestion(suggestion(2, "Plank", 2)).unwrap();
        store.write_suggestion(suggestion(1, "Pull-Up", 3)).unwrap();

        let store = JsonFileStore::new(&path);
        assert_eq!(
            store.read_suggestions(1.into()).unwrap(),
            vec![suggestion(1, "Pull-Up", 3), suggestion(1, "Push-Up", 1)]
        );
        assert_eq!(
            store.read_suggestions(2.into()).unwrap(),
            vec![suggestion(2, "Plank", 2)]
        );

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"swap_suggestions\""));
    }

    #[test]
    fn test_corrupt_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"not json").unwrap();

        let store = JsonFileStore::new(file.path());
        assert!(matches!(
            store.read_suggestions(1.into()),
            Err(domain::ReadError::Storage(domain::StorageError::Corrupt(_)))
        ));
        assert!(matches!(
            store.write_suggestion(suggestion(1, "Push-Up", 1)),
            Err(domain::WriteError::Storage(domain::StorageError::Corrupt(_)))
        ));
    }

    #[test]
    fn test_suggestion_service() {
        let dir = tempfile::tempdir().unwrap();
        let service = SuggestionService::new(JsonFileStore::new(dir.path().join("cache.json")));
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();

        assert!(service.should_suggest(1.into(), "Leg Press", today).unwrap());
        service.record_suggestion(1.into(), "Leg Press", today).unwrap();
        assert!(!service.should_suggest(1.into(), "leg press", today).unwrap());
    }
}
