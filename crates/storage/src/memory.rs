use std::{cell::RefCell, collections::BTreeMap};

use log::debug;
use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Key, SwapSuggestion, domain, insert, suggestions_of};

/// Key-value cache held in memory.
///
/// Values are stored as JSON, so the store behaves like the file-backed one.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn get<T: DeserializeOwned + Default>(&self, key: Key) -> Result<T, Error> {
        match self.entries.borrow().get(key.as_ref()) {
            Some(value) => Ok(serde_json::from_str(value)?),
            None => {
                debug!("no entry for {}", key.as_ref());
                Ok(T::default())
            }
        }
    }

    fn set<T: Serialize>(&self, key: Key, value: &T) -> Result<(), Error> {
        let value = serde_json::to_string(value)?;
        self.entries
            .borrow_mut()
            .insert(key.as_ref().to_string(), value);
        Ok(())
    }
}

impl domain::SwapSuggestionRepository for MemoryStore {
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
    use rstest::rstest;

    use super::*;
    use crate::domain::{SuggestionService, SwapSuggestionRepository};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, day).unwrap()
    }

    #[test]
    fn test_read_suggestions_empty() {
        assert_eq!(MemoryStore::new().read_suggestions(1.into()).unwrap(), vec![]);
    }

    #[test]
    fn test_write_suggestion() {
        let store = MemoryStore::new();
        let suggestion = domain::SwapSuggestion {
            user_id: 1.into(),
            exercise: "Push-Up".to_string(),
            suggested_at: date(1),
        };

        assert_eq!(
            store.write_suggestion(suggestion.clone()).unwrap(),
            suggestion
        );
        assert_eq!(store.read_suggestions(1.into()).unwrap(), vec![suggestion]);
        assert_eq!(store.read_suggestions(2.into()).unwrap(), vec![]);
    }

    #[test]
    fn test_read_suggestions_corrupt() {
        let store = MemoryStore::new();
        store
            .entries
            .borrow_mut()
            .insert(Key::SwapSuggestions.as_ref().to_string(), "{".to_string());

        assert!(matches!(
            store.read_suggestions(1.into()),
            Err(domain::ReadError::Storage(domain::StorageError::Corrupt(_)))
        ));
    }

    #[rstest]
    #[case(2, false)]
    #[case(8, true)]
    fn test_suggestion_service(#[case] day: u32, #[case] expected: bool) {
        let service = SuggestionService::new(MemoryStore::new());
        service
            .record_suggestion(1.into(), "Lat Pulldown", date(1))
            .unwrap();

        assert_eq!(
            service
                .should_suggest(1.into(), "Lat Pulldown", date(day))
                .unwrap(),
            expected
        );
    }
}
