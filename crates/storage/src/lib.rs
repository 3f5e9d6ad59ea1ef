#![warn(clippy::pedantic)]

use chrono::NaiveDate;
use repforge_domain as domain;
use strum::AsRefStr;
use uuid::Uuid;

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Number of suggestions kept per user. Older entries are dropped.
pub const MAX_SUGGESTIONS_PER_USER: usize = 100;

#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    #[strum(serialize = "swap_suggestions")]
    SwapSuggestions,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SwapSuggestion {
    pub user_id: Uuid,
    pub exercise: String,
    pub suggested_at: NaiveDate,
}

impl From<domain::SwapSuggestion> for SwapSuggestion {
    fn from(value: domain::SwapSuggestion) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::SwapSuggestion> for SwapSuggestion {
    fn from(value: &domain::SwapSuggestion) -> Self {
        Self {
            user_id: *value.user_id,
            exercise: value.exercise.clone(),
            suggested_at: value.suggested_at,
        }
    }
}

impl From<SwapSuggestion> for domain::SwapSuggestion {
    fn from(value: SwapSuggestion) -> Self {
        Self {
            user_id: value.user_id.into(),
            exercise: value.exercise,
            suggested_at: value.suggested_at,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<Error> for domain::StorageError {
    fn from(value: Error) -> Self {
        match value {
            Error::Io(err) if err.kind() == std::io::ErrorKind::PermissionDenied => {
                domain::StorageError::Unavailable
            }
            Error::Json(err) => domain::StorageError::Corrupt(err.to_string()),
            Error::Io(err) => domain::StorageError::Other(err.into()),
            Error::Other(err) => domain::StorageError::Other(err.into()),
        }
    }
}

impl From<Error> for domain::ReadError {
    fn from(value: Error) -> Self {
        domain::ReadError::Storage(value.into())
    }
}

impl From<Error> for domain::WriteError {
    fn from(value: Error) -> Self {
        domain::WriteError::Storage(value.into())
    }
}

fn suggestions_of(
    suggestions: Vec<SwapSuggestion>,
    user_id: domain::UserID,
) -> Vec<domain::SwapSuggestion> {
    suggestions
        .into_iter()
        .filter(|s| s.user_id == *user_id)
        .map(domain::SwapSuggestion::from)
        .collect()
}

/// Insert a suggestion, newest first, and keep the most recent entries of its user.
fn insert(suggestions: &mut Vec<SwapSuggestion>, suggestion: SwapSuggestion) {
    suggestions.insert(0, suggestion);

    let user_id = suggestions[0].user_id;
    let mut kept = 0;
    suggestions.retain(|s| {
        if s.user_id != user_id {
            return true;
        }
        kept += 1;
        kept <= MAX_SUGGESTIONS_PER_USER
    });
}
