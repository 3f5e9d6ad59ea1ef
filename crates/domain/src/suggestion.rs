use chrono::NaiveDate;
use log::{debug, error};

use crate::{
    EquipmentContext, EquipmentSet, MovementPattern, ReadError, Selection, SelectionRequest,
    UserID, WriteError, catalog, select_variant,
};

/// Days before the same exercise swap may be suggested again.
pub const SUGGESTION_COOLDOWN_DAYS: i64 = 7;

#[allow(clippy::missing_errors_doc)]
pub trait SwapSuggestionRepository {
    fn read_suggestions(&self, user_id: UserID) -> Result<Vec<SwapSuggestion>, ReadError>;
    fn write_suggestion(&self, suggestion: SwapSuggestion) -> Result<SwapSuggestion, WriteError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapSuggestion {
    pub user_id: UserID,
    pub exercise: String,
    pub suggested_at: NaiveDate,
}

impl SwapSuggestion {
    fn concerns(&self, exercise: &str) -> bool {
        self.exercise.trim().eq_ignore_ascii_case(exercise.trim())
    }
}

pub struct SuggestionService<R> {
    repository: R,
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::Unavailable) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: SwapSuggestionRepository> SuggestionService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Whether a swap for the exercise may be suggested on the given day.
    pub fn should_suggest(
        &self,
        user_id: UserID,
        exercise: &str,
        today: NaiveDate,
    ) -> Result<bool, ReadError> {
        let suggestions = log_on_error!(
            self.repository.read_suggestions(user_id),
            ReadError,
            "read",
            "swap suggestions"
        )?;

        Ok(suggestions
            .iter()
            .filter(|s| s.user_id == user_id && s.concerns(exercise))
            .all(|s| (today - s.suggested_at).num_days() >= SUGGESTION_COOLDOWN_DAYS))
    }

    pub fn record_suggestion(
        &self,
        user_id: UserID,
        exercise: &str,
        today: NaiveDate,
    ) -> Result<SwapSuggestion, WriteError> {
        log_on_error!(
            self.repository.write_suggestion(SwapSuggestion {
                user_id,
                exercise: exercise.trim().to_string(),
                suggested_at: today,
            }),
            WriteError,
            "write",
            "swap suggestion"
        )
    }

    /// Suggest another variant for an exercise, unless a swap was suggested recently.
    ///
    /// A suggestion is recorded before it is returned.
    #[allow(clippy::too_many_arguments)]
    pub fn suggest_swap(
        &self,
        user_id: UserID,
        exercise: &str,
        pattern: MovementPattern,
        context: EquipmentContext,
        usable: &EquipmentSet,
        max_difficulty: u8,
        today: NaiveDate,
    ) -> Result<Option<Selection>, WriteError> {
        if !self.should_suggest(user_id, exercise, today)? {
            debug!("swap for {exercise} was suggested recently");
            return Ok(None);
        }

        let pool = catalog::pool(pattern, context, usable, max_difficulty);
        let Some(current) = pool
            .iter()
            .position(|v| v.name.eq_ignore_ascii_case(exercise.trim()))
        else {
            debug!("{exercise} is not part of the {pattern} pool");
            return Ok(None);
        };

        if pool.len() < 2 {
            return Ok(None);
        }

        let selection = select_variant(&SelectionRequest {
            pattern,
            context,
            usable,
            rotation: current + 1,
            max_difficulty,
            requested: None,
        });

        self.record_suggestion(user_id, exercise, today)?;

        Ok(Some(selection))
    }
}
