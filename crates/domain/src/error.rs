use crate::{MovementPattern, ProfileField};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("at least one supported goal is required")]
    NoGoals,
    #[error("training days per week must be between 2 and 6 ({0})")]
    InvalidDaysPerWeek(u8),
    #[error("program length must be between 1 and 12 weeks ({0})")]
    InvalidWeeks(u8),
    #[error("training location is missing")]
    MissingLocation,
    #[error("home training with equipment requires at least one piece of equipment")]
    MissingEquipment,
    #[error("{0} must be in the range 0 to 100 ({1})")]
    ScoreOutOfRange(ProfileField, u8),
}

impl ValidationError {
    /// User-facing message in the given language.
    #[must_use]
    pub fn message(&self, language: Language) -> String {
        match language {
            Language::English => match self {
                ValidationError::NoGoals => "Please select at least one training goal.".into(),
                ValidationError::InvalidDaysPerWeek(_) => {
                    "Please choose between 2 and 6 training days per week.".into()
                }
                ValidationError::InvalidWeeks(_) => {
                    "Programs can last between 1 and 12 weeks.".into()
                }
                ValidationError::MissingLocation => "Please tell us where you train.".into(),
                ValidationError::MissingEquipment => {
                    "Please select the equipment you have at home.".into()
                }
                ValidationError::ScoreOutOfRange(field, _) => {
                    format!("The {field} is not valid.")
                }
            },
            Language::Italian => match self {
                ValidationError::NoGoals => "Seleziona almeno un obiettivo di allenamento.".into(),
                ValidationError::InvalidDaysPerWeek(_) => {
                    "Scegli tra 2 e 6 giorni di allenamento a settimana.".into()
                }
                ValidationError::InvalidWeeks(_) => {
                    "Un programma può durare da 1 a 12 settimane.".into()
                }
                ValidationError::MissingLocation => "Indica dove ti alleni.".into(),
                ValidationError::MissingEquipment => {
                    "Seleziona l'attrezzatura che hai a casa.".into()
                }
                ValidationError::ScoreOutOfRange(field, _) => {
                    format!("Il valore \"{}\" non è valido.", field.italian())
                }
            },
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Italian,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AdaptError {
    #[error("week {0} does not exist")]
    NoSuchWeek(usize),
    #[error("day {0} does not exist")]
    NoSuchDay(usize),
    #[error("no {0} exercise on this day")]
    NoSuchExercise(MovementPattern),
}

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum WriteError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

impl From<ReadError> for WriteError {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::Storage(storage) => WriteError::Storage(storage),
            ReadError::Other(other) => WriteError::Other(other),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("corrupt data: {0}")]
    Corrupt(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}
