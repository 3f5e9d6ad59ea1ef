use std::fmt;

use derive_more::Deref;
use uuid::Uuid;

use crate::{
    AerobicPreference, EquipmentContext, EquipmentSet, Level, Location, Muscle, PainArea,
    ValidationError,
};

pub const DEFAULT_WEEKS: u8 = 4;

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserID(Uuid);

impl UserID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for UserID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for UserID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

impl fmt::Display for UserID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Female,
    Male,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HomeSetup {
    #[default]
    Bodyweight,
    Equipped,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    Sedentary,
    #[default]
    Light,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// Training days per week if the user did not choose any.
    #[must_use]
    pub fn default_days_per_week(self) -> u8 {
        match self {
            ActivityLevel::Sedentary => 2,
            ActivityLevel::Light => 3,
            ActivityLevel::Active => 4,
            ActivityLevel::VeryActive => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    QuizScore,
    PracticalScore,
}

impl ProfileField {
    #[must_use]
    pub fn italian(self) -> &'static str {
        match self {
            ProfileField::QuizScore => "punteggio quiz",
            ProfileField::PracticalScore => "punteggio test pratico",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ProfileField::QuizScore => "quiz score",
                ProfileField::PracticalScore => "practical test score",
            }
        )
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct UserProfile {
    pub id: UserID,
    pub name: String,
    pub age: Option<u8>,
    pub sex: Option<Sex>,
    pub location: Option<Location>,
    pub home_setup: HomeSetup,
    pub equipment: EquipmentSet,
    pub goals: Vec<String>,
    pub activity_level: ActivityLevel,
    /// Self-declared level. Derived from the quiz score if missing.
    pub level: Option<Level>,
    pub quiz_score: u8,
    /// Result of the practical test. The quiz score is trusted if missing.
    pub practical_score: Option<u8>,
    pub pain_areas: Vec<PainArea>,
    pub focus_muscles: Vec<Muscle>,
    pub days_per_week: Option<u8>,
    pub weeks: Option<u8>,
    pub aerobic: Option<AerobicPreference>,
    pub body_fat: Option<f32>,
}

impl UserProfile {
    #[must_use]
    pub fn days_per_week(&self) -> u8 {
        self.days_per_week
            .unwrap_or_else(|| self.activity_level.default_days_per_week())
    }

    #[must_use]
    pub fn weeks(&self) -> u8 {
        self.weeks.unwrap_or(DEFAULT_WEEKS)
    }

    #[must_use]
    pub fn declared_level(&self) -> Level {
        self.level
            .unwrap_or_else(|| Level::from_score(self.quiz_score))
    }

    #[must_use]
    pub fn practical_score(&self) -> u8 {
        self.practical_score.unwrap_or(self.quiz_score)
    }

    pub fn equipment_context(&self) -> Result<EquipmentContext, ValidationError> {
        match (self.location, self.home_setup) {
            (None, _) => Err(ValidationError::MissingLocation),
            (Some(Location::Gym), _) => Ok(EquipmentContext::Gym),
            (Some(Location::Home), HomeSetup::Bodyweight) => Ok(EquipmentContext::HomeBodyweight),
            (Some(Location::Home), HomeSetup::Equipped) => {
                if self.equipment.is_empty() {
                    Err(ValidationError::MissingEquipment)
                } else {
                    Ok(EquipmentContext::HomeEquipped)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::Equipment;

    #[test]
    fn test_user_id_nil() {
        assert!(UserID::nil().is_nil());
        assert!(!UserID::from(1).is_nil());
    }

    #[test]
    fn test_profile_field_display() {
        assert_eq!(ProfileField::QuizScore.to_string(), "quiz score");
        assert_eq!(ProfileField::PracticalScore.italian(), "punteggio test pratico");
    }

    #[rstest]
    #[case(None, ActivityLevel::Sedentary, 2)]
    #[case(None, ActivityLevel::VeryActive, 5)]
    #[case(Some(6), ActivityLevel::Sedentary, 6)]
    fn test_days_per_week(
        #[case] days_per_week: Option<u8>,
        #[case] activity_level: ActivityLevel,
        #[case] expected: u8,
    ) {
        let profile = UserProfile {
            days_per_week,
            activity_level,
            ..UserProfile::default()
        };
        assert_eq!(profile.days_per_week(), expected);
    }

    #[test]
    fn test_declared_level() {
        let profile = UserProfile {
            quiz_score: 80,
            ..UserProfile::default()
        };
        assert_eq!(profile.declared_level(), Level::Advanced);
        assert_eq!(profile.practical_score(), 80);

        let profile = UserProfile {
            level: Some(Level::Beginner),
            ..profile
        };
        assert_eq!(profile.declared_level(), Level::Beginner);
    }

    #[rstest]
    #[case(None, HomeSetup::Bodyweight, vec![], Err(ValidationError::MissingLocation))]
    #[case(Some(Location::Gym), HomeSetup::Equipped, vec![], Ok(EquipmentContext::Gym))]
    #[case(Some(Location::Home), HomeSetup::Bodyweight, vec![], Ok(EquipmentContext::HomeBodyweight))]
    #[case(Some(Location::Home), HomeSetup::Equipped, vec![], Err(ValidationError::MissingEquipment))]
    #[case(
        Some(Location::Home),
        HomeSetup::Equipped,
        vec![Equipment::Dumbbell],
        Ok(EquipmentContext::HomeEquipped)
    )]
    fn test_equipment_context(
        #[case] location: Option<Location>,
        #[case] home_setup: HomeSetup,
        #[case] equipment: Vec<Equipment>,
        #[case] expected: Result<EquipmentContext, ValidationError>,
    ) {
        let profile = UserProfile {
            location,
            home_setup,
            equipment: equipment.into_iter().collect(),
            ..UserProfile::default()
        };
        assert_eq!(profile.equipment_context(), expected);
    }
}
