use std::{fmt, slice::Iter};

use log::warn;

use crate::{Property, ValidationError};

pub const MAX_GOALS: usize = 3;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum CanonicalGoal {
    Strength,
    Hypertrophy,
    Toning,
    FatLoss,
    Endurance,
    SportPerformance,
    Wellness,
    MotorRecovery,
    PrePostPartum,
    DisabilityAdapted,
}

impl Property for CanonicalGoal {
    fn iter() -> Iter<'static, CanonicalGoal> {
        static GOALS: [CanonicalGoal; 10] = [
            CanonicalGoal::Strength,
            CanonicalGoal::Hypertrophy,
            CanonicalGoal::Toning,
            CanonicalGoal::FatLoss,
            CanonicalGoal::Endurance,
            CanonicalGoal::SportPerformance,
            CanonicalGoal::Wellness,
            CanonicalGoal::MotorRecovery,
            CanonicalGoal::PrePostPartum,
            CanonicalGoal::DisabilityAdapted,
        ];
        GOALS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            CanonicalGoal::Strength => "Strength",
            CanonicalGoal::Hypertrophy => "Hypertrophy",
            CanonicalGoal::Toning => "Toning",
            CanonicalGoal::FatLoss => "Fat Loss",
            CanonicalGoal::Endurance => "Endurance",
            CanonicalGoal::SportPerformance => "Sport Performance",
            CanonicalGoal::Wellness => "Wellness",
            CanonicalGoal::MotorRecovery => "Motor Recovery",
            CanonicalGoal::PrePostPartum => "Pre/Post-Partum",
            CanonicalGoal::DisabilityAdapted => "Disability Adapted",
        }
    }
}

impl CanonicalGoal {
    /// Parse a goal label, including legacy and Italian identifiers.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        let key = label
            .trim()
            .to_lowercase()
            .replace(['-', ' ', '/'], "_");

        match key.as_str() {
            "strength" | "forza" | "power" | "powerlifting" => Some(CanonicalGoal::Strength),
            "hypertrophy" | "muscle_gain" | "mass" | "massa" | "ipertrofia"
            | "massa_muscolare" | "bodybuilding" => Some(CanonicalGoal::Hypertrophy),
            "toning" | "tone" | "tonificazione" | "tonificare" | "definizione" => {
                Some(CanonicalGoal::Toning)
            }
            "fat_loss" | "weight_loss" | "lose_weight" | "dimagrimento" | "perdita_peso"
            | "dimagrire" => Some(CanonicalGoal::FatLoss),
            "endurance" | "resistenza" | "stamina" | "conditioning" => {
                Some(CanonicalGoal::Endurance)
            }
            "sport_performance" | "performance" | "athletic" | "prestazioni"
            | "prestazioni_sportive" | "sport" => Some(CanonicalGoal::SportPerformance),
            "wellness" | "general_fitness" | "health" | "benessere" | "salute" => {
                Some(CanonicalGoal::Wellness)
            }
            "motor_recovery" | "rehab" | "rehabilitation" | "recovery" | "riabilitazione"
            | "recupero_motorio" => Some(CanonicalGoal::MotorRecovery),
            "pre_post_partum" | "pregnancy" | "prenatal" | "postnatal" | "postpartum"
            | "gravidanza" | "post_parto" => Some(CanonicalGoal::PrePostPartum),
            "disability_adapted" | "disability" | "adaptive" | "disabilita"
            | "disabilità" => Some(CanonicalGoal::DisabilityAdapted),
            _ => None,
        }
    }

    /// Lower values win when goals are merged.
    #[must_use]
    pub fn priority(self) -> u8 {
        match self {
            CanonicalGoal::Strength => 0,
            CanonicalGoal::Hypertrophy => 1,
            _ => 2,
        }
    }

    #[must_use]
    pub fn config(self) -> GoalConfig {
        match self {
            CanonicalGoal::Strength => GoalConfig::new(3, 6, 180, 2),
            CanonicalGoal::Hypertrophy => GoalConfig::new(6, 12, 90, 2),
            CanonicalGoal::Toning => GoalConfig::new(10, 15, 60, 3),
            CanonicalGoal::FatLoss => GoalConfig::new(12, 20, 45, 3),
            CanonicalGoal::Endurance => GoalConfig::new(15, 25, 45, 3),
            CanonicalGoal::SportPerformance => GoalConfig::new(4, 8, 120, 2),
            CanonicalGoal::Wellness => GoalConfig::new(10, 15, 60, 4),
            CanonicalGoal::MotorRecovery | CanonicalGoal::PrePostPartum => {
                GoalConfig::new(10, 15, 90, 4)
            }
            CanonicalGoal::DisabilityAdapted => GoalConfig::new(8, 12, 90, 4),
        }
    }

    /// Number of working sets per exercise before any safety shrinkage.
    #[must_use]
    pub fn baseline_sets(self) -> u32 {
        match self {
            CanonicalGoal::Strength => 5,
            CanonicalGoal::Hypertrophy | CanonicalGoal::SportPerformance => 4,
            CanonicalGoal::Toning
            | CanonicalGoal::FatLoss
            | CanonicalGoal::Endurance
            | CanonicalGoal::Wellness => 3,
            CanonicalGoal::MotorRecovery
            | CanonicalGoal::PrePostPartum
            | CanonicalGoal::DisabilityAdapted => 2,
        }
    }
}

impl fmt::Display for CanonicalGoal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalConfig {
    pub rep_range_low: u32,
    pub rep_range_high: u32,
    pub rest_seconds: u32,
    pub target_rir: u8,
}

impl GoalConfig {
    const fn new(rep_range_low: u32, rep_range_high: u32, rest_seconds: u32, target_rir: u8) -> Self {
        Self {
            rep_range_low,
            rep_range_high,
            rest_seconds,
            target_rir,
        }
    }

    /// Reconcile the parameters of several goals, ordered by priority.
    ///
    /// The rep range is the intersection of all ranges. If the ranges do not
    /// overlap, the range of the first goal is kept.
    fn merge(goals: &[CanonicalGoal]) -> Option<Self> {
        let (first, rest) = goals.split_first()?;
        let primary = first.config();

        let mut merged = primary;

        for goal in rest {
            let config = goal.config();
            merged.rep_range_low = merged.rep_range_low.max(config.rep_range_low);
            merged.rep_range_high = merged.rep_range_high.min(config.rep_range_high);
            merged.target_rir = merged.target_rir.max(config.target_rir);
        }

        if merged.rep_range_low > merged.rep_range_high {
            merged.rep_range_low = primary.rep_range_low;
            merged.rep_range_high = primary.rep_range_high;
        }

        Some(merged)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedGoals {
    pub goals: Vec<CanonicalGoal>,
    pub config: GoalConfig,
}

impl NormalizedGoals {
    #[must_use]
    pub fn primary(&self) -> CanonicalGoal {
        self.goals[0]
    }
}

/// Map free-form goal labels onto the canonical goals.
///
/// Unknown labels are skipped. At most [`MAX_GOALS`] goals are kept, the
/// highest priority ones first.
pub fn normalize_goals<S: AsRef<str>>(labels: &[S]) -> Result<NormalizedGoals, ValidationError> {
    let mut goals: Vec<CanonicalGoal> = vec![];

    for label in labels {
        let label = label.as_ref();
        match CanonicalGoal::parse(label) {
            Some(goal) => {
                if !goals.contains(&goal) {
                    goals.push(goal);
                }
            }
            None => warn!("ignoring unknown goal \"{label}\""),
        }
    }

    // stable, so declaration order is kept within one priority
    goals.sort_by_key(|g| g.priority());

    if goals.len() > MAX_GOALS {
        warn!(
            "ignoring lower priority goals beyond {MAX_GOALS}: {:?}",
            &goals[MAX_GOALS..]
        );
        goals.truncate(MAX_GOALS);
    }

    let config = GoalConfig::merge(&goals).ok_or(ValidationError::NoGoals)?;

    Ok(NormalizedGoals { goals, config })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("strength", Some(CanonicalGoal::Strength))]
    #[case("  Forza ", Some(CanonicalGoal::Strength))]
    #[case("muscle-gain", Some(CanonicalGoal::Hypertrophy))]
    #[case("Massa Muscolare", Some(CanonicalGoal::Hypertrophy))]
    #[case("weight loss", Some(CanonicalGoal::FatLoss))]
    #[case("dimagrimento", Some(CanonicalGoal::FatLoss))]
    #[case("pre/post partum", Some(CanonicalGoal::PrePostPartum))]
    #[case("post-parto", Some(CanonicalGoal::PrePostPartum))]
    #[case("disabilità", Some(CanonicalGoal::DisabilityAdapted))]
    #[case("riabilitazione", Some(CanonicalGoal::MotorRecovery))]
    #[case("flexibility", None)]
    #[case("", None)]
    fn test_canonical_goal_parse(#[case] label: &str, #[case] expected: Option<CanonicalGoal>) {
        assert_eq!(CanonicalGoal::parse(label), expected);
    }

    #[test]
    fn test_canonical_goal_parse_names() {
        for goal in CanonicalGoal::iter() {
            assert_eq!(CanonicalGoal::parse(goal.name()), Some(*goal));
        }
    }

    #[test]
    fn test_goal_configs_valid() {
        for goal in CanonicalGoal::iter() {
            let config = goal.config();
            assert!(config.rep_range_low <= config.rep_range_high, "{goal}");
            assert!(config.target_rir <= 5, "{goal}");
            assert!(goal.baseline_sets() >= 1, "{goal}");
        }
    }

    #[test]
    fn test_normalize_goals_intersects_rep_ranges() {
        let normalized = normalize_goals(&["hypertrophy", "strength"]).unwrap();
        assert_eq!(
            normalized.goals,
            vec![CanonicalGoal::Strength, CanonicalGoal::Hypertrophy]
        );
        assert_eq!(normalized.primary(), CanonicalGoal::Strength);
        assert_eq!(
            normalized.config,
            GoalConfig {
                rep_range_low: 6,
                rep_range_high: 6,
                rest_seconds: 180,
                target_rir: 2,
            }
        );
        let strength = CanonicalGoal::Strength.config();
        let hypertrophy = CanonicalGoal::Hypertrophy.config();
        let width = normalized.config.rep_range_high - normalized.config.rep_range_low;
        assert!(width <= strength.rep_range_high - strength.rep_range_low);
        assert!(width <= hypertrophy.rep_range_high - hypertrophy.rep_range_low);
    }

    #[test]
    fn test_normalize_goals_disjoint_ranges() {
        let normalized = normalize_goals(&["endurance", "strength"]).unwrap();
        assert_eq!(
            normalized.goals,
            vec![CanonicalGoal::Strength, CanonicalGoal::Endurance]
        );
        assert_eq!(normalized.config.rep_range_low, 3);
        assert_eq!(normalized.config.rep_range_high, 6);
        assert_eq!(normalized.config.target_rir, 3);
    }

    #[test]
    fn test_normalize_goals_keeps_declaration_order_within_priority() {
        let normalized = normalize_goals(&["wellness", "toning", "hypertrophy"]).unwrap();
        assert_eq!(
            normalized.goals,
            vec![
                CanonicalGoal::Hypertrophy,
                CanonicalGoal::Wellness,
                CanonicalGoal::Toning
            ]
        );
        assert_eq!(normalized.config.rep_range_low, 10);
        assert_eq!(normalized.config.rep_range_high, 12);
        assert_eq!(normalized.config.rest_seconds, 90);
        assert_eq!(normalized.config.target_rir, 4);
    }

    #[test]
    fn test_normalize_goals_ignores_unknown_and_duplicates() {
        let normalized = normalize_goals(&["yoga", "massa", "Hypertrophy"]).unwrap();
        assert_eq!(normalized.goals, vec![CanonicalGoal::Hypertrophy]);
        assert_eq!(normalized.config, CanonicalGoal::Hypertrophy.config());
    }

    #[test]
    fn test_normalize_goals_truncates_by_priority() {
        let normalized =
            normalize_goals(&["toning", "wellness", "endurance", "strength"]).unwrap();
        assert_eq!(
            normalized.goals,
            vec![
                CanonicalGoal::Strength,
                CanonicalGoal::Toning,
                CanonicalGoal::Wellness
            ]
        );
        assert_eq!(normalized.primary(), CanonicalGoal::Strength);
    }

    #[rstest]
    #[case::empty(&[])]
    #[case::unknown(&["yoga", "pilates"])]
    fn test_normalize_goals_no_goals(#[case] labels: &[&str]) {
        assert_eq!(normalize_goals(labels), Err(ValidationError::NoGoals));
    }
}
