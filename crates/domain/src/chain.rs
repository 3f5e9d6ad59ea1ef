use crate::{Location, MovementPattern};

/// Exercises of one pattern and location, ordered from easiest to hardest.
#[derive(Debug, PartialEq, Eq)]
pub struct ProgressionChain {
    pub pattern: MovementPattern,
    pub location: Location,
    pub exercises: &'static [&'static str],
}

impl ProgressionChain {
    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    #[must_use]
    pub fn last_position(&self) -> usize {
        self.exercises.len().saturating_sub(1)
    }

    #[must_use]
    pub fn clamp(&self, position: isize) -> usize {
        usize::try_from(position.max(0))
            .unwrap_or_default()
            .min(self.last_position())
    }

    #[must_use]
    pub fn exercise(&self, position: usize) -> &'static str {
        self.exercises[position.min(self.last_position())]
    }

    /// Position of an exercise, matched case-insensitively.
    ///
    /// An exact match wins. Otherwise the longest chain name contained in the
    /// given name is used, and finally the first chain name containing it.
    #[must_use]
    pub fn position(&self, exercise: &str) -> Option<usize> {
        let needle = exercise.trim().to_lowercase();

        if needle.is_empty() {
            return None;
        }

        let names = self
            .exercises
            .iter()
            .map(|e| e.to_lowercase())
            .collect::<Vec<_>>();

        names
            .iter()
            .position(|n| *n == needle)
            .or_else(|| {
                names
                    .iter()
                    .enumerate()
                    .filter(|(_, n)| needle.contains(n.as_str()))
                    .max_by_key(|(i, n)| (n.len(), std::cmp::Reverse(*i)))
                    .map(|(i, _)| i)
            })
            .or_else(|| names.iter().position(|n| n.contains(&needle)))
    }
}

#[must_use]
pub fn chain(pattern: MovementPattern, location: Location) -> &'static ProgressionChain {
    CHAINS
        .iter()
        .find(|c| c.pattern == pattern && c.location == location)
        .unwrap_or(&CHAINS[0])
}

static CHAINS: [ProgressionChain; 14] = [
    ProgressionChain {
        pattern: MovementPattern::LowerPush,
        location: Location::Home,
        exercises: &[
            "Assisted Squat",
            "Bodyweight Squat",
            "Split Squat",
            "Bulgarian Split Squat",
            "Shrimp Squat",
            "Pistol Squat",
        ],
    },
    ProgressionChain {
        pattern: MovementPattern::LowerPush,
        location: Location::Gym,
        exercises: &[
            "Leg Press",
            "Goblet Squat",
            "Hack Squat",
            "Barbell Back Squat",
            "Barbell Front Squat",
        ],
    },
    ProgressionChain {
        pattern: MovementPattern::LowerPull,
        location: Location::Home,
        exercises: &[
            "Glute Bridge",
            "Single-Leg Glute Bridge",
            "Single-Leg Romanian Deadlift",
            "Sliding Leg Curl",
            "Nordic Curl Negative",
        ],
    },
    ProgressionChain {
        pattern: MovementPattern::LowerPull,
        location: Location::Gym,
        exercises: &[
            "Lying Leg Curl",
            "Cable Pull-Through",
            "Dumbbell Romanian Deadlift",
            "Barbell Romanian Deadlift",
            "Barbell Hip Thrust",
            "Barbell Deadlift",
        ],
    },
    ProgressionChain {
        pattern: MovementPattern::HorizontalPush,
        location: Location::Home,
        exercises: &[
            "Wall Push-Up",
            "Incline Push-Up",
            "Knee Push-Up",
            "Push-Up",
            "Decline Push-Up",
            "Archer Push-Up",
            "One-Arm Push-Up",
        ],
    },
    ProgressionChain {
        pattern: MovementPattern::HorizontalPush,
        location: Location::Gym,
        exercises: &[
            "Machine Chest Press",
            "Dumbbell Bench Press",
            "Barbell Bench Press",
        ],
    },
    ProgressionChain {
        pattern: MovementPattern::VerticalPush,
        location: Location::Home,
        exercises: &[
            "Hands-Elevated Pike Push-Up",
            "Pike Push-Up",
            "Feet-Elevated Pike Push-Up",
            "Wall Handstand Push-Up",
        ],
    },
    ProgressionChain {
        pattern: MovementPattern::VerticalPush,
        location: Location::Gym,
        exercises: &[
            "Machine Shoulder Press",
            "Dumbbell Shoulder Press",
            "Barbell Overhead Press",
        ],
    },
    ProgressionChain {
        pattern: MovementPattern::VerticalPull,
        location: Location::Home,
        exercises: &[
            "Prone Lat Pulldown",
            "Floor Slide Pulldown",
            "Negative Pull-Up",
            "Chin-Up",
            "Pull-Up",
            "Archer Pull-Up",
        ],
    },
    ProgressionChain {
        pattern: MovementPattern::VerticalPull,
        location: Location::Gym,
        exercises: &[
            "Lat Pulldown",
            "Machine Assisted Pull-Up",
            "Chin-Up",
            "Pull-Up",
        ],
    },
    ProgressionChain {
        pattern: MovementPattern::HorizontalPull,
        location: Location::Home,
        exercises: &[
            "Towel Row",
            "Table Inverted Row",
            "Feet-Elevated Inverted Row",
            "Archer Inverted Row",
        ],
    },
    ProgressionChain {
        pattern: MovementPattern::HorizontalPull,
        location: Location::Gym,
        exercises: &[
            "Chest-Supported Machine Row",
            "Seated Cable Row",
            "One-Arm Dumbbell Row",
            "Barbell Row",
        ],
    },
    ProgressionChain {
        pattern: MovementPattern::Core,
        location: Location::Home,
        exercises: &[
            "Dead Bug",
            "Plank",
            "Side Plank",
            "Hollow Body Hold",
            "Dragon Flag",
        ],
    },
    ProgressionChain {
        pattern: MovementPattern::Core,
        location: Location::Gym,
        exercises: &[
            "Pallof Press",
            "Cable Crunch",
            "Hanging Knee Raise",
            "Barbell Rollout",
            "Hanging Leg Raise",
        ],
    },
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{EquipmentContext, Property, catalog};

    #[test]
    fn test_chains_complete() {
        for pattern in MovementPattern::iter() {
            for location in [Location::Home, Location::Gym] {
                let chain = chain(*pattern, location);
                assert_eq!(chain.pattern, *pattern);
                assert_eq!(chain.location, location);
                assert!(chain.len() >= 3);
            }
        }
    }

    #[test]
    fn test_chains_match_catalog() {
        for chain in &CHAINS {
            let context = match chain.location {
                Location::Home => EquipmentContext::HomeEquipped,
                Location::Gym => EquipmentContext::Gym,
            };
            let mut previous = 0;
            for name in chain.exercises {
                let variant =
                    catalog::variant(name).unwrap_or_else(|| panic!("unknown exercise {name}"));
                assert_eq!(variant.pattern, chain.pattern, "{name}");
                assert!(!variant.corrective, "{name}");
                assert!(context.admits(variant.equipment_class), "{name}");
                assert!(
                    variant.difficulty >= previous,
                    "{name} is easier than its predecessor"
                );
                previous = variant.difficulty;
            }
        }
    }

    #[test]
    fn test_chains_unambiguous() {
        for chain in &CHAINS {
            for (i, name) in chain.exercises.iter().enumerate() {
                assert_eq!(chain.position(name), Some(i), "{name}");
            }
        }
    }

    #[rstest]
    #[case(MovementPattern::LowerPush, "bulgarian split squat", Some(3))]
    #[case(MovementPattern::LowerPush, "Split Squat", Some(2))]
    #[case(MovementPattern::LowerPush, "Tempo Bulgarian Split Squat", Some(3))]
    #[case(MovementPattern::HorizontalPush, "Paused Decline Push-Up", Some(4))]
    #[case(MovementPattern::HorizontalPull, "inverted row", Some(1))]
    #[case(MovementPattern::LowerPush, "Reverse Lunge", None)]
    #[case(MovementPattern::LowerPush, "  ", None)]
    fn test_position(
        #[case] pattern: MovementPattern,
        #[case] exercise: &str,
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(chain(pattern, Location::Home).position(exercise), expected);
    }

    #[rstest]
    #[case(-3, 0)]
    #[case(0, 0)]
    #[case(4, 4)]
    #[case(5, 5)]
    #[case(42, 5)]
    fn test_clamp(#[case] position: isize, #[case] expected: usize) {
        let chain = chain(MovementPattern::LowerPush, Location::Home);
        assert_eq!(chain.clamp(position), expected);
        assert_eq!(chain.exercise(expected), chain.exercises[expected]);
    }
}
