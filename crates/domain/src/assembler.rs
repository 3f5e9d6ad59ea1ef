use std::{collections::BTreeMap, fmt};

use chrono::Weekday;
use log::debug;

use crate::{
    AerobicPreference, AerobicSession, DayType, EquipmentContext, EquipmentSet, MovementPattern,
    Muscle, NormalizedGoals, SafetyCaps, SelectionRequest, Weight, aerobic, catalog,
    select_variant,
};

pub const MAX_FOCUS_BONUS_SETS: u32 = 3;
/// Every n-th week is a deload week.
pub const DELOAD_INTERVAL: usize = 4;

const CORRECTIVE_SETS: u32 = 2;
const CORRECTIVE_MIN_RIR: u8 = 4;
const CORRECTIVE_REPS: (u32, u32) = (10, 15);
const CORRECTIVE_REST_SECONDS: u32 = 60;

const DAY_TYPES: [DayType; 3] = [DayType::Heavy, DayType::Volume, DayType::Moderate];

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DaySplit {
    FullBody,
    Upper,
    Lower,
    Push,
    Pull,
    Legs,
    Conditioning,
}

impl DaySplit {
    #[must_use]
    pub fn patterns(self) -> &'static [MovementPattern] {
        match self {
            DaySplit::FullBody => &[
                MovementPattern::LowerPush,
                MovementPattern::HorizontalPush,
                MovementPattern::VerticalPull,
                MovementPattern::LowerPull,
                MovementPattern::VerticalPush,
                MovementPattern::HorizontalPull,
                MovementPattern::Core,
            ],
            DaySplit::Upper => &[
                MovementPattern::HorizontalPush,
                MovementPattern::VerticalPull,
                MovementPattern::VerticalPush,
                MovementPattern::HorizontalPull,
            ],
            DaySplit::Lower | DaySplit::Legs => &[
                MovementPattern::LowerPush,
                MovementPattern::LowerPull,
                MovementPattern::Core,
            ],
            DaySplit::Push => &[
                MovementPattern::HorizontalPush,
                MovementPattern::VerticalPush,
                MovementPattern::Core,
            ],
            DaySplit::Pull => &[
                MovementPattern::VerticalPull,
                MovementPattern::HorizontalPull,
                MovementPattern::Core,
            ],
            DaySplit::Conditioning => &[],
        }
    }

    /// Day templates for a number of training days per week.
    #[must_use]
    pub fn template(days_per_week: u8) -> &'static [DaySplit] {
        match days_per_week {
            0..=1 => &[DaySplit::FullBody],
            2 => &[DaySplit::FullBody, DaySplit::FullBody],
            3 => &[DaySplit::FullBody, DaySplit::FullBody, DaySplit::FullBody],
            4 => &[
                DaySplit::Upper,
                DaySplit::Lower,
                DaySplit::Upper,
                DaySplit::Lower,
            ],
            5 => &[
                DaySplit::Push,
                DaySplit::Pull,
                DaySplit::Legs,
                DaySplit::Upper,
                DaySplit::Lower,
            ],
            _ => &[
                DaySplit::Push,
                DaySplit::Pull,
                DaySplit::Legs,
                DaySplit::Push,
                DaySplit::Pull,
                DaySplit::Legs,
            ],
        }
    }
}

impl fmt::Display for DaySplit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                DaySplit::FullBody => "Full body",
                DaySplit::Upper => "Upper body",
                DaySplit::Lower => "Lower body",
                DaySplit::Push => "Push",
                DaySplit::Pull => "Pull",
                DaySplit::Legs => "Legs",
                DaySplit::Conditioning => "Conditioning",
            }
        )
    }
}

#[must_use]
pub fn weekdays(days_per_week: u8) -> &'static [Weekday] {
    match days_per_week {
        0..=2 => &[Weekday::Mon, Weekday::Thu],
        3 => &[Weekday::Mon, Weekday::Wed, Weekday::Fri],
        4 => &[Weekday::Mon, Weekday::Tue, Weekday::Thu, Weekday::Fri],
        5 => &[
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Fri,
            Weekday::Sat,
        ],
        _ => &[
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
        ],
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrescribedExercise {
    pub pattern: MovementPattern,
    pub exercise: String,
    pub sets: u32,
    pub reps_low: u32,
    pub reps_high: u32,
    pub rest_seconds: u32,
    pub rir: u8,
    pub weight: Option<Weight>,
    pub corrective: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayWorkout {
    pub weekday: Weekday,
    pub split: DaySplit,
    pub day_type: Option<DayType>,
    pub exercises: Vec<PrescribedExercise>,
    pub aerobic: Option<AerobicSession>,
}

impl DayWorkout {
    #[must_use]
    pub fn conditioning(weekday: Weekday, session: AerobicSession) -> Self {
        Self {
            weekday,
            split: DaySplit::Conditioning,
            day_type: None,
            exercises: vec![],
            aerobic: Some(session),
        }
    }

    #[must_use]
    pub fn exercise(&self, pattern: MovementPattern) -> Option<&PrescribedExercise> {
        self.exercises.iter().find(|e| e.pattern == pattern)
    }

    #[must_use]
    pub fn is_strength(&self) -> bool {
        !self.exercises.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklySplit {
    /// Week number, starting at 1.
    pub index: usize,
    pub deload: bool,
    pub days: Vec<DayWorkout>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub goals: NormalizedGoals,
    pub caps: SafetyCaps,
    pub context: EquipmentContext,
    pub usable: EquipmentSet,
    pub weeks: Vec<WeeklySplit>,
}

/// Everything needed to assemble the weeks of a program.
#[derive(Debug, Clone, Copy)]
pub struct Blueprint<'a> {
    pub goals: &'a NormalizedGoals,
    pub caps: &'a SafetyCaps,
    pub context: EquipmentContext,
    pub usable: &'a EquipmentSet,
    pub days_per_week: u8,
    pub focus_muscles: &'a [Muscle],
    pub aerobic: Option<&'a AerobicPreference>,
}

#[must_use]
pub fn is_deload_week(week: usize) -> bool {
    week > 0 && week % DELOAD_INTERVAL == 0
}

#[must_use]
pub fn assemble_program(blueprint: &Blueprint, weeks: usize) -> Program {
    Program {
        goals: blueprint.goals.clone(),
        caps: blueprint.caps.clone(),
        context: blueprint.context,
        usable: blueprint.usable.clone(),
        weeks: (1..=weeks).map(|week| assemble_week(blueprint, week)).collect(),
    }
}

#[must_use]
pub fn assemble_week(blueprint: &Blueprint, week: usize) -> WeeklySplit {
    let deload = is_deload_week(week);
    let mut occurrences: BTreeMap<MovementPattern, usize> = BTreeMap::new();

    let days = DaySplit::template(blueprint.days_per_week)
        .iter()
        .zip(weekdays(blueprint.days_per_week))
        .enumerate()
        .map(|(i, (split, weekday))| {
            let day_type = DAY_TYPES[i % DAY_TYPES.len()];
            let mut bonus_sets = 0;
            let exercises = split
                .patterns()
                .iter()
                .map(|pattern| {
                    let occurrence = occurrences.entry(*pattern).or_default();
                    let rotation = week.saturating_sub(1) + *occurrence;
                    *occurrence += 1;
                    prescribe(blueprint, *pattern, day_type, rotation, deload, &mut bonus_sets)
                })
                .collect();
            DayWorkout {
                weekday: *weekday,
                split: *split,
                day_type: Some(day_type),
                exercises,
                aerobic: None,
            }
        })
        .collect();

    let split = WeeklySplit {
        index: week,
        deload,
        days,
    };

    match blueprint.aerobic {
        Some(preference) => aerobic::integrate(split, preference),
        None => split,
    }
}

fn prescribe(
    blueprint: &Blueprint,
    pattern: MovementPattern,
    day_type: DayType,
    rotation: usize,
    deload: bool,
    bonus_sets: &mut u32,
) -> PrescribedExercise {
    let cap = blueprint.caps.for_pattern(day_type, pattern);

    if blueprint.caps.corrective_only(pattern) {
        debug!("{pattern} limited to corrective work");
        return PrescribedExercise {
            pattern,
            exercise: catalog::corrective(pattern).name.to_string(),
            sets: CORRECTIVE_SETS.min(cap.max_sets),
            reps_low: CORRECTIVE_REPS.0,
            reps_high: CORRECTIVE_REPS.1,
            rest_seconds: CORRECTIVE_REST_SECONDS,
            rir: cap.target_rir.max(CORRECTIVE_MIN_RIR),
            weight: None,
            corrective: true,
        };
    }

    let selection = select_variant(&SelectionRequest {
        pattern,
        context: blueprint.context,
        usable: blueprint.usable,
        rotation,
        max_difficulty: cap.max_difficulty,
        requested: None,
    });
    debug!("{pattern}: {} ({})", selection.exercise, selection.reason);

    let mut sets = cap.max_sets.saturating_sub(1).max(1);

    if deload {
        sets = sets.div_ceil(2);
    } else if *bonus_sets < MAX_FOCUS_BONUS_SETS
        && sets < cap.max_sets
        && selection.variant.is_some_and(|v| {
            blueprint
                .focus_muscles
                .iter()
                .any(|m| v.targets(*m))
        })
    {
        sets += 1;
        *bonus_sets += 1;
    }

    let config = blueprint.goals.config;
    let goal_rir = match day_type {
        DayType::Heavy => config.target_rir.saturating_sub(1),
        DayType::Moderate => config.target_rir,
        DayType::Volume => config.target_rir + 1,
    };
    let mut rir = cap.target_rir.max(goal_rir).min(5);
    if deload {
        rir = (rir + 1).min(5);
    }

    let middle = u32::midpoint(config.rep_range_low, config.rep_range_high);
    let (reps_low, reps_high) = match day_type {
        DayType::Heavy => (config.rep_range_low, middle),
        DayType::Moderate => (config.rep_range_low, config.rep_range_high),
        DayType::Volume => (middle, config.rep_range_high),
    };

    debug_assert!(cap.admits(rir, sets), "{pattern} exceeds {cap}");

    PrescribedExercise {
        pattern,
        exercise: selection.exercise,
        sets,
        reps_low,
        reps_high,
        rest_seconds: config.rest_seconds,
        rir,
        weight: None,
        corrective: false,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        BodyArea, CanonicalGoal, Level, PainArea, Property, SafetyContext, Severity,
        compute_safety_caps, normalize_goals,
    };

    fn blueprint_parts(
        level: Level,
        goals: &[&str],
        pain_areas: Vec<PainArea>,
    ) -> (NormalizedGoals, SafetyCaps) {
        let goals = normalize_goals(goals).unwrap();
        let caps = compute_safety_caps(&SafetyContext::new(
            level,
            goals.primary(),
            50,
            50,
            pain_areas,
        ));
        (goals, caps)
    }

    fn blueprint<'a>(
        goals: &'a NormalizedGoals,
        caps: &'a SafetyCaps,
        context: EquipmentContext,
        usable: &'a EquipmentSet,
        days_per_week: u8,
        focus_muscles: &'a [Muscle],
    ) -> Blueprint<'a> {
        Blueprint {
            goals,
            caps,
            context,
            usable,
            days_per_week,
            focus_muscles,
            aerobic: None,
        }
    }

    #[rstest]
    #[case(2, vec![DaySplit::FullBody, DaySplit::FullBody])]
    #[case(4, vec![DaySplit::Upper, DaySplit::Lower, DaySplit::Upper, DaySplit::Lower])]
    #[case(5, vec![DaySplit::Push, DaySplit::Pull, DaySplit::Legs, DaySplit::Upper, DaySplit::Lower])]
    fn test_template(#[case] days_per_week: u8, #[case] expected: Vec<DaySplit>) {
        assert_eq!(DaySplit::template(days_per_week), expected);
    }

    #[test]
    fn test_templates_cover_all_patterns() {
        for days_per_week in 2..=6 {
            assert_eq!(
                DaySplit::template(days_per_week).len(),
                weekdays(days_per_week).len()
            );
            let covered = DaySplit::template(days_per_week)
                .iter()
                .flat_map(|s| s.patterns())
                .collect::<BTreeSet<_>>();
            assert_eq!(covered.len(), MovementPattern::iter().len());
        }
    }

    #[rstest]
    #[case(1, false)]
    #[case(3, false)]
    #[case(4, true)]
    #[case(8, true)]
    #[case(9, false)]
    fn test_is_deload_week(#[case] week: usize, #[case] expected: bool) {
        assert_eq!(is_deload_week(week), expected);
    }

    #[test]
    fn test_day_types_rotate() {
        let (goals, caps) = blueprint_parts(Level::Intermediate, &["hypertrophy"], vec![]);
        let usable = EquipmentSet::all();
        let week = assemble_week(
            &blueprint(&goals, &caps, EquipmentContext::Gym, &usable, 3, &[]),
            1,
        );
        assert_eq!(
            week.days.iter().map(|d| d.day_type).collect::<Vec<_>>(),
            vec![
                Some(DayType::Heavy),
                Some(DayType::Volume),
                Some(DayType::Moderate)
            ]
        );
        assert_eq!(
            week.days.iter().map(|d| d.weekday).collect::<Vec<_>>(),
            vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]
        );
    }

    #[test]
    fn test_prescriptions_within_caps() {
        let usable = EquipmentSet::all();
        for goal in CanonicalGoal::iter() {
            for level in Level::iter() {
                let (goals, caps) = blueprint_parts(*level, &[goal.name()], vec![]);
                for days_per_week in 2..=6 {
                    let program = assemble_program(
                        &blueprint(&goals, &caps, EquipmentContext::Gym, &usable, days_per_week, &[Muscle::Pecs]),
                        4,
                    );
                    for week in &program.weeks {
                        for day in &week.days {
                            let day_type = day.day_type.unwrap();
                            for exercise in &day.exercises {
                                let cap = caps.for_pattern(day_type, exercise.pattern);
                                assert!(exercise.rir >= cap.target_rir, "{goal} {exercise:?}");
                                assert!(exercise.sets <= cap.max_sets, "{goal} {exercise:?}");
                                assert!(exercise.sets >= 1);
                                let variant = catalog::variant(&exercise.exercise).unwrap();
                                assert!(variant.difficulty <= cap.max_difficulty);
                                assert!(exercise.reps_low <= exercise.reps_high);
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_no_repetition_within_week() {
        let (goals, caps) = blueprint_parts(Level::Advanced, &["strength"], vec![]);
        for context in [
            EquipmentContext::Gym,
            EquipmentContext::HomeBodyweight,
            EquipmentContext::HomeEquipped,
        ] {
            let usable = context.usable(&EquipmentSet::from([
                crate::Equipment::Dumbbell,
                crate::Equipment::PullUpBar,
            ]));
            for days_per_week in 2..=6 {
                let week = assemble_week(
                    &blueprint(&goals, &caps, context, &usable, days_per_week, &[]),
                    1,
                );
                for pattern in MovementPattern::iter() {
                    let chosen = week
                        .days
                        .iter()
                        .filter_map(|d| d.exercise(*pattern))
                        .map(|e| e.exercise.clone())
                        .collect::<Vec<_>>();
                    let pool_len =
                        catalog::pool(*pattern, context, &usable, caps.heavy.max_difficulty).len();
                    let distinct = chosen.iter().collect::<BTreeSet<_>>().len();
                    assert_eq!(
                        distinct,
                        chosen.len().min(pool_len),
                        "{pattern} in {context:?} with {days_per_week} days: {chosen:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_focus_bonus_sets() {
        let (goals, caps) = blueprint_parts(Level::Advanced, &["hypertrophy"], vec![]);
        let usable = EquipmentSet::all();
        let focus = [Muscle::Pecs, Muscle::Lats, Muscle::Quads, Muscle::Glutes, Muscle::FrontDelts];
        let plain = assemble_week(
            &blueprint(&goals, &caps, EquipmentContext::Gym, &usable, 3, &[]),
            1,
        );
        let focused = assemble_week(
            &blueprint(&goals, &caps, EquipmentContext::Gym, &usable, 3, &focus),
            1,
        );

        for (plain, focused) in plain.days.iter().zip(&focused.days) {
            let plain_sets: u32 = plain.exercises.iter().map(|e| e.sets).sum();
            let focused_sets: u32 = focused.exercises.iter().map(|e| e.sets).sum();
            assert!(focused_sets > plain_sets);
            assert!(focused_sets - plain_sets <= MAX_FOCUS_BONUS_SETS);
        }
    }

    #[test]
    fn test_focus_bonus_sets_secondary_muscle() {
        let (goals, caps) = blueprint_parts(Level::Advanced, &["hypertrophy"], vec![]);
        let usable = EquipmentSet::all();
        let plain = assemble_week(
            &blueprint(&goals, &caps, EquipmentContext::Gym, &usable, 3, &[]),
            1,
        );
        let focused = assemble_week(
            &blueprint(
                &goals,
                &caps,
                EquipmentContext::Gym,
                &usable,
                3,
                &[Muscle::SideDelts],
            ),
            1,
        );

        let mut bonus = 0;
        for (plain, focused) in plain.days.iter().zip(&focused.days) {
            for (p, f) in plain.exercises.iter().zip(&focused.exercises) {
                assert_eq!(p.exercise, f.exercise);
                if f.sets > p.sets {
                    let variant = catalog::variant(&f.exercise).unwrap();
                    assert!(!variant.primary_muscles.contains(&Muscle::SideDelts));
                    assert!(variant.secondary_muscles.contains(&Muscle::SideDelts));
                    bonus += f.sets - p.sets;
                }
            }
        }
        assert!(bonus > 0);
    }

    #[test]
    fn test_deload_week() {
        let (goals, caps) = blueprint_parts(Level::Advanced, &["strength"], vec![]);
        let usable = EquipmentSet::all();
        let blueprint = blueprint(&goals, &caps, EquipmentContext::Gym, &usable, 3, &[]);
        let regular = assemble_week(&blueprint, 3);
        let deload = assemble_week(&blueprint, 4);

        assert!(!regular.deload);
        assert!(deload.deload);

        let sets = |week: &WeeklySplit| -> u32 {
            week.days
                .iter()
                .flat_map(|d| &d.exercises)
                .map(|e| e.sets)
                .sum()
        };
        assert!(sets(&deload) < sets(&regular));
    }

    #[test]
    fn test_severe_pain_is_corrective_only() {
        let (goals, caps) = blueprint_parts(
            Level::Intermediate,
            &["toning"],
            vec![PainArea {
                area: BodyArea::Knee,
                severity: Severity::Severe,
            }],
        );
        let usable = EquipmentSet::none();
        let week = assemble_week(
            &blueprint(&goals, &caps, EquipmentContext::HomeBodyweight, &usable, 3, &[]),
            1,
        );

        for day in &week.days {
            let exercise = day.exercise(MovementPattern::LowerPush).unwrap();
            assert!(exercise.corrective);
            assert_eq!(exercise.exercise, "Wall Sit Hold");
            assert!(exercise.rir >= CORRECTIVE_MIN_RIR);
            assert!(exercise.sets <= CORRECTIVE_SETS);

            let exercise = day.exercise(MovementPattern::LowerPull).unwrap();
            assert!(!exercise.corrective);
        }
    }

    #[test]
    fn test_assemble_program() {
        let (goals, caps) = blueprint_parts(Level::Beginner, &["fat loss"], vec![]);
        let usable = EquipmentSet::none();
        let blueprint = blueprint(&goals, &caps, EquipmentContext::HomeBodyweight, &usable, 2, &[]);
        let program = assemble_program(&blueprint, 6);

        assert_eq!(program.weeks.len(), 6);
        assert_eq!(
            program.weeks.iter().map(|w| w.index).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6]
        );
        assert_eq!(program, assemble_program(&blueprint, 6));
    }
}
