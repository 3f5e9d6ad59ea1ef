use std::ops::RangeInclusive;

use log::{debug, info};

use crate::{
    AdaptError, Blueprint, DifficultyFeedback, MovementPattern, PrescribedExercise, ProfileField,
    Program, ProgressionAction, ProgressionResult, SafetyContext, SelectionRequest, Step,
    UserProfile, ValidationError, assemble_program, catalog, chain, compute_safety_caps,
    evaluate_progression, normalize_goals, select_variant,
};

pub const DAYS_PER_WEEK: RangeInclusive<u8> = 2..=6;
pub const WEEKS: RangeInclusive<u8> = 1..=12;
const MAX_SCORE: u8 = 100;

pub fn validate_profile(profile: &UserProfile) -> Result<(), ValidationError> {
    if profile.quiz_score > MAX_SCORE {
        return Err(ValidationError::ScoreOutOfRange(
            ProfileField::QuizScore,
            profile.quiz_score,
        ));
    }

    if let Some(score) = profile.practical_score {
        if score > MAX_SCORE {
            return Err(ValidationError::ScoreOutOfRange(
                ProfileField::PracticalScore,
                score,
            ));
        }
    }

    if !DAYS_PER_WEEK.contains(&profile.days_per_week()) {
        return Err(ValidationError::InvalidDaysPerWeek(profile.days_per_week()));
    }

    if !WEEKS.contains(&profile.weeks()) {
        return Err(ValidationError::InvalidWeeks(profile.weeks()));
    }

    profile.equipment_context()?;

    Ok(())
}

/// Generate a complete program for a user.
pub fn generate_program(profile: &UserProfile) -> Result<Program, ValidationError> {
    validate_profile(profile)?;

    let goals = normalize_goals(&profile.goals)?;
    let context = profile.equipment_context()?;
    let usable = context.usable(&profile.equipment);
    let caps = compute_safety_caps(&SafetyContext::new(
        profile.declared_level(),
        goals.primary(),
        profile.quiz_score,
        profile.practical_score(),
        profile.pain_areas.clone(),
    ));

    info!(
        "generating {} week program for {} ({}, {} days per week, {:?})",
        profile.weeks(),
        profile.id,
        goals.primary(),
        profile.days_per_week(),
        context
    );

    Ok(assemble_program(
        &Blueprint {
            goals: &goals,
            caps: &caps,
            context,
            usable: &usable,
            days_per_week: profile.days_per_week(),
            focus_muscles: &profile.focus_muscles,
            aerobic: profile.aerobic.as_ref(),
        },
        usize::from(profile.weeks()),
    ))
}

/// Apply feedback for one exercise of a program.
///
/// `week` and `day` are positions in the program. The decision is written to
/// the exercise and to the same exercise on the same day of all later weeks.
pub fn adapt_program(
    program: &mut Program,
    week: usize,
    day: usize,
    pattern: MovementPattern,
    feedback: &DifficultyFeedback,
) -> Result<ProgressionResult, AdaptError> {
    let workout = program
        .weeks
        .get(week)
        .ok_or(AdaptError::NoSuchWeek(week))?
        .days
        .get(day)
        .ok_or(AdaptError::NoSuchDay(day))?;
    let exercise = workout
        .exercise(pattern)
        .ok_or(AdaptError::NoSuchExercise(pattern))?;
    let day_type = workout.day_type.ok_or(AdaptError::NoSuchExercise(pattern))?;

    if exercise.corrective {
        return Ok(ProgressionResult {
            state: feedback.state(),
            action: ProgressionAction::Maintain,
            reason: format!("{} is corrective work", exercise.exercise),
        });
    }

    let previous = exercise.exercise.clone();
    let cap = program.caps.for_pattern(day_type, pattern);
    let mut result = evaluate_progression(
        &previous,
        pattern,
        program.context,
        &program.usable,
        feedback,
    );

    let replacement = match result.action.clone() {
        ProgressionAction::Maintain => return Ok(result),
        ProgressionAction::ReduceWeight(change) | ProgressionAction::IncreaseWeight(change) => {
            for_each_occurrence(program, week, day, pattern, &previous, |e| {
                e.weight = Some(change.weight);
            });
            return Ok(result);
        }
        ProgressionAction::Upgrade { to, .. } | ProgressionAction::Downgrade { to, .. } => {
            to.exercise
        }
    };

    if catalog::variant(&replacement).is_some_and(|v| v.difficulty > cap.max_difficulty) {
        debug!("{replacement} exceeds difficulty {}", cap.max_difficulty);
        result.reason = format!(
            "{} is above the allowed difficulty {}, keep {previous}",
            replacement, cap.max_difficulty
        );
        result.action = ProgressionAction::Maintain;
        return Ok(result);
    }

    let selection = select_variant(&SelectionRequest {
        pattern,
        context: program.context,
        usable: &program.usable,
        rotation: 0,
        max_difficulty: cap.max_difficulty,
        requested: Some(&replacement),
    });
    debug!("{pattern}: {} ({})", selection.exercise, selection.reason);

    let exercise = selection.exercise;

    if exercise == previous {
        result.reason = format!("no usable alternative to {previous}");
        result.action = ProgressionAction::Maintain;
        return Ok(result);
    }

    if let Some((other_week, other_day)) =
        scheduled_elsewhere(program, week, day, pattern, &previous, &exercise)
    {
        debug!("{exercise} is already scheduled in week {other_week}, day {other_day}");
        result.reason = format!(
            "{exercise} is already scheduled on another day of the week, keep {previous}"
        );
        result.action = ProgressionAction::Maintain;
        return Ok(result);
    }

    if let ProgressionAction::Upgrade { to, .. } | ProgressionAction::Downgrade { to, .. } =
        &mut result.action
    {
        if to.exercise != exercise {
            result.reason = format!("{}, {}", result.reason, selection.reason);
            *to = Step {
                position: chain::chain(pattern, program.context.location()).position(&exercise),
                exercise: exercise.clone(),
            };
        }
    }

    for_each_occurrence(program, week, day, pattern, &previous, |e| {
        e.exercise.clone_from(&exercise);
        e.weight = None;
    });

    Ok(result)
}

/// First other day using `candidate` for the pattern in a week the change applies to.
fn scheduled_elsewhere(
    program: &Program,
    week: usize,
    day: usize,
    pattern: MovementPattern,
    previous: &str,
    candidate: &str,
) -> Option<(usize, usize)> {
    program
        .weeks
        .iter()
        .enumerate()
        .skip(week)
        .filter(|(_, split)| {
            split
                .days
                .get(day)
                .and_then(|workout| workout.exercise(pattern))
                .is_some_and(|e| e.exercise == previous)
        })
        .find_map(|(w, split)| {
            split
                .days
                .iter()
                .enumerate()
                .filter(|(d, _)| *d != day)
                .find(|(_, workout)| {
                    workout
                        .exercises
                        .iter()
                        .any(|e| e.pattern == pattern && e.exercise == candidate)
                })
                .map(|(d, _)| (w, d))
        })
}

fn for_each_occurrence(
    program: &mut Program,
    week: usize,
    day: usize,
    pattern: MovementPattern,
    exercise: &str,
    mut f: impl FnMut(&mut PrescribedExercise),
) {
    for split in program.weeks.iter_mut().skip(week) {
        if let Some(workout) = split.days.get_mut(day) {
            for prescribed in &mut workout.exercises {
                if prescribed.pattern == pattern && prescribed.exercise == exercise {
                    f(prescribed);
                }
            }
        }
    }
}
