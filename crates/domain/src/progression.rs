use std::fmt;

use log::debug;

use crate::{
    EquipmentContext, EquipmentSet, Location, MovementPattern, RIR, RIRError, RPE, RPEError,
    Weight, WeightError, catalog, chain,
};

pub const TOO_HARD_WEIGHT_PERCENT: i32 = -15;
pub const FAILURE_WEIGHT_PERCENT: i32 = -20;
pub const TOO_EASY_WEIGHT_PERCENT: i32 = 5;

const MIN_COMPLETION_RATIO: f32 = 0.7;

/// Feedback logged after a set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyFeedback {
    rpe: RPE,
    rir: RIR,
    perceived_difficulty: u8,
    completed_reps: u32,
    target_reps: u32,
    weight: Option<Weight>,
}

impl DifficultyFeedback {
    pub fn new(
        rpe: u8,
        rir: u8,
        perceived_difficulty: u8,
        completed_reps: u32,
        target_reps: u32,
        weight: Option<f32>,
    ) -> Result<Self, FeedbackError> {
        if !(1..=10).contains(&perceived_difficulty) {
            return Err(FeedbackError::PerceivedDifficultyOutOfRange(
                perceived_difficulty,
            ));
        }

        if target_reps == 0 {
            return Err(FeedbackError::ZeroTargetReps);
        }

        Ok(Self {
            rpe: RPE::new(rpe)?,
            rir: RIR::new(rir)?,
            perceived_difficulty,
            completed_reps,
            target_reps,
            weight: weight.map(Weight::new).transpose()?,
        })
    }

    #[must_use]
    pub fn rpe(&self) -> RPE {
        self.rpe
    }

    #[must_use]
    pub fn rir(&self) -> RIR {
        self.rir
    }

    #[must_use]
    pub fn perceived_difficulty(&self) -> u8 {
        self.perceived_difficulty
    }

    #[must_use]
    pub fn weight(&self) -> Option<Weight> {
        self.weight
    }

    #[must_use]
    pub fn completion_ratio(&self) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let ratio = self.completed_reps as f32 / self.target_reps as f32;
        ratio
    }

    #[must_use]
    pub fn state(&self) -> FeedbackState {
        let rpe = u8::from(self.rpe);
        let rir = u8::from(self.rir);
        let completion = self.completion_ratio();

        if rir == 0 && rpe >= 10 {
            FeedbackState::Failure
        } else if rpe >= 9 || self.perceived_difficulty >= 8 || completion < MIN_COMPLETION_RATIO
        {
            FeedbackState::TooHard
        } else if rpe <= 5 && completion >= 1.0 && rir >= 4 {
            FeedbackState::TooEasy
        } else {
            FeedbackState::Optimal
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FeedbackError {
    #[error(transparent)]
    RPE(#[from] RPEError),
    #[error(transparent)]
    RIR(#[from] RIRError),
    #[error(transparent)]
    Weight(#[from] WeightError),
    #[error("perceived difficulty must be in the range 1 to 10 ({0})")]
    PerceivedDifficultyOutOfRange(u8),
    #[error("target reps must be greater than zero")]
    ZeroTargetReps,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FeedbackState {
    Optimal,
    TooEasy,
    TooHard,
    Failure,
}

impl fmt::Display for FeedbackState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                FeedbackState::Optimal => "optimal",
                FeedbackState::TooEasy => "too easy",
                FeedbackState::TooHard => "too hard",
                FeedbackState::Failure => "failure",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub exercise: String,
    /// Position in the progression chain, if the exercise is part of it.
    pub position: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightChange {
    pub percent: i32,
    pub previous: Weight,
    pub weight: Weight,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProgressionAction {
    Maintain,
    Downgrade { from: Step, to: Step },
    Upgrade { from: Step, to: Step },
    ReduceWeight(WeightChange),
    IncreaseWeight(WeightChange),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressionResult {
    pub state: FeedbackState,
    pub action: ProgressionAction,
    pub reason: String,
}

impl ProgressionResult {
    fn maintain(state: FeedbackState, reason: String) -> Self {
        Self {
            state,
            action: ProgressionAction::Maintain,
            reason,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Direction {
    Easier,
    Harder,
}

/// Decide how to continue after a logged set.
///
/// Gym exercises with a logged weight are progressed by load. Everything
/// else moves along the progression chain of the pattern, skipping variants
/// that are not available with the usable equipment.
#[must_use]
pub fn evaluate_progression(
    exercise: &str,
    pattern: MovementPattern,
    context: EquipmentContext,
    usable: &EquipmentSet,
    feedback: &DifficultyFeedback,
) -> ProgressionResult {
    let state = feedback.state();

    let direction = match state {
        FeedbackState::Optimal => {
            return ProgressionResult::maintain(state, format!("{exercise} is well matched"));
        }
        FeedbackState::TooEasy => Direction::Harder,
        FeedbackState::TooHard | FeedbackState::Failure => Direction::Easier,
    };

    if context.location() == Location::Gym {
        if let Some(weight) = feedback.weight {
            return scale_weight(exercise, state, weight);
        }
        debug!("no weight logged for {exercise}, moving along the chain");
    }

    move_along_chain(exercise, pattern, context, usable, state, direction)
}

fn scale_weight(exercise: &str, state: FeedbackState, previous: Weight) -> ProgressionResult {
    let percent = match state {
        FeedbackState::TooEasy => TOO_EASY_WEIGHT_PERCENT,
        FeedbackState::TooHard => TOO_HARD_WEIGHT_PERCENT,
        FeedbackState::Failure => FAILURE_WEIGHT_PERCENT,
        FeedbackState::Optimal => 0,
    };
    let change = WeightChange {
        percent,
        previous,
        weight: previous.scaled(percent),
    };
    let reason = format!(
        "{exercise} was {state}, weight {previous} → {} ({percent:+} %)",
        change.weight
    );

    ProgressionResult {
        state,
        action: if percent > 0 {
            ProgressionAction::IncreaseWeight(change)
        } else {
            ProgressionAction::ReduceWeight(change)
        },
        reason,
    }
}

fn is_usable(name: &str, context: EquipmentContext, usable: &EquipmentSet) -> bool {
    catalog::variant(name).is_some_and(|v| v.is_available(context, usable))
}

fn move_along_chain(
    exercise: &str,
    pattern: MovementPattern,
    context: EquipmentContext,
    usable: &EquipmentSet,
    state: FeedbackState,
    direction: Direction,
) -> ProgressionResult {
    let chain = chain::chain(pattern, context.location());

    let Some(position) = chain.position(exercise) else {
        debug!(
            "{exercise} is not part of the {pattern} chain at {}",
            context.location()
        );
        return move_within_pool(exercise, pattern, context, usable, state, direction);
    };

    let step: isize = match direction {
        Direction::Easier => -1,
        Direction::Harder => 1,
    };
    let mut current = position;

    loop {
        #[allow(clippy::cast_possible_wrap)]
        let next = chain.clamp(current as isize + step);
        if next == current {
            return ProgressionResult::maintain(
                state,
                format!(
                    "{exercise} was {state}, but it is already the {} {pattern} variant",
                    match direction {
                        Direction::Easier => "easiest",
                        Direction::Harder => "hardest",
                    }
                ),
            );
        }
        current = next;
        if is_usable(chain.exercise(current), context, usable) {
            break;
        }
        debug!("skipping unavailable {}", chain.exercise(current));
    }

    let from = Step {
        exercise: exercise.to_string(),
        position: Some(position),
    };
    let to = Step {
        exercise: chain.exercise(current).to_string(),
        position: Some(current),
    };
    let reason = format!("{exercise} was {state}, continue with {}", to.exercise);

    ProgressionResult {
        state,
        action: match direction {
            Direction::Easier => ProgressionAction::Downgrade { from, to },
            Direction::Harder => ProgressionAction::Upgrade { from, to },
        },
        reason,
    }
}

fn move_within_pool(
    exercise: &str,
    pattern: MovementPattern,
    context: EquipmentContext,
    usable: &EquipmentSet,
    state: FeedbackState,
    direction: Direction,
) -> ProgressionResult {
    let Some(current) = catalog::variant(exercise) else {
        return ProgressionResult::maintain(state, format!("{exercise} is unknown"));
    };

    let pool = catalog::pool(pattern, context, usable, u8::MAX);
    let neighbour = match direction {
        Direction::Easier => pool
            .iter()
            .rev()
            .find(|v| v.difficulty < current.difficulty),
        Direction::Harder => pool.iter().find(|v| v.difficulty > current.difficulty),
    };

    match neighbour {
        Some(next) => {
            let from = Step {
                exercise: current.name.to_string(),
                position: None,
            };
            let to = Step {
                exercise: next.name.to_string(),
                position: None,
            };
            let reason = format!(
                "{exercise} was {state}, continue with {} (difficulty {} → {})",
                next.name, current.difficulty, next.difficulty
            );
            ProgressionResult {
                state,
                action: match direction {
                    Direction::Easier => ProgressionAction::Downgrade { from, to },
                    Direction::Harder => ProgressionAction::Upgrade { from, to },
                },
                reason,
            }
        }
        None => ProgressionResult::maintain(
            state,
            format!("{exercise} was {state}, but there is no suitable alternative"),
        ),
    }
}
