use std::{collections::BTreeMap, fmt, slice::Iter};

use log::debug;

use crate::{CanonicalGoal, MovementPattern, Property};

/// Absolute difference between self-reported and tested score above which
/// the lower score is trusted.
pub const DISCREPANCY_THRESHOLD: u8 = 20;
pub const MAX_SETS: u32 = 6;
pub const MIN_DIFFICULTY_CEILING: u8 = 3;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            0..40 => Level::Beginner,
            40..75 => Level::Intermediate,
            _ => Level::Advanced,
        }
    }
}

impl Property for Level {
    fn iter() -> Iter<'static, Level> {
        static LEVELS: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];
        LEVELS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum DayType {
    Heavy,
    Moderate,
    Volume,
}

impl Property for DayType {
    fn iter() -> Iter<'static, DayType> {
        static DAY_TYPES: [DayType; 3] = [DayType::Heavy, DayType::Moderate, DayType::Volume];
        DAY_TYPES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            DayType::Heavy => "Heavy",
            DayType::Moderate => "Moderate",
            DayType::Volume => "Volume",
        }
    }
}

/// Pain severity.
///
/// Sources reporting only two levels map "mild" to `Mild` and "severe" to
/// `Severe`; `Moderate` is never inferred from a binary report.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "mild" | "low" | "lieve" | "leggero" => Some(Severity::Mild),
            "moderate" | "medium" | "moderato" | "medio" => Some(Severity::Moderate),
            "severe" | "high" | "grave" | "forte" => Some(Severity::Severe),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_binary(severe: bool) -> Self {
        if severe {
            Severity::Severe
        } else {
            Severity::Mild
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum BodyArea {
    Neck,
    Shoulder,
    Elbow,
    Wrist,
    LowerBack,
    Hip,
    Knee,
    Ankle,
}

impl BodyArea {
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "neck" | "collo" | "cervicale" => Some(BodyArea::Neck),
            "shoulder" | "shoulders" | "spalla" | "spalle" => Some(BodyArea::Shoulder),
            "elbow" | "gomito" => Some(BodyArea::Elbow),
            "wrist" | "polso" => Some(BodyArea::Wrist),
            "lower_back" | "back" | "lombare" | "schiena" => Some(BodyArea::LowerBack),
            "hip" | "hips" | "anca" => Some(BodyArea::Hip),
            "knee" | "knees" | "ginocchio" | "ginocchia" => Some(BodyArea::Knee),
            "ankle" | "caviglia" => Some(BodyArea::Ankle),
            _ => None,
        }
    }

    #[must_use]
    pub fn patterns(self) -> &'static [MovementPattern] {
        match self {
            BodyArea::Neck => &[MovementPattern::VerticalPush],
            BodyArea::Shoulder => &[
                MovementPattern::HorizontalPush,
                MovementPattern::VerticalPush,
                MovementPattern::VerticalPull,
            ],
            BodyArea::Elbow => &[MovementPattern::VerticalPull, MovementPattern::HorizontalPull],
            BodyArea::Wrist => &[MovementPattern::HorizontalPush],
            BodyArea::LowerBack => &[MovementPattern::LowerPull, MovementPattern::Core],
            BodyArea::Hip => &[MovementPattern::LowerPush, MovementPattern::LowerPull],
            BodyArea::Knee | BodyArea::Ankle => &[MovementPattern::LowerPush],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PainArea {
    pub area: BodyArea,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafetyContext {
    pub level: Level,
    pub goal: CanonicalGoal,
    pub quiz_score: u8,
    pub practical_score: u8,
    pub discrepancy: u8,
    pub pain_areas: Vec<PainArea>,
}

impl SafetyContext {
    #[must_use]
    pub fn new(
        level: Level,
        goal: CanonicalGoal,
        quiz_score: u8,
        practical_score: u8,
        pain_areas: Vec<PainArea>,
    ) -> Self {
        Self {
            level,
            goal,
            quiz_score,
            practical_score,
            discrepancy: quiz_score.abs_diff(practical_score),
            pain_areas,
        }
    }

    #[must_use]
    pub fn is_discrepant(&self) -> bool {
        self.discrepancy > DISCREPANCY_THRESHOLD
    }
}

/// Hard ceiling for one day type.
///
/// A prescription is within the ceiling if its RIR is at least `target_rir`
/// and its set count is at most `max_sets`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafetyCap {
    pub target_rir: u8,
    pub max_sets: u32,
    pub max_intensity_multiplier: f32,
    pub max_difficulty: u8,
}

impl SafetyCap {
    #[must_use]
    pub fn admits(&self, rir: u8, sets: u32) -> bool {
        rir >= self.target_rir && sets <= self.max_sets
    }

    fn new(rir: i32, sets: i32, multiplier: f32, difficulty: i32) -> Self {
        Self {
            target_rir: u8::try_from(rir.clamp(0, 5)).unwrap_or(5),
            max_sets: u32::try_from(sets.clamp(1, 6)).unwrap_or(1),
            max_intensity_multiplier: multiplier.clamp(0.5, 1.0),
            max_difficulty: u8::try_from(difficulty.clamp(i32::from(MIN_DIFFICULTY_CEILING), 10))
                .unwrap_or(MIN_DIFFICULTY_CEILING),
        }
    }

    fn restricted(self, severity: Severity) -> Self {
        let rir = i32::from(self.target_rir);
        let sets = i32::try_from(self.max_sets).unwrap_or(1);
        let difficulty = i32::from(self.max_difficulty);
        match severity {
            Severity::Mild => Self::new(rir, sets, self.max_intensity_multiplier, difficulty - 1),
            Severity::Moderate | Severity::Severe => Self::new(
                rir + 1,
                sets - 1,
                self.max_intensity_multiplier - 0.1,
                difficulty - 2,
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SafetyCaps {
    /// Level after correcting an overestimated self-assessment.
    pub level: Level,
    pub penalized: bool,
    pub heavy: SafetyCap,
    pub moderate: SafetyCap,
    pub volume: SafetyCap,
    pub pain: BTreeMap<MovementPattern, Severity>,
}

impl SafetyCaps {
    #[must_use]
    pub fn cap(&self, day_type: DayType) -> SafetyCap {
        match day_type {
            DayType::Heavy => self.heavy,
            DayType::Moderate => self.moderate,
            DayType::Volume => self.volume,
        }
    }

    #[must_use]
    pub fn for_pattern(&self, day_type: DayType, pattern: MovementPattern) -> SafetyCap {
        let cap = self.cap(day_type);
        match self.pain.get(&pattern) {
            Some(severity) => cap.restricted(*severity),
            None => cap,
        }
    }

    /// Patterns affected by severe pain are only trained with corrective work.
    #[must_use]
    pub fn corrective_only(&self, pattern: MovementPattern) -> bool {
        self.pain.get(&pattern) == Some(&Severity::Severe)
    }
}

struct LevelLimits {
    rir: i32,
    rir_floor: i32,
    sets: i32,
    multiplier: f32,
    difficulty: i32,
}

pub fn compute_safety_caps(context: &SafetyContext) -> SafetyCaps {
    let penalized = context.is_discrepant();
    let level = if penalized {
        context.level.min(Level::from_score(
            context.quiz_score.min(context.practical_score),
        ))
    } else {
        context.level
    };

    let base_rir = i32::from(context.goal.config().target_rir);
    let base_sets = i32::try_from(context.goal.baseline_sets()).unwrap_or(1);

    let mut limits = match level {
        Level::Beginner => LevelLimits {
            rir: (base_rir + 1).max(3),
            rir_floor: 2,
            sets: base_sets - 1,
            multiplier: 0.7,
            difficulty: 4,
        },
        Level::Intermediate => LevelLimits {
            rir: base_rir.max(2),
            rir_floor: 1,
            sets: base_sets,
            multiplier: 0.85,
            difficulty: 7,
        },
        Level::Advanced => LevelLimits {
            rir: base_rir,
            rir_floor: 0,
            sets: base_sets,
            multiplier: 1.0,
            difficulty: 10,
        },
    };

    if penalized {
        debug!(
            "self-assessment differs from practical test by {}, assuming level {}",
            context.discrepancy,
            level.name()
        );
        limits.rir += 1;
        limits.rir_floor += 1;
        limits.sets -= 1;
        limits.multiplier -= 0.1;
        limits.difficulty -= 1;
    }

    let mut pain: BTreeMap<MovementPattern, Severity> = BTreeMap::new();
    for pain_area in &context.pain_areas {
        for pattern in pain_area.area.patterns() {
            let severity = pain.entry(*pattern).or_insert(pain_area.severity);
            *severity = (*severity).max(pain_area.severity);
        }
    }

    SafetyCaps {
        level,
        penalized,
        heavy: SafetyCap::new(
            (limits.rir - 1).max(limits.rir_floor),
            limits.sets,
            limits.multiplier,
            limits.difficulty,
        ),
        moderate: SafetyCap::new(
            limits.rir,
            limits.sets,
            limits.multiplier * 0.9,
            limits.difficulty,
        ),
        volume: SafetyCap::new(
            limits.rir + 1,
            limits.sets + 1,
            limits.multiplier * 0.8,
            limits.difficulty,
        ),
        pain,
    }
}

impl fmt::Display for SafetyCap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "RIR ≥ {}, ≤ {} sets, ≤ {:.0} % intensity, difficulty ≤ {}",
            self.target_rir,
            self.max_sets,
            self.max_intensity_multiplier * 100.0,
            self.max_difficulty
        )
    }
}
