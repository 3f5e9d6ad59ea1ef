use std::collections::BTreeMap;

use crate::{
    Equipment, EquipmentClass, EquipmentContext, EquipmentSet, Location, MovementPattern, Muscle,
    Property,
};

pub const CATALOG_VERSION: &str = "3.2.0";

#[derive(Debug, PartialEq, Eq)]
pub struct ExerciseVariant {
    pub id: &'static str,
    pub name: &'static str,
    pub pattern: MovementPattern,
    pub difficulty: u8,
    pub equipment_class: EquipmentClass,
    pub equipment: &'static [Equipment],
    pub primary_muscles: &'static [Muscle],
    pub secondary_muscles: &'static [Muscle],
    pub corrective: bool,
}

impl ExerciseVariant {
    const fn default() -> Self {
        Self {
            id: "",
            name: "",
            pattern: MovementPattern::Core,
            difficulty: 1,
            equipment_class: EquipmentClass::Bodyweight,
            equipment: &[],
            primary_muscles: &[],
            secondary_muscles: &[],
            corrective: false,
        }
    }

    #[must_use]
    pub fn is_available(&self, context: EquipmentContext, usable: &EquipmentSet) -> bool {
        context.admits(self.equipment_class) && usable.contains_all(self.equipment)
    }

    #[must_use]
    pub fn targets(&self, muscle: Muscle) -> bool {
        self.primary_muscles.contains(&muscle) || self.secondary_muscles.contains(&muscle)
    }
}

/// Case-insensitive lookup of a catalog entry by name or id.
#[must_use]
pub fn variant(name: &str) -> Option<&'static ExerciseVariant> {
    let key = name.trim().to_lowercase();
    BY_NAME.get(&key).or_else(|| BY_ID.get(key.as_str())).copied()
}

#[must_use]
pub fn variants(pattern: MovementPattern) -> &'static [ExerciseVariant] {
    match pattern {
        MovementPattern::LowerPush => LOWER_PUSH,
        MovementPattern::LowerPull => LOWER_PULL,
        MovementPattern::HorizontalPush => HORIZONTAL_PUSH,
        MovementPattern::VerticalPush => VERTICAL_PUSH,
        MovementPattern::VerticalPull => VERTICAL_PULL,
        MovementPattern::HorizontalPull => HORIZONTAL_PULL,
        MovementPattern::Core => CORE,
    }
}

/// Selectable variants of a pattern, ordered by difficulty and name.
///
/// Corrective variants are never part of a pool.
#[must_use]
pub fn pool(
    pattern: MovementPattern,
    context: EquipmentContext,
    usable: &EquipmentSet,
    max_difficulty: u8,
) -> Vec<&'static ExerciseVariant> {
    let mut pool = variants(pattern)
        .iter()
        .filter(|v| {
            !v.corrective && v.difficulty <= max_difficulty && v.is_available(context, usable)
        })
        .collect::<Vec<_>>();
    pool.sort_by(|a, b| a.difficulty.cmp(&b.difficulty).then(a.name.cmp(b.name)));
    pool
}

#[must_use]
pub fn corrective(pattern: MovementPattern) -> &'static ExerciseVariant {
    variants(pattern)
        .iter()
        .find(|v| v.corrective)
        .unwrap_or(&variants(pattern)[0])
}

/// Direct equivalent of an exercise for the given location.
#[must_use]
pub fn substitute(name: &str, location: Location) -> Option<&'static ExerciseVariant> {
    let key = variant(name).map_or_else(|| name.trim().to_lowercase(), |v| v.name.to_lowercase());
    let table = match location {
        Location::Home => &*TO_BODYWEIGHT,
        Location::Gym => &*TO_GYM,
    };
    table.get(&key).and_then(|target| variant(target))
}

static BY_NAME: std::sync::LazyLock<BTreeMap<String, &'static ExerciseVariant>> =
    std::sync::LazyLock::new(|| {
        MovementPattern::iter()
            .flat_map(|p| variants(*p))
            .map(|v| (v.name.to_lowercase(), v))
            .collect()
    });

static BY_ID: std::sync::LazyLock<BTreeMap<&'static str, &'static ExerciseVariant>> =
    std::sync::LazyLock::new(|| {
        MovementPattern::iter()
            .flat_map(|p| variants(*p))
            .map(|v| (v.id, v))
            .collect()
    });

static TO_BODYWEIGHT: std::sync::LazyLock<BTreeMap<String, &'static str>> =
    std::sync::LazyLock::new(|| {
        SUBSTITUTIONS_TO_BODYWEIGHT
            .iter()
            .map(|(from, to)| (from.to_lowercase(), *to))
            .collect()
    });

static TO_GYM: std::sync::LazyLock<BTreeMap<String, &'static str>> =
    std::sync::LazyLock::new(|| {
        SUBSTITUTIONS_TO_GYM
            .iter()
            .map(|(from, to)| (from.to_lowercase(), *to))
            .collect()
    });

const SUBSTITUTIONS_TO_BODYWEIGHT: &[(&str, &str)] = &[
    ("Archer Pull-Up", "Feet-Elevated Inverted Row"),
    ("Band Lat Pulldown", "Prone Lat Pulldown"),
    ("Band Overhead Press", "Hands-Elevated Pike Push-Up"),
    ("Band Row", "Towel Row"),
    ("Barbell Back Squat", "Bulgarian Split Squat"),
    ("Barbell Bench Press", "Push-Up"),
    ("Barbell Deadlift", "Single-Leg Romanian Deadlift"),
    ("Barbell Front Squat", "Bulgarian Split Squat"),
    ("Barbell Hip Thrust", "Single-Leg Glute Bridge"),
    ("Barbell Overhead Press", "Pike Push-Up"),
    ("Barbell Romanian Deadlift", "Single-Leg Romanian Deadlift"),
    ("Barbell Rollout", "Hollow Body Hold"),
    ("Barbell Row", "Feet-Elevated Inverted Row"),
    ("Cable Chest Fly", "Push-Up"),
    ("Cable Crunch", "Hollow Body Hold"),
    ("Cable Pull-Through", "Single-Leg Glute Bridge"),
    ("Chest-Supported Machine Row", "Table Inverted Row"),
    ("Chin-Up", "Table Inverted Row"),
    ("Dragon Flag", "Hollow Body Hold"),
    ("Dumbbell Bench Press", "Push-Up"),
    ("Dumbbell Floor Press", "Knee Push-Up"),
    ("Dumbbell Romanian Deadlift", "Single-Leg Romanian Deadlift"),
    ("Dumbbell Shoulder Press", "Pike Push-Up"),
    ("Goblet Squat", "Bodyweight Squat"),
    ("Hack Squat", "Split Squat"),
    ("Hanging Knee Raise", "Hollow Body Hold"),
    ("Hanging Leg Raise", "Hollow Body Hold"),
    ("Kettlebell Swing", "Single-Leg Romanian Deadlift"),
    ("Lat Pulldown", "Floor Slide Pulldown"),
    ("Leg Press", "Bodyweight Squat"),
    ("Lying Leg Curl", "Sliding Leg Curl"),
    ("Machine Assisted Pull-Up", "Floor Slide Pulldown"),
    ("Machine Chest Press", "Incline Push-Up"),
    ("Machine Shoulder Press", "Hands-Elevated Pike Push-Up"),
    ("Negative Pull-Up", "Floor Slide Pulldown"),
    ("One-Arm Dumbbell Row", "Table Inverted Row"),
    ("Pallof Press", "Side Plank"),
    ("Pull-Up", "Table Inverted Row"),
    ("Seated Cable Row", "Table Inverted Row"),
];

const SUBSTITUTIONS_TO_GYM: &[(&str, &str)] = &[
    ("Archer Inverted Row", "Barbell Row"),
    ("Archer Push-Up", "Barbell Bench Press"),
    ("Assisted Squat", "Leg Press"),
    ("Bodyweight Squat", "Goblet Squat"),
    ("Bulgarian Split Squat", "Barbell Back Squat"),
    ("Dead Bug", "Pallof Press"),
    ("Decline Push-Up", "Dumbbell Bench Press"),
    ("Dragon Flag", "Barbell Rollout"),
    ("Feet-Elevated Inverted Row", "Barbell Row"),
    ("Feet-Elevated Pike Push-Up", "Barbell Overhead Press"),
    ("Floor Slide Pulldown", "Lat Pulldown"),
    ("Glute Bridge", "Barbell Hip Thrust"),
    ("Hands-Elevated Pike Push-Up", "Machine Shoulder Press"),
    ("Hollow Body Hold", "Cable Crunch"),
    ("Incline Push-Up", "Machine Chest Press"),
    ("Knee Push-Up", "Machine Chest Press"),
    ("Nordic Curl Negative", "Lying Leg Curl"),
    ("One-Arm Push-Up", "Barbell Bench Press"),
    ("Pike Push-Up", "Dumbbell Shoulder Press"),
    ("Pistol Squat", "Barbell Front Squat"),
    ("Plank", "Pallof Press"),
    ("Prone Lat Pulldown", "Lat Pulldown"),
    ("Prone Y Raise", "Machine Shoulder Press"),
    ("Push-Up", "Dumbbell Bench Press"),
    ("Reverse Lunge", "Goblet Squat"),
    ("Shrimp Squat", "Barbell Back Squat"),
    ("Side Plank", "Pallof Press"),
    ("Single-Leg Glute Bridge", "Barbell Hip Thrust"),
    ("Single-Leg Romanian Deadlift", "Dumbbell Romanian Deadlift"),
    ("Sliding Leg Curl", "Lying Leg Curl"),
    ("Split Squat", "Hack Squat"),
    ("Table Inverted Row", "Seated Cable Row"),
    ("Towel Row", "Seated Cable Row"),
    ("Wall Handstand Push-Up", "Barbell Overhead Press"),
    ("Wall Push-Up", "Machine Chest Press"),
];

const LOWER_PUSH: &[ExerciseVariant] = &[
    ExerciseVariant {
        id: "assisted_squat",
        name: "Assisted Squat",
        pattern: MovementPattern::LowerPush,
        difficulty: 1,
        primary_muscles: &[Muscle::Quads],
        secondary_muscles: &[Muscle::Glutes],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "barbell_back_squat",
        name: "Barbell Back Squat",
        pattern: MovementPattern::LowerPush,
        difficulty: 6,
        equipment_class: EquipmentClass::Gym,
        equipment: &[Equipment::Barbell],
        primary_muscles: &[Muscle::Quads, Muscle::Glutes],
        secondary_muscles: &[Muscle::ErectorSpinae, Muscle::Hamstrings],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "barbell_front_squat",
        name: "Barbell Front Squat",
        pattern: MovementPattern::LowerPush,
        difficulty: 7,
        equipment_class: EquipmentClass::Gym,
        equipment: &[Equipment::Barbell],
        primary_muscles: &[Muscle::Quads],
        secondary_muscles: &[Muscle::Glutes, Muscle::Abs],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "bodyweight_squat",
        name: "Bodyweight Squat",
        pattern: MovementPattern::LowerPush,
        difficulty: 2,
        primary_muscles: &[Muscle::Quads],
        secondary_muscles: &[Muscle::Glutes],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "bulgarian_split_squat",
        name: "Bulgarian Split Squat",
        pattern: MovementPattern::LowerPush,
        difficulty: 5,
        primary_muscles: &[Muscle::Quads, Muscle::Glutes],
        secondary_muscles: &[Muscle::Hamstrings],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "goblet_squat",
        name: "Goblet Squat",
        pattern: MovementPattern::LowerPush,
        difficulty: 3,
        equipment_class: EquipmentClass::Both,
        equipment: &[Equipment::Dumbbell],
        primary_muscles: &[Muscle::Quads],
        secondary_muscles: &[Muscle::Glutes, Muscle::Abs],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "hack_squat",
        name: "Hack Squat",
        pattern: MovementPattern::LowerPush,
        difficulty: 4,
        equipment_class: EquipmentClass::Gym,
        equipment: &[Equipment::Machine],
        primary_muscles: &[Muscle::Quads],
        secondary_muscles: &[Muscle::Glutes],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "leg_press",
        name: "Leg Press",
        pattern: MovementPattern::LowerPush,
        difficulty: 2,
        equipment_class: EquipmentClass::Gym,
        equipment: &[Equipment::Machine],
        primary_muscles: &[Muscle::Quads],
        secondary_muscles: &[Muscle::Glutes, Muscle::Hamstrings],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "pistol_squat",
        name: "Pistol Squat",
        pattern: MovementPattern::LowerPush,
        difficulty: 9,
        primary_muscles: &[Muscle::Quads, Muscle::Glutes],
        secondary_muscles: &[Muscle::Abs],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "reverse_lunge",
        name: "Reverse Lunge",
        pattern: MovementPattern::LowerPush,
        difficulty: 4,
        primary_muscles: &[Muscle::Quads, Muscle::Glutes],
        secondary_muscles: &[Muscle::Hamstrings],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "shrimp_squat",
        name: "Shrimp Squat",
        pattern: MovementPattern::LowerPush,
        difficulty: 7,
        primary_muscles: &[Muscle::Quads],
        secondary_muscles: &[Muscle::Glutes],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "split_squat",
        name: "Split Squat",
        pattern: MovementPattern::LowerPush,
        difficulty: 3,
        primary_muscles: &[Muscle::Quads],
        secondary_muscles: &[Muscle::Glutes],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "wall_sit_hold",
        name: "Wall Sit Hold",
        pattern: MovementPattern::LowerPush,
        difficulty: 1,
        primary_muscles: &[Muscle::Quads],
        secondary_muscles: &[Muscle::Glutes],
        corrective: true,
        ..ExerciseVariant::default()
    },
];

const LOWER_PULL: &[ExerciseVariant] = &[
    ExerciseVariant {
        id: "barbell_deadlift",
        name: "Barbell Deadlift",
        pattern: MovementPattern::LowerPull,
        difficulty: 7,
        equipment_class: EquipmentClass::Gym,
        equipment: &[Equipment::Barbell],
        primary_muscles: &[Muscle::Glutes, Muscle::Hamstrings, Muscle::ErectorSpinae],
        secondary_muscles: &[Muscle::Traps, Muscle::Quads],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "barbell_hip_thrust",
        name: "Barbell Hip Thrust",
        pattern: MovementPattern::LowerPull,
        difficulty: 5,
        equipment_class: EquipmentClass::Gym,
        equipment: &[Equipment::Barbell, Equipment::Bench],
        primary_muscles: &[Muscle::Glutes],
        secondary_muscles: &[Muscle::Hamstrings],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "barbell_romanian_deadlift",
        name: "Barbell Romanian Deadlift",
        pattern: MovementPattern::LowerPull,
        difficulty: 5,
        equipment_class: EquipmentClass::Gym,
        equipment: &[Equipment::Barbell],
        primary_muscles: &[Muscle::Hamstrings, Muscle::Glutes],
        secondary_muscles: &[Muscle::ErectorSpinae],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "cable_pull_through",
        name: "Cable Pull-Through",
        pattern: MovementPattern::LowerPull,
        difficulty: 3,
        equipment_class: EquipmentClass::Gym,
        equipment: &[Equipment::Cable],
        primary_muscles: &[Muscle::Glutes],
        secondary_muscles: &[Muscle::Hamstrings],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "dumbbell_romanian_deadlift",
        name: "Dumbbell Romanian Deadlift",
        pattern: MovementPattern::LowerPull,
        difficulty: 4,
        equipment_class: EquipmentClass::Both,
        equipment: &[Equipment::Dumbbell],
        primary_muscles: &[Muscle::Hamstrings, Muscle::Glutes],
        secondary_muscles: &[Muscle::ErectorSpinae],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "glute_bridge",
        name: "Glute Bridge",
        pattern: MovementPattern::LowerPull,
        difficulty: 1,
        primary_muscles: &[Muscle::Glutes],
        secondary_muscles: &[Muscle::Hamstrings],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "kettlebell_swing",
        name: "Kettlebell Swing",
        pattern: MovementPattern::LowerPull,
        difficulty: 4,
        equipment_class: EquipmentClass::Both,
        equipment: &[Equipment::Kettlebell],
        primary_muscles: &[Muscle::Glutes, Muscle::Hamstrings],
        secondary_muscles: &[Muscle::ErectorSpinae],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "lying_leg_curl",
        name: "Lying Leg Curl",
        pattern: MovementPattern::LowerPull,
        difficulty: 2,
        equipment_class: EquipmentClass::Gym,
        equipment: &[Equipment::Machine],
        primary_muscles: &[Muscle::Hamstrings],
        secondary_muscles: &[Muscle::Calves],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "nordic_curl_negative",
        name: "Nordic Curl Negative",
        pattern: MovementPattern::LowerPull,
        difficulty: 7,
        primary_muscles: &[Muscle::Hamstrings],
        secondary_muscles: &[Muscle::Glutes],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "single_leg_glute_bridge",
        name: "Single-Leg Glute Bridge",
        pattern: MovementPattern::LowerPull,
        difficulty: 3,
        primary_muscles: &[Muscle::Glutes],
        secondary_muscles: &[Muscle::Hamstrings],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "single_leg_romanian_deadlift",
        name: "Single-Leg Romanian Deadlift",
        pattern: MovementPattern::LowerPull,
        difficulty: 4,
        primary_muscles: &[Muscle::Hamstrings, Muscle::Glutes],
        secondary_muscles: &[Muscle::ErectorSpinae],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "sliding_leg_curl",
        name: "Sliding Leg Curl",
        pattern: MovementPattern::LowerPull,
        difficulty: 5,
        primary_muscles: &[Muscle::Hamstrings],
        secondary_muscles: &[Muscle::Glutes],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "supine_hip_lift_hold",
        name: "Supine Hip Lift Hold",
        pattern: MovementPattern::LowerPull,
        difficulty: 1,
        primary_muscles: &[Muscle::Glutes],
        secondary_muscles: &[Muscle::ErectorSpinae],
        corrective: true,
        ..ExerciseVariant::default()
    },
];

const HORIZONTAL_PUSH: &[ExerciseVariant] = &[
    ExerciseVariant {
        id: "archer_push_up",
        name: "Archer Push-Up",
        pattern: MovementPattern::HorizontalPush,
        difficulty: 7,
        primary_muscles: &[Muscle::Pecs],
        secondary_muscles: &[Muscle::Triceps, Muscle::FrontDelts],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "barbell_bench_press",
        name: "Barbell Bench Press",
        pattern: MovementPattern::HorizontalPush,
        difficulty: 6,
        equipment_class: EquipmentClass::Gym,
        equipment: &[Equipment::Barbell, Equipment::Bench],
        primary_muscles: &[Muscle::Pecs, Muscle::FrontDelts],
        secondary_muscles: &[Muscle::Triceps],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "cable_chest_fly",
        name: "Cable Chest Fly",
        pattern: MovementPattern::HorizontalPush,
        difficulty: 3,
        equipment_class: EquipmentClass::Gym,
        equipment: &[Equipment::Cable],
        primary_muscles: &[Muscle::Pecs],
        secondary_muscles: &[Muscle::FrontDelts],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "decline_push_up",
        name: "Decline Push-Up",
        pattern: MovementPattern::HorizontalPush,
        difficulty: 5,
        primary_muscles: &[Muscle::Pecs, Muscle::FrontDelts],
        secondary_muscles: &[Muscle::Triceps],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "dumbbell_bench_press",
        name: "Dumbbell Bench Press",
        pattern: MovementPattern::HorizontalPush,
        difficulty: 4,
        equipment_class: EquipmentClass::Both,
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        primary_muscles: &[Muscle::Pecs, Muscle::FrontDelts],
        secondary_muscles: &[Muscle::Triceps],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "dumbbell_floor_press",
        name: "Dumbbell Floor Press",
        pattern: MovementPattern::HorizontalPush,
        difficulty: 3,
        equipment_class: EquipmentClass::Both,
        equipment: &[Equipment::Dumbbell],
        primary_muscles: &[Muscle::Pecs],
        secondary_muscles: &[Muscle::Triceps, Muscle::FrontDelts],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "incline_push_up",
        name: "Incline Push-Up",
        pattern: MovementPattern::HorizontalPush,
        difficulty: 2,
        primary_muscles: &[Muscle::Pecs],
        secondary_muscles: &[Muscle::Triceps, Muscle::FrontDelts],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "knee_push_up",
        name: "Knee Push-Up",
        pattern: MovementPattern::HorizontalPush,
        difficulty: 2,
        primary_muscles: &[Muscle::Pecs],
        secondary_muscles: &[Muscle::Triceps, Muscle::FrontDelts],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "machine_chest_press",
        name: "Machine Chest Press",
        pattern: MovementPattern::HorizontalPush,
        difficulty: 2,
        equipment_class: EquipmentClass::Gym,
        equipment: &[Equipment::Machine],
        primary_muscles: &[Muscle::Pecs],
        secondary_muscles: &[Muscle::Triceps, Muscle::FrontDelts],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "one_arm_push_up",
        name: "One-Arm Push-Up",
        pattern: MovementPattern::HorizontalPush,
        difficulty: 9,
        primary_muscles: &[Muscle::Pecs],
        secondary_muscles: &[Muscle::Triceps, Muscle::Abs],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "push_up",
        name: "Push-Up",
        pattern: MovementPattern::HorizontalPush,
        difficulty: 4,
        primary_muscles: &[Muscle::Pecs],
        secondary_muscles: &[Muscle::Triceps, Muscle::FrontDelts],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "scapular_wall_push_up",
        name: "Scapular Wall Push-Up",
        pattern: MovementPattern::HorizontalPush,
        difficulty: 1,
        primary_muscles: &[Muscle::Pecs],
        secondary_muscles: &[Muscle::FrontDelts],
        corrective: true,
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "wall_push_up",
        name: "Wall Push-Up",
        pattern: MovementPattern::HorizontalPush,
        difficulty: 1,
        primary_muscles: &[Muscle::Pecs],
        secondary_muscles: &[Muscle::Triceps],
        ..ExerciseVariant::default()
    },
];

const VERTICAL_PUSH: &[ExerciseVariant] = &[
    ExerciseVariant {
        id: "band_overhead_press",
        name: "Band Overhead Press",
        pattern: MovementPattern::VerticalPush,
        difficulty: 2,
        equipment_class: EquipmentClass::Both,
        equipment: &[Equipment::ResistanceBand],
        primary_muscles: &[Muscle::FrontDelts],
        secondary_muscles: &[Muscle::SideDelts, Muscle::Triceps],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "barbell_overhead_press",
        name: "Barbell Overhead Press",
        pattern: MovementPattern::VerticalPush,
        difficulty: 6,
        equipment_class: EquipmentClass::Gym,
        equipment: &[Equipment::Barbell],
        primary_muscles: &[Muscle::FrontDelts],
        secondary_muscles: &[Muscle::SideDelts, Muscle::Triceps],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "dumbbell_shoulder_press",
        name: "Dumbbell Shoulder Press",
        pattern: MovementPattern::VerticalPush,
        difficulty: 4,
        equipment_class: EquipmentClass::Both,
        equipment: &[Equipment::Dumbbell],
        primary_muscles: &[Muscle::FrontDelts],
        secondary_muscles: &[Muscle::SideDelts, Muscle::Triceps],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "feet_elevated_pike_push_up",
        name: "Feet-Elevated Pike Push-Up",
        pattern: MovementPattern::VerticalPush,
        difficulty: 6,
        primary_muscles: &[Muscle::FrontDelts],
        secondary_muscles: &[Muscle::Triceps, Muscle::Traps],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "hands_elevated_pike_push_up",
        name: "Hands-Elevated Pike Push-Up",
        pattern: MovementPattern::VerticalPush,
        difficulty: 3,
        primary_muscles: &[Muscle::FrontDelts],
        secondary_muscles: &[Muscle::Triceps],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "machine_shoulder_press",
        name: "Machine Shoulder Press",
        pattern: MovementPattern::VerticalPush,
        difficulty: 2,
        equipment_class: EquipmentClass::Gym,
        equipment: &[Equipment::Machine],
        primary_muscles: &[Muscle::FrontDelts],
        secondary_muscles: &[Muscle::SideDelts, Muscle::Triceps],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "pike_push_up",
        name: "Pike Push-Up",
        pattern: MovementPattern::VerticalPush,
        difficulty: 4,
        primary_muscles: &[Muscle::FrontDelts],
        secondary_muscles: &[Muscle::Triceps],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "prone_y_raise",
        name: "Prone Y Raise",
        pattern: MovementPattern::VerticalPush,
        difficulty: 1,
        primary_muscles: &[Muscle::Traps],
        secondary_muscles: &[Muscle::RearDelts, Muscle::FrontDelts],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "wall_handstand_push_up",
        name: "Wall Handstand Push-Up",
        pattern: MovementPattern::VerticalPush,
        difficulty: 9,
        primary_muscles: &[Muscle::FrontDelts, Muscle::Triceps],
        secondary_muscles: &[Muscle::Traps],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "wall_slide",
        name: "Wall Slide",
        pattern: MovementPattern::VerticalPush,
        difficulty: 1,
        primary_muscles: &[Muscle::FrontDelts],
        secondary_muscles: &[Muscle::Traps],
        corrective: true,
        ..ExerciseVariant::default()
    },
];

const VERTICAL_PULL: &[ExerciseVariant] = &[
    ExerciseVariant {
        id: "archer_pull_up",
        name: "Archer Pull-Up",
        pattern: MovementPattern::VerticalPull,
        difficulty: 8,
        equipment: &[Equipment::PullUpBar],
        primary_muscles: &[Muscle::Lats],
        secondary_muscles: &[Muscle::Biceps, Muscle::RearDelts],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "band_lat_pulldown",
        name: "Band Lat Pulldown",
        pattern: MovementPattern::VerticalPull,
        difficulty: 2,
        equipment_class: EquipmentClass::Both,
        equipment: &[Equipment::ResistanceBand],
        primary_muscles: &[Muscle::Lats],
        secondary_muscles: &[Muscle::Biceps],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "chin_up",
        name: "Chin-Up",
        pattern: MovementPattern::VerticalPull,
        difficulty: 5,
        equipment_class: EquipmentClass::Both,
        equipment: &[Equipment::PullUpBar],
        primary_muscles: &[Muscle::Lats, Muscle::Biceps],
        secondary_muscles: &[Muscle::RearDelts],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "floor_slide_pulldown",
        name: "Floor Slide Pulldown",
        pattern: MovementPattern::VerticalPull,
        difficulty: 3,
        primary_muscles: &[Muscle::Lats],
        secondary_muscles: &[Muscle::Biceps],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "lat_pulldown",
        name: "Lat Pulldown",
        pattern: MovementPattern::VerticalPull,
        difficulty: 2,
        equipment_class: EquipmentClass::Gym,
        equipment: &[Equipment::Cable],
        primary_muscles: &[Muscle::Lats],
        secondary_muscles: &[Muscle::Biceps],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "machine_assisted_pull_up",
        name: "Machine Assisted Pull-Up",
        pattern: MovementPattern::VerticalPull,
        difficulty: 3,
        equipment_class: EquipmentClass::Gym,
        equipment: &[Equipment::Machine],
        primary_muscles: &[Muscle::Lats],
        secondary_muscles: &[Muscle::Biceps],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "negative_pull_up",
        name: "Negative Pull-Up",
        pattern: MovementPattern::VerticalPull,
        difficulty: 4,
        equipment_class: EquipmentClass::Both,
        equipment: &[Equipment::PullUpBar],
        primary_muscles: &[Muscle::Lats],
        secondary_muscles: &[Muscle::Biceps],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "prone_lat_pulldown",
        name: "Prone Lat Pulldown",
        pattern: MovementPattern::VerticalPull,
        difficulty: 1,
        primary_muscles: &[Muscle::Lats],
        secondary_muscles: &[Muscle::RearDelts],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "pull_up",
        name: "Pull-Up",
        pattern: MovementPattern::VerticalPull,
        difficulty: 6,
        equipment_class: EquipmentClass::Both,
        equipment: &[Equipment::PullUpBar],
        primary_muscles: &[Muscle::Lats],
        secondary_muscles: &[Muscle::Biceps, Muscle::RearDelts],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "wall_angel",
        name: "Wall Angel",
        pattern: MovementPattern::VerticalPull,
        difficulty: 1,
        primary_muscles: &[Muscle::Traps],
        secondary_muscles: &[Muscle::RearDelts],
        corrective: true,
        ..ExerciseVariant::default()
    },
];

const HORIZONTAL_PULL: &[ExerciseVariant] = &[
    ExerciseVariant {
        id: "archer_inverted_row",
        name: "Archer Inverted Row",
        pattern: MovementPattern::HorizontalPull,
        difficulty: 7,
        primary_muscles: &[Muscle::Lats, Muscle::Traps],
        secondary_muscles: &[Muscle::Biceps],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "band_row",
        name: "Band Row",
        pattern: MovementPattern::HorizontalPull,
        difficulty: 2,
        equipment_class: EquipmentClass::Both,
        equipment: &[Equipment::ResistanceBand],
        primary_muscles: &[Muscle::Lats],
        secondary_muscles: &[Muscle::RearDelts, Muscle::Biceps],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "barbell_row",
        name: "Barbell Row",
        pattern: MovementPattern::HorizontalPull,
        difficulty: 6,
        equipment_class: EquipmentClass::Gym,
        equipment: &[Equipment::Barbell],
        primary_muscles: &[Muscle::Lats, Muscle::Traps],
        secondary_muscles: &[Muscle::Biceps, Muscle::ErectorSpinae],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "chest_supported_machine_row",
        name: "Chest-Supported Machine Row",
        pattern: MovementPattern::HorizontalPull,
        difficulty: 2,
        equipment_class: EquipmentClass::Gym,
        equipment: &[Equipment::Machine],
        primary_muscles: &[Muscle::Lats, Muscle::Traps],
        secondary_muscles: &[Muscle::Biceps],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "feet_elevated_inverted_row",
        name: "Feet-Elevated Inverted Row",
        pattern: MovementPattern::HorizontalPull,
        difficulty: 5,
        primary_muscles: &[Muscle::Lats, Muscle::Traps],
        secondary_muscles: &[Muscle::Biceps, Muscle::RearDelts],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "one_arm_dumbbell_row",
        name: "One-Arm Dumbbell Row",
        pattern: MovementPattern::HorizontalPull,
        difficulty: 3,
        equipment_class: EquipmentClass::Both,
        equipment: &[Equipment::Dumbbell],
        primary_muscles: &[Muscle::Lats],
        secondary_muscles: &[Muscle::Biceps, Muscle::RearDelts],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "prone_w_raise",
        name: "Prone W Raise",
        pattern: MovementPattern::HorizontalPull,
        difficulty: 1,
        primary_muscles: &[Muscle::RearDelts],
        secondary_muscles: &[Muscle::Traps],
        corrective: true,
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "seated_cable_row",
        name: "Seated Cable Row",
        pattern: MovementPattern::HorizontalPull,
        difficulty: 2,
        equipment_class: EquipmentClass::Gym,
        equipment: &[Equipment::Cable],
        primary_muscles: &[Muscle::Lats],
        secondary_muscles: &[Muscle::Biceps, Muscle::RearDelts],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "table_inverted_row",
        name: "Table Inverted Row",
        pattern: MovementPattern::HorizontalPull,
        difficulty: 3,
        primary_muscles: &[Muscle::Lats, Muscle::Traps],
        secondary_muscles: &[Muscle::Biceps, Muscle::RearDelts],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "towel_row",
        name: "Towel Row",
        pattern: MovementPattern::HorizontalPull,
        difficulty: 1,
        primary_muscles: &[Muscle::Lats],
        secondary_muscles: &[Muscle::Biceps],
        ..ExerciseVariant::default()
    },
];

const CORE: &[ExerciseVariant] = &[
    ExerciseVariant {
        id: "barbell_rollout",
        name: "Barbell Rollout",
        pattern: MovementPattern::Core,
        difficulty: 6,
        equipment_class: EquipmentClass::Gym,
        equipment: &[Equipment::Barbell],
        primary_muscles: &[Muscle::Abs],
        secondary_muscles: &[Muscle::Lats],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "bird_dog",
        name: "Bird Dog",
        pattern: MovementPattern::Core,
        difficulty: 1,
        primary_muscles: &[Muscle::ErectorSpinae],
        secondary_muscles: &[Muscle::Abs, Muscle::Glutes],
        corrective: true,
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "cable_crunch",
        name: "Cable Crunch",
        pattern: MovementPattern::Core,
        difficulty: 3,
        equipment_class: EquipmentClass::Gym,
        equipment: &[Equipment::Cable],
        primary_muscles: &[Muscle::Abs],
        secondary_muscles: &[Muscle::Obliques],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "dead_bug",
        name: "Dead Bug",
        pattern: MovementPattern::Core,
        difficulty: 1,
        primary_muscles: &[Muscle::Abs],
        secondary_muscles: &[Muscle::Obliques],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "dragon_flag",
        name: "Dragon Flag",
        pattern: MovementPattern::Core,
        difficulty: 9,
        equipment: &[Equipment::Bench],
        primary_muscles: &[Muscle::Abs],
        secondary_muscles: &[Muscle::Obliques, Muscle::Lats],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "hanging_knee_raise",
        name: "Hanging Knee Raise",
        pattern: MovementPattern::Core,
        difficulty: 5,
        equipment_class: EquipmentClass::Both,
        equipment: &[Equipment::PullUpBar],
        primary_muscles: &[Muscle::Abs],
        secondary_muscles: &[Muscle::Obliques],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "hanging_leg_raise",
        name: "Hanging Leg Raise",
        pattern: MovementPattern::Core,
        difficulty: 7,
        equipment_class: EquipmentClass::Both,
        equipment: &[Equipment::PullUpBar],
        primary_muscles: &[Muscle::Abs],
        secondary_muscles: &[Muscle::Obliques],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "hollow_body_hold",
        name: "Hollow Body Hold",
        pattern: MovementPattern::Core,
        difficulty: 4,
        primary_muscles: &[Muscle::Abs],
        secondary_muscles: &[Muscle::Obliques],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "pallof_press",
        name: "Pallof Press",
        pattern: MovementPattern::Core,
        difficulty: 2,
        equipment_class: EquipmentClass::Gym,
        equipment: &[Equipment::Cable],
        primary_muscles: &[Muscle::Obliques],
        secondary_muscles: &[Muscle::Abs],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "plank",
        name: "Plank",
        pattern: MovementPattern::Core,
        difficulty: 2,
        primary_muscles: &[Muscle::Abs],
        secondary_muscles: &[Muscle::Obliques],
        ..ExerciseVariant::default()
    },
    ExerciseVariant {
        id: "side_plank",
        name: "Side Plank",
        pattern: MovementPattern::Core,
        difficulty: 3,
        primary_muscles: &[Muscle::Obliques],
        secondary_muscles: &[Muscle::Abs],
        ..ExerciseVariant::default()
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_variants_order() {
        for pattern in MovementPattern::iter() {
            let names = variants(*pattern).iter().map(|v| v.name).collect::<Vec<_>>();
            let mut names_sorted = names.clone();
            names_sorted.sort_unstable();
            assert_eq!(names, names_sorted, "unsorted");
        }
    }

    #[test]
    fn test_variants_duplicate_names_and_ids() {
        let mut names = HashSet::new();
        let mut ids = HashSet::new();

        for pattern in MovementPattern::iter() {
            for variant in variants(*pattern) {
                assert!(names.insert(variant.name), "duplicate name {}", variant.name);
                assert!(ids.insert(variant.id), "duplicate id {}", variant.id);
            }
        }
    }

    #[test]
    fn test_variants_consistency() {
        for pattern in MovementPattern::iter() {
            assert_eq!(
                variants(*pattern).iter().filter(|v| v.corrective).count(),
                1,
                "exactly one corrective variant for {pattern}"
            );

            for variant in variants(*pattern) {
                let name = variant.name;
                assert_eq!(variant.pattern, *pattern, "wrong pattern for {name}");
                assert!((1..=10).contains(&variant.difficulty), "{name}");
                assert!(!variant.primary_muscles.is_empty(), "{name}");
                assert!(
                    variant
                        .primary_muscles
                        .iter()
                        .all(|m| !variant.secondary_muscles.contains(m)),
                    "{name}"
                );
                assert_eq!(variant.id, name.to_lowercase().replace(['-', ' '], "_"));

                if name.contains("Barbell") {
                    assert!(variant.equipment.contains(&Equipment::Barbell), "{name}");
                }
                if name.contains("Dumbbell") || name.contains("Goblet") {
                    assert!(variant.equipment.contains(&Equipment::Dumbbell), "{name}");
                }
                if name.contains("Cable") {
                    assert!(variant.equipment.contains(&Equipment::Cable), "{name}");
                }
                if name.contains("Machine") {
                    assert!(variant.equipment.contains(&Equipment::Machine), "{name}");
                }
                if name.contains("Band") {
                    assert!(variant.equipment.contains(&Equipment::ResistanceBand), "{name}");
                }
                if (name.contains("Pull-Up") && !name.contains("Machine")) || name.contains("Chin") {
                    assert!(variant.equipment.contains(&Equipment::PullUpBar), "{name}");
                }
                if variant.equipment_class == EquipmentClass::Bodyweight {
                    assert!(
                        variant.equipment.iter().all(|e| e.is_bodyweight_aid()),
                        "{name}"
                    );
                }
            }
        }
    }

    #[rstest]
    #[case::gym(EquipmentContext::Gym, EquipmentSet::none())]
    #[case::home_bodyweight(EquipmentContext::HomeBodyweight, EquipmentSet::none())]
    #[case::home_equipped(
        EquipmentContext::HomeEquipped,
        EquipmentSet::from([Equipment::Dumbbell])
    )]
    fn test_pool_has_entry_within_lowest_ceiling(
        #[case] context: EquipmentContext,
        #[case] owned: EquipmentSet,
    ) {
        let usable = context.usable(&owned);
        for pattern in MovementPattern::iter() {
            assert!(
                !pool(*pattern, context, &usable, 3).is_empty(),
                "no {pattern} variant with difficulty 3 or less"
            );
        }
    }

    #[test]
    fn test_pool_order_and_filter() {
        let usable = EquipmentContext::Gym.usable(&EquipmentSet::none());
        assert_eq!(
            pool(MovementPattern::LowerPush, EquipmentContext::Gym, &usable, 4)
                .iter()
                .map(|v| v.name)
                .collect::<Vec<_>>(),
            vec!["Leg Press", "Goblet Squat", "Hack Squat"]
        );
        assert_eq!(
            pool(
                MovementPattern::VerticalPull,
                EquipmentContext::HomeBodyweight,
                &EquipmentSet::none(),
                10
            )
            .iter()
            .map(|v| v.name)
            .collect::<Vec<_>>(),
            vec!["Prone Lat Pulldown", "Floor Slide Pulldown"]
        );
    }

    #[rstest]
    #[case("Pull-Up", Some("Pull-Up"))]
    #[case("pull-up", Some("Pull-Up"))]
    #[case("  PUSH-UP ", Some("Push-Up"))]
    #[case("table_inverted_row", Some("Table Inverted Row"))]
    #[case("Turkish Get-Up", None)]
    fn test_variant(#[case] name: &str, #[case] expected: Option<&str>) {
        assert_eq!(variant(name).map(|v| v.name), expected);
    }

    #[test]
    fn test_corrective() {
        assert_eq!(corrective(MovementPattern::Core).name, "Bird Dog");
        assert!(MovementPattern::iter().all(|p| corrective(*p).corrective));
    }

    #[test]
    fn test_substitutions_resolve() {
        for (from, to) in SUBSTITUTIONS_TO_BODYWEIGHT {
            assert!(variant(from).is_some(), "unknown exercise {from}");
            let target = variant(to).unwrap_or_else(|| panic!("unknown exercise {to}"));
            assert!(
                EquipmentContext::HomeBodyweight.admits(target.equipment_class)
                    && target.equipment.is_empty(),
                "{to} is not a bodyweight exercise"
            );
        }
        for (from, to) in SUBSTITUTIONS_TO_GYM {
            assert!(variant(from).is_some(), "unknown exercise {from}");
            let target = variant(to).unwrap_or_else(|| panic!("unknown exercise {to}"));
            assert!(
                EquipmentContext::Gym.admits(target.equipment_class),
                "{to} is not a gym exercise"
            );
        }
    }

    #[rstest]
    #[case("Pull-Up", Location::Home, Some("Table Inverted Row"))]
    #[case("chin-up", Location::Home, Some("Table Inverted Row"))]
    #[case("Barbell Back Squat", Location::Home, Some("Bulgarian Split Squat"))]
    #[case("Push-Up", Location::Gym, Some("Dumbbell Bench Press"))]
    #[case("Push-Up", Location::Home, None)]
    #[case("Turkish Get-Up", Location::Home, None)]
    fn test_substitute(
        #[case] name: &str,
        #[case] location: Location,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(substitute(name, location).map(|v| v.name), expected);
    }
}
