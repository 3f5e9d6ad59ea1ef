use std::{collections::BTreeSet, fmt, slice::Iter};

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MovementPattern {
    LowerPush,
    LowerPull,
    HorizontalPush,
    VerticalPush,
    VerticalPull,
    HorizontalPull,
    Core,
}

impl Property for MovementPattern {
    fn iter() -> Iter<'static, MovementPattern> {
        static PATTERNS: [MovementPattern; 7] = [
            MovementPattern::LowerPush,
            MovementPattern::LowerPull,
            MovementPattern::HorizontalPush,
            MovementPattern::VerticalPush,
            MovementPattern::VerticalPull,
            MovementPattern::HorizontalPull,
            MovementPattern::Core,
        ];
        PATTERNS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MovementPattern::LowerPush => "Lower Push",
            MovementPattern::LowerPull => "Lower Pull",
            MovementPattern::HorizontalPush => "Horizontal Push",
            MovementPattern::VerticalPush => "Vertical Push",
            MovementPattern::VerticalPull => "Vertical Pull",
            MovementPattern::HorizontalPull => "Horizontal Pull",
            MovementPattern::Core => "Core",
        }
    }
}

impl MovementPattern {
    /// Parse the snake case identifiers used by assessments (`lower_push`, ...).
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "lower_push" | "squat" => Some(MovementPattern::LowerPush),
            "lower_pull" | "hinge" => Some(MovementPattern::LowerPull),
            "horizontal_push" | "push" => Some(MovementPattern::HorizontalPush),
            "vertical_push" => Some(MovementPattern::VerticalPush),
            "vertical_pull" | "pull" => Some(MovementPattern::VerticalPull),
            "horizontal_pull" | "row" => Some(MovementPattern::HorizontalPull),
            "core" => Some(MovementPattern::Core),
            _ => None,
        }
    }
}

impl fmt::Display for MovementPattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Muscle {
    Pecs,
    FrontDelts,
    SideDelts,
    RearDelts,
    Lats,
    Traps,
    Biceps,
    Triceps,
    Abs,
    Obliques,
    ErectorSpinae,
    Glutes,
    Quads,
    Hamstrings,
    Calves,
}

impl Property for Muscle {
    fn iter() -> Iter<'static, Muscle> {
        static MUSCLES: [Muscle; 15] = [
            Muscle::Pecs,
            Muscle::FrontDelts,
            Muscle::SideDelts,
            Muscle::RearDelts,
            Muscle::Lats,
            Muscle::Traps,
            Muscle::Biceps,
            Muscle::Triceps,
            Muscle::Abs,
            Muscle::Obliques,
            Muscle::ErectorSpinae,
            Muscle::Glutes,
            Muscle::Quads,
            Muscle::Hamstrings,
            Muscle::Calves,
        ];
        MUSCLES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Muscle::Pecs => "Pecs",
            Muscle::FrontDelts => "Front Delts",
            Muscle::SideDelts => "Side Delts",
            Muscle::RearDelts => "Rear Delts",
            Muscle::Lats => "Lats",
            Muscle::Traps => "Traps",
            Muscle::Biceps => "Biceps",
            Muscle::Triceps => "Triceps",
            Muscle::Abs => "Abs",
            Muscle::Obliques => "Obliques",
            Muscle::ErectorSpinae => "Erector Spinae",
            Muscle::Glutes => "Glutes",
            Muscle::Quads => "Quads",
            Muscle::Hamstrings => "Hamstrings",
            Muscle::Calves => "Calves",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Equipment {
    Barbell,
    Bench,
    Cable,
    Dumbbell,
    Kettlebell,
    Machine,
    PullUpBar,
    ResistanceBand,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 8] = [
            Equipment::Barbell,
            Equipment::Bench,
            Equipment::Cable,
            Equipment::Dumbbell,
            Equipment::Kettlebell,
            Equipment::Machine,
            Equipment::PullUpBar,
            Equipment::ResistanceBand,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Barbell => "Barbell",
            Equipment::Bench => "Bench",
            Equipment::Cable => "Cable",
            Equipment::Dumbbell => "Dumbbell",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::Machine => "Machine",
            Equipment::PullUpBar => "Pull Up Bar",
            Equipment::ResistanceBand => "Resistance Band",
        }
    }
}

impl Equipment {
    /// Household fixtures that still count as bodyweight training.
    #[must_use]
    pub fn is_bodyweight_aid(self) -> bool {
        matches!(self, Equipment::PullUpBar | Equipment::Bench)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EquipmentClass {
    Bodyweight,
    Gym,
    Both,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EquipmentSet(BTreeSet<Equipment>);

impl EquipmentSet {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn all() -> Self {
        Self(Equipment::iter().copied().collect())
    }

    #[must_use]
    pub fn contains(&self, equipment: Equipment) -> bool {
        self.0.contains(&equipment)
    }

    #[must_use]
    pub fn contains_all(&self, equipment: &[Equipment]) -> bool {
        equipment.iter().all(|e| self.0.contains(e))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, equipment: Equipment) {
        self.0.insert(equipment);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Equipment> {
        self.0.iter()
    }
}

impl<const N: usize> From<[Equipment; N]> for EquipmentSet {
    fn from(value: [Equipment; N]) -> Self {
        Self(value.into_iter().collect())
    }
}

impl FromIterator<Equipment> for EquipmentSet {
    fn from_iter<T: IntoIterator<Item = Equipment>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Location {
    Home,
    Gym,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Location::Home => "home",
                Location::Gym => "gym",
            }
        )
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EquipmentContext {
    Gym,
    HomeBodyweight,
    HomeEquipped,
}

impl EquipmentContext {
    #[must_use]
    pub fn location(self) -> Location {
        match self {
            EquipmentContext::Gym => Location::Gym,
            EquipmentContext::HomeBodyweight | EquipmentContext::HomeEquipped => Location::Home,
        }
    }

    #[must_use]
    pub fn admits(self, class: EquipmentClass) -> bool {
        match self {
            EquipmentContext::Gym => matches!(class, EquipmentClass::Gym | EquipmentClass::Both),
            EquipmentContext::HomeBodyweight => {
                matches!(class, EquipmentClass::Bodyweight | EquipmentClass::Both)
            }
            EquipmentContext::HomeEquipped => true,
        }
    }

    /// The equipment that is actually usable in this context.
    #[must_use]
    pub fn usable(self, owned: &EquipmentSet) -> EquipmentSet {
        match self {
            EquipmentContext::Gym => EquipmentSet::all(),
            EquipmentContext::HomeBodyweight => owned
                .iter()
                .copied()
                .filter(|e| e.is_bodyweight_aid())
                .collect(),
            EquipmentContext::HomeEquipped => owned.clone(),
        }
    }
}
