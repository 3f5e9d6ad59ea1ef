use std::slice::Iter;

use log::debug;

use crate::{
    EquipmentContext, EquipmentSet, ExerciseVariant, MovementPattern, Property,
    catalog::{self, variant},
};

#[derive(Debug, Clone, Copy)]
pub struct SelectionRequest<'a> {
    pub pattern: MovementPattern,
    pub context: EquipmentContext,
    pub usable: &'a EquipmentSet,
    pub rotation: usize,
    pub max_difficulty: u8,
    pub requested: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub exercise: String,
    pub variant: Option<&'static ExerciseVariant>,
    pub resolver: Resolver,
    pub reason: String,
}

impl Selection {
    fn of(variant: &'static ExerciseVariant, resolver: Resolver, reason: String) -> Self {
        Self {
            exercise: variant.name.to_string(),
            variant: Some(variant),
            resolver,
            reason,
        }
    }
}

/// Resolution strategies, tried in the order of [`Resolver::iter`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Resolver {
    CorrectivePassThrough,
    RequestedAsIs,
    DirectSubstitution,
    PoolRotation,
    NoOp,
}

impl Property for Resolver {
    fn iter() -> Iter<'static, Resolver> {
        static RESOLVERS: [Resolver; 5] = [
            Resolver::CorrectivePassThrough,
            Resolver::RequestedAsIs,
            Resolver::DirectSubstitution,
            Resolver::PoolRotation,
            Resolver::NoOp,
        ];
        RESOLVERS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Resolver::CorrectivePassThrough => "Corrective pass-through",
            Resolver::RequestedAsIs => "Requested as-is",
            Resolver::DirectSubstitution => "Direct substitution",
            Resolver::PoolRotation => "Pool rotation",
            Resolver::NoOp => "No-op",
        }
    }
}

impl Resolver {
    #[must_use]
    pub fn resolve(self, request: &SelectionRequest) -> Option<Selection> {
        match self {
            Resolver::CorrectivePassThrough => corrective_pass_through(request),
            Resolver::RequestedAsIs => requested_as_is(request),
            Resolver::DirectSubstitution => direct_substitution(request),
            Resolver::PoolRotation => pool_rotation(request),
            Resolver::NoOp => Some(no_op(request)),
        }
    }
}

/// Pick the variant for a pattern.
///
/// The result is never empty. Apart from a requested corrective exercise and
/// the last-resort no-op, the chosen variant is available with the usable
/// equipment and does not exceed the difficulty ceiling.
#[must_use]
pub fn select_variant(request: &SelectionRequest) -> Selection {
    Resolver::iter()
        .find_map(|resolver| {
            let selection = resolver.resolve(request);
            if selection.is_none() {
                debug!(
                    "{} did not resolve {} ({:?})",
                    resolver.name(),
                    request.pattern,
                    request.requested
                );
            }
            selection
        })
        .unwrap_or_else(|| no_op(request))
}

fn fits(variant: &ExerciseVariant, request: &SelectionRequest) -> bool {
    variant.is_available(request.context, request.usable)
        && variant.difficulty <= request.max_difficulty
}

fn corrective_pass_through(request: &SelectionRequest) -> Option<Selection> {
    let variant = variant(request.requested?)?;
    variant.corrective.then(|| {
        Selection::of(
            variant,
            Resolver::CorrectivePassThrough,
            format!("{} is a corrective exercise", variant.name),
        )
    })
}

fn requested_as_is(request: &SelectionRequest) -> Option<Selection> {
    let variant = variant(request.requested?)?;
    fits(variant, request).then(|| {
        Selection::of(
            variant,
            Resolver::RequestedAsIs,
            format!("{} is available", variant.name),
        )
    })
}

fn direct_substitution(request: &SelectionRequest) -> Option<Selection> {
    let requested = variant(request.requested?)?;
    let substitute = catalog::substitute(requested.name, request.context.location())?;

    if !fits(substitute, request) {
        debug!(
            "substitute {} of {} is not usable",
            substitute.name, requested.name
        );
        return None;
    }

    let reason = if requested.is_available(request.context, request.usable) {
        format!(
            "{} exceeds difficulty {}, replaced by {}",
            requested.name, request.max_difficulty, substitute.name
        )
    } else {
        format!(
            "{} is not available at {}, replaced by {}",
            requested.name,
            request.context.location(),
            substitute.name
        )
    };

    Some(Selection::of(substitute, Resolver::DirectSubstitution, reason))
}

fn pool_rotation(request: &SelectionRequest) -> Option<Selection> {
    if let Some(requested) = request.requested {
        if variant(requested).is_none()
            && catalog::substitute(requested, request.context.location()).is_none()
        {
            debug!("{requested} is not in any lookup table");
            return None;
        }
    }

    let pool = catalog::pool(
        request.pattern,
        request.context,
        request.usable,
        request.max_difficulty,
    );

    if pool.is_empty() {
        return None;
    }

    let variant = pool[request.rotation % pool.len()];

    Some(Selection::of(
        variant,
        Resolver::PoolRotation,
        format!(
            "variant {} of {} for {}",
            request.rotation % pool.len() + 1,
            pool.len(),
            request.pattern
        ),
    ))
}

fn no_op(request: &SelectionRequest) -> Selection {
    if let Some(requested) = request.requested {
        return Selection {
            exercise: requested.to_string(),
            variant: variant(requested),
            resolver: Resolver::NoOp,
            reason: format!("no alternative to {requested}"),
        };
    }

    let easiest = catalog::variants(request.pattern)
        .iter()
        .filter(|v| !v.corrective && request.context.admits(v.equipment_class))
        .min_by_key(|v| v.difficulty)
        .unwrap_or_else(|| catalog::corrective(request.pattern));

    Selection::of(
        easiest,
        Resolver::NoOp,
        format!("easiest {} variant", request.pattern),
    )
}
