//! Deciding whose crew a crewmate belongs to.
//!
//! The game gives no reliable signal for this yet, so the only shipped
//! resolver, [`AssumeOwnCrew`], treats every crewmate as the user's own.
//! Hosts with better information (distance to the player's boat, menu
//! options on the NPC) can plug in their own [`OwnershipResolver`].

use serde::{Deserialize, Serialize};

use crate::config::FilterConfig;
use crate::events::Actor;

/// Whose crew a crewmate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ownership {
    /// The user's own crewmate.
    #[default]
    OwnCrew,
    /// Another player's crewmate.
    OthersCrew,
}

impl Ownership {
    /// `OwnCrew` for `true`, `OthersCrew` for `false`.
    #[must_use]
    pub const fn from_is_own(is_own: bool) -> Self {
        if is_own { Self::OwnCrew } else { Self::OthersCrew }
    }

    /// Returns true for `OwnCrew`.
    #[must_use]
    pub const fn is_own(&self) -> bool {
        matches!(self, Self::OwnCrew)
    }

    /// Settles an optional resolution, applying the user's fallback
    /// (`treatAmbiguousAsOwn`) when the resolver couldn't decide.
    #[must_use]
    pub const fn resolve_ambiguous(resolved: Option<Self>, config: &FilterConfig) -> Self {
        match resolved {
            Some(ownership) => ownership,
            None => Self::from_is_own(config.treat_ambiguous_as_own),
        }
    }

    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OwnCrew => "own_crew",
            Self::OthersCrew => "others_crew",
        }
    }
}

/// Determines ownership of the actor behind an overhead text event.
///
/// Returning `None` means "can't tell"; the caller then applies
/// [`Ownership::resolve_ambiguous`].
pub trait OwnershipResolver {
    /// Resolve ownership of `actor`.
    fn resolve(&self, actor: &Actor) -> Option<Ownership>;
}

/// Treats every crewmate as the user's own.
///
/// Known limitation: there is no ownership signal available yet.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeOwnCrew;

impl OwnershipResolver for AssumeOwnCrew {
    fn resolve(&self, _actor: &Actor) -> Option<Ownership> {
        Some(Ownership::OwnCrew)
    }
}

impl<F> OwnershipResolver for F
where
    F: Fn(&Actor) -> Option<Ownership>,
{
    fn resolve(&self, actor: &Actor) -> Option<Ownership> {
        self(actor)
    }
}
