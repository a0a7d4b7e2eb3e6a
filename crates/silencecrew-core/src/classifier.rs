//! Message and speaker classification.
//!
//! All functions here expect input that has already been normalized with
//! [`crate::text::normalize`] (tags stripped, lowercased). They do not
//! re-check that precondition.

use serde::{Deserialize, Serialize};

use crate::patterns::{CARGO_FULL, CREWMATE_NAMES, PRECEDENCE};

/// Semantic category of a crewmate line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageCategory {
    /// The cargo hold is full.
    ///
    /// Recognized through [`is_cargo_full`] only; [`classify`] never returns it.
    CargoFull,
    /// Salvage was hooked or spotted.
    SalvageFound,
    /// Sails trimmed, wind catcher toggled.
    SailingStatus,
    /// Missing supplies or danger.
    Warning,
    /// Ambient dialogue with no gameplay content.
    IdleChatter,
    /// Anything not covered by another category.
    #[default]
    General,
}

impl MessageCategory {
    /// Every category, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::CargoFull,
        Self::SalvageFound,
        Self::SailingStatus,
        Self::Warning,
        Self::IdleChatter,
        Self::General,
    ];

    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CargoFull => "cargo_full",
            Self::SalvageFound => "salvage_found",
            Self::SailingStatus => "sailing_status",
            Self::Warning => "warning",
            Self::IdleChatter => "idle_chatter",
            Self::General => "general",
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::CargoFull => "Cargo Full",
            Self::SalvageFound => "Salvage Found",
            Self::SailingStatus => "Sailing Status",
            Self::Warning => "Warnings",
            Self::IdleChatter => "Idle Chatter",
            Self::General => "General",
        }
    }
}

impl std::fmt::Display for MessageCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true if `message` contains any of `patterns`.
#[must_use]
pub fn matches_any(message: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|pattern| message.contains(pattern))
}

/// Returns true if `name` looks like one of the known crewmates.
///
/// Containment is checked in both directions so that truncated names
/// ("jolly") and decorated ones ("bosun zarah the brave") both match.
/// An empty name never matches.
#[must_use]
pub fn is_known_actor(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }

    CREWMATE_NAMES
        .iter()
        .any(|crewmate| name.contains(crewmate) || crewmate.contains(name))
}

/// Returns true if the message reports a full cargo hold.
///
/// This is independent of [`classify`]; the policy layer consults it before
/// any category lookup.
#[must_use]
pub fn is_cargo_full(message: &str) -> bool {
    matches_any(message, CARGO_FULL)
}

/// Assigns a category to a message.
///
/// Categories are tried in fixed precedence order (salvage, sailing status,
/// warning, idle chatter). Text matching none of them is `General`, so the
/// function is total.
#[must_use]
pub fn classify(message: &str) -> MessageCategory {
    PRECEDENCE
        .iter()
        .find(|(_, groups)| groups.iter().any(|group| matches_any(message, group)))
        .map_or(MessageCategory::General, |(category, _)| *category)
}
