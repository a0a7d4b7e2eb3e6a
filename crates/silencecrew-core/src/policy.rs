//! Suppression policy.
//!
//! Maps a classified message, its ownership and the current configuration to
//! a show/hide decision. Nothing here mutates state or caches results; the
//! same inputs always give the same answer.

use serde::Serialize;

use crate::classifier::{MessageCategory, classify, is_cargo_full};
use crate::config::FilterConfig;
use crate::ownership::Ownership;

/// The full outcome of evaluating one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decision {
    /// Category from the precedence chain.
    pub category: MessageCategory,
    /// Whether the message also reports a full cargo hold.
    pub cargo_full: bool,
    /// Ownership the decision was made for.
    pub ownership: Ownership,
    /// Whether the message should be hidden.
    pub suppress: bool,
}

/// Evaluates a normalized message against `config`.
///
/// The cargo full override is checked before any category lookup: with
/// `always_show_cargo_full` set, a cargo full line is shown no matter which
/// other category it matches. With the override off, cargo full lines get
/// no special treatment.
#[must_use]
pub fn decide(message: &str, ownership: Ownership, config: &FilterConfig) -> Decision {
    let cargo_full = is_cargo_full(message);
    let category = classify(message);

    let suppress = if config.always_show_cargo_full && cargo_full {
        false
    } else {
        config.setting_for(category, ownership)
    };

    Decision {
        category,
        cargo_full,
        ownership,
        suppress,
    }
}

/// Returns true if a normalized message should be hidden.
#[must_use]
pub fn should_suppress(message: &str, ownership: Ownership, config: &FilterConfig) -> bool {
    if config.always_show_cargo_full && is_cargo_full(message) {
        return false;
    }

    config.setting_for(classify(message), ownership)
}
