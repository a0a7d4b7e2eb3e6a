//! # silencecrew-core
//!
//! Classification and suppression policy for crewmate chatter while sailing.
//!
//! This crate provides:
//! - **Classifier**: sorts a crewmate line into one of a few fixed categories
//!   (salvage found, sailing status, warning, idle chatter, general) and
//!   recognizes crewmate names and cargo full alerts
//! - **Policy**: decides, per category and per ownership (own crew vs.
//!   others' crew), whether a line should be hidden
//! - **Configuration**: the user's switches, a live shared handle and the
//!   JSON settings file
//! - **Ownership**: a pluggable resolver for whose crew a crewmate is
//! - **Events**: glue from host events to a blanked line
//!
//! Classification and policy are pure and total: every message gets a
//! category and a decision, and the same inputs always give the same result.
//!
//! ## Example
//!
//! ```ignore
//! use silencecrew_core::{FilterConfig, MessageCategory, Ownership, classify, should_suppress};
//!
//! let config = FilterConfig::default();
//! assert_eq!(classify("life is easier on the sea"), MessageCategory::IdleChatter);
//! assert!(should_suppress("life is easier on the sea", Ownership::OwnCrew, &config));
//! assert!(!should_suppress("the cargo hold is full", Ownership::OwnCrew, &config));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod classifier;
pub mod config;
mod error;
pub mod events;
pub mod ownership;
pub mod patterns;
pub mod policy;
pub mod text;

pub use classifier::{MessageCategory, classify, is_cargo_full, is_known_actor};
pub use config::{ConfigSection, FilterConfig, SettingKey, SharedConfig};
pub use error::{Error, Result};
pub use events::{
    Actor, ActorKind, ChatMessage, ChatMessageType, CrewFilter, IgnoreReason, OverheadTextChanged,
    Outcome, TextSink,
};
pub use ownership::{AssumeOwnCrew, Ownership, OwnershipResolver};
pub use policy::{Decision, decide, should_suppress};
pub use text::normalize;
