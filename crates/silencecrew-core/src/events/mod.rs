//! Host event handling.
//!
//! The host delivers two kinds of events:
//! - **Overhead text** above an actor in the world
//! - **Chat messages** in the chat box
//!
//! [`CrewFilter`] checks whether the speaker is a crewmate, classifies the
//! line, resolves ownership, applies the user's configuration and, when the
//! line should be hidden, blanks it through the host's [`TextSink`].
//!
//! # Example
//!
//! ```ignore
//! use silencecrew_core::config::SharedConfig;
//! use silencecrew_core::events::{Actor, CrewFilter, OverheadTextChanged};
//!
//! let filter = CrewFilter::new(SharedConfig::default());
//! let event = OverheadTextChanged::new(Actor::npc("Jobless Jim"), "C for miles. C for fish.");
//! let mut shown = event.text.clone();
//!
//! if filter.on_overhead_text_changed(&event, &mut shown).is_suppressed() {
//!     assert!(shown.is_empty());
//! }
//! ```

mod handler;
mod model;

pub use handler::{CrewFilter, IgnoreReason, Outcome};
pub use model::{Actor, ActorKind, ChatMessage, ChatMessageType, OverheadTextChanged, TextSink};
