//! Event handling: from a raw host event to a blanked (or untouched) line.

use serde::Serialize;
use tracing::debug;

use super::model::{ChatMessage, OverheadTextChanged, TextSink};
use crate::classifier::is_known_actor;
use crate::config::SharedConfig;
use crate::ownership::{AssumeOwnCrew, Ownership, OwnershipResolver};
use crate::policy::{Decision, decide};
use crate::text::normalize;

/// Why an event was passed through without evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// Overhead text from a player, not an NPC.
    NotAnNpc,
    /// The actor had no name.
    MissingName,
    /// The speaker is not a known crewmate.
    NotACrewmate,
    /// Chat channel crewmates don't use.
    IrrelevantChannel,
}

/// What happened to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Not a crewmate line; left alone.
    Ignored {
        /// Why it was skipped.
        reason: IgnoreReason,
    },
    /// Crewmate line, shown.
    Shown(Decision),
    /// Crewmate line, blanked.
    Suppressed(Decision),
}

impl Outcome {
    /// Returns true if the line was blanked.
    #[must_use]
    pub const fn is_suppressed(&self) -> bool {
        matches!(self, Self::Suppressed(_))
    }

    /// The decision, if the line was evaluated.
    #[must_use]
    pub const fn decision(&self) -> Option<&Decision> {
        match self {
            Self::Ignored { .. } => None,
            Self::Shown(decision) | Self::Suppressed(decision) => Some(decision),
        }
    }

    const fn ignored(reason: IgnoreReason) -> Self {
        Self::Ignored { reason }
    }
}

/// Filters crewmate lines as the host delivers them.
///
/// Reads a fresh configuration snapshot for every event, so edits made
/// through the [`SharedConfig`] apply to the very next line.
#[derive(Debug, Clone)]
pub struct CrewFilter<R = AssumeOwnCrew> {
    config: SharedConfig,
    resolver: R,
}

impl CrewFilter<AssumeOwnCrew> {
    /// Creates a filter that treats every crewmate as the user's own.
    #[must_use]
    pub fn new(config: SharedConfig) -> Self {
        Self::with_resolver(config, AssumeOwnCrew)
    }
}

impl<R: OwnershipResolver> CrewFilter<R> {
    /// Creates a filter with a custom ownership resolver.
    #[must_use]
    pub const fn with_resolver(config: SharedConfig, resolver: R) -> Self {
        Self { config, resolver }
    }

    /// The live configuration handle.
    #[must_use]
    pub const fn config(&self) -> &SharedConfig {
        &self.config
    }

    /// Handle overhead text above an actor, blanking `sink` if suppressed.
    pub fn on_overhead_text_changed(
        &self,
        event: &OverheadTextChanged,
        sink: &mut impl TextSink,
    ) -> Outcome {
        if !event.actor.is_npc() {
            return Outcome::ignored(IgnoreReason::NotAnNpc);
        }

        let Some(name) = event.actor.name.as_deref() else {
            return Outcome::ignored(IgnoreReason::MissingName);
        };

        let name = name.to_lowercase();
        if !is_known_actor(&name) {
            debug!(%name, "Not a crewmate");
            return Outcome::ignored(IgnoreReason::NotACrewmate);
        }

        let message = event.text.to_lowercase();
        debug!(%name, %message, "Crewmate overhead");

        let config = self.config.snapshot();
        let ownership =
            Ownership::resolve_ambiguous(self.resolver.resolve(&event.actor), &config);

        Self::apply(decide(&message, ownership, &config), sink)
    }

    /// Handle a chat line, blanking `sink` if suppressed.
    ///
    /// Chat events carry no ownership signal, so crewmate lines are always
    /// judged as the user's own crew.
    pub fn on_chat_message(&self, event: &ChatMessage, sink: &mut impl TextSink) -> Outcome {
        if !event.kind.is_crew_dialogue() {
            return Outcome::ignored(IgnoreReason::IrrelevantChannel);
        }

        // Only the speaker name identifies crew lines; matching on text alone
        // would catch unrelated game messages.
        let name = event.name.as_deref().map(normalize).unwrap_or_default();
        if !is_known_actor(&name) {
            return Outcome::ignored(IgnoreReason::NotACrewmate);
        }

        let message = normalize(&event.message);
        debug!(%name, %message, kind = event.kind.as_str(), "Crewmate chat");

        let config = self.config.snapshot();
        Self::apply(decide(&message, Ownership::OwnCrew, &config), sink)
    }

    fn apply(decision: Decision, sink: &mut impl TextSink) -> Outcome {
        debug!(
            category = decision.category.as_str(),
            ownership = decision.ownership.as_str(),
            cargo_full = decision.cargo_full,
            suppress = decision.suppress,
            "Decision"
        );

        if decision.suppress {
            sink.blank();
            Outcome::Suppressed(decision)
        } else {
            Outcome::Shown(decision)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::classifier::MessageCategory;
    use crate::config::{FilterConfig, SettingKey};
    use crate::events::{Actor, ChatMessageType};

    /// Sink that records whether it was blanked.
    #[derive(Default)]
    struct RecordingSink {
        blanked: usize,
    }

    impl TextSink for RecordingSink {
        fn blank(&mut self) {
            self.blanked += 1;
        }
    }

    fn overhead(name: &str, text: &str) -> OverheadTextChanged {
        OverheadTextChanged::new(Actor::npc(name), text)
    }

    #[test]
    fn test_overhead_idle_chatter_blanked() {
        let filter = CrewFilter::new(SharedConfig::default());
        let event = overhead("Ex-Captain Siad", "Life is easier on the sea");
        let mut text = event.text.clone();

        let outcome = filter.on_overhead_text_changed(&event, &mut text);

        assert!(outcome.is_suppressed());
        assert_eq!(
            outcome.decision().unwrap().category,
            MessageCategory::IdleChatter
        );
        assert!(text.is_empty());
    }

    #[test]
    fn test_overhead_cargo_full_kept() {
        let filter = CrewFilter::new(SharedConfig::default());
        let mut sink = RecordingSink::default();

        let outcome = filter.on_overhead_text_changed(
            &overhead("Jolly Jim", "The cargo hold is full. I can't salvage anything."),
            &mut sink,
        );

        assert!(matches!(outcome, Outcome::Shown(d) if d.cargo_full));
        assert_eq!(sink.blanked, 0);
    }

    #[test]
    fn test_overhead_ignores_players_and_strangers() {
        let filter = CrewFilter::new(SharedConfig::default());
        let mut sink = RecordingSink::default();

        let player = OverheadTextChanged::new(Actor::player("Jolly Jim"), "woo");
        assert_eq!(
            filter.on_overhead_text_changed(&player, &mut sink),
            Outcome::Ignored {
                reason: IgnoreReason::NotAnNpc
            }
        );

        let unnamed = OverheadTextChanged::new(Actor::unnamed_npc(), "woo");
        assert_eq!(
            filter.on_overhead_text_changed(&unnamed, &mut sink),
            Outcome::Ignored {
                reason: IgnoreReason::MissingName
            }
        );

        assert_eq!(
            filter.on_overhead_text_changed(&overhead("Banker", "woo"), &mut sink),
            Outcome::Ignored {
                reason: IgnoreReason::NotACrewmate
            }
        );
        assert_eq!(sink.blanked, 0);
    }

    #[test]
    fn test_overhead_uses_resolver_and_fallback() {
        let config = SharedConfig::default();
        let unknown = |_: &Actor| -> Option<Ownership> { None };
        let filter = CrewFilter::with_resolver(config.clone(), unknown);
        let mut sink = RecordingSink::default();
        let warning = overhead("Bosun Zarah", "I can't find any ammo in the cargo hold");

        // Ambiguous + treatAmbiguousAsOwn: own-crew warnings are shown.
        assert!(!filter.on_overhead_text_changed(&warning, &mut sink).is_suppressed());

        config.set(SettingKey::TreatAmbiguousAsOwn, false);
        let outcome = filter.on_overhead_text_changed(&warning, &mut sink);
        assert!(outcome.is_suppressed());
        assert_eq!(outcome.decision().unwrap().ownership, Ownership::OthersCrew);
        assert_eq!(sink.blanked, 1);
    }

    #[test]
    fn test_config_edits_apply_to_next_event() {
        let config = SharedConfig::default();
        let filter = CrewFilter::new(config.clone());
        let mut sink = RecordingSink::default();
        let event = overhead("Sailor Jakob", "Enabling the wind catcher!");

        assert!(filter.on_overhead_text_changed(&event, &mut sink).is_suppressed());

        config.set(SettingKey::FilterOwnSailingStatus, false);
        assert!(!filter.on_overhead_text_changed(&event, &mut sink).is_suppressed());

        config.replace(FilterConfig::default());
        assert!(filter.on_overhead_text_changed(&event, &mut sink).is_suppressed());
        assert_eq!(sink.blanked, 2);
    }

    #[test]
    fn test_chat_strips_tags_and_filters() {
        let filter = CrewFilter::new(SharedConfig::default());
        let mut sink = RecordingSink::default();
        let event = ChatMessage::new(
            ChatMessageType::PublicChat,
            Some("<img=3>Adventurer Ada"),
            "<col=0000ff>Managed to hook some salvage!</col>",
        );

        let outcome = filter.on_chat_message(&event, &mut sink);
        assert!(outcome.is_suppressed());
        assert_eq!(
            outcome.decision().unwrap().category,
            MessageCategory::SalvageFound
        );
        assert_eq!(sink.blanked, 1);
    }

    #[test]
    fn test_chat_always_judged_as_own_crew() {
        let config = SharedConfig::default();
        config.set(SettingKey::TreatAmbiguousAsOwn, false);
        let filter = CrewFilter::with_resolver(config, |_: &Actor| Some(Ownership::OthersCrew));
        let mut sink = RecordingSink::default();
        let event = ChatMessage::new(
            ChatMessageType::Dialog,
            Some("Oarswoman Olga"),
            "I can't find any repair kits in the cargo hold",
        );

        let outcome = filter.on_chat_message(&event, &mut sink);
        assert_eq!(outcome.decision().unwrap().ownership, Ownership::OwnCrew);
        assert!(!outcome.is_suppressed());
    }

    #[test]
    fn test_chat_ignores_other_channels_and_unnamed_lines() {
        let filter = CrewFilter::new(SharedConfig::default());
        let mut sink = RecordingSink::default();

        let private = ChatMessage::new(ChatMessageType::Other, Some("Jolly Jim"), "woo");
        assert_eq!(
            filter.on_chat_message(&private, &mut sink),
            Outcome::Ignored {
                reason: IgnoreReason::IrrelevantChannel
            }
        );

        let system = ChatMessage::new(
            ChatMessageType::GameMessage,
            None,
            "You have mined all you can from the shell",
        );
        assert_eq!(
            filter.on_chat_message(&system, &mut sink),
            Outcome::Ignored {
                reason: IgnoreReason::NotACrewmate
            }
        );
        assert_eq!(sink.blanked, 0);
    }
}
