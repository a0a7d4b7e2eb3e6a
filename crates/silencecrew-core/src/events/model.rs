//! Host event types.

use serde::{Deserialize, Serialize};

/// What kind of entity an actor is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    /// A non-player character. Crewmates are always NPCs.
    #[default]
    Npc,
    /// A player character.
    Player,
}

/// The entity an overhead text belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Actor {
    /// Display name as reported by the host, if any.
    pub name: Option<String>,
    /// NPC or player.
    pub kind: ActorKind,
}

impl Actor {
    /// A named NPC.
    #[must_use]
    pub fn npc(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            kind: ActorKind::Npc,
        }
    }

    /// An NPC whose name the host couldn't provide.
    #[must_use]
    pub const fn unnamed_npc() -> Self {
        Self {
            name: None,
            kind: ActorKind::Npc,
        }
    }

    /// A named player.
    #[must_use]
    pub fn player(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            kind: ActorKind::Player,
        }
    }

    /// Returns true for NPCs.
    #[must_use]
    pub const fn is_npc(&self) -> bool {
        matches!(self.kind, ActorKind::Npc)
    }
}

/// Text shown above an actor changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverheadTextChanged {
    /// The speaking actor.
    pub actor: Actor,
    /// Raw overhead text.
    pub text: String,
}

impl OverheadTextChanged {
    /// Creates a new overhead text event.
    #[must_use]
    pub fn new(actor: Actor, text: impl Into<String>) -> Self {
        Self {
            actor,
            text: text.into(),
        }
    }
}

/// Chat channel a message arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatMessageType {
    /// Public chat.
    PublicChat,
    /// Game message.
    GameMessage,
    /// NPC dialog.
    Dialog,
    /// NPC examine text.
    NpcExamine,
    /// Filterable spam.
    Spam,
    /// Any channel crewmates never speak on (private, clan, trade, ...).
    Other,
}

impl ChatMessageType {
    /// Returns true for channels crewmate dialogue can appear on.
    #[must_use]
    pub const fn is_crew_dialogue(&self) -> bool {
        !matches!(self, Self::Other)
    }

    /// Parse from string representation. Unknown channels map to `Other`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().replace('-', "_").as_str() {
            "public_chat" | "publicchat" | "public" => Self::PublicChat,
            "game_message" | "gamemessage" | "game" => Self::GameMessage,
            "dialog" => Self::Dialog,
            "npc_examine" | "npcexamine" | "examine" => Self::NpcExamine,
            "spam" => Self::Spam,
            _ => Self::Other,
        }
    }

    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PublicChat => "public_chat",
            Self::GameMessage => "game_message",
            Self::Dialog => "dialog",
            Self::NpcExamine => "npc_examine",
            Self::Spam => "spam",
            Self::Other => "other",
        }
    }
}

/// A line arrived in the chat box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Channel.
    pub kind: ChatMessageType,
    /// Speaker name, possibly with markup. Absent for system lines.
    pub name: Option<String>,
    /// Raw message, possibly with markup.
    pub message: String,
}

impl ChatMessage {
    /// Creates a new chat message event.
    #[must_use]
    pub fn new(kind: ChatMessageType, name: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.map(ToString::to_string),
            message: message.into(),
        }
    }
}

/// Where a suppressed line gets blanked.
///
/// The host implements this over whatever holds the displayed text (an
/// actor's overhead text, a chat log node).
pub trait TextSink {
    /// Clear the displayed text.
    fn blank(&mut self);
}

impl TextSink for String {
    fn blank(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crew_dialogue_channels() {
        for kind in [
            ChatMessageType::PublicChat,
            ChatMessageType::GameMessage,
            ChatMessageType::Dialog,
            ChatMessageType::NpcExamine,
            ChatMessageType::Spam,
        ] {
            assert!(kind.is_crew_dialogue(), "{}", kind.as_str());
            assert_eq!(ChatMessageType::parse(kind.as_str()), kind);
        }
        assert!(!ChatMessageType::Other.is_crew_dialogue());
    }

    #[test]
    fn test_unknown_channel_is_other() {
        assert_eq!(ChatMessageType::parse("private"), ChatMessageType::Other);
        assert_eq!(ChatMessageType::parse("Game-Message"), ChatMessageType::GameMessage);
    }

    #[test]
    fn test_string_sink_blanks() {
        let mut text = String::from("Woo!");
        text.blank();
        assert!(text.is_empty());
    }

    #[test]
    fn test_actor_constructors() {
        assert!(Actor::npc("Jolly Jim").is_npc());
        assert!(!Actor::player("Zezima").is_npc());
        assert_eq!(Actor::unnamed_npc().name, None);
    }
}
