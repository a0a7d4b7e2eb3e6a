//! Replay of recorded host events.
//!
//! One event per line, fields separated by `|`:
//!
//! ```text
//! overhead|npc|Jolly Jim|Woo!
//! overhead|player|Zezima|Selling lobsters
//! chat|public_chat|Bosun Zarah|Trimmed those sails good and proper, Captain!
//! ```
//!
//! An empty name field means the host reported no name. Blank lines and
//! lines starting with `#` are skipped.

use anyhow::{Context, Result, bail};
use serde::Serialize;

use silencecrew_core::{
    Actor, ChatMessage, ChatMessageType, CrewFilter, OverheadTextChanged, Outcome,
    OwnershipResolver,
};

/// A parsed replay line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Overhead text above an actor.
    Overhead(OverheadTextChanged),
    /// Chat box line.
    Chat(ChatMessage),
}

impl Event {
    /// The text as the host would display it.
    pub fn text(&self) -> &str {
        match self {
            Self::Overhead(event) => &event.text,
            Self::Chat(event) => &event.message,
        }
    }
}

/// One replayed event and what the filter did with it.
#[derive(Debug, Serialize)]
pub struct Report {
    /// 1-based line number in the input.
    pub line: usize,
    /// Text as it would be displayed after filtering.
    pub displayed: String,
    /// Filter outcome.
    #[serde(flatten)]
    pub outcome: Outcome,
}

fn non_empty(field: &str) -> Option<String> {
    let field = field.trim();
    (!field.is_empty()).then(|| field.to_string())
}

/// Parse one replay line. Returns `Ok(None)` for blank and comment lines.
///
/// # Errors
///
/// Returns an error if the line doesn't match the replay format.
pub fn parse_line(line: &str) -> Result<Option<Event>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    // The text field is kept verbatim; only the header fields are trimmed.
    let fields: Vec<&str> = line.splitn(4, '|').collect();
    let [source, kind, name, text] = fields.as_slice() else {
        bail!("expected 4 '|'-separated fields, got {}", fields.len());
    };

    let event = match source.trim() {
        "overhead" => {
            let name = non_empty(name);
            let actor = match kind.trim() {
                "npc" => Actor {
                    name,
                    ..Actor::unnamed_npc()
                },
                "player" => Actor {
                    name,
                    kind: silencecrew_core::ActorKind::Player,
                },
                other => bail!("unknown actor kind '{other}' (expected npc or player)"),
            };
            Event::Overhead(OverheadTextChanged::new(actor, *text))
        }
        "chat" => Event::Chat(ChatMessage {
            kind: ChatMessageType::parse(kind.trim()),
            name: non_empty(name),
            message: (*text).to_string(),
        }),
        other => bail!("unknown event source '{other}' (expected overhead or chat)"),
    };

    Ok(Some(event))
}

/// Run every event in `input` through `filter`.
///
/// # Errors
///
/// Returns an error naming the offending line if any line is malformed.
pub fn replay<R: OwnershipResolver>(filter: &CrewFilter<R>, input: &str) -> Result<Vec<Report>> {
    let mut reports = Vec::new();

    for (index, line) in input.lines().enumerate() {
        let number = index + 1;
        let Some(event) = parse_line(line).with_context(|| format!("line {number}"))? else {
            continue;
        };

        let mut displayed = event.text().to_string();
        let outcome = match &event {
            Event::Overhead(event) => filter.on_overhead_text_changed(event, &mut displayed),
            Event::Chat(event) => filter.on_chat_message(event, &mut displayed),
        };

        reports.push(Report {
            line: number,
            displayed,
            outcome,
        });
    }

    Ok(reports)
}
