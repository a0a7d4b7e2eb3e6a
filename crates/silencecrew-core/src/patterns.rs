//! Compiled-in name and phrase tables.
//!
//! Every entry is lowercase. Matching is plain substring containment, so an
//! entry only needs to cover the distinctive part of a line, not the whole
//! sentence.

use crate::classifier::MessageCategory;

/// A group of phrases; a message matches the group if it contains any of them.
pub type PatternGroup = &'static [&'static str];

/// Known crewmate names.
pub const CREWMATE_NAMES: &[&str] = &[
    "jobless jim",
    "ex-captain siad",
    "adventurer ada",
    "cabin boy jenkins",
    "oarswoman olga",
    "jittery jim",
    "bosun zarah",
    "jolly jim",
    "spotter virginia",
    "sailor jakob",
];

/// The cargo hold is at capacity.
pub const CARGO_FULL: PatternGroup = &[
    "the cargo hold is full",
    "cargo hold is full",
    "can't salvage anything",
];

/// Salvage hooked, spotted or stowed.
pub const SALVAGE_FOUND: PatternGroup = &[
    "managed to hook some salvage",
    "i'll put it in the cargo hold",
    "there's somethin' in the drink",
    "i can see something to the",
    "one man's rubbish",
    "havin a butchers at the hook",
    "i've caught a wind mote",
];

/// Sail trimming and wind catcher toggles.
pub const SAILING_STATUS: PatternGroup = &[
    "trimmed those sails",
    "enabling the wind catcher",
    "disabling the wind catcher",
    "aye, that's better",
    "me mince pies are on the sails",
    "all looking good on the sails",
];

/// Missing supplies or danger.
pub const WARNING: PatternGroup = &[
    "can't find any repair kits",
    "can't find any ammo",
    "sailing was supposed to be peaceful",
];

/// Jobless Jim's rhyming slang.
pub const IDLE_JOBLESS_JIM: PatternGroup = &[
    "c for miles",
    "c for fish",
    "i'm a bit taters",
    "been on me pins all day",
    "wish i had a boat",
];

/// Ex-Captain Siad's musings.
pub const IDLE_SIAD: PatternGroup = &[
    "this really is my passion",
    "life is easier on the sea",
    "this is so much better than being cooped up",
    "i'm just happy to be here",
    "this reminds me of my last holiday",
];

/// Cabin Boy Jenkins' ghost noises.
pub const IDLE_JENKINS: PatternGroup = &["woo"];

/// Greetings shared by several crewmates.
pub const IDLE_GENERIC: PatternGroup = &[
    "ello, cap'n",
    "hello, captain",
    "captain!",
    "nice to see you",
    "how d'ye think i'm doin'",
    "i'm so relaxed",
];

/// All idle chatter groups. Only the union matters for classification.
pub const IDLE_CHATTER: &[PatternGroup] =
    &[IDLE_JOBLESS_JIM, IDLE_SIAD, IDLE_JENKINS, IDLE_GENERIC];

/// Categories in the order they are tested. The first category with a
/// matching group wins; anything left over is [`MessageCategory::General`].
pub const PRECEDENCE: &[(MessageCategory, &[PatternGroup])] = &[
    (MessageCategory::SalvageFound, &[SALVAGE_FOUND]),
    (MessageCategory::SailingStatus, &[SAILING_STATUS]),
    (MessageCategory::Warning, &[WARNING]),
    (MessageCategory::IdleChatter, IDLE_CHATTER),
];
