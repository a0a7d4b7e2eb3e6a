//! End-to-end scenarios and invariants through the public API.

use proptest::prelude::*;

use silencecrew_core::patterns::{CARGO_FULL, CREWMATE_NAMES};
use silencecrew_core::{
    Actor, ChatMessage, ChatMessageType, CrewFilter, FilterConfig, MessageCategory,
    OverheadTextChanged, Ownership, SettingKey, SharedConfig, classify, is_cargo_full,
    is_known_actor, should_suppress,
};

fn config_from(bits: [bool; 12]) -> FilterConfig {
    let mut config = FilterConfig::default();
    for (key, value) in SettingKey::ALL.into_iter().zip(bits) {
        config.set(key, value);
    }
    config
}

fn ownership() -> impl Strategy<Value = Ownership> {
    prop_oneof![Just(Ownership::OwnCrew), Just(Ownership::OthersCrew)]
}

// ============================================================================
// Default-configuration scenarios
// ============================================================================

#[test]
fn test_cargo_full_shown_with_defaults() {
    let config = FilterConfig::default();
    assert!(!should_suppress("the cargo hold is full", Ownership::OwnCrew, &config));
    assert!(!should_suppress("the cargo hold is full", Ownership::OthersCrew, &config));
}

#[test]
fn test_own_idle_chatter_hidden() {
    let config = FilterConfig::default();
    let message = "life is easier on the sea";
    assert_eq!(classify(message), MessageCategory::IdleChatter);
    assert!(should_suppress(message, Ownership::OwnCrew, &config));
}

#[test]
fn test_own_warning_shown() {
    let config = FilterConfig::default();
    let message = "i can't find any ammo in the cargo hold";
    assert_eq!(classify(message), MessageCategory::Warning);
    assert!(!should_suppress(message, Ownership::OwnCrew, &config));
}

#[test]
fn test_others_warning_hidden() {
    let config = FilterConfig::default();
    let message = "i can't find any ammo in the cargo hold";
    assert!(should_suppress(message, Ownership::OthersCrew, &config));
}

#[test]
fn test_unrecognized_line_uses_general() {
    let config = FilterConfig::default();
    assert_eq!(classify("arrrr matey"), MessageCategory::General);
    assert!(should_suppress("arrrr matey", Ownership::OwnCrew, &config));
}

#[test]
fn test_salvage_outranks_warning() {
    assert_eq!(
        classify("managed to hook some salvage, sailing was supposed to be peaceful"),
        MessageCategory::SalvageFound
    );
}

#[test]
fn test_known_actor_examples() {
    assert!(is_known_actor("bosun zarah the brave"));
    assert!(is_known_actor("ex-captain"));
    assert!(is_known_actor("jim"));
    assert!(!is_known_actor(""));
}

// ============================================================================
// Host event flow
// ============================================================================

#[test]
fn test_overhead_then_chat_share_live_config() {
    let config = SharedConfig::default();
    let filter = CrewFilter::new(config.clone());

    let overhead = OverheadTextChanged::new(
        Actor::npc("Spotter Virginia"),
        "There's somethin' in the drink to the north!",
    );
    let mut shown = overhead.text.clone();
    assert!(filter.on_overhead_text_changed(&overhead, &mut shown).is_suppressed());
    assert!(shown.is_empty());

    config.set(SettingKey::FilterOwnSalvageFound, false);

    let chat = ChatMessage::new(
        ChatMessageType::PublicChat,
        Some("Spotter Virginia"),
        "I can see something to the east!",
    );
    let mut shown = chat.message.clone();
    assert!(!filter.on_chat_message(&chat, &mut shown).is_suppressed());
    assert_eq!(shown, "I can see something to the east!");
}

#[test]
fn test_outcome_serializes_for_reporting() {
    let filter = CrewFilter::new(SharedConfig::default());
    let event = OverheadTextChanged::new(Actor::npc("Cabin Boy Jenkins"), "Wooooo!");
    let mut shown = event.text.clone();

    let outcome = filter.on_overhead_text_changed(&event, &mut shown);
    let json = serde_json::to_value(outcome).unwrap();

    assert_eq!(json["outcome"], "suppressed");
    assert_eq!(json["category"], "idle_chatter");
    assert_eq!(json["ownership"], "own_crew");
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_classify_is_total(message in ".*") {
        let category = classify(&message.to_lowercase());
        prop_assert!(MessageCategory::ALL.contains(&category));
        prop_assert_ne!(category, MessageCategory::CargoFull);
    }

    #[test]
    fn prop_cargo_full_never_hidden_with_override(
        prefix in "[a-z ,.!']{0,30}",
        suffix in "[a-z ,.!']{0,30}",
        pattern in prop::sample::select(CARGO_FULL),
        bits in any::<[bool; 12]>(),
        ownership in ownership(),
    ) {
        let mut config = config_from(bits);
        config.always_show_cargo_full = true;
        let message = format!("{prefix}{pattern}{suffix}");

        prop_assert!(is_cargo_full(&message));
        prop_assert!(!should_suppress(&message, ownership, &config));
    }

    #[test]
    fn prop_without_override_only_category_matters(
        message in "[a-z ,.!']{0,60}",
        bits in any::<[bool; 12]>(),
        ownership in ownership(),
    ) {
        let mut config = config_from(bits);
        config.always_show_cargo_full = false;

        prop_assert_eq!(
            should_suppress(&message, ownership, &config),
            config.setting_for(classify(&message), ownership)
        );
    }

    #[test]
    fn prop_should_suppress_is_idempotent(
        message in ".*",
        bits in any::<[bool; 12]>(),
        ownership in ownership(),
    ) {
        let config = config_from(bits);
        let first = should_suppress(&message, ownership, &config);
        prop_assert_eq!(first, should_suppress(&message, ownership, &config));
        prop_assert_eq!(first, should_suppress(&message, ownership, &config));
    }

    #[test]
    fn prop_known_actor_is_bidirectional_containment(name in "[a-z -]{0,24}") {
        let expected = !name.is_empty()
            && CREWMATE_NAMES
                .iter()
                .any(|crewmate| name.contains(crewmate) || crewmate.contains(name.as_str()));
        prop_assert_eq!(is_known_actor(&name), expected);
    }
}
