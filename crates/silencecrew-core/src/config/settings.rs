//! Setting keys and presentation metadata.

use std::fmt;

use crate::error::{Error, Result};

/// Presentation group a setting is shown under.
///
/// Grouping has no effect on filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    /// Filters for the user's own crewmates.
    YourCrew,
    /// Filters for other players' crewmates.
    OthersCrew,
    /// Messages that should always be shown.
    Important,
    /// Fallback behaviour.
    Advanced,
}

impl ConfigSection {
    /// Sections in display order.
    pub const ALL: [Self; 4] = [Self::YourCrew, Self::OthersCrew, Self::Important, Self::Advanced];

    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::YourCrew => "Your Crew",
            Self::OthersCrew => "Others' Crew",
            Self::Important => "Important Messages",
            Self::Advanced => "Advanced",
        }
    }

    /// Description of what this section controls.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::YourCrew => "Filter settings for your own crewmates",
            Self::OthersCrew => "Filter settings for other players' crewmates",
            Self::Important => "Messages that should always be shown",
            Self::Advanced => "Advanced settings",
        }
    }
}

/// One user-editable boolean setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    /// Never hide cargo full messages.
    AlwaysShowCargoFull,
    /// Apply own-crew rules when ownership is unknown.
    TreatAmbiguousAsOwn,
    /// Own crew, unrecognized lines.
    FilterOwnCrewGeneral,
    /// Own crew, idle chatter.
    FilterOwnIdleChatter,
    /// Own crew, salvage found.
    FilterOwnSalvageFound,
    /// Own crew, sailing status.
    FilterOwnSailingStatus,
    /// Own crew, warnings.
    FilterOwnWarnings,
    /// Others' crew, unrecognized lines.
    FilterOthersCrewGeneral,
    /// Others' crew, idle chatter.
    FilterOthersIdleChatter,
    /// Others' crew, salvage found.
    FilterOthersSalvageFound,
    /// Others' crew, sailing status.
    FilterOthersSailingStatus,
    /// Others' crew, warnings.
    FilterOthersWarnings,
}

impl SettingKey {
    /// Every setting, grouped by section in display order.
    pub const ALL: [Self; 12] = [
        Self::FilterOwnCrewGeneral,
        Self::FilterOwnIdleChatter,
        Self::FilterOwnSalvageFound,
        Self::FilterOwnSailingStatus,
        Self::FilterOwnWarnings,
        Self::FilterOthersCrewGeneral,
        Self::FilterOthersIdleChatter,
        Self::FilterOthersSalvageFound,
        Self::FilterOthersSailingStatus,
        Self::FilterOthersWarnings,
        Self::AlwaysShowCargoFull,
        Self::TreatAmbiguousAsOwn,
    ];

    /// The persisted key name.
    #[must_use]
    pub const fn key_name(&self) -> &'static str {
        match self {
            Self::AlwaysShowCargoFull => "alwaysShowCargoFull",
            Self::TreatAmbiguousAsOwn => "treatAmbiguousAsOwn",
            Self::FilterOwnCrewGeneral => "filterOwnCrewGeneral",
            Self::FilterOwnIdleChatter => "filterOwnIdleChatter",
            Self::FilterOwnSalvageFound => "filterOwnSalvageFound",
            Self::FilterOwnSailingStatus => "filterOwnSailingStatus",
            Self::FilterOwnWarnings => "filterOwnWarnings",
            Self::FilterOthersCrewGeneral => "filterOthersCrewGeneral",
            Self::FilterOthersIdleChatter => "filterOthersIdleChatter",
            Self::FilterOthersSalvageFound => "filterOthersSalvageFound",
            Self::FilterOthersSailingStatus => "filterOthersSailingStatus",
            Self::FilterOthersWarnings => "filterOthersWarnings",
        }
    }

    /// Look up a setting by its persisted key name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSetting`] if no setting has this name.
    pub fn parse(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.key_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownSetting(s.to_string()))
    }

    /// Short label.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::AlwaysShowCargoFull => "Always Show Cargo Full",
            Self::TreatAmbiguousAsOwn => "Treat Unknown as Own Crew",
            Self::FilterOwnCrewGeneral | Self::FilterOthersCrewGeneral => "Filter All (General)",
            Self::FilterOwnIdleChatter | Self::FilterOthersIdleChatter => "Filter Idle Chatter",
            Self::FilterOwnSalvageFound | Self::FilterOthersSalvageFound => "Filter Salvage Found",
            Self::FilterOwnSailingStatus | Self::FilterOthersSailingStatus => {
                "Filter Sailing Status"
            }
            Self::FilterOwnWarnings | Self::FilterOthersWarnings => "Filter Warnings",
        }
    }

    /// One-line explanation.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::AlwaysShowCargoFull => {
                "Never hide 'cargo full' messages so you know when to return to port"
            }
            Self::TreatAmbiguousAsOwn => {
                "When a crewmate's owner can't be determined, use 'Your Crew' settings (off: 'Others' Crew')"
            }
            Self::FilterOwnCrewGeneral => {
                "Hide any crewmate message that doesn't fit other categories"
            }
            Self::FilterOwnIdleChatter => "Hide ambient/idle dialogue from your crewmates",
            Self::FilterOwnSalvageFound => "Hide messages when your crew finds or collects salvage",
            Self::FilterOwnSailingStatus => "Hide sailing operation messages",
            Self::FilterOwnWarnings => {
                "Hide warning messages about missing resources (these may be important)"
            }
            Self::FilterOthersCrewGeneral => {
                "Hide any message from other players' crewmates that doesn't fit other categories"
            }
            Self::FilterOthersIdleChatter => {
                "Hide ambient/idle dialogue from other players' crewmates"
            }
            Self::FilterOthersSalvageFound => {
                "Hide salvage notifications from other players' crewmates"
            }
            Self::FilterOthersSailingStatus => {
                "Hide sailing operation messages from other players' crewmates"
            }
            Self::FilterOthersWarnings => "Hide warning messages from other players' crewmates",
        }
    }

    /// Section this setting is shown under.
    #[must_use]
    pub const fn section(&self) -> ConfigSection {
        match self {
            Self::AlwaysShowCargoFull => ConfigSection::Important,
            Self::TreatAmbiguousAsOwn => ConfigSection::Advanced,
            Self::FilterOwnCrewGeneral
            | Self::FilterOwnIdleChatter
            | Self::FilterOwnSalvageFound
            | Self::FilterOwnSailingStatus
            | Self::FilterOwnWarnings => ConfigSection::YourCrew,
            Self::FilterOthersCrewGeneral
            | Self::FilterOthersIdleChatter
            | Self::FilterOthersSalvageFound
            | Self::FilterOthersSailingStatus
            | Self::FilterOthersWarnings => ConfigSection::OthersCrew,
        }
    }

    /// Value used when the user has not changed the setting.
    ///
    /// Warnings from the user's own crew are shown by default; everything
    /// else defaults to on.
    #[must_use]
    pub const fn default_value(&self) -> bool {
        !matches!(self, Self::FilterOwnWarnings)
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key_name())
    }
}

impl std::str::FromStr for SettingKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Parse a boolean setting value.
///
/// Accepts `true`/`false`, `on`/`off`, `yes`/`no` and `1`/`0`.
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] for anything else.
pub fn parse_bool(key: SettingKey, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(Error::InvalidValue {
            key: key.key_name().to_string(),
            value: value.to_string(),
        }),
    }
}
