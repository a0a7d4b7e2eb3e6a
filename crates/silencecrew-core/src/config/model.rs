//! Filter configuration model.

use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use super::settings::SettingKey;
use crate::classifier::MessageCategory;
use crate::ownership::Ownership;

/// User-chosen filter settings.
///
/// Each message category has one switch for the user's own crew and one for
/// other players' crew; `true` means "hide". Field names serialize to the
/// same camelCase keys the settings file uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(clippy::struct_excessive_bools)] // One switch per setting
pub struct FilterConfig {
    /// Never hide cargo full messages, whatever the category switches say.
    pub always_show_cargo_full: bool,
    /// When ownership can't be resolved, apply own-crew switches.
    pub treat_ambiguous_as_own: bool,

    /// Own crew, unrecognized lines.
    pub filter_own_crew_general: bool,
    /// Own crew, idle chatter.
    pub filter_own_idle_chatter: bool,
    /// Own crew, salvage found.
    pub filter_own_salvage_found: bool,
    /// Own crew, sailing status.
    pub filter_own_sailing_status: bool,
    /// Own crew, warnings.
    pub filter_own_warnings: bool,

    /// Others' crew, unrecognized lines.
    pub filter_others_crew_general: bool,
    /// Others' crew, idle chatter.
    pub filter_others_idle_chatter: bool,
    /// Others' crew, salvage found.
    pub filter_others_salvage_found: bool,
    /// Others' crew, sailing status.
    pub filter_others_sailing_status: bool,
    /// Others' crew, warnings.
    pub filter_others_warnings: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            always_show_cargo_full: true,
            treat_ambiguous_as_own: true,
            filter_own_crew_general: true,
            filter_own_idle_chatter: true,
            filter_own_salvage_found: true,
            filter_own_sailing_status: true,
            filter_own_warnings: false,
            filter_others_crew_general: true,
            filter_others_idle_chatter: true,
            filter_others_salvage_found: true,
            filter_others_sailing_status: true,
            filter_others_warnings: true,
        }
    }
}

impl FilterConfig {
    /// Whether lines of `category` from `ownership` crew should be hidden.
    ///
    /// `CargoFull` has no switch of its own and is always shown here; cargo
    /// full handling is done by the override in [`crate::policy`].
    #[must_use]
    pub const fn setting_for(&self, category: MessageCategory, ownership: Ownership) -> bool {
        match (category, ownership) {
            (MessageCategory::CargoFull, _) => false,
            (MessageCategory::SalvageFound, Ownership::OwnCrew) => self.filter_own_salvage_found,
            (MessageCategory::SalvageFound, Ownership::OthersCrew) => {
                self.filter_others_salvage_found
            }
            (MessageCategory::SailingStatus, Ownership::OwnCrew) => self.filter_own_sailing_status,
            (MessageCategory::SailingStatus, Ownership::OthersCrew) => {
                self.filter_others_sailing_status
            }
            (MessageCategory::Warning, Ownership::OwnCrew) => self.filter_own_warnings,
            (MessageCategory::Warning, Ownership::OthersCrew) => self.filter_others_warnings,
            (MessageCategory::IdleChatter, Ownership::OwnCrew) => self.filter_own_idle_chatter,
            (MessageCategory::IdleChatter, Ownership::OthersCrew) => {
                self.filter_others_idle_chatter
            }
            (MessageCategory::General, Ownership::OwnCrew) => self.filter_own_crew_general,
            (MessageCategory::General, Ownership::OthersCrew) => self.filter_others_crew_general,
        }
    }

    /// Current value of a setting.
    #[must_use]
    pub const fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::AlwaysShowCargoFull => self.always_show_cargo_full,
            SettingKey::TreatAmbiguousAsOwn => self.treat_ambiguous_as_own,
            SettingKey::FilterOwnCrewGeneral => self.filter_own_crew_general,
            SettingKey::FilterOwnIdleChatter => self.filter_own_idle_chatter,
            SettingKey::FilterOwnSalvageFound => self.filter_own_salvage_found,
            SettingKey::FilterOwnSailingStatus => self.filter_own_sailing_status,
            SettingKey::FilterOwnWarnings => self.filter_own_warnings,
            SettingKey::FilterOthersCrewGeneral => self.filter_others_crew_general,
            SettingKey::FilterOthersIdleChatter => self.filter_others_idle_chatter,
            SettingKey::FilterOthersSalvageFound => self.filter_others_salvage_found,
            SettingKey::FilterOthersSailingStatus => self.filter_others_sailing_status,
            SettingKey::FilterOthersWarnings => self.filter_others_warnings,
        }
    }

    /// Change a setting.
    pub const fn set(&mut self, key: SettingKey, value: bool) {
        let slot = match key {
            SettingKey::AlwaysShowCargoFull => &mut self.always_show_cargo_full,
            SettingKey::TreatAmbiguousAsOwn => &mut self.treat_ambiguous_as_own,
            SettingKey::FilterOwnCrewGeneral => &mut self.filter_own_crew_general,
            SettingKey::FilterOwnIdleChatter => &mut self.filter_own_idle_chatter,
            SettingKey::FilterOwnSalvageFound => &mut self.filter_own_salvage_found,
            SettingKey::FilterOwnSailingStatus => &mut self.filter_own_sailing_status,
            SettingKey::FilterOwnWarnings => &mut self.filter_own_warnings,
            SettingKey::FilterOthersCrewGeneral => &mut self.filter_others_crew_general,
            SettingKey::FilterOthersIdleChatter => &mut self.filter_others_idle_chatter,
            SettingKey::FilterOthersSalvageFound => &mut self.filter_others_salvage_found,
            SettingKey::FilterOthersSailingStatus => &mut self.filter_others_sailing_status,
            SettingKey::FilterOthersWarnings => &mut self.filter_others_warnings,
        };
        *slot = value;
    }
}

/// A live, shareable handle to the current configuration.
///
/// The host updates it as the user edits settings; readers take a fresh
/// [`snapshot`](Self::snapshot) for every decision.
#[derive(Debug, Clone, Default)]
pub struct SharedConfig {
    inner: Arc<RwLock<FilterConfig>>,
}

impl SharedConfig {
    /// Wraps an initial configuration.
    #[must_use]
    pub fn new(config: FilterConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Copy of the configuration as it is right now.
    #[must_use]
    pub fn snapshot(&self) -> FilterConfig {
        *self.inner.read().unwrap_or_else(|poisoned| {
            tracing::warn!("Config lock poisoned, reading last written value");
            PoisonError::into_inner(poisoned)
        })
    }

    /// Replaces the whole configuration.
    pub fn replace(&self, config: FilterConfig) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = config;
    }

    /// Changes a single setting.
    pub fn set(&self, key: SettingKey, value: bool) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set(key, value);
    }
}

impl From<FilterConfig> for SharedConfig {
    fn from(config: FilterConfig) -> Self {
        Self::new(config)
    }
}
