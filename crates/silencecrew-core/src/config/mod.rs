//! User configuration.
//!
//! This module provides:
//! - **`FilterConfig`**: the per-category, per-ownership hide switches plus
//!   the cargo full override and the ambiguous-ownership fallback
//! - **`SharedConfig`**: a live handle the host edits and the filter reads
//! - **`SettingKey`** / **`ConfigSection`**: key names, labels and grouping
//!   for presenting and editing settings
//! - Loading and saving the JSON settings file
//!
//! # Example
//!
//! ```ignore
//! use silencecrew_core::config::{FilterConfig, SettingKey, default_path};
//!
//! let mut config = FilterConfig::load(&default_path())?;
//! config.set(SettingKey::FilterOwnWarnings, true);
//! config.save(&default_path())?;
//! ```

mod model;
mod settings;
mod store;

pub use model::{FilterConfig, SharedConfig};
pub use settings::{ConfigSection, SettingKey, parse_bool};
pub use store::default_path;
