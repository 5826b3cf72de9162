//! shrike: command-interpretation core for a keyboard-driven browser
//! command mode.
//!
//! Turns a line of typed text (`:buffer 3`, `:set hintchars=asdf`,
//! `:open rust async`) into a validated action against browser state or the
//! typed settings store. The browser itself is reached only through the
//! async collaborator traits in [`browser`]; the hosting extension shell
//! implements those and owns all UI, storage, and message plumbing.
//!
//! Flow: raw text → [`parser`] → structured args → [`resolver`] (for
//! tab-like args) → [`commands::Dispatcher`] → collaborator call. Settings
//! mutations validate against the static schema in [`properties`] before
//! the [`settings::SettingsStore`] applies them.

pub mod browser;
pub mod commands;
pub mod errors;
pub mod logging;
pub mod parser;
pub mod properties;
pub mod resolver;
pub mod settings;
pub mod urls;

pub use browser::{BookmarkItem, TabId, TabRef, WindowId};
pub use commands::{Command, Dispatcher};
pub use errors::CommandError;
pub use settings::{SearchSettings, Settings, SettingsStore};
