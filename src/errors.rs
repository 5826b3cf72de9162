//! Error taxonomy for command interpretation.
//!
//! Every failure a command can surface is a `CommandError` variant. The core
//! performs no retries and no local recovery: errors propagate unchanged to
//! the hosting UI, which renders them on its console surface. Collaborator
//! failures (browser API calls) are carried transparently as `anyhow::Error`.

use crate::properties::PropertyKind;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("unknown property: {0}")]
    UnknownProperty(String),

    #[error("property type of {name} mismatch: {found}")]
    PropertyTypeMismatch { name: String, found: PropertyKind },

    #[error("invalid argument: {0}")]
    Parse(String),

    /// Numeric buffer selector outside 1..=tab_count. Carries the 1-based
    /// index the user typed.
    #[error("tab {0} does not exist")]
    IndexOutOfRange(i64),

    #[error("no last selected tab")]
    NoLastSelectedTab,

    #[error("no matching buffer for {0}")]
    NoMatch(String),

    #[error("more than one match for {0}")]
    AmbiguousMatch(String),

    /// A browser collaborator call failed. Propagated unchanged.
    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}

pub type Result<T, E = CommandError> = std::result::Result<T, E>;
