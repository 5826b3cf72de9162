//! Buffer selector resolution.
//!
//! Maps the selector text of `buffer` / `bdelete` / `bdeletes` to concrete
//! tab ids. One algorithm, three result shapes: the nearest match (pivot
//! selection), exactly one match, or every match. Commands reuse this
//! instead of reimplementing selector handling.

use crate::browser::{TabId, TabRef, TabsApi};
use crate::errors::{CommandError, Result};

// ---------------------------------------------------------------------------
// Selector token
// ---------------------------------------------------------------------------

/// A parsed selector. Constructed from text, consumed immediately.
#[derive(Debug, Clone, PartialEq)]
pub enum BufferSelector {
    /// 1-based position in the tab strip. Kept signed so that out-of-range
    /// input like `0` or `-1` reports the value the user typed.
    Index(i64),
    /// `%`, the current window. Inert in the single-result API; kept as a
    /// distinct token pending product clarification, not guessed at.
    CurrentWindow,
    /// `#`, the previously selected tab.
    LastSelected,
    /// Substring match over title/url, performed by the host.
    Keyword(String),
}

impl BufferSelector {
    /// Parse selector text. `None` for blank input (callers no-op).
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Ok(n) = trimmed.parse::<i64>() {
            return Some(BufferSelector::Index(n));
        }
        match trimmed {
            "%" => Some(BufferSelector::CurrentWindow),
            "#" => Some(BufferSelector::LastSelected),
            _ => Some(BufferSelector::Keyword(trimmed.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Resolves selectors against the tabs collaborator.
pub struct Resolver<'a> {
    tabs: &'a dyn TabsApi,
}

impl<'a> Resolver<'a> {
    pub fn new(tabs: &'a dyn TabsApi) -> Self {
        Self { tabs }
    }

    /// Resolve for selection (`buffer`): a single target, with pivot
    /// selection on keyword ties. `Ok(None)` means "nothing to do": blank
    /// selector or the inert `%` token.
    pub async fn resolve_nearest(&self, text: &str) -> Result<Option<TabId>> {
        let Some(selector) = BufferSelector::parse(text) else {
            return Ok(None);
        };
        match selector {
            BufferSelector::Index(n) => {
                let tabs = self.tabs.get_all().await?;
                if n < 1 || n as usize > tabs.len() {
                    return Err(CommandError::IndexOutOfRange(n));
                }
                Ok(Some(tabs[(n - 1) as usize].id))
            }
            BufferSelector::CurrentWindow => Ok(None),
            BufferSelector::LastSelected => match self.tabs.get_last_selected_id().await? {
                Some(id) => Ok(Some(id)),
                None => Err(CommandError::NoLastSelectedTab),
            },
            BufferSelector::Keyword(keyword) => {
                let current = self.tabs.get_current().await?;
                let matches = self.tabs.get_by_keyword(&keyword, false).await?;
                if matches.is_empty() {
                    return Err(CommandError::NoMatch(keyword));
                }
                // Pivot selection: the next match to the right of the
                // current tab, wrapping to the leftmost match.
                let next = matches.iter().find(|t| t.index > current.index);
                Ok(Some(next.unwrap_or(&matches[0]).id))
            }
        }
    }

    /// Resolve a keyword to exactly one tab (`bdelete`).
    pub async fn resolve_unique(&self, keyword: &str, exclude_pinned: bool) -> Result<TabRef> {
        let mut matches = self.tabs.get_by_keyword(keyword, exclude_pinned).await?;
        match matches.len() {
            0 => Err(CommandError::NoMatch(keyword.to_string())),
            1 => Ok(matches.remove(0)),
            _ => Err(CommandError::AmbiguousMatch(keyword.to_string())),
        }
    }

    /// Resolve a keyword to every matching tab (`bdeletes`).
    pub async fn resolve_all(&self, keyword: &str, exclude_pinned: bool) -> Result<Vec<TabRef>> {
        let matches = self.tabs.get_by_keyword(keyword, exclude_pinned).await?;
        if matches.is_empty() {
            return Err(CommandError::NoMatch(keyword.to_string()));
        }
        Ok(matches)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
