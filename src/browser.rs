//! Browser collaborator interfaces.
//!
//! The core never touches browser state directly: tabs, windows, bookmarks,
//! the console surface, and cross-context broadcast are all reached through
//! the async traits below, implemented by the hosting extension shell (or by
//! the in-memory simulator in the demo shell). Every call suspends the
//! command handler until the host answers; failures are host-defined
//! `anyhow::Error`s that the core propagates unchanged.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Data types
// ---------------------------------------------------------------------------

/// Host-assigned tab identifier. Stable for the lifetime of the tab, opaque
/// to the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TabId(pub u64);

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Host-assigned window identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowId(pub u64);

/// Snapshot of one tab as reported by the host.
///
/// `index` is the 0-based position in the tab strip. A `TabRef` is only
/// valid for the call that produced it; tab state may change between
/// collaborator calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabRef {
    pub id: TabId,
    pub index: usize,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub pinned: bool,
}

/// A bookmark created by the host. The dispatcher reads `url` back for the
/// confirmation notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookmarkItem {
    pub title: String,
    pub url: String,
}

// ---------------------------------------------------------------------------
// Collaborator traits
// ---------------------------------------------------------------------------

/// Tab access and mutation.
#[async_trait::async_trait]
pub trait TabsApi: Send + Sync {
    /// All tabs of the current window, in tab-strip order.
    async fn get_all(&self) -> anyhow::Result<Vec<TabRef>>;

    /// The currently focused tab.
    async fn get_current(&self) -> anyhow::Result<TabRef>;

    /// Tabs whose title or URL contains `keyword` (case policy is the
    /// host's). With `exclude_pinned`, pinned tabs are filtered out.
    async fn get_by_keyword(&self, keyword: &str, exclude_pinned: bool)
    -> anyhow::Result<Vec<TabRef>>;

    /// Id of the previously selected tab, if one is recorded.
    async fn get_last_selected_id(&self) -> anyhow::Result<Option<TabId>>;

    async fn select(&self, id: TabId) -> anyhow::Result<()>;

    async fn remove(&self, ids: Vec<TabId>) -> anyhow::Result<()>;

    /// Navigate the current tab to `url`.
    async fn open(&self, url: &str) -> anyhow::Result<TabRef>;

    /// Open `url` in a new tab.
    async fn create(&self, url: &str) -> anyhow::Result<TabRef>;
}

/// Window creation.
#[async_trait::async_trait]
pub trait WindowsApi: Send + Sync {
    async fn create(&self, url: &str) -> anyhow::Result<WindowId>;
}

/// Bookmark creation.
#[async_trait::async_trait]
pub trait BookmarksApi: Send + Sync {
    async fn create(&self, title: &str, url: &str) -> anyhow::Result<BookmarkItem>;
}

/// Console surface of a tab. Fire-and-forget from the dispatcher's
/// perspective: the result is awaited but not otherwise consumed.
#[async_trait::async_trait]
pub trait ConsoleApi: Send + Sync {
    async fn show_info(&self, tab_id: TabId, message: &str) -> anyhow::Result<()>;
}

/// Cross-context notification that settings changed. No acknowledgment is
/// awaited beyond call completion.
#[async_trait::async_trait]
pub trait BroadcastApi: Send + Sync {
    async fn broadcast_settings_changed(&self) -> anyhow::Result<()>;
}
