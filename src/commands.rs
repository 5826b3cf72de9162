//! Command dispatch.
//!
//! One operation per command name. Each operation resolves its arguments
//! through the parser/resolver, performs exactly one logical action on the
//! injected collaborators, and returns that action's result (or the first
//! failure, unmodified). The dispatcher itself validates nothing beyond
//! argument presence.

use std::sync::Arc;

use crate::browser::{BookmarksApi, BroadcastApi, ConsoleApi, TabRef, TabsApi, WindowId, WindowsApi};
use crate::errors::{CommandError, Result};
use crate::parser;
use crate::resolver::Resolver;
use crate::settings::SettingsStore;
use crate::urls;

// ---------------------------------------------------------------------------
// Command names
// ---------------------------------------------------------------------------

/// The closed set of commands, parsed once per invocation from the typed
/// name. `force` comes from a trailing `!` on the deletion commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Open,
    TabOpen,
    WinOpen,
    Buffer,
    BDelete { force: bool },
    BDeletes { force: bool },
    Quit,
    QuitAll,
    AddBookmark,
    Set,
}

impl Command {
    /// Map a command name (with aliases) to its variant. `None` for unknown
    /// names, including `!` on commands that take no force form.
    pub fn parse(name: &str) -> Option<Self> {
        let (base, force) = match name.strip_suffix('!') {
            Some(base) => (base, true),
            None => (name, false),
        };
        let cmd = match base {
            "o" | "open" => Command::Open,
            "t" | "tabopen" => Command::TabOpen,
            "w" | "winopen" => Command::WinOpen,
            "b" | "buffer" => Command::Buffer,
            "bd" | "bdel" | "bdelete" => Command::BDelete { force },
            "bdeletes" => Command::BDeletes { force },
            "q" | "quit" => Command::Quit,
            "qa" | "quitall" => Command::QuitAll,
            "addbookmark" => Command::AddBookmark,
            "set" => Command::Set,
            _ => return None,
        };
        if force && !matches!(cmd, Command::BDelete { .. } | Command::BDeletes { .. }) {
            return None;
        }
        Some(cmd)
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Executes commands against the browser collaborators.
///
/// All collaborators and the settings store are constructor-injected; the
/// dispatcher holds no other state, so one instance serves the whole
/// session.
pub struct Dispatcher {
    tabs: Arc<dyn TabsApi>,
    windows: Arc<dyn WindowsApi>,
    bookmarks: Arc<dyn BookmarksApi>,
    console: Arc<dyn ConsoleApi>,
    broadcast: Arc<dyn BroadcastApi>,
    settings: Arc<SettingsStore>,
}

impl Dispatcher {
    pub fn new(
        tabs: Arc<dyn TabsApi>,
        windows: Arc<dyn WindowsApi>,
        bookmarks: Arc<dyn BookmarksApi>,
        console: Arc<dyn ConsoleApi>,
        broadcast: Arc<dyn BroadcastApi>,
        settings: Arc<SettingsStore>,
    ) -> Self {
        Self {
            tabs,
            windows,
            bookmarks,
            console,
            broadcast,
            settings,
        }
    }

    /// The name→handler surface for the hosting UI: parse the command name,
    /// run the matching operation, discard its chaining value.
    pub async fn exec(&self, name: &str, args: &str) -> Result<()> {
        let cmd =
            Command::parse(name).ok_or_else(|| CommandError::Parse(name.to_string()))?;
        tracing::debug!(command = name, args, "dispatching");
        match cmd {
            Command::Open => {
                self.open(args).await?;
            }
            Command::TabOpen => {
                self.tabopen(args).await?;
            }
            Command::WinOpen => {
                self.winopen(args).await?;
            }
            Command::Buffer => self.buffer(args).await?,
            Command::BDelete { force } => self.bdelete(force, args).await?,
            Command::BDeletes { force } => self.bdeletes(force, args).await?,
            Command::Quit => self.quit().await?,
            Command::QuitAll => self.quit_all().await?,
            Command::AddBookmark => self.addbookmark(args).await?,
            Command::Set => self.set(args).await?,
        }
        Ok(())
    }

    /// Navigate the current tab to the URL or search resolved from
    /// `keywords`.
    pub async fn open(&self, keywords: &str) -> Result<TabRef> {
        let url = self.url_or_search(keywords);
        Ok(self.tabs.open(&url).await?)
    }

    /// Open the resolved URL in a new tab.
    pub async fn tabopen(&self, keywords: &str) -> Result<TabRef> {
        let url = self.url_or_search(keywords);
        Ok(self.tabs.create(&url).await?)
    }

    /// Open the resolved URL in a new window.
    pub async fn winopen(&self, keywords: &str) -> Result<WindowId> {
        let url = self.url_or_search(keywords);
        Ok(self.windows.create(&url).await?)
    }

    /// Switch to the tab the selector resolves to. Blank selectors and the
    /// inert `%` token are no-ops.
    pub async fn buffer(&self, keywords: &str) -> Result<()> {
        let resolver = Resolver::new(self.tabs.as_ref());
        if let Some(id) = resolver.resolve_nearest(keywords).await? {
            self.tabs.select(id).await?;
        }
        Ok(())
    }

    /// Close the single tab matching `keywords`. Without `force`, pinned
    /// tabs are excluded from matching.
    pub async fn bdelete(&self, force: bool, keywords: &str) -> Result<()> {
        let resolver = Resolver::new(self.tabs.as_ref());
        let tab = resolver.resolve_unique(keywords.trim(), !force).await?;
        Ok(self.tabs.remove(vec![tab.id]).await?)
    }

    /// Close every tab matching `keywords`.
    pub async fn bdeletes(&self, force: bool, keywords: &str) -> Result<()> {
        let resolver = Resolver::new(self.tabs.as_ref());
        let matched = resolver.resolve_all(keywords.trim(), !force).await?;
        let ids = matched.into_iter().map(|t| t.id).collect();
        Ok(self.tabs.remove(ids).await?)
    }

    /// Close the current tab.
    pub async fn quit(&self) -> Result<()> {
        let tab = self.tabs.get_current().await?;
        Ok(self.tabs.remove(vec![tab.id]).await?)
    }

    /// Close every tab. The removal is issued without awaiting its
    /// completion, so partial failures never reach the caller.
    pub async fn quit_all(&self) -> Result<()> {
        let all = self.tabs.get_all().await?;
        let ids: Vec<_> = all.into_iter().map(|t| t.id).collect();
        let tabs = Arc::clone(&self.tabs);
        tokio::spawn(async move {
            if let Err(err) = tabs.remove(ids).await {
                tracing::debug!(%err, "quitall removal failed");
            }
        });
        Ok(())
    }

    /// Bookmark the current page, then confirm on the tab's console.
    pub async fn addbookmark(&self, title: &str) -> Result<()> {
        let tab = self.tabs.get_current().await?;
        let item = self.bookmarks.create(title, &tab.url).await?;
        let message = format!("Saved current page: {}", item.url);
        Ok(self.console.show_info(tab.id, &message).await?)
    }

    /// Mutate one settings property and notify the other contexts. A blank
    /// argument is a no-op.
    pub async fn set(&self, keywords: &str) -> Result<()> {
        if keywords.trim().is_empty() {
            return Ok(());
        }
        let (name, value) = parser::parse_set_option(keywords)?;
        self.settings.set_property(&name, value)?;
        Ok(self.broadcast.broadcast_settings_changed().await?)
    }

    fn url_or_search(&self, keywords: &str) -> String {
        let settings = self.settings.get();
        urls::search_url(keywords, &settings.search)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_parsing_with_aliases() {
        assert_eq!(Command::parse("open"), Some(Command::Open));
        assert_eq!(Command::parse("o"), Some(Command::Open));
        assert_eq!(Command::parse("t"), Some(Command::TabOpen));
        assert_eq!(Command::parse("winopen"), Some(Command::WinOpen));
        assert_eq!(Command::parse("b"), Some(Command::Buffer));
        assert_eq!(Command::parse("qa"), Some(Command::QuitAll));
        assert_eq!(Command::parse("set"), Some(Command::Set));
        assert_eq!(Command::parse("frobnicate"), None);
    }

    #[test]
    fn force_suffix() {
        assert_eq!(
            Command::parse("bdelete"),
            Some(Command::BDelete { force: false })
        );
        assert_eq!(
            Command::parse("bd!"),
            Some(Command::BDelete { force: true })
        );
        assert_eq!(
            Command::parse("bdeletes!"),
            Some(Command::BDeletes { force: true })
        );
        // `!` is only meaningful on the deletion commands.
        assert_eq!(Command::parse("quit!"), None);
        assert_eq!(Command::parse("open!"), None);
    }
}
