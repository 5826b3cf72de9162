//! shrike-shell: interactive command prompt over a simulated browser.
//!
//! Development harness for the command core: seeds an in-memory tab set,
//! wires the dispatcher to simulated collaborators, and reads `:`-style
//! command lines from stdin. Not a product UI; the real host is a browser
//! extension shell.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use shrike::browser::{
    BookmarkItem, BookmarksApi, BroadcastApi, ConsoleApi, TabId, TabRef, TabsApi, WindowId,
    WindowsApi,
};
use shrike::{Dispatcher, Settings, SettingsStore, parser};

/// Interactive shell for the shrike command core
#[derive(Parser, Debug)]
#[command(name = "shrike-shell", version, about = "Interactive shell for the shrike command core")]
struct Args {
    /// Settings file (TOML) used to seed the settings store
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed tab URLs (repeatable); a default set is used when omitted
    #[arg(long = "tab")]
    tabs: Vec<String>,
}

// ---------------------------------------------------------------------------
// Simulated browser
// ---------------------------------------------------------------------------

struct BrowserState {
    tabs: Vec<TabRef>,
    current: TabId,
    last_selected: Option<TabId>,
    next_tab_id: u64,
    next_window_id: u64,
    bookmarks: Vec<BookmarkItem>,
}

impl BrowserState {
    fn seed(urls: &[String]) -> Self {
        let tabs: Vec<TabRef> = urls
            .iter()
            .enumerate()
            .map(|(i, url)| TabRef {
                id: TabId(i as u64 + 1),
                index: i,
                title: url.clone(),
                url: url.clone(),
                pinned: false,
            })
            .collect();
        let current = tabs.first().map(|t| t.id).unwrap_or(TabId(1));
        let next_tab_id = tabs.len() as u64 + 1;
        Self {
            tabs,
            current,
            last_selected: None,
            next_tab_id,
            next_window_id: 1,
            bookmarks: Vec::new(),
        }
    }

    fn reindex(&mut self) {
        for (i, tab) in self.tabs.iter_mut().enumerate() {
            tab.index = i;
        }
    }

    fn current_tab(&self) -> anyhow::Result<TabRef> {
        self.tabs
            .iter()
            .find(|t| t.id == self.current)
            .cloned()
            .context("no current tab")
    }
}

/// All five collaborators over one shared state. Locks never span an await.
#[derive(Clone)]
struct SimBrowser {
    state: Arc<Mutex<BrowserState>>,
}

impl SimBrowser {
    fn new(state: BrowserState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    fn dump_tabs(&self) {
        let state = self.state.lock().unwrap();
        for tab in &state.tabs {
            let marker = if tab.id == state.current { "*" } else { " " };
            let pin = if tab.pinned { " [pinned]" } else { "" };
            println!("{} {:>2}  {}{}", marker, tab.index + 1, tab.url, pin);
        }
    }
}

#[async_trait::async_trait]
impl TabsApi for SimBrowser {
    async fn get_all(&self) -> anyhow::Result<Vec<TabRef>> {
        Ok(self.state.lock().unwrap().tabs.clone())
    }

    async fn get_current(&self) -> anyhow::Result<TabRef> {
        self.state.lock().unwrap().current_tab()
    }

    async fn get_by_keyword(
        &self,
        keyword: &str,
        exclude_pinned: bool,
    ) -> anyhow::Result<Vec<TabRef>> {
        let needle = keyword.to_lowercase();
        let state = self.state.lock().unwrap();
        Ok(state
            .tabs
            .iter()
            .filter(|t| {
                t.title.to_lowercase().contains(&needle) || t.url.to_lowercase().contains(&needle)
            })
            .filter(|t| !(exclude_pinned && t.pinned))
            .cloned()
            .collect())
    }

    async fn get_last_selected_id(&self) -> anyhow::Result<Option<TabId>> {
        Ok(self.state.lock().unwrap().last_selected)
    }

    async fn select(&self, id: TabId) -> anyhow::Result<()> {
        let mut state = self.state.lock().unwrap();
        anyhow::ensure!(state.tabs.iter().any(|t| t.id == id), "no tab {}", id);
        state.last_selected = Some(state.current);
        state.current = id;
        Ok(())
    }

    async fn remove(&self, ids: Vec<TabId>) -> anyhow::Result<()> {
        let mut state = self.state.lock().unwrap();
        state.tabs.retain(|t| !ids.contains(&t.id));
        state.reindex();
        if ids.contains(&state.current) {
            state.current = state.tabs.first().map(|t| t.id).unwrap_or(TabId(0));
        }
        state.last_selected = state.last_selected.filter(|id| !ids.contains(id));
        Ok(())
    }

    async fn open(&self, url: &str) -> anyhow::Result<TabRef> {
        let mut state = self.state.lock().unwrap();
        let current = state.current;
        let tab = state
            .tabs
            .iter_mut()
            .find(|t| t.id == current)
            .context("no current tab")?;
        tab.url = url.to_string();
        tab.title = url.to_string();
        Ok(tab.clone())
    }

    async fn create(&self, url: &str) -> anyhow::Result<TabRef> {
        let mut state = self.state.lock().unwrap();
        let tab = TabRef {
            id: TabId(state.next_tab_id),
            index: state.tabs.len(),
            title: url.to_string(),
            url: url.to_string(),
            pinned: false,
        };
        state.next_tab_id += 1;
        state.tabs.push(tab.clone());
        state.last_selected = Some(state.current);
        state.current = tab.id;
        Ok(tab)
    }
}

#[async_trait::async_trait]
impl WindowsApi for SimBrowser {
    async fn create(&self, url: &str) -> anyhow::Result<WindowId> {
        let mut state = self.state.lock().unwrap();
        let id = WindowId(state.next_window_id);
        state.next_window_id += 1;
        println!("(window {} opened on {})", id.0, url);
        Ok(id)
    }
}

#[async_trait::async_trait]
impl BookmarksApi for SimBrowser {
    async fn create(&self, title: &str, url: &str) -> anyhow::Result<BookmarkItem> {
        let item = BookmarkItem {
            title: title.to_string(),
            url: url.to_string(),
        };
        self.state.lock().unwrap().bookmarks.push(item.clone());
        Ok(item)
    }
}

#[async_trait::async_trait]
impl ConsoleApi for SimBrowser {
    async fn show_info(&self, tab_id: TabId, message: &str) -> anyhow::Result<()> {
        println!("(tab {}) {}", tab_id, message);
        Ok(())
    }
}

#[async_trait::async_trait]
impl BroadcastApi for SimBrowser {
    async fn broadcast_settings_changed(&self) -> anyhow::Result<()> {
        tracing::info!("settings-changed broadcast");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Shell loop
// ---------------------------------------------------------------------------

const DEFAULT_TABS: &[&str] = &[
    "https://example.com",
    "https://docs.rs/tokio",
    "https://crates.io",
];

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = shrike::logging::init();

    let settings = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Settings::from_toml(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => Settings::default(),
    };
    let store = Arc::new(SettingsStore::new(settings));

    let seed: Vec<String> = if args.tabs.is_empty() {
        DEFAULT_TABS.iter().map(|s| s.to_string()).collect()
    } else {
        args.tabs.clone()
    };
    let sim = SimBrowser::new(BrowserState::seed(&seed));

    let dispatcher = Dispatcher::new(
        Arc::new(sim.clone()),
        Arc::new(sim.clone()),
        Arc::new(sim.clone()),
        Arc::new(sim.clone()),
        Arc::new(sim.clone()),
        Arc::clone(&store),
    );

    println!("shrike shell: `tabs` lists the simulated tabs, `help` lists commands, `exit` quits");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }

        // Shell-local commands, then the dispatcher surface.
        match line.as_str() {
            "exit" => break,
            "help" => {
                print_help();
                continue;
            }
            "tabs" => {
                sim.dump_tabs();
                continue;
            }
            "settings" => {
                print!("{}", store.get().to_toml());
                continue;
            }
            _ => {}
        }

        let Some((name, rest)) = parser::parse_command_line(&line) else {
            continue;
        };
        if let Err(err) = dispatcher.exec(name, rest).await {
            println!("error: {}", err);
        }
    }

    Ok(())
}

fn print_help() {
    let entries = [
        (":open <url|query>", "navigate the current tab (o)"),
        (":tabopen <url|query>", "open in a new tab (t)"),
        (":winopen <url|query>", "open in a new window (w)"),
        (":buffer <n|%|#|keyword>", "switch tabs (b)"),
        (":bdelete[!] <keyword>", "close the single matching tab"),
        (":bdeletes[!] <keyword>", "close every matching tab"),
        (":quit / :quitall", "close the current tab / all tabs"),
        (":addbookmark <title>", "bookmark the current page"),
        (":set name[=value]", "change a setting"),
        ("tabs / settings / exit", "shell-local helpers"),
    ];
    for (cmd, desc) in entries {
        println!("  {:<26} {}", cmd, desc);
    }
}
