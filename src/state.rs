use crate::controller::Controller;
use crate::models::{Game, User};
use crate::page::{Page, Refresh};
use crate::view::score_options;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<Controller>,
    pub client: Arc<Mutex<ClientState>>,
    pub score_options: Arc<[i32]>,
}

impl AppState {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller: Arc::new(controller),
            client: Arc::new(Mutex::new(ClientState::default())),
            score_options: score_options().into(),
        }
    }
}

/// Handle for one refresh; only the most recently issued ticket may land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncTicket {
    generation: u64,
    pub refresh: Refresh,
}

/// Lists fetched for one ticket. `games` is `None` when only users were requested.
#[derive(Debug, Default)]
pub struct SyncData {
    pub users: Vec<User>,
    pub games: Option<Vec<Game>>,
}

#[derive(Debug)]
pub struct ClientState {
    pub page: Page,
    pub users: Vec<User>,
    pub games: Vec<Game>,
    notice: Option<String>,
    generation: u64,
}

impl Default for ClientState {
    fn default() -> Self {
        Self {
            page: Page::Login,
            users: Vec::new(),
            games: Vec::new(),
            notice: None,
            generation: 0,
        }
    }
}

impl ClientState {
    /// Makes `page` the visible one. Returns a ticket when the page needs fresh data.
    pub fn switch_to_page(&mut self, page: Page) -> Option<SyncTicket> {
        self.page = page;
        match page.refresh() {
            Refresh::Nothing => None,
            refresh => {
                self.generation += 1;
                Some(SyncTicket {
                    generation: self.generation,
                    refresh,
                })
            }
        }
    }

    /// Replaces the caches with `data` unless a newer ticket was issued meanwhile.
    pub fn apply_sync(&mut self, ticket: SyncTicket, data: SyncData) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.users = data.users;
        if let Some(games) = data.games {
            self.games = games;
        }
        true
    }

    /// Drops cached server data and invalidates any fetch still in flight.
    pub fn clear_caches(&mut self) {
        self.users.clear();
        self.games.clear();
        self.generation += 1;
    }

    pub fn has_notice(&self) -> bool {
        self.notice.is_some()
    }

    pub fn set_notice(&mut self, message: String) {
        self.notice = Some(message);
    }

    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }
}
