//! Users saved during this session, shown on the listing view.
//!
//! The backend has no list endpoint, so the listing is built from what this
//! client created or updated. Nothing here outlives the app.

use api::StoredUser;
use dioxus::prelude::*;
use forms::{UserId, UserRecord};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SavedAction {
    Created,
    Updated,
}

impl SavedAction {
    pub fn label(self) -> &'static str {
        match self {
            SavedAction::Created => "Created",
            SavedAction::Updated => "Updated",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SavedUser {
    pub id: Option<UserId>,
    pub record: UserRecord,
    pub action: SavedAction,
    pub timestamp: String,
}

impl SavedUser {
    /// Stable list key: the id when the backend gave one, else the entry's
    /// position in the listing.
    pub fn row_key(&self, position: usize) -> String {
        match &self.id {
            Some(id) => format!("id-{id}"),
            None => format!("new-{position}"),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SessionLog {
    entries: Vec<SavedUser>,
}

impl SessionLog {
    /// Add an entry. A record saved again under the same id replaces its
    /// earlier entry.
    pub fn push(&mut self, entry: SavedUser) {
        if let Some(id) = &entry.id {
            self.entries.retain(|e| e.id.as_ref() != Some(id));
        }
        self.entries.push(entry);
    }

    /// Entries, most recent first.
    pub fn recent(&self) -> impl Iterator<Item = &SavedUser> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Installs the session log every view reads from.
#[component]
pub fn SessionLogProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(SessionLog::default()));

    rsx! {
        {children}
    }
}

pub fn use_session_log() -> Signal<SessionLog> {
    use_context::<Signal<SessionLog>>()
}

pub fn log_saved(log: &mut Signal<SessionLog>, action: SavedAction, stored: StoredUser) {
    log.write().push(SavedUser {
        id: stored.id,
        record: stored.record,
        action,
        timestamp: current_time(),
    });
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
