//! The single application-state record.
//!
//! Owns the entry list, the active-entry state machine and the view flags.
//! Every transition is a named [`Action`] or an explicit entry operation;
//! nothing else mutates this record.

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::layout::{compute_layout, PathLayout};
use crate::models::{EntryPatch, JourneyEntry, NewEntry, Profile, Theme};
use crate::theme::resolve_theme;

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("Entry {0} does not exist")]
    UnknownEntry(String),

    #[error("Field '{0}' cannot be empty")]
    EmptyField(&'static str),
}

/// Named transitions of the view state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Leave the intro screen: select the first entry and start auto-play.
    Start,
    /// Return to the intro screen with nothing selected.
    Reset,
    /// Marker click. Always stops auto-play.
    Select(String),
    /// Move to the next entry, wrapping after the last.
    Advance,
    ToggleDarkMode,
    SetAutoPlay(bool),
}

/// Serializable view of the whole session, read by the renderer.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub profile: Profile,
    pub entries: Vec<JourneyEntry>,
    pub active_id: Option<String>,
    pub entered: bool,
    pub dark_mode: bool,
    pub autoplay: bool,
    pub theme: Theme,
    pub layout: PathLayout,
}

#[derive(Debug, Clone)]
pub struct Session {
    profile: Profile,
    entries: Vec<JourneyEntry>,
    layout: PathLayout,
    active_id: Option<String>,
    entered: bool,
    dark_mode: bool,
    autoplay: bool,
    /// Whether an auto-play timer should currently be running.
    ticking: bool,
    /// Bumped every time `ticking` flips, so stale timers can tell they were cancelled.
    autoplay_epoch: u64,
}

impl Session {
    pub fn new(profile: Profile, entries: Vec<JourneyEntry>) -> Self {
        let mut session = Self {
            profile,
            entries,
            layout: PathLayout::default(),
            active_id: None,
            entered: false,
            dark_mode: false,
            autoplay: false,
            ticking: false,
            autoplay_epoch: 0,
        };
        session.refresh_layout();
        session
    }

    // ── reads ────────────────────────────────────────────────────────────────

    pub fn entries(&self) -> &[JourneyEntry] {
        &self.entries
    }

    pub fn entry(&self, id: &str) -> Option<&JourneyEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn last_entry(&self) -> Option<&JourneyEntry> {
        self.entries.last()
    }

    pub fn layout(&self) -> &PathLayout {
        &self.layout
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn active_index(&self) -> Option<usize> {
        let id = self.active_id.as_deref()?;
        self.position(id)
    }

    pub fn active_entry(&self) -> Option<&JourneyEntry> {
        self.active_index().map(|i| &self.entries[i])
    }

    #[cfg(test)]
    pub fn is_entered(&self) -> bool {
        self.entered
    }

    #[cfg(test)]
    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    #[cfg(test)]
    pub fn is_autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    pub fn autoplay_epoch(&self) -> u64 {
        self.autoplay_epoch
    }

    /// True while a timer started in `epoch` is still allowed to fire.
    pub fn accepts_tick(&self, epoch: u64) -> bool {
        self.ticking && self.autoplay_epoch == epoch
    }

    pub fn theme(&self) -> Theme {
        resolve_theme(self.active_entry(), self.dark_mode, self.entered)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            profile: self.profile.clone(),
            entries: self.entries.clone(),
            active_id: self.active_id.clone(),
            entered: self.entered,
            dark_mode: self.dark_mode,
            autoplay: self.autoplay,
            theme: self.theme(),
            layout: self.layout.clone(),
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    // ── view transitions ─────────────────────────────────────────────────────

    pub fn apply(&mut self, action: Action) -> Result<(), SessionError> {
        match action {
            Action::Start => {
                self.entered = true;
                self.active_id = self.entries.first().map(|e| e.id.clone());
                self.autoplay = true;
            }
            Action::Reset => {
                self.entered = false;
                self.active_id = None;
                self.autoplay = false;
            }
            Action::Select(id) => {
                if self.position(&id).is_none() {
                    return Err(SessionError::UnknownEntry(id));
                }
                self.active_id = Some(id);
                self.autoplay = false;
            }
            Action::Advance => self.advance(),
            Action::ToggleDarkMode => self.dark_mode = !self.dark_mode,
            Action::SetAutoPlay(enabled) => self.autoplay = enabled,
        }
        self.sync_ticking();
        Ok(())
    }

    /// Selects the entry after the active one, or the first when none is active.
    /// Does not touch the auto-play flags.
    pub fn advance(&mut self) {
        let count = self.entries.len();
        if count == 0 {
            return;
        }
        let next = match self.active_index() {
            Some(current) => (current + 1) % count,
            None => 0,
        };
        self.active_id = Some(self.entries[next].id.clone());
    }

    fn sync_ticking(&mut self) {
        let ticking = self.autoplay && self.entered;
        if ticking != self.ticking {
            self.ticking = ticking;
            self.autoplay_epoch += 1;
        }
    }

    pub fn set_profile(&mut self, profile: Profile) {
        self.profile = profile;
    }

    // ── entry operations ─────────────────────────────────────────────────────

    /// Appends a new entry at the end of the timeline and returns it.
    ///
    /// The key is generated here; callers never choose it.
    pub fn append(&mut self, new_entry: NewEntry) -> Result<&JourneyEntry, SessionError> {
        require_text("role", &new_entry.role)?;
        require_text("company", &new_entry.company)?;

        let id = loop {
            let candidate = Uuid::new_v4().to_string();
            if self.position(&candidate).is_none() {
                break candidate;
            }
        };
        self.entries.push(new_entry.into_entry(id));
        self.refresh_layout();
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Applies a partial edit. A patch that blanks `role` or `company` is
    /// rejected whole and the entry is left as it was.
    pub fn update(&mut self, id: &str, patch: EntryPatch) -> Result<&JourneyEntry, SessionError> {
        let index = self
            .position(id)
            .ok_or_else(|| SessionError::UnknownEntry(id.to_string()))?;
        if let Some(role) = &patch.role {
            require_text("role", role)?;
        }
        if let Some(company) = &patch.company {
            require_text("company", company)?;
        }
        patch.apply_to(&mut self.entries[index]);
        Ok(&self.entries[index])
    }

    /// Removes an entry. Removing the active entry clears the selection.
    pub fn remove(&mut self, id: &str) -> Result<JourneyEntry, SessionError> {
        let index = self
            .position(id)
            .ok_or_else(|| SessionError::UnknownEntry(id.to_string()))?;
        let removed = self.entries.remove(index);
        if self.active_id.as_deref() == Some(id) {
            self.active_id = None;
        }
        self.refresh_layout();
        Ok(removed)
    }

    /// Recomputes geometry only when the key sequence changed.
    fn refresh_layout(&mut self) {
        let keys: Vec<&str> = self.entries.iter().map(|e| e.id.as_str()).collect();
        if !self.layout.matches(&keys) {
            self.layout = compute_layout(&keys);
        }
    }
}

fn require_text(field: &'static str, value: &str) -> Result<(), SessionError> {
    if value.trim().is_empty() {
        return Err(SessionError::EmptyField(field));
    }
    Ok(())
}
