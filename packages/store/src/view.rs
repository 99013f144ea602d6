//! # View controller state
//!
//! The app shows exactly one of five screens. [`ViewState`] holds which one, plus
//! the transient state of the read screen. Screens that need an account
//! (write, summary, calendar) and deleting an entry are refused with
//! [`LoginRequired`] while signed out; the caller then opens the login modal and
//! leaves the current screen in place.
//!
//! Leaving the read screen always drops its [`ReadSession`], so nothing about a
//! previously opened entry survives into the next visit.

use thiserror::Error;

use crate::models::DiaryEntry;
use crate::reflection::ReflectionFlow;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Dashboard,
    Write,
    Read,
    Summary,
    Calendar,
}

impl View {
    pub fn requires_auth(self) -> bool {
        matches!(self, View::Write | View::Summary | View::Calendar)
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("sign in to continue")]
pub struct LoginRequired;

/// Gate for actions that need an account.
pub fn require_login(authenticated: bool) -> Result<(), LoginRequired> {
    if authenticated {
        Ok(())
    } else {
        Err(LoginRequired)
    }
}

/// State of the read screen for one entry.
#[derive(Clone, Debug, PartialEq)]
pub struct ReadSession {
    pub entry_id: i64,
    /// `None` until `GET /entries/{id}` answers.
    pub entry: Option<DiaryEntry>,
    pub reflection_text: String,
    pub flow: ReflectionFlow,
}

impl ReadSession {
    pub fn new(entry_id: i64) -> Self {
        Self {
            entry_id,
            entry: None,
            reflection_text: String::new(),
            flow: ReflectionFlow::default(),
        }
    }

    /// Apply a fetched entry if it still belongs to this session. The reflection
    /// buffer is seeded from the entry's previous reflection.
    pub fn apply_fetched(&mut self, entry: DiaryEntry) -> bool {
        if entry.id != self.entry_id {
            return false;
        }
        self.reflection_text = entry.reflection.clone();
        self.flow = ReflectionFlow::default();
        self.entry = Some(entry);
        true
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    view: View,
    read: Option<ReadSession>,
}

impl ViewState {
    pub fn view(&self) -> View {
        self.view
    }

    pub fn read(&self) -> Option<&ReadSession> {
        self.read.as_ref()
    }

    pub fn read_mut(&mut self) -> Option<&mut ReadSession> {
        self.read.as_mut()
    }

    /// Switch screens. The read screen can only be entered via [`Self::open_entry`].
    pub fn open(&mut self, target: View, authenticated: bool) -> Result<(), LoginRequired> {
        if target.requires_auth() {
            require_login(authenticated)?;
        }
        match target {
            View::Read => {}
            other => {
                self.view = other;
                self.read = None;
            }
        }
        Ok(())
    }

    pub fn open_entry(&mut self, entry_id: i64) {
        self.view = View::Read;
        self.read = Some(ReadSession::new(entry_id));
    }

    pub fn back(&mut self) {
        self.view = View::Dashboard;
        self.read = None;
    }

    /// Called when the reflection result modal is acknowledged.
    pub fn finish_reflection(&mut self) {
        self.back();
    }

    /// Forget everything tied to the account that just signed out. Gated
    /// screens and the read screen fall back to the dashboard.
    pub fn signed_out(&mut self) {
        if self.view.requires_auth() || self.view == View::Read {
            self.back();
        }
    }

    /// Deleting is gated like the protected screens.
    pub fn require_delete(&self, authenticated: bool) -> Result<(), LoginRequired> {
        require_login(authenticated)
    }

    /// Called as soon as a delete is confirmed, before the request completes.
    /// Returns `true` when the read screen was showing the deleted entry.
    pub fn entry_deleted(&mut self, entry_id: i64) -> bool {
        let showing = self.read.as_ref().is_some_and(|r| r.entry_id == entry_id);
        if showing {
            self.back();
        }
        showing
    }
}
