//! Domain models, view-state derivations and client-side persistence for the
//! mood diary. Nothing in here touches the network or the DOM.

pub mod calendar;
pub mod config;
pub mod countdown;
pub mod forms;
pub mod kv;
pub mod models;
pub mod notify;
pub mod prefs;
pub mod reflection;
pub mod session;
pub mod view;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use calendar::{month_grid, CalendarCell, DayCell, DayTone, YearMonth};
pub use config::DiaryConfig;
pub use countdown::Countdown;
pub use forms::{EntryDraft, FormError};
pub use kv::{KeyValueStore, SharedStore};
pub use models::{
    AiAlert, AiQuestion, DiaryEntry, EntryStatus, Outcome, SummaryData, SummaryStats, UserProfile,
};
pub use notify::{UnlockNotice, UnlockNotifier};
pub use prefs::{Preferences, Theme};
pub use reflection::ReflectionFlow;
pub use session::Session;
pub use view::{LoginRequired, ReadSession, View, ViewState};
