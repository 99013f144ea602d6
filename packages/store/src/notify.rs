//! Once-per-entry unlock reminders.
//!
//! The UI polls [`UnlockNotifier::due`] on a fixed period with the entries it
//! currently holds. An entry is due when its unlock time lies inside the window
//! `(now - grace, now + lead]` and it has not been reported before. The record of
//! reported entries lives only as long as the notifier, so a page reload starts
//! from scratch.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::config::TimerConfig;
use crate::models::DiaryEntry;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnlockNotice {
    pub entry_id: i64,
    pub title: String,
    pub body: String,
}

impl UnlockNotice {
    pub fn for_entry(entry: &DiaryEntry) -> Self {
        Self {
            entry_id: entry.id,
            title: "📖 Entry Ready!".to_string(),
            body: format!("\"{}\" is ready to reflect on!", entry.title),
        }
    }
}

#[derive(Clone, Debug)]
pub struct UnlockNotifier {
    notified: HashSet<i64>,
    lead_ms: i64,
    grace_ms: i64,
}

impl Default for UnlockNotifier {
    fn default() -> Self {
        Self::from_config(&TimerConfig::default())
    }
}

impl UnlockNotifier {
    pub fn new(lead_secs: u64, grace_secs: u64) -> Self {
        Self {
            notified: HashSet::new(),
            lead_ms: secs_to_ms(lead_secs),
            grace_ms: secs_to_ms(grace_secs),
        }
    }

    pub fn from_config(timers: &TimerConfig) -> Self {
        Self::new(timers.notify_lead_secs, timers.notify_grace_secs)
    }

    /// Whether `entry` is locked and unlocks inside the notification window.
    pub fn in_window(&self, entry: &DiaryEntry, now: DateTime<Utc>) -> bool {
        if !entry.is_locked {
            return false;
        }
        let diff = entry.unlock_at.signed_duration_since(now).num_milliseconds();
        diff <= self.lead_ms && diff > -self.grace_ms
    }

    /// Notices for entries that entered the window and were not reported yet.
    /// Every returned entry is recorded and never returned again.
    pub fn due(&mut self, entries: &[DiaryEntry], now: DateTime<Utc>) -> Vec<UnlockNotice> {
        let mut notices = Vec::new();
        for entry in entries {
            if self.in_window(entry, now) && self.notified.insert(entry.id) {
                notices.push(UnlockNotice::for_entry(entry));
            }
        }
        notices
    }

    pub fn was_notified(&self, entry_id: i64) -> bool {
        self.notified.contains(&entry_id)
    }
}

fn secs_to_ms(secs: u64) -> i64 {
    i64::try_from(secs).unwrap_or(i64::MAX).saturating_mul(1000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    fn locked(id: i64, unlock_at: DateTime<Utc>) -> DiaryEntry {
        let offset = FixedOffset::east_opt(7 * 3600).unwrap();
        DiaryEntry {
            id,
            title: format!("entry {id}"),
            content: String::new(),
            mood: String::new(),
            reflection: String::new(),
            ai_response: String::new(),
            status: Default::default(),
            preview: "Locked content...".into(),
            is_locked: true,
            unlock_at: unlock_at.with_timezone(&offset),
            created_at: (unlock_at - Duration::hours(24)).with_timezone(&offset),
        }
    }

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-03-02T02:30:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_window_bounds() {
        let notifier = UnlockNotifier::new(5, 60);
        let now = now();
        assert!(notifier.in_window(&locked(1, now + Duration::seconds(5)), now));
        assert!(!notifier.in_window(&locked(2, now + Duration::seconds(6)), now));
        assert!(notifier.in_window(&locked(3, now - Duration::seconds(59)), now));
        assert!(!notifier.in_window(&locked(4, now - Duration::seconds(60)), now));

        let mut unlocked = locked(5, now);
        unlocked.is_locked = false;
        assert!(!notifier.in_window(&unlocked, now));
    }

    #[test]
    fn test_huge_windows_saturate() {
        let notifier = UnlockNotifier::new(u64::MAX / 1000, u64::MAX);
        let now = now();
        assert!(notifier.in_window(&locked(1, now + Duration::days(365)), now));
        assert!(notifier.in_window(&locked(2, now - Duration::days(365)), now));
    }

    #[test]
    fn test_each_entry_notified_once_across_cycles() {
        let mut notifier = UnlockNotifier::default();
        let start = now();
        let entries = vec![
            locked(1, start + Duration::seconds(3)),
            locked(2, start + Duration::hours(2)),
        ];

        let mut total = 0;
        // Six polling cycles ten seconds apart; entry 1 stays inside the window for most of them.
        for cycle in 0..6 {
            let notices = notifier.due(&entries, start + Duration::seconds(cycle * 10));
            assert!(notices.iter().all(|n| n.entry_id == 1));
            total += notices.len();
        }
        assert_eq!(total, 1);
        assert!(notifier.was_notified(1));
        assert!(!notifier.was_notified(2));
    }

    #[test]
    fn test_notice_text() {
        let entry = locked(9, now());
        let notice = UnlockNotice::for_entry(&entry);
        assert_eq!(notice.title, "📖 Entry Ready!");
        assert_eq!(notice.body, "\"entry 9\" is ready to reflect on!");
    }
}
