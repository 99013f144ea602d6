//! Remaining time until a locked entry may be opened.

use std::fmt;

use chrono::{DateTime, FixedOffset, Utc};

/// What a locked card shows under its padlock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Countdown {
    /// The unlock time has passed. The entry stays locked until the user
    /// confirms with an explicit unlock request.
    Ready,
    Remaining { hours: i64, minutes: u8, seconds: u8 },
}

impl Countdown {
    /// Time left from `now` until `unlock_at`, truncated to whole seconds.
    pub fn between(unlock_at: DateTime<FixedOffset>, now: DateTime<Utc>) -> Self {
        let millis = unlock_at.signed_duration_since(now).num_milliseconds();
        if millis <= 0 {
            return Countdown::Ready;
        }
        let total = millis / 1000;
        Countdown::Remaining {
            hours: total / 3600,
            minutes: ((total % 3600) / 60) as u8,
            seconds: (total % 60) as u8,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Countdown::Ready)
    }

    /// Whole seconds left, `None` once ready.
    pub fn remaining_secs(&self) -> Option<i64> {
        match *self {
            Countdown::Ready => None,
            Countdown::Remaining {
                hours,
                minutes,
                seconds,
            } => Some(hours * 3600 + i64::from(minutes) * 60 + i64::from(seconds)),
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Countdown::Ready => f.write_str("Ready!"),
            Countdown::Remaining {
                hours,
                minutes,
                seconds,
            } => write!(f, "{hours:02}:{minutes:02}:{seconds:02}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(rfc3339: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap()
    }

    #[test]
    fn test_formats_hours_minutes_seconds() {
        let unlock = at("2024-03-02T09:30:00+07:00");
        let now = (unlock - Duration::seconds(3 * 3600 + 4 * 60 + 5)).with_timezone(&Utc);
        let countdown = Countdown::between(unlock, now);
        assert_eq!(countdown.to_string(), "03:04:05");
        assert_eq!(countdown.remaining_secs(), Some(11045));
    }

    #[test]
    fn test_hours_are_not_wrapped_at_a_day() {
        let unlock = at("2024-03-03T00:00:00Z");
        let now = (unlock - Duration::hours(30)).with_timezone(&Utc);
        assert_eq!(Countdown::between(unlock, now).to_string(), "30:00:00");
    }

    #[test]
    fn test_ready_at_and_after_unlock() {
        let unlock = at("2024-03-02T09:30:00+07:00");
        assert!(Countdown::between(unlock, unlock.with_timezone(&Utc)).is_ready());
        let later = (unlock + Duration::minutes(5)).with_timezone(&Utc);
        assert_eq!(Countdown::between(unlock, later).to_string(), "Ready!");
    }

    #[test]
    fn test_sub_second_remainder_is_not_ready() {
        let unlock = at("2024-03-02T09:30:00+07:00");
        let now = (unlock - Duration::milliseconds(400)).with_timezone(&Utc);
        assert_eq!(Countdown::between(unlock, now).to_string(), "00:00:00");
    }

    #[test]
    fn test_strictly_decreases_then_stays_ready() {
        let unlock = at("2024-03-02T09:30:00+07:00");
        let start = (unlock - Duration::seconds(5)).with_timezone(&Utc);
        let mut previous: Option<i64> = None;
        let mut became_ready = false;
        for tick in 0..10 {
            let countdown = Countdown::between(unlock, start + Duration::seconds(tick));
            match countdown.remaining_secs() {
                Some(secs) => {
                    assert!(!became_ready, "countdown resumed after reaching ready");
                    if let Some(prev) = previous {
                        assert!(secs < prev);
                    }
                    previous = Some(secs);
                }
                None => became_ready = true,
            }
        }
        assert!(became_ready);
    }
}
