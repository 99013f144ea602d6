//! # Month grid for the calendar screen
//!
//! [`month_grid`] is a pure function of the displayed month and the entries
//! currently loaded; nothing about the calendar is stored between renders.
//!
//! The grid starts on Sunday. It is made of `first weekday` leading
//! [`CalendarCell::Blank`] cells followed by one [`CalendarCell::Day`] per day of
//! the month. A day collects the entries written on it (in list order), the first
//! non-empty mood, and a [`DayTone`] where `need_help` beats `still_dealing`, which
//! beats `over_it`.

use chrono::{Datelike, NaiveDate};

use crate::models::{DiaryEntry, EntryStatus};

/// Column headers, Sunday first.
pub const WEEKDAY_HEADERS: [&str; 7] = ["อา", "จ", "อ", "พ", "พฤ", "ศ", "ส"];

const THAI_MONTHS: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

/// Buddhist-era years are Gregorian years plus 543.
const BUDDHIST_ERA_OFFSET: i32 = 543;

/// A displayed month. `month` is 1-based and always in `1..=12`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn days_in_month(self) -> u32 {
        let days = self
            .next()
            .first_day()
            .signed_duration_since(self.first_day())
            .num_days();
        u32::try_from(days).unwrap_or(0)
    }

    /// Blank cells before day 1 in a Sunday-first grid.
    pub fn leading_blanks(self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    /// Month name and Buddhist-era year, e.g. `มีนาคม 2567`.
    pub fn label(self) -> String {
        let name = THAI_MONTHS[(self.month - 1) as usize];
        format!("{name} {}", self.year + BUDDHIST_ERA_OFFSET)
    }
}

/// Colour of a day with reflected entries. Ordered by precedence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DayTone {
    Green,
    Yellow,
    Red,
}

impl DayTone {
    pub fn of(status: EntryStatus) -> Option<Self> {
        match status {
            EntryStatus::OverIt => Some(DayTone::Green),
            EntryStatus::StillDealing => Some(DayTone::Yellow),
            EntryStatus::NeedHelp => Some(DayTone::Red),
            EntryStatus::Pending => None,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            DayTone::Green => "status-green",
            DayTone::Yellow => "status-yellow",
            DayTone::Red => "status-red",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub entry_ids: Vec<i64>,
    pub mood: Option<String>,
    pub tone: Option<DayTone>,
}

impl DayCell {
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn has_entries(&self) -> bool {
        !self.entry_ids.is_empty()
    }

    /// Entries beyond the first, shown as a `+n` badge.
    pub fn overflow(&self) -> usize {
        self.entry_ids.len().saturating_sub(1)
    }

    /// The entry opened when the day is clicked.
    pub fn first_entry(&self) -> Option<i64> {
        self.entry_ids.first().copied()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CalendarCell {
    Blank,
    Day(DayCell),
}

pub fn month_grid(month: YearMonth, entries: &[DiaryEntry]) -> Vec<CalendarCell> {
    let blanks = month.leading_blanks() as usize;
    let days = month.days_in_month();
    let mut cells = Vec::with_capacity(blanks + days as usize);
    cells.extend(std::iter::repeat(CalendarCell::Blank).take(blanks));

    for date in month.first_day().iter_days().take(days as usize) {
        let on_day: Vec<&DiaryEntry> = entries.iter().filter(|e| e.created_on() == date).collect();
        cells.push(CalendarCell::Day(DayCell {
            date,
            entry_ids: on_day.iter().map(|e| e.id).collect(),
            mood: on_day.iter().find_map(|e| e.mood()).map(str::to_string),
            tone: on_day.iter().filter_map(|e| DayTone::of(e.status)).max(),
        }));
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset};

    fn entry(id: i64, created: &str, status: EntryStatus, mood: &str) -> DiaryEntry {
        let created_at = DateTime::<FixedOffset>::parse_from_rfc3339(created).unwrap();
        DiaryEntry {
            id,
            title: format!("entry {id}"),
            content: "text".into(),
            mood: mood.into(),
            reflection: String::new(),
            ai_response: String::new(),
            status,
            preview: "text".into(),
            is_locked: false,
            unlock_at: created_at,
            created_at,
        }
    }

    fn day(cells: &[CalendarCell], n: u32) -> &DayCell {
        cells
            .iter()
            .find_map(|c| match c {
                CalendarCell::Day(d) if d.day() == n => Some(d),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_grid_shape() {
        // March 2024 starts on a Friday and has 31 days.
        let march = YearMonth::new(2024, 3).unwrap();
        let cells = month_grid(march, &[]);
        assert_eq!(march.leading_blanks(), 5);
        assert_eq!(cells.len(), 5 + 31);
        assert!(cells[..5].iter().all(|c| *c == CalendarCell::Blank));
        assert_eq!(day(&cells, 1).date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());

        assert_eq!(YearMonth::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(YearMonth::new(2023, 2).unwrap().days_in_month(), 28);
        assert_eq!(YearMonth::new(2024, 12).unwrap().days_in_month(), 31);
        assert!(YearMonth::new(2024, 13).is_none());
    }

    #[test]
    fn test_month_navigation_wraps_years() {
        let january = YearMonth::new(2024, 1).unwrap();
        assert_eq!(january.prev(), YearMonth::new(2023, 12).unwrap());
        assert_eq!(january.prev().next(), january);
        assert_eq!(january.label(), "มกราคม 2567");
    }

    #[test]
    fn test_tone_precedence() {
        let march = YearMonth::new(2024, 3).unwrap();
        let entries = vec![
            entry(1, "2024-03-04T08:00:00+07:00", EntryStatus::OverIt, ""),
            entry(2, "2024-03-04T12:00:00+07:00", EntryStatus::NeedHelp, ""),
            entry(3, "2024-03-04T18:00:00+07:00", EntryStatus::StillDealing, ""),
            entry(4, "2024-03-05T08:00:00+07:00", EntryStatus::OverIt, ""),
            entry(5, "2024-03-05T09:00:00+07:00", EntryStatus::StillDealing, ""),
            entry(6, "2024-03-06T09:00:00+07:00", EntryStatus::Pending, ""),
        ];
        let cells = month_grid(march, &entries);
        assert_eq!(day(&cells, 4).tone, Some(DayTone::Red));
        assert_eq!(day(&cells, 5).tone, Some(DayTone::Yellow));
        assert_eq!(day(&cells, 6).tone, None);
        assert!(day(&cells, 6).has_entries());
        assert_eq!(day(&cells, 7).tone, None);
        assert!(!day(&cells, 7).has_entries());
    }

    #[test]
    fn test_overflow_mood_and_first_entry() {
        let march = YearMonth::new(2024, 3).unwrap();
        let entries = vec![
            entry(10, "2024-03-09T21:00:00+07:00", EntryStatus::Pending, ""),
            entry(11, "2024-03-09T10:00:00+07:00", EntryStatus::Pending, "😴"),
            entry(12, "2024-03-09T08:00:00+07:00", EntryStatus::Pending, "😊"),
            entry(13, "2024-04-09T08:00:00+07:00", EntryStatus::Pending, "😊"),
        ];
        let cells = month_grid(march, &entries);
        let ninth = day(&cells, 9);
        assert_eq!(ninth.entry_ids, vec![10, 11, 12]);
        assert_eq!(ninth.overflow(), 2);
        assert_eq!(ninth.first_entry(), Some(10));
        assert_eq!(ninth.mood.as_deref(), Some("😴"));
        assert_eq!(day(&cells, 10).overflow(), 0);
    }
}
