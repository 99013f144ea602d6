use chrono::Local;
use dioxus::prelude::*;
use store::calendar::WEEKDAY_HEADERS;
use store::{month_grid, CalendarCell, DayCell, YearMonth};

use crate::diary::use_diary;

/// Month calendar of entries. Clicking a day opens its first entry.
#[component]
pub fn CalendarView() -> Element {
    let diary = use_diary();
    let mut month = use_signal(|| YearMonth::containing(Local::now().date_naive()));
    let shown = month();
    let cells = month_grid(shown, &diary.entries.read());

    rsx! {
        div {
            class: "calendar-view container",
            header {
                class: "view-header",
                h1 { "📅 Calendar" }
                p { class: "subtitle", "ดูประวัติบันทึกของคุณ" }
            }

            div {
                class: "glass-panel calendar-panel",
                div {
                    class: "calendar-nav",
                    button { onclick: move |_| month.set(shown.prev()), "<" }
                    span { "{shown.label()}" }
                    button { onclick: move |_| month.set(shown.next()), ">" }
                }

                div {
                    class: "calendar-grid",
                    for header in WEEKDAY_HEADERS {
                        div { key: "{header}", class: "calendar-day-header", "{header}" }
                    }
                    for (i, cell) in cells.into_iter().enumerate() {
                        {calendar_cell(i, cell)}
                    }
                }
            }
        }
    }
}

fn calendar_cell(index: usize, cell: CalendarCell) -> Element {
    match cell {
        CalendarCell::Blank => rsx! {
            div { key: "blank-{index}", class: "calendar-day empty" }
        },
        CalendarCell::Day(day) => rsx! {
            CalendarDay { key: "{day.date}", day }
        },
    }
}

#[component]
fn CalendarDay(day: DayCell) -> Element {
    let diary = use_diary();
    let tone = day.tone.map(|t| t.css_class()).unwrap_or_default();
    let filled = if day.has_entries() { "has-entry" } else { "" };
    let first = day.first_entry();
    let overflow = day.overflow();

    rsx! {
        div {
            class: "calendar-day {filled} {tone}",
            onclick: move |_| {
                if let Some(id) = first {
                    diary.open_entry(id);
                }
            },
            span { class: "day-number", "{day.day()}" }
            if let Some(mood) = &day.mood {
                span { class: "day-mood", "{mood}" }
            }
            if overflow > 0 {
                span { class: "day-count", "+{overflow}" }
            }
        }
    }
}
