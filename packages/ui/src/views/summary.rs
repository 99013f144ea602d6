use dioxus::prelude::*;
use store::{EntryStatus, SummaryData};

use crate::auth::{report_api_error, use_auth, use_client};

const STAT_CARDS: [(&str, &str, Option<EntryStatus>, &str); 5] = [
    ("📝", "บันทึกทั้งหมด", None, ""),
    ("✅", "เรื่องจิ๊บจ๊อย", Some(EntryStatus::OverIt), "stat-green"),
    ("⏳", "ยังสู้อยู่", Some(EntryStatus::StillDealing), "stat-yellow"),
    ("🆘", "ต้องการช่วยเหลือ", Some(EntryStatus::NeedHelp), "stat-red"),
    ("⏸️", "ยังไม่ได้ไตร่ตรอง", Some(EntryStatus::Pending), "stat-gray"),
];

const DISTRIBUTION: [(EntryStatus, &str, &str); 3] = [
    (EntryStatus::OverIt, "green", "จบแล้ว"),
    (EntryStatus::StillDealing, "yellow", "กำลังสู้"),
    (EntryStatus::NeedHelp, "red", "ต้องช่วย"),
];

/// Mental health summary. The analysis is requested on demand.
#[component]
pub fn SummaryView() -> Element {
    let client = use_client();
    let auth = use_auth();
    let mut summary = use_signal(|| Option::<SummaryData>::None);
    let mut loading = use_signal(|| false);

    let load = use_callback(move |()| {
        if loading() {
            return;
        }
        loading.set(true);
        let client = client.clone();
        spawn(async move {
            match client.summary().await {
                Ok(data) => summary.set(Some(data)),
                Err(e) => report_api_error(auth, "fetch summary", &e),
            }
            loading.set(false);
        });
    });

    rsx! {
        div {
            class: "summary-view container",
            header {
                class: "view-header",
                h1 { "Mental Health Summary" }
                p { class: "subtitle", "ภาพรวมสุขภาพจิตของคุณ" }
                if summary.read().is_some() {
                    button {
                        class: "btn-text",
                        disabled: loading(),
                        onclick: move |_| load.call(()),
                        "🔄 อัปเดตข้อมูลล่าสุด"
                    }
                }
            }

            if loading() {
                div { class: "loading-state", "กำลังวิเคราะห์ข้อมูล..." }
            } else if let Some(data) = summary() {
                SummaryContent { data }
            } else {
                div {
                    class: "empty-state",
                    p { "กดปุ่มเพื่อวิเคราะห์สรุปสุขภาพจิตของคุณ" }
                    button {
                        class: "btn-primary",
                        onclick: move |_| load.call(()),
                        "✨ เริ่มการวิเคราะห์"
                    }
                }
            }
        }
    }
}

#[component]
fn SummaryContent(data: SummaryData) -> Element {
    let stats = data.stats.clone();
    let score = data.score_percent();

    rsx! {
        div {
            class: "summary-content",
            div {
                class: "glass-panel mental-hero",
                div { class: "mental-emoji", "{data.mental_emoji}" }
                div {
                    class: "mental-score-display",
                    span { class: "score-number", "{data.mental_score}" }
                    span { class: "score-label", "/100" }
                }
                div { class: "mental-state-label", "{data.mental_state}" }
                div {
                    class: "score-bar",
                    div { class: "score-fill", style: "width: {score}%" }
                }
            }

            div {
                class: "stats-grid",
                for (icon, label, status, tone) in STAT_CARDS {
                    div {
                        key: "{label}",
                        class: "glass-panel stat-card {tone}",
                        div { class: "stat-icon", "{icon}" }
                        div {
                            class: "stat-value",
                            {status.map_or(stats.total, |s| stats.count(s)).to_string()}
                        }
                        div { class: "stat-label", "{label}" }
                    }
                }
            }

            if stats.total > 0 {
                div {
                    class: "glass-panel chart-section",
                    h3 { "สัดส่วนสถานะ" }
                    div {
                        class: "status-bar-chart",
                        for (status, color, _) in DISTRIBUTION {
                            if stats.count(status) > 0 {
                                div {
                                    key: "{color}",
                                    class: "bar-segment {color}",
                                    style: "width: {stats.share(status)}%",
                                    title: "{stats.count(status)}",
                                }
                            }
                        }
                    }
                    div {
                        class: "chart-legend",
                        for (_, color, legend) in DISTRIBUTION {
                            span {
                                key: "{color}",
                                class: "legend-item",
                                span { class: "dot {color}" }
                                "{legend}"
                            }
                        }
                    }
                }
            }

            if !data.ai_summary.trim().is_empty() {
                div {
                    class: "glass-panel ai-summary-section",
                    h3 { "🤖 AI วิเคราะห์" }
                    div { class: "ai-summary-text", "{data.ai_summary}" }
                }
            }
        }
    }
}
