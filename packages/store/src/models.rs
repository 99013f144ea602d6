//! # Domain models mirrored from the diary REST API
//!
//! Every record here is a plain copy of what the server returns. The client never
//! derives invariants of its own on top of them: after each mutation the list is
//! fetched again and replaces whatever was held before.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`DiaryEntry`] | A single diary entry. Locked entries arrive with empty `content` and a placeholder `preview`. |
//! | [`EntryStatus`] | The reflection outcome stored on an entry, or `Pending` when the user has not reflected yet. |
//! | [`Outcome`] | The three statuses a user can pick when reflecting. |
//! | [`SummaryData`] / [`SummaryStats`] | Server-computed mental-health aggregate. |
//! | [`UserProfile`] | Username, display name and avatar glyph of the signed-in user. |
//! | [`AiQuestion`] / [`AiAlert`] | Ephemeral AI suggestions shown on the dashboard. |
//!
//! Request and reply bodies for the mutating endpoints live at the bottom of the file.
//! Field names follow the server's camelCase JSON.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Emoji offered by the mood picker on the write screen.
pub const MOOD_OPTIONS: [&str; 8] = ["😊", "😢", "😠", "😰", "😴", "🤔", "💪", "❤️"];

/// Emoji palette offered by the profile editor.
pub const AVATAR_OPTIONS: [&str; 16] = [
    "🙂", "😎", "🥳", "🤯", "🦁", "🐱", "🦊", "🚀", "🌟", "🌙", "🎵", "🎨", "📚", "☕", "💡", "🔥",
];

/// Shown in place of the AI reply when a reflection could not be delivered.
pub const REFLECTION_FALLBACK: &str = "ขอบคุณที่แบ่งปันความรู้สึก เราอยู่ตรงนี้นะ 💛";

/// Reflection status stored on an entry.
///
/// The server stores an empty string for entries nobody reflected on yet; that and
/// any value this client does not know map to [`EntryStatus::Pending`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntryStatus {
    OverIt,
    StillDealing,
    NeedHelp,
    #[default]
    Pending,
}

impl EntryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryStatus::OverIt => "over_it",
            EntryStatus::StillDealing => "still_dealing",
            EntryStatus::NeedHelp => "need_help",
            EntryStatus::Pending => "pending",
        }
    }

    pub fn outcome(self) -> Option<Outcome> {
        match self {
            EntryStatus::OverIt => Some(Outcome::OverIt),
            EntryStatus::StillDealing => Some(Outcome::StillDealing),
            EntryStatus::NeedHelp => Some(Outcome::NeedHelp),
            EntryStatus::Pending => None,
        }
    }
}

impl From<String> for EntryStatus {
    fn from(raw: String) -> Self {
        match raw.trim() {
            "over_it" => EntryStatus::OverIt,
            "still_dealing" => EntryStatus::StillDealing,
            "need_help" => EntryStatus::NeedHelp,
            _ => EntryStatus::Pending,
        }
    }
}

impl From<EntryStatus> for String {
    fn from(status: EntryStatus) -> Self {
        match status {
            // The server treats the empty string as "not reflected yet".
            EntryStatus::Pending => String::new(),
            other => other.as_str().to_string(),
        }
    }
}

/// A status the user can choose when reflecting on an unlocked entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    OverIt,
    StillDealing,
    NeedHelp,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::OverIt, Outcome::StillDealing, Outcome::NeedHelp];

    pub fn status(self) -> EntryStatus {
        match self {
            Outcome::OverIt => EntryStatus::OverIt,
            Outcome::StillDealing => EntryStatus::StillDealing,
            Outcome::NeedHelp => EntryStatus::NeedHelp,
        }
    }

    /// Hours until the server re-locks the entry for another check-in.
    pub fn recheck_hours(self) -> Option<u32> {
        match self {
            Outcome::OverIt => None,
            Outcome::StillDealing => Some(12),
            Outcome::NeedHelp => Some(6),
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Outcome::OverIt => "✅",
            Outcome::StillDealing => "⏳",
            Outcome::NeedHelp => "🆘",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Outcome::OverIt => "เรื่องจิ๊บจ๊อย",
            Outcome::StillDealing => "ยังสู้อยู่",
            Outcome::NeedHelp => "ไม่ไหวช่วยด้วย",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Outcome::OverIt => "Over it! ไม่ได้รู้สึกแย่แล้ว",
            Outcome::StillDealing => "Still dealing แต่โอเคขึ้นแล้ว (กลับมาใน 12 ชม.)",
            Outcome::NeedHelp => "Need help ยังเครียดมาก (กลับมาใน 6 ชม.)",
        }
    }
}

/// A diary entry as returned by `GET /entries` and `GET /entries/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Emoji picked while writing, empty when none was picked.
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub reflection: String,
    #[serde(default)]
    pub ai_response: String,
    #[serde(default)]
    pub status: EntryStatus,
    /// Server-trimmed excerpt of `content`.
    #[serde(default)]
    pub preview: String,
    #[serde(default)]
    pub is_locked: bool,
    pub unlock_at: DateTime<FixedOffset>,
    pub created_at: DateTime<FixedOffset>,
}

impl DiaryEntry {
    /// Calendar day the entry was written on, in the offset the server reported.
    pub fn created_on(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    pub fn mood(&self) -> Option<&str> {
        let mood = self.mood.trim();
        (!mood.is_empty()).then_some(mood)
    }

    /// Short `d/m/yyyy` date used on cards and in the read view.
    pub fn created_label(&self) -> String {
        self.created_at.format("%-d/%-m/%Y").to_string()
    }
}

/// Counts by status, as computed by `GET /summary`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total: u32,
    pub over_it: u32,
    pub still_dealing: u32,
    pub need_help: u32,
    pub pending: u32,
    #[serde(default)]
    pub need_help_streak: u32,
}

impl SummaryStats {
    pub fn count(&self, status: EntryStatus) -> u32 {
        match status {
            EntryStatus::OverIt => self.over_it,
            EntryStatus::StillDealing => self.still_dealing,
            EntryStatus::NeedHelp => self.need_help,
            EntryStatus::Pending => self.pending,
        }
    }

    /// Percentage of all entries carrying `status`, 0 when there are none.
    pub fn share(&self, status: EntryStatus) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.count(status)) * 100.0 / f64::from(self.total)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryData {
    pub stats: SummaryStats,
    pub mental_score: i32,
    #[serde(default)]
    pub mental_state: String,
    #[serde(default)]
    pub mental_emoji: String,
    #[serde(default)]
    pub ai_summary: String,
}

impl SummaryData {
    /// Score clamped to the 0–100 range the progress bar expects.
    pub fn score_percent(&self) -> u8 {
        self.mental_score.clamp(0, 100) as u8
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    #[serde(default)]
    pub display_name: String,
    /// Emoji or image URL.
    #[serde(default)]
    pub avatar: String,
}

impl UserProfile {
    /// Display name, falling back to the username when it is not set.
    pub fn display_label(&self) -> &str {
        let name = self.display_name.trim();
        if name.is_empty() {
            &self.username
        } else {
            name
        }
    }

    /// Upper-cased first letter of the username, used when no avatar is set.
    pub fn initial(&self) -> String {
        self.username
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    pub fn avatar(&self) -> Option<&str> {
        let avatar = self.avatar.trim();
        (!avatar.is_empty()).then_some(avatar)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiQuestion {
    pub id: i64,
    pub text: String,
    #[serde(default)]
    pub category: String,
}

/// Decode the body of `GET /ai/questions`.
///
/// The server forwards whatever the model produced, so `questions` is either an
/// array or a string holding a JSON array. Anything else decodes to no questions.
pub fn parse_questions(payload: &Value) -> Vec<AiQuestion> {
    let decoded = match payload.get("questions") {
        Some(Value::String(raw)) => serde_json::from_str::<Value>(raw).ok(),
        Some(other) => Some(other.clone()),
        None => None,
    };
    decoded
        .and_then(|value| serde_json::from_value::<Vec<AiQuestion>>(value).ok())
        .unwrap_or_default()
}

/// Pattern-based banner from `GET /ai/alerts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiAlert {
    /// `critical`, `warning` or `info`.
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AlertsPayload {
    #[serde(default)]
    pub alerts: Vec<AiAlert>,
}

// Request and reply bodies.

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntry {
    pub title: String,
    pub content: String,
    pub mood: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflectionRequest {
    pub status: Outcome,
    pub reflection: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflectionReply {
    #[serde(default)]
    pub ai_response: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceAnswer {
    pub question: String,
    pub answer: String,
    pub category: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub display_name: String,
    pub avatar: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginReply {
    pub token: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub avatar: String,
}

/// Error body the server attaches to non-2xx responses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry_json() -> Value {
        json!({
            "id": 7,
            "username": "mali",
            "title": "Exam week",
            "content": "",
            "mood": "😰",
            "reflection": "",
            "aiResponse": "",
            "status": "",
            "needHelpCount": 0,
            "preview": "Locked content...",
            "isLocked": true,
            "unlockAt": "2024-03-02T09:30:00.123456789+07:00",
            "createdAt": "2024-03-01T09:30:00+07:00",
            "isPublic": false
        })
    }

    #[test]
    fn test_entry_from_server_json() {
        let entry: DiaryEntry = serde_json::from_value(entry_json()).unwrap();
        assert_eq!(entry.id, 7);
        assert!(entry.is_locked);
        assert_eq!(entry.status, EntryStatus::Pending);
        assert_eq!(entry.mood(), Some("😰"));
        assert_eq!(entry.created_on(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(entry.created_label(), "1/3/2024");
    }

    #[test]
    fn test_created_on_uses_server_offset() {
        let mut value = entry_json();
        value["createdAt"] = json!("2024-03-01T23:30:00-05:00");
        let entry: DiaryEntry = serde_json::from_value(value).unwrap();
        // Still March 1st in the server's own offset, although it is March 2nd in UTC.
        assert_eq!(entry.created_on(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_status_wire_values() {
        assert_eq!(EntryStatus::from("need_help".to_string()), EntryStatus::NeedHelp);
        assert_eq!(EntryStatus::from("still_dealing".to_string()), EntryStatus::StillDealing);
        assert_eq!(EntryStatus::from("over_it".to_string()), EntryStatus::OverIt);
        assert_eq!(EntryStatus::from("something_new".to_string()), EntryStatus::Pending);
        assert_eq!(String::from(EntryStatus::Pending), "");
        assert_eq!(
            serde_json::to_value(ReflectionRequest {
                status: Outcome::NeedHelp,
                reflection: "still heavy".into(),
            })
            .unwrap(),
            json!({ "status": "need_help", "reflection": "still heavy" })
        );
    }

    #[test]
    fn test_parse_questions_accepts_array_and_encoded_string() {
        let array = json!({ "questions": [{ "id": 1, "text": "What calms you?", "category": "coping" }] });
        let questions = parse_questions(&array);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].category, "coping");

        let encoded = json!({ "questions": "[{\"id\":2,\"text\":\"Best part of today?\",\"category\":\"positive\"}]" });
        assert_eq!(parse_questions(&encoded)[0].id, 2);

        assert!(parse_questions(&json!({ "questions": "not json" })).is_empty());
        assert!(parse_questions(&json!({})).is_empty());
    }

    #[test]
    fn test_summary_shares() {
        let stats = SummaryStats {
            total: 4,
            over_it: 2,
            still_dealing: 1,
            need_help: 1,
            pending: 0,
            need_help_streak: 1,
        };
        assert_eq!(stats.share(EntryStatus::OverIt), 50.0);
        assert_eq!(stats.share(EntryStatus::NeedHelp), 25.0);
        assert_eq!(SummaryStats::default().share(EntryStatus::OverIt), 0.0);

        let summary = SummaryData {
            stats,
            mental_score: -10,
            ..Default::default()
        };
        assert_eq!(summary.score_percent(), 0);
    }

    #[test]
    fn test_profile_labels() {
        let profile = UserProfile {
            username: "mali".into(),
            display_name: "  ".into(),
            avatar: String::new(),
        };
        assert_eq!(profile.display_label(), "mali");
        assert_eq!(profile.initial(), "M");
        assert_eq!(profile.avatar(), None);
    }

    #[test]
    fn test_alert_kind_is_renamed() {
        let payload: AlertsPayload = serde_json::from_value(json!({
            "alerts": [{ "type": "critical", "title": "t", "message": "m" }],
            "maxStreak": 3
        }))
        .unwrap();
        assert_eq!(payload.alerts[0].kind, "critical");
    }
}
