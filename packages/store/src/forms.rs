//! Client-side validation for the controlled forms.
//!
//! Each check runs before anything is sent; the error's `Display` text is what
//! the form shows inline.

use thiserror::Error;

use crate::models::{AiQuestion, Credentials, NewEntry, PreferenceAnswer};

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please give your entry a title")]
    MissingTitle,
    #[error("Write something before sealing your entry")]
    MissingContent,
    #[error("Username is required")]
    MissingUsername,
    #[error("Password is required")]
    MissingPassword,
    #[error("Passwords don't match")]
    PasswordMismatch,
    #[error("Answer cannot be empty")]
    EmptyAnswer,
}

/// Buffers of the write screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub title: String,
    pub content: String,
    pub mood: String,
}

impl EntryDraft {
    /// Select `mood`, or clear it when it is already selected.
    pub fn toggle_mood(&mut self, mood: &str) {
        if self.mood == mood {
            self.mood.clear();
        } else {
            self.mood = mood.to_string();
        }
    }

    /// Append recognised speech to the content buffer.
    pub fn append_transcript(&mut self, text: &str) {
        self.content.push_str(text);
    }

    pub fn validate(&self) -> Result<NewEntry, FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::MissingTitle);
        }
        if self.content.trim().is_empty() {
            return Err(FormError::MissingContent);
        }
        Ok(NewEntry {
            title: self.title.clone(),
            content: self.content.clone(),
            mood: self.mood.clone(),
        })
    }
}

pub fn validate_login(username: &str, password: &str) -> Result<Credentials, FormError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(FormError::MissingUsername);
    }
    if password.is_empty() {
        return Err(FormError::MissingPassword);
    }
    Ok(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

pub fn validate_registration(
    username: &str,
    password: &str,
    confirm: &str,
) -> Result<Credentials, FormError> {
    if password != confirm {
        return Err(FormError::PasswordMismatch);
    }
    validate_login(username, password)
}

pub fn validate_answer(question: &AiQuestion, answer: &str) -> Result<PreferenceAnswer, FormError> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Err(FormError::EmptyAnswer);
    }
    Ok(PreferenceAnswer {
        question: question.text.clone(),
        answer: answer.to_string(),
        category: question.category.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_requires_title_and_content() {
        let mut draft = EntryDraft::default();
        assert_eq!(draft.validate(), Err(FormError::MissingTitle));
        draft.title = "Test".into();
        assert_eq!(draft.validate(), Err(FormError::MissingContent));
        draft.content = "Hello".into();
        assert_eq!(
            draft.validate(),
            Ok(NewEntry {
                title: "Test".into(),
                content: "Hello".into(),
                mood: String::new(),
            })
        );
    }

    #[test]
    fn test_mood_toggle_and_transcript() {
        let mut draft = EntryDraft::default();
        draft.toggle_mood("😊");
        assert_eq!(draft.mood, "😊");
        draft.toggle_mood("😢");
        assert_eq!(draft.mood, "😢");
        draft.toggle_mood("😢");
        assert!(draft.mood.is_empty());

        draft.content = "วันนี้".into();
        draft.append_transcript("เหนื่อยมาก");
        assert_eq!(draft.content, "วันนี้เหนื่อยมาก");
    }

    #[test]
    fn test_registration_checks_confirmation_first() {
        assert_eq!(
            validate_registration("mali", "secret", "secrets"),
            Err(FormError::PasswordMismatch)
        );
        assert_eq!(FormError::PasswordMismatch.to_string(), "Passwords don't match");
        assert_eq!(validate_registration(" ", "x", "x"), Err(FormError::MissingUsername));
        let creds = validate_registration(" mali ", "secret", "secret").unwrap();
        assert_eq!(creds.username, "mali");
    }

    #[test]
    fn test_login_requires_password() {
        assert_eq!(validate_login("mali", ""), Err(FormError::MissingPassword));
    }

    #[test]
    fn test_answer_carries_question_and_category() {
        let question = AiQuestion {
            id: 1,
            text: "What helps you relax?".into(),
            category: "coping".into(),
        };
        assert_eq!(validate_answer(&question, "   "), Err(FormError::EmptyAnswer));
        let answer = validate_answer(&question, " music ").unwrap();
        assert_eq!(answer.answer, "music");
        assert_eq!(answer.question, "What helps you relax?");
        assert_eq!(answer.category, "coping");
    }
}
