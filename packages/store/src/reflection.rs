//! Reflection submission for one read session.
//!
//! `Unanswered → Selected → Submitting → Answered`. A failed submission still
//! ends in `Answered`, carrying [`REFLECTION_FALLBACK`] so the user is never left
//! without a reply.

use std::fmt::Display;

use crate::models::{Outcome, REFLECTION_FALLBACK};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ReflectionFlow {
    #[default]
    Unanswered,
    Selected(Outcome),
    Submitting(Outcome),
    Answered { outcome: Outcome, message: String },
}

impl ReflectionFlow {
    /// Pick a status. Ignored once a submission is under way.
    pub fn select(&mut self, outcome: Outcome) {
        if matches!(self, ReflectionFlow::Unanswered | ReflectionFlow::Selected(_)) {
            *self = ReflectionFlow::Selected(outcome);
        }
    }

    pub fn selected(&self) -> Option<Outcome> {
        match self {
            ReflectionFlow::Unanswered => None,
            ReflectionFlow::Selected(o) | ReflectionFlow::Submitting(o) => Some(*o),
            ReflectionFlow::Answered { outcome, .. } => Some(*outcome),
        }
    }

    pub fn can_submit(&self) -> bool {
        matches!(self, ReflectionFlow::Selected(_))
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, ReflectionFlow::Submitting(_))
    }

    /// Move to `Submitting`, returning the outcome to send. `None` when nothing
    /// is selected or a submission already started.
    pub fn begin_submit(&mut self) -> Option<Outcome> {
        match *self {
            ReflectionFlow::Selected(outcome) => {
                *self = ReflectionFlow::Submitting(outcome);
                Some(outcome)
            }
            _ => None,
        }
    }

    /// Record the server's reply. Errors and blank replies show the fallback.
    pub fn complete<E: Display>(&mut self, reply: Result<String, E>) {
        let ReflectionFlow::Submitting(outcome) = *self else {
            return;
        };
        let message = match reply {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => REFLECTION_FALLBACK.to_string(),
            Err(e) => {
                tracing::warn!("reflection reply unavailable, showing fallback: {e}");
                REFLECTION_FALLBACK.to_string()
            }
        };
        *self = ReflectionFlow::Answered { outcome, message };
    }

    /// Outcome and message once the result modal should be shown.
    pub fn result(&self) -> Option<(Outcome, &str)> {
        match self {
            ReflectionFlow::Answered { outcome, message } => Some((*outcome, message.as_str())),
            _ => None,
        }
    }

    /// The hotline block is shown for `need_help` answers and nothing else.
    pub fn shows_crisis_resources(&self) -> bool {
        matches!(
            self,
            ReflectionFlow::Answered {
                outcome: Outcome::NeedHelp,
                ..
            }
        )
    }

    pub fn recheck_hours(&self) -> Option<u32> {
        self.result().and_then(|(outcome, _)| outcome.recheck_hours())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submitted(outcome: Outcome, reply: Result<String, &str>) -> ReflectionFlow {
        let mut flow = ReflectionFlow::default();
        flow.select(outcome);
        assert_eq!(flow.begin_submit(), Some(outcome));
        flow.complete(reply);
        flow
    }

    #[test]
    fn test_happy_path() {
        let mut flow = ReflectionFlow::default();
        assert!(!flow.can_submit());
        assert_eq!(flow.begin_submit(), None);

        flow.select(Outcome::StillDealing);
        flow.select(Outcome::OverIt);
        assert_eq!(flow.selected(), Some(Outcome::OverIt));
        assert!(flow.can_submit());

        assert_eq!(flow.begin_submit(), Some(Outcome::OverIt));
        assert!(flow.is_submitting());
        // Double submit is refused and selection is frozen.
        assert_eq!(flow.begin_submit(), None);
        flow.select(Outcome::NeedHelp);
        assert_eq!(flow.selected(), Some(Outcome::OverIt));

        flow.complete(Ok::<_, &str>("Proud of you".to_string()));
        assert_eq!(flow.result(), Some((Outcome::OverIt, "Proud of you")));
        assert_eq!(flow.recheck_hours(), None);
    }

    #[test]
    fn test_failure_shows_fallback() {
        let flow = submitted(Outcome::StillDealing, Err("connection refused"));
        assert_eq!(flow.result(), Some((Outcome::StillDealing, REFLECTION_FALLBACK)));
        assert_eq!(flow.recheck_hours(), Some(12));

        let blank = submitted(Outcome::OverIt, Ok("  ".to_string()));
        assert_eq!(blank.result().map(|(_, m)| m), Some(REFLECTION_FALLBACK));
    }

    #[test]
    fn test_crisis_block_only_for_need_help() {
        for outcome in Outcome::ALL {
            for reply in [Ok("reply".to_string()), Err("500")] {
                let flow = submitted(outcome, reply);
                assert_eq!(flow.shows_crisis_resources(), outcome == Outcome::NeedHelp);
            }
        }
        assert_eq!(submitted(Outcome::NeedHelp, Err("x")).recheck_hours(), Some(6));
    }

    #[test]
    fn test_complete_without_submit_is_ignored() {
        let mut flow = ReflectionFlow::Selected(Outcome::NeedHelp);
        flow.complete(Ok::<_, &str>("late".to_string()));
        assert_eq!(flow, ReflectionFlow::Selected(Outcome::NeedHelp));
    }
}
