//! Conversation threading model.
//!
//! The store groups emails by their shared thread identifier; this module
//! holds the derived display values consumers build on top of that ordered
//! sequence, plus the ephemeral expand/collapse state of a viewing session.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::email::{Email, EmailId};

/// A conversation assembled from emails sharing one thread identifier.
#[derive(Debug, Clone)]
pub struct Thread {
    /// Thread identifier.
    pub id: String,
    /// Emails in the conversation, oldest first.
    pub emails: Vec<Email>,
    /// Display subject: the first email's subject without "Re: " prefixes.
    pub subject: String,
    /// Number of distinct sender addresses.
    pub participant_count: usize,
    /// Timestamp of the earliest email, if any.
    pub started_at: Option<DateTime<Utc>>,
}

impl Thread {
    /// Builds a thread view from an already ordered email sequence, as
    /// returned by [`crate::EmailRepository::get_thread`].
    #[must_use]
    pub fn from_emails(thread_id: impl Into<String>, emails: Vec<Email>) -> Self {
        let participants: HashSet<&str> =
            emails.iter().map(|email| email.sender_email.as_str()).collect();

        Self {
            id: thread_id.into(),
            subject: emails
                .first()
                .map(|email| strip_reply_prefix(&email.subject).to_string())
                .unwrap_or_default(),
            participant_count: participants.len(),
            started_at: emails.first().map(|email| email.timestamp),
            emails,
        }
    }

    /// The chronologically last email in the conversation.
    #[must_use]
    pub fn latest(&self) -> Option<&Email> {
        self.emails.last()
    }

    /// Returns the number of emails in the thread.
    #[must_use]
    pub fn len(&self) -> usize {
        self.emails.len()
    }

    /// Returns true when the thread has no emails.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }
}

/// Which emails of a thread are shown in full.
///
/// Per-viewing-session state, never persisted. The default view expands only
/// the chronologically last email.
#[derive(Debug, Clone, Default)]
pub struct ExpansionState {
    expanded: HashSet<EmailId>,
}

impl ExpansionState {
    /// Default expansion for a thread: only the latest email expanded.
    #[must_use]
    pub fn for_thread(thread: &Thread) -> Self {
        let mut state = Self::default();
        if let Some(latest) = thread.latest() {
            state.expanded.insert(latest.id);
        }
        state
    }

    /// Whether the given email is shown in full.
    #[must_use]
    pub fn is_expanded(&self, id: EmailId) -> bool {
        self.expanded.contains(&id)
    }

    /// Flip one email between expanded and collapsed.
    pub fn toggle(&mut self, id: EmailId) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }
}

/// Strips any number of leading "Re:" prefixes from a subject line.
///
/// Case-insensitive; surrounding whitespace is dropped along with each
/// prefix, so "Re: Re: Budget" and "RE:Budget" both yield "Budget".
#[must_use]
pub fn strip_reply_prefix(subject: &str) -> &str {
    let mut rest = subject.trim_start();
    while let Some(prefix) = rest.get(..3) {
        if !prefix.eq_ignore_ascii_case("re:") {
            break;
        }
        rest = rest[3..].trim_start();
    }
    rest
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::user::UserId;
    use chrono::Duration;
    use proptest::prelude::*;

    fn email(id: i64, sender_email: &str, subject: &str, age_hours: i64) -> Email {
        Email {
            id: EmailId::new(id),
            user_id: UserId::new(1),
            sender: "Someone".into(),
            sender_email: sender_email.into(),
            recipients: vec!["demo@example.com".into()],
            subject: subject.into(),
            body: String::new(),
            preview: String::new(),
            timestamp: Utc::now() - Duration::hours(age_hours),
            is_read: true,
            labels: Vec::new(),
            thread_id: Some("thread-a".into()),
        }
    }

    #[test]
    fn test_strip_reply_prefix() {
        assert_eq!(strip_reply_prefix("Budget"), "Budget");
        assert_eq!(strip_reply_prefix("Re: Budget"), "Budget");
        assert_eq!(strip_reply_prefix("Re: Re: Re: Budget"), "Budget");
        assert_eq!(strip_reply_prefix("RE:Budget"), "Budget");
        assert_eq!(strip_reply_prefix("re: rE:  Budget"), "Budget");
        assert_eq!(strip_reply_prefix("Regarding Budget"), "Regarding Budget");
    }

    #[test]
    fn test_thread_derives_display_values() {
        let thread = Thread::from_emails(
            "thread-a",
            vec![
                email(1, "jane@example.com", "Update on Project Timeline", 72),
                email(2, "demo@example.com", "Re: Update on Project Timeline", 48),
                email(3, "jane@example.com", "Re: Re: Update on Project Timeline", 24),
            ],
        );

        assert_eq!(thread.subject, "Update on Project Timeline");
        assert_eq!(thread.participant_count, 2);
        assert_eq!(thread.started_at, Some(thread.emails[0].timestamp));
        assert_eq!(thread.latest().unwrap().id, EmailId::new(3));
        assert_eq!(thread.len(), 3);
    }

    #[test]
    fn test_empty_thread_view() {
        let thread = Thread::from_emails("nothing-here", Vec::new());
        assert!(thread.is_empty());
        assert_eq!(thread.subject, "");
        assert_eq!(thread.participant_count, 0);
        assert!(thread.started_at.is_none());
    }

    #[test]
    fn test_default_expansion_shows_only_latest() {
        let thread = Thread::from_emails(
            "thread-a",
            vec![
                email(1, "jane@example.com", "Hello", 48),
                email(2, "demo@example.com", "Re: Hello", 24),
            ],
        );

        let state = ExpansionState::for_thread(&thread);
        assert!(!state.is_expanded(EmailId::new(1)));
        assert!(state.is_expanded(EmailId::new(2)));
    }

    #[test]
    fn test_toggle_expansion() {
        let thread = Thread::from_emails("thread-a", vec![email(1, "a@example.com", "Hi", 1)]);
        let mut state = ExpansionState::for_thread(&thread);

        state.toggle(EmailId::new(1));
        assert!(!state.is_expanded(EmailId::new(1)));
        state.toggle(EmailId::new(1));
        assert!(state.is_expanded(EmailId::new(1)));
    }

    proptest! {
        #[test]
        fn prop_strip_reply_prefix_is_idempotent(subject in ".{0,64}") {
            let once = strip_reply_prefix(&subject);
            prop_assert_eq!(strip_reply_prefix(once), once);
        }

        #[test]
        fn prop_stripped_subject_has_no_reply_prefix(subject in ".{0,64}") {
            let stripped = strip_reply_prefix(&subject);
            if let Some(prefix) = stripped.get(..3) {
                prop_assert!(!prefix.eq_ignore_ascii_case("re:"));
            }
        }
    }
}
