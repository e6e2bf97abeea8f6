//! Reply lifecycle: lazy draft creation, save, quote, send.

use tracing::debug;

use super::model::{NewReply, Reply, ReplyPatch};
use super::repository::ReplyRepository;
use crate::email::{Email, EmailId, EmailRepository};
use crate::{Error, Result};

/// Tone tag stamped on generated drafts.
const GENERATED_TONE: &str = "Formal";
/// Length tag stamped on generated drafts.
const GENERATED_LENGTH: &str = "Concise";

/// Outcome of a draft save.
#[derive(Debug, Clone)]
pub struct SavedDraft {
    /// The stored reply after the save.
    pub reply: Reply,
    /// True when the save created the reply rather than updating it.
    pub created: bool,
}

/// Manages the reply attached to each email.
///
/// A reply moves through three states: none, draft, sent. It is created
/// lazily on first request, mutated by saves and quote appends, and sending
/// clears the draft flag without performing any transport.
#[derive(Debug, Clone)]
pub struct ReplyService {
    emails: EmailRepository,
    replies: ReplyRepository,
}

impl ReplyService {
    /// Create a service over the given repositories.
    #[must_use]
    pub const fn new(emails: EmailRepository, replies: ReplyRepository) -> Self {
        Self { emails, replies }
    }

    /// Return the email's reply, generating a draft if none exists yet.
    ///
    /// The generated draft is deterministic: subject and content come from a
    /// fixed template over the email's subject and the sender's first name.
    /// Repeat calls return the same reply; the unique `email_id` constraint
    /// keeps duplicate calls from ever attaching a second reply.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when the email itself does not exist, or
    /// an error if the database operation fails.
    pub async fn ensure_reply(&self, email_id: EmailId) -> Result<Reply> {
        if let Some(reply) = self.replies.get_for_email(email_id).await? {
            return Ok(reply);
        }

        let email = self
            .emails
            .get(email_id)
            .await?
            .ok_or_else(|| Error::not_found("Email", email_id.0))?;

        debug!(%email_id, "generating draft reply");
        self.replies.create(&generated_draft(&email)).await
    }

    /// Save draft content and subject, creating the reply if absent.
    ///
    /// `is_draft` is merged only when given, so saving edits to an already
    /// sent reply does not flip it back to a draft.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when `content` or `subject` is empty,
    /// [`Error::NotFound`] when no reply exists and the email does not
    /// either, or an error if the database operation fails.
    pub async fn save_draft(
        &self,
        email_id: EmailId,
        content: &str,
        subject: &str,
        is_draft: Option<bool>,
    ) -> Result<SavedDraft> {
        if content.is_empty() || subject.is_empty() {
            return Err(Error::Validation(
                "Content and subject are required".to_string(),
            ));
        }

        if let Some(existing) = self.replies.get_for_email(email_id).await? {
            let patch = ReplyPatch {
                content: Some(content.to_string()),
                subject: Some(subject.to_string()),
                is_draft,
            };
            let reply = self
                .replies
                .update(existing.id, &patch)
                .await?
                .ok_or_else(|| Error::not_found("Reply", existing.id.0))?;
            return Ok(SavedDraft {
                reply,
                created: false,
            });
        }

        // No reply yet: same existence check as draft generation.
        self.emails
            .get(email_id)
            .await?
            .ok_or_else(|| Error::not_found("Email", email_id.0))?;

        let reply = self
            .replies
            .create(&NewReply {
                email_id,
                content: content.to_string(),
                subject: subject.to_string(),
                tone: None,
                length: None,
                is_draft: is_draft.unwrap_or(true),
            })
            .await?;

        Ok(SavedDraft {
            reply,
            created: true,
        })
    }

    /// Append quoted text to the reply's content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when no reply exists for the email yet
    /// (callers are expected to have gone through [`Self::ensure_reply`]
    /// first), or an error if the database operation fails.
    pub async fn append_quote(&self, email_id: EmailId, quoted: &str) -> Result<Reply> {
        let reply = self
            .replies
            .get_for_email(email_id)
            .await?
            .ok_or_else(|| Error::not_found("Reply", email_id.0))?;

        let content = format!("{}\n\n> {}", reply.content, quoted);
        let saved = self.save_draft(email_id, &content, &reply.subject, None).await?;
        Ok(saved.reply)
    }

    /// Transition the email's reply from draft to sent.
    ///
    /// State change only; no mail is delivered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when no reply exists for the email, or an
    /// error if the database operation fails.
    pub async fn send(&self, email_id: EmailId) -> Result<Reply> {
        let reply = self
            .replies
            .get_for_email(email_id)
            .await?
            .ok_or_else(|| Error::not_found("Reply", email_id.0))?;

        let patch = ReplyPatch {
            is_draft: Some(false),
            ..ReplyPatch::default()
        };
        self.replies
            .update(reply.id, &patch)
            .await?
            .ok_or_else(|| Error::not_found("Reply", reply.id.0))
    }
}

/// Build the templated draft for an email.
fn generated_draft(email: &Email) -> NewReply {
    NewReply {
        email_id: email.id,
        subject: format!("Re: {}", email.subject),
        content: format!(
            "Hello {},\n\nThank you for your email. This is an AI-generated reply \
             to your message about \"{}\".\n\nBest regards,\nDemo User",
            email.sender_first_name(),
            email.subject
        ),
        tone: Some(GENERATED_TONE.to_string()),
        length: Some(GENERATED_LENGTH.to_string()),
        is_draft: true,
    }
}
