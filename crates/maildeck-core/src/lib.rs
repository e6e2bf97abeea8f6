//! # maildeck-core
//!
//! Core logic for the `MailDeck` demo email server.
//!
//! This crate provides:
//! - In-memory entity store (users, emails, documents, highlights, replies)
//! - **Thread Assembly** - conversation grouping and derived display values
//! - **Reply Lifecycle** - lazily created drafts with save/quote/send
//! - Canned demo seed data

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod document;
pub mod email;
mod error;
pub mod highlight;
pub mod reply;
mod seed;
mod store;
pub mod thread;
pub mod user;

pub use document::{Document, DocumentId, DocumentPatch, DocumentRepository, NewDocument};
pub use email::{Email, EmailId, EmailPatch, EmailRepository, NewEmail};
pub use error::{Error, Result};
pub use highlight::{Highlight, HighlightId, HighlightPatch, HighlightRepository, NewHighlight};
pub use reply::{NewReply, Reply, ReplyId, ReplyPatch, ReplyRepository, ReplyService, SavedDraft};
pub use store::Store;
pub use thread::{ExpansionState, Thread, strip_reply_prefix};
pub use user::{NewUser, User, UserId, UserRepository};
