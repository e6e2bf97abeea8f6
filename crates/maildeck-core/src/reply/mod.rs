//! Drafted replies and their lifecycle.

mod model;
mod repository;
mod service;

pub use model::{NewReply, Reply, ReplyId, ReplyPatch};
pub use repository::ReplyRepository;
pub use service::{ReplyService, SavedDraft};
