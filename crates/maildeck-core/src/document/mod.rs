//! Documents shared alongside the inbox.

mod model;
mod repository;

pub use model::{Document, DocumentId, DocumentPatch, NewDocument};
pub use repository::DocumentRepository;
