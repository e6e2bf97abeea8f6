//! Highlight excerpts extracted from documents.

mod model;
mod repository;

pub use model::{Highlight, HighlightId, HighlightPatch, NewHighlight};
pub use repository::HighlightRepository;
