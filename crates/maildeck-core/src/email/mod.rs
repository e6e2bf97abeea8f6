//! Email entities and storage.

mod model;
mod repository;

pub use model::{Email, EmailId, EmailPatch, NewEmail};
pub use repository::EmailRepository;
