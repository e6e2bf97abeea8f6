//! User accounts for the demo.

mod model;
mod repository;

pub use model::{NewUser, User, UserId};
pub use repository::UserRepository;
