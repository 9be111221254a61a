//! Users owning entries.
//!
//! Registration stores an Argon2id hash of the password; authentication
//! checks an email and password pair against it.

mod error;
mod service;
mod types;

pub use error::UserError;
pub use service::{UserService, UserStore};
pub use types::{CreateUserInput, NewUser, User};
