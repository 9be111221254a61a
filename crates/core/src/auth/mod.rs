//! Password hashing.
//!
//! Passwords are hashed with Argon2id into PHC strings; only the hash is
//! ever stored.

mod password;

pub use password::{PasswordError, hash_password, verify_password};
