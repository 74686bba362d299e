//! Account primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`credentials`] -- registration and login checks against the user store.

pub mod credentials;
pub mod password;
