//! MoodLens web server library.
//!
//! Exposes the core building blocks (config, state, error handling, sessions,
//! routes, views) so integration tests and the binary entrypoint can both
//! access them.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod session;
pub mod state;
pub mod views;
