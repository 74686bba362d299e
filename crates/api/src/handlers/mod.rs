pub mod analysis;
pub mod auth;
pub mod home;
