//! Registration and login checks against the `users` table.

use moodlens_core::error::CoreError;
use moodlens_db::models::user::{CreateUser, User};
use moodlens_db::repositories::UserRepo;
use moodlens_db::DbPool;
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};

/// Shown for both unknown usernames and wrong passwords.
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid username or password";
/// Shown when `password` and `confirm_password` differ.
pub const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match";
/// Shown when the requested username already exists.
pub const MSG_USERNAME_TAKEN: &str = "This username is already taken";

/// Form body for `POST /register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterForm {
    #[validate(length(min = 1, max = 80, message = "Username must be 1 to 80 characters"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
    pub confirm_password: String,
}

/// Create a new account.
///
/// Fails with [`CoreError::Validation`] for malformed input or mismatched
/// passwords, and with [`CoreError::Conflict`] when the username exists. No
/// row is written on failure.
pub async fn register(pool: &DbPool, form: &RegisterForm) -> AppResult<User> {
    form.validate()
        .map_err(|e| CoreError::Validation(first_validation_message(&e)))?;

    if form.password != form.confirm_password {
        return Err(CoreError::Validation(MSG_PASSWORD_MISMATCH.into()).into());
    }

    if UserRepo::find_by_username(pool, &form.username).await?.is_some() {
        return Err(CoreError::Conflict(MSG_USERNAME_TAKEN.into()).into());
    }

    let password_hash = hash_password(&form.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let input = CreateUser {
        username: form.username.clone(),
        password_hash,
    };

    // A concurrent registration can still win between the lookup and the insert.
    match UserRepo::create(pool, &input).await {
        Ok(user) => {
            tracing::info!(user_id = user.id, username = %user.username, "User registered");
            Ok(user)
        }
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            Err(CoreError::Conflict(MSG_USERNAME_TAKEN.into()).into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Check a username/password pair.
///
/// Unknown usernames and wrong passwords both yield the same
/// [`CoreError::Unauthorized`] so callers cannot tell them apart.
pub async fn authenticate(pool: &DbPool, username: &str, password: &str) -> AppResult<User> {
    let Some(user) = UserRepo::find_by_username(pool, username).await? else {
        tracing::debug!(%username, "Login for unknown username");
        return Err(invalid_credentials());
    };

    let valid = verify_password(password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !valid {
        tracing::debug!(user_id = user.id, "Login with wrong password");
        return Err(invalid_credentials());
    }

    Ok(user)
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(MSG_INVALID_CREDENTIALS.into()))
}

/// Pick one human-readable message out of a set of field errors.
fn first_validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| errs.iter().map(move |e| (field.clone(), e)))
        .next()
        .map(|(field, e)| match &e.message {
            Some(msg) => msg.to_string(),
            None => format!("Invalid value for {field}"),
        })
        .unwrap_or_else(|| "Invalid input".to_string())
}
