//! User input shape

use serde::Deserialize;

use super::validation::{required_text, Validate, ValidationError};
use crate::password::{self, PasswordError};

/// Maximum length for first name and surname
pub const MAX_NAME_LEN: usize = 50;

/// Maximum length for email addresses
pub const MAX_EMAIL_LEN: usize = 100;

/// Maximum length for plain-text passwords accepted on input
pub const MAX_PASSWORD_LEN: usize = 50;

/// Fields a caller supplies to create or update a user
#[derive(Debug, Clone, Deserialize)]
pub struct UserInput {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
}

impl UserInput {
    /// Deterministic demo user for index `i`.
    pub fn synthetic(i: u32) -> Self {
        Self {
            name: format!("user{i}"),
            surname: format!("surname{i}"),
            email: format!("email{i}@test.ru"),
            password: format!("password{i}"),
        }
    }
}

impl Validate for UserInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required_text("name", &self.name, MAX_NAME_LEN)?;
        required_text("surname", &self.surname, MAX_NAME_LEN)?;
        required_text("email", &self.email, MAX_EMAIL_LEN)?;
        required_text("password", &self.password, MAX_PASSWORD_LEN)?;
        validate_email(&self.email)
    }
}

/// Minimal shape check: exactly one '@' with something on both sides.
fn validate_email(email: &str) -> Result<(), ValidationError> {
    let mut parts = email.split('@');
    let well_formed = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => !local.is_empty() && !domain.is_empty(),
        _ => false,
    };

    if !well_formed || email.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat {
            field: "email",
            reason: "must look like local@domain",
        });
    }
    Ok(())
}

/// User ready for storage: the password has been replaced by its hash.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    /// Hash the client's password off the async runtime.
    pub async fn from_input(input: UserInput) -> Result<Self, PasswordError> {
        tokio::task::spawn_blocking(move || Self::hashed(input, password::hash)).await?
    }

    /// Demo users `0..count`, hashed at minimum cost in one blocking task.
    pub async fn synthetic(count: u32) -> Result<Vec<Self>, PasswordError> {
        tokio::task::spawn_blocking(move || {
            (0..count)
                .map(|i| Self::hashed(UserInput::synthetic(i), password::hash_demo))
                .collect::<Result<Vec<_>, _>>()
        })
        .await?
    }

    fn hashed(
        input: UserInput,
        hash: fn(&str) -> Result<String, PasswordError>,
    ) -> Result<Self, PasswordError> {
        let password_hash = hash(&input.password)?;
        Ok(Self {
            name: input.name,
            surname: input.surname,
            email: input.email,
            password_hash,
        })
    }
}
