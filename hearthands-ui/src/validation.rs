// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client-side checks for the sign-in, registration and reset forms.

use once_cell::sync::Lazy;
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_RE: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(
        r"^[_A-Za-z0-9\-+]+(\.[_A-Za-z0-9\-]+)*@[A-Za-z0-9\-]+(\.[A-Za-z0-9]+)*(\.[A-Za-z]{2,})$",
    )
    .unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid phone number.")]
    InvalidPhone,
    #[error("Password must be at least 8 characters long.")]
    PasswordTooShort,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Please enter your name.")]
    MissingName,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

/// Optional leading `+`, then 7 to 15 digits. Spaces and dashes are ignored.
pub fn is_valid_phone(phone: &str) -> bool {
    let compact: String = phone
        .trim()
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .collect();
    let digits = compact.strip_prefix('+').unwrap_or(&compact);
    (7..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

fn check_password(password: &str) -> Result<(), FormError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(FormError::PasswordTooShort);
    }
    Ok(())
}

pub fn validate_login(email: &str, phone: &str, password: &str) -> Result<(), FormError> {
    if !is_valid_email(email) {
        return Err(FormError::InvalidEmail);
    }
    if !is_valid_phone(phone) {
        return Err(FormError::InvalidPhone);
    }
    check_password(password)
}

pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), FormError> {
    if name.trim().is_empty() {
        return Err(FormError::MissingName);
    }
    if !is_valid_email(email) {
        return Err(FormError::InvalidEmail);
    }
    check_password(password)?;
    if password != confirm {
        return Err(FormError::PasswordMismatch);
    }
    Ok(())
}

pub fn validate_reset(email: &str) -> Result<(), FormError> {
    if !is_valid_email(email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}
