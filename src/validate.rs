//! Field validation for the auth and profile forms.
//!
//! Every check returns `Result<(), &'static str>` so screens can hang
//! the message directly on the offending field. The rules mirror what
//! the ledger server enforces; validating here just saves a round trip.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email regex is valid")
});

/// 6-20 ASCII letters or digits, starting with a letter.
pub fn username(value: &str) -> Result<(), &'static str> {
    if value.len() < 6 || value.len() > 20 {
        return Err("Username must be 6-20 characters");
    }
    if !value.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return Err("Username must start with a letter");
    }
    if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err("Username may only contain letters and digits");
    }
    Ok(())
}

/// 8-20 characters with at least one letter and one digit.
pub fn password(value: &str) -> Result<(), &'static str> {
    if value.len() < 8 || value.len() > 20 {
        return Err("Password must be 8-20 characters");
    }
    if !value.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err("Password needs at least one letter");
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password needs at least one digit");
    }
    Ok(())
}

pub fn confirm_password(password: &str, confirm: &str) -> Result<(), &'static str> {
    if password != confirm {
        return Err("Passwords do not match");
    }
    Ok(())
}

pub fn email(value: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(value) {
        return Err("Enter a valid email address");
    }
    Ok(())
}

/// Captcha and activation codes: 4-6 letters or digits.
pub fn code(value: &str) -> Result<(), &'static str> {
    if value.len() < 4 || value.len() > 6 || !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err("Enter the 4-6 character code");
    }
    Ok(())
}

/// The user-agreement checkbox on registration.
pub fn terms(accepted: bool) -> Result<(), &'static str> {
    if !accepted {
        return Err("Accept the user agreement first (Ctrl+T to toggle)");
    }
    Ok(())
}

pub fn nickname(value: &str) -> Result<(), &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("Nickname cannot be empty");
    }
    if trimmed.chars().count() > 30 {
        return Err("Nickname must be 30 characters or fewer");
    }
    Ok(())
}

/// Category and account names: non-empty, at most 20 characters.
pub fn label(value: &str) -> Result<(), &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("Name cannot be empty");
    }
    if trimmed.chars().count() > 20 {
        return Err("Name must be 20 characters or fewer");
    }
    Ok(())
}
