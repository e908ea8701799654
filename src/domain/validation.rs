//! Pure field-format validation.
//!
//! Every check takes one raw string and either passes or returns the
//! field's error code. Checks are referentially transparent and
//! order-independent, so callers may run them in any order and aggregate
//! the failing codes into a single reported error.

use chrono::{NaiveDate, Utc};

use super::errors::FieldError;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

const MIN_PHONE_DIGITS: usize = 5;
const MAX_PHONE_DIGITS: usize = 15;

/// Checks email shape: one `@`, a non-empty local part, a domain with at
/// least one dot and non-empty labels, no whitespace anywhere.
pub fn verify_email(email: &str) -> Result<(), FieldError> {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return Err(FieldError::InvalidEmail);
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = match parts.next() {
        Some(d) => d,
        None => return Err(FieldError::InvalidEmail),
    };
    if local.is_empty() || domain.contains('@') {
        return Err(FieldError::InvalidEmail);
    }
    if !domain.contains('.') || domain.split('.').any(str::is_empty) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

/// Checks password strength: minimum length, at least one ASCII digit and
/// one ASCII letter.
pub fn verify_password(password: &str) -> Result<(), FieldError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(FieldError::InvalidPassword);
    }
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    if has_digit && has_letter {
        Ok(())
    } else {
        Err(FieldError::InvalidPassword)
    }
}

pub fn verify_first_name(name: &str) -> Result<(), FieldError> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(FieldError::InvalidFirstName)
    }
}

/// Middle names are optional; empty passes.
pub fn verify_middle_name(name: &str) -> Result<(), FieldError> {
    if name.is_empty() || is_valid_name(name) {
        Ok(())
    } else {
        Err(FieldError::InvalidMiddleName)
    }
}

pub fn verify_last_name(name: &str) -> Result<(), FieldError> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(FieldError::InvalidLastName)
    }
}

pub fn verify_gender(gender: &str) -> Result<(), FieldError> {
    match gender {
        "Male" | "Female" | "Other" => Ok(()),
        _ => Err(FieldError::InvalidGender),
    }
}

/// Checks phone shape: optional leading `+`, digits only, within range.
pub fn verify_phone(phone: &str) -> Result<(), FieldError> {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    let count = digits.chars().count();
    if (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&count)
        && digits.chars().all(|c| c.is_ascii_digit())
    {
        Ok(())
    } else {
        Err(FieldError::InvalidPhone)
    }
}

/// Checks a `%Y-%m-%d` date of birth; must parse and not lie in the future.
pub fn verify_date_of_birth(dob: &str) -> Result<NaiveDate, FieldError> {
    let date = NaiveDate::parse_from_str(dob, "%Y-%m-%d")
        .map_err(|_| FieldError::InvalidDateOfBirth)?;
    if date > Utc::now().date_naive() {
        return Err(FieldError::InvalidDateOfBirth);
    }
    Ok(date)
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphabetic() || c == '-' || c == '\'')
}
