// Single-field validators. Each one checks its conditions in a fixed order and
// reports only the first failure.
//
// Lengths are counted on the raw text. CPF and phone inputs must have their mask
// characters stripped by the caller first ("123.456.789-10" is 14 characters).
use std::sync::LazyLock;

use regex::Regex;

use super::{FieldError, FieldResult};
use crate::brazilian_format::{parse_brl, parse_display_date};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap());

const MIN_PASSWORD_LEN: usize = 6;
const MIN_NAME_LEN: usize = 5;
const CPF_LEN: usize = 11;
const PHONE_LEN: usize = 11;

pub fn required(value: &str) -> FieldResult {
    if value.is_empty() {
        Err(FieldError::Required)
    } else {
        Ok(())
    }
}

pub fn email(value: &str) -> FieldResult {
    if value.is_empty() {
        return Err(FieldError::EmailBlank);
    }
    if !EMAIL_REGEX.is_match(value) {
        return Err(FieldError::EmailMalformed);
    }
    Ok(())
}

pub fn password(value: &str) -> FieldResult {
    if value.is_empty() {
        return Err(FieldError::PasswordBlank);
    }
    if char_len(value) < MIN_PASSWORD_LEN {
        return Err(FieldError::PasswordTooShort);
    }
    Ok(())
}

pub fn name(value: &str) -> FieldResult {
    if value.is_empty() {
        return Err(FieldError::NameBlank);
    }
    if value.chars().any(|c| c.is_ascii_digit()) {
        return Err(FieldError::NameHasDigits);
    }
    if char_len(value) < MIN_NAME_LEN {
        return Err(FieldError::NameTooShort);
    }
    Ok(())
}

/// Format-only check: the CPF check digits are not verified.
pub fn cpf(value: &str) -> FieldResult {
    if value.is_empty() {
        return Err(FieldError::CpfBlank);
    }
    if char_len(value) != CPF_LEN {
        return Err(FieldError::CpfLength);
    }
    Ok(())
}

pub fn confirm_password(password: &str, confirmation: &str) -> FieldResult {
    if confirmation.is_empty() {
        return Err(FieldError::ConfirmPasswordBlank);
    }
    if confirmation != password {
        return Err(FieldError::PasswordMismatch);
    }
    Ok(())
}

pub fn phone(value: &str) -> FieldResult {
    if value.is_empty() {
        return Err(FieldError::PhoneBlank);
    }
    if char_len(value) != PHONE_LEN {
        return Err(FieldError::PhoneLength);
    }
    Ok(())
}

/// A `DD/MM/YYYY` date typed into a masked input.
pub fn display_date(value: &str) -> FieldResult {
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    parse_display_date(value).map(|_| ()).map_err(|_| FieldError::DateInvalid)
}

/// A money amount typed into a masked input, with or without the `R$` marker.
pub fn amount(value: &str) -> FieldResult {
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    parse_brl(value).map(|_| ()).map_err(|_| FieldError::AmountInvalid)
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}
