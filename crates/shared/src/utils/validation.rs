use regex::Regex;
use std::{borrow::Cow, collections::BTreeMap, sync::LazyLock};
use validator::{ValidationError, ValidationErrors};

/// One user-facing message per failing field, keyed by field name.
pub type FieldErrors = BTreeMap<String, String>;

pub const REQUIRED_CODE: &str = "required";

/// `localpart@providercode`, provider code being at least three letters.
pub static UPI_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z]{3,}$").expect("UPI pattern is a valid regex")
});

pub fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

pub fn required(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(REQUIRED_CODE));
    }
    Ok(())
}

pub const NAME_MAX_CHARS: usize = 50;
pub const PASSWORD_MAX_CHARS: usize = 10;

fn at_most(value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::new("length"));
    }
    Ok(())
}

pub fn name_max(value: &str) -> Result<(), ValidationError> {
    at_most(value, NAME_MAX_CHARS)
}

pub fn password_max(value: &str) -> Result<(), ValidationError> {
    at_most(value, PASSWORD_MAX_CHARS)
}

pub fn upi(value: &str) -> Result<(), ValidationError> {
    // empty input is reported by `required`
    if value.is_empty() || UPI_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new("upi"))
    }
}

/// Collapses validator output to a single message per field.
///
/// A `required` failure wins over any shape failure on the same field,
/// otherwise the first reported failure is kept.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();

    for (field, list) in errors.field_errors() {
        let chosen = list
            .iter()
            .find(|e| e.code == REQUIRED_CODE)
            .or_else(|| list.first());

        if let Some(error) = chosen {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| error.code.to_string());
            out.insert(field.to_string(), message);
        }
    }

    out
}
