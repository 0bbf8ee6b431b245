use crate::config::DEFAULT_EMAIL_PATTERN;
use regex::Regex;
use std::sync::LazyLock;

pub type ValidationError = String;
pub type Validator = Box<dyn Fn(&str) -> Result<(), ValidationError> + Send + Sync>;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_EMAIL_PATTERN).expect("built-in email pattern"));

/// Run a list of validators against `value`, returning the first error.
pub fn run_validators(validators: &[Validator], value: &str) -> Result<(), ValidationError> {
    for validator in validators {
        validator(value)?;
    }
    Ok(())
}

pub fn required(message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str| {
        if value.trim().is_empty() {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

pub fn min_length(min_len: usize, message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str| {
        if value.chars().count() < min_len {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

pub fn pattern(regex: Regex, message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str| {
        if regex.is_match(value) {
            Ok(())
        } else {
            Err(message.clone())
        }
    })
}

pub fn email(message: impl Into<String>) -> Validator {
    pattern(EMAIL.clone(), message)
}
