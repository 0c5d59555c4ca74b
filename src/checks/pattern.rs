//! Pattern check - every password must match `^[a-z][a-z0-9]{0,9}$`.

use secrecy::{ExposeSecret, SecretString};

use super::{CheckResult, ValidationError};

/// Maximum password length in characters.
pub const MAX_PASSWORD_LEN: usize = 10;

/// Checks a single password against the pattern `^[a-z][a-z0-9]{0,9}$`:
/// first character a lowercase unaccented ASCII letter, then up to nine
/// lowercase ASCII letters or decimal digits.
pub fn is_pattern_conforming(password: &str) -> bool {
    let mut chars = password.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_lowercase()
        && password.len() <= MAX_PASSWORD_LEN
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

/// Checks every password in the list, collecting the 1-based line numbers of
/// all non-conforming entries before failing. Input lines are taken verbatim;
/// surrounding whitespace counts against the pattern.
pub fn pattern_check(passwords: &[SecretString]) -> CheckResult {
    let lines: Vec<usize> = passwords
        .iter()
        .enumerate()
        .filter(|(_, pwd)| !is_pattern_conforming(pwd.expose_secret()))
        .map(|(index, _)| index + 1)
        .collect();

    if lines.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::InvalidFormat { lines })
    }
}
