//! User count parsing - the retryable half of the input contract.

use thiserror::Error;

use crate::checks::max_entries;

/// Rejection of the textual user count.
///
/// Unlike [`ValidationError`](crate::ValidationError), this state is
/// retryable: the interactive shell re-prompts with this message until the
/// count parses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "Digite uma entrada numérica válida, correspondente a um número inteiro menor que {max} e maior que zero."
)]
pub struct InvalidCountInput {
    pub max: usize,
}

/// Parses the textual user count, requiring an integer in
/// `1..=max_entries()`. Surrounding whitespace is trimmed; the password
/// lines themselves are never trimmed.
pub fn parse_user_count(input: &str) -> Result<usize, InvalidCountInput> {
    let max = max_entries();
    match input.trim().parse::<usize>() {
        Ok(count) if (1..=max).contains(&count) => Ok(count),
        _ => Err(InvalidCountInput { max }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_parse_valid_count() {
        remove_env("PWD_MAX_ENTRIES");
        assert_eq!(parse_user_count("3"), Ok(3));
        assert_eq!(parse_user_count("1"), Ok(1));
        assert_eq!(parse_user_count("20000"), Ok(20000));
    }

    #[test]
    #[serial]
    fn test_parse_trims_whitespace() {
        remove_env("PWD_MAX_ENTRIES");
        assert_eq!(parse_user_count(" 10 "), Ok(10));
    }

    #[test]
    #[serial]
    fn test_parse_rejects_non_numeric() {
        remove_env("PWD_MAX_ENTRIES");
        assert_eq!(
            parse_user_count("abc"),
            Err(InvalidCountInput { max: 20000 })
        );
        assert_eq!(parse_user_count(""), Err(InvalidCountInput { max: 20000 }));
        assert_eq!(
            parse_user_count("3.5"),
            Err(InvalidCountInput { max: 20000 })
        );
    }

    #[test]
    #[serial]
    fn test_parse_rejects_out_of_range() {
        remove_env("PWD_MAX_ENTRIES");
        assert_eq!(parse_user_count("0"), Err(InvalidCountInput { max: 20000 }));
        assert_eq!(
            parse_user_count("-2"),
            Err(InvalidCountInput { max: 20000 })
        );
        assert_eq!(
            parse_user_count("20001"),
            Err(InvalidCountInput { max: 20000 })
        );
    }

    #[test]
    #[serial]
    fn test_parse_error_message() {
        remove_env("PWD_MAX_ENTRIES");
        let err = parse_user_count("nope").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Digite uma entrada numérica válida, correspondente a um número inteiro menor que 20000 e maior que zero."
        );
    }
}
