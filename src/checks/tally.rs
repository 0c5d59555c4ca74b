//! Tally check - declared user count must match the supplied passwords.

use super::{CheckResult, ValidationError};

/// Rejects a run where the number of supplied passwords differs from the
/// declared user count.
pub fn tally_check(count: usize, supplied: usize) -> CheckResult {
    if supplied != count {
        return Err(ValidationError::CountMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_check_matching() {
        assert_eq!(tally_check(3, 3), Ok(()));
    }

    #[test]
    fn test_tally_check_too_few_supplied() {
        assert_eq!(tally_check(3, 2), Err(ValidationError::CountMismatch));
    }

    #[test]
    fn test_tally_check_too_many_supplied() {
        assert_eq!(tally_check(2, 3), Err(ValidationError::CountMismatch));
    }
}
