//! Single user check - pair counting needs at least two users.

use super::{CheckResult, ValidationError};

/// Rejects a run declared for exactly one user.
///
/// With a single account there is no other password to compare against, so
/// the run ends with a terminal message instead of a numeric result.
pub fn single_user_check(count: usize) -> CheckResult {
    if count == 1 {
        return Err(ValidationError::SingleUser);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_user_rejected() {
        assert_eq!(single_user_check(1), Err(ValidationError::SingleUser));
    }

    #[test]
    fn test_two_users_accepted() {
        assert_eq!(single_user_check(2), Ok(()));
    }

    #[test]
    fn test_zero_users_accepted() {
        // A declared count of zero is caught downstream by the tally check
        // whenever passwords were actually supplied.
        assert_eq!(single_user_check(0), Ok(()));
    }
}
