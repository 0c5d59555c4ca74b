//! Password containment incident counting library
//!
//! Solves the "Falha de Segurança" task from the XXIV Brazilian Olympiad in
//! Informatics (OBI 2021, phase 3): given the passwords of N users, count
//! the ordered pairs (A, B) where B's password occurs as a contiguous
//! substring of A's password, so the holder of A improperly gains access to
//! B's account.
//!
//! # Features
//!
//! - `async` (default): Enables async verification with cancellation support
//! - `cli`: Builds the interactive terminal front end
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_MAX_ENTRIES`: Maximum number of users accepted per run
//!   (default: `20000`)
//!
//! # Example
//!
//! ```rust
//! use pwd_incidents::{Verdict, verify_incidents};
//! use secrecy::SecretString;
//!
//! let passwords = vec![
//!     SecretString::new("a".to_string().into()),
//!     SecretString::new("ab".to_string().into()),
//!     SecretString::new("abc".to_string().into()),
//! ];
//!
//! #[cfg(feature = "async")]
//! let verdict = verify_incidents(3, &passwords, None);
//!
//! #[cfg(not(feature = "async"))]
//! let verdict = verify_incidents(3, &passwords);
//!
//! assert_eq!(verdict, Verdict::Incidents(3));
//! assert_eq!(verdict.to_string(), "Saída: 3");
//! ```

// Internal modules
mod checks;
mod counter;
mod input;
mod validator;

// Public API
pub use checks::{
    MAX_ENTRIES, MAX_PASSWORD_LEN, ValidationError, is_pattern_conforming, max_entries,
};
pub use counter::count_incidents;
pub use input::{InvalidCountInput, parse_user_count};
pub use validator::{Verdict, verify_incidents};

#[cfg(feature = "async")]
pub use validator::verify_incidents_tx;
