//! Incident counter - pairwise containment scan.

use secrecy::{ExposeSecret, SecretString};

/// Counts ordered pairs (i, j), i != j, where the password at index j occurs
/// as a contiguous substring of the password at index i. Each such pair is
/// one incident: the holder of password i gains access to account j.
///
/// This is the plain O(n²) double enumeration over the index space, with an
/// O(len) containment test per pair; password length is capped at 10, so the
/// scan is O(n²) overall. Duplicate passwords at distinct indices contain
/// each other and contribute one incident per direction.
///
/// Lists of length 0 or 1 have no ordered pairs and yield 0.
pub fn count_incidents(passwords: &[SecretString]) -> u64 {
    let mut incidents = 0;

    for (i, typed) in passwords.iter().enumerate() {
        for (j, stored) in passwords.iter().enumerate() {
            if i != j && typed.expose_secret().contains(stored.expose_secret()) {
                incidents += 1;
            }
        }
    }

    incidents
}
