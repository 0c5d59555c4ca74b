//! Input checks for incident verification
//!
//! Each check validates one structural constraint on the submitted input.

mod capacity;
mod pattern;
mod single_user;
mod tally;

pub use capacity::{MAX_ENTRIES, capacity_check, max_entries};
pub use pattern::{MAX_PASSWORD_LEN, is_pattern_conforming, pattern_check};
pub use single_user::single_user_check;
pub use tally::tally_check;

use thiserror::Error;

/// Result type for check functions.
/// - `Ok(())` - Check passed
/// - `Err(error)` - Check failed with a terminal diagnostic
pub type CheckResult = Result<(), ValidationError>;

/// Terminal validation failures.
///
/// The rendered message is the entire program output for that run; none of
/// these are retried. Messages keep the original Portuguese wording of the
/// OBI task, since they are the observable contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "Não é possível fazer a verificação de possibilidades de incidente de segurança com apenas um usuário."
    )]
    SingleUser,
    #[error("Erro: O número de senhas é maior que o máximo permitido ({0}).")]
    TooManyEntries(usize),
    #[error("Erro: O número de senhas não corresponde à quantidade de usuários no sistema.")]
    CountMismatch,
    #[error("{}", invalid_format_message(.lines))]
    InvalidFormat { lines: Vec<usize> },
}

const PATTERN_RULE: &str = "(padrão correto: inicia com letra minúscula sem acento e possui apenas \
                            letras minúsculas sem acento e dígitos de 0 a 9, com extensão mínima \
                            de 1 caracter e máxima de 10 caracteres)";

/// Singular when exactly one line offends, plural otherwise. Line numbers are
/// 1-based, ascending, joined by "," with no spaces.
fn invalid_format_message(lines: &[usize]) -> String {
    let listed = lines
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(",");

    if lines.len() == 1 {
        format!("Erro: a entrada contém uma senha inválida na linha {listed} {PATTERN_RULE}.")
    } else {
        format!("Erro: a entrada contém senhas inválidas nas linhas {listed} {PATTERN_RULE}.")
    }
}
