//! Defines [`SyntaxError`], the single error kind raised by this crate.

use thiserror::Error;

/// Error raised when an input string does not conform to the EWKT grammar.
///
/// Parsing is all-or-nothing: the first grammar violation aborts the whole
/// parse and surfaces as one of these. No partial result is produced and no
/// recovery is attempted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "Syntax error: expected {expected}, found {found} at character {} in {input:?}",
    position_or_unknown(.position)
)]
pub struct SyntaxError {
    /// Human-readable description of the token the grammar required.
    pub expected: String,

    /// The token actually found, or `"end of string"`.
    pub found: String,

    /// Byte offset of the found token in the input. `None` when the failure
    /// happened at end of input; reported as `-1` in the formatted message.
    pub position: Option<usize>,

    /// The full original input string.
    pub input: String,
}

fn position_or_unknown(position: &Option<usize>) -> i64 {
    position.map(|p| p as i64).unwrap_or(-1)
}

/// Crate-specific result type.
pub type EwktResult<T> = std::result::Result<T, SyntaxError>;
