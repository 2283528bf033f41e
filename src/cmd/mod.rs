pub mod codec;
pub mod crack;
pub mod ngram;

use keybreak::{KbResult, KeyBreakError};
use std::fs;

/// Resolves the text operand shared by every subcommand: a file via
/// `--input`, or a literal via `--text`, but not both.
pub fn read_input(input: &Option<String>, text: &Option<String>) -> KbResult<String> {
    match (input, text) {
        (Some(path), None) => Ok(fs::read_to_string(path)?),
        (None, Some(literal)) => Ok(literal.clone()),
        (Some(_), Some(_)) => Err(KeyBreakError::InvalidParameter(
            "pass either --input or --text, not both".into(),
        )),
        (None, None) => Err(KeyBreakError::InvalidParameter(
            "no input: pass --input <file> or --text <string>".into(),
        )),
    }
}
