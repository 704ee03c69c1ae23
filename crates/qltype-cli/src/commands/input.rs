//! Reading positional values, with `-` meaning stdin.

use std::io::{self, Read};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[from] io::Error),

    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("{0} cannot be empty")]
    Empty(&'static str),
}

/// Resolve a positional argument, reading stdin when it is `-`.
pub fn load_arg(value: &str, what: &'static str) -> Result<String, InputError> {
    let text = if value == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        value.to_string()
    };
    if text.trim().is_empty() {
        return Err(InputError::Empty(what));
    }
    Ok(text)
}

/// Decode hex text, ignoring whitespace and an optional `0x` prefix.
pub fn parse_hex(text: &str) -> Result<Vec<u8>, InputError> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let compact: String = digits.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(hex::decode(compact)?)
}
