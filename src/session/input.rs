//! Parsing of typed answers: the charset size and single-character entry.

/// Why a single-character entry could not be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CharInputError {
    /// `U+` form whose digits are not hexadecimal (or missing).
    #[error("'{0}' is not a hexadecimal number")]
    InvalidHex(String),
    /// `U+` form whose value is not a Unicode scalar value.
    #[error("U+{0:X} is not a valid Unicode scalar value")]
    InvalidCodepoint(u32),
    /// More than one character, not in `U+` form.
    #[error("input is neither a single character nor a U+ code point")]
    Unclassified,
    #[error("input is empty")]
    Empty,
}

impl CharInputError {
    /// Whether the input was recognised as a `U+` code point but failed to parse.
    pub fn is_codepoint_error(&self) -> bool {
        matches!(
            self,
            CharInputError::InvalidHex(_) | CharInputError::InvalidCodepoint(_)
        )
    }
}

/// Interpret a single-character entry.
///
/// Exactly one character is taken literally, so `U` alone is the letter.
/// `U+41` and `u+41` name a code point by its hex value.
pub fn parse_char_input(input: &str) -> Result<char, CharInputError> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Err(CharInputError::Empty),
        (Some(c), None) => Ok(c),
        (Some('U' | 'u'), Some('+')) => parse_hex_codepoint(chars.as_str()),
        _ => Err(CharInputError::Unclassified),
    }
}

fn parse_hex_codepoint(digits: &str) -> Result<char, CharInputError> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CharInputError::InvalidHex(digits.to_string()));
    }
    let value = u32::from_str_radix(digits, 16)
        .map_err(|_| CharInputError::InvalidHex(digits.to_string()))?;
    char::from_u32(value).ok_or(CharInputError::InvalidCodepoint(value))
}

/// Parse the requested number of slots.
pub fn parse_count(input: &str) -> Result<usize, std::num::ParseIntError> {
    input.trim().parse()
}
