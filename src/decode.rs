use rug::Integer;
use thiserror::Error;

#[derive(Copy, Clone, Debug, Error, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum DecodeError {
    #[error("Invalid digit '{0}'")]
    InvalidDigit(char),
    #[error("Digit '{digit}' not valid for base {base}")]
    DigitOutOfRange { digit: char, base: u32 },
}

/// Parse a string of digits in the given base
///
/// Surrounding whitespace is ignored. Letters stand for the digits 10
/// to 35, regardless of case. The base itself is not validated, but
/// each digit has to be smaller than it.
pub fn parse_in_base(s: &str, base: u32) -> Result<Integer, DecodeError> {
    let mut res = Integer::new();
    for ch in s.trim().chars() {
        let digit = ch.to_digit(36).ok_or(DecodeError::InvalidDigit(ch))?;
        if digit >= base {
            return Err(DecodeError::DigitOutOfRange { digit: ch, base });
        }
        res *= base;
        res += digit;
    }
    Ok(res)
}
