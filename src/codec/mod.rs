//! Textual notations for Option 119 bytes.
//!
//! Every renderer takes the tagged encoder output; every parser produces raw
//! bytes for [`crate::decode_all`].

pub mod cisco;
pub mod cstring;
pub mod hex;
pub mod mikrotik;

use crate::TextError;

/// Two uppercase hex digits for one byte.
pub(crate) fn octet_hex(b: u8) -> String {
    format!("{b:02X}")
}

/// Map one input character to the byte it stands for.
///
/// Characters are taken 1:1 as byte values, so only code points up to 0xFF
/// have a byte form.
pub(crate) fn char_byte(c: char, position: usize) -> Result<u8, TextError> {
    u8::try_from(u32::from(c)).map_err(|_| TextError::ValueOutOfRange {
        position,
        value: c.to_string(),
    })
}

pub(crate) fn hex_pair(hi: char, lo: char) -> Option<u8> {
    Some((hi.to_digit(16)? * 16 + lo.to_digit(16)?) as u8)
}
