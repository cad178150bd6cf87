use std::fmt;

use crate::codec::{cisco, cstring, hex, mikrotik};
use crate::{Element, TextError};

/// Textual notations for Option 119 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Format {
    /// Mikrotik RouterOS `0x..'text'` syntax
    Mikrotik,
    /// Cisco IOS dotted hex groups
    Cisco,
    /// Plain hex digits
    Hex,
    /// Hex digits with a separator between bytes
    SpacedHex,
    /// C string literal body with `\xHH` escapes
    #[value(name = "cstring")]
    CString,
}

impl Format {
    /// Every format, in the order they are printed.
    pub const ALL: [Format; 5] = [
        Format::Mikrotik,
        Format::Cisco,
        Format::Hex,
        Format::SpacedHex,
        Format::CString,
    ];

    /// Render encoder output. `separator` only applies to [`Format::SpacedHex`].
    pub fn render(self, elements: &[Element], separator: &str) -> String {
        match self {
            Format::Mikrotik => mikrotik::to_mikrotik(elements),
            Format::Cisco => cisco::to_cisco(elements),
            Format::Hex => hex::to_hex(elements, ""),
            Format::SpacedHex => hex::to_hex(elements, separator),
            Format::CString => cstring::to_cstring(elements),
        }
    }

    /// Parse text in this format into raw bytes.
    pub fn parse(self, text: &str) -> Result<Vec<u8>, TextError> {
        match self {
            Format::Mikrotik => mikrotik::from_mikrotik(text),
            Format::Cisco => cisco::from_cisco(text),
            Format::Hex | Format::SpacedHex => hex::from_hex(text),
            Format::CString => cstring::from_cstring(text),
        }
    }

    /// Best guess at the format of pasted text.
    ///
    /// A backslash means C string, `0x` or a quote means Mikrotik, anything
    /// else is parsed as hex (which also covers Cisco). C strings without
    /// escapes are indistinguishable from hex and are guessed wrong.
    pub fn detect(text: &str) -> Format {
        if text.contains('\\') {
            Format::CString
        } else if text.to_ascii_lowercase().contains("0x") || text.contains('\'') {
            Format::Mikrotik
        } else {
            Format::Hex
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Mikrotik => write!(f, "Mikrotik"),
            Format::Cisco => write!(f, "Cisco"),
            Format::Hex => write!(f, "Hex"),
            Format::SpacedHex => write!(f, "Spaced hex"),
            Format::CString => write!(f, "C string"),
        }
    }
}
