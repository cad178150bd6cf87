use super::{char_byte, hex_pair, octet_hex};
use crate::{Element, TextError};

/// Render as the body of a C string literal: structural bytes as `\xHH`,
/// label text as plain characters.
pub fn to_cstring(elements: &[Element]) -> String {
    let mut out = String::new();
    for e in elements {
        match *e {
            Element::LabelChar(b) if b.is_ascii_graphic() && b != b'\\' && b != b'"' => {
                out.push(char::from(b));
            }
            Element::Structural(b) | Element::LabelChar(b) => {
                out.push_str("\\x");
                out.push_str(&octet_hex(b));
            }
        }
    }
    out
}

/// Parse a C string literal body. Only `\xHH` and `\ooo` (1 to 3 octal
/// digits) escapes are understood.
pub fn from_cstring(text: &str) -> Result<Vec<u8>, TextError> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c != '\\' {
            out.push(char_byte(c, i)?);
            i += 1;
            continue;
        }

        if chars.get(i + 1) == Some(&'x') {
            let byte = match (chars.get(i + 2), chars.get(i + 3)) {
                (Some(&hi), Some(&lo)) => hex_pair(hi, lo),
                _ => None,
            };
            out.push(byte.ok_or(TextError::UnsupportedEscape { position: i })?);
            i += 4;
            continue;
        }

        let digits: String = chars[i + 1..]
            .iter()
            .take(3)
            .take_while(|c| c.is_digit(8))
            .collect();
        if digits.is_empty() {
            return Err(TextError::UnsupportedEscape { position: i });
        }
        let value = u32::from_str_radix(&digits, 8).unwrap_or(u32::MAX);
        let byte = u8::try_from(value).map_err(|_| TextError::ValueOutOfRange {
            position: i,
            value: format!("\\{digits}"),
        })?;
        out.push(byte);
        i += 1 + digits.len();
    }

    Ok(out)
}
