use super::{hex_pair, octet_hex};
use crate::{Element, TextError};

/// Characters skipped between hex pairs when parsing.
const SEPARATORS: &[char] = &[' ', '.', ';', ':', '\t'];

/// Render every element as two uppercase hex digits, joined by `separator`.
pub fn to_hex(elements: &[Element], separator: &str) -> String {
    elements
        .iter()
        .map(|e| octet_hex(e.byte()))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Parse hex digit pairs, ignoring grouping separators (` .;:` and tab).
///
/// Both plain and Cisco-grouped hex are accepted. A pair may not be split by
/// a separator.
pub fn from_hex(text: &str) -> Result<Vec<u8>, TextError> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = Vec::with_capacity(chars.len() / 2);
    let mut i = 0;

    while i < chars.len() {
        let hi = chars[i];
        if SEPARATORS.contains(&hi) {
            i += 1;
            continue;
        }

        let lo = match chars.get(i + 1) {
            Some(c) if !SEPARATORS.contains(c) => *c,
            _ => return Err(TextError::OddDigitCount { position: i }),
        };

        let byte = hex_pair(hi, lo).ok_or_else(|| {
            let (position, found) = if hi.is_ascii_hexdigit() {
                (i + 1, lo)
            } else {
                (i, hi)
            };
            TextError::BadHexDigit { position, found }
        })?;
        out.push(byte);
        i += 2;
    }

    Ok(out)
}
