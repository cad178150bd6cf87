use super::octet_hex;
use crate::{Element, TextError};

/// Render hex grouped in 2-byte chunks separated by dots, as Cisco IOS
/// expects for `option 119 hex ...`.
pub fn to_cisco(elements: &[Element]) -> String {
    let mut out = String::with_capacity(elements.len() * 2 + elements.len() / 2);
    for (idx, e) in elements.iter().enumerate() {
        if idx > 0 && idx % 2 == 0 {
            out.push('.');
        }
        out.push_str(&octet_hex(e.byte()));
    }
    out
}

/// Cisco dots are ordinary hex separators.
pub fn from_cisco(text: &str) -> Result<Vec<u8>, TextError> {
    super::hex::from_hex(text)
}
