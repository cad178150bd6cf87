//! Mikrotik RouterOS DHCP option value syntax.
//!
//! Values are a concatenation of `0x` hex runs and single-quoted literals.
//! RouterOS reads a quoted all-digit literal as one decimal byte and a quoted
//! dotted quad as four bytes; `s'...'` forces a plain string.

use super::{char_byte, hex_pair, octet_hex};
use crate::{Element, TextError};

/// Whether a label byte can be spelled inside a quoted literal.
fn is_quotable(b: u8) -> bool {
    b.is_ascii_graphic() && !matches!(b, b'\'' | b'\\' | b'"')
}

/// Render encoder output in RouterOS syntax.
///
/// Structural runs become `0x..` hex, label runs become quoted literals. Label
/// bytes that cannot be quoted (quotes, backslashes, spaces, control and
/// non-ASCII bytes) stay in the hex run.
pub fn to_mikrotik(elements: &[Element]) -> String {
    let mut out = String::new();
    let mut i = 0;

    while i < elements.len() {
        let quoted = |e: &Element| matches!(e, Element::LabelChar(b) if is_quotable(*b));

        if quoted(&elements[i]) {
            let mut literal = String::new();
            while i < elements.len() && quoted(&elements[i]) {
                literal.push(char::from(elements[i].byte()));
                i += 1;
            }
            if literal.bytes().all(|b| b.is_ascii_digit()) {
                out.push('s');
            }
            out.push('\'');
            out.push_str(&literal);
            out.push('\'');
        } else {
            out.push_str("0x");
            while i < elements.len() && !quoted(&elements[i]) {
                out.push_str(&octet_hex(elements[i].byte()));
                i += 1;
            }
        }
    }

    out
}

/// Parse RouterOS syntax into raw bytes.
pub fn from_mikrotik(text: &str) -> Result<Vec<u8>, TextError> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        if c.eq_ignore_ascii_case(&'s') && next == Some('\'') {
            let (contents, end) = read_quoted(&chars, i + 1)?;
            for (offset, ch) in contents.chars().enumerate() {
                out.push(char_byte(ch, i + 2 + offset)?);
            }
            i = end;
        } else if c == '\'' {
            let (contents, end) = read_quoted(&chars, i)?;
            push_literal(&contents, i + 1, &mut out)?;
            i = end;
        } else if c == '0' && next.is_some_and(|n| n.eq_ignore_ascii_case(&'x')) {
            i += 2;
            while i + 1 < chars.len() {
                let Some(byte) = hex_pair(chars[i], chars[i + 1]) else {
                    break;
                };
                out.push(byte);
                i += 2;
            }
        } else {
            return Err(TextError::UnrecognizedToken { position: i });
        }
    }

    Ok(out)
}

/// Read a quoted literal whose opening quote is at `quote`, returning its
/// contents and the position after the closing quote.
fn read_quoted(chars: &[char], quote: usize) -> Result<(String, usize), TextError> {
    let start = quote + 1;
    let len = chars[start..]
        .iter()
        .position(|&c| c == '\'')
        .ok_or(TextError::UnterminatedString { position: quote })?;
    Ok((chars[start..start + len].iter().collect(), start + len + 1))
}

/// Interpret an unprefixed quoted literal the way RouterOS does.
fn push_literal(contents: &str, position: usize, out: &mut Vec<u8>) -> Result<(), TextError> {
    if is_decimal(contents) {
        out.push(decimal_byte(contents, position)?);
    } else if let Some(groups) = dotted_quad(contents) {
        let mut group_pos = position;
        for group in groups {
            out.push(decimal_byte(group, group_pos)?);
            group_pos += group.len() + 1;
        }
    } else {
        for (offset, ch) in contents.chars().enumerate() {
            out.push(char_byte(ch, position + offset)?);
        }
    }
    Ok(())
}

fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn decimal_byte(digits: &str, position: usize) -> Result<u8, TextError> {
    digits.parse::<u8>().map_err(|_| TextError::ValueOutOfRange {
        position,
        value: digits.to_string(),
    })
}

/// Split `a.b.c.d` where every group is one to three decimal digits.
fn dotted_quad(s: &str) -> Option<Vec<&str>> {
    let groups: Vec<&str> = s.split('.').collect();
    let valid = groups.len() == 4 && groups.iter().all(|g| g.len() <= 3 && is_decimal(g));
    valid.then_some(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decode_all, encode, Format};

    #[test]
    fn test_to_mikrotik() {
        let encoded = encode(&["google.com", "yahoo.com"]).unwrap();
        assert_eq!(
            to_mikrotik(&encoded),
            "0x06'google'0x03'com'0x0005'yahoo'0xC007"
        );
    }

    #[test]
    fn test_to_mikrotik_numeric_label() {
        let encoded = encode(&["0.google.com"]).unwrap();
        assert_eq!(
            to_mikrotik(&encoded),
            "0x01s'0'0x06'google'0x03'com'0x00"
        );
    }

    #[test]
    fn test_to_mikrotik_unquotable_bytes_stay_hex() {
        let elements = [
            Element::Structural(3),
            Element::LabelChar(b'a'),
            Element::LabelChar(b'\''),
            Element::LabelChar(b'b'),
            Element::Structural(0),
        ];
        assert_eq!(to_mikrotik(&elements), "0x03'a'0x27'b'0x00");
        assert_eq!(from_mikrotik("0x03'a'0x27'b'0x00").unwrap(), vec![3, b'a', b'\'', b'b', 0]);
    }

    #[test]
    fn test_to_mikrotik_escape_bytes_stay_hex() {
        let encoded = encode(&["a\\b.com", "c\"d.com"]).unwrap();
        let text = to_mikrotik(&encoded);
        assert_eq!(text, "0x03'a'0x5C'b'0x03'com'0x0003'c'0x22'd'0xC004");
        assert_eq!(Format::detect(&text), Format::Mikrotik);
        assert_eq!(
            crate::decode_text(&text, None).unwrap(),
            vec!["a\\b.com", "c\"d.com"]
        );
    }

    #[test]
    fn test_from_mikrotik_string_literal() {
        let bytes = from_mikrotik("0x02s'65'0x06'google'0x03'com'0x00").unwrap();
        assert_eq!(decode_all(&bytes).unwrap(), vec!["65.google.com"]);
        assert_eq!(from_mikrotik("S'12'").unwrap(), vec![b'1', b'2']);
    }

    #[test]
    fn test_from_mikrotik_decimal_literal() {
        assert_eq!(from_mikrotik("'65'").unwrap(), vec![65]);
        let bytes = from_mikrotik("0x01'65'0x06'google'0x03'com'0x00").unwrap();
        assert_eq!(decode_all(&bytes).unwrap(), vec!["A.google.com"]);
    }

    #[test]
    fn test_from_mikrotik_ip_literal() {
        assert_eq!(
            from_mikrotik("'97.104.111.111'").unwrap(),
            vec![97, 104, 111, 111]
        );
        let bytes =
            from_mikrotik("0x06'google'0x03'com'0x000579'97.104.111.111'0xC007").unwrap();
        assert_eq!(decode_all(&bytes).unwrap(), vec!["google.com", "yahoo.com"]);
    }

    #[test]
    fn test_from_mikrotik_non_quad_dots_are_text() {
        assert_eq!(from_mikrotik("'1.2.3'").unwrap(), b"1.2.3".to_vec());
        assert_eq!(from_mikrotik("'1.2.3.4444'").unwrap(), b"1.2.3.4444".to_vec());
    }

    #[test]
    fn test_from_mikrotik_hex_case() {
        assert_eq!(from_mikrotik("0XaBcd").unwrap(), vec![0xAB, 0xCD]);
        assert_eq!(from_mikrotik("0x").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_from_mikrotik_errors() {
        assert_eq!(
            from_mikrotik("0x03'com").unwrap_err(),
            TextError::UnterminatedString { position: 4 }
        );
        assert!(matches!(
            from_mikrotik("s'abc"),
            Err(TextError::UnterminatedString { position: 1 })
        ));
        assert_eq!(
            from_mikrotik("0x0").unwrap_err(),
            TextError::UnrecognizedToken { position: 2 }
        );
        assert_eq!(
            from_mikrotik("hello").unwrap_err(),
            TextError::UnrecognizedToken { position: 0 }
        );
        assert!(matches!(
            from_mikrotik("'256'"),
            Err(TextError::ValueOutOfRange { .. })
        ));
        assert!(matches!(
            from_mikrotik("'1.2.3.300'"),
            Err(TextError::ValueOutOfRange { position: 7, .. })
        ));
    }
}
