use std::collections::HashMap;

use tracing::debug;

use crate::{Element, EncodeError, EncodeStats};

pub(crate) const MAX_LABEL_LEN: usize = 63;
/// Largest offset a 14-bit compression pointer can address.
pub(crate) const MAX_POINTER_OFFSET: usize = 0x3FFF;
pub(crate) const POINTER_FLAG: u16 = 0xC000;

/// Encode a list of domain names, compressing shared suffixes with
/// back-pointers (RFC 1035 4.1.4).
///
/// A single trailing dot is accepted and dropped. Any error aborts the whole
/// list.
pub fn encode<S: AsRef<str>>(names: &[S]) -> Result<Vec<Element>, EncodeError> {
    let mut refs: HashMap<String, usize> = HashMap::new();
    let mut out = Vec::new();

    for name in names {
        let name = strip_root(name.as_ref())?;
        encode_name(name, &mut refs, &mut out)?;
    }

    Ok(out)
}

fn strip_root(name: &str) -> Result<&str, EncodeError> {
    if name.ends_with("..") {
        return Err(EncodeError::TrailingPeriods(name.to_string()));
    }
    Ok(name.strip_suffix('.').unwrap_or(name))
}

fn encode_name(
    name: &str,
    refs: &mut HashMap<String, usize>,
    out: &mut Vec<Element>,
) -> Result<(), EncodeError> {
    let mut start = 0;

    while start < name.len() {
        let suffix = &name[start..];
        if let Some(&offset) = refs.get(suffix) {
            let [hi, lo] = (POINTER_FLAG | offset as u16).to_be_bytes();
            debug!("{name}: pointer to {suffix} at offset {offset}");
            out.push(Element::Structural(hi));
            out.push(Element::Structural(lo));
            return Ok(());
        }

        if out.len() <= MAX_POINTER_OFFSET {
            refs.insert(suffix.to_string(), out.len());
        }

        let end = suffix.find('.').map_or(name.len(), |dot| start + dot);
        let label = &name[start..end];
        if label.is_empty() {
            return Err(EncodeError::EmptySegment(name.to_string()));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(EncodeError::LabelTooLong {
                name: name.to_string(),
                label: label.to_string(),
                len: label.len(),
            });
        }

        out.push(Element::Structural(label.len() as u8));
        out.extend(label.bytes().map(Element::LabelChar));
        start = end + 1;
    }

    out.push(Element::Structural(0));
    Ok(())
}

/// Summarize how much an encoded list gained from compression.
pub fn encode_stats<S: AsRef<str>>(names: &[S], elements: &[Element]) -> EncodeStats {
    let uncompressed_len = names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            let name = name.strip_suffix('.').unwrap_or(name);
            // One length byte per label plus the terminator.
            if name.is_empty() {
                1
            } else {
                name.len() + 2
            }
        })
        .sum();

    let mut pointers = 0;
    let mut i = 0;
    while i < elements.len() {
        match elements[i] {
            Element::Structural(b) if b & 0xC0 == 0xC0 => {
                pointers += 1;
                i += 2;
            }
            _ => i += 1,
        }
    }

    EncodeStats {
        names: names.len(),
        encoded_len: elements.len(),
        pointers,
        uncompressed_len,
    }
}
