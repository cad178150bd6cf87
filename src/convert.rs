use anyhow::Result;
use tracing::debug;

use crate::tokenize::split_input;
use crate::{decode_all, elements_to_bytes, encode, Element, EncodeError, Format, RoundTrip};

/// Separator used for [`Format::SpacedHex`] unless the caller picks another.
pub const DEFAULT_SEPARATOR: &str = " ";

/// Tokenize and encode a raw, whitespace-separated domain list.
pub fn encode_input(raw: &str) -> Result<Vec<Element>, EncodeError> {
    let names = split_input(raw);
    if names.is_empty() {
        return Err(EncodeError::EmptyInput);
    }
    encode(&names)
}

/// Render encoder output in every format.
pub fn render_all(elements: &[Element], separator: &str) -> Vec<(Format, String)> {
    Format::ALL
        .iter()
        .map(|&format| (format, format.render(elements, separator)))
        .collect()
}

/// Parse `text` in `format` (or the detected one) and decode the names.
///
/// Failures carry a [`crate::TextError`] or [`crate::DecodeError`] which can
/// be recovered with `downcast_ref`.
pub fn decode_text(text: &str, format: Option<Format>) -> Result<Vec<String>> {
    let text = text.trim();
    let format = format.unwrap_or_else(|| Format::detect(text));
    debug!("decoding input as {format}");
    let bytes = format.parse(text)?;
    Ok(decode_all(&bytes)?)
}

/// Push a domain list through every format and back.
pub fn verify_round_trip(raw: &str) -> Result<Vec<RoundTrip>> {
    let elements = encode_input(raw)?;
    let expected = normalize_names(raw);

    let mut results = Vec::with_capacity(Format::ALL.len());
    for format in Format::ALL {
        let rendered = format.render(&elements, DEFAULT_SEPARATOR);
        let bytes = format.parse(&rendered)?;
        let decoded = decode_all(&bytes)?;
        debug!("{format}: {} bytes, {} names", bytes.len(), decoded.len());
        results.push(RoundTrip {
            format,
            rendered,
            expected: expected.clone(),
            decoded,
        });
    }

    Ok(results)
}

/// The names a decoder should give back for `raw`: lower-cased, root dot
/// dropped.
fn normalize_names(raw: &str) -> Vec<String> {
    split_input(raw)
        .into_iter()
        .map(|name| name.strip_suffix('.').unwrap_or(&name).to_string())
        .collect()
}

/// Raw wire bytes for a domain list.
pub fn encode_bytes(raw: &str) -> Result<Vec<u8>, EncodeError> {
    encode_input(raw).map(|elements| elements_to_bytes(&elements))
}
