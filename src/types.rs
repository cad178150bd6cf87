/// One byte of encoder output, tagged with what it represents.
///
/// The textual renderers need the tag: Mikrotik and C-string output quote
/// label text but spell structural bytes in hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// Length prefix, compression pointer byte or terminating zero.
    Structural(u8),
    /// One byte of label text.
    LabelChar(u8),
}

impl Element {
    pub fn byte(self) -> u8 {
        match self {
            Element::Structural(b) | Element::LabelChar(b) => b,
        }
    }

    pub fn is_structural(self) -> bool {
        matches!(self, Element::Structural(_))
    }
}

/// Drop the tags, leaving the wire bytes.
pub fn elements_to_bytes(elements: &[Element]) -> Vec<u8> {
    elements.iter().map(|e| e.byte()).collect()
}

/// One wire unit as seen by the decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    End { next: usize },
    Text { label: String, next: usize },
    Pointer { target: usize, next: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeStats {
    pub names: usize,
    pub encoded_len: usize,
    pub pointers: usize,
    /// Length of the same list with every name spelled out in full.
    pub uncompressed_len: usize,
}

impl EncodeStats {
    pub fn bytes_saved(&self) -> usize {
        self.uncompressed_len.saturating_sub(self.encoded_len)
    }
}

/// Outcome of pushing a domain list through one textual format and back.
#[derive(Debug, Clone)]
pub struct RoundTrip {
    pub format: crate::Format,
    pub rendered: String,
    pub expected: Vec<String>,
    pub decoded: Vec<String>,
}

impl RoundTrip {
    pub fn is_ok(&self) -> bool {
        self.expected == self.decoded
    }
}
