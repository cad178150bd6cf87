use thiserror::Error;

/// Failures while turning a domain list into Option 119 elements.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Empty input")]
    EmptyInput,

    #[error("Domain cannot end with multiple periods: {0}")]
    TrailingPeriods(String),

    #[error("Empty segment in domain: {0}")]
    EmptySegment(String),

    #[error("Label {label:?} in domain {name} is {len} bytes long (maximum is 63)")]
    LabelTooLong {
        name: String,
        label: String,
        len: usize,
    },
}

/// Failures while reading names back out of Option 119 bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Bad start byte 0x{byte:02X} at offset {offset}")]
    BadLengthByte { offset: usize, byte: u8 },

    #[error("Segment at offset {offset} extends beyond end of input")]
    TruncatedSegment { offset: usize },

    #[error("Missing END marker for name starting at offset {start}")]
    MissingTerminator { start: usize },

    #[error(
        "Invalid forward or circular reference at offset {offset} (target {target}, name starts at {start})"
    )]
    InvalidReference {
        offset: usize,
        target: usize,
        start: usize,
    },
}

/// Failures while parsing one of the textual notations into bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("Need an even number of hex digits (dangling digit at position {position})")]
    OddDigitCount { position: usize },

    #[error("Unexpected hex character {found:?} at position {position}")]
    BadHexDigit { position: usize, found: char },

    #[error("Unterminated string starting at position {position}")]
    UnterminatedString { position: usize },

    #[error("Unexpected input at position {position}")]
    UnrecognizedToken { position: usize },

    #[error("Unsupported escape code in C string at position {position}")]
    UnsupportedEscape { position: usize },

    #[error("Value {value} at position {position} does not fit in a byte")]
    ValueOutOfRange { position: usize, value: String },
}
