pub mod cli;
pub mod codec;
mod convert;
mod decode;
mod encode;
mod errors;
mod format;
mod tokenize;
mod types;

pub use convert::{
    decode_text, encode_bytes, encode_input, render_all, verify_round_trip, DEFAULT_SEPARATOR,
};
pub use decode::{decode_all, decode_segment, read_name};
pub use encode::{encode, encode_stats};
pub use errors::{DecodeError, EncodeError, TextError};
pub use format::Format;
pub use tokenize::split_input;
pub use types::{elements_to_bytes, Element, EncodeStats, RoundTrip, Segment};
