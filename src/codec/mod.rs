//! Encoding sealed documents and decoding them back.
//!
//! The binary form is the protobuf wire format: tag-numbered, length-prefixed
//! fields, so readers skip tags they do not know and enum numbers they do not
//! know are kept as raw integers. Decoding yields a value in the Building
//! state; seal it again before relying on its invariants.
pub mod binary;
pub mod json;

pub use binary::{
    decode, decode_length_delimited, decode_stream, encode, encode_length_delimited, encode_stream,
};
pub use json::{from_json, to_json, to_json_pretty};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("malformed binary document: {0}")]
    Decode(#[from] prost::DecodeError),
    #[error("malformed JSON document: {0}")]
    Json(#[from] serde_json::Error),
}
