//! Protobuf wire encoding via `prost`.
use prost::Message;
use tracing::trace;

use super::CodecError;
use crate::validation::Sealed;

pub fn encode<T: Message>(doc: &Sealed<T>) -> Vec<u8> {
    let bytes = doc.get().encode_to_vec();
    trace!(bytes = bytes.len(), "encoded document");
    bytes
}

/// Encodes with a varint length prefix, for framing several documents in one stream.
pub fn encode_length_delimited<T: Message>(doc: &Sealed<T>) -> Vec<u8> {
    doc.get().encode_length_delimited_to_vec()
}

/// Concatenates the length-delimited encodings of `docs`.
pub fn encode_stream<'a, T, I>(docs: I) -> Vec<u8>
where
    T: Message + 'a,
    I: IntoIterator<Item = &'a Sealed<T>>,
{
    let mut out = Vec::new();
    for doc in docs {
        out.extend(encode_length_delimited(doc));
    }
    out
}

pub fn decode<T: Message + Default>(bytes: &[u8]) -> Result<T, CodecError> {
    let doc = T::decode(bytes)?;
    trace!(bytes = bytes.len(), "decoded document");
    Ok(doc)
}

pub fn decode_length_delimited<T: Message + Default>(bytes: &[u8]) -> Result<T, CodecError> {
    Ok(T::decode_length_delimited(bytes)?)
}

/// Decodes every length-delimited document in `bytes`, in order.
pub fn decode_stream<T: Message + Default>(mut bytes: &[u8]) -> Result<Vec<T>, CodecError> {
    let mut docs = Vec::new();
    while !bytes.is_empty() {
        docs.push(T::decode_length_delimited(&mut bytes)?);
    }
    Ok(docs)
}
