use crate::{CompactSerializer, JSONSerializer, Message, Result, SerializerT};

/// Parses a JWS in either serialization: JSON if the first non-whitespace byte is '{',
/// compact otherwise.
pub fn parse(bytes: &[u8]) -> Result<Message> {
    match bytes.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'{') => JSONSerializer::default().deserialize(bytes),
        _ => CompactSerializer.deserialize(bytes),
    }
}

pub fn parse_str(jws_str: &str) -> Result<Message> {
    parse(jws_str.as_bytes())
}
