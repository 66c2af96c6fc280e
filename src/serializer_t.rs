use crate::{Message, Result};

/// Converts a [`Message`] to and from one JWS wire form.
pub trait SerializerT {
    fn serialize(&self, message: &Message) -> Result<Vec<u8>>;
    fn deserialize(&self, bytes: &[u8]) -> Result<Message>;
}
