use base64::Engine;

use crate::{require, EncodedHeader, Error, Message, Result, SerializerT, Signature};

/// JWS Compact Serialization, see RFC 7515 Section 7.1.  Has the form
/// <base64url(protected header)>.<base64url(payload)>.<base64url(signature)>
/// where base64url(x) is the base64url-no-pad encoding of x.  Only single-signature Messages
/// without an unprotected header can be represented.
#[derive(Clone, Copy, Debug, Default)]
pub struct CompactSerializer;

impl CompactSerializer {
    pub fn serialize_to_string(&self, message: &Message) -> Result<String> {
        require!(
            message.signatures().len() == 1,
            Error::InvalidSignatureCount(message.signatures().len())
        );
        let signature = &message.signatures()[0];
        require!(
            signature.public_header.is_empty(),
            Error::Serialization(
                "compact serialization can't carry an unprotected header".into()
            )
        );
        let engine = &base64::engine::general_purpose::URL_SAFE_NO_PAD;
        Ok(format!(
            "{}.{}.{}",
            signature.protected_header.encode_base64()?,
            engine.encode(message.payload()),
            engine.encode(&signature.signature_byte_v)
        ))
    }
    /// Parses the compact form.  Whitespace anywhere, including around the whole string, is
    /// rejected as malformed base64url.
    pub fn deserialize_str(&self, jws_str: &str) -> Result<Message> {
        let part_v: Vec<&str> = jws_str.split('.').collect();
        let [header_base64, payload_base64, signature_base64] = part_v.as_slice() else {
            return Err(Error::InvalidCompactPartsCount(part_v.len()));
        };
        tracing::trace!("parsing compact JWS");

        // The decoded header bytes are kept as the header's source, so that verification uses
        // exactly what was received.
        let protected_header = EncodedHeader::from_base64(header_base64)?;
        let engine = &base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let payload = engine
            .decode(payload_base64.as_bytes())
            .map_err(|e| Error::Malformed(format!("JWS payload is not base64url: {}", e).into()))?;
        let signature_byte_v = engine.decode(signature_base64.as_bytes()).map_err(|e| {
            Error::Malformed(format!("JWS signature is not base64url: {}", e).into())
        })?;

        Ok(Message::new(
            payload,
            vec![Signature::new(
                Default::default(),
                protected_header,
                signature_byte_v,
            )],
        ))
    }
}

impl SerializerT for CompactSerializer {
    fn serialize(&self, message: &Message) -> Result<Vec<u8>> {
        Ok(self.serialize_to_string(message)?.into_bytes())
    }
    fn deserialize(&self, bytes: &[u8]) -> Result<Message> {
        let jws_str = std::str::from_utf8(bytes)
            .map_err(|_| Error::Malformed("compact JWS is not UTF-8".into()))?;
        self.deserialize_str(jws_str)
    }
}
