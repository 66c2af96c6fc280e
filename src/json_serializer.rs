use base64::Engine;
use serde_json::Value;

use crate::{
    check_disjoint_headers, require, EncodedHeader, Error, Header, Message, Result, SerializerT,
    Signature,
};

/// JWS JSON Serialization, general syntax, see RFC 7515 Section 7.2.1.  Serialization always
/// produces the general form, even for a single signature; deserialization also accepts the
/// flattened form (Section 7.2.2) and yields a one-entry Message.
#[derive(Clone, Copy, Debug, Default)]
pub struct JSONSerializer {
    pub pretty: bool,
}

#[derive(serde::Deserialize, serde::Serialize)]
struct JSONSignature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    header: Option<serde_json::Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    protected: Option<String>,
    signature: String,
}

/// Covers both general and flattened syntax; at most one of `signatures` and `signature` is
/// present in valid input.
#[derive(serde::Deserialize, serde::Serialize)]
struct JSONMessage {
    payload: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    signatures: Option<Vec<JSONSignature>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    header: Option<serde_json::Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    protected: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    signature: Option<String>,
}

impl JSONSerializer {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl SerializerT for JSONSerializer {
    fn serialize(&self, message: &Message) -> Result<Vec<u8>> {
        require!(
            !message.signatures().is_empty(),
            Error::InvalidSignatureCount(0)
        );
        let engine = &base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let json_signature_v = message
            .signatures()
            .iter()
            .map(|signature| {
                signature.check_disjoint_headers()?;
                let header = if signature.public_header.is_empty() {
                    None
                } else {
                    Some(signature.public_header.to_json_map()?)
                };
                let protected_header_bytes = signature.protected_header.encode()?;
                let protected = if protected_header_bytes.is_empty() {
                    None
                } else {
                    Some(engine.encode(protected_header_bytes))
                };
                Ok(JSONSignature {
                    header,
                    protected,
                    signature: engine.encode(&signature.signature_byte_v),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let json_message = JSONMessage {
            payload: engine.encode(message.payload()),
            signatures: Some(json_signature_v),
            header: None,
            protected: None,
            signature: None,
        };
        let serialize_result = if self.pretty {
            serde_json::to_vec_pretty(&json_message)
        } else {
            serde_json::to_vec(&json_message)
        };
        serialize_result.map_err(|e| Error::Serialization(e.to_string().into()))
    }
    fn deserialize(&self, bytes: &[u8]) -> Result<Message> {
        let json_message: JSONMessage = serde_json::from_slice(bytes).map_err(|e| {
            Error::Malformed(format!("JWS JSON failed to parse: {}", e).into())
        })?;
        let is_flattened = json_message.header.is_some()
            || json_message.protected.is_some()
            || json_message.signature.is_some();
        let json_signature_v = match (json_message.signatures, is_flattened) {
            (Some(_), true) => {
                return Err(Error::Malformed(
                    "JWS JSON mixes general and flattened syntax".into(),
                ));
            }
            (Some(json_signature_v), false) => json_signature_v,
            (None, true) => {
                tracing::trace!("parsing flattened JWS JSON");
                vec![JSONSignature {
                    header: json_message.header,
                    protected: json_message.protected,
                    signature: json_message.signature.ok_or_else(|| {
                        Error::Malformed("flattened JWS JSON is missing \"signature\"".into())
                    })?,
                }]
            }
            (None, false) => {
                return Err(Error::Malformed("JWS JSON has no signatures".into()));
            }
        };
        require!(
            !json_signature_v.is_empty(),
            Error::InvalidSignatureCount(0)
        );

        let engine = &base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let payload = engine
            .decode(json_message.payload.as_bytes())
            .map_err(|e| Error::Malformed(format!("JWS payload is not base64url: {}", e).into()))?;
        let signature_v = json_signature_v
            .into_iter()
            .map(signature_from_json)
            .collect::<Result<Vec<_>>>()?;
        tracing::trace!(
            signature_count = signature_v.len(),
            "parsed JWS JSON serialization"
        );
        Ok(Message::new(payload, signature_v))
    }
}

fn signature_from_json(json_signature: JSONSignature) -> Result<Signature> {
    let protected_header = match json_signature.protected.as_deref() {
        Some(protected) => EncodedHeader::from_base64(protected)?,
        None => EncodedHeader::default(),
    };
    let public_header = match json_signature.header {
        Some(map) => Header::from_json_map(map)?,
        None => Header::default(),
    };
    check_disjoint_headers(protected_header.header(), &public_header)?;
    let signature_byte_v = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(json_signature.signature.as_bytes())
        .map_err(|e| Error::Malformed(format!("JWS signature is not base64url: {}", e).into()))?;
    Ok(Signature::new(
        public_header,
        protected_header,
        signature_byte_v,
    ))
}
