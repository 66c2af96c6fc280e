use std::borrow::Cow;

use base64::Engine;

use crate::{Error, Header, Result};

/// A protected header together with the exact bytes it was parsed from, if any.
///
/// Header JSON doesn't have a canonical form (key order and whitespace are up to whoever signed
/// it), so when a header comes off the wire the received bytes are kept as `source` and used,
/// verbatim, for the signing input and for re-serialization.  Every mutable accessor clears
/// `source`, so a modified header is always re-encoded from its fields.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EncodedHeader {
    header: Header,
    source_o: Option<Vec<u8>>,
}

impl EncodedHeader {
    pub fn new(header: Header) -> Self {
        Self {
            header,
            source_o: None,
        }
    }
    /// Parses header JSON, keeping `source` as the captured encoding.  Empty `source` denotes an
    /// empty header.
    pub fn from_source(source: Vec<u8>) -> Result<Self> {
        if source.is_empty() {
            return Ok(Self::default());
        }
        let header = Header::from_json_bytes(&source)?;
        Ok(Self {
            header,
            source_o: Some(source),
        })
    }
    /// Parses the base64url-encoded form of the header, as found in compact and JSON JWS.
    pub fn from_base64(header_base64: &str) -> Result<Self> {
        let source = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(header_base64.as_bytes())
            .map_err(|e| Error::Malformed(format!("JWS header is not base64url: {}", e).into()))?;
        Self::from_source(source)
    }
    pub fn header(&self) -> &Header {
        &self.header
    }
    /// Mutable access to the header fields.  This discards the captured source.
    pub fn header_mut(&mut self) -> &mut Header {
        self.source_o = None;
        &mut self.header
    }
    /// Sets a header parameter, discarding the captured source.
    pub fn set(&mut self, name: &str, value: serde_json::Value) -> Result<()> {
        self.header_mut().set(name, value)
    }
    pub fn source(&self) -> Option<&[u8]> {
        self.source_o.as_deref()
    }
    pub fn clear_source(&mut self) {
        self.source_o = None;
    }
    pub fn into_header(self) -> Header {
        self.header
    }
    /// The bytes that get base64url-encoded into the signing input: the captured source if
    /// present and non-empty, otherwise the canonical JSON encoding of the header (or nothing,
    /// for an empty header).
    pub fn encode(&self) -> Result<Cow<'_, [u8]>> {
        match self.source_o.as_deref() {
            Some(source) if !source.is_empty() => Ok(Cow::Borrowed(source)),
            _ if self.header.is_empty() => Ok(Cow::Borrowed(&[])),
            _ => Ok(Cow::Owned(self.header.to_json_bytes()?)),
        }
    }
    pub fn encode_base64(&self) -> Result<String> {
        Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(self.encode()?))
    }
}

impl From<Header> for EncodedHeader {
    fn from(header: Header) -> Self {
        Self::new(header)
    }
}
