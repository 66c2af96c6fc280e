use serde_json::Value;

use crate::{EncodedHeader, Error, Header, Result, SignatureAlgorithm};

/// Read-only view for looking up header parameters across the protected and public headers of
/// one signature.  The protected header wins on conflict, and the algorithm is only ever taken
/// from the protected header, since the public header isn't integrity-protected.
#[derive(Clone, Copy, Debug)]
pub struct MergedHeader<'a> {
    pub protected_header: &'a EncodedHeader,
    pub public_header: &'a Header,
}

impl<'a> MergedHeader<'a> {
    pub fn new(protected_header: &'a EncodedHeader, public_header: &'a Header) -> Self {
        Self {
            protected_header,
            public_header,
        }
    }
    pub fn get(&self, name: &str) -> Option<Value> {
        self.protected_header
            .header()
            .get(name)
            .or_else(|| self.public_header.get(name))
    }
    /// The signature algorithm, from the protected header only.
    pub fn algorithm(&self) -> Result<SignatureAlgorithm> {
        self.protected_header
            .header()
            .algorithm()?
            .ok_or(Error::MissingHeaderValue("alg"))
    }
    pub fn key_id(&self) -> Option<&'a str> {
        self.protected_header
            .header()
            .key_id()
            .or_else(|| self.public_header.key_id())
    }
    pub fn content_type(&self) -> Option<&'a str> {
        self.protected_header
            .header()
            .content_type()
            .or_else(|| self.public_header.content_type())
    }
    pub fn type_(&self) -> Option<&'a str> {
        self.protected_header
            .header()
            .type_()
            .or_else(|| self.public_header.type_())
    }
    /// "crit" must be integrity-protected, so it's only read from the protected header.
    pub fn critical(&self) -> Option<&'a [String]> {
        self.protected_header.header().critical()
    }
}
