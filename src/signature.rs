use base64::Engine;

use crate::{require, EncodedHeader, Error, Header, MergedHeader, Result};

/// One signature entry of a JWS: unprotected header, protected header and signature bytes.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Signature {
    /// The JWS Unprotected Header.  Not covered by the signature.
    pub public_header: Header,
    /// The JWS Protected Header.  Covered by the signature.
    pub protected_header: EncodedHeader,
    pub signature_byte_v: Vec<u8>,
}

impl Signature {
    pub fn new(
        public_header: Header,
        protected_header: EncodedHeader,
        signature_byte_v: Vec<u8>,
    ) -> Self {
        Self {
            public_header,
            protected_header,
            signature_byte_v,
        }
    }
    pub fn merged_header(&self) -> MergedHeader<'_> {
        MergedHeader::new(&self.protected_header, &self.public_header)
    }
    /// Fails with [`Error::InvalidHeaderValue`] if a parameter name appears in both headers.
    pub fn check_disjoint_headers(&self) -> Result<()> {
        check_disjoint_headers(self.protected_header.header(), &self.public_header)
    }
    /// The bytes the signature is computed over for the given payload.
    pub fn signing_input(&self, payload: &[u8]) -> Result<Vec<u8>> {
        signing_input(&self.protected_header, payload)
    }
}

/// The JWS Signing Input: `base64url(protected header) || '.' || base64url(payload)`.
/// See RFC 7515 Section 5.1.  The protected header contributes its captured source bytes if it
/// has any.
pub fn signing_input(protected_header: &EncodedHeader, payload: &[u8]) -> Result<Vec<u8>> {
    let mut signing_input = protected_header.encode_base64()?.into_bytes();
    signing_input.push(b'.');
    signing_input.extend_from_slice(
        base64::engine::general_purpose::URL_SAFE_NO_PAD
            .encode(payload)
            .as_bytes(),
    );
    Ok(signing_input)
}

/// The protected and unprotected header parameter names of one signature must be disjoint.
/// See RFC 7515 Section 7.2.1.
pub(crate) fn check_disjoint_headers(
    protected_header: &Header,
    public_header: &Header,
) -> Result<()> {
    for (name, _) in public_header.to_json_map()? {
        require!(
            protected_header.get(&name).is_none(),
            Error::invalid_header_value(
                name,
                "appears in both the protected and unprotected header"
            )
        );
    }
    Ok(())
}
