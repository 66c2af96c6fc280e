use crate::{
    check_disjoint_headers, signing_input, EcdsaPrivateKey, EcdsaSigner, EncodedHeader, Error,
    Header, HmacSigner, Message, Result, RsaSigner, Signature, SignatureAlgorithm,
};

/// The closed set of signing algorithm families.  Each variant owns its key and the public and
/// protected header templates attached to the signatures it produces.
#[derive(Clone, Debug, derive_more::From)]
pub enum Signer {
    Rsa(RsaSigner),
    Ecdsa(EcdsaSigner),
    Hmac(HmacSigner),
}

impl Signer {
    pub fn rsa(
        algorithm: SignatureAlgorithm,
        private_key_o: Option<rsa::RsaPrivateKey>,
    ) -> Result<Self> {
        Ok(Self::Rsa(RsaSigner::new(algorithm, private_key_o)?))
    }
    pub fn ecdsa(
        algorithm: SignatureAlgorithm,
        private_key_o: Option<EcdsaPrivateKey>,
    ) -> Result<Self> {
        Ok(Self::Ecdsa(EcdsaSigner::new(algorithm, private_key_o)?))
    }
    pub fn hmac(algorithm: SignatureAlgorithm, key: Vec<u8>) -> Result<Self> {
        Ok(Self::Hmac(HmacSigner::new(algorithm, key)?))
    }
    pub fn algorithm(&self) -> SignatureAlgorithm {
        match self {
            Self::Rsa(signer) => signer.algorithm(),
            Self::Ecdsa(signer) => signer.algorithm(),
            Self::Hmac(signer) => signer.algorithm(),
        }
    }
    pub fn public_header(&self) -> &Header {
        match self {
            Self::Rsa(signer) => &signer.public_header,
            Self::Ecdsa(signer) => &signer.public_header,
            Self::Hmac(signer) => &signer.public_header,
        }
    }
    pub fn protected_header(&self) -> &Header {
        match self {
            Self::Rsa(signer) => &signer.protected_header,
            Self::Ecdsa(signer) => &signer.protected_header,
            Self::Hmac(signer) => &signer.protected_header,
        }
    }
    pub fn set_public_header(&mut self, public_header: Header) {
        match self {
            Self::Rsa(signer) => signer.public_header = public_header,
            Self::Ecdsa(signer) => signer.public_header = public_header,
            Self::Hmac(signer) => signer.public_header = public_header,
        }
    }
    pub fn set_protected_header(&mut self, protected_header: Header) {
        match self {
            Self::Rsa(signer) => signer.protected_header = protected_header,
            Self::Ecdsa(signer) => signer.protected_header = protected_header,
            Self::Hmac(signer) => signer.protected_header = protected_header,
        }
    }
    pub fn with_public_header(mut self, public_header: Header) -> Self {
        self.set_public_header(public_header);
        self
    }
    pub fn with_protected_header(mut self, protected_header: Header) -> Self {
        self.set_protected_header(protected_header);
        self
    }
    /// Produces the raw signature over an already-formed signing input.
    pub fn sign(&self, signing_input: &[u8]) -> Result<Vec<u8>> {
        match self {
            Self::Rsa(signer) => signer.sign(signing_input),
            Self::Ecdsa(signer) => signer.sign(signing_input),
            Self::Hmac(signer) => signer.sign(signing_input),
        }
    }
    /// Produces one signature entry over `payload`.  The protected header template gets this
    /// signer's "alg"; a template naming a different "alg" is an error, as is a public header
    /// template sharing a parameter name with the protected one.
    pub fn signature_for(&self, payload: &[u8]) -> Result<Signature> {
        let algorithm = self.algorithm();
        tracing::trace!(%algorithm, payload_len = payload.len(), "signing JWS payload");

        let mut protected_header = self.protected_header().clone();
        match protected_header.algorithm()? {
            Some(found) if found != algorithm => {
                return Err(Error::AlgorithmMismatch {
                    expected: algorithm,
                    found,
                });
            }
            Some(_) => {}
            None => protected_header.essential.alg_o = Some(algorithm.as_str().to_string()),
        }

        check_disjoint_headers(&protected_header, self.public_header())?;

        let protected_header = EncodedHeader::new(protected_header);
        let signing_input = signing_input(&protected_header, payload)?;
        let signature_byte_v = self.sign(&signing_input)?;
        Ok(Signature::new(
            self.public_header().clone(),
            protected_header,
            signature_byte_v,
        ))
    }
    /// Convenience for a single-signature Message.
    pub fn sign_message(&self, payload: &[u8]) -> Result<Message> {
        Ok(Message::new(
            payload.to_vec(),
            vec![self.signature_for(payload)?],
        ))
    }
}
