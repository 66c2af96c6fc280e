use crate::{Error, HashFunction, Header, KeyType, Result, SignatureAlgorithm, SignatureEncoding};

/// Signs with RSA, using PKCS#1 v1.5 padding for the RS* algorithms and PSS for the PS* ones.
/// The private-key operation is always blinded.
#[derive(Clone)]
pub struct RsaSigner {
    algorithm: SignatureAlgorithm,
    private_key_o: Option<rsa::RsaPrivateKey>,
    pub public_header: Header,
    pub protected_header: Header,
}

impl RsaSigner {
    /// Fails with [`Error::UnsupportedAlgorithm`] if `algorithm` isn't an RSA algorithm.  A missing
    /// private key is only reported when signing.
    pub fn new(
        algorithm: SignatureAlgorithm,
        private_key_o: Option<rsa::RsaPrivateKey>,
    ) -> Result<Self> {
        algorithm.require_key_type(KeyType::RSA)?;
        Ok(Self {
            algorithm,
            private_key_o,
            public_header: Header::default(),
            protected_header: Header::default(),
        })
    }
    pub fn algorithm(&self) -> SignatureAlgorithm {
        self.algorithm
    }
    pub fn private_key_o(&self) -> Option<&rsa::RsaPrivateKey> {
        self.private_key_o.as_ref()
    }
    pub fn sign(&self, signing_input: &[u8]) -> Result<Vec<u8>> {
        let private_key = self
            .private_key_o
            .as_ref()
            .ok_or(Error::MissingPrivateKey)?;
        let hash_function = self.algorithm.hash_function();
        let digest = hash_function.digest(signing_input);
        let signature_result = match self.algorithm.signature_encoding() {
            SignatureEncoding::RSAPKCS1v15 => private_key.sign_with_rng(
                &mut rand::thread_rng(),
                pkcs1v15_padding(hash_function),
                &digest,
            ),
            SignatureEncoding::RSAPSS => private_key.sign_with_rng(
                &mut rand::thread_rng(),
                pss_padding(hash_function),
                &digest,
            ),
            _ => return Err(Error::UnsupportedAlgorithm(self.algorithm.to_string())),
        };
        signature_result
            .map_err(|e| Error::SigningError(format!("RSA signing failed: {}", e).into()))
    }
}

impl std::fmt::Debug for RsaSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaSigner")
            .field("algorithm", &self.algorithm)
            .field("has_private_key", &self.private_key_o.is_some())
            .field("public_header", &self.public_header)
            .field("protected_header", &self.protected_header)
            .finish()
    }
}

pub(crate) fn pkcs1v15_padding(hash_function: HashFunction) -> rsa::Pkcs1v15Sign {
    match hash_function {
        HashFunction::SHA256 => rsa::Pkcs1v15Sign::new::<sha2::Sha256>(),
        HashFunction::SHA384 => rsa::Pkcs1v15Sign::new::<sha2::Sha384>(),
        HashFunction::SHA512 => rsa::Pkcs1v15Sign::new::<sha2::Sha512>(),
    }
}

/// Salt length equals the digest length, per RFC 7518 section 3.5.
pub(crate) fn pss_padding(hash_function: HashFunction) -> rsa::Pss {
    match hash_function {
        HashFunction::SHA256 => rsa::Pss::new::<sha2::Sha256>(),
        HashFunction::SHA384 => rsa::Pss::new::<sha2::Sha384>(),
        HashFunction::SHA512 => rsa::Pss::new::<sha2::Sha512>(),
    }
}
