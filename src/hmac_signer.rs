use hmac::Mac;

use crate::{require, Error, HashFunction, Header, KeyType, Result, SignatureAlgorithm};

/// Symmetric signer computing an HMAC over the signing input.
#[derive(Clone)]
pub struct HmacSigner {
    algorithm: SignatureAlgorithm,
    key: Vec<u8>,
    pub public_header: Header,
    pub protected_header: Header,
}

impl HmacSigner {
    pub fn new(algorithm: SignatureAlgorithm, key: Vec<u8>) -> Result<Self> {
        algorithm.require_key_type(KeyType::Oct)?;
        Ok(Self {
            algorithm,
            key,
            public_header: Header::default(),
            protected_header: Header::default(),
        })
    }
    pub fn algorithm(&self) -> SignatureAlgorithm {
        self.algorithm
    }
    pub fn has_key(&self) -> bool {
        !self.key.is_empty()
    }
    pub fn sign(&self, signing_input: &[u8]) -> Result<Vec<u8>> {
        require!(self.has_key(), Error::MissingPrivateKey);
        match self.algorithm.hash_function() {
            HashFunction::SHA256 => {
                hmac_digest::<hmac::Hmac<sha2::Sha256>>(&self.key, signing_input)
            }
            HashFunction::SHA384 => {
                hmac_digest::<hmac::Hmac<sha2::Sha384>>(&self.key, signing_input)
            }
            HashFunction::SHA512 => {
                hmac_digest::<hmac::Hmac<sha2::Sha512>>(&self.key, signing_input)
            }
        }
    }
}

impl std::fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacSigner")
            .field("algorithm", &self.algorithm)
            .field("has_key", &self.has_key())
            .field("public_header", &self.public_header)
            .field("protected_header", &self.protected_header)
            .finish()
    }
}

fn hmac_digest<M: Mac + hmac::digest::KeyInit>(key: &[u8], message: &[u8]) -> Result<Vec<u8>> {
    let mut mac = <M as Mac>::new_from_slice(key)
        .map_err(|e| Error::SigningError(format!("invalid HMAC key: {}", e).into()))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}
