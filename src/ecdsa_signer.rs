use p256::ecdsa::signature::Signer as _;

use crate::{EcdsaPrivateKey, Error, Header, KeyType, Result, SignatureAlgorithm};

/// Signs with ECDSA.  Signatures are the fixed-width concatenation `r || s` of big-endian
/// scalars (RFC 7518 section 3.4), not DER.
#[derive(Clone, Debug)]
pub struct EcdsaSigner {
    algorithm: SignatureAlgorithm,
    private_key_o: Option<EcdsaPrivateKey>,
    pub public_header: Header,
    pub protected_header: Header,
}

impl EcdsaSigner {
    /// Fails with [`Error::UnsupportedAlgorithm`] if `algorithm` isn't ECDSA or doesn't match the
    /// curve of the given key.
    pub fn new(
        algorithm: SignatureAlgorithm,
        private_key_o: Option<EcdsaPrivateKey>,
    ) -> Result<Self> {
        algorithm.require_key_type(KeyType::EC)?;
        if let Some(private_key) = private_key_o.as_ref() {
            if Some(private_key.curve()) != algorithm.ecdsa_curve_o() {
                return Err(Error::UnsupportedAlgorithm(format!(
                    "{} can't be used with a {} key",
                    algorithm,
                    private_key.curve().as_str()
                )));
            }
        }
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
    pub fn private_key_o(&self) -> Option<&EcdsaPrivateKey> {
        self.private_key_o.as_ref()
    }
    pub fn sign(&self, signing_input: &[u8]) -> Result<Vec<u8>> {
        let private_key = self
            .private_key_o
            .as_ref()
            .ok_or(Error::MissingPrivateKey)?;
        let signature_byte_v = match private_key {
            EcdsaPrivateKey::P256(signing_key) => {
                let signature: p256::ecdsa::Signature =
                    signing_key.try_sign(signing_input).map_err(signing_error)?;
                signature.to_bytes().to_vec()
            }
            EcdsaPrivateKey::P384(signing_key) => {
                let signature: p384::ecdsa::Signature =
                    signing_key.try_sign(signing_input).map_err(signing_error)?;
                signature.to_bytes().to_vec()
            }
        };
        debug_assert_eq!(
            signature_byte_v.len(),
            private_key.curve().signature_len()
        );
        Ok(signature_byte_v)
    }
}

fn signing_error(e: p256::ecdsa::Error) -> Error {
    Error::SigningError(format!("ECDSA signing failed: {}", e).into())
}
