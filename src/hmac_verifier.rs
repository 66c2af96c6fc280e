use subtle::ConstantTimeEq;

use crate::{require, Error, HmacSigner, Result, SignatureAlgorithm};

/// Verifies HMAC signatures by recomputing them with the wrapped [`HmacSigner`] and comparing in
/// constant time.
#[derive(Clone, Debug)]
pub struct HmacVerifier {
    signer: HmacSigner,
}

impl HmacVerifier {
    pub fn new(algorithm: SignatureAlgorithm, key: Vec<u8>) -> Result<Self> {
        Ok(Self::from_signer(HmacSigner::new(algorithm, key)?))
    }
    pub fn from_signer(signer: HmacSigner) -> Self {
        Self { signer }
    }
    pub fn signer(&self) -> &HmacSigner {
        &self.signer
    }
    pub fn algorithm(&self) -> SignatureAlgorithm {
        self.signer.algorithm()
    }
    pub fn verify(&self, signing_input: &[u8], signature_bytes: &[u8]) -> Result<()> {
        require!(self.signer.has_key(), Error::MissingPublicKey);
        let expected = self.signer.sign(signing_input)?;
        if bool::from(expected.as_slice().ct_eq(signature_bytes)) {
            Ok(())
        } else {
            Err(Error::InvalidSignature)
        }
    }
}
