use p256::ecdsa::signature::Verifier as _;

use crate::{
    require, EcdsaCurve, EcdsaPublicKey, Error, HashFunction, KeyType, Result,
    SignatureAlgorithm,
};

#[derive(Clone, Debug)]
pub struct EcdsaVerifier {
    algorithm: SignatureAlgorithm,
    public_key_o: Option<EcdsaPublicKey>,
}

impl EcdsaVerifier {
    /// Fails with [`Error::UnsupportedAlgorithm`] if `algorithm` isn't ECDSA or doesn't match the
    /// curve of the given key.
    pub fn new(
        algorithm: SignatureAlgorithm,
        public_key_o: Option<EcdsaPublicKey>,
    ) -> Result<Self> {
        algorithm.require_key_type(KeyType::EC)?;
        if let Some(public_key) = public_key_o.as_ref() {
            if Some(public_key.curve()) != algorithm.ecdsa_curve_o() {
                return Err(Error::UnsupportedAlgorithm(format!(
                    "{} can't be used with a {} key",
                    algorithm,
                    public_key.curve().as_str()
                )));
            }
        }
        Ok(Self {
            algorithm,
            public_key_o,
        })
    }
    pub fn algorithm(&self) -> SignatureAlgorithm {
        self.algorithm
    }
    pub fn hash_function(&self) -> HashFunction {
        self.algorithm.hash_function()
    }
    pub fn curve(&self) -> Option<EcdsaCurve> {
        self.algorithm.ecdsa_curve_o()
    }
    /// The length check comes before any cryptographic work, so a wrongly-sized signature is
    /// reported as [`Error::InvalidEcdsaSignatureSize`], never as [`Error::InvalidSignature`].
    pub fn verify(&self, signing_input: &[u8], signature_bytes: &[u8]) -> Result<()> {
        let public_key = self
            .public_key_o
            .as_ref()
            .ok_or(Error::MissingPublicKey)?;
        let expected = public_key.curve().signature_len();
        require!(
            signature_bytes.len() == expected,
            Error::InvalidEcdsaSignatureSize {
                expected,
                actual: signature_bytes.len(),
            }
        );
        let (r, s) = signature_bytes.split_at(public_key.curve().scalar_len());
        match public_key {
            EcdsaPublicKey::P256(verifying_key) => {
                let signature = p256::ecdsa::Signature::from_scalars(
                    p256::FieldBytes::clone_from_slice(r),
                    p256::FieldBytes::clone_from_slice(s),
                )
                .map_err(|_| Error::InvalidSignature)?;
                verifying_key
                    .verify(signing_input, &signature)
                    .map_err(|_| Error::InvalidSignature)
            }
            EcdsaPublicKey::P384(verifying_key) => {
                let signature = p384::ecdsa::Signature::from_scalars(
                    p384::FieldBytes::clone_from_slice(r),
                    p384::FieldBytes::clone_from_slice(s),
                )
                .map_err(|_| Error::InvalidSignature)?;
                verifying_key
                    .verify(signing_input, &signature)
                    .map_err(|_| Error::InvalidSignature)
            }
        }
    }
}
