use crate::EcdsaCurve;

/// ECDSA private key material, supplied by the caller.
#[derive(Clone)]
pub enum EcdsaPrivateKey {
    P256(p256::ecdsa::SigningKey),
    P384(p384::ecdsa::SigningKey),
}

impl EcdsaPrivateKey {
    pub fn curve(&self) -> EcdsaCurve {
        match self {
            Self::P256(_) => EcdsaCurve::P256,
            Self::P384(_) => EcdsaCurve::P384,
        }
    }
    pub fn public_key(&self) -> EcdsaPublicKey {
        match self {
            Self::P256(signing_key) => EcdsaPublicKey::P256(signing_key.verifying_key().clone()),
            Self::P384(signing_key) => EcdsaPublicKey::P384(signing_key.verifying_key().clone()),
        }
    }
}

// Never prints key material.
impl std::fmt::Debug for EcdsaPrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EcdsaPrivateKey({})", self.curve().as_str())
    }
}

impl From<p256::ecdsa::SigningKey> for EcdsaPrivateKey {
    fn from(signing_key: p256::ecdsa::SigningKey) -> Self {
        Self::P256(signing_key)
    }
}

impl From<p384::ecdsa::SigningKey> for EcdsaPrivateKey {
    fn from(signing_key: p384::ecdsa::SigningKey) -> Self {
        Self::P384(signing_key)
    }
}

/// ECDSA public key material, supplied by the caller.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EcdsaPublicKey {
    P256(p256::ecdsa::VerifyingKey),
    P384(p384::ecdsa::VerifyingKey),
}

impl EcdsaPublicKey {
    pub fn curve(&self) -> EcdsaCurve {
        match self {
            Self::P256(_) => EcdsaCurve::P256,
            Self::P384(_) => EcdsaCurve::P384,
        }
    }
}

impl From<p256::ecdsa::VerifyingKey> for EcdsaPublicKey {
    fn from(verifying_key: p256::ecdsa::VerifyingKey) -> Self {
        Self::P256(verifying_key)
    }
}

impl From<p384::ecdsa::VerifyingKey> for EcdsaPublicKey {
    fn from(verifying_key: p384::ecdsa::VerifyingKey) -> Self {
        Self::P384(verifying_key)
    }
}
