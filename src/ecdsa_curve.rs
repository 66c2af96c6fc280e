use crate::SignatureAlgorithm;

/// Curves usable for ECDSA JWS signatures.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EcdsaCurve {
    P256,
    P384,
}

impl EcdsaCurve {
    /// The JWK "crv" name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::P256 => "P-256",
            Self::P384 => "P-384",
        }
    }
    /// Width in bytes of each of the scalars r and s.
    pub fn scalar_len(&self) -> usize {
        match self {
            Self::P256 => 32,
            Self::P384 => 48,
        }
    }
    /// Length of the fixed-width `r || s` signature.
    pub fn signature_len(&self) -> usize {
        2 * self.scalar_len()
    }
    /// The one "alg" that pairs with this curve.
    pub fn signature_algorithm(&self) -> SignatureAlgorithm {
        match self {
            Self::P256 => SignatureAlgorithm::ES256,
            Self::P384 => SignatureAlgorithm::ES384,
        }
    }
}
