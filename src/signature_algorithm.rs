use crate::{EcdsaCurve, Error, HashFunction};

/// The JWS "alg" values this crate can sign and verify with.
/// See <https://www.rfc-editor.org/rfc/rfc7518#section-3.1>.
///
/// The set is closed on purpose; an "alg" that doesn't parse into one of these (including
/// "none") is rejected with [`Error::UnsupportedAlgorithm`].
#[derive(Clone, Copy, Debug, derive_more::Display, Eq, Hash, PartialEq)]
pub enum SignatureAlgorithm {
    HS256,
    HS384,
    HS512,
    RS256,
    RS384,
    RS512,
    PS256,
    PS384,
    PS512,
    ES256,
    ES384,
}

/// Family of key that a [`SignatureAlgorithm`] operates on.  Named after the JWK "kty" values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyType {
    /// Shared secret.
    Oct,
    RSA,
    EC,
}

/// How the signature bytes are produced from the hashed signing input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SignatureEncoding {
    HMAC,
    RSAPKCS1v15,
    RSAPSS,
    /// Raw fixed-width big-endian `r || s`, never DER.
    ECDSAFixedWidth(EcdsaCurve),
}

impl SignatureAlgorithm {
    pub const ALL: [SignatureAlgorithm; 11] = [
        Self::HS256,
        Self::HS384,
        Self::HS512,
        Self::RS256,
        Self::RS384,
        Self::RS512,
        Self::PS256,
        Self::PS384,
        Self::PS512,
        Self::ES256,
        Self::ES384,
    ];

    /// The "alg" string for this algorithm.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HS256 => "HS256",
            Self::HS384 => "HS384",
            Self::HS512 => "HS512",
            Self::RS256 => "RS256",
            Self::RS384 => "RS384",
            Self::RS512 => "RS512",
            Self::PS256 => "PS256",
            Self::PS384 => "PS384",
            Self::PS512 => "PS512",
            Self::ES256 => "ES256",
            Self::ES384 => "ES384",
        }
    }
    pub fn hash_function(&self) -> HashFunction {
        match self {
            Self::HS256 | Self::RS256 | Self::PS256 | Self::ES256 => HashFunction::SHA256,
            Self::HS384 | Self::RS384 | Self::PS384 | Self::ES384 => HashFunction::SHA384,
            Self::HS512 | Self::RS512 | Self::PS512 => HashFunction::SHA512,
        }
    }
    pub fn key_type(&self) -> KeyType {
        match self {
            Self::HS256 | Self::HS384 | Self::HS512 => KeyType::Oct,
            Self::RS256 | Self::RS384 | Self::RS512 | Self::PS256 | Self::PS384 | Self::PS512 => {
                KeyType::RSA
            }
            Self::ES256 | Self::ES384 => KeyType::EC,
        }
    }
    pub fn signature_encoding(&self) -> SignatureEncoding {
        match self {
            Self::HS256 | Self::HS384 | Self::HS512 => SignatureEncoding::HMAC,
            Self::RS256 | Self::RS384 | Self::RS512 => SignatureEncoding::RSAPKCS1v15,
            Self::PS256 | Self::PS384 | Self::PS512 => SignatureEncoding::RSAPSS,
            Self::ES256 => SignatureEncoding::ECDSAFixedWidth(EcdsaCurve::P256),
            Self::ES384 => SignatureEncoding::ECDSAFixedWidth(EcdsaCurve::P384),
        }
    }
    /// Returns the curve if this is an ECDSA algorithm.
    pub fn ecdsa_curve_o(&self) -> Option<EcdsaCurve> {
        match self.signature_encoding() {
            SignatureEncoding::ECDSAFixedWidth(curve) => Some(curve),
            _ => None,
        }
    }
    /// Fails with [`Error::UnsupportedAlgorithm`] unless this algorithm operates on the given key type.
    pub(crate) fn require_key_type(&self, key_type: KeyType) -> Result<(), Error> {
        if self.key_type() != key_type {
            return Err(Error::UnsupportedAlgorithm(format!(
                "{} is not a {:?} algorithm",
                self, key_type
            )));
        }
        Ok(())
    }
}

impl std::str::FromStr for SignatureAlgorithm {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|signature_algorithm| signature_algorithm.as_str() == s)
            .ok_or_else(|| Error::UnsupportedAlgorithm(s.to_string()))
    }
}

impl TryFrom<&str> for SignatureAlgorithm {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
