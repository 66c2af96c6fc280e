use std::borrow::Cow;

use crate::SignatureAlgorithm;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Compact JWS must have exactly three dot-separated parts, but it has {0}")]
    InvalidCompactPartsCount(usize),
    #[error("Invalid value for header {name:?}: {reason}")]
    InvalidHeaderValue {
        name: Cow<'static, str>,
        reason: Cow<'static, str>,
    },
    #[error("Missing header {0:?}")]
    MissingHeaderValue(&'static str),
    #[error("Invalid ECDSA signature size; expected {expected} bytes, got {actual}")]
    InvalidEcdsaSignatureSize { expected: usize, actual: usize },
    #[error("Invalid signature")]
    InvalidSignature,
    #[error("Invalid signature count {0} for this serialization")]
    InvalidSignatureCount(usize),
    #[error("Missing private key")]
    MissingPrivateKey,
    #[error("Missing public key")]
    MissingPublicKey,
    #[error("Unsupported algorithm {0:?}")]
    UnsupportedAlgorithm(String),
    #[error("Algorithm mismatch; expected {expected}, found {found}")]
    AlgorithmMismatch {
        expected: SignatureAlgorithm,
        found: SignatureAlgorithm,
    },
    #[error("Unsupported critical header {0:?}")]
    UnsupportedCriticalHeader(String),
    #[error("Malformed: {0}")]
    Malformed(Cow<'static, str>),
    #[error("Serialization error: {0}")]
    Serialization(Cow<'static, str>),
    #[error("Signing error: {0}")]
    SigningError(Cow<'static, str>),
}

impl Error {
    pub(crate) fn invalid_header_value(
        name: impl Into<Cow<'static, str>>,
        reason: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::InvalidHeaderValue {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// This will return with the given error if the condition is not met.
#[macro_export]
macro_rules! require {
    ($condition: expr, $error: expr) => {
        if !$condition {
            return Err($error);
        }
    };
}
