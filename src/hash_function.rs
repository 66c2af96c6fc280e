use sha2::Digest;

/// Message digest selected by a [`crate::SignatureAlgorithm`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HashFunction {
    SHA256,
    SHA384,
    SHA512,
}

impl HashFunction {
    /// Size in bytes of the digest.
    pub fn output_len(&self) -> usize {
        match self {
            Self::SHA256 => 32,
            Self::SHA384 => 48,
            Self::SHA512 => 64,
        }
    }
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::SHA256 => sha2::Sha256::digest(data).to_vec(),
            Self::SHA384 => sha2::Sha384::digest(data).to_vec(),
            Self::SHA512 => sha2::Sha512::digest(data).to_vec(),
        }
    }
}
