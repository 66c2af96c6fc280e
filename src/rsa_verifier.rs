use crate::{
    pkcs1v15_padding, pss_padding, Error, HashFunction, KeyType, Result, SignatureAlgorithm,
    SignatureEncoding,
};

#[derive(Clone, Debug)]
pub struct RsaVerifier {
    algorithm: SignatureAlgorithm,
    public_key_o: Option<rsa::RsaPublicKey>,
}

impl RsaVerifier {
    pub fn new(
        algorithm: SignatureAlgorithm,
        public_key_o: Option<rsa::RsaPublicKey>,
    ) -> Result<Self> {
        algorithm.require_key_type(KeyType::RSA)?;
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
    pub fn verify(&self, signing_input: &[u8], signature_bytes: &[u8]) -> Result<()> {
        let public_key = self
            .public_key_o
            .as_ref()
            .ok_or(Error::MissingPublicKey)?;
        let hash_function = self.hash_function();
        let digest = hash_function.digest(signing_input);
        let verify_result = match self.algorithm.signature_encoding() {
            SignatureEncoding::RSAPKCS1v15 => {
                public_key.verify(pkcs1v15_padding(hash_function), &digest, signature_bytes)
            }
            SignatureEncoding::RSAPSS => {
                public_key.verify(pss_padding(hash_function), &digest, signature_bytes)
            }
            _ => return Err(Error::UnsupportedAlgorithm(self.algorithm.to_string())),
        };
        verify_result.map_err(|_| Error::InvalidSignature)
    }
}
