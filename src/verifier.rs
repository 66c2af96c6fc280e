use crate::{
    is_essential_header_name, parse, require, EcdsaPublicKey, EcdsaVerifier, Error, Header,
    HmacSigner, HmacVerifier, Message, Result, RsaVerifier, Signature, SignatureAlgorithm,
    VerificationPolicy, VerifyOptions,
};

/// The closed set of verification algorithm families, mirroring [`crate::Signer`].
#[derive(Clone, Debug, derive_more::From)]
pub enum Verifier {
    Rsa(RsaVerifier),
    Ecdsa(EcdsaVerifier),
    Hmac(HmacVerifier),
}

impl Verifier {
    pub fn rsa(
        algorithm: SignatureAlgorithm,
        public_key_o: Option<rsa::RsaPublicKey>,
    ) -> Result<Self> {
        Ok(Self::Rsa(RsaVerifier::new(algorithm, public_key_o)?))
    }
    pub fn ecdsa(
        algorithm: SignatureAlgorithm,
        public_key_o: Option<EcdsaPublicKey>,
    ) -> Result<Self> {
        Ok(Self::Ecdsa(EcdsaVerifier::new(algorithm, public_key_o)?))
    }
    pub fn hmac(algorithm: SignatureAlgorithm, key: Vec<u8>) -> Result<Self> {
        Ok(Self::Hmac(HmacVerifier::new(algorithm, key)?))
    }
    pub fn algorithm(&self) -> SignatureAlgorithm {
        match self {
            Self::Rsa(verifier) => verifier.algorithm(),
            Self::Ecdsa(verifier) => verifier.algorithm(),
            Self::Hmac(verifier) => verifier.algorithm(),
        }
    }
    /// Verifies one signature entry over `payload`, understanding no "crit" extensions.
    pub fn verify_signature(&self, payload: &[u8], signature: &Signature) -> Result<()> {
        self.verify_signature_with(payload, signature, &VerifyOptions::default())
    }
    /// Verifies one signature entry over `payload`.  The algorithm is resolved from the protected
    /// header and checked against this verifier before any cryptographic work is done.
    pub fn verify_signature_with(
        &self,
        payload: &[u8],
        signature: &Signature,
        options: &VerifyOptions,
    ) -> Result<()> {
        let found = signature.merged_header().algorithm()?;
        let expected = self.algorithm();
        require!(
            found == expected,
            Error::AlgorithmMismatch { expected, found }
        );
        require!(
            signature.public_header.critical().is_none(),
            Error::invalid_header_value("crit", "must only appear in the protected header")
        );
        check_critical_headers(signature.protected_header.header(), options)?;

        let signing_input = signature.signing_input(payload)?;
        let signature_bytes = signature.signature_byte_v.as_slice();
        let verify_result = match self {
            Self::Rsa(verifier) => verifier.verify(&signing_input, signature_bytes),
            Self::Ecdsa(verifier) => verifier.verify(&signing_input, signature_bytes),
            Self::Hmac(verifier) => verifier.verify(&signing_input, signature_bytes),
        };
        match &verify_result {
            Ok(()) => tracing::trace!(algorithm = %expected, "JWS signature verified"),
            Err(e) => tracing::debug!(
                algorithm = %expected,
                error = %e,
                "JWS signature failed to verify"
            ),
        }
        verify_result
    }
    /// Verifies each signature entry independently; the outcomes are in entry order.
    pub fn verify(&self, message: &Message) -> Vec<Result<()>> {
        self.verify_with(message, &VerifyOptions::default())
    }
    pub fn verify_with(&self, message: &Message, options: &VerifyOptions) -> Vec<Result<()>> {
        message
            .signatures()
            .iter()
            .map(|signature| self.verify_signature_with(message.payload(), signature, options))
            .collect()
    }
    /// Combines the per-entry outcomes under `policy`.  A Message with no signatures never
    /// verifies.  On failure, the first relevant error is returned.
    pub fn verify_with_policy(
        &self,
        message: &Message,
        policy: VerificationPolicy,
        options: &VerifyOptions,
    ) -> Result<()> {
        require!(
            !message.signatures().is_empty(),
            Error::InvalidSignatureCount(0)
        );
        let outcome_v = self.verify_with(message, options);
        match policy {
            VerificationPolicy::All => outcome_v.into_iter().collect(),
            VerificationPolicy::Any => {
                let mut first_error_o = None;
                for outcome in outcome_v {
                    match outcome {
                        Ok(()) => return Ok(()),
                        Err(e) => {
                            first_error_o.get_or_insert(e);
                        }
                    }
                }
                Err(first_error_o.unwrap_or(Error::InvalidSignature))
            }
        }
    }
    /// Parses `bytes` (compact or JSON), verifies under `policy`, and returns the payload.
    pub fn verify_bytes(
        &self,
        bytes: &[u8],
        policy: VerificationPolicy,
        options: &VerifyOptions,
    ) -> Result<Vec<u8>> {
        let message = parse(bytes)?;
        self.verify_with_policy(&message, policy, options)?;
        Ok(message.payload)
    }
}

impl From<HmacSigner> for Verifier {
    fn from(signer: HmacSigner) -> Self {
        Self::Hmac(HmacVerifier::from_signer(signer))
    }
}

/// Enforces "crit" per RFC 7515 section 4.1.11.
fn check_critical_headers(protected_header: &Header, options: &VerifyOptions) -> Result<()> {
    let crit = match protected_header.critical() {
        Some(crit) => crit,
        None => return Ok(()),
    };
    require!(
        !crit.is_empty(),
        Error::invalid_header_value("crit", "must not be empty")
    );
    for name in crit {
        require!(
            !is_essential_header_name(name),
            Error::invalid_header_value(
                "crit",
                format!("{:?} is a registered header name", name)
            )
        );
        require!(
            protected_header.private_param_m.contains_key(name),
            Error::invalid_header_value(
                "crit",
                format!("{:?} is not present in the protected header", name)
            )
        );
        require!(
            options
                .understood_critical_header_v
                .iter()
                .any(|understood| understood == name),
            Error::UnsupportedCriticalHeader(name.clone())
        );
    }
    Ok(())
}
