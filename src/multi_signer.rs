use crate::{require, Error, Message, Result, Signature, Signer};

/// Signs one payload with several signers, producing one Message with an entry per signer, in
/// order.  The first failing signer aborts the whole operation.
#[derive(Clone, Debug, Default)]
pub struct MultiSigner {
    pub signer_v: Vec<Signer>,
}

impl MultiSigner {
    pub fn new(signer_v: Vec<Signer>) -> Self {
        Self { signer_v }
    }
    pub fn add_signer(&mut self, signer: Signer) {
        self.signer_v.push(signer);
    }
    pub fn sign(&self, payload: &[u8]) -> Result<Message> {
        require!(
            !self.signer_v.is_empty(),
            Error::SigningError("MultiSigner has no signers".into())
        );
        let signature_v = self
            .signer_v
            .iter()
            .map(|signer| signer.signature_for(payload))
            .collect::<Result<Vec<Signature>>>()?;
        tracing::debug!(
            signature_count = signature_v.len(),
            "produced multi-signature JWS"
        );
        Ok(Message::new(payload.to_vec(), signature_v))
    }
}
