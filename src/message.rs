use crate::Signature;

/// A full JWS: one payload and one or more signature entries over it.
///
/// Flattened JSON serialization has no separate representation; it is a Message with exactly
/// one entry.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Message {
    pub payload: Vec<u8>,
    /// Order is kept through JSON serialization.  Each entry verifies independently.
    pub signature_v: Vec<Signature>,
}

impl Message {
    pub fn new(payload: Vec<u8>, signature_v: Vec<Signature>) -> Self {
        Self {
            payload,
            signature_v,
        }
    }
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
    pub fn signatures(&self) -> &[Signature] {
        &self.signature_v
    }
    pub fn add_signature(&mut self, signature: Signature) {
        self.signature_v.push(signature);
    }
    /// Returns the signature entries whose merged "kid" equals `kid`.
    pub fn lookup_signatures(&self, kid: &str) -> Vec<&Signature> {
        self.signature_v
            .iter()
            .filter(|signature| signature.merged_header().key_id() == Some(kid))
            .collect()
    }
}
