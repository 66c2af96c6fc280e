/// Caller-supplied knobs for verification.
#[derive(Clone, Debug, Default)]
pub struct VerifyOptions {
    /// Names of "crit" extension headers the caller processes itself.  A protected header that
    /// lists any other name in "crit" fails to verify.
    pub understood_critical_header_v: Vec<String>,
}

impl VerifyOptions {
    pub fn with_understood_critical_header(mut self, name: impl Into<String>) -> Self {
        self.understood_critical_header_v.push(name.into());
        self
    }
}

/// How per-signature outcomes of a multi-signature JWS combine into one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VerificationPolicy {
    /// Every signature entry must verify.
    All,
    /// At least one signature entry must verify.
    Any,
}
