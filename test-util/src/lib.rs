use rsa::pkcs8::DecodePrivateKey;

lazy_static::lazy_static! {
    /// RSA key generation is *incredibly* slow in debug builds, so the RSA test keys are fixed
    /// PKCS#8 PEM files, parsed once.
    pub static ref RSA_PRIVATE_KEY_A: rsa::RsaPrivateKey =
        parse_rsa_private_key(include_str!("../keys/rsa-2048-a.pem"));
    pub static ref RSA_PRIVATE_KEY_B: rsa::RsaPrivateKey =
        parse_rsa_private_key(include_str!("../keys/rsa-2048-b.pem"));
}

fn parse_rsa_private_key(pem: &str) -> rsa::RsaPrivateKey {
    rsa::RsaPrivateKey::from_pkcs8_pem(pem).expect("test RSA key is valid PKCS#8 PEM")
}

/// Meant to be called from a `#[ctor::ctor]` function in each test binary.
pub fn ctor_overall_init() {
    // Ignore the error from a second init within the same process.
    let _ = env_logger::try_init();
    tracing::debug!("test logging initialized");
}

pub fn rsa_private_key_a() -> rsa::RsaPrivateKey {
    RSA_PRIVATE_KEY_A.clone()
}

pub fn rsa_private_key_b() -> rsa::RsaPrivateKey {
    RSA_PRIVATE_KEY_B.clone()
}

pub fn p256_signing_key() -> p256::ecdsa::SigningKey {
    p256::ecdsa::SigningKey::random(&mut rand::rngs::OsRng)
}

pub fn p384_signing_key() -> p384::ecdsa::SigningKey {
    p384::ecdsa::SigningKey::random(&mut rand::rngs::OsRng)
}

/// A 256-bit HMAC key with recognizable contents.
pub fn hmac_key(seed: u8) -> Vec<u8> {
    (0..32u8).map(|i| i.wrapping_mul(7).wrapping_add(seed)).collect()
}
