/// Names of the header parameters registered by RFC 7515 section 4.1.  Private header
/// parameters may not use any of these.
pub const ESSENTIAL_HEADER_NAMES: [&str; 11] = [
    "alg", "cty", "crit", "jwk", "jku", "kid", "typ", "x5u", "x5c", "x5t", "x5t#S256",
];

pub fn is_essential_header_name(name: &str) -> bool {
    ESSENTIAL_HEADER_NAMES.contains(&name)
}

/// The registered JWS header parameters.  See RFC 7515, https://datatracker.ietf.org/doc/html/rfc7515#section-4.1
/// Every field is optional; None means the parameter is absent.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EssentialHeader {
    /// Signature algorithm.  Kept as the raw string so that an unrecognized value can be carried
    /// and then rejected at verification time.
    #[serde(rename = "alg", skip_serializing_if = "Option::is_none")]
    pub alg_o: Option<String>,
    /// Content type of the payload.
    #[serde(rename = "cty", skip_serializing_if = "Option::is_none")]
    pub cty_o: Option<String>,
    /// Names of extension headers that must be understood and processed.
    #[serde(rename = "crit", skip_serializing_if = "Option::is_none")]
    pub crit_o: Option<Vec<String>>,
    /// Embedded public key, as an opaque JWK object.
    #[serde(rename = "jwk", skip_serializing_if = "Option::is_none")]
    pub jwk_o: Option<serde_json::Map<String, serde_json::Value>>,
    /// JWK Set URL, kept as given; [`crate::Header::set`] checks that it parses as a URL.
    #[serde(rename = "jku", skip_serializing_if = "Option::is_none")]
    pub jku_o: Option<String>,
    #[serde(rename = "kid", skip_serializing_if = "Option::is_none")]
    pub kid_o: Option<String>,
    /// e.g. "JWT"
    #[serde(rename = "typ", skip_serializing_if = "Option::is_none")]
    pub typ_o: Option<String>,
    /// X.509 URL, kept as given like "jku".
    #[serde(rename = "x5u", skip_serializing_if = "Option::is_none")]
    pub x5u_o: Option<String>,
    /// Certificate chain, each entry base64 (not base64url) DER.  Carried, never validated.
    #[serde(rename = "x5c", skip_serializing_if = "Option::is_none")]
    pub x5c_o: Option<Vec<String>>,
    /// SHA-1 certificate thumbprint.
    #[serde(rename = "x5t", skip_serializing_if = "Option::is_none")]
    pub x5t_o: Option<String>,
    /// SHA-256 certificate thumbprint.
    #[serde(rename = "x5t#S256", skip_serializing_if = "Option::is_none")]
    pub x5t_s256_o: Option<String>,
}
