use serde_json::Value;

use crate::{is_essential_header_name, EssentialHeader, Error, Result, SignatureAlgorithm};

/// A JWS header: the registered parameters plus any private (application-defined) ones.
///
/// Registered parameters are stored typed, so a value of the wrong shape can never be held;
/// it's rejected with [`Error::InvalidHeaderValue`] when it is set or parsed.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Header {
    pub essential: EssentialHeader,
    /// Private header parameters.  Keys must not be registered names; this is checked when the
    /// header is serialized.
    pub private_param_m: serde_json::Map<String, Value>,
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn is_empty(&self) -> bool {
        self.essential == EssentialHeader::default() && self.private_param_m.is_empty()
    }
    /// Returns the value of the named parameter, registered or private, as JSON.
    pub fn get(&self, name: &str) -> Option<Value> {
        let e = &self.essential;
        match name {
            "alg" => e.alg_o.clone().map(Value::String),
            "cty" => e.cty_o.clone().map(Value::String),
            "crit" => to_value_o(&e.crit_o),
            "jwk" => e.jwk_o.clone().map(Value::Object),
            "jku" => e.jku_o.clone().map(Value::String),
            "kid" => e.kid_o.clone().map(Value::String),
            "typ" => e.typ_o.clone().map(Value::String),
            "x5u" => e.x5u_o.clone().map(Value::String),
            "x5c" => to_value_o(&e.x5c_o),
            "x5t" => e.x5t_o.clone().map(Value::String),
            "x5t#S256" => e.x5t_s256_o.clone().map(Value::String),
            _ => self.private_param_m.get(name).cloned(),
        }
    }
    /// Sets the named parameter.  Registered names must carry a value of the right shape,
    /// otherwise [`Error::InvalidHeaderValue`] is returned and the header is left unchanged.
    pub fn set(&mut self, name: &str, value: Value) -> Result<()> {
        let e = &mut self.essential;
        match name {
            "alg" => e.alg_o = Some(parse_value(name, value)?),
            "cty" => e.cty_o = Some(parse_value(name, value)?),
            "crit" => e.crit_o = Some(parse_value(name, value)?),
            "jwk" => e.jwk_o = Some(parse_value(name, value)?),
            "jku" => e.jku_o = Some(parse_url_value(name, value)?),
            "kid" => e.kid_o = Some(parse_value(name, value)?),
            "typ" => e.typ_o = Some(parse_value(name, value)?),
            "x5u" => e.x5u_o = Some(parse_url_value(name, value)?),
            "x5c" => e.x5c_o = Some(parse_value(name, value)?),
            "x5t" => e.x5t_o = Some(parse_value(name, value)?),
            "x5t#S256" => e.x5t_s256_o = Some(parse_value(name, value)?),
            _ => {
                self.private_param_m.insert(name.to_string(), value);
            }
        }
        Ok(())
    }
    /// Removes the named parameter, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let value_o = self.get(name);
        let e = &mut self.essential;
        match name {
            "alg" => e.alg_o = None,
            "cty" => e.cty_o = None,
            "crit" => e.crit_o = None,
            "jwk" => e.jwk_o = None,
            "jku" => e.jku_o = None,
            "kid" => e.kid_o = None,
            "typ" => e.typ_o = None,
            "x5u" => e.x5u_o = None,
            "x5c" => e.x5c_o = None,
            "x5t" => e.x5t_o = None,
            "x5t#S256" => e.x5t_s256_o = None,
            _ => {
                self.private_param_m.remove(name);
            }
        }
        value_o
    }
    /// Copies in every parameter of `other` that this header doesn't already have.
    pub fn merge(&mut self, other: &Header) -> Result<()> {
        for (name, value) in other.to_json_map()? {
            if self.get(&name).is_none() {
                self.set(&name, value)?;
            }
        }
        Ok(())
    }
    /// Parses the "alg" parameter.  None if absent; [`Error::UnsupportedAlgorithm`] if present
    /// but not a recognized algorithm.
    pub fn algorithm(&self) -> Result<Option<SignatureAlgorithm>> {
        self.essential
            .alg_o
            .as_deref()
            .map(str::parse::<SignatureAlgorithm>)
            .transpose()
    }
    pub fn key_id(&self) -> Option<&str> {
        self.essential.kid_o.as_deref()
    }
    pub fn content_type(&self) -> Option<&str> {
        self.essential.cty_o.as_deref()
    }
    pub fn type_(&self) -> Option<&str> {
        self.essential.typ_o.as_deref()
    }
    pub fn critical(&self) -> Option<&[String]> {
        self.essential.crit_o.as_deref()
    }
    /// The "jku" parameter as a parsed (and therefore normalized) URL.
    pub fn jwk_set_url(&self) -> Option<url::Url> {
        self.essential
            .jku_o
            .as_deref()
            .and_then(|jku| url::Url::parse(jku).ok())
    }
    pub fn x509_url(&self) -> Option<url::Url> {
        self.essential
            .x5u_o
            .as_deref()
            .and_then(|x5u| url::Url::parse(x5u).ok())
    }
    /// Produces the JSON object form of this header.  Fails if a private parameter uses a
    /// registered name.
    pub fn to_json_map(&self) -> Result<serde_json::Map<String, Value>> {
        let mut map = match serde_json::to_value(&self.essential) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                return Err(Error::Serialization(
                    "registered header did not serialize as a JSON object".into(),
                ))
            }
            Err(e) => return Err(Error::Serialization(e.to_string().into())),
        };
        for (name, value) in self.private_param_m.iter() {
            if is_essential_header_name(name) {
                return Err(Error::invalid_header_value(
                    name.clone(),
                    "private header name collides with a registered header name",
                ));
            }
            map.insert(name.clone(), value.clone());
        }
        Ok(map)
    }
    /// Canonical JSON encoding of this header.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(&self.to_json_map()?)
            .map_err(|e| Error::Serialization(e.to_string().into()))
    }
    pub fn from_json_map(map: serde_json::Map<String, Value>) -> Result<Self> {
        let mut header = Self::default();
        for (name, value) in map {
            header.set(&name, value)?;
        }
        Ok(header)
    }
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self> {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(map)) => Self::from_json_map(map),
            Ok(_) => Err(Error::Malformed("JWS header is not a JSON object".into())),
            Err(e) => Err(Error::Malformed(
                format!("JWS header failed to parse as JSON: {}", e).into(),
            )),
        }
    }
}

impl serde::Serialize for Header {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        let map = self.to_json_map().map_err(serde::ser::Error::custom)?;
        serde::Serialize::serialize(&map, serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Header {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let map: serde_json::Map<String, Value> = serde::Deserialize::deserialize(deserializer)?;
        Self::from_json_map(map).map_err(serde::de::Error::custom)
    }
}

fn parse_value<T: serde::de::DeserializeOwned>(name: &str, value: Value) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|e| Error::invalid_header_value(name.to_string(), e.to_string()))
}

/// URL-valued parameters keep their original text, so that re-serializing doesn't normalize them.
fn parse_url_value(name: &str, value: Value) -> Result<String> {
    let url_string: String = parse_value(name, value)?;
    url::Url::parse(&url_string)
        .map_err(|e| Error::invalid_header_value(name.to_string(), e.to_string()))?;
    Ok(url_string)
}

fn to_value_o<T: serde::Serialize>(t_o: &Option<T>) -> Option<Value> {
    t_o.as_ref().and_then(|t| serde_json::to_value(t).ok())
}
