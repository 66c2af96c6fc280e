//! JSON Web Signature (JWS, RFC 7515) envelope: signing a payload with one or more RSA, ECDSA
//! or HMAC signers, serializing in compact or general JSON form, and verifying signatures from
//! untrusted input.  Key material is supplied by the caller; nothing here parses keys.

mod compact_serializer;
mod ecdsa_curve;
mod ecdsa_key;
mod ecdsa_signer;
mod ecdsa_verifier;
mod encoded_header;
mod error;
mod essential_header;
mod hash_function;
mod header;
mod hmac_signer;
mod hmac_verifier;
mod json_serializer;
mod merged_header;
mod message;
mod multi_signer;
mod parse;
mod rsa_signer;
mod rsa_verifier;
mod serializer_t;
mod signature;
mod signature_algorithm;
mod signer;
mod verifier;
mod verify_options;

pub(crate) use crate::{
    rsa_signer::{pkcs1v15_padding, pss_padding},
    signature::check_disjoint_headers,
};
pub use crate::{
    compact_serializer::CompactSerializer,
    ecdsa_curve::EcdsaCurve,
    ecdsa_key::{EcdsaPrivateKey, EcdsaPublicKey},
    ecdsa_signer::EcdsaSigner,
    ecdsa_verifier::EcdsaVerifier,
    encoded_header::EncodedHeader,
    error::Error,
    essential_header::{is_essential_header_name, EssentialHeader, ESSENTIAL_HEADER_NAMES},
    hash_function::HashFunction,
    header::Header,
    hmac_signer::HmacSigner,
    hmac_verifier::HmacVerifier,
    json_serializer::JSONSerializer,
    merged_header::MergedHeader,
    message::Message,
    multi_signer::MultiSigner,
    parse::{parse, parse_str},
    rsa_signer::RsaSigner,
    rsa_verifier::RsaVerifier,
    serializer_t::SerializerT,
    signature::{signing_input, Signature},
    signature_algorithm::{KeyType, SignatureAlgorithm, SignatureEncoding},
    signer::Signer,
    verifier::Verifier,
    verify_options::{VerificationPolicy, VerifyOptions},
};

pub type Result<T> = std::result::Result<T, Error>;
