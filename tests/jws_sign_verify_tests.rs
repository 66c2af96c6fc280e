use jws::{
    CompactSerializer, EcdsaPrivateKey, EcdsaPublicKey, EncodedHeader, Error, Header, HmacSigner,
    Message, MultiSigner, SerializerT, Signature, SignatureAlgorithm, Signer, VerificationPolicy,
    Verifier, VerifyOptions,
};
use serde_json::json;

/// This will run once at load time (i.e. presumably before main function is called).
#[ctor::ctor]
fn overall_init() {
    test_util::ctor_overall_init();
}

fn rsa_signer(algorithm: SignatureAlgorithm) -> Signer {
    Signer::rsa(algorithm, Some(test_util::rsa_private_key_a())).expect("pass")
}

fn rsa_verifier(algorithm: SignatureAlgorithm, private_key: &rsa::RsaPrivateKey) -> Verifier {
    Verifier::rsa(algorithm, Some(private_key.to_public_key())).expect("pass")
}

/// Signs, round-trips through the compact serialization, and verifies.
fn test_sign_verify_impl(signer: &Signer, verifier: &Verifier) {
    tracing::debug!("testing JWS with alg {}", signer.algorithm());
    let payload = br#"{"HIPPO":"WORLD!"}"#;
    let message = signer.sign_message(payload).expect("pass");
    assert_eq!(message.signatures().len(), 1);
    verifier
        .verify_signature(message.payload(), &message.signatures()[0])
        .expect("pass");

    let jws_string = CompactSerializer
        .serialize_to_string(&message)
        .expect("pass");
    tracing::debug!("jws: {}", jws_string);
    let parsed = jws::parse_str(&jws_string).expect("pass");
    assert_eq!(parsed.payload(), payload);
    for outcome in verifier.verify(&parsed) {
        outcome.expect("pass");
    }
}

#[test]
#[serial_test::serial]
fn test_rs256_hello_compact_scenario() {
    let signer = rsa_signer(SignatureAlgorithm::RS256);
    let message = signer.sign_message(b"hello").expect("pass");
    let jws_bytes = CompactSerializer.serialize(&message).expect("pass");
    let parsed = CompactSerializer.deserialize(&jws_bytes).expect("pass");

    let verifier = rsa_verifier(SignatureAlgorithm::RS256, &test_util::rsa_private_key_a());
    verifier
        .verify_signature(parsed.payload(), &parsed.signatures()[0])
        .expect("pass");

    let unrelated_verifier =
        rsa_verifier(SignatureAlgorithm::RS256, &test_util::rsa_private_key_b());
    assert!(matches!(
        unrelated_verifier.verify_signature(parsed.payload(), &parsed.signatures()[0]),
        Err(Error::InvalidSignature)
    ));
}

#[test]
#[serial_test::serial]
fn test_rsa_algorithms() {
    for algorithm in [
        SignatureAlgorithm::RS256,
        SignatureAlgorithm::RS384,
        SignatureAlgorithm::RS512,
        SignatureAlgorithm::PS256,
        SignatureAlgorithm::PS384,
        SignatureAlgorithm::PS512,
    ] {
        test_sign_verify_impl(
            &rsa_signer(algorithm),
            &rsa_verifier(algorithm, &test_util::rsa_private_key_a()),
        );
    }
}

#[test]
#[serial_test::serial]
fn test_rsa_pkcs1v15_blinded_signing_is_deterministic() {
    // Blinding randomizes the private-key operation, never the PKCS#1 v1.5 result.
    let signer = rsa_signer(SignatureAlgorithm::RS256);
    let verifier = rsa_verifier(SignatureAlgorithm::RS256, &test_util::rsa_private_key_a());
    let first = signer.signature_for(b"hello").expect("pass");
    let second = signer.signature_for(b"hello").expect("pass");
    assert_eq!(first.signature_byte_v, second.signature_byte_v);
    assert_eq!(first.signature_byte_v.len(), 256);
    verifier.verify_signature(b"hello", &first).expect("pass");

    // PSS is salted, so its signatures differ, but both verify.
    let signer = rsa_signer(SignatureAlgorithm::PS256);
    let verifier = rsa_verifier(SignatureAlgorithm::PS256, &test_util::rsa_private_key_a());
    let first = signer.signature_for(b"hello").expect("pass");
    let second = signer.signature_for(b"hello").expect("pass");
    assert_ne!(first.signature_byte_v, second.signature_byte_v);
    verifier.verify_signature(b"hello", &first).expect("pass");
    verifier.verify_signature(b"hello", &second).expect("pass");
}

#[test]
#[serial_test::serial]
fn test_rsa_missing_keys() {
    let signer = Signer::rsa(SignatureAlgorithm::RS256, None).expect("pass");
    assert!(matches!(
        signer.sign_message(b"hello"),
        Err(Error::MissingPrivateKey)
    ));

    let message = rsa_signer(SignatureAlgorithm::RS256)
        .sign_message(b"hello")
        .expect("pass");
    let verifier = Verifier::rsa(SignatureAlgorithm::RS256, None).expect("pass");
    assert!(matches!(
        verifier.verify_signature(message.payload(), &message.signatures()[0]),
        Err(Error::MissingPublicKey)
    ));
}

#[test]
#[serial_test::serial]
fn test_ecdsa_algorithms() {
    let signing_key = test_util::p256_signing_key();
    let signer = Signer::ecdsa(SignatureAlgorithm::ES256, Some(signing_key.clone().into()))
        .expect("pass");
    let verifier = Verifier::ecdsa(
        SignatureAlgorithm::ES256,
        Some(signing_key.verifying_key().clone().into()),
    )
    .expect("pass");
    test_sign_verify_impl(&signer, &verifier);

    let signing_key = test_util::p384_signing_key();
    let private_key = EcdsaPrivateKey::from(signing_key);
    let signer =
        Signer::ecdsa(SignatureAlgorithm::ES384, Some(private_key.clone())).expect("pass");
    let verifier =
        Verifier::ecdsa(SignatureAlgorithm::ES384, Some(private_key.public_key())).expect("pass");
    test_sign_verify_impl(&signer, &verifier);
}

#[test]
#[serial_test::serial]
fn test_ecdsa_signature_is_fixed_width() {
    let p256_private_key = EcdsaPrivateKey::from(test_util::p256_signing_key());
    let p384_private_key = EcdsaPrivateKey::from(test_util::p384_signing_key());
    for (algorithm, private_key, expected_len) in [
        (SignatureAlgorithm::ES256, p256_private_key, 64),
        (SignatureAlgorithm::ES384, p384_private_key, 96),
    ] {
        let signer = Signer::ecdsa(algorithm, Some(private_key)).expect("pass");
        // Repeat, since a DER encoding would vary in length from signature to signature.
        for i in 0..8u8 {
            let signature_byte_v = signer.sign(&[i; 10]).expect("pass");
            assert_eq!(signature_byte_v.len(), expected_len);
        }
    }
}

#[test]
#[serial_test::serial]
fn test_ecdsa_signature_size_is_checked_before_verification() {
    let private_key = EcdsaPrivateKey::from(test_util::p256_signing_key());
    let signer = Signer::ecdsa(SignatureAlgorithm::ES256, Some(private_key.clone())).expect("pass");
    let verifier =
        Verifier::ecdsa(SignatureAlgorithm::ES256, Some(private_key.public_key())).expect("pass");
    let message = signer.sign_message(b"hello").expect("pass");
    let signature = &message.signatures()[0];

    let mut short = signature.clone();
    short.signature_byte_v.pop();
    assert!(matches!(
        verifier.verify_signature(message.payload(), &short),
        Err(Error::InvalidEcdsaSignatureSize {
            expected: 64,
            actual: 63
        })
    ));

    let mut long = signature.clone();
    long.signature_byte_v.push(0);
    assert!(matches!(
        verifier.verify_signature(message.payload(), &long),
        Err(Error::InvalidEcdsaSignatureSize {
            expected: 64,
            actual: 65
        })
    ));

    // Correct size, wrong value.
    let mut tampered = signature.clone();
    tampered.signature_byte_v[63] ^= 0x01;
    assert!(matches!(
        verifier.verify_signature(message.payload(), &tampered),
        Err(Error::InvalidSignature)
    ));

    let mut zeroed = signature.clone();
    zeroed.signature_byte_v = vec![0u8; 64];
    assert!(matches!(
        verifier.verify_signature(message.payload(), &zeroed),
        Err(Error::InvalidSignature)
    ));

    assert!(matches!(
        verifier.verify_signature(b"hellO", signature),
        Err(Error::InvalidSignature)
    ));
}

#[test]
#[serial_test::serial]
fn test_ecdsa_missing_keys_and_curve_mismatch() {
    let signer = Signer::ecdsa(SignatureAlgorithm::ES256, None).expect("pass");
    assert!(matches!(
        signer.sign(b"input"),
        Err(Error::MissingPrivateKey)
    ));

    let message = Signer::ecdsa(
        SignatureAlgorithm::ES256,
        Some(test_util::p256_signing_key().into()),
    )
    .expect("pass")
    .sign_message(b"hello")
    .expect("pass");
    let verifier = Verifier::ecdsa(SignatureAlgorithm::ES256, None).expect("pass");
    assert!(matches!(
        verifier.verify_signature(message.payload(), &message.signatures()[0]),
        Err(Error::MissingPublicKey)
    ));

    assert!(matches!(
        Signer::ecdsa(
            SignatureAlgorithm::ES384,
            Some(test_util::p256_signing_key().into())
        ),
        Err(Error::UnsupportedAlgorithm(_))
    ));
    let p384_public_key =
        EcdsaPublicKey::from(test_util::p384_signing_key().verifying_key().clone());
    assert!(matches!(
        Verifier::ecdsa(SignatureAlgorithm::ES256, Some(p384_public_key)),
        Err(Error::UnsupportedAlgorithm(_))
    ));
    assert!(matches!(
        Signer::ecdsa(SignatureAlgorithm::RS256, None),
        Err(Error::UnsupportedAlgorithm(_))
    ));
}

#[test]
#[serial_test::serial]
fn test_hmac_algorithms() {
    for algorithm in [
        SignatureAlgorithm::HS256,
        SignatureAlgorithm::HS384,
        SignatureAlgorithm::HS512,
    ] {
        let key = test_util::hmac_key(1);
        let signer = Signer::hmac(algorithm, key.clone()).expect("pass");
        let verifier = Verifier::hmac(algorithm, key).expect("pass");
        test_sign_verify_impl(&signer, &verifier);
        assert_eq!(
            signer.sign(b"input").expect("pass").len(),
            algorithm.hash_function().output_len()
        );
    }
}

#[test]
#[serial_test::serial]
fn test_hmac_wrong_key_or_mutated_payload_fails() {
    let signer = Signer::hmac(SignatureAlgorithm::HS256, test_util::hmac_key(1)).expect("pass");
    let message = signer.sign_message(b"hello").expect("pass");
    let signature = &message.signatures()[0];

    let verifier = Verifier::hmac(SignatureAlgorithm::HS256, test_util::hmac_key(1)).expect("pass");
    verifier
        .verify_signature(b"hello", signature)
        .expect("pass");

    let other_verifier =
        Verifier::hmac(SignatureAlgorithm::HS256, test_util::hmac_key(2)).expect("pass");
    assert!(matches!(
        other_verifier.verify_signature(b"hello", signature),
        Err(Error::InvalidSignature)
    ));
    for mutated in [b"hellp".as_slice(), b"Hello".as_slice(), b"hello!".as_slice(), b"hell".as_slice()] {
        assert!(matches!(
            verifier.verify_signature(mutated, signature),
            Err(Error::InvalidSignature)
        ));
    }
}

#[test]
#[serial_test::serial]
fn test_hmac_verifier_wraps_signer() {
    let hmac_signer = HmacSigner::new(SignatureAlgorithm::HS512, test_util::hmac_key(3)).expect("pass");
    let signer = Signer::from(hmac_signer.clone());
    let verifier = Verifier::from(hmac_signer);
    test_sign_verify_impl(&signer, &verifier);
}

#[test]
#[serial_test::serial]
fn test_hmac_missing_key() {
    let signer = Signer::hmac(SignatureAlgorithm::HS256, Vec::new()).expect("pass");
    assert!(matches!(
        signer.sign_message(b"hello"),
        Err(Error::MissingPrivateKey)
    ));

    let message = Signer::hmac(SignatureAlgorithm::HS256, test_util::hmac_key(1))
        .expect("pass")
        .sign_message(b"hello")
        .expect("pass");
    let verifier = Verifier::hmac(SignatureAlgorithm::HS256, Vec::new()).expect("pass");
    assert!(matches!(
        verifier.verify_signature(message.payload(), &message.signatures()[0]),
        Err(Error::MissingPublicKey)
    ));
}

#[test]
#[serial_test::serial]
fn test_unknown_algorithm_is_rejected_before_crypto() {
    for alg in ["XX999", "none", "ES512"] {
        let mut protected_header = Header::new();
        protected_header.set("alg", json!(alg)).expect("pass");
        // Signature bytes of a nonsense length; an ECDSA or HMAC check would report something else.
        let signature = Signature::new(
            Header::new(),
            EncodedHeader::new(protected_header),
            vec![1, 2, 3],
        );
        for verifier in [
            Verifier::hmac(SignatureAlgorithm::HS256, test_util::hmac_key(1)).expect("pass"),
            Verifier::ecdsa(SignatureAlgorithm::ES256, None).expect("pass"),
            Verifier::rsa(SignatureAlgorithm::RS256, None).expect("pass"),
        ] {
            assert!(matches!(
                verifier.verify_signature(b"payload", &signature),
                Err(Error::UnsupportedAlgorithm(found)) if found == alg
            ));
        }
    }
}

#[test]
#[serial_test::serial]
fn test_algorithm_comes_from_protected_header_only() {
    let key = test_util::hmac_key(1);
    let signer = Signer::hmac(SignatureAlgorithm::HS256, key.clone()).expect("pass");
    let mut signature = signer.signature_for(b"hello").expect("pass");
    let verifier = Verifier::hmac(SignatureAlgorithm::HS256, key).expect("pass");

    // An "alg" in the public header is ignored.
    signature.public_header.set("alg", json!("HS512")).expect("pass");
    verifier.verify_signature(b"hello", &signature).expect("pass");

    // Without one in the protected header, there is no algorithm.
    signature.protected_header.header_mut().remove("alg");
    signature.public_header.set("alg", json!("HS256")).expect("pass");
    assert!(matches!(
        verifier.verify_signature(b"hello", &signature),
        Err(Error::MissingHeaderValue("alg"))
    ));
}

#[test]
#[serial_test::serial]
fn test_algorithm_mismatch() {
    let key = test_util::hmac_key(1);
    let message = Signer::hmac(SignatureAlgorithm::HS256, key.clone())
        .expect("pass")
        .sign_message(b"hello")
        .expect("pass");
    let verifier = Verifier::hmac(SignatureAlgorithm::HS512, key).expect("pass");
    assert!(matches!(
        verifier.verify_signature(message.payload(), &message.signatures()[0]),
        Err(Error::AlgorithmMismatch {
            expected: SignatureAlgorithm::HS512,
            found: SignatureAlgorithm::HS256
        })
    ));

    let mut protected_header = Header::new();
    protected_header.set("alg", json!("HS384")).expect("pass");
    let signer = Signer::hmac(SignatureAlgorithm::HS256, test_util::hmac_key(1))
        .expect("pass")
        .with_protected_header(protected_header);
    assert!(matches!(
        signer.sign_message(b"hello"),
        Err(Error::AlgorithmMismatch { .. })
    ));
}

#[test]
#[serial_test::serial]
fn test_signer_header_templates_are_attached() {
    let mut protected_header = Header::new();
    protected_header.set("typ", json!("JWT")).expect("pass");
    protected_header.set("kid", json!("hmac-key")).expect("pass");
    let mut public_header = Header::new();
    public_header.set("note", json!("unsigned")).expect("pass");
    let signer = Signer::hmac(SignatureAlgorithm::HS256, test_util::hmac_key(1))
        .expect("pass")
        .with_protected_header(protected_header)
        .with_public_header(public_header);

    let signature = signer.signature_for(b"hello").expect("pass");
    let protected_header = signature.protected_header.header();
    assert_eq!(protected_header.essential.alg_o.as_deref(), Some("HS256"));
    assert_eq!(protected_header.type_(), Some("JWT"));
    assert_eq!(signature.merged_header().key_id(), Some("hmac-key"));
    assert_eq!(signature.public_header.get("note"), Some(json!("unsigned")));
    // The template itself isn't modified.
    assert_eq!(signer.protected_header().essential.alg_o, None);
}

fn multi_signer_fixture() -> (MultiSigner, [Verifier; 3]) {
    let rsa_private_key = test_util::rsa_private_key_a();
    let ecdsa_private_key = EcdsaPrivateKey::from(test_util::p256_signing_key());
    let hmac_key = test_util::hmac_key(9);

    let mut rsa_kid = Header::new();
    rsa_kid.set("kid", json!("rsa")).expect("pass");
    let mut ecdsa_kid = Header::new();
    ecdsa_kid.set("kid", json!("ecdsa")).expect("pass");
    let mut hmac_kid = Header::new();
    hmac_kid.set("kid", json!("hmac")).expect("pass");

    let multi_signer = MultiSigner::new(vec![
        Signer::rsa(SignatureAlgorithm::RS256, Some(rsa_private_key.clone()))
            .expect("pass")
            .with_public_header(rsa_kid),
        Signer::ecdsa(SignatureAlgorithm::ES256, Some(ecdsa_private_key.clone()))
            .expect("pass")
            .with_protected_header(ecdsa_kid),
        Signer::hmac(SignatureAlgorithm::HS256, hmac_key.clone())
            .expect("pass")
            .with_public_header(hmac_kid),
    ]);
    let verifier_a = [
        Verifier::rsa(
            SignatureAlgorithm::RS256,
            Some(rsa_private_key.to_public_key()),
        )
        .expect("pass"),
        Verifier::ecdsa(
            SignatureAlgorithm::ES256,
            Some(ecdsa_private_key.public_key()),
        )
        .expect("pass"),
        Verifier::hmac(SignatureAlgorithm::HS256, hmac_key).expect("pass"),
    ];
    (multi_signer, verifier_a)
}

#[test]
#[serial_test::serial]
fn test_multi_signer_preserves_order_and_verifies_per_entry() {
    let (multi_signer, verifier_a) = multi_signer_fixture();
    let message = multi_signer.sign(b"multi payload").expect("pass");
    assert_eq!(message.signatures().len(), 3);
    let alg_v: Vec<_> = message
        .signatures()
        .iter()
        .map(|signature| signature.merged_header().algorithm().expect("pass"))
        .collect();
    assert_eq!(
        alg_v,
        vec![
            SignatureAlgorithm::RS256,
            SignatureAlgorithm::ES256,
            SignatureAlgorithm::HS256
        ]
    );

    for (i, verifier) in verifier_a.iter().enumerate() {
        let outcome_v = verifier.verify(&message);
        assert_eq!(outcome_v.len(), 3);
        for (j, outcome) in outcome_v.iter().enumerate() {
            if i == j {
                assert!(outcome.is_ok(), "entry {} should verify: {:?}", j, outcome);
            } else {
                assert!(matches!(outcome, Err(Error::AlgorithmMismatch { .. })));
            }
        }
        verifier
            .verify_with_policy(&message, VerificationPolicy::Any, &VerifyOptions::default())
            .expect("pass");
        assert!(verifier
            .verify_with_policy(&message, VerificationPolicy::All, &VerifyOptions::default())
            .is_err());
    }

    assert_eq!(message.lookup_signatures("ecdsa").len(), 1);
    assert_eq!(
        message.lookup_signatures("hmac")[0]
            .merged_header()
            .algorithm()
            .expect("pass"),
        SignatureAlgorithm::HS256
    );
    assert!(message.lookup_signatures("nobody").is_empty());
}

#[test]
#[serial_test::serial]
fn test_multi_signer_aborts_on_first_failure() {
    let multi_signer = MultiSigner::new(vec![
        Signer::hmac(SignatureAlgorithm::HS256, test_util::hmac_key(1)).expect("pass"),
        Signer::rsa(SignatureAlgorithm::RS256, None).expect("pass"),
        Signer::hmac(SignatureAlgorithm::HS384, Vec::new()).expect("pass"),
    ]);
    assert!(matches!(
        multi_signer.sign(b"payload"),
        Err(Error::MissingPrivateKey)
    ));

    assert!(matches!(
        MultiSigner::default().sign(b"payload"),
        Err(Error::SigningError(_))
    ));
}

#[test]
#[serial_test::serial]
fn test_verification_policy_requires_signatures() {
    let verifier = Verifier::hmac(SignatureAlgorithm::HS256, test_util::hmac_key(1)).expect("pass");
    let message = Message::new(b"payload".to_vec(), Vec::new());
    for policy in [VerificationPolicy::All, VerificationPolicy::Any] {
        assert!(matches!(
            verifier.verify_with_policy(&message, policy, &VerifyOptions::default()),
            Err(Error::InvalidSignatureCount(0))
        ));
    }
}

#[test]
#[serial_test::serial]
fn test_critical_headers() {
    let key = test_util::hmac_key(1);
    let verifier = Verifier::hmac(SignatureAlgorithm::HS256, key.clone()).expect("pass");
    let sign_with = |protected_header: Header| {
        Signer::hmac(SignatureAlgorithm::HS256, key.clone())
            .expect("pass")
            .with_protected_header(protected_header)
            .signature_for(b"hello")
            .expect("pass")
    };

    let mut protected_header = Header::new();
    protected_header.set("crit", json!(["exp"])).expect("pass");
    protected_header.set("exp", json!(1_700_000_000)).expect("pass");
    let signature = sign_with(protected_header);
    assert!(matches!(
        verifier.verify_signature(b"hello", &signature),
        Err(Error::UnsupportedCriticalHeader(name)) if name == "exp"
    ));
    let options = VerifyOptions::default().with_understood_critical_header("exp");
    verifier
        .verify_signature_with(b"hello", &signature, &options)
        .expect("pass");

    // Listed but absent.
    let mut protected_header = Header::new();
    protected_header.set("crit", json!(["exp"])).expect("pass");
    assert!(matches!(
        verifier.verify_signature_with(b"hello", &sign_with(protected_header), &options),
        Err(Error::InvalidHeaderValue { .. })
    ));

    // Registered names may not be listed.
    let mut protected_header = Header::new();
    protected_header.set("crit", json!(["kid"])).expect("pass");
    protected_header.set("kid", json!("k")).expect("pass");
    assert!(matches!(
        verifier.verify_signature(b"hello", &sign_with(protected_header)),
        Err(Error::InvalidHeaderValue { .. })
    ));

    // "crit" in the unprotected header isn't integrity-protected, so it's rejected even when the
    // extension is understood.
    let mut signature = sign_with(Header::new());
    signature.public_header.set("crit", json!(["exp"])).expect("pass");
    signature.public_header.set("exp", json!(1)).expect("pass");
    assert!(matches!(
        verifier.verify_signature_with(b"hello", &signature, &options),
        Err(Error::InvalidHeaderValue { name, .. }) if name == "crit"
    ));
    let message = Message::new(b"hello".to_vec(), vec![signature]);
    assert!(matches!(
        verifier.verify(&message).as_slice(),
        [Err(Error::InvalidHeaderValue { .. })]
    ));

    // Empty list.
    let mut protected_header = Header::new();
    protected_header.set("crit", json!([])).expect("pass");
    assert!(matches!(
        verifier.verify_signature(b"hello", &sign_with(protected_header)),
        Err(Error::InvalidHeaderValue { .. })
    ));
}

#[test]
#[serial_test::serial]
fn test_verify_bytes_returns_payload() {
    let key = test_util::hmac_key(4);
    let message = Signer::hmac(SignatureAlgorithm::HS256, key.clone())
        .expect("pass")
        .sign_message(b"the payload")
        .expect("pass");
    let jws_bytes = CompactSerializer.serialize(&message).expect("pass");

    let verifier = Verifier::hmac(SignatureAlgorithm::HS256, key).expect("pass");
    let payload = verifier
        .verify_bytes(&jws_bytes, VerificationPolicy::All, &VerifyOptions::default())
        .expect("pass");
    assert_eq!(payload, b"the payload");

    let other_verifier =
        Verifier::hmac(SignatureAlgorithm::HS256, test_util::hmac_key(5)).expect("pass");
    assert!(matches!(
        other_verifier.verify_bytes(&jws_bytes, VerificationPolicy::Any, &VerifyOptions::default()),
        Err(Error::InvalidSignature)
    ));
}

#[test]
fn test_signers_and_verifiers_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Signer>();
    assert_send_sync::<Verifier>();
    assert_send_sync::<MultiSigner>();
    assert_send_sync::<Message>();
    assert_send_sync::<CompactSerializer>();
    assert_send_sync::<jws::JSONSerializer>();
}
