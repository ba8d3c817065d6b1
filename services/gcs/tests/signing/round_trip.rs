use http::Method;
use pretty_assertions::assert_eq;
use rsa::pkcs1v15::Signature;
use rsa::signature::Verifier;
use test_case::test_case;
use urlsign_core::time::{parse_iso8601, parse_rfc3339};
use urlsign_core::ErrorKind;
use urlsign_gcs::{
    CanonicalRequestBuilder, RequestSigner, SignedUrl, SignedUrlService, MAX_EXPIRES_SECS,
};

use super::{issued_at, service_with_key, PKCS8_2048, PKCS8_4096};

/// Rebuild the string to sign from nothing but the url.
fn string_to_sign_from_url(url: &SignedUrl) -> (String, String) {
    let parts = url.parts().unwrap();
    let canonical =
        CanonicalRequestBuilder::from_encoded_path(Method::GET, parts.host.clone(), &parts.path)
            .unwrap()
            .extend_query(parts.query.clone())
            .build();

    // The url must carry the canonical query verbatim.
    let raw_query = url.as_str().split_once('?').unwrap().1;
    assert_eq!(
        raw_query,
        format!("{}&X-Goog-Signature={}", canonical.canonical_query(), parts.signature)
    );

    let issued_at = parse_iso8601(parts.query_value("X-Goog-Date").unwrap()).unwrap();
    let string_to_sign = RequestSigner::new().string_to_sign(issued_at, &canonical);
    (string_to_sign, parts.signature)
}

fn verify(service: &SignedUrlService, string_to_sign: &str, signature: &str) -> bool {
    let bytes = hex::decode(signature).unwrap();
    let signature = Signature::try_from(bytes.as_slice()).unwrap();
    service
        .credential()
        .verifying_key()
        .verify(string_to_sign.as_bytes(), &signature)
        .is_ok()
}

#[test_case("models/chair.glb" ; "plain")]
#[test_case("models/krzesło ogrodowe+v2 (final).glb" ; "needs encoding")]
#[test_case("a/b/c/d/e.usdz" ; "deep path")]
#[test_case("100% done?#.glb" ; "reserved characters")]
#[test_case("~tilde_under-score.v1" ; "unreserved characters")]
fn test_url_verifies(object: &str) {
    let service = service_with_key(PKCS8_2048);
    let url = service.generate(object, 300).unwrap();

    let (string_to_sign, signature) = string_to_sign_from_url(&url);
    assert!(verify(&service, &string_to_sign, &signature));

    let resigned = RequestSigner::new()
        .sign(service.credential(), &string_to_sign)
        .unwrap();
    assert_eq!(resigned, signature);
}

#[test]
fn test_tampered_url_does_not_verify() {
    let service = service_with_key(PKCS8_2048);
    let url = service.generate("models/chair.glb", 300).unwrap();
    let tampered = url.as_str().replace("chair.glb", "table.glb");
    let tampered_expiry = url.as_str().replace("X-Goog-Expires=300", "X-Goog-Expires=3000");

    let (_, signature) = string_to_sign_from_url(&url);
    for tampered in [tampered, tampered_expiry] {
        let tampered: SignedUrl = tampered.parse().unwrap();
        let (string_to_sign, _) = string_to_sign_from_url(&tampered);
        assert!(!verify(&service, &string_to_sign, &signature));
    }
}

#[test]
fn test_deterministic_with_pinned_clock() {
    let service = service_with_key(PKCS8_2048);
    let first = service.generate("models/chair.glb", 300).unwrap();
    let second = service.generate("models/chair.glb", 300).unwrap();
    assert_eq!(first, second);

    let clone = service.clone();
    assert_eq!(clone.generate("models/chair.glb", 300).unwrap(), first);
}

#[test]
fn test_sub_second_clock_is_truncated() {
    let service = service_with_key(PKCS8_2048);
    let at = service.generate_at("models/chair.glb", 300, issued_at()).unwrap();
    let later = service
        .generate_at(
            "models/chair.glb",
            300,
            parse_rfc3339("2024-01-01T00:00:00.999Z").unwrap(),
        )
        .unwrap();
    assert_eq!(at, later);

    let next_second = service
        .generate_at(
            "models/chair.glb",
            300,
            parse_rfc3339("2024-01-01T00:00:01Z").unwrap(),
        )
        .unwrap();
    assert_ne!(at, next_second);
}

#[test_case(1 ; "one second")]
#[test_case(60 ; "one minute")]
#[test_case(300 ; "five minutes")]
#[test_case(3600 ; "one hour")]
#[test_case(MAX_EXPIRES_SECS ; "seven days")]
fn test_expiry_fidelity(secs: u32) {
    let service = service_with_key(PKCS8_2048);
    let url = service.generate("models/chair.glb", secs).unwrap();
    let parts = url.parts().unwrap();
    assert_eq!(parts.query_value("X-Goog-Expires"), Some(secs.to_string().as_str()));
}

#[test_case(0 ; "zero")]
#[test_case(MAX_EXPIRES_SECS + 1 ; "above seven days")]
fn test_expiry_out_of_range(secs: u32) {
    let service = service_with_key(PKCS8_2048);
    let err = service.generate("models/chair.glb", secs).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert!(err.is_signing_error());
    assert!(!err.is_credential_error());
}

#[test_case(PKCS8_2048, 512 ; "2048 bit key")]
#[test_case(PKCS8_4096, 1024 ; "4096 bit key")]
fn test_signature_shape(pem: &str, len: usize) {
    let service = service_with_key(pem);
    let url = service.generate("models/chair.glb", 300).unwrap();
    let signature = url.parts().unwrap().signature;

    assert_eq!(signature.len(), len);
    assert!(signature
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
}

#[test]
fn test_concurrent_generate() {
    let service = service_with_key(PKCS8_2048);
    let expected = service.generate("models/chair.glb", 300).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = service.clone();
            std::thread::spawn(move || service.generate("models/chair.glb", 300).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
