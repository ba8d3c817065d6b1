use pretty_assertions::assert_eq;
use std::collections::HashMap;
use urlsign_core::hash::base64_encode;
use urlsign_core::{ErrorKind, ProvideCredential};
use urlsign_gcs::EnvCredentialProvider;

use super::{create_test_context_with_env, write_temp_file, SERVICE_ACCOUNT};

#[tokio::test]
async fn test_env_provider_inline_credential() {
    let ctx = create_test_context_with_env(HashMap::from([(
        "URLSIGN_GCS_CREDENTIAL".to_string(),
        base64_encode(SERVICE_ACCOUNT.as_bytes()),
    )]));

    let cred = EnvCredentialProvider::new()
        .provide_credential(&ctx)
        .await
        .unwrap()
        .expect("credential must be loaded");
    assert_eq!(cred.identity(), "svc@example.iam");
}

#[tokio::test]
async fn test_env_provider_application_credentials() {
    let f = write_temp_file(SERVICE_ACCOUNT);
    let ctx = create_test_context_with_env(HashMap::from([(
        "GOOGLE_APPLICATION_CREDENTIALS".to_string(),
        f.path().to_string_lossy().to_string(),
    )]));

    let cred = EnvCredentialProvider::new()
        .provide_credential(&ctx)
        .await
        .unwrap()
        .expect("credential must be loaded");
    assert_eq!(cred.identity(), "svc@example.iam");
}

#[tokio::test]
async fn test_env_provider_prefers_own_path() {
    let f = write_temp_file(SERVICE_ACCOUNT);
    let ctx = create_test_context_with_env(HashMap::from([
        (
            "URLSIGN_GCS_CREDENTIAL_PATH".to_string(),
            f.path().to_string_lossy().to_string(),
        ),
        (
            "GOOGLE_APPLICATION_CREDENTIALS".to_string(),
            "/definitely/not/here/sa.json".to_string(),
        ),
    ]));

    let cred = EnvCredentialProvider::new()
        .provide_credential(&ctx)
        .await
        .unwrap();
    assert!(cred.is_some());
}

#[tokio::test]
async fn test_env_provider_nothing_set() {
    let ctx = create_test_context_with_env(HashMap::new());
    let cred = EnvCredentialProvider::new()
        .provide_credential(&ctx)
        .await
        .unwrap();
    assert!(cred.is_none());
}

#[tokio::test]
async fn test_env_provider_unreadable_path() {
    let ctx = create_test_context_with_env(HashMap::from([(
        "GOOGLE_APPLICATION_CREDENTIALS".to_string(),
        "/definitely/not/here/sa.json".to_string(),
    )]));

    let err = EnvCredentialProvider::new()
        .provide_credential(&ctx)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CredentialMissing);
}
