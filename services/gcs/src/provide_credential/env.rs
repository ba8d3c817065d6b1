use log::debug;

use urlsign_core::{Context, ProvideCredential, Result};

use super::{FileCredentialProvider, StaticCredentialProvider};
use crate::constants::*;
use crate::credential::SigningCredential;

/// EnvCredentialProvider loads the credential named by environment variables.
///
/// - `URLSIGN_GCS_CREDENTIAL`: inline JSON or base64 JSON
/// - `URLSIGN_GCS_CREDENTIAL_PATH`, then `GOOGLE_APPLICATION_CREDENTIALS`: file path
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = SigningCredential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        if let Some(content) = ctx.env_var(URLSIGN_GCS_CREDENTIAL) {
            debug!("loading credential from {URLSIGN_GCS_CREDENTIAL}");
            return StaticCredentialProvider::new(content)
                .provide_credential(ctx)
                .await;
        }

        let path = ctx
            .env_var(URLSIGN_GCS_CREDENTIAL_PATH)
            .or_else(|| ctx.env_var(GOOGLE_APPLICATION_CREDENTIALS));
        match path {
            Some(path) => FileCredentialProvider::new(path).provide_credential(ctx).await,
            None => Ok(None),
        }
    }
}
