use log::debug;

use urlsign_core::{Context, ProvideCredential, Result};

use crate::credential::{ServiceAccount, SigningCredential};

/// StaticCredentialProvider loads the credential from content provided at construction time.
///
/// The content can be the service account JSON itself or its base64 encoding.
#[derive(Clone)]
pub struct StaticCredentialProvider {
    content: String,
}

impl std::fmt::Debug for StaticCredentialProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentialProvider")
            .field("content", &"<redacted>")
            .finish()
    }
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider from JSON or base64 JSON content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

#[async_trait::async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = SigningCredential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        debug!("loading credential from static content");

        let sa = ServiceAccount::from_content(&self.content).map_err(|err| {
            debug!("failed to parse credential from content: {err:?}");
            err
        })?;

        let cred = SigningCredential::from_service_account(&sa)?;
        debug!("loaded service account credential for {}", cred.identity());
        Ok(Some(cred))
    }
}
