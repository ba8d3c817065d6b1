use log::debug;

use urlsign_core::{Context, Error, ProvideCredential, Result};

use crate::credential::{ServiceAccount, SigningCredential};

/// FileCredentialProvider loads the credential from a service account file.
///
/// A path that is configured but can't be read is reported as
/// `CredentialMissing` instead of being skipped.
#[derive(Debug, Clone)]
pub struct FileCredentialProvider {
    path: String,
}

impl FileCredentialProvider {
    /// Create a new FileCredentialProvider for the given path, `~` is expanded.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl ProvideCredential for FileCredentialProvider {
    type Credential = SigningCredential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let path = ctx.expand_home_dir(&self.path).ok_or_else(|| {
            Error::credential_missing(format!(
                "can't expand credential path {}: home dir not found",
                self.path
            ))
        })?;

        debug!("loading credential from file {path}");
        let content = ctx.file_read(&path).await.map_err(|err| {
            debug!("load credential from path {path} failed: {err:?}");
            Error::credential_missing(format!("can't read credential file {path}")).with_source(err)
        })?;

        let sa = ServiceAccount::from_slice(&content)?;
        let cred = SigningCredential::from_service_account(&sa)?;
        debug!("loaded service account credential for {}", cred.identity());
        Ok(Some(cred))
    }
}
