use std::sync::Arc;

use log::info;
use urlsign_core::{Context, Error, ProvideCredential, Result};

use crate::config::Config;
use crate::credential::SigningCredential;
use crate::provide_credential::DefaultCredentialProvider;

/// CredentialStore holds the signing credential for the lifetime of the process.
///
/// The credential is loaded once and never refreshed. Cloning the store only
/// clones the `Arc`.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    credential: Arc<SigningCredential>,
}

impl CredentialStore {
    /// Load the credential through the default provider chain built from `config`.
    pub async fn load(ctx: &Context, config: &Config) -> Result<Self> {
        Self::load_with(ctx, &DefaultCredentialProvider::new(config)).await
    }

    /// Load the credential through a custom provider.
    ///
    /// A provider returning nothing is reported as `CredentialMissing`.
    pub async fn load_with(
        ctx: &Context,
        provider: &impl ProvideCredential<Credential = SigningCredential>,
    ) -> Result<Self> {
        let credential = provider.provide_credential(ctx).await?.ok_or_else(|| {
            Error::credential_missing("no signing credential found in any configured source")
        })?;

        info!("signing credential loaded for {}", credential.identity());
        Ok(Self::from_credential(credential))
    }

    /// Wrap an already built credential.
    pub fn from_credential(credential: SigningCredential) -> Self {
        Self {
            credential: Arc::new(credential),
        }
    }

    /// The stored credential.
    pub fn credential(&self) -> &SigningCredential {
        &self.credential
    }

    /// A shared handle to the stored credential.
    pub fn shared(&self) -> Arc<SigningCredential> {
        self.credential.clone()
    }
}
