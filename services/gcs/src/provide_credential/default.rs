use async_trait::async_trait;

use urlsign_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

use super::{EnvCredentialProvider, FileCredentialProvider, StaticCredentialProvider};
use crate::config::Config;
use crate::credential::SigningCredential;

/// DefaultCredentialProvider tries the configured credential sources in order.
///
/// 1. `credential_content` from config
/// 2. `credential_path` from config
/// 3. environment variables, unless `disable_env` is set
///
/// The first source that is present decides the outcome. A broken source
/// fails the whole load.
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<SigningCredential>,
}

impl DefaultCredentialProvider {
    /// Create a new DefaultCredentialProvider.
    pub fn new(config: &Config) -> Self {
        let mut chain = ProvideCredentialChain::new();

        if let Some(content) = &config.credential_content {
            chain = chain.push(StaticCredentialProvider::new(content.clone()));
        }

        if let Some(path) = &config.credential_path {
            chain = chain.push(FileCredentialProvider::new(path.clone()));
        }

        if !config.disable_env {
            chain = chain.push(EnvCredentialProvider::new());
        }

        Self { chain }
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = SigningCredential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}
