//! Load the signing credential through a custom provider chain with logging.

use async_trait::async_trait;
use log::info;
use urlsign_core::{Context, OsEnv, ProvideCredential, ProvideCredentialChain, Result};
use urlsign_file_read_tokio::TokioFileRead;
use urlsign_gcs::{
    Config, CredentialStore, EnvCredentialProvider, FileCredentialProvider, SignedUrlService,
    SigningCredential,
};

/// Wrapper that logs which source the credential came from.
#[derive(Debug)]
struct LoggingProvider<P> {
    name: String,
    inner: P,
}

impl<P> LoggingProvider<P> {
    fn new(name: impl Into<String>, provider: P) -> Self {
        Self {
            name: name.into(),
            inner: provider,
        }
    }
}

#[async_trait]
impl<P> ProvideCredential for LoggingProvider<P>
where
    P: ProvideCredential<Credential = SigningCredential>,
{
    type Credential = SigningCredential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        info!("loading credential from: {}", self.name);

        match self.inner.provide_credential(ctx).await {
            Ok(Some(cred)) => {
                info!("loaded {} from: {}", cred.identity(), self.name);
                Ok(Some(cred))
            }
            Ok(None) => {
                info!("no credential in: {}", self.name);
                Ok(None)
            }
            Err(e) => {
                info!("failed to load credential from {}: {e}", self.name);
                Err(e)
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let ctx = Context::new().with_file_read(TokioFileRead).with_env(OsEnv);

    let chain = ProvideCredentialChain::new()
        .push(LoggingProvider::new(
            "well known file",
            FileCredentialProvider::new("~/.config/urlsign/service_account.json"),
        ))
        .push(LoggingProvider::new("environment", EnvCredentialProvider::new()));

    let store = CredentialStore::load_with(&ctx, &chain).await?;
    let config = Config::from_env(&ctx);
    let service = SignedUrlService::new(&config, &store)?;

    println!("{}", service.generate_default("models/chair.glb")?);
    Ok(())
}
