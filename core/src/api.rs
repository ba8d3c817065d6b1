use crate::{Context, Result};
use std::fmt::Debug;

/// ProvideCredential is the trait used to load a signing credential.
///
/// Credentials are loaded once at startup. A provider returns:
///
/// - `Ok(Some(cred))` when its source is configured and parses fine
/// - `Ok(None)` when its source is simply not configured
/// - `Err(e)` when its source is configured but broken
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this loader.
    type Credential: Send + Sync + Unpin + 'static;

    /// Load credential from current env.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}
