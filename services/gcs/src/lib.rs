//! GOOG4-RSA-SHA256 signed urls for Google Cloud Storage.
//!
//! The signing pipeline runs locally: a service account key is loaded once at
//! startup and every url is signed in process, without calling any Google API.
//!
//! ```no_run
//! use urlsign_core::{Context, OsEnv};
//! use urlsign_file_read_tokio::TokioFileRead;
//! use urlsign_gcs::{Config, SignedUrlService};
//!
//! # async fn example() -> urlsign_core::Result<()> {
//! let ctx = Context::new().with_file_read(TokioFileRead).with_env(OsEnv);
//! let config = Config::from_env(&ctx)
//!     .with_bucket("ar-models")
//!     .with_credential_path("~/.config/urlsign/service_account.json");
//!
//! let service = SignedUrlService::from_config(&ctx, &config).await?;
//! let url = service.generate_default("models/chair.glb")?;
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod constants;
pub use constants::{DEFAULT_EXPIRES_SECS, MAX_EXPIRES_SECS};

mod config;
pub use config::Config;

mod credential;
pub use credential::{ServiceAccount, SigningCredential};

mod provide_credential;
pub use provide_credential::{
    DefaultCredentialProvider, EnvCredentialProvider, FileCredentialProvider,
    StaticCredentialProvider,
};

mod store;
pub use store::CredentialStore;

mod request;
pub use request::{SignatureScope, SigningRequest, UrlStyle};

mod canonical;
pub use canonical::{CanonicalRequest, CanonicalRequestBuilder};

mod sign_request;
pub use sign_request::RequestSigner;

mod url;
pub use url::{SignedUrl, SignedUrlParts, UrlAssembler};

mod service;
pub use service::SignedUrlService;
