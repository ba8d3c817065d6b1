use std::sync::Arc;

use log::debug;
use urlsign_core::time::{self, DateTime};
use urlsign_core::{Context, Error, Result};

use crate::config::Config;
use crate::constants::*;
use crate::credential::SigningCredential;
use crate::request::{parse_host, validate_bucket, SigningRequest, UrlStyle};
use crate::sign_request::RequestSigner;
use crate::store::CredentialStore;
use crate::url::SignedUrl;

/// SignedUrlService hands out signed GET urls for objects of one bucket.
///
/// Build it once at startup, then clone it into every place that needs urls.
/// `generate` is synchronous and does no I/O.
///
/// ```no_run
/// use urlsign_core::{Context, OsEnv};
/// use urlsign_file_read_tokio::TokioFileRead;
/// use urlsign_gcs::{Config, SignedUrlService};
///
/// # async fn example() -> urlsign_core::Result<()> {
/// let ctx = Context::new().with_file_read(TokioFileRead).with_env(OsEnv);
/// let config = Config::from_env(&ctx).with_bucket("ar-models");
/// let service = SignedUrlService::from_config(&ctx, &config).await?;
///
/// let url = service.generate("models/chair.glb", 300)?;
/// println!("{url}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SignedUrlService {
    credential: Arc<SigningCredential>,
    signer: RequestSigner,
    host: String,
    bucket: String,
    style: UrlStyle,
    default_expires: u32,
    time: Option<DateTime>,
}

impl SignedUrlService {
    /// Create a service from config and an already loaded credential store.
    pub fn new(config: &Config, store: &CredentialStore) -> Result<Self> {
        let bucket = config
            .bucket
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config_invalid("bucket is required"))?
            .to_string();
        validate_bucket(&bucket).map_err(|e| {
            Error::config_invalid(format!("bucket {bucket:?} is not valid")).with_source(e)
        })?;

        if config.url_style == UrlStyle::BucketBoundHostname && config.host.is_none() {
            return Err(Error::config_invalid(
                "bucket bound hostname style requires a host",
            ));
        }
        let host = parse_host(config.host.as_deref().unwrap_or(DEFAULT_HOST)).map_err(|e| {
            Error::config_invalid(format!("host {:?} is not valid", config.host)).with_source(e)
        })?;

        if let Some(v) = &config.invalid_expires {
            return Err(Error::config_invalid(format!(
                "default expires {v:?} is not a number of seconds"
            )));
        }
        if !(1..=MAX_EXPIRES_SECS).contains(&config.expires_in) {
            return Err(Error::config_invalid(format!(
                "default expires {}s is out of range [1, {MAX_EXPIRES_SECS}]",
                config.expires_in
            )));
        }

        let region = scope_part("region", config.region.as_deref().unwrap_or(DEFAULT_REGION))?;
        let service =
            scope_part("service", config.service.as_deref().unwrap_or(DEFAULT_SERVICE))?;
        let signer = RequestSigner::new()
            .with_region(region)
            .with_service(service);

        debug!("signed url service ready for bucket {bucket} on {host}");

        Ok(Self {
            credential: store.shared(),
            signer,
            host,
            bucket,
            style: config.url_style,
            default_expires: config.expires_in,
            time: None,
        })
    }

    /// Load the credential described by `config` and create the service.
    pub async fn from_config(ctx: &Context, config: &Config) -> Result<Self> {
        let store = CredentialStore::load(ctx, config).await?;
        Self::new(config, &store)
    }

    /// Pin the signing time instead of reading the clock.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Sign a GET url for `object_name` that stays valid for `expires_in` seconds.
    pub fn generate(&self, object_name: &str, expires_in: u32) -> Result<SignedUrl> {
        let now = self.time.unwrap_or_else(time::now);
        self.generate_at(object_name, expires_in, now)
    }

    /// Sign a GET url and hand it out as a plain string.
    pub fn generate_signed_url(&self, object_path: &str, expires_in: u32) -> Result<String> {
        self.generate(object_path, expires_in).map(String::from)
    }

    /// Sign a GET url for `object_name` with the configured default lifetime.
    pub fn generate_default(&self, object_name: &str) -> Result<SignedUrl> {
        self.generate(object_name, self.default_expires)
    }

    /// Sign a GET url for `object_name` as if it was issued at `issued_at`.
    pub fn generate_at(
        &self,
        object_name: &str,
        expires_in: u32,
        issued_at: DateTime,
    ) -> Result<SignedUrl> {
        let req = SigningRequest::new(self.bucket.as_str(), object_name, expires_in, issued_at)?
            .with_host(&self.host)?
            .with_style(self.style);

        self.signer.sign_request(&self.credential, &req)
    }

    /// Bucket urls point into.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Host urls point at.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Default lifetime in seconds.
    pub fn default_expires(&self) -> u32 {
        self.default_expires
    }

    /// The credential urls are signed with.
    pub fn credential(&self) -> &SigningCredential {
        &self.credential
    }
}

/// Region and service are joined with `/` into the credential scope.
fn scope_part<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() || value.contains('/') {
        return Err(Error::config_invalid(format!(
            "{name} {value:?} can't be used in the credential scope"
        )));
    }
    Ok(value)
}
