use log::warn;
use urlsign_core::Context;

use crate::constants::*;
use crate::request::UrlStyle;

/// Config carries all the configuration for signing GCS urls.
#[derive(Clone, Debug)]
pub struct Config {
    /// Credential file path.
    pub credential_path: Option<String>,
    /// Credential content, raw JSON or base64 encoded JSON.
    pub credential_content: Option<String>,
    /// Disable reading credentials from environment variables.
    pub disable_env: bool,
    /// Bucket that signed urls point into.
    pub bucket: Option<String>,
    /// Host to sign for, `storage.googleapis.com` by default.
    pub host: Option<String>,
    /// Region used in the credential scope.
    pub region: Option<String>,
    /// Service used in the credential scope.
    pub service: Option<String>,
    /// How the bucket shows up in the url.
    pub url_style: UrlStyle,
    /// Lifetime in seconds used by `generate_default`.
    pub expires_in: u32,
    /// Raw expires value from the environment that failed to parse.
    pub(crate) invalid_expires: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credential_path: None,
            credential_content: None,
            disable_env: false,
            bucket: None,
            host: None,
            region: Some(DEFAULT_REGION.to_string()),
            service: Some(DEFAULT_SERVICE.to_string()),
            url_style: UrlStyle::default(),
            expires_in: DEFAULT_EXPIRES_SECS,
            invalid_expires: None,
        }
    }
}

impl Config {
    /// Create a new config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credential file path.
    pub fn with_credential_path(mut self, path: impl Into<String>) -> Self {
        self.credential_path = Some(path.into());
        self
    }

    /// Set credential content.
    pub fn with_credential_content(mut self, content: impl Into<String>) -> Self {
        self.credential_content = Some(content.into());
        self
    }

    /// Disable reading credentials from environment variables.
    pub fn with_disable_env(mut self) -> Self {
        self.disable_env = true;
        self
    }

    /// Set the bucket.
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Set the host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the service name.
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    /// Set the url style.
    pub fn with_url_style(mut self, style: UrlStyle) -> Self {
        self.url_style = style;
        self
    }

    /// Set the default lifetime in seconds.
    pub fn with_expires_in(mut self, secs: u32) -> Self {
        self.expires_in = secs;
        self.invalid_expires = None;
        self
    }

    /// Load config from environment variables.
    pub fn from_env(ctx: &Context) -> Self {
        let mut cfg = Self::default();

        if let Some(v) = ctx.env_var(URLSIGN_GCS_CREDENTIAL) {
            cfg.credential_content = Some(v);
        }

        if let Some(v) = ctx
            .env_var(URLSIGN_GCS_CREDENTIAL_PATH)
            .or_else(|| ctx.env_var(GOOGLE_APPLICATION_CREDENTIALS))
        {
            cfg.credential_path = Some(v);
        }

        if let Some(v) = ctx.env_var(URLSIGN_GCS_BUCKET) {
            cfg.bucket = Some(v);
        }

        if let Some(v) = ctx.env_var(URLSIGN_GCS_HOST) {
            cfg.host = Some(v);
        }

        if let Some(v) = ctx.env_var(URLSIGN_GCS_REGION) {
            cfg.region = Some(v);
        }

        if let Some(v) = ctx.env_var(URLSIGN_GCS_EXPIRES) {
            match v.trim().parse::<u32>() {
                Ok(secs) => cfg.expires_in = secs,
                Err(_) => {
                    warn!("{URLSIGN_GCS_EXPIRES} {v:?} is not a valid number of seconds");
                    cfg.invalid_expires = Some(v);
                }
            }
        }

        cfg
    }
}
