use std::fmt::{self, Display};

use http::uri::Authority;
use http::Method;
use urlsign_core::time::{format_date, truncate_to_seconds, DateTime};
use urlsign_core::{Error, Result};

use crate::constants::*;

/// Longest object name the storage service accepts, in bytes.
const MAX_OBJECT_NAME_LEN: usize = 1024;

/// UrlStyle decides where the bucket shows up in a signed url.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UrlStyle {
    /// `https://storage.googleapis.com/bucket/object`
    #[default]
    PathStyle,
    /// `https://bucket.storage.googleapis.com/object`
    VirtualHostedStyle,
    /// `https://cname.example.com/object`, where the host is bound to the bucket.
    BucketBoundHostname,
}

/// SignatureScope is the `date/region/service/goog4_request` part of a credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureScope {
    date: String,
    region: String,
    service: String,
}

impl SignatureScope {
    /// Build the scope for a request issued at `issued_at`.
    pub fn new(issued_at: DateTime, region: &str, service: &str) -> Self {
        Self {
            date: format_date(issued_at),
            region: region.to_string(),
            service: service.to_string(),
        }
    }

    /// Date in `YYYYMMDD`.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Region, `auto` for GCS.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Service, `storage` for GCS.
    pub fn service(&self) -> &str {
        &self.service
    }
}

impl Display for SignatureScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.date, self.region, self.service, GOOG4_REQUEST
        )
    }
}

/// SigningRequest is one request to sign: a `GET` on a single object.
///
/// All preconditions are checked at construction, so a built request can
/// always be signed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningRequest {
    method: Method,
    host: String,
    bucket: String,
    object_name: String,
    issued_at: DateTime,
    expires_in: u32,
    style: UrlStyle,
    query: Vec<(String, String)>,
}

impl SigningRequest {
    /// Create a new request for `object_name` in `bucket`, valid for
    /// `expires_in` seconds after `issued_at`.
    ///
    /// `issued_at` is truncated to whole seconds.
    pub fn new(
        bucket: impl Into<String>,
        object_name: impl Into<String>,
        expires_in: u32,
        issued_at: DateTime,
    ) -> Result<Self> {
        let bucket = bucket.into();
        let object_name = object_name.into();

        validate_bucket(&bucket)?;

        if object_name.is_empty() {
            return Err(Error::request_invalid("object name must not be empty"));
        }
        if object_name.len() > MAX_OBJECT_NAME_LEN {
            return Err(Error::request_invalid(format!(
                "object name is {} bytes, longer than {MAX_OBJECT_NAME_LEN}",
                object_name.len()
            )));
        }

        if !(1..=MAX_EXPIRES_SECS).contains(&expires_in) {
            return Err(Error::request_invalid(format!(
                "expires in {expires_in}s is out of range [1, {MAX_EXPIRES_SECS}]"
            )));
        }

        Ok(Self {
            method: Method::GET,
            host: DEFAULT_HOST.to_string(),
            bucket,
            object_name,
            issued_at: truncate_to_seconds(issued_at),
            expires_in,
            style: UrlStyle::default(),
            query: Vec::new(),
        })
    }

    /// Sign for another host, it must be a valid authority without userinfo.
    pub fn with_host(mut self, host: impl AsRef<str>) -> Result<Self> {
        self.host = parse_host(host.as_ref())?;
        Ok(self)
    }

    /// Set the url style.
    pub fn with_style(mut self, style: UrlStyle) -> Self {
        self.style = style;
        self
    }

    /// Add an extra query parameter to sign, like `response-content-disposition`.
    ///
    /// Keys starting with `X-Goog-` are reserved for the signing protocol.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(Error::request_invalid("query key must not be empty"));
        }
        if key.to_ascii_lowercase().starts_with(X_GOOG_PREFIX) {
            return Err(Error::request_invalid(format!(
                "query key {key} is reserved for signing"
            )));
        }

        self.query.push((key, value.into()));
        Ok(self)
    }

    /// Http method, always `GET`.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Configured host.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Bucket name.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Object name, not encoded.
    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    /// Signing time in whole seconds.
    pub fn issued_at(&self) -> DateTime {
        self.issued_at
    }

    /// Lifetime in seconds.
    pub fn expires_in(&self) -> u32 {
        self.expires_in
    }

    /// Url style.
    pub fn style(&self) -> UrlStyle {
        self.style
    }

    /// Extra query parameters, not encoded.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// The authority the url points at, which is also the signed `host` header.
    pub fn authority(&self) -> String {
        match self.style {
            UrlStyle::PathStyle | UrlStyle::BucketBoundHostname => self.host.clone(),
            UrlStyle::VirtualHostedStyle => format!("{}.{}", self.bucket, self.host),
        }
    }

    /// The resource path, not encoded.
    pub fn resource_path(&self) -> String {
        match self.style {
            UrlStyle::PathStyle => format!("/{}/{}", self.bucket, self.object_name),
            UrlStyle::VirtualHostedStyle | UrlStyle::BucketBoundHostname => {
                format!("/{}", self.object_name)
            }
        }
    }
}

/// Parse and normalize a host into the form used in urls and the `host` header.
pub(crate) fn parse_host(host: &str) -> Result<String> {
    let authority: Authority = host
        .trim()
        .parse()
        .map_err(|e| Error::request_invalid(format!("host {host:?} is not valid")).with_source(e))?;
    if authority.as_str().contains('@') {
        return Err(Error::request_invalid(format!(
            "host {host:?} must not carry userinfo"
        )));
    }
    Ok(authority.as_str().to_ascii_lowercase())
}

pub(crate) fn validate_bucket(bucket: &str) -> Result<()> {
    if bucket.is_empty() {
        return Err(Error::request_invalid("bucket must not be empty"));
    }

    let valid = bucket
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || matches!(b, b'-' | b'_' | b'.'));
    if !valid {
        return Err(Error::request_invalid(format!(
            "bucket {bucket:?} contains characters other than a-z, 0-9, '-', '_' and '.'"
        )));
    }

    Ok(())
}
