use std::fmt::{self, Display, Write};

use http::Method;
use percent_encoding::{percent_decode_str, utf8_percent_encode};
use urlsign_core::hash::hex_sha256;
use urlsign_core::{Error, Result};

use crate::constants::*;

/// CanonicalRequestBuilder collects the parts of a request that get signed.
///
/// Paths and query pairs are passed in decoded form; encoding happens once,
/// in [`CanonicalRequestBuilder::build`].
#[derive(Debug, Clone)]
pub struct CanonicalRequestBuilder {
    method: Method,
    host: String,
    path: String,
    query: Vec<(String, String)>,
}

impl CanonicalRequestBuilder {
    /// Create a builder for a decoded resource path.
    pub fn new(method: Method, host: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method,
            host: host.into(),
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Create a builder for a path taken from an already encoded url.
    ///
    /// The decoded path must be valid UTF-8.
    pub fn from_encoded_path(
        method: Method,
        host: impl Into<String>,
        path: &str,
    ) -> Result<Self> {
        let decoded = percent_decode_str(path).decode_utf8().map_err(|e| {
            Error::request_invalid(format!("path {path:?} does not decode to utf-8"))
                .with_source(e)
        })?;
        Ok(Self::new(method, host, decoded.into_owned()))
    }

    /// Add a decoded query pair.
    pub fn push_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Add decoded query pairs.
    pub fn extend_query<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Build the canonical request.
    pub fn build(&self) -> CanonicalRequest {
        CanonicalRequest {
            method: self.method.clone(),
            host: self.host.trim().to_string(),
            canonical_uri: utf8_percent_encode(&self.path, &GOOG_URI_ENCODE_SET).to_string(),
            canonical_query: canonicalize_query(&self.query),
        }
    }
}

/// Encode every pair, drop the signature, and sort by encoded key then value.
fn canonicalize_query(query: &[(String, String)]) -> String {
    let mut pairs: Vec<(String, String)> = query
        .iter()
        .filter(|(k, _)| !k.eq_ignore_ascii_case(X_GOOG_SIGNATURE))
        .map(|(k, v)| {
            (
                utf8_percent_encode(k, &GOOG_QUERY_ENCODE_SET).to_string(),
                utf8_percent_encode(v, &GOOG_QUERY_ENCODE_SET).to_string(),
            )
        })
        .collect();
    pairs.sort();

    let mut s = String::new();
    for (idx, (k, v)) in pairs.iter().enumerate() {
        if idx > 0 {
            s.push('&');
        }
        // Writing into a String never fails.
        let _ = write!(s, "{k}={v}");
    }
    s
}

/// CanonicalRequest is the exact byte string that gets hashed and signed.
///
/// ```text
/// GET
/// <canonical uri>
/// <canonical query>
/// host:<host>
///
/// host
/// UNSIGNED-PAYLOAD
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRequest {
    method: Method,
    host: String,
    canonical_uri: String,
    canonical_query: String,
}

impl CanonicalRequest {
    /// The signed host.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The encoded resource path.
    pub fn canonical_uri(&self) -> &str {
        &self.canonical_uri
    }

    /// The encoded and sorted query, without `X-Goog-Signature`.
    pub fn canonical_query(&self) -> &str {
        &self.canonical_query
    }

    /// Hex encoded SHA-256 of the canonical request.
    pub fn hashed(&self) -> String {
        hex_sha256(self.to_string().as_bytes())
    }
}

impl Display for CanonicalRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.method)?;
        writeln!(f, "{}", self.canonical_uri)?;
        writeln!(f, "{}", self.canonical_query)?;
        writeln!(f, "host:{}", self.host)?;
        writeln!(f)?;
        writeln!(f, "{SIGNED_HEADERS}")?;
        write!(f, "{UNSIGNED_PAYLOAD}")
    }
}
