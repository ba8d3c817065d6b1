use std::fmt::{self, Display};
use std::str::FromStr;

use http::Uri;
use urlsign_core::{Error, Result};

use crate::canonical::CanonicalRequest;
use crate::constants::*;

/// UrlAssembler joins a canonical request and its signature into the final url.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlAssembler;

impl UrlAssembler {
    /// Assemble `https://{host}{uri}?{query}&X-Goog-Signature={signature}`.
    ///
    /// The uri and query are taken verbatim from the canonical request so the
    /// url carries exactly what was signed.
    pub fn assemble(canonical: &CanonicalRequest, signature: &str) -> SignedUrl {
        let mut url = format!("https://{}{}", canonical.host(), canonical.canonical_uri());
        url.push('?');
        if !canonical.canonical_query().is_empty() {
            url.push_str(canonical.canonical_query());
            url.push('&');
        }
        url.push_str(X_GOOG_SIGNATURE);
        url.push('=');
        url.push_str(signature);

        SignedUrl(url)
    }
}

/// SignedUrl is a ready to hand out url.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignedUrl(String);

impl SignedUrl {
    /// Borrow the url.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the url.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Split the url back into the parts that were signed.
    pub fn parts(&self) -> Result<SignedUrlParts> {
        let uri: Uri = self
            .0
            .parse()
            .map_err(|e| Error::request_invalid("signed url is not a valid uri").with_source(e))?;

        let host = uri
            .authority()
            .map(|v| v.as_str().to_string())
            .ok_or_else(|| Error::request_invalid("signed url has no host"))?;

        let mut signature = None;
        let mut query = Vec::new();
        for (k, v) in form_urlencoded::parse(uri.query().unwrap_or_default().as_bytes()) {
            if k == X_GOOG_SIGNATURE {
                signature = Some(v.into_owned());
            } else {
                query.push((k.into_owned(), v.into_owned()));
            }
        }

        let signature =
            signature.ok_or_else(|| Error::request_invalid("signed url has no X-Goog-Signature"))?;

        Ok(SignedUrlParts {
            host,
            path: uri.path().to_string(),
            query,
            signature,
        })
    }
}

impl Display for SignedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SignedUrl {
    type Err = Error;

    /// Read back a url handed out earlier, for inspection with [`SignedUrl::parts`].
    fn from_str(s: &str) -> Result<Self> {
        let url = SignedUrl(s.to_string());
        url.parts()?;
        Ok(url)
    }
}

impl AsRef<str> for SignedUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<SignedUrl> for String {
    fn from(url: SignedUrl) -> Self {
        url.0
    }
}

/// The pieces of a signed url, as read back from the url itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedUrlParts {
    /// Host the url points at.
    pub host: String,
    /// Encoded resource path.
    pub path: String,
    /// Decoded query pairs, in url order, without the signature.
    pub query: Vec<(String, String)>,
    /// Hex encoded signature.
    pub signature: String,
}

impl SignedUrlParts {
    /// Look up a decoded query value.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}
