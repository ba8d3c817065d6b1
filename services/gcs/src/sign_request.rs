use log::debug;
use rsa::signature::{SignatureEncoding, Signer};
use urlsign_core::time::{format_iso8601, DateTime};
use urlsign_core::{Error, Result};

use crate::canonical::{CanonicalRequest, CanonicalRequestBuilder};
use crate::constants::*;
use crate::credential::SigningCredential;
use crate::request::{SignatureScope, SigningRequest};
use crate::url::{SignedUrl, UrlAssembler};

/// RequestSigner signs requests with GOOG4-RSA-SHA256.
///
/// Signing is a pure function of the credential and the request, the signer
/// itself only carries the scope's region and service.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    region: String,
    service: String,
}

impl Default for RequestSigner {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            service: DEFAULT_SERVICE.to_string(),
        }
    }
}

impl RequestSigner {
    /// Create a signer for region `auto` and service `storage`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the region used in the scope.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Set the service used in the scope.
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = service.into();
        self
    }

    /// The scope for a request issued at `issued_at`.
    pub fn scope(&self, issued_at: DateTime) -> SignatureScope {
        SignatureScope::new(issued_at, &self.region, &self.service)
    }

    /// Build the canonical request, including the synthesized `X-Goog-*` query.
    pub fn canonical_request(
        &self,
        credential: &SigningCredential,
        request: &SigningRequest,
    ) -> CanonicalRequest {
        let scope = self.scope(request.issued_at());

        CanonicalRequestBuilder::new(
            request.method().clone(),
            request.authority(),
            request.resource_path(),
        )
        .push_query(X_GOOG_ALGORITHM, GOOG4_RSA_SHA256)
        .push_query(
            X_GOOG_CREDENTIAL,
            format!("{}/{scope}", credential.identity()),
        )
        .push_query(X_GOOG_DATE, format_iso8601(request.issued_at()))
        .push_query(X_GOOG_EXPIRES, request.expires_in().to_string())
        .push_query(X_GOOG_SIGNED_HEADERS, SIGNED_HEADERS)
        .extend_query(request.query().iter().cloned())
        .build()
    }

    /// Build the string to sign for a canonical request.
    pub fn string_to_sign(&self, issued_at: DateTime, canonical: &CanonicalRequest) -> String {
        format!(
            "{GOOG4_RSA_SHA256}\n{}\n{}\n{}",
            format_iso8601(issued_at),
            self.scope(issued_at),
            canonical.hashed()
        )
    }

    /// Sign `string_to_sign` with RSASSA-PKCS1-v1_5 SHA-256, returning lowercase hex.
    pub fn sign(&self, credential: &SigningCredential, string_to_sign: &str) -> Result<String> {
        let signature = credential
            .signing_key()
            .try_sign(string_to_sign.as_bytes())
            .map_err(|e| Error::crypto_failure("failed to sign string to sign").with_source(e))?;

        Ok(hex::encode(signature.to_bytes()))
    }

    /// Sign the request and assemble the url.
    pub fn sign_request(
        &self,
        credential: &SigningCredential,
        request: &SigningRequest,
    ) -> Result<SignedUrl> {
        let canonical = self.canonical_request(credential, request);
        debug!("calculated canonical request: {canonical}");

        let string_to_sign = self.string_to_sign(request.issued_at(), &canonical);
        debug!("calculated string to sign: {string_to_sign}");

        let signature = self.sign(credential, &string_to_sign)?;
        Ok(UrlAssembler::assemble(&canonical, &signature))
    }
}
