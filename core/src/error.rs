use std::fmt;
use thiserror::Error;

/// The error type for urlsign operations
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No credential source is configured, or the configured source can't be read
    CredentialMissing,

    /// Credential source exists but doesn't have the expected structure
    CredentialMalformed,

    /// Credential key material is not a usable private key
    CredentialInvalidKey,

    /// The signing primitive failed for a credential that loaded fine
    CryptoFailure,

    /// Request cannot be signed (empty object name, ttl out of range, etc.)
    RequestInvalid,

    /// Configuration error (missing fields, invalid values)
    ConfigInvalid,

    /// Unexpected errors (I/O, formatting, etc.)
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Check if this is a credential error.
    ///
    /// Credential errors only happen while loading and must stop the process
    /// from serving requests.
    pub fn is_credential_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::CredentialMissing
                | ErrorKind::CredentialMalformed
                | ErrorKind::CredentialInvalidKey
        )
    }

    /// Check if this is an error raised while signing a single request.
    pub fn is_signing_error(&self) -> bool {
        matches!(self.kind, ErrorKind::CryptoFailure | ErrorKind::RequestInvalid)
    }
}

// Convenience constructors
impl Error {
    /// Create a credential missing error
    pub fn credential_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialMissing, message)
    }

    /// Create a credential malformed error
    pub fn credential_malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialMalformed, message)
    }

    /// Create a credential invalid key error
    pub fn credential_invalid_key(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialInvalidKey, message)
    }

    /// Create a crypto failure error
    pub fn crypto_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CryptoFailure, message)
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::CredentialMissing => write!(f, "missing credentials"),
            ErrorKind::CredentialMalformed => write!(f, "malformed credentials"),
            ErrorKind::CredentialInvalidKey => write!(f, "invalid credential key"),
            ErrorKind::CryptoFailure => write!(f, "signing failed"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
