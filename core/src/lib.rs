//! Core components for generating signed URLs.
//!
//! This crate provides the foundational types and traits shared by the urlsign
//! service crates. Nothing in here knows about a specific signing protocol.
//!
//! ## Overview
//!
//! The crate is built around a few key concepts:
//!
//! - **Context**: A container that holds implementations for file reading and environment access
//! - **ProvideCredential**: The trait used to load signing credentials at startup
//! - **ProvideCredentialChain**: A fail-fast chain over several credential providers
//! - **Error**: The single error type, classified by [`ErrorKind`]
//!
//! ## Example
//!
//! ```no_run
//! use async_trait::async_trait;
//! use urlsign_core::{Context, OsEnv, ProvideCredential, ProvideCredentialChain, Result};
//!
//! #[derive(Debug, Clone)]
//! struct MyCredential {
//!     identity: String,
//! }
//!
//! #[derive(Debug)]
//! struct EnvLoader;
//!
//! #[async_trait]
//! impl ProvideCredential for EnvLoader {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(ctx
//!             .env_var("MY_IDENTITY")
//!             .map(|identity| MyCredential { identity }))
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new().with_env(OsEnv);
//! let chain = ProvideCredentialChain::new().push(EnvLoader);
//! let cred = chain.provide_credential(&ctx).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Hashing and encoding helpers
//! - [`time`]: Signing timestamp helpers
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, FileRead, NoopEnv, NoopFileRead, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::ProvideCredential;
mod chain;
pub use chain::ProvideCredentialChain;
