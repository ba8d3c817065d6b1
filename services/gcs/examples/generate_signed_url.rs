//! Print a signed url for an object.
//!
//! ```shell
//! URLSIGN_GCS_BUCKET=ar-models \
//! GOOGLE_APPLICATION_CREDENTIALS=~/sa.json \
//!     cargo run --example generate_signed_url -- models/chair.glb 300
//! ```
//!
//! The process refuses to start when the credential can't be loaded.

use anyhow::{Context as _, Result};
use log::info;
use urlsign_core::{Context, OsEnv};
use urlsign_file_read_tokio::TokioFileRead;
use urlsign_gcs::{Config, SignedUrlService};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let _ = dotenv::dotenv();

    let mut args = std::env::args().skip(1);
    let object = args.next().context("usage: generate_signed_url <object> [ttl]")?;

    let ctx = Context::new().with_file_read(TokioFileRead).with_env(OsEnv);
    let config = Config::from_env(&ctx);

    let service = SignedUrlService::from_config(&ctx, &config)
        .await
        .context("failed to start signed url service")?;
    info!(
        "signing as {} for bucket {}",
        service.credential().identity(),
        service.bucket()
    );

    let url = match args.next() {
        Some(ttl) => service.generate(&object, ttl.parse().context("ttl must be seconds")?)?,
        None => service.generate_default(&object)?,
    };

    println!("{url}");
    Ok(())
}
