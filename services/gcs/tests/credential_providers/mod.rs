mod env;
mod static_provider;

use std::collections::HashMap;
use std::io::Write;
use urlsign_core::{Context, StaticEnv};
use urlsign_file_read_tokio::TokioFileRead;

pub const SERVICE_ACCOUNT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/service_account.json"));

pub fn create_test_context() -> Context {
    create_test_context_with_env(HashMap::new())
}

pub fn create_test_context_with_env(envs: HashMap<String, String>) -> Context {
    let _ = env_logger::builder().is_test(true).try_init();

    Context::new()
        .with_file_read(TokioFileRead)
        .with_env(StaticEnv {
            home_dir: None,
            envs,
        })
}

pub fn write_temp_file(content: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().expect("temp file must be created");
    f.write_all(content.as_bytes())
        .expect("temp file must be written");
    f
}
