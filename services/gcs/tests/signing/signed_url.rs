// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use anyhow::Result;
use http::StatusCode;
use log::{debug, warn};
use reqwest::Client;
use std::env;
use urlsign_core::{Context, OsEnv};
use urlsign_file_read_tokio::TokioFileRead;
use urlsign_gcs::{Config, SignedUrlService};

async fn init_service() -> Option<SignedUrlService> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("URLSIGN_GCS_TEST").unwrap_or_default() != "on" {
        return None;
    }

    let ctx = Context::new().with_file_read(TokioFileRead).with_env(OsEnv);
    let config = Config::from_env(&ctx);
    assert!(
        config.bucket.is_some(),
        "env URLSIGN_GCS_BUCKET must be set"
    );

    let service = SignedUrlService::from_config(&ctx, &config)
        .await
        .expect("signed url service must be built");
    Some(service)
}

#[tokio::test]
async fn test_get_object_with_signed_url() -> Result<()> {
    let Some(service) = init_service().await else {
        warn!("URLSIGN_GCS_TEST is not set, skipped");
        return Ok(());
    };

    let url = service.generate("not_exist_file", 3600)?;
    debug!("signed url: {url}");

    let resp = Client::new().get(url.as_str()).send().await?;
    let code = resp.status();
    debug!("got response: {resp:?}");
    debug!("got body: {}", resp.text().await?);
    assert_eq!(StatusCode::NOT_FOUND, code);
    Ok(())
}

#[tokio::test]
async fn test_get_object_with_encoded_name() -> Result<()> {
    let Some(service) = init_service().await else {
        warn!("URLSIGN_GCS_TEST is not set, skipped");
        return Ok(());
    };

    let url = service.generate("not exist/krzesło+ (1).glb", 60)?;
    debug!("signed url: {url}");

    let resp = Client::new().get(url.as_str()).send().await?;
    assert_eq!(StatusCode::NOT_FOUND, resp.status());
    Ok(())
}

#[tokio::test]
async fn test_tampered_signed_url_is_rejected() -> Result<()> {
    let Some(service) = init_service().await else {
        warn!("URLSIGN_GCS_TEST is not set, skipped");
        return Ok(());
    };

    let url = service.generate("not_exist_file", 3600)?;
    let tampered = url
        .as_str()
        .replace("X-Goog-Expires=3600", "X-Goog-Expires=7200");

    let resp = Client::new().get(tampered).send().await?;
    assert_eq!(StatusCode::FORBIDDEN, resp.status());
    Ok(())
}
