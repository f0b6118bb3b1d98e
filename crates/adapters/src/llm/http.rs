// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON-over-HTTP plumbing shared by the provider backends.

use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::LlmError;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

pub(super) fn client() -> Result<reqwest::Client, LlmError> {
    let client = reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("vox/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// POST `body` as JSON and decode a 2xx response as `T`.
pub(super) async fn post_json<B, T>(
    request: reqwest::RequestBuilder,
    provider: &str,
    body: &B,
) -> Result<T, LlmError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let start = Instant::now();
    let response = request.json(body).send().await?;
    let status = response.status();
    let text = response.text().await?;
    tracing::debug!(
        provider,
        status = status.as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "chat response received"
    );

    if !status.is_success() {
        return Err(LlmError::Status { status: status.as_u16(), body: text });
    }
    if text.trim().is_empty() {
        return Err(LlmError::InvalidResponse("empty response body".to_string()));
    }
    serde_json::from_str(&text).map_err(|e| LlmError::InvalidResponse(e.to_string()))
}
