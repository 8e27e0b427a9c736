// src/core/net.rs
//
// Blocking HTTPS GET. One call per load, no retries.

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::config::{consts::USER_AGENT, options::FetchOptions};
use crate::error::{Error, Result};

/// GET `opts.url` and return the body as text.
/// Any non-2xx status is an error.
pub fn http_get(opts: &FetchOptions) -> Result<String> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(opts.timeout)
        .build()?;

    debug!(url = %opts.url, timeout = ?opts.timeout, "Fetch: GET");
    let resp = client.get(&opts.url).send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Status { status: status.as_u16(), url: opts.url.clone() });
    }

    let body = resp.text()?;
    info!(url = %opts.url, bytes = body.len(), "Fetch: OK");
    Ok(body)
}
