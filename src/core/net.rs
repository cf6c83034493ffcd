// src/core/net.rs

// One blocking HTTP GET. No retry: one call per invocation.

use reqwest::blocking::Client;

use crate::config::FetchOptions;
use crate::error::FetchError;
use crate::progress::Progress;

/// Fetch `opts.url` and return the body as text.
///
/// Every failure is reported on `progress` with its own message before it
/// is returned, so callers only need to decide what "no content" means.
pub fn fetch_page(opts: &FetchOptions, progress: &mut dyn Progress) -> Result<String, FetchError> {
    logd!(url = %opts.url, timeout_ms = opts.timeout.as_millis() as u64, "GET");

    let result = http_get(opts);
    match &result {
        Ok(body) => {
            logd!(bytes = body.len(), "response body read");
            progress.log(&format!("Page fetched: {}", opts.url));
        }
        Err(e) => progress.error(&e.to_string()),
    }
    result
}

fn http_get(opts: &FetchOptions) -> Result<String, FetchError> {
    let client = Client::builder()
        .timeout(opts.timeout)
        .user_agent(opts.user_agent.as_str())
        .build()
        .map_err(|e| classify(opts, e))?;

    let resp = client
        .get(&opts.url)
        .send()
        .map_err(|e| classify(opts, e))?;

    let status = resp.status();
    if status.is_client_error() || status.is_server_error() {
        return Err(FetchError::Status { url: opts.url.clone(), status: status.as_u16() });
    }

    // The body read is still bounded by the client timeout.
    resp.text().map_err(|e| classify(opts, e))
}

/// Map a transport error onto the failure taxonomy. Timeout wins over
/// connect: a connect that timed out is reported as a timeout.
fn classify(opts: &FetchOptions, e: reqwest::Error) -> FetchError {
    let url = opts.url.clone();
    if e.is_timeout() {
        FetchError::Timeout { url, secs: opts.timeout.as_secs_f64() }
    } else if e.is_connect() {
        FetchError::Connect { url, source: e }
    } else if let Some(status) = e.status() {
        FetchError::Status { url, status: status.as_u16() }
    } else {
        FetchError::Other { url, source: e }
    }
}
