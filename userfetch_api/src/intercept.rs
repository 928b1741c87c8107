//! Outgoing-request interception: default headers and a single immediate retry.

use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Request, Response};

use crate::Error;

/// Name of the fixed header attached to every outgoing request.
pub const CUSTOM_HEADER_NAME: &str = "header-name";
/// Value of the fixed header attached to every outgoing request.
pub const CUSTOM_HEADER_VALUE: &str = "userfetch-demo";

/// Sits between the client and the transport. Ensures a `Content-Type`
/// header is present, attaches the fixed custom header, then sends the
/// request, retrying exactly once on failure with no delay. A non-success
/// status counts as a failure for retry purposes. If the retry fails too,
/// that failure is returned unchanged.
pub struct Interceptor;

impl Default for Interceptor {
    fn default() -> Self {
        Self::new()
    }
}

impl Interceptor {
    pub fn new() -> Self {
        Self
    }

    /// Runs `request` through the interception pipeline.
    ///
    /// Requests with a streaming body cannot be replayed; for those the
    /// first failure is returned without a retry.
    pub async fn execute(
        &self,
        http: &reqwest::Client,
        mut request: Request,
    ) -> Result<Response, Error> {
        let headers = request.headers_mut();
        if !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        headers.insert(
            HeaderName::from_static(CUSTOM_HEADER_NAME),
            HeaderValue::from_static(CUSTOM_HEADER_VALUE),
        );

        let replay = request.try_clone();
        match send_once(http, request).await {
            Ok(resp) => Ok(resp),
            Err(first) => match replay {
                Some(retry) => {
                    tracing::warn!("Request failed ({}), retrying once", first);
                    send_once(http, retry).await
                }
                None => Err(first),
            },
        }
    }
}

async fn send_once(http: &reqwest::Client, request: Request) -> Result<Response, Error> {
    let resp = http.execute(request).await.map_err(|e| {
        tracing::error!("Failed to reach endpoint: {}", e);
        Error::RequestFailed
    })?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;
        let snippet = truncate_body(&body);
        tracing::error!("Request failed with status {}: {}", status, snippet);
        return Err(Error::HttpStatus {
            status: status.as_u16(),
            body: snippet,
        });
    }

    Ok(resp)
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
