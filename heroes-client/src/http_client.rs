//! Generic HTTP client tools
//!
//! Request execution, logging and response-body interpretation shared by every
//! heroes endpoint. Status-code policy (which codes count as success for which
//! operation) stays with the caller.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text.
    ///
    /// Any status is returned as `Ok`; only transport failures are errors.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `method_name` - request method name, for logs
    /// * `url` - target URL, for logs
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ApiError> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ApiError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ApiError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body.
    pub fn parse_json<T>(response_text: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            ApiError::ParseError {
                detail: e.to_string(),
            }
        })
    }

    /// Build the error for a non-success status from its (possibly non-JSON) body.
    pub fn status_error(status: u16, response_text: &str) -> ApiError {
        let body = serde_json::from_str::<Value>(response_text).unwrap_or(Value::Null);

        let message = body
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string);

        let errors = body
            .get("errors")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(render_error_item).collect())
            .unwrap_or_default();

        ApiError::HttpStatus {
            status,
            message,
            errors,
        }
    }

    /// The non-empty `message` field of a success body, if any.
    pub fn success_message(response_text: &str) -> Option<String> {
        serde_json::from_str::<Value>(response_text)
            .ok()?
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
    }
}

/// Render one entry of an `errors` array.
///
/// Validation middlewares send either plain strings or objects carrying the
/// text under `msg` or `message`.
fn render_error_item(item: &Value) -> String {
    match item {
        Value::String(s) => s.clone(),
        Value::Object(map) => map
            .get("msg")
            .or_else(|| map.get("message"))
            .and_then(Value::as_str)
            .map_or_else(|| item.to_string(), str::to_string),
        other => other.to_string(),
    }
}
