//! HTTP 请求方法

use reqwest::header::CONTENT_TYPE;
use serde::Serialize;

use crate::error::{ApiError, Result};
use crate::http_client::HttpUtils;

use super::HttpHeroesApi;

impl HttpHeroesApi {
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// 执行 GET 请求
    pub(crate) async fn get(&self, path: &str) -> Result<(u16, String)> {
        let url = self.url(path);
        HttpUtils::execute_request(self.client.get(&url), "GET", &url).await
    }

    /// 执行 POST 请求
    pub(crate) async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<(u16, String)> {
        let url = self.url(path);
        let body_json = serialize_body(body)?;
        log::debug!("Request Body: {body_json}");

        let request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body_json);
        HttpUtils::execute_request(request, "POST", &url).await
    }

    /// 执行 PUT 请求
    pub(crate) async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<(u16, String)> {
        let url = self.url(path);
        let body_json = serialize_body(body)?;
        log::debug!("Request Body: {body_json}");

        let request = self
            .client
            .put(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body_json);
        HttpUtils::execute_request(request, "PUT", &url).await
    }

    /// 执行 DELETE 请求
    pub(crate) async fn delete(&self, path: &str) -> Result<(u16, String)> {
        let url = self.url(path);
        HttpUtils::execute_request(self.client.delete(&url), "DELETE", &url).await
    }

    /// Accept only the operation's success codes.
    ///
    /// Other 2xx codes are `UnexpectedStatus`; everything else carries the
    /// parsed error body.
    pub(crate) fn expect_status(status: u16, response_text: &str, expected: &[u16]) -> Result<()> {
        if expected.contains(&status) {
            Ok(())
        } else if (200..300).contains(&status) {
            log::warn!("Unexpected success status {status}, expected one of {expected:?}");
            Err(ApiError::UnexpectedStatus { status })
        } else {
            Err(HttpUtils::status_error(status, response_text))
        }
    }
}

fn serialize_body<B: Serialize>(body: &B) -> Result<String> {
    serde_json::to_string(body).map_err(|e| ApiError::SerializationError {
        detail: e.to_string(),
    })
}
