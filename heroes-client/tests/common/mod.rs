//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use heroes_client::{ClientConfig, HttpHeroesApi};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_env {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: environment variable {} is not set", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Path prefix the fake serves under, so base-URL joining is exercised.
pub const API_PREFIX: &str = "/api";

/// A request as the fake server saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap_or(serde_json::Value::Null)
    }
}

#[derive(Default)]
struct FakeState {
    routes: Mutex<HashMap<(String, String), (u16, String)>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// In-process stand-in for the heroes service.
///
/// Every request is recorded; responses are scripted per `(method, path)`.
/// Unscripted routes answer `404 {"message":"not scripted"}`.
pub struct FakeHeroesServer {
    pub base_url: String,
    state: Arc<FakeState>,
}

impl FakeHeroesServer {
    pub async fn start() -> Self {
        let state = Arc::new(FakeState::default());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake server");
        let addr = listener.local_addr().expect("fake server address");

        let app = Router::new().fallback(handle).with_state(Arc::clone(&state));
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://{addr}{API_PREFIX}"),
            state,
        }
    }

    /// Script the response for `method path` (path relative to the prefix).
    pub fn respond(&self, method: &str, path: &str, status: u16, body: &str) {
        self.state.routes.lock().expect("routes lock").insert(
            (method.to_string(), format!("{API_PREFIX}{path}")),
            (status, body.to_string()),
        );
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().expect("requests lock").clone()
    }

    pub fn api(&self) -> HttpHeroesApi {
        HttpHeroesApi::new(&ClientConfig::with_base_url(&self.base_url)).expect("build client")
    }
}

async fn handle(
    State(state): State<Arc<FakeState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    state.requests.lock().expect("requests lock").push(RecordedRequest {
        method: method.to_string(),
        path: path.clone(),
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let scripted = state
        .routes
        .lock()
        .expect("routes lock")
        .get(&(method.to_string(), path))
        .cloned();

    let (status, body) =
        scripted.unwrap_or_else(|| (404, r#"{"message":"not scripted"}"#.to_string()));
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if status == StatusCode::NO_CONTENT {
        return status.into_response();
    }
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}
