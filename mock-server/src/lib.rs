use std::collections::BTreeMap;

use axum::{
    body::Bytes,
    extract::Path,
    http::{HeaderMap, Method, StatusCode},
    routing::{any, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
    pub author: String,
}

impl Default for Message {
    fn default() -> Self {
        Self {
            message: "Hello World!".to_string(),
            author: "John Doe".to_string(),
        }
    }
}

/// What `/echo` saw of the incoming request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Echo {
    pub method: String,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/messages", get(get_message).post(create_message))
        .route("/status/{code}", any(status))
        .route("/echo", any(echo))
        .route("/garbage", get(garbage))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn get_message() -> Json<Message> {
    Json(Message::default())
}

async fn create_message(Json(input): Json<Message>) -> (StatusCode, Json<Message>) {
    (StatusCode::CREATED, Json(input))
}

async fn status(Path(code): Path<u16>) -> StatusCode {
    match StatusCode::from_u16(code) {
        Ok(status) => {
            tracing::debug!(code, "replying with requested status");
            status
        }
        Err(_) => StatusCode::BAD_REQUEST,
    }
}

async fn echo(method: Method, headers: HeaderMap, body: Bytes) -> Json<Echo> {
    let headers = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();
    Json(Echo {
        method: method.as_str().to_string(),
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

async fn garbage() -> &'static str {
    "this is not json"
}
