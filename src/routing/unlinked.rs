//! Placeholder engine for builds without a crawl engine.
//!
//! Mounts the ScrapyRT crawl endpoint and answers every call with a
//! ScrapyRT-shaped error so clients fail loudly instead of hanging.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::routing::factory::{RouteFactory, RouteOptions};

pub const CRAWL_PATH: &str = "/crawl.json";

#[derive(Debug, Serialize)]
struct ErrorBody {
    status: &'static str,
    code: u16,
    message: &'static str,
}

/// Route factory used when no crawl engine is linked.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnlinkedEngine;

impl RouteFactory for UnlinkedEngine {
    fn routes(&self, options: &RouteOptions) -> Router {
        tracing::warn!(
            project_path = %options.project_path.display(),
            "No crawl engine linked; {} will answer 503",
            CRAWL_PATH
        );
        Router::new().route(CRAWL_PATH, get(unavailable).post(unavailable))
    }
}

async fn unavailable() -> Response {
    let status = StatusCode::SERVICE_UNAVAILABLE;
    let body = ErrorBody {
        status: "error",
        code: status.as_u16(),
        message: "No crawl engine is linked into this server",
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn options() -> RouteOptions {
        RouteOptions {
            project_path: ".".into(),
            timeout: None,
            additional_settings: Default::default(),
            debug: false,
            include_logs: true,
        }
    }

    #[tokio::test]
    async fn test_crawl_endpoint_reports_error() {
        let app = UnlinkedEngine.routes(&options());

        for method in ["GET", "POST"] {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method(method)
                        .uri("/crawl.json?spider_name=books&url=http://example.com")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

            let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
            let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(json["status"], "error");
            assert_eq!(json["code"], 503);
        }
    }
}
