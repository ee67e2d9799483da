//! Service metadata.
//!
//! Static name, description and version, published as a minimal OpenAPI
//! document at `/openapi.json`.

use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

pub const OPENAPI_PATH: &str = "/openapi.json";

/// Static description of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub version: &'static str,
}

pub const SERVICE_METADATA: ServiceMetadata = ServiceMetadata {
    title: "ScrapyRT-Compatible API",
    description: "HTTP API for running crawl spiders with ScrapyRT compatibility",
    version: env!("CARGO_PKG_VERSION"),
};

impl ServiceMetadata {
    /// OpenAPI document with this metadata and no declared paths.
    pub fn openapi(&self) -> Value {
        json!({
            "openapi": "3.1.0",
            "info": self,
            "paths": {},
        })
    }
}

pub(crate) async fn openapi_document() -> Json<Value> {
    Json(SERVICE_METADATA.openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_info() {
        let doc = SERVICE_METADATA.openapi();

        assert_eq!(doc["info"]["title"], "ScrapyRT-Compatible API");
        assert_eq!(doc["info"]["version"], env!("CARGO_PKG_VERSION"));
        assert!(doc["paths"].as_object().unwrap().is_empty());
    }
}
