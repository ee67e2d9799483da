//! Shared helpers for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use axum::routing::get;
use axum::{Json, Router};
use scrapyrt_serve::cli::{self, RawArgs, COMMAND_NAME};
use scrapyrt_serve::{RouteFactory, RouteOptions};

/// Parse arguments as the binary would.
#[allow(dead_code)]
pub fn args(extra: &[&str]) -> RawArgs {
    let mut argv = vec![COMMAND_NAME];
    argv.extend_from_slice(extra);
    cli::parse_args(argv).unwrap()
}

/// Route factory that records every call and echoes its options back.
#[derive(Default)]
#[allow(dead_code)]
pub struct RecordingFactory {
    calls: AtomicUsize,
    last: Mutex<Option<RouteOptions>>,
}

#[allow(dead_code)]
impl RecordingFactory {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_options(&self) -> Option<RouteOptions> {
        self.last.lock().unwrap().clone()
    }
}

impl RouteFactory for RecordingFactory {
    fn routes(&self, options: &RouteOptions) -> Router {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(options.clone());

        let options = options.clone();
        Router::new().route(
            "/crawl.json",
            get(move || {
                let options = options.clone();
                async move {
                    Json(serde_json::json!({
                        "status": "ok",
                        "settings": options.additional_settings,
                        "include_logs": options.include_logs,
                    }))
                }
            }),
        )
    }
}
