//! Lambda handlers - thin adapters over the routing core.
//!
//! This module handles:
//! - Path extraction from the invocation event (delegated to `parsing`)
//! - Route lookup through the catch-all table
//! - Reply shaping (delegated to `helpers`)

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::{helpers, parsing};
use crate::core::config::AppConfig;
use crate::routing::{self, Router};

pub use self::function_handler as handler;

/// Lambda handler for the plain echo variant.
///
/// Every path with at least one segment gets a 200 with the path echoed
/// back; the root path gets the default 404.
///
/// # Errors
///
/// Malformed events are answered with a 400 reply rather than a fault, so
/// this handler itself never fails the invocation.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let router = routing::service_router();
    Ok(respond(&router, &event.payload, None))
}

/// Lambda handler for the bucket-aware variant.
///
/// Configuration is resolved from the environment at the top of every
/// invocation and passed into the responder explicitly.
///
/// # Errors
///
/// Fails the invocation if `bucket_name` is not set in the environment.
/// There is no fallback; the platform reports the fault.
#[tracing::instrument(level = "info", skip(event))]
pub async fn bucket_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    let router = routing::service_router();
    Ok(respond(&router, &event.payload, Some(&config)))
}

fn respond(router: &Router, payload: &Value, config: Option<&AppConfig>) -> Value {
    let Some(path) = parsing::request_path(payload) else {
        error!("Request event carries no path");
        return helpers::err_response(400, "Missing path");
    };

    info!(raw_path = %path, "Request path");

    match router.match_path(path) {
        Some(matched) => helpers::ok_text(&render_body(matched.text, config)),
        None => helpers::not_found(),
    }
}

fn render_body(text: &str, config: Option<&AppConfig>) -> String {
    match config {
        Some(config) => format!(
            "Response inside of a Lambda on path {text}. The bucket name for this stack is {}",
            config.bucket_name
        ),
        None => format!("Response inside of a Lambda on path {text}"),
    }
}
