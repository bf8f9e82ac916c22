/// path-echo - a minimal AWS Lambda HTTP handler that echoes the request path.
///
/// This crate implements two Lambda variants sharing one routing core:
/// 1. `path-echo` answers every request with the matched path embedded in a
///    plain-text body
/// 2. `path-echo-bucket` additionally reports a bucket name resolved from the
///    process environment on each invocation
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution (API Gateway proxy events, v1 and v2)
/// - An explicitly constructed [`routing::Router`] with a single catch-all
///   route, passed through the handler rather than held as module state
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use serde_json::json;
///
/// #[tokio::main]
/// async fn main() -> Result<(), lambda_runtime::Error> {
///     // Set up structured logging
///     path_echo::setup_logging();
///
///     let event = lambda_runtime::LambdaEvent::new(
///         json!({ "rawPath": "/hello/world" }),
///         lambda_runtime::Context::default(),
///     );
///     let reply = path_echo::api::handler(event).await?;
///     println!("{reply}");
///     Ok(())
/// }
/// ```
// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod routing;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at the start of each
/// Lambda binary, before the runtime loop starts.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
