pub use path_echo::api::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    path_echo::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
