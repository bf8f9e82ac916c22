use thiserror::Error;

#[derive(Debug, Error)]
pub enum EchoError {
    #[error("Required environment variable is not set: {0}")]
    ConfigurationMissing(String),
}
