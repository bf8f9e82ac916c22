use std::env;

use crate::errors::EchoError;

/// Environment key holding the bucket name for the stack. The deploying stack
/// sets it verbatim, so the key is lowercase.
pub const BUCKET_NAME_KEY: &str = "bucket_name";

/// Configuration for the bucket-aware variant, resolved from the process
/// environment once per invocation and passed explicitly into the handler.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bucket_name: String,
}

impl AppConfig {
    /// Resolve configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`EchoError::ConfigurationMissing`] if `bucket_name` is unset.
    /// There is no default; the invocation is expected to fail.
    pub fn from_env() -> Result<Self, EchoError> {
        Ok(Self {
            bucket_name: env::var(BUCKET_NAME_KEY)
                .map_err(|_| EchoError::ConfigurationMissing(BUCKET_NAME_KEY.to_string()))?,
        })
    }
}
