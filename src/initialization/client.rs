//! HTTP client initialization.

use std::time::Duration;

use crate::config::Config;
use crate::error_handling::InitializationError;
use reqwest::ClientBuilder;

/// Initializes the HTTP client used for feed requests.
///
/// Creates a `reqwest::Client` with no extra headers and no timeout. A
/// timeout and a User-Agent are applied only when the corresponding config
/// fields are set.
///
/// # Arguments
///
/// * `config` - Configuration containing the optional timeout and user-agent
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the client cannot be
/// built, for example when the user-agent is not a valid header value.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let mut builder = ClientBuilder::new();
    if let Some(seconds) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(seconds));
    }
    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent.clone());
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_with_defaults() {
        assert!(init_client(&Config::default()).is_ok());
    }

    #[test]
    fn test_init_client_with_timeout_and_user_agent() {
        let config = Config {
            timeout_seconds: Some(5),
            user_agent: Some("app_reviews_test/1.0".to_string()),
            ..Default::default()
        };
        assert!(init_client(&config).is_ok());
    }

    #[test]
    fn test_init_client_rejects_invalid_user_agent() {
        let config = Config {
            user_agent: Some("broken\nagent".to_string()),
            ..Default::default()
        };
        let result = init_client(&config);
        assert!(
            matches!(result, Err(InitializationError::HttpClientError(_))),
            "A newline in the user-agent should fail client construction"
        );
    }
}
