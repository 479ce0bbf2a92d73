use serde::{Deserialize, Serialize};
use url::Url;

use super::error::{ClientConfigError, Result};

/// Identity provider parameters consumed by the browser client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthConfig {
    /// Identity provider tenant domain, e.g. `dev-abc123.us.auth0.com`.
    pub domain: String,
    pub client_id: String,
    /// Where the identity provider redirects after login.
    pub callback_url: String,
}

impl AuthConfig {
    pub fn new(
        domain: impl Into<String>,
        client_id: impl Into<String>,
        callback_url: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            client_id: client_id.into(),
            callback_url: callback_url.into(),
        }
    }
}

/// Static configuration record handed to the browser front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    pub api_endpoint: String,
    pub auth_config: AuthConfig,
}

impl ClientConfig {
    /// Creates and validates a client configuration.
    pub fn new(api_endpoint: impl Into<String>, auth_config: AuthConfig) -> Result<Self> {
        let config = Self {
            api_endpoint: api_endpoint.into(),
            auth_config,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that both URLs are absolute http(s) URLs and that the identity
    /// provider fields are present.
    pub fn validate(&self) -> Result<()> {
        parse_http_url("apiEndpoint", &self.api_endpoint)?;
        parse_http_url("callbackUrl", &self.auth_config.callback_url)?;

        if self.auth_config.domain.trim().is_empty() {
            return Err(ClientConfigError::EmptyField("domain"));
        }
        if self.auth_config.client_id.trim().is_empty() {
            return Err(ClientConfigError::EmptyField("clientId"));
        }
        Ok(())
    }

    /// Serialize config to a pretty JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ClientConfigError::Serialization(e.to_string()))
    }
}

/// Builds the invoke URL of an API Gateway stage.
///
/// Pattern: `https://<api_id>.execute-api.<region>.amazonaws.com/<stage>`
pub fn api_gateway_endpoint(api_id: &str, region: &str, stage: &str) -> String {
    format!("https://{api_id}.execute-api.{region}.amazonaws.com/{stage}")
}

fn parse_http_url(field: &'static str, value: &str) -> Result<Url> {
    let url = Url::parse(value).map_err(|e| ClientConfigError::InvalidUrl {
        field,
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ClientConfigError::InvalidUrl {
            field,
            reason: format!("unsupported scheme: {scheme}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_auth() -> AuthConfig {
        AuthConfig::new(
            "dev-example.us.auth0.com",
            "client-123",
            "http://localhost:3000/callback",
        )
    }

    #[test]
    fn test_api_gateway_endpoint() {
        assert_eq!(
            api_gateway_endpoint("gfbg12lqwg", "us-west-1", "dev"),
            "https://gfbg12lqwg.execute-api.us-west-1.amazonaws.com/dev"
        );
    }

    #[test]
    fn test_valid_config() {
        let endpoint = api_gateway_endpoint("abc123", "us-east-1", "dev");
        let config = ClientConfig::new(endpoint.clone(), sample_auth()).unwrap();

        assert_eq!(config.api_endpoint, endpoint);
        assert_eq!(config.auth_config.client_id, "client-123");
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let config = ClientConfig::new("https://api.example.com/dev", sample_auth()).unwrap();

        let json: serde_json::Value = serde_json::from_str(&config.to_json().unwrap()).unwrap();

        assert_eq!(json["apiEndpoint"], "https://api.example.com/dev");
        assert_eq!(json["authConfig"]["domain"], "dev-example.us.auth0.com");
        assert_eq!(json["authConfig"]["clientId"], "client-123");
        assert_eq!(
            json["authConfig"]["callbackUrl"],
            "http://localhost:3000/callback"
        );
    }

    #[test]
    fn test_rejects_relative_endpoint() {
        let result = ClientConfig::new("/dev", sample_auth());
        assert!(matches!(
            result,
            Err(ClientConfigError::InvalidUrl {
                field: "apiEndpoint",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_non_http_callback() {
        let auth = AuthConfig::new("dev-example.us.auth0.com", "client-123", "ftp://host/cb");
        let result = ClientConfig::new("https://api.example.com/dev", auth);
        assert!(matches!(
            result,
            Err(ClientConfigError::InvalidUrl {
                field: "callbackUrl",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_empty_domain() {
        let auth = AuthConfig::new("  ", "client-123", "http://localhost:3000/callback");
        let result = ClientConfig::new("https://api.example.com/dev", auth);
        assert_eq!(result, Err(ClientConfigError::EmptyField("domain")));
    }

    #[test]
    fn test_rejects_empty_client_id() {
        let auth = AuthConfig::new("dev-example.us.auth0.com", "", "http://localhost:3000/cb");
        let result = ClientConfig::new("https://api.example.com/dev", auth);
        assert_eq!(result, Err(ClientConfigError::EmptyField("clientId")));
    }
}
