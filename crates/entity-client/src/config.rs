//! Client Configuration
//!
//! Where the REST API lives and which application namespace its
//! alert headers and update channels are keyed by.

use serde::Deserialize;

use crate::error::{ClientError, ClientResult};

/// Namespace the generated application registers everything under
pub const DEFAULT_NAMESPACE: &str = "jhipsterApp";

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

/// On-disk / embedded form; `apiBase` is required
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    api_base: String,
    #[serde(default = "default_namespace")]
    app_namespace: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Absolute http(s) origin the `api/...` paths are appended to, stored
    /// without a trailing slash. Relative bases are rejected: reqwest can
    /// only send absolute URLs, so a browser page passes its own origin.
    api_base: String,
    /// Application namespace (`<namespace>:<entity>Update`, `X-<namespace>-alert`)
    app_namespace: String,
}

impl ClientConfig {
    /// Config for the API at `api_base` with the default namespace
    pub fn new(api_base: impl Into<String>) -> ClientResult<Self> {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        let url = reqwest::Url::parse(&api_base)
            .map_err(|e| ClientError::Config(format!("apiBase {:?} is not an absolute URL: {}", api_base, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::Config(format!(
                "apiBase {:?} must use http or https",
                api_base
            )));
        }
        Ok(Self {
            api_base,
            app_namespace: default_namespace(),
        })
    }

    /// Parse a JSON config document; `appNamespace` is optional
    pub fn from_json(raw: &str) -> ClientResult<Self> {
        let raw: RawConfig = serde_json::from_str(raw).map_err(|e| ClientError::Config(e.to_string()))?;
        Ok(Self::new(raw.api_base)?.with_namespace(raw.app_namespace))
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.app_namespace = namespace.into();
        self
    }

    /// `api_base` without a trailing slash
    pub fn base(&self) -> &str {
        &self.api_base
    }

    pub fn namespace(&self) -> &str {
        &self.app_namespace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_the_generated_namespace_and_strips_trailing_slash() {
        let config = ClientConfig::new("http://localhost:8080/").unwrap();
        assert_eq!(config.base(), "http://localhost:8080");
        assert_eq!(config.namespace(), "jhipsterApp");
    }

    #[test]
    fn relative_or_empty_bases_are_rejected() {
        for base in ["", "/", "api", "/api/tasks"] {
            let err = ClientConfig::new(base).unwrap_err();
            assert!(matches!(err, ClientError::Config(_)), "{base:?} -> {err}");
        }
        assert!(ClientConfig::new("ftp://files.local").is_err());
    }

    #[test]
    fn from_json_defaults_the_namespace() {
        let config = ClientConfig::from_json(r#"{"apiBase": "http://localhost:8080/"}"#).unwrap();
        assert_eq!(config.base(), "http://localhost:8080");
        assert_eq!(config.namespace(), DEFAULT_NAMESPACE);

        let config = ClientConfig::from_json(r#"{"apiBase": "https://hr.local", "appNamespace": "hrApp"}"#).unwrap();
        assert_eq!(config.namespace(), "hrApp");
    }

    #[test]
    fn from_json_requires_an_absolute_api_base() {
        assert!(matches!(ClientConfig::from_json("{}"), Err(ClientError::Config(_))));
        assert!(matches!(
            ClientConfig::from_json(r#"{"apiBase": ""}"#),
            Err(ClientError::Config(_))
        ));
        assert!(matches!(ClientConfig::from_json("{apiBase"), Err(ClientError::Config(_))));
    }
}
