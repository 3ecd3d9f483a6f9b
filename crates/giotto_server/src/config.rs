//! Configuration for the gateway process.

use derive_builder::Builder;
use derive_getters::Getters;
use giotto_error::{ConfigError, ConfigErrorKind};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_UPSTREAM_BASE_URL: &str = "https://api-inference.huggingface.co";
const DEFAULT_HISTORY_PAGE_SIZE: i64 = 10;

/// Configuration for the gateway server.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Builder)]
#[builder(setter(into))]
pub struct GatewayConfig {
    /// Socket address the server binds
    #[builder(default = "DEFAULT_BIND_ADDR.to_string()")]
    bind_addr: String,
    /// Base URL of the upstream inference provider
    #[builder(default = "DEFAULT_UPSTREAM_BASE_URL.to_string()")]
    upstream_base_url: String,
    /// Process-wide fallback credential for callers without their own
    #[builder(default)]
    fallback_api_key: Option<String>,
    /// Default page size for history queries
    #[builder(default = "DEFAULT_HISTORY_PAGE_SIZE")]
    history_page_size: i64,
}

impl GatewayConfig {
    /// Creates a new builder for `GatewayConfig`.
    pub fn builder() -> GatewayConfigBuilder {
        GatewayConfigBuilder::default()
    }

    /// Create config from environment variables
    ///
    /// Reads:
    /// - `GIOTTO_BIND_ADDR` (default: "127.0.0.1:5000")
    /// - `GIOTTO_UPSTREAM_BASE_URL` (default: the Hugging Face Inference API)
    /// - `HUGGINGFACE_API_KEY` (optional fallback credential)
    /// - `GIOTTO_HISTORY_PAGE_SIZE` (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr =
            std::env::var("GIOTTO_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let upstream_base_url = std::env::var("GIOTTO_UPSTREAM_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE_URL.to_string());
        let fallback_api_key = std::env::var("HUGGINGFACE_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());
        let history_page_size = match std::env::var("GIOTTO_HISTORY_PAGE_SIZE") {
            Ok(raw) => raw.parse::<i64>().map_err(|_| {
                ConfigError::new(ConfigErrorKind::InvalidVar {
                    var: "GIOTTO_HISTORY_PAGE_SIZE".to_string(),
                    message: format!("expected an integer, got '{}'", raw),
                })
            })?,
            Err(_) => DEFAULT_HISTORY_PAGE_SIZE,
        };

        Ok(GatewayConfigBuilder::default()
            .bind_addr(bind_addr)
            .upstream_base_url(upstream_base_url)
            .fallback_api_key(fallback_api_key)
            .history_page_size(history_page_size)
            .build()
            .expect("Valid GatewayConfig"))
    }
}
