//! Capability probe and lazy loader for the external mapping SDK.
//!
//! The premium base layers can only be registered when the rendering
//! environment is able to delegate tile-fetching to the provider's SDK and
//! the SDK itself has been loaded with a valid credential.

use async_trait::async_trait;
use tokio::sync::OnceCell;

use crate::{MapError, Result};

const SDK_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/js";

/// The provider-bridge capability: probe for its presence, then load the
/// SDK on demand.
#[async_trait]
pub trait ProviderBridge: Send + Sync {
    /// Whether the environment can delegate tiles to the external SDK.
    fn is_available(&self) -> bool;

    /// Loads the external SDK script. A successful load is memoized, so
    /// repeated calls resolve immediately; a failed load is reported to the
    /// caller and may be retried.
    async fn load_sdk(&self, api_key: &str) -> Result<()>;
}

/// Production bridge: fetches the SDK script over HTTP.
pub struct SdkBridge {
    endpoint: String,
    client: reqwest::Client,
    loaded: OnceCell<()>,
}

impl SdkBridge {
    pub fn new() -> Self {
        Self::with_endpoint(SDK_ENDPOINT)
    }

    /// Mostly for tests: point the bridge at a different script host.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
            loaded: OnceCell::new(),
        }
    }

    async fn fetch_script(&self, api_key: &str) -> Result<()> {
        let url = format!("{}?key={}", self.endpoint, api_key);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| MapError::SdkLoadFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MapError::SdkLoadFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let script = response
            .bytes()
            .await
            .map_err(|e| MapError::SdkLoadFailed(e.to_string()))?;
        log::info!("provider SDK loaded ({} bytes)", script.len());
        Ok(())
    }
}

impl Default for SdkBridge {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderBridge for SdkBridge {
    fn is_available(&self) -> bool {
        true
    }

    async fn load_sdk(&self, api_key: &str) -> Result<()> {
        self.loaded
            .get_or_try_init(|| self.fetch_script(api_key))
            .await?;
        Ok(())
    }
}

/// Bridge for environments without the mutant extension: the probe reports
/// the capability as absent, so premium layers are never registered.
pub struct NullBridge;

#[async_trait]
impl ProviderBridge for NullBridge {
    fn is_available(&self) -> bool {
        false
    }

    async fn load_sdk(&self, _api_key: &str) -> Result<()> {
        Err(MapError::SdkLoadFailed(
            "provider bridge not present".to_string(),
        ))
    }
}
