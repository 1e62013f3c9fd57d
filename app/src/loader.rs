//! Configuration loading.
//!
//! Two deployment variants: the default fetches the document from a fixed
//! path at startup; the `bundled-config` feature compiles it into the bundle
//! instead. Either way the load is one-shot with no retry, and any failure is
//! fatal to the site render.

use vitrina_core::{CoreError, SiteConfig};

/// Fixed path of the fetched configuration document.
pub const CONFIG_PATH: &str = "/site.json";

cfg_if::cfg_if! {
    if #[cfg(feature = "bundled-config")] {
        /// Parse the statically embedded configuration document.
        pub async fn load() -> Result<SiteConfig, CoreError> {
            SiteConfig::from_json(include_str!("../assets/site.json"))
        }
    } else {
        /// Fetch and parse the configuration document from [`CONFIG_PATH`].
        pub async fn load() -> Result<SiteConfig, CoreError> {
            let response = gloo_net::http::Request::get(CONFIG_PATH)
                .send()
                .await
                .map_err(|e| {
                    CoreError::config(format!("site configuration request failed: {e}"))
                })?;
            if !response.ok() {
                return Err(CoreError::config(format!(
                    "site configuration request returned status {}",
                    response.status()
                )));
            }
            let body = response.text().await.map_err(|e| {
                CoreError::config(format!("site configuration body unreadable: {e}"))
            })?;
            SiteConfig::from_json(&body)
        }
    }
}
