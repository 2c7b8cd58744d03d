//! Site configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::image::DEFAULT_PLACEHOLDER;
use crate::slider::{DEFAULT_INTERVAL, DEFAULT_RESUME_AFTER};
use crate::{CoreError, CoreResult};

/// Site configuration, read from the environment with development defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Public origin used for canonical links, sitemap and JSON-LD
    pub site_url: String,
    /// Static asset directory served under `/assets`
    pub assets_dir: String,
    /// Auto-play interval of the sliders
    pub slider_interval_ms: u64,
    /// Pause after user navigation before auto-play resumes
    pub slider_resume_ms: u64,
    /// Image shown when a gallery image fails to load
    pub placeholder_image: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: std::env::var("SITE_URL")
                .unwrap_or_else(|_| "https://www.skylinesigns.ae".to_string()),
            assets_dir: std::env::var("ASSETS_DIR").unwrap_or_else(|_| "assets".to_string()),
            slider_interval_ms: env_millis("SLIDER_INTERVAL_MS", DEFAULT_INTERVAL),
            slider_resume_ms: env_millis("SLIDER_RESUME_MS", DEFAULT_RESUME_AFTER),
            placeholder_image: std::env::var("PLACEHOLDER_IMAGE")
                .unwrap_or_else(|_| DEFAULT_PLACEHOLDER.to_string()),
        }
    }
}

fn env_millis(key: &str, default: Duration) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default.as_millis() as u64)
}

impl SiteConfig {
    pub fn validate(&self) -> CoreResult<()> {
        let url = url::Url::parse(&self.site_url)
            .map_err(|e| CoreError::Config(format!("SITE_URL '{}': {}", self.site_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CoreError::Config(format!(
                "SITE_URL must be http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.slider_interval_ms == 0 {
            return Err(CoreError::Config("SLIDER_INTERVAL_MS must be positive".to_string()));
        }
        if !self.placeholder_image.starts_with('/') {
            return Err(CoreError::Config(
                "PLACEHOLDER_IMAGE must be an absolute path".to_string(),
            ));
        }
        Ok(())
    }

    /// Origin without a trailing slash
    pub fn origin(&self) -> &str {
        self.site_url.trim_end_matches('/')
    }

    /// Absolute URL for a site path
    pub fn absolute(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.origin(), path.trim_start_matches('/'))
    }

    pub fn slider_interval(&self) -> Duration {
        Duration::from_millis(self.slider_interval_ms)
    }

    pub fn slider_resume(&self) -> Duration {
        Duration::from_millis(self.slider_resume_ms)
    }

    /// JSON for the `<script id="site-config">` block the server writes into
    /// every page. `<` is escaped so the text cannot close the script tag.
    pub fn to_embedded_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string(self)?.replace('<', "\\u003c"))
    }

    /// Read the configuration embedded by the server
    pub fn from_embedded_json(text: &str) -> CoreResult<Self> {
        let config: SiteConfig = serde_json::from_str(text.trim())?;
        config.validate()?;
        Ok(config)
    }
}

/// Element id of the embedded configuration block
pub const EMBEDDED_CONFIG_ID: &str = "site-config";

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        SiteConfig {
            site_url: "https://example.com/".to_string(),
            assets_dir: "assets".to_string(),
            slider_interval_ms: 5000,
            slider_resume_ms: 10000,
            placeholder_image: DEFAULT_PLACEHOLDER.to_string(),
        }
    }

    #[test]
    fn test_valid_config() {
        config().validate().unwrap();
    }

    #[test]
    fn test_rejects_bad_url() {
        let mut c = config();
        c.site_url = "not a url".to_string();
        assert!(matches!(c.validate(), Err(CoreError::Config(_))));
        c.site_url = "ftp://example.com".to_string();
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_interval() {
        let mut c = config();
        c.slider_interval_ms = 0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_absolute_urls() {
        let c = config();
        assert_eq!(c.origin(), "https://example.com");
        assert_eq!(c.absolute("/about"), "https://example.com/about");
        assert_eq!(c.absolute("/"), "https://example.com/");
        assert_eq!(c.absolute("https://cdn.example.com/x.png"), "https://cdn.example.com/x.png");
    }

    #[test]
    fn test_embedded_json_round_trip() {
        let mut c = config();
        c.site_url = "https://staging.example.com".to_string();
        c.slider_interval_ms = 3000;
        c.slider_resume_ms = 7000;
        c.placeholder_image = "/static/missing.png".to_string();

        let text = c.to_embedded_json().unwrap();
        let back = SiteConfig::from_embedded_json(&text).unwrap();
        assert_eq!(back.site_url, "https://staging.example.com");
        assert_eq!(back.slider_interval(), Duration::from_millis(3000));
        assert_eq!(back.slider_resume(), Duration::from_millis(7000));
        assert_eq!(back.placeholder_image, "/static/missing.png");
    }

    #[test]
    fn test_embedded_json_cannot_close_script() {
        let mut c = config();
        c.placeholder_image = "/x</script><b>".to_string();
        let text = c.to_embedded_json().unwrap();
        assert!(!text.contains('<'));
        let back = SiteConfig::from_embedded_json(&text).unwrap();
        assert_eq!(back.placeholder_image, "/x</script><b>");
    }

    #[test]
    fn test_embedded_json_rejects_invalid() {
        assert!(SiteConfig::from_embedded_json("{").is_err());
        let mut c = config();
        c.slider_interval_ms = 0;
        let text = serde_json::to_string(&c).unwrap();
        assert!(SiteConfig::from_embedded_json(&text).is_err());
    }

    #[test]
    fn test_durations() {
        let c = config();
        assert_eq!(c.slider_interval(), Duration::from_secs(5));
        assert_eq!(c.slider_resume(), Duration::from_secs(10));
    }
}
