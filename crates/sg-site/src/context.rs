//! Site-wide context shared by every component

use leptos::*;
use sg_core::report::TracingReporter;
use sg_core::{ErrorReport, ErrorReporter, ErrorSource, SiteConfig};
use std::sync::Arc;

#[derive(Clone)]
pub struct SiteContext {
    pub config: Arc<SiteConfig>,
    pub reporter: Arc<dyn ErrorReporter>,
}

impl SiteContext {
    pub fn new(config: SiteConfig, reporter: Arc<dyn ErrorReporter>) -> Self {
        Self {
            config: Arc::new(config),
            reporter,
        }
    }

    pub fn report(&self, source: ErrorSource, message: impl Into<String>) {
        let mut report = ErrorReport::new(source, message);
        if let Some(path) = current_path() {
            report = report.at(path);
        }
        self.reporter.report(report);
    }
}

impl Default for SiteContext {
    fn default() -> Self {
        Self::new(SiteConfig::default(), Arc::new(TracingReporter))
    }
}

impl std::fmt::Debug for SiteContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn current_path() -> Option<String> {
    use_context::<leptos_router::RouterContext>().map(|router| router.pathname().get_untracked())
}

/// Configuration written into the page by the server, if present
#[cfg(feature = "hydrate")]
fn embedded_config() -> Option<SiteConfig> {
    let text = document()
        .get_element_by_id(sg_core::config::EMBEDDED_CONFIG_ID)?
        .text_content()?;
    match SiteConfig::from_embedded_json(&text) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring embedded site config");
            None
        }
    }
}

#[cfg(not(feature = "hydrate"))]
fn embedded_config() -> Option<SiteConfig> {
    None
}

/// Context provided by the server. In the browser the server's
/// configuration is read back from the page, falling back to defaults.
pub fn provide_site_context() -> SiteContext {
    let ctx = use_context::<SiteContext>().unwrap_or_else(|| {
        let config = embedded_config().unwrap_or_default();
        SiteContext::new(config, Arc::new(TracingReporter))
    });
    provide_context(ctx.clone());
    ctx
}

pub fn use_site_context() -> SiteContext {
    use_context::<SiteContext>().unwrap_or_default()
}

/// Log `window.onerror` and unhandled promise rejections through the
/// reporter. Listeners live as long as the app.
#[cfg(feature = "hydrate")]
pub fn install_global_handlers(ctx: &SiteContext) {
    use wasm_bindgen::JsCast;

    let on_error = ctx.clone();
    let _ = window_event_listener_untyped("error", move |ev| {
        let message = ev
            .dyn_ref::<web_sys::ErrorEvent>()
            .map(|e| e.message())
            .unwrap_or_else(|| "unknown script error".to_string());
        on_error.report(ErrorSource::Global, message);
    });

    let on_rejection = ctx.clone();
    let _ = window_event_listener_untyped("unhandledrejection", move |ev| {
        let message = ev
            .dyn_ref::<web_sys::PromiseRejectionEvent>()
            .map(|e| format!("{:?}", e.reason()))
            .unwrap_or_else(|| "unhandled rejection".to_string());
        on_rejection.report(ErrorSource::UnhandledRejection, message);
    });
}

#[cfg(not(feature = "hydrate"))]
pub fn install_global_handlers(_ctx: &SiteContext) {}

#[cfg(test)]
mod tests {
    use super::*;
    use sg_core::report::MemoryReporter;

    #[test]
    fn test_report_goes_to_injected_reporter() {
        let runtime = create_runtime();
        let reporter = MemoryReporter::new();
        let ctx = SiteContext::new(SiteConfig::default(), Arc::new(reporter.clone()));

        ctx.report(ErrorSource::Image, "failed to load /a.jpg");
        ctx.report(ErrorSource::Render, "boom");

        assert_eq!(reporter.count(ErrorSource::Image), 1);
        assert_eq!(reporter.count(ErrorSource::Render), 1);
        // No router outside the app, so no location
        assert!(reporter.reports().iter().all(|r| r.location.is_none()));
        runtime.dispose();
    }

    #[test]
    fn test_provided_context_is_shared() {
        let runtime = create_runtime();
        let reporter = MemoryReporter::new();
        provide_context(SiteContext::new(SiteConfig::default(), Arc::new(reporter.clone())));

        let ctx = use_site_context();
        ctx.report(ErrorSource::Global, "script error");
        assert_eq!(reporter.count(ErrorSource::Global), 1);
        runtime.dispose();
    }

    #[test]
    fn test_server_context_wins_over_defaults() {
        let runtime = create_runtime();
        let config = SiteConfig {
            site_url: "https://staging.example.com".to_string(),
            slider_interval_ms: 9000,
            ..SiteConfig::default()
        };
        provide_context(SiteContext::new(config, Arc::new(MemoryReporter::new())));

        let ctx = provide_site_context();
        assert_eq!(ctx.config.site_url, "https://staging.example.com");
        assert_eq!(ctx.config.slider_interval_ms, 9000);
        runtime.dispose();
    }

    #[test]
    fn test_no_embedded_config_uses_defaults() {
        let runtime = create_runtime();
        let ctx = provide_site_context();
        let defaults = SiteConfig::default();
        assert_eq!(ctx.config.site_url, defaults.site_url);
        assert_eq!(ctx.config.slider_interval_ms, defaults.slider_interval_ms);
        assert!(use_context::<SiteContext>().is_some());
        runtime.dispose();
    }
}
