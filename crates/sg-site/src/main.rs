//! Skyline Signs Marketing Site
//!
//! A Leptos SSR marketing website.

#[cfg(feature = "ssr")]
mod serve {
    use axum::{middleware, Router};
    use leptos::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use sg_core::report::TracingReporter;
    use sg_core::{CoreError, SiteConfig};
    use sg_site::app::App;
    use sg_site::context::SiteContext;
    use sg_site::server::{redirect_legacy_paths, seo_router};
    use std::sync::Arc;
    use thiserror::Error;
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;
    use tracing::info;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    #[derive(Error, Debug)]
    pub enum ServerError {
        #[error("Configuration error: {0}")]
        Config(#[from] CoreError),

        #[error("Leptos configuration error: {0}")]
        Leptos(String),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),
    }

    pub fn init_tracing() {
        tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::new(
                std::env::var("RUST_LOG").unwrap_or_else(|_| "sg_site=info,tower_http=info".into()),
            ))
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    pub async fn run() -> Result<(), ServerError> {
        let config = SiteConfig::default();
        config.validate()?;
        sg_core::fixtures::validate()?;

        let conf = get_configuration(None)
            .await
            .map_err(|e| ServerError::Leptos(e.to_string()))?;
        let leptos_options = conf.leptos_options;
        let addr = leptos_options.site_addr;
        let routes = generate_route_list(App);

        let assets_dir = config.assets_dir.clone();
        let ctx = SiteContext::new(config, Arc::new(TracingReporter));
        let seo = seo_router(ctx.config.clone());

        let app = Router::new()
            .leptos_routes_with_context(
                &leptos_options,
                routes,
                move || provide_context(ctx.clone()),
                App,
            )
            .fallback(leptos_axum::file_and_error_handler(App))
            .with_state(leptos_options)
            .merge(seo)
            .nest_service("/assets", ServeDir::new(assets_dir))
            .layer(middleware::from_fn(redirect_legacy_paths))
            .layer(TraceLayer::new_for_http());

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        info!("Marketing site listening on http://{}", addr);
        axum::serve(listener, app.into_make_service()).await?;
        Ok(())
    }
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    serve::init_tracing();

    if let Err(e) = serve::run().await {
        tracing::error!("Server failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // The browser entry point is `sg_site::hydrate`.
}
