//! Main application component

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use crate::components::*;
use crate::context::{install_global_handlers, provide_site_context};
use crate::pages::*;
use sg_core::config::EMBEDDED_CONFIG_ID;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let ctx = provide_site_context();
    let business = &*sg_core::fixtures::BUSINESS;

    let embedded_config = match ctx.config.to_embedded_json() {
        Ok(json) => Some(view! {
            <script type="application/json" id=EMBEDDED_CONFIG_ID inner_html=json></script>
        }),
        Err(e) => {
            tracing::warn!(error = %e, "site config not embedded");
            None
        }
    };

    create_effect(move |_| install_global_handlers(&ctx));

    view! {
        <Html lang="en"/>
        <Stylesheet id="leptos" href="/pkg/sg-site.css"/>
        <Link rel="manifest" href="/manifest.json"/>
        <Link rel="icon" href="/assets/icons/favicon.ico"/>
        <Meta name="theme-color" content=business.theme_color/>

        <Router>
            {embedded_config}
            <div class="min-h-screen flex flex-col bg-white">
                <SiteNav/>
                <main class="flex-grow">
                    <ErrorBoundary fallback=|errors| view! { <ErrorFallback errors=errors/> }>
                        <Routes>
                            <Route path="/" view=HomePage/>
                            <Route path="/about" view=AboutPage/>
                            <Route path="/services" view=ServicesPage/>
                            <Route path="/portfolio" view=PortfolioPage/>
                            <Route path="/contact" view=ContactPage/>
                            <Route path="/*any" view=NotFoundPage/>
                        </Routes>
                    </ErrorBoundary>
                </main>
                <Footer/>
                <NoScriptFallback/>
            </div>
        </Router>
    }
}
