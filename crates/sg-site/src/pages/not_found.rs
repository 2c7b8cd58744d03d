//! 404 page

use leptos::*;
use leptos_meta::{Meta, Title};

#[cfg(feature = "ssr")]
fn set_not_found_status() {
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(axum::http::StatusCode::NOT_FOUND);
    }
}

#[cfg(not(feature = "ssr"))]
fn set_not_found_status() {}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    set_not_found_status();

    view! {
        <Title text="Page not found"/>
        <Meta name="robots" content="noindex"/>

        <section class="py-24">
            <div class="container mx-auto px-4 text-center max-w-xl">
                <div class="text-6xl font-bold text-amber-500 mb-4">"404"</div>
                <h1 class="text-3xl font-bold text-gray-900 mb-4">"Page not found"</h1>
                <p class="text-gray-600 mb-8">
                    "The page you are looking for has moved or never existed."
                </p>
                <div class="flex justify-center gap-4">
                    <a href="/" class="px-6 py-3 bg-amber-500 hover:bg-amber-600 text-white font-semibold rounded-lg">
                        "Home"
                    </a>
                    <a href="/portfolio" class="px-6 py-3 border border-gray-300 text-gray-700 font-semibold rounded-lg hover:bg-gray-100">
                        "Our work"
                    </a>
                </div>
            </div>
        </section>
    }
}
