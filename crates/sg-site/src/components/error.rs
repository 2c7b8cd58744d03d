//! Error boundary fallback

use leptos::*;
use sg_core::ErrorSource;

use crate::context::use_site_context;

/// Shown in place of the routed page when a render error reaches the
/// boundary. Each error is reported once, when the fallback mounts.
#[component]
pub fn ErrorFallback(errors: RwSignal<Errors>) -> impl IntoView {
    let ctx = use_site_context();
    errors.with_untracked(|errors| {
        for (_, error) in errors.iter() {
            ctx.report(ErrorSource::Render, error.to_string());
        }
    });

    view! {
        <section class="py-24 bg-gray-50" role="alert">
            <div class="container mx-auto px-4 text-center max-w-xl">
                <h1 class="text-3xl font-bold text-gray-900 mb-4">"Something went wrong"</h1>
                <p class="text-gray-600 mb-8">
                    "This part of the page could not be displayed. You can try again or head back to the home page."
                </p>
                <div class="flex justify-center gap-4">
                    <button
                        type="button"
                        class="px-6 py-3 bg-amber-500 hover:bg-amber-600 text-white font-semibold rounded-lg"
                        on:click=move |_| errors.set(Errors::default())
                    >
                        "Try again"
                    </button>
                    <a href="/" class="px-6 py-3 border border-gray-300 text-gray-700 font-semibold rounded-lg hover:bg-gray-100">
                        "Go home"
                    </a>
                </div>
            </div>
        </section>
    }
}
