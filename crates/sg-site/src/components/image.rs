//! Image with placeholder fallback

use leptos::*;
use sg_core::{ErrorSource, ImageState};

use crate::context::use_site_context;

/// `<img>` that swaps to the configured placeholder once loading fails.
/// The error state sticks until `src` changes.
#[component]
pub fn FallbackImage(
    #[prop(into)] src: MaybeSignal<String>,
    #[prop(into)] alt: MaybeSignal<String>,
    #[prop(optional, into)] class: String,
    #[prop(default = true)] lazy: bool,
) -> impl IntoView {
    let ctx = use_site_context();
    let placeholder = ctx.config.placeholder_image.clone();
    let state = create_rw_signal(ImageState::new(src.get_untracked()));

    create_effect(move |_| {
        let next = src.get();
        state.update(|s| s.set_src(next));
    });

    let on_error = move |_| {
        let changed = state.try_update(|s| s.on_error()).unwrap_or(false);
        if changed {
            let failed = state.with_untracked(|s| s.src().to_string());
            ctx.report(ErrorSource::Image, format!("failed to load {}", failed));
        }
    };

    view! {
        <img
            src=move || state.with(|s| s.display_src(&placeholder).to_string())
            alt=move || alt.get()
            class=class
            loading=if lazy { "lazy" } else { "eager" }
            decoding="async"
            data-errored=move || state.with(|s| s.is_errored()).then_some("true")
            on:load=move |_| state.update(|s| s.on_load())
            on:error=on_error
        />
    }
}
