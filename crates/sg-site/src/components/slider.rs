//! Auto-advancing sliders for the home page
//!
//! `use_autoplay` owns the interval timer. The timer is started once per
//! mounted slider and cancelled through a [`TimerGuard`] when the slider
//! is disposed, so navigating away never leaves a timer ticking.

use leptos::*;
use sg_core::fixtures::{featured_projects, TESTIMONIALS};
use sg_core::AutoPlay;

use super::{FallbackImage, TestimonialCard};
use crate::context::use_site_context;

#[cfg(feature = "hydrate")]
struct IntervalTimer(leptos::leptos_dom::helpers::IntervalHandle);

#[cfg(feature = "hydrate")]
impl sg_core::CancelTimer for IntervalTimer {
    fn cancel(&mut self) {
        self.0.clear();
    }
}

/// Slider state for `len` slides, ticking on the configured interval
pub fn use_autoplay(len: usize) -> RwSignal<AutoPlay> {
    let ctx = use_site_context();
    let mut autoplay = AutoPlay::with_timing(
        len,
        ctx.config.slider_interval(),
        ctx.config.slider_resume(),
    );
    autoplay.set_enabled(!prefers_reduced_motion());
    let state = create_rw_signal(autoplay);
    start_timer(state);
    state
}

#[cfg(feature = "hydrate")]
fn prefers_reduced_motion() -> bool {
    window()
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(not(feature = "hydrate"))]
fn prefers_reduced_motion() -> bool {
    false
}

#[cfg(feature = "hydrate")]
fn start_timer(state: RwSignal<AutoPlay>) {
    use sg_core::TimerGuard;

    create_effect(move |_| {
        let interval = state.with_untracked(|s| s.interval());
        let tick = move || {
            state.update(|s| {
                s.tick();
            })
        };
        match set_interval_with_handle(tick, interval) {
            Ok(handle) => {
                let mut guard = TimerGuard::new(IntervalTimer(handle));
                on_cleanup(move || guard.cancel());
            }
            Err(err) => tracing::warn!(error = ?err, "failed to start slider timer"),
        }
    });
}

#[cfg(not(feature = "hydrate"))]
fn start_timer(_state: RwSignal<AutoPlay>) {}

#[component]
fn SliderControls(state: RwSignal<AutoPlay>, #[prop(default = "slide")] noun: &'static str) -> impl IntoView {
    let len = state.with_untracked(|s| s.len());
    if len < 2 {
        return ().into_view();
    }

    view! {
        <button
            type="button"
            class="absolute left-4 top-1/2 -translate-y-1/2 w-10 h-10 rounded-full bg-white/80 hover:bg-white shadow"
            aria-label=format!("Previous {}", noun)
            on:click=move |_| { state.update(|s| { s.prev(); }); }
        >
            "‹"
        </button>
        <button
            type="button"
            class="absolute right-4 top-1/2 -translate-y-1/2 w-10 h-10 rounded-full bg-white/80 hover:bg-white shadow"
            aria-label=format!("Next {}", noun)
            on:click=move |_| { state.update(|s| { s.next(); }); }
        >
            "›"
        </button>
        <div class="absolute bottom-4 left-0 right-0 flex justify-center gap-2">
            {(0..len).map(|i| view! {
                <button
                    type="button"
                    class=move || if state.with(|s| s.index() == i) {
                        "w-3 h-3 rounded-full bg-amber-500"
                    } else {
                        "w-3 h-3 rounded-full bg-white/70"
                    }
                    aria-label=format!("Go to {} {}", noun, i + 1)
                    aria-current=move || state.with(|s| s.index() == i).then_some("true")
                    on:click=move |_| { state.update(|s| { s.go_to(i); }); }
                />
            }).collect_view()}
        </div>
    }
    .into_view()
}

/// Full-width slider over the featured projects
#[component]
pub fn HeroSlider() -> impl IntoView {
    let slides = featured_projects();
    let state = use_autoplay(slides.len());

    let rendered = slides
        .into_iter()
        .enumerate()
        .map(|(i, project)| {
            let active = move || state.with(|s| s.index() == i);
            view! {
                <div
                    class=move || if active() {
                        "absolute inset-0 transition-opacity duration-700 opacity-100"
                    } else {
                        "absolute inset-0 transition-opacity duration-700 opacity-0 pointer-events-none"
                    }
                    aria-hidden=move || (!active()).to_string()
                >
                    <FallbackImage
                        src=project.cover_image().unwrap_or_default()
                        alt=project.title
                        class="w-full h-full object-cover"
                        lazy={i != 0}
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-black/70 to-transparent"/>
                    <div class="absolute bottom-16 left-0 right-0 container mx-auto px-4 text-white">
                        <span class="text-sm uppercase tracking-wide text-amber-400">{project.category.label()}</span>
                        <h2 class="text-3xl md:text-4xl font-bold mt-2">{project.title}</h2>
                        <p class="mt-2 max-w-2xl text-gray-200">{project.description}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section
            class="relative h-[28rem] md:h-[36rem] overflow-hidden bg-gray-900"
            aria-roledescription="carousel"
            aria-label="Featured projects"
            on:mouseenter=move |_| state.update(|s| s.set_hovered(true))
            on:mouseleave=move |_| state.update(|s| s.set_hovered(false))
        >
            {rendered}
            <SliderControls state=state noun="project"/>
        </section>
    }
}

/// Rotating customer testimonials
#[component]
pub fn TestimonialSlider() -> impl IntoView {
    let state = use_autoplay(TESTIMONIALS.len());

    view! {
        <div
            class="relative max-w-3xl mx-auto pb-12"
            aria-roledescription="carousel"
            aria-label="Customer testimonials"
            on:mouseenter=move |_| state.update(|s| s.set_hovered(true))
            on:mouseleave=move |_| state.update(|s| s.set_hovered(false))
        >
            {move || {
                let index = state.with(|s| s.index());
                TESTIMONIALS
                    .get(index)
                    .map(|testimonial| view! { <TestimonialCard testimonial=testimonial/> })
            }}
            <SliderControls state=state noun="testimonial"/>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::SiteContext;
    use sg_core::report::MemoryReporter;
    use sg_core::SiteConfig;
    use std::sync::Arc;

    #[test]
    fn test_autoplay_uses_configured_timing() {
        let runtime = create_runtime();
        let config = SiteConfig {
            slider_interval_ms: 7000,
            ..SiteConfig::default()
        };
        provide_context(SiteContext::new(config, Arc::new(MemoryReporter::new())));

        let state = use_autoplay(3);
        state.with_untracked(|s| {
            assert_eq!(s.interval(), std::time::Duration::from_millis(7000));
            assert!(s.is_playing());
        });
        runtime.dispose();
    }

    #[test]
    fn test_single_slide_autoplay_stays_still() {
        let runtime = create_runtime();
        let state = use_autoplay(1);
        assert!(!state.with_untracked(|s| s.is_playing()));
        runtime.dispose();
    }
}
