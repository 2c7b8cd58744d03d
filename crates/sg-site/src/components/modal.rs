//! Project modal with image carousel
//!
//! Mounted only while a project is open. Mounting installs the keyboard
//! listener and locks page scroll; unmounting undoes both.

use leptos::*;
use sg_core::{Gallery, NavKey};

use super::FallbackImage;

#[cfg(feature = "hydrate")]
fn lock_page_scroll(locked: bool) {
    if let Some(body) = document().body() {
        let value = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", value);
    }
}

#[cfg(not(feature = "hydrate"))]
fn lock_page_scroll(_locked: bool) {}

#[component]
pub fn ProjectModal(gallery: RwSignal<Gallery>) -> impl IntoView {
    let keys = window_event_listener(ev::keydown, move |ev| {
        let key = NavKey::from_key(&ev.key());
        if key != NavKey::Other {
            ev.prevent_default();
            gallery.update(|g| {
                g.handle_key(key);
            });
        }
    });

    create_effect(move |_| lock_page_scroll(true));
    on_cleanup(move || {
        keys.remove();
        lock_page_scroll(false);
    });

    let title = move || gallery.with(|g| g.open_project().map(|p| p.title).unwrap_or_default());
    let description =
        move || gallery.with(|g| g.open_project().map(|p| p.description).unwrap_or_default());
    let meta = move || {
        gallery.with(|g| {
            g.open_project()
                .map(|p| {
                    let mut parts = vec![p.category.label().to_string()];
                    parts.extend(p.location.map(str::to_string));
                    parts.extend(p.client_type.map(str::to_string));
                    parts.push(p.completed_on.format("%B %Y").to_string());
                    parts.join(" · ")
                })
                .unwrap_or_default()
        })
    };
    let image = Signal::derive(move || {
        gallery.with(|g| g.current_image().unwrap_or_default().to_string())
    });
    let counter = move || {
        gallery.with(|g| format!("{} / {}", g.image_index() + 1, g.image_count()))
    };
    let many_images = move || gallery.with(|g| g.image_count() > 1);
    let image_count = move || gallery.with(|g| g.image_count());

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/80 p-4"
            role="dialog"
            aria-modal="true"
            aria-labelledby="project-modal-title"
            on:click=move |_| gallery.update(|g| g.close())
        >
            <div
                class="relative bg-white rounded-xl max-w-4xl w-full overflow-hidden"
                on:click=|ev| ev.stop_propagation()
            >
                <button
                    type="button"
                    class="absolute top-3 right-3 z-10 w-10 h-10 rounded-full bg-black/60 text-white"
                    aria-label="Close"
                    on:click=move |_| gallery.update(|g| g.close())
                >
                    "✕"
                </button>

                <div class="relative bg-gray-900 aspect-[16/10]">
                    <FallbackImage
                        src=image
                        alt=Signal::derive(move || title().to_string())
                        class="w-full h-full object-contain"
                        lazy=false
                    />
                    <Show when=many_images>
                        <button
                            type="button"
                            class="absolute left-3 top-1/2 -translate-y-1/2 w-10 h-10 rounded-full bg-white/80"
                            aria-label="Previous image"
                            on:click=move |_| { gallery.update(|g| { g.prev_image(); }); }
                        >
                            "‹"
                        </button>
                        <button
                            type="button"
                            class="absolute right-3 top-1/2 -translate-y-1/2 w-10 h-10 rounded-full bg-white/80"
                            aria-label="Next image"
                            on:click=move |_| { gallery.update(|g| { g.next_image(); }); }
                        >
                            "›"
                        </button>
                        <span class="absolute bottom-3 right-3 px-2 py-1 text-sm bg-black/60 text-white rounded" aria-live="polite">
                            {counter}
                        </span>
                    </Show>
                </div>

                <Show when=many_images>
                    <div class="flex justify-center gap-2 pt-4" role="tablist">
                        {move || (0..image_count()).map(|i| view! {
                            <button
                                type="button"
                                role="tab"
                                class=move || if gallery.with(|g| g.image_index() == i) {
                                    "w-3 h-3 rounded-full bg-amber-500"
                                } else {
                                    "w-3 h-3 rounded-full bg-gray-300"
                                }
                                aria-label=format!("Show image {}", i + 1)
                                on:click=move |_| { gallery.update(|g| { g.go_to_image(i); }); }
                            />
                        }).collect_view()}
                    </div>
                </Show>

                <div class="p-6">
                    <p class="text-sm text-amber-600">{meta}</p>
                    <h2 id="project-modal-title" class="text-2xl font-bold text-gray-900 mt-1">{title}</h2>
                    <p class="text-gray-600 mt-2">{description}</p>
                    <div class="flex justify-between mt-6">
                        <button
                            type="button"
                            class="text-gray-600 hover:text-gray-900"
                            on:click=move |_| { gallery.update(|g| { g.prev_project(); }); }
                        >
                            "← Previous project"
                        </button>
                        <button
                            type="button"
                            class="text-gray-600 hover:text-gray-900"
                            on:click=move |_| { gallery.update(|g| { g.next_project(); }); }
                        >
                            "Next project →"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
