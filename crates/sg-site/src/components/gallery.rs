//! Filterable project gallery

use leptos::*;
use leptos_router::use_query_map;
use sg_core::filter::available_filters;
use sg_core::fixtures::PROJECTS;
use sg_core::{CategoryFilter, ErrorSource, Gallery, ProjectCategory};

use super::{ProjectCard, ProjectModal};
use crate::context::use_site_context;

fn filter_label(filter: CategoryFilter<ProjectCategory>) -> &'static str {
    match filter {
        CategoryFilter::All => "All Projects",
        CategoryFilter::Only(category) => category.label(),
    }
}

/// Category tabs, project grid and the modal for the open project.
///
/// The initial filter comes from `?category=`; an unknown value falls back
/// to showing everything.
#[component]
pub fn ProjectGallery() -> impl IntoView {
    let ctx = use_site_context();
    let query = use_query_map();

    let initial = query.with_untracked(|q| {
        q.get("category")
            .and_then(|raw| raw.parse::<CategoryFilter<ProjectCategory>>().ok())
            .unwrap_or_default()
    });

    let gallery = create_rw_signal({
        let mut gallery = Gallery::new(PROJECTS.to_vec());
        gallery.set_filter(initial);
        gallery
    });

    let is_open = move || gallery.with(|g| g.is_open());

    let open_project = move |id: &'static str| {
        let result = gallery.try_update(|g| g.open(id).map(|_| ()));
        if let Some(Err(err)) = result {
            ctx.report(ErrorSource::Render, err.to_string());
        }
    };

    let tabs = available_filters(PROJECTS.as_slice())
        .into_iter()
        .map(|filter| {
            let selected = move || gallery.with(|g| g.filter() == filter);
            view! {
                <button
                    type="button"
                    role="tab"
                    class=move || if selected() {
                        "px-4 py-2 rounded-full bg-amber-500 text-white font-medium"
                    } else {
                        "px-4 py-2 rounded-full bg-gray-100 text-gray-700 hover:bg-gray-200"
                    }
                    aria-selected=move || selected().to_string()
                    on:click=move |_| gallery.update(|g| g.set_filter(filter))
                >
                    {filter_label(filter)}
                </button>
            }
        })
        .collect_view();

    view! {
        <div>
            <div class="flex flex-wrap justify-center gap-3 mb-10" role="tablist" aria-label="Filter projects">
                {tabs}
            </div>

            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                {move || {
                    let visible: Vec<&'static str> =
                        gallery.with(|g| g.visible().iter().map(|p| p.id).collect());
                    if visible.is_empty() {
                        return view! {
                            <p class="col-span-full text-center text-gray-500">
                                "No projects in this category yet."
                            </p>
                        }
                        .into_view();
                    }
                    visible
                        .into_iter()
                        .filter_map(|id| PROJECTS.iter().find(|p| p.id == id))
                        .map(|project| {
                            let open_project = open_project.clone();
                            view! { <ProjectCard project=project on_open=open_project/> }
                        })
                        .collect_view()
                }}
            </div>

            <Show when=is_open>
                <ProjectModal gallery=gallery/>
            </Show>
        </div>
    }
}
