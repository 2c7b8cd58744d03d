//! Services page

use leptos::*;
use leptos_router::use_query_map;
use sg_core::filter::available_filters;
use sg_core::fixtures::{services_in, BUSINESS, SERVICES, SERVICE_CATEGORIES};
use sg_core::Service;
use sg_core::seo::jsonld;
use sg_core::{CategoryFilter, ServiceCategoryId};

use crate::components::*;
use crate::context::use_site_context;

fn category_title(filter: CategoryFilter<ServiceCategoryId>) -> &'static str {
    match filter {
        CategoryFilter::All => "All Services",
        CategoryFilter::Only(id) => SERVICE_CATEGORIES
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.title)
            .unwrap_or("Services"),
    }
}

fn visible_services(filter: CategoryFilter<ServiceCategoryId>) -> Vec<&'static Service> {
    match filter {
        CategoryFilter::All => SERVICES.iter().collect(),
        CategoryFilter::Only(id) => services_in(id),
    }
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    let ctx = use_site_context();
    let catalog = jsonld::service_catalog(&BUSINESS, &SERVICE_CATEGORIES, &SERVICES, &ctx.config);

    let query = use_query_map();
    let initial = query.with_untracked(|q| {
        q.get("category")
            .and_then(|raw| raw.parse::<CategoryFilter<ServiceCategoryId>>().ok())
            .unwrap_or_default()
    });
    let (filter, set_filter) = create_signal(initial);

    let tabs = available_filters(SERVICES.as_slice())
        .into_iter()
        .map(|option| {
            let selected = move || filter.get() == option;
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
                    on:click=move |_| set_filter.set(option)
                >
                    {category_title(option)}
                </button>
            }
        })
        .collect_view();

    let description = move || match filter.get() {
        CategoryFilter::All => None,
        CategoryFilter::Only(id) => SERVICE_CATEGORIES
            .iter()
            .find(|c| c.id == id)
            .map(|c| view! { <p class="text-center text-gray-600 max-w-2xl mx-auto mb-10">{c.description}</p> }),
    };

    view! {
        <PageSeo path="/services"/>
        <JsonLd value=catalog/>

        <div>
            <PageHeader
                title="Our Services"
                subtitle="Signage, construction and maintenance, delivered by one team."
            />

            <section class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="flex flex-wrap justify-center gap-3 mb-10" role="tablist" aria-label="Filter services">
                        {tabs}
                    </div>
                    {description}
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {move || visible_services(filter.get())
                            .into_iter()
                            .map(|service| view! { <ServiceCard service=service/> })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <CallToAction/>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_services_follow_filter() {
        assert_eq!(visible_services(CategoryFilter::All).len(), SERVICES.len());

        for category in SERVICE_CATEGORIES.iter() {
            let shown = visible_services(CategoryFilter::Only(category.id));
            assert!(!shown.is_empty(), "{} has no services", category.title);
            assert!(shown.iter().all(|s| s.category == category.id));
        }
    }

    #[test]
    fn test_category_title() {
        assert_eq!(category_title(CategoryFilter::All), "All Services");
        let first = &SERVICE_CATEGORIES[0];
        assert_eq!(category_title(CategoryFilter::Only(first.id)), first.title);
    }
}
