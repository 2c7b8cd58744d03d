//! Home page

use leptos::*;
use leptos_router::use_navigate;
use sg_core::fixtures::{featured_projects, BUSINESS, SERVICES, SERVICE_CATEGORIES};
use sg_core::seo::jsonld;

use crate::components::*;
use crate::context::use_site_context;

const SELLING_POINTS: &[SellingPoint] = &[
    SellingPoint {
        marker: "🏭",
        heading: "In-house workshop",
        detail: "Cutting, bending, welding and LED assembly under one roof keeps quality and lead times in our hands.",
    },
    SellingPoint {
        marker: "📐",
        heading: "Design to handover",
        detail: "Site survey, shop drawings, permits and installation handled by one project manager.",
    },
    SellingPoint {
        marker: "🛡️",
        heading: "Warranty and maintenance",
        detail: "Every installation is backed by a written warranty and an optional maintenance plan.",
    },
    SellingPoint {
        marker: "⏱️",
        heading: "On schedule",
        detail: "Night and weekend installations so your shop never has to close.",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_site_context();
    let config = &ctx.config;

    let organization = jsonld::organization(&BUSINESS, config);
    let local_business = jsonld::local_business(&BUSINESS, config);
    let website = jsonld::website(&BUSINESS, config);
    let navigate = use_navigate();

    // One representative service per category
    let highlights: Vec<_> = SERVICE_CATEGORIES
        .iter()
        .filter_map(|category| SERVICES.iter().find(|s| s.category == category.id))
        .collect();

    view! {
        <PageSeo path="/"/>
        <JsonLd value=organization/>
        <JsonLd value=local_business/>
        <JsonLd value=website/>

        <div>
            <HeroSlider/>
            <Hero/>

            // Services
            <section class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">"What We Do"</h2>
                        <p class="text-lg text-gray-600">
                            "From a single shop sign to a full fit-out, one team handles design, fabrication and installation."
                        </p>
                    </div>
                    <div class="grid md:grid-cols-3 gap-8">
                        {highlights.into_iter().map(|service| view! { <ServiceCard service=service/> }).collect_view()}
                    </div>
                    <div class="text-center mt-10">
                        <a href="/services" class="text-amber-600 hover:text-amber-700 font-semibold">"All services →"</a>
                    </div>
                </div>
            </section>

            // Featured work
            <section class="py-20 bg-white">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">"Featured Projects"</h2>
                        <p class="text-lg text-gray-600">"A few recent jobs we are proud of."</p>
                    </div>
                    <div class="grid md:grid-cols-3 gap-8">
                        {featured_projects().into_iter().map(|project| {
                            let navigate = navigate.clone();
                            let href = format!("/portfolio?category={}", project.category.id());
                            let on_open = move |_: &'static str| navigate(&href, Default::default());
                            view! { <ProjectCard project=project on_open=on_open/> }
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Numbers
            <section class="py-16 bg-slate-900">
                <div class="container mx-auto px-4">
                    <StatsBand stats=business_stats() on_dark=true/>
                </div>
            </section>

            // Why us
            <section class="py-20 bg-white">
                <div class="container mx-auto px-4">
                    <SellingPoints points=SELLING_POINTS/>
                </div>
            </section>

            // Testimonials
            <section class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900 text-center mb-12">"What Clients Say"</h2>
                    <TestimonialSlider/>
                </div>
            </section>

            <CallToAction/>
        </div>
    }
}
