//! About page

use leptos::*;
use sg_core::fixtures::BUSINESS;

use crate::components::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <PageSeo path="/about"/>

        <div>
            <PageHeader
                title="About Us"
                subtitle="A local workshop building signboards and commercial interiors since day one."
            />

            <section class="py-20 bg-white">
                <div class="container mx-auto px-4">
                    <div class="grid md:grid-cols-2 gap-12 max-w-5xl mx-auto items-center">
                        <div>
                            <h2 class="text-3xl font-bold text-gray-900 mb-6">
                                {format!("{} years on the job", BUSINESS.years_of_experience)}
                            </h2>
                            <p class="text-gray-600 mb-4">{BUSINESS.description}</p>
                            <p class="text-gray-600">
                                {format!(
                                    "Founded in {} in {}, {} works with shop owners, developers and facility managers across the region.",
                                    BUSINESS.founding_year,
                                    BUSINESS.address.city,
                                    BUSINESS.name,
                                )}
                            </p>
                        </div>
                        <StatsBand stats={business_stats().into_iter().take(2).collect::<Vec<_>>()}/>
                    </div>
                </div>
            </section>

            <section class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center mb-12">
                        <h2 class="text-3xl font-bold text-gray-900 mb-4">"What We Specialise In"</h2>
                    </div>
                    <ul class="grid md:grid-cols-2 lg:grid-cols-3 gap-6 max-w-5xl mx-auto">
                        {BUSINESS.specializations.iter().map(|item| view! {
                            <li class="bg-white rounded-xl shadow p-6 flex items-center">
                                <span class="text-amber-500 mr-3">"✓"</span>
                                <span class="font-medium text-gray-900">{*item}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                </div>
            </section>

            <CallToAction title="Let's build something together"/>
        </div>
    }
}
