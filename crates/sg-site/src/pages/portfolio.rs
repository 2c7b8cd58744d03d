//! Portfolio page

use leptos::*;

use crate::components::*;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    view! {
        <PageSeo path="/portfolio"/>

        <div>
            <PageHeader
                title="Our Work"
                subtitle="Signboards, shopfronts and builds delivered for clients across the city."
            />
            <section class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <ProjectGallery/>
                </div>
            </section>
            <CallToAction title="Like what you see?"/>
        </div>
    }
}
