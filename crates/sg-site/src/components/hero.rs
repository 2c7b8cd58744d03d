//! Page banners and call-to-action strip

use leptos::*;
use sg_core::contact::whatsapp_href;
use sg_core::fixtures::BUSINESS;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="bg-gradient-to-br from-slate-900 via-slate-800 to-slate-900 text-white">
            <div class="container mx-auto px-4 py-20">
                <div class="max-w-4xl mx-auto text-center">
                    <h1 class="text-4xl md:text-6xl font-bold mb-6">
                        {BUSINESS.name}
                    </h1>
                    <p class="text-xl md:text-2xl text-amber-400 mb-4">{BUSINESS.tagline}</p>
                    <p class="text-lg text-gray-300 mb-8">{BUSINESS.description}</p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <a href="/contact" class="px-8 py-4 bg-amber-500 hover:bg-amber-400 text-white font-semibold rounded-lg transition">
                            "Get a Free Quote"
                        </a>
                        <a href="/portfolio" class="px-8 py-4 bg-white/10 hover:bg-white/20 text-white font-semibold rounded-lg border border-white/30 transition">
                            "View Our Work"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Title band at the top of inner pages
#[component]
pub fn PageHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <section class="bg-slate-900 text-white py-16">
            <div class="container mx-auto px-4 text-center">
                <h1 class="text-4xl md:text-5xl font-bold mb-4">{title}</h1>
                <p class="text-xl text-gray-300 max-w-2xl mx-auto">{subtitle}</p>
            </div>
        </section>
    }
}

#[component]
pub fn CallToAction(
    #[prop(default = "Have a project in mind?")] title: &'static str,
    #[prop(default = "Tell us about your signboard or site and we will get back with a quote.")]
    subtitle: &'static str,
) -> impl IntoView {
    let whatsapp = whatsapp_href(&BUSINESS, "Hello, I would like a quote.");

    view! {
        <section class="py-20 bg-gradient-to-r from-amber-500 to-orange-500 text-white">
            <div class="container mx-auto px-4 text-center">
                <h2 class="text-3xl md:text-4xl font-bold mb-4">{title}</h2>
                <p class="text-xl text-amber-100 mb-8 max-w-2xl mx-auto">{subtitle}</p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <a href="/contact" class="inline-block px-8 py-4 bg-white text-orange-600 font-semibold rounded-lg hover:bg-gray-100 transition">
                        "Request a Quote"
                    </a>
                    <a
                        href=whatsapp
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-block px-8 py-4 bg-green-600 hover:bg-green-500 text-white font-semibold rounded-lg transition"
                    >
                        "Chat on WhatsApp"
                    </a>
                </div>
            </div>
        </section>
    }
}
