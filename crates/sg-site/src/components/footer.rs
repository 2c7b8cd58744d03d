//! Site footer

use chrono::{Datelike, Utc};
use leptos::*;
use sg_core::contact::{tel_href, whatsapp_href};
use sg_core::fixtures::{BUSINESS, NAVIGATION, SERVICE_CATEGORIES};

fn social_label(url: &str) -> &'static str {
    if url.contains("facebook") {
        "Facebook"
    } else if url.contains("instagram") {
        "Instagram"
    } else if url.contains("linkedin") {
        "LinkedIn"
    } else {
        "Social"
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class="bg-slate-900 text-gray-400">
            <div class="container mx-auto px-4 py-12">
                <div class="grid md:grid-cols-4 gap-8">
                    <div>
                        <div class="flex items-center mb-4">
                            <img src=BUSINESS.logo alt="" class="h-8 w-8 mr-2"/>
                            <span class="text-xl font-bold text-white">{BUSINESS.short_name}</span>
                        </div>
                        <p class="text-sm">{BUSINESS.tagline}</p>
                        <div class="flex gap-4 mt-4">
                            {BUSINESS.social.all().into_iter().map(|url| view! {
                                <a href=url target="_blank" rel="noopener noreferrer" class="hover:text-white text-sm">
                                    {social_label(url)}
                                </a>
                            }).collect_view()}
                        </div>
                    </div>
                    <div>
                        <h4 class="text-white font-semibold mb-4">"Pages"</h4>
                        <ul class="space-y-2 text-sm">
                            {NAVIGATION.iter().map(|item| view! {
                                <li><a href=item.href class="hover:text-white">{item.label}</a></li>
                            }).collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h4 class="text-white font-semibold mb-4">"Services"</h4>
                        <ul class="space-y-2 text-sm">
                            {SERVICE_CATEGORIES.iter().map(|category| view! {
                                <li>
                                    <a href=format!("/services?category={}", category.id.id()) class="hover:text-white">
                                        {category.title}
                                    </a>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h4 class="text-white font-semibold mb-4">"Contact"</h4>
                        <address class="not-italic space-y-2 text-sm">
                            <p>{BUSINESS.address.one_line()}</p>
                            <p><a href=tel_href(&BUSINESS) class="hover:text-white">{BUSINESS.phone}</a></p>
                            <p><a href=format!("mailto:{}", BUSINESS.email) class="hover:text-white">{BUSINESS.email}</a></p>
                            <p>
                                <a href=whatsapp_href(&BUSINESS, "Hello") target="_blank" rel="noopener noreferrer" class="hover:text-white">
                                    "WhatsApp"
                                </a>
                            </p>
                            {BUSINESS.opening_hours.iter().map(|hours| view! { <p>{*hours}</p> }).collect_view()}
                        </address>
                    </div>
                </div>
                <div class="border-t border-gray-800 mt-8 pt-8 text-sm text-center">
                    {format!("© {} {}. All rights reserved.", year, BUSINESS.legal_name)}
                </div>
            </div>
        </footer>
    }
}
