//! Site navigation component

use leptos::*;
use leptos_router::*;
use sg_core::contact::tel_href;
use sg_core::fixtures::{BUSINESS, NAVIGATION};
use sg_core::NavigationItem;

fn link_class(active: bool, mobile: bool) -> &'static str {
    match (active, mobile) {
        (true, false) => "text-amber-600 font-semibold transition",
        (false, false) => "text-gray-600 hover:text-gray-900 transition",
        (true, true) => "block text-amber-600 font-semibold",
        (false, true) => "block text-gray-600 hover:text-gray-900",
    }
}

#[component]
fn NavLink(item: &'static NavigationItem, mobile: bool) -> impl IntoView {
    let pathname = use_location().pathname;
    let active = move || pathname.with(|path| path == item.href);

    view! {
        <a
            href=item.href
            class=move || link_class(active(), mobile)
            aria-current=move || active().then_some("page")
            target=item.external.then_some("_blank")
            rel=item.external.then_some("noopener noreferrer")
        >
            {item.label}
        </a>
    }
}

#[component]
pub fn SiteNav() -> impl IntoView {
    let (mobile_open, set_mobile_open) = create_signal(false);
    let pathname = use_location().pathname;

    // Close the mobile menu after navigating
    create_effect(move |_| {
        pathname.with(|_| ());
        set_mobile_open.set(false);
    });

    view! {
        <nav class="bg-white shadow-sm sticky top-0 z-40" aria-label="Main navigation">
            <div class="container mx-auto px-4">
                <div class="flex justify-between h-16">
                    // Logo
                    <div class="flex items-center">
                        <a href="/" class="flex items-center">
                            <img src=BUSINESS.logo alt="" class="h-8 w-8 mr-2"/>
                            <span class="text-xl font-bold text-gray-900">{BUSINESS.short_name}</span>
                        </a>
                    </div>

                    // Desktop Nav
                    <div class="hidden md:flex items-center space-x-8">
                        {NAVIGATION
                            .iter()
                            .map(|item| view! { <NavLink item=item mobile=false/> })
                            .collect_view()}
                        <a href=tel_href(&BUSINESS) class="px-4 py-2 bg-amber-500 hover:bg-amber-600 text-white font-medium rounded-lg transition">
                            "Call Now"
                        </a>
                    </div>

                    // Mobile menu button
                    <div class="md:hidden flex items-center">
                        <button
                            class="p-2 rounded-md text-gray-600 hover:text-gray-900 hover:bg-gray-100"
                            aria-label="Toggle menu"
                            aria-expanded=move || mobile_open.get().to_string()
                            on:click=move |_| set_mobile_open.update(|v| *v = !*v)
                        >
                            <Show
                                when=move || mobile_open.get()
                                fallback=|| view! {
                                    <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                                    </svg>
                                }
                            >
                                <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                                </svg>
                            </Show>
                        </button>
                    </div>
                </div>
            </div>

            // Mobile menu
            <Show when=move || mobile_open.get()>
                <div class="md:hidden border-t border-gray-200">
                    <div class="px-4 py-4 space-y-3">
                        {NAVIGATION
                            .iter()
                            .map(|item| view! { <NavLink item=item mobile=true/> })
                            .collect_view()}
                        <div class="pt-4 border-t border-gray-200">
                            <a href=tel_href(&BUSINESS) class="block w-full text-center px-4 py-2 bg-amber-500 text-white font-medium rounded-lg">
                                "Call Now"
                            </a>
                        </div>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
