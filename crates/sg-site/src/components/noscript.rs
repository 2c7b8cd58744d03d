//! Fallback for visitors with scripting disabled

use leptos::*;
use sg_core::contact::{mailto_plain, tel_href};
use sg_core::fixtures::BUSINESS;

/// Sliders, the gallery modal and the contact form need the wasm bundle.
/// Without it, point visitors at the direct contact channels.
#[component]
pub fn NoScriptFallback() -> impl IntoView {
    view! {
        <noscript>
            <div class="bg-amber-50 border-t border-amber-200 text-amber-900 text-center px-4 py-4">
                <p class="font-semibold">"Some features on this site need JavaScript."</p>
                <p class="text-sm mt-1">
                    "You can still reach us by phone at "
                    <a href=tel_href(&BUSINESS) class="underline">{BUSINESS.phone}</a>
                    " or by email at "
                    <a href=mailto_plain(&BUSINESS, "Website enquiry") class="underline">{BUSINESS.email}</a>
                    "."
                </p>
            </div>
        </noscript>
    }
}
