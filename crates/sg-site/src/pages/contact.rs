//! Contact page

use leptos::*;
use sg_core::contact::{mailto_href, tel_href, whatsapp_href, ContactForm, Field, FieldError, MAX_MESSAGE_LEN};
use sg_core::fixtures::{BUSINESS, SERVICES};

use crate::components::*;

#[cfg(feature = "hydrate")]
fn open_mail_client(href: &str) {
    if let Err(err) = window().location().set_href(href) {
        tracing::warn!(error = ?err, "failed to open mail client");
    }
}

#[cfg(not(feature = "hydrate"))]
fn open_mail_client(_href: &str) {}

#[component]
fn FieldMessage(errors: ReadSignal<Vec<FieldError>>, field: Field) -> impl IntoView {
    let message = move || {
        errors.with(|errors| errors.iter().find(|e| e.field == field).map(|e| e.message))
    };

    view! {
        <Show when=move || message().is_some()>
            <p class="text-sm text-red-600 mt-1" role="alert">{message}</p>
        </Show>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (phone, set_phone) = create_signal(String::new());
    let (service, set_service) = create_signal(String::new());
    let (message, set_message) = create_signal(String::new());
    let (errors, set_errors) = create_signal(Vec::<FieldError>::new());
    let (sent_href, set_sent_href) = create_signal(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            service: service.get_untracked(),
            message: message.get_untracked(),
        };
        match form.validate() {
            Ok(()) => {
                set_errors.set(Vec::new());
                let href = mailto_href(&BUSINESS, &form);
                open_mail_client(&href);
                set_sent_href.set(Some(href));
            }
            Err(problems) => set_errors.set(problems),
        }
    };

    let input_class = "w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-amber-500 focus:border-amber-500";
    let remaining = move || {
        let used = message.with(|m| m.chars().count());
        format!("{} / {}", used, MAX_MESSAGE_LEN)
    };

    view! {
        <PageSeo path="/contact"/>

        <div>
            <PageHeader
                title="Get in Touch"
                subtitle="Tell us about your signboard or project and we will reply with a quote."
            />

            <section class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="grid md:grid-cols-2 gap-12 max-w-5xl mx-auto">
                        // Form
                        <div class="bg-white rounded-xl shadow-lg p-8">
                            <Show
                                when=move || sent_href.with(Option::is_none)
                                fallback=move || view! {
                                    <div class="text-center py-12">
                                        <div class="text-5xl mb-4">"✓"</div>
                                        <h3 class="text-2xl font-bold text-gray-900 mb-2">"Almost done"</h3>
                                        <p class="text-gray-600 mb-4">
                                            "Your email app should open with the message ready to send."
                                        </p>
                                        <a href=move || sent_href.get().unwrap_or_default() class="text-amber-600 underline">
                                            "Open it again"
                                        </a>
                                    </div>
                                }
                            >
                                <form on:submit=on_submit class="space-y-6" novalidate=true>
                                    <div>
                                        <label for="contact-name" class="block text-sm font-medium text-gray-700 mb-2">"Name"</label>
                                        <input
                                            id="contact-name"
                                            type="text"
                                            class=input_class
                                            placeholder="Your name"
                                            on:input=move |ev| set_name.set(event_target_value(&ev))
                                            prop:value=name
                                        />
                                        <FieldMessage errors=errors field=Field::Name/>
                                    </div>

                                    <div>
                                        <label for="contact-email" class="block text-sm font-medium text-gray-700 mb-2">"Email"</label>
                                        <input
                                            id="contact-email"
                                            type="email"
                                            class=input_class
                                            placeholder="you@company.com"
                                            on:input=move |ev| set_email.set(event_target_value(&ev))
                                            prop:value=email
                                        />
                                        <FieldMessage errors=errors field=Field::Email/>
                                    </div>

                                    <div>
                                        <label for="contact-phone" class="block text-sm font-medium text-gray-700 mb-2">"Phone"</label>
                                        <input
                                            id="contact-phone"
                                            type="tel"
                                            class=input_class
                                            placeholder="Optional"
                                            on:input=move |ev| set_phone.set(event_target_value(&ev))
                                            prop:value=phone
                                        />
                                        <FieldMessage errors=errors field=Field::Phone/>
                                    </div>

                                    <div>
                                        <label for="contact-service" class="block text-sm font-medium text-gray-700 mb-2">"I'm interested in..."</label>
                                        <select
                                            id="contact-service"
                                            class=input_class
                                            on:change=move |ev| set_service.set(event_target_value(&ev))
                                        >
                                            <option value="">"General enquiry"</option>
                                            {SERVICES.iter().map(|s| view! {
                                                <option value=s.id>{s.title}</option>
                                            }).collect_view()}
                                        </select>
                                    </div>

                                    <div>
                                        <label for="contact-message" class="block text-sm font-medium text-gray-700 mb-2">"Message"</label>
                                        <textarea
                                            id="contact-message"
                                            rows="5"
                                            class=input_class
                                            placeholder="Size, location, timeline..."
                                            on:input=move |ev| set_message.set(event_target_value(&ev))
                                            prop:value=message
                                        ></textarea>
                                        <div class="flex justify-between">
                                            <FieldMessage errors=errors field=Field::Message/>
                                            <span class="text-xs text-gray-400 mt-1 ml-auto">{remaining}</span>
                                        </div>
                                    </div>

                                    <button
                                        type="submit"
                                        class="w-full py-4 bg-amber-500 hover:bg-amber-600 text-white font-semibold rounded-lg transition"
                                    >
                                        "Send Message"
                                    </button>
                                </form>
                            </Show>
                        </div>

                        // Direct channels
                        <div class="space-y-8">
                            <div>
                                <h3 class="text-xl font-semibold text-gray-900 mb-2">"Call us"</h3>
                                <a href=tel_href(&BUSINESS) class="text-amber-600 text-lg">{BUSINESS.phone}</a>
                            </div>
                            <div>
                                <h3 class="text-xl font-semibold text-gray-900 mb-2">"WhatsApp"</h3>
                                <a
                                    href=whatsapp_href(&BUSINESS, "Hello, I would like a quote.")
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-amber-600 text-lg"
                                >
                                    "Chat with us"
                                </a>
                            </div>
                            <div>
                                <h3 class="text-xl font-semibold text-gray-900 mb-2">"Email"</h3>
                                <a href=format!("mailto:{}", BUSINESS.email) class="text-amber-600 text-lg">{BUSINESS.email}</a>
                            </div>
                            <div>
                                <h3 class="text-xl font-semibold text-gray-900 mb-2">"Visit"</h3>
                                <address class="not-italic text-gray-600">{BUSINESS.address.one_line()}</address>
                                <ul class="text-gray-600 mt-2">
                                    {BUSINESS.opening_hours.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                                </ul>
                            </div>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}
