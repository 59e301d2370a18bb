use std::time::Duration;

use chrono::Utc;
use growfeed::contact::{self, ContactDraft, ContactError, SuccessBanner};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::config;
use crate::PendingPlan;
use crate::browser::{self, BrowserScheduler};

const CONTACT_DETAILS: [(&str, &str, &str); 3] = [
    ("✉", "Email Us", "info@growfeed.tech"),
    ("☎", "Call Us", "+62 123 456 7890"),
    ("📍", "Visit Us", "Jakarta, Indonesia"),
];

#[component]
pub fn Contact() -> impl IntoView {
    let banner_for = Duration::from_millis(config().contact.banner_ms);
    let pending = PendingPlan::from_context().0;

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (submitted, set_submitted) = signal(false);

    let banner = StoredValue::new_local(SuccessBanner::new(
        BrowserScheduler,
        banner_for,
        move |shown| set_submitted.set(shown),
    ));
    on_cleanup(move || {
        banner.try_update_value(|b| b.cancel());
    });

    let has_plan = move || pending.with(Option::is_some);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = ContactDraft::new(
            name.get_untracked(),
            email.get_untracked(),
            message.get_untracked(),
        );

        let mut store = browser::LocalStore::open();
        match contact::submit(&mut store, &draft, Utc::now()) {
            Ok(_) => {
                set_name.set(String::new());
                set_email.set(String::new());
                set_message.set(String::new());
                pending.set(None);
                banner.update_value(|b| {
                    if let Err(e) = b.show() {
                        tracing::warn!(error = %e, "success banner not shown");
                    }
                });
            }
            Err(ContactError::MissingField(field)) => {
                tracing::warn!(field, "contact form submitted with an empty field");
            }
            Err(e) => {
                tracing::error!(error = %e, "contact message not stored");
            }
        }
    };

    view! {
        <section id="contact" class="contact">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Get In Touch"</h2>
                    <p class="section-description">
                        {move || match pending.get() {
                            Some(plan) => format!("Complete your {plan} plan registration"),
                            None => "Learn more about GrowFeed smart feeding solutions".to_string(),
                        }}
                    </p>
                </div>

                <div class="contact-grid">
                    <div class="contact-details">
                        {CONTACT_DETAILS
                            .into_iter()
                            .map(|(icon, title, line)| {
                                view! {
                                    <div class="contact-detail">
                                        <span class="contact-icon">{icon}</span>
                                        <div>
                                            <h3 class="contact-detail-title">{title}</h3>
                                            <p class="contact-detail-text">{line}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <form class="contact-form" on:submit=on_submit>
                        <Show when=move || submitted.get()>
                            <div class="alert alert-success" role="alert">
                                "Message sent successfully!"
                            </div>
                        </Show>

                        {move || {
                            pending
                                .get()
                                .map(|plan| {
                                    view! {
                                        <div class="alert alert-info">{format!("Selected plan: {plan}")}</div>
                                    }
                                })
                        }}

                        <input
                            type="text"
                            name="name"
                            class="form-field"
                            placeholder="Your Name"
                            required=true
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                        <input
                            type="email"
                            name="email"
                            class="form-field"
                            placeholder="Your Email"
                            required=true
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                        <textarea
                            name="message"
                            class="form-field"
                            rows="4"
                            required=true
                            placeholder=move || {
                                if has_plan() {
                                    "Tell us about your fish farm and specific requirements..."
                                } else {
                                    "Your Message"
                                }
                            }
                            prop:value=move || message.get()
                            on:input=move |ev| set_message.set(event_target_value(&ev))
                        ></textarea>
                        <button type="submit" class="btn btn-primary btn-block">
                            {move || if has_plan() { "Complete Registration" } else { "Send Message" }}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
