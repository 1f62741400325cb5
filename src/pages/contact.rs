//! Contact Page
//!
//! Local-only contact form plus static contact details. Nothing is sent
//! anywhere; a valid submit clears the form and shows an acknowledgment
//! for the configured delay.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use portfolio_core::contact::{ContactForm, Field, FormError};
use tracing::debug;
use web_sys::SubmitEvent;

use crate::context::use_app_context;

#[component]
pub fn ContactPage() -> impl IntoView {
    let ctx = use_app_context();
    let profile = ctx.content.resume().profile.clone();
    let delay_ms = u32::try_from(ctx.config.ack_delay().as_millis()).unwrap_or(u32::MAX);

    let form = RwSignal::new(ContactForm::new());
    let error = RwSignal::new(None::<FormError>);
    // Dropped with the page, which cancels a pending reset
    let timer = StoredValue::new_local(None::<Timeout>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.try_update(ContactForm::submit) {
            Some(Ok(ticket)) => {
                error.set(None);
                let timeout = Timeout::new(delay_ms, move || {
                    form.try_update(|f| f.expire(ticket));
                });
                timer.set_value(Some(timeout));
            }
            Some(Err(err)) => {
                debug!(error = %err, "contact form rejected");
                error.set(Some(err));
            }
            None => {}
        }
    };

    view! {
        <section class="page contact">
            <h1>"Contact"</h1>
            <p class="page-intro">{profile.availability.clone()}</p>

            <div class="contact-layout">
                <form class="contact-form" on:submit=on_submit>
                    <Show when=move || form.with(ContactForm::is_submitted)>
                        <div class="form-ack" role="status">
                            "Thank you for your message! I'll get back to you soon."
                        </div>
                    </Show>
                    {move || error.get().map(|err| view! { <p class="form-error" role="alert">{err.to_string()}</p> })}

                    <FormField form field=Field::Name />
                    <FormField form field=Field::Email input_type="email" />
                    <FormField form field=Field::Subject />
                    <FormField form field=Field::Message multiline=true />

                    <button type="submit" class="button">"Send Message"</button>
                </form>

                <aside class="contact-info">
                    <h2>"Get in Touch"</h2>
                    <p>
                        "Email: " <a href=profile.mailto()>{profile.email.clone()}</a>
                    </p>
                    <p>"Location: " {profile.location.clone()}</p>
                    <ul class="social-links">
                        {profile
                            .social
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <li>
                                        <a href=link.url target="_blank" rel="noopener noreferrer">
                                            {link.label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </aside>
            </div>
        </section>
    }
}

/// One labelled control bound to a form field
#[component]
fn FormField(
    form: RwSignal<ContactForm>,
    field: Field,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let id = format!("contact-{}", field.key());
    let label = if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    };
    let value = move || form.with(|f| f.value(field).to_string());
    let on_input = move |ev: web_sys::Event| form.update(|f| f.set(field, event_target_value(&ev)));

    let control = if multiline {
        view! {
            <textarea
                id=id.clone()
                name=field.key()
                rows="6"
                required=field.is_required()
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=id.clone()
                type=input_type.unwrap_or("text")
                name=field.key()
                required=field.is_required()
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="form-field">
            <label for=id>{label}</label>
            {control}
        </div>
    }
}
