//! Contact form. Validates locally, then hands the visitor off to
//! WhatsApp with the message pre-filled. There is no backend submission.

use leptos::prelude::*;

use crate::chat::config::ChatConfig;
use crate::util::format::whatsapp_link;
use crate::util::validate::{is_valid_email, is_valid_phone};

#[cfg(feature = "hydrate")]
use crate::chat::navigator::{DomNavigator, Navigator};

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

/// Validate the form and report the first problem found.
fn first_error(name: &str, email: &str, phone: &str, message: &str) -> Option<&'static str> {
    if name.trim().is_empty() {
        return Some("Informe o seu nome.");
    }
    if !is_valid_email(email) {
        return Some("Informe um e-mail válido.");
    }
    if !phone.trim().is_empty() && !is_valid_phone(phone) {
        return Some("Informe um telefone válido com DDD.");
    }
    if message.trim().is_empty() {
        return Some("Escreva uma mensagem.");
    }
    None
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let config = expect_context::<StoredValue<ChatConfig>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let sent = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let (name, email, phone, message) =
            (name.get_untracked(), email.get_untracked(), phone.get_untracked(), message.get_untracked());
        if let Some(problem) = first_error(&name, &email, &phone, &message) {
            error.set(Some(problem));
            return;
        }
        error.set(None);

        let body = format!(
            "Olá! Meu nome é {}.\nE-mail: {}\nTelefone: {}\n\n{}",
            name.trim(),
            email.trim(),
            phone.trim(),
            message.trim(),
        );
        let link = config.with_value(|config| whatsapp_link(&config.whatsapp_number, &body));

        #[cfg(feature = "hydrate")]
        DomNavigator.open_external(&link);
        #[cfg(not(feature = "hydrate"))]
        let _ = link;

        sent.set(true);
    };

    view! {
        <form class="contact-form" on:submit=on_submit novalidate>
            <label class="contact-form__field">
                "Nome"
                <input
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="contact-form__field">
                "E-mail"
                <input
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="contact-form__field">
                "Telefone (opcional)"
                <input
                    type="tel"
                    prop:value=move || phone.get()
                    on:input=move |ev| phone.set(event_target_value(&ev))
                />
            </label>
            <label class="contact-form__field">
                "Mensagem"
                <textarea
                    rows="5"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </label>

            <Show when=move || error.get().is_some()>
                <p class="contact-form__error" role="alert">
                    {move || error.get().unwrap_or_default()}
                </p>
            </Show>
            <Show when=move || sent.get()>
                <p class="contact-form__sent">
                    "Abrimos o WhatsApp com a sua mensagem. Se preferir, escreva para \
                     contato@vetorti.com.br."
                </p>
            </Show>

            <button class="btn btn--primary contact-form__submit" type="submit">
                "Enviar pelo WhatsApp"
            </button>
        </form>
    }
}

