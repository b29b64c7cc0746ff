//! Home-page contact section embedding the contact form.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section class="section contact-section" id="contato">
            <h2 class="section__title">"Vamos conversar?"</h2>
            <p class="section__lead">
                "Conte o que a sua empresa precisa e retornamos com uma proposta sob medida."
            </p>
            <ContactForm />
        </section>
    }
}
