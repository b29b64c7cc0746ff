//! Contact page. `?assunto=suporte` shows a support banner, used by the
//! chat assistant's support redirect.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::chat_widget::ChatWidget;
use crate::components::contact_form::ContactForm;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;

#[component]
pub fn ContactPage() -> impl IntoView {
    let query = use_query_map();
    let support_request = move || query.read().get("assunto").as_deref() == Some("suporte");

    view! {
        <Navbar />
        <main class="contact">
            <section class="section contact__section">
                <h1 class="section__title">"Fale conosco"</h1>
                <Show when=support_request>
                    <p class="contact__support-banner" role="status">
                        "Precisa de suporte técnico? Descreva o problema abaixo e a nossa \
                         equipe responde em até 4 horas úteis."
                    </p>
                </Show>
                <p class="section__lead">
                    "Conte o que a sua empresa precisa e retornamos com uma proposta."
                </p>
                <ContactForm />
            </section>
        </main>
        <Footer />
        <ChatWidget />
    }
}
