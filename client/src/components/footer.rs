//! Site footer with contact details.

use leptos::prelude::*;

use crate::chat::config::ChatConfig;
use crate::util::format::{format_phone_br, whatsapp_link};

#[component]
pub fn Footer() -> impl IntoView {
    let config = expect_context::<StoredValue<ChatConfig>>();
    let (whatsapp_href, whatsapp_label) = config.with_value(|config| {
        (
            whatsapp_link(&config.whatsapp_number, &config.whatsapp_greeting),
            format_phone_br(&config.whatsapp_number),
        )
    });

    view! {
        <footer class="footer">
            <div class="footer__columns">
                <div class="footer__column">
                    <span class="footer__brand">"Vetor TI"</span>
                    <p class="footer__tagline">
                        "Soluções em tecnologia para pequenas e médias empresas desde 2012."
                    </p>
                </div>
                <div class="footer__column">
                    <h4>"Contato"</h4>
                    <a href=whatsapp_href target="_blank" rel="noopener">
                        {whatsapp_label}
                    </a>
                    <a href="mailto:contato@vetorti.com.br">"contato@vetorti.com.br"</a>
                    <span>"São Paulo, SP"</span>
                </div>
                <div class="footer__column">
                    <h4>"Navegação"</h4>
                    <a href="#servicos">"Serviços"</a>
                    <a href="#planos">"Planos"</a>
                    <a href="/contato">"Fale conosco"</a>
                </div>
            </div>
            <p class="footer__legal">"© 2026 Vetor TI. Todos os direitos reservados."</p>
        </footer>
    }
}
