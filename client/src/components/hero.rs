//! Hero section with the animated network backdrop.

use leptos::prelude::*;

use crate::components::backdrop_host::BackdropHost;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="hero" id="inicio">
            <BackdropHost />
            <div class="hero__content">
                <h1 class="hero__headline">
                    "Tecnologia que " <span class="hero__accent">"impulsiona"</span>
                    " o seu negócio"
                </h1>
                <p class="hero__subtitle">
                    "Infraestrutura, segurança e suporte de TI para a sua empresa crescer \
                     sem se preocupar com tecnologia."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="/contato">
                        "Solicitar orçamento"
                    </a>
                    <a class="btn btn--ghost" href="#servicos">
                        "Conhecer serviços"
                    </a>
                </div>
            </div>
        </header>
    }
}
