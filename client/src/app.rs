//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::chat::config::ChatConfig;
use crate::pages::{contact::ContactPage, home::HomePage};
use crate::state::{ChatState, UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta
                    name="description"
                    content="Vetor TI: infraestrutura, segurança e suporte de TI para pequenas e médias empresas."
                />
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the chat configuration and shared state contexts, then sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = StoredValue::new(ChatConfig::default());
    let chat = RwSignal::new(config.with_value(ChatState::new));
    let ui = RwSignal::new(UiState::default());

    provide_context(config);
    provide_context(chat);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/vetor-ti.css"/>
        <Title text="Vetor TI — Soluções em Tecnologia"/>

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("contato") view=ContactPage/>
            </Routes>
        </Router>
    }
}
