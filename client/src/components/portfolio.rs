//! Portfolio section with case-study cards.

use leptos::prelude::*;

use crate::content;

#[component]
pub fn Portfolio() -> impl IntoView {
    view! {
        <section class="section portfolio" id="portfolio">
            <h2 class="section__title">"Projetos recentes"</h2>
            <p class="section__lead">
                "Resultados reais em empresas de diferentes setores."
            </p>
            <div class="portfolio__grid">
                {content::PROJECTS
                    .iter()
                    .map(|project| {
                        view! {
                            <article class="portfolio__card">
                                <span class="portfolio__sector">{project.sector}</span>
                                <h3 class="portfolio__title">{project.title}</h3>
                                <p class="portfolio__summary">{project.summary}</p>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
