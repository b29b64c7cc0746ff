//! Services grid, one card per offering.

use leptos::prelude::*;

use crate::content;

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section class="section services" id="servicos">
            <h2 class="section__title">"Nossos serviços"</h2>
            <p class="section__lead">
                "Cuidamos de toda a sua operação de tecnologia, do cabo à nuvem."
            </p>
            <div class="services__grid">
                {content::SERVICES
                    .iter()
                    .map(|service| {
                        view! {
                            <article class="services__card">
                                <span class="services__icon" aria-hidden="true">
                                    {service.icon}
                                </span>
                                <h3 class="services__card-title">{service.title}</h3>
                                <p class="services__blurb">{service.blurb}</p>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
