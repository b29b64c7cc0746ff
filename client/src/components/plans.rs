//! Pricing section. Prices render from the same table the chat assistant
//! quotes.

use leptos::prelude::*;

use crate::content;
use crate::util::format::format_brl;

#[component]
pub fn Plans() -> impl IntoView {
    view! {
        <section class="section plans" id="planos">
            <h2 class="section__title">"Planos de suporte"</h2>
            <p class="section__lead">
                "Mensalidade fixa, sem surpresa no fim do mês."
            </p>
            <div class="plans__grid">
                {content::PLANS
                    .iter()
                    .map(|plan| {
                        let class = if plan.highlighted {
                            "plans__card plans__card--highlighted"
                        } else {
                            "plans__card"
                        };
                        view! {
                            <article class=class>
                                <h3 class="plans__name">{plan.name}</h3>
                                <p class="plans__price">
                                    {format_brl(plan.price_cents)}
                                    <span class="plans__period">"/mês"</span>
                                </p>
                                <p class="plans__blurb">{plan.blurb}</p>
                                <ul class="plans__features">
                                    {plan
                                        .features
                                        .iter()
                                        .map(|&feature| view! { <li>{feature}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                                <a class="btn btn--primary plans__cta" href="/contato">
                                    "Contratar"
                                </a>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
