//! Client testimonials.

use leptos::prelude::*;

use crate::content;

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="section testimonials" id="depoimentos">
            <h2 class="section__title">"O que dizem nossos clientes"</h2>
            <div class="testimonials__grid">
                {content::TESTIMONIALS
                    .iter()
                    .map(|testimonial| {
                        view! {
                            <figure class="testimonials__card">
                                <blockquote class="testimonials__quote">
                                    {testimonial.quote}
                                </blockquote>
                                <figcaption class="testimonials__author">
                                    <strong>{testimonial.author}</strong>
                                    <span class="testimonials__role">{testimonial.role}</span>
                                </figcaption>
                            </figure>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
