//! Landing page: hero plus the anchored marketing sections.

use leptos::prelude::*;

use crate::components::chat_widget::ChatWidget;
use crate::components::contact_section::ContactSection;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::plans::Plans;
use crate::components::portfolio::Portfolio;
use crate::components::services::Services;
use crate::components::testimonials::Testimonials;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Navbar />
        <main>
            <Hero />
            <Services />
            <Portfolio />
            <Plans />
            <Testimonials />
            <ContactSection />
        </main>
        <Footer />
        <ChatWidget />
    }
}
