//! Fixed top navigation with section anchors and the mobile drawer.
//!
//! A window scroll listener sets the `scrolled` flag that condenses the
//! bar once the page moves past the hero, and tracks which landing section
//! is in view for link highlighting. The listener is detached on unmount.

use leptos::prelude::*;

use crate::state::UiState;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// Scroll offset past which the navbar condenses.
#[cfg(feature = "hydrate")]
const SCROLL_THRESHOLD_PX: f64 = 40.0;

const SECTION_LINKS: &[(&str, &str)] = &[
    ("servicos", "Serviços"),
    ("portfolio", "Portfólio"),
    ("planos", "Planos"),
    ("depoimentos", "Depoimentos"),
];

/// The section whose top has most recently crossed the upper third of the
/// viewport, if any.
#[cfg(feature = "hydrate")]
fn section_in_view() -> Option<&'static str> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let viewport_height = window.inner_height().ok().and_then(|v| v.as_f64())?;

    let mut active = None;
    for &(id, _) in SECTION_LINKS {
        let Some(el) = document.get_element_by_id(id) else {
            continue;
        };
        if el.get_bounding_client_rect().top() <= viewport_height / 3.0 {
            active = Some(id);
        }
    }
    active
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    {
        let scroll_holder: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        {
            let scroll_holder = Rc::clone(&scroll_holder);
            Effect::new(move || {
                if scroll_holder.borrow().is_some() {
                    return;
                }
                let Some(window) = web_sys::window() else {
                    return;
                };
                let on_scroll = Closure::wrap(Box::new(move || {
                    let offset = web_sys::window().map_or(0.0, |w| w.scroll_y().unwrap_or(0.0));
                    let scrolled = offset > SCROLL_THRESHOLD_PX;
                    let active_section = section_in_view();
                    let current = ui.get_untracked();
                    if current.scrolled != scrolled || current.active_section != active_section {
                        ui.update(|state| {
                            state.scrolled = scrolled;
                            state.active_section = active_section;
                        });
                    }
                }) as Box<dyn FnMut()>);
                let _ = window
                    .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
                *scroll_holder.borrow_mut() = Some(on_scroll);
            });
        }

        on_cleanup(move || {
            if let (Some(window), Some(on_scroll)) =
                (web_sys::window(), scroll_holder.borrow_mut().take())
            {
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    on_scroll.as_ref().unchecked_ref(),
                );
            }
        });
    }

    let nav_class = move || {
        let state = ui.get();
        let mut class = String::from("navbar");
        if state.scrolled {
            class.push_str(" navbar--scrolled");
        }
        if state.nav_open {
            class.push_str(" navbar--open");
        }
        class
    };

    let on_burger = move |_| ui.update(UiState::toggle_nav);
    let close_nav = move |_| ui.update(UiState::close_nav);

    view! {
        <nav class=nav_class>
            <a class="navbar__brand" href="/" on:click=close_nav>
                "Vetor" <span class="navbar__brand-accent">"TI"</span>
            </a>

            <button class="navbar__burger" on:click=on_burger aria-label="Abrir menu">
                <span></span>
                <span></span>
                <span></span>
            </button>

            <div class="navbar__links">
                {SECTION_LINKS
                    .iter()
                    .map(|&(id, label)| {
                        let link_class = move || {
                            if ui.get().active_section == Some(id) {
                                "navbar__link navbar__link--active"
                            } else {
                                "navbar__link"
                            }
                        };
                        view! {
                            <a class=link_class href=format!("#{id}") on:click=close_nav>
                                {label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
                <a class="btn btn--primary navbar__cta" href="/contato" on:click=close_nav>
                    "Fale conosco"
                </a>
            </div>
        </nav>
    }
}
