//! Bridge component between Leptos and the imperative `backdrop::Engine`.
//!
//! On hydration this mounts the engine on the hero canvas, drives it from a
//! self-rescheduling `requestAnimationFrame` loop, and resizes it with the
//! window. Unmounting cancels the pending frame and detaches the resize
//! listener so a route change never leaks the loop.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use backdrop::engine::Engine;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

#[cfg(feature = "hydrate")]
fn viewport_size() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

#[cfg(feature = "hydrate")]
fn device_pixel_ratio() -> f64 {
    web_sys::window().map_or(1.0, |w| w.device_pixel_ratio().max(1.0))
}

#[cfg(feature = "hydrate")]
fn request_frame(cb: &Closure<dyn FnMut(f64)>) -> Option<i32> {
    web_sys::window()?.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

/// Decorative network-node canvas behind the hero section.
#[component]
pub fn BackdropHost() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        let engine: Rc<RefCell<Option<Engine>>> = Rc::new(RefCell::new(None));
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let frame_holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
            Rc::new(RefCell::new(None));
        let resize_holder: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        {
            let engine = Rc::clone(&engine);
            let raf_id = Rc::clone(&raf_id);
            let frame_holder = Rc::clone(&frame_holder);
            let resize_holder = Rc::clone(&resize_holder);
            Effect::new(move || {
                let Some(canvas) = canvas_ref.get() else {
                    return;
                };
                if engine.borrow().is_some() {
                    return;
                }

                let (width, height) = viewport_size();
                let mut rand01 = || js_sys::Math::random();
                let mut instance = match Engine::new(canvas, width, height, &mut rand01) {
                    Ok(instance) => instance,
                    Err(err) => {
                        log::warn!("backdrop disabled, no 2d context: {err:?}");
                        return;
                    }
                };
                instance.set_viewport(width, height, device_pixel_ratio());
                *engine.borrow_mut() = Some(instance);

                // Self-rescheduling frame loop. The closure lives in
                // frame_holder so on_cleanup can drop it.
                let engine_for_frame = Rc::clone(&engine);
                let raf_for_frame = Rc::clone(&raf_id);
                let holder_for_frame = Rc::clone(&frame_holder);
                let frame = Closure::wrap(Box::new(move |timestamp_ms: f64| {
                    if let Some(engine) = engine_for_frame.borrow_mut().as_mut() {
                        if let Err(err) = engine.frame(timestamp_ms) {
                            log::warn!("backdrop frame failed: {err:?}");
                        }
                    }
                    let next = holder_for_frame
                        .borrow()
                        .as_ref()
                        .and_then(request_frame);
                    raf_for_frame.set(next);
                }) as Box<dyn FnMut(f64)>);
                raf_id.set(request_frame(&frame));
                *frame_holder.borrow_mut() = Some(frame);

                let engine_for_resize = Rc::clone(&engine);
                let resize = Closure::wrap(Box::new(move || {
                    let (width, height) = viewport_size();
                    if let Some(engine) = engine_for_resize.borrow_mut().as_mut() {
                        engine.set_viewport(width, height, device_pixel_ratio());
                    }
                }) as Box<dyn FnMut()>);
                if let Some(window) = web_sys::window() {
                    let _ = window.add_event_listener_with_callback(
                        "resize",
                        resize.as_ref().unchecked_ref(),
                    );
                }
                *resize_holder.borrow_mut() = Some(resize);
            });
        }

        on_cleanup(move || {
            if let (Some(window), Some(id)) = (web_sys::window(), raf_id.take()) {
                let _ = window.cancel_animation_frame(id);
            }
            if let (Some(window), Some(resize)) = (web_sys::window(), resize_holder.borrow_mut().take()) {
                let _ = window.remove_event_listener_with_callback(
                    "resize",
                    resize.as_ref().unchecked_ref(),
                );
            }
            frame_holder.borrow_mut().take();
            engine.borrow_mut().take();
        });
    }

    view! { <canvas class="backdrop" node_ref=canvas_ref aria-hidden="true"></canvas> }
}
