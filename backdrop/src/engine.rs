use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::node::{self, NetworkNode};
use crate::render;
use crate::sim;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Nominal frame duration at 60 fps, in milliseconds.
const FRAME_MS: f64 = 1000.0 / 60.0;

/// Largest frame delta the simulation will integrate. Background tabs can
/// pause the animation-frame callback for seconds; replaying that whole gap
/// in one step would fling every node against a wall.
const MAX_DT_MS: f64 = 100.0;

/// Core animation state: all logic that doesn't depend on the canvas
/// element.
///
/// Separated from `Engine` so it can be tested without WASM/browser
/// dependencies.
pub struct BackdropCore {
    pub nodes: Vec<NetworkNode>,
    pub width: f64,
    pub height: f64,
    pub time_ms: f64,
    last_timestamp_ms: Option<f64>,
}

impl BackdropCore {
    /// Seed the node set for a viewport. `rand01` is a uniform `[0, 1)`
    /// source; the browser host passes `Math.random`.
    #[must_use]
    pub fn new(width: f64, height: f64, rand01: &mut dyn FnMut() -> f64) -> Self {
        Self {
            nodes: node::seed_nodes(width, height, rand01),
            width,
            height,
            time_ms: 0.0,
            last_timestamp_ms: None,
        }
    }

    /// Adopt a new viewport size, rescaling node positions proportionally
    /// so the layout keeps its relative shape.
    pub fn resize(&mut self, width: f64, height: f64) {
        if self.width > 0.0 && self.height > 0.0 {
            let sx = width / self.width;
            let sy = height / self.height;
            for n in &mut self.nodes {
                n.x *= sx;
                n.y *= sy;
            }
        }
        self.width = width;
        self.height = height;
    }

    /// Advance the simulation to an animation-frame timestamp.
    ///
    /// The first call only records the timestamp; subsequent calls step
    /// the nodes by the elapsed time, capped at [`MAX_DT_MS`].
    pub fn advance(&mut self, timestamp_ms: f64) {
        let dt_ms = match self.last_timestamp_ms {
            Some(last) => (timestamp_ms - last).clamp(0.0, MAX_DT_MS),
            None => 0.0,
        };
        self.last_timestamp_ms = Some(timestamp_ms);
        self.time_ms += dt_ms;

        if dt_ms > 0.0 {
            sim::step(&mut self.nodes, self.width, self.height, dt_ms / FRAME_MS);
        }
    }
}

/// The full backdrop engine. Wraps [`BackdropCore`] and owns the browser
/// canvas element plus its 2D context.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    dpr: f64,
    pub core: BackdropCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element has no 2D rendering context; without
    /// one there is nothing to animate, so initialization aborts.
    pub fn new(
        canvas: HtmlCanvasElement,
        width: f64,
        height: f64,
        rand01: &mut dyn FnMut() -> f64,
    ) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas 2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let mut engine = Self {
            canvas,
            ctx,
            dpr: 1.0,
            core: BackdropCore::new(width, height, rand01),
        };
        engine.set_viewport(width, height, 1.0);
        Ok(engine)
    }

    /// Update viewport dimensions and device pixel ratio, resizing the
    /// backing store to match.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.dpr = dpr;
        self.canvas.set_width((width_css * dpr).max(1.0) as u32);
        self.canvas.set_height((height_css * dpr).max(1.0) as u32);
        self.core.resize(width_css, height_css);
    }

    /// Run one animation frame: advance the simulation and redraw.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn frame(&mut self, timestamp_ms: f64) -> Result<(), JsValue> {
        self.core.advance(timestamp_ms);
        render::draw(
            &self.ctx,
            &self.core.nodes,
            self.core.width,
            self.core.height,
            self.dpr,
            self.core.time_ms,
        )
    }
}
