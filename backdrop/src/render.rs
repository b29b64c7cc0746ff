//! Rendering: draws the backdrop scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of the simulation state and produces pixels;
//! it does not mutate any animation state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::frame`]) handles the result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{CONNECT_BOW, GLOW_RATIO, LATTICE_DOT_RADIUS, LATTICE_STEP, RING_RATIO};
use crate::node::NetworkNode;
use crate::sim;

/// Lattice dot fill.
const LATTICE_COLOR: &str = "rgba(94, 234, 212, 0.08)";

/// Node core fill.
const NODE_COLOR: &str = "#5eead4";

/// Inner glow color stop.
const GLOW_INNER: &str = "rgba(94, 234, 212, 0.55)";

/// Outer glow color stop (fully transparent).
const GLOW_OUTER: &str = "rgba(94, 234, 212, 0.0)";

/// Draw the full scene: lattice, connections, glows, and pulse rings.
///
/// `width` and `height` are in CSS pixels; `dpr` is the device pixel ratio
/// applied to the backing store. `time_ms` drives the per-node pulse phase.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    nodes: &[NetworkNode],
    width: f64,
    height: f64,
    dpr: f64,
    time_ms: f64,
) -> Result<(), JsValue> {
    // Layer 1: clear and set up the DPR transform.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, width, height);

    // Layer 2: background dot lattice.
    draw_lattice(ctx, width, height)?;

    // Layer 3: connections between nearby node pairs (under the glows).
    draw_connections(ctx, nodes)?;

    // Layer 4: node glows and pulse rings.
    for (index, node) in nodes.iter().enumerate() {
        draw_node(ctx, node, index, time_ms)?;
    }

    Ok(())
}

fn draw_lattice(ctx: &CanvasRenderingContext2d, width: f64, height: f64) -> Result<(), JsValue> {
    ctx.set_fill_style_str(LATTICE_COLOR);

    let mut y = LATTICE_STEP / 2.0;
    while y < height {
        let mut x = LATTICE_STEP / 2.0;
        while x < width {
            ctx.begin_path();
            ctx.arc(x, y, LATTICE_DOT_RADIUS, 0.0, 2.0 * PI)?;
            ctx.fill();
            x += LATTICE_STEP;
        }
        y += LATTICE_STEP;
    }

    Ok(())
}

fn draw_connections(ctx: &CanvasRenderingContext2d, nodes: &[NetworkNode]) -> Result<(), JsValue> {
    ctx.set_line_width(1.0);

    for (i, a) in nodes.iter().enumerate() {
        for b in &nodes[i + 1..] {
            let dx = b.x - a.x;
            let dy = b.y - a.y;
            let dist = dx.hypot(dy);
            let Some(alpha) = sim::connection_alpha(dist) else {
                continue;
            };

            // Bow the curve perpendicular to the segment midpoint.
            let (cx, cy) = if dist > 0.0 {
                let mid_x = (a.x + b.x) / 2.0;
                let mid_y = (a.y + b.y) / 2.0;
                (mid_x - dy / dist * CONNECT_BOW, mid_y + dx / dist * CONNECT_BOW)
            } else {
                (a.x, a.y)
            };

            ctx.set_stroke_style_str(&format!("rgba(94, 234, 212, {alpha:.3})"));
            ctx.begin_path();
            ctx.move_to(a.x, a.y);
            ctx.quadratic_curve_to(cx, cy, b.x, b.y);
            ctx.stroke();
        }
    }

    Ok(())
}

fn draw_node(
    ctx: &CanvasRenderingContext2d,
    node: &NetworkNode,
    index: usize,
    time_ms: f64,
) -> Result<(), JsValue> {
    ctx.save();

    // Radial glow behind the core.
    let glow_radius = node.radius * GLOW_RATIO;
    let gradient = ctx.create_radial_gradient(node.x, node.y, 0.0, node.x, node.y, glow_radius)?;
    gradient.add_color_stop(0.0, GLOW_INNER)?;
    gradient.add_color_stop(1.0, GLOW_OUTER)?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.begin_path();
    ctx.arc(node.x, node.y, glow_radius, 0.0, 2.0 * PI)?;
    ctx.fill();

    // Solid core.
    ctx.set_fill_style_str(NODE_COLOR);
    ctx.begin_path();
    ctx.arc(node.x, node.y, node.radius, 0.0, 2.0 * PI)?;
    ctx.fill();

    // Pulsing ring, phase-offset per node.
    let pulse = sim::pulse_scale(time_ms, index);
    let ring_radius = node.radius * RING_RATIO * pulse;
    let ring_alpha = 0.4 * (2.0 - pulse).clamp(0.0, 1.0);
    ctx.set_stroke_style_str(&format!("rgba(94, 234, 212, {ring_alpha:.3})"));
    ctx.set_line_width(1.5);
    ctx.begin_path();
    ctx.arc(node.x, node.y, ring_radius, 0.0, 2.0 * PI)?;
    ctx.stroke();

    ctx.restore();
    Ok(())
}
