//! Pure per-frame simulation: drift, edge bounce, pulse phase, and
//! connection fade. No drawing happens here, so everything is testable
//! without a canvas.

use crate::consts::{CONNECT_ALPHA_MAX, CONNECT_DIST, PULSE_AMPLITUDE, PULSE_PHASE_STEP, PULSE_SPEED};
use crate::node::NetworkNode;

#[cfg(test)]
#[path = "sim_test.rs"]
mod sim_test;

/// Advance every node by one simulation step.
///
/// `dt` is in 60 fps frame units (1.0 = one nominal frame). A node that
/// crosses a boundary has that velocity component reflected exactly once
/// and its position clamped back inside `[0, dimension]`.
pub fn step(nodes: &mut [NetworkNode], width: f64, height: f64, dt: f64) {
    for node in nodes {
        node.x += node.vx * dt;
        node.y += node.vy * dt;

        if node.x < 0.0 {
            node.x = 0.0;
            node.vx = -node.vx;
        } else if node.x > width {
            node.x = width;
            node.vx = -node.vx;
        }

        if node.y < 0.0 {
            node.y = 0.0;
            node.vy = -node.vy;
        } else if node.y > height {
            node.y = height;
            node.vy = -node.vy;
        }
    }
}

/// Ring growth factor for a node at a given animation time.
///
/// Each node gets a phase offset from its index so the pulses are not in
/// lockstep. The result oscillates in `[1 - amplitude, 1 + amplitude]`.
#[must_use]
pub fn pulse_scale(time_ms: f64, index: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let phase = PULSE_PHASE_STEP * index as f64;
    1.0 + PULSE_AMPLITUDE * (time_ms * PULSE_SPEED + phase).sin()
}

/// Opacity for a connection line between two nodes `dist` apart.
///
/// Returns `None` beyond the connection threshold; otherwise the alpha
/// falls off linearly with distance.
#[must_use]
pub fn connection_alpha(dist: f64) -> Option<f64> {
    if dist >= CONNECT_DIST {
        return None;
    }
    Some(CONNECT_ALPHA_MAX * (1.0 - dist / CONNECT_DIST))
}
