use crate::consts::{MAX_SPEED, MIN_SPEED, NODE_RADIUS, NODE_RADIUS_JITTER};

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;

/// A single drifting hub node.
///
/// Positions are in CSS pixels within `[0, width] × [0, height]`.
/// Velocities are in CSS pixels per 60 fps frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkNode {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

/// Hand-placed starting anchors as fractions of the viewport, loosely
/// suggesting hub locations spread across the hero area.
pub const SEED_ANCHORS: [(f64, f64); 8] = [
    (0.12, 0.28),
    (0.30, 0.62),
    (0.42, 0.18),
    (0.55, 0.48),
    (0.68, 0.76),
    (0.78, 0.24),
    (0.88, 0.58),
    (0.22, 0.85),
];

/// Build the fixed node set for a viewport.
///
/// Anchor positions scale with the viewport; velocity magnitude and the
/// small radius jitter come from `rand01`, a uniform `[0, 1)` source
/// supplied by the host (the browser passes `Math.random`, tests pass a
/// deterministic closure).
pub fn seed_nodes(width: f64, height: f64, rand01: &mut dyn FnMut() -> f64) -> Vec<NetworkNode> {
    SEED_ANCHORS
        .iter()
        .map(|&(fx, fy)| NetworkNode {
            x: fx * width,
            y: fy * height,
            vx: drift_velocity(rand01()),
            vy: drift_velocity(rand01()),
            radius: NODE_RADIUS + NODE_RADIUS_JITTER * rand01(),
        })
        .collect()
}

/// Map a uniform `[0, 1)` roll to a signed drift speed, nudged away from
/// zero so every node keeps moving.
fn drift_velocity(roll: f64) -> f64 {
    let signed = (roll - 0.5) * 2.0; // [-1, 1)
    let magnitude = MIN_SPEED + (MAX_SPEED - MIN_SPEED) * signed.abs();
    if signed < 0.0 { -magnitude } else { magnitude }
}
