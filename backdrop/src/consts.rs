//! Shared numeric constants for the backdrop crate.

// ── Nodes ───────────────────────────────────────────────────────

/// Minimum drift speed per axis, in CSS pixels per frame (60 fps frame).
pub const MIN_SPEED: f64 = 0.08;

/// Maximum drift speed per axis, in CSS pixels per frame.
pub const MAX_SPEED: f64 = 0.45;

/// Base node radius in CSS pixels.
pub const NODE_RADIUS: f64 = 4.0;

/// Extra radius added per the randomized size roll.
pub const NODE_RADIUS_JITTER: f64 = 2.5;

// ── Connections ─────────────────────────────────────────────────

/// Maximum center distance at which two nodes are connected, in CSS pixels.
pub const CONNECT_DIST: f64 = 280.0;

/// Opacity of a connection line at zero distance.
pub const CONNECT_ALPHA_MAX: f64 = 0.35;

/// Perpendicular bow applied to the connection curve control point.
pub const CONNECT_BOW: f64 = 18.0;

// ── Lattice ─────────────────────────────────────────────────────

/// Spacing of the background dot lattice, in CSS pixels.
pub const LATTICE_STEP: f64 = 48.0;

/// Dot radius for the background lattice.
pub const LATTICE_DOT_RADIUS: f64 = 1.0;

// ── Pulse ───────────────────────────────────────────────────────

/// Angular speed of the pulse, in radians per millisecond.
pub const PULSE_SPEED: f64 = 0.0022;

/// Per-node phase offset step, in radians.
pub const PULSE_PHASE_STEP: f64 = std::f64::consts::PI / 4.0;

/// Peak ring growth relative to the node radius (1.0 = no growth).
pub const PULSE_AMPLITUDE: f64 = 0.35;

/// Ring radius as a multiple of the node radius before pulsing.
pub const RING_RATIO: f64 = 2.2;

/// Glow gradient radius as a multiple of the node radius.
pub const GLOW_RATIO: f64 = 5.0;
