//! Ambient network-glow animation for the site hero canvas.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns a
//! small fixed set of drifting "hub" nodes: per-frame position updates with
//! elastic edge-bounce, curved connection lines between nearby nodes, and a
//! radial-gradient glow with a pulsing ring per node. The host Leptos layer
//! is responsible only for mounting the canvas, driving the animation-frame
//! callback, and tearing the loop down on unmount.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Canvas-bound engine and testable [`engine::BackdropCore`] |
//! | [`node`] | Node type and seeded initialization |
//! | [`sim`] | Pure per-frame simulation (bounce, pulse, connection fade) |
//! | [`render`] | Scene drawing against `CanvasRenderingContext2d` |
//! | [`consts`] | Shared numeric constants (speeds, thresholds, sizes) |

pub mod consts;
pub mod engine;
pub mod node;
pub mod render;
pub mod sim;
