#![allow(clippy::float_cmp)]

use super::*;

fn core(width: f64, height: f64) -> BackdropCore {
    let mut r = || 0.5;
    BackdropCore::new(width, height, &mut r)
}

// --- construction ---

#[test]
fn new_core_seeds_nodes_for_viewport() {
    let core = core(1280.0, 720.0);
    assert_eq!(core.nodes.len(), crate::node::SEED_ANCHORS.len());
    assert_eq!(core.width, 1280.0);
    assert_eq!(core.height, 720.0);
    assert_eq!(core.time_ms, 0.0);
}

// --- resize ---

#[test]
fn resize_rescales_node_positions_proportionally() {
    let mut core = core(100.0, 100.0);
    let before = core.nodes.clone();
    core.resize(300.0, 150.0);
    for (old, new) in before.iter().zip(&core.nodes) {
        assert!((new.x - old.x * 3.0).abs() < 1e-9);
        assert!((new.y - old.y * 1.5).abs() < 1e-9);
    }
    assert_eq!(core.width, 300.0);
    assert_eq!(core.height, 150.0);
}

#[test]
fn resize_from_zero_viewport_only_adopts_dimensions() {
    let mut core = core(0.0, 0.0);
    core.resize(800.0, 600.0);
    assert_eq!(core.width, 800.0);
    assert_eq!(core.height, 600.0);
    for n in &core.nodes {
        assert!(n.x.is_finite());
        assert!(n.y.is_finite());
    }
}

// --- advance ---

#[test]
fn first_advance_records_timestamp_without_moving() {
    let mut core = core(800.0, 600.0);
    let before = core.nodes.clone();
    core.advance(5_000.0);
    assert_eq!(core.nodes, before);
    assert_eq!(core.time_ms, 0.0);
}

#[test]
fn advance_accumulates_animation_time() {
    let mut core = core(800.0, 600.0);
    core.advance(1_000.0);
    core.advance(1_016.0);
    core.advance(1_033.0);
    assert!((core.time_ms - 33.0).abs() < 1e-9);
}

#[test]
fn advance_moves_nodes_between_frames() {
    let mut core = core(800.0, 600.0);
    core.advance(0.0);
    let before = core.nodes.clone();
    core.advance(16.0);
    assert_ne!(core.nodes, before);
}

#[test]
fn advance_caps_large_frame_gaps() {
    // A tab left in the background for ten seconds must not integrate the
    // whole gap in one step.
    let mut capped = core(800.0, 600.0);
    capped.advance(0.0);
    capped.advance(10_000.0);

    let mut stepped = core(800.0, 600.0);
    stepped.advance(0.0);
    stepped.advance(100.0);

    assert_eq!(capped.nodes, stepped.nodes);
    assert_eq!(capped.time_ms, stepped.time_ms);
}

#[test]
fn advance_ignores_backwards_timestamps() {
    let mut core = core(800.0, 600.0);
    core.advance(1_000.0);
    core.advance(1_016.0);
    let before = core.nodes.clone();
    let time_before = core.time_ms;
    core.advance(500.0);
    assert_eq!(core.nodes, before);
    assert_eq!(core.time_ms, time_before);
}

#[test]
fn advance_keeps_nodes_in_bounds_over_a_long_run() {
    let mut core = core(640.0, 360.0);
    let mut ts = 0.0;
    for _ in 0..5_000 {
        core.advance(ts);
        ts += 16.67;
        for n in &core.nodes {
            assert!(n.x >= 0.0 && n.x <= core.width);
            assert!(n.y >= 0.0 && n.y <= core.height);
        }
    }
}
