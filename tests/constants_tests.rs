// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use backdrop_core::*;
use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn render_constants_are_sane() {
    assert!(MSAA_SAMPLES == 1 || MSAA_SAMPLES == 4);
    assert!(POINT_SIZE_SCALE > 0.0);
    assert!(MAX_FRAME_LATENCY >= 1);
    assert_eq!(CLEAR_COLOR[3], 0.0, "clear must stay transparent");
    assert!(!CONTAINER_ID.is_empty() && !CONTAINER_ID.starts_with('#'));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_constants_have_logical_relationships() {
    // smoothing must close part of the gap without overshooting
    assert!(CAMERA_SMOOTHING > 0.0 && CAMERA_SMOOTHING < 1.0);
    assert!(CAMERA_NEAR > 0.0 && CAMERA_FAR > CAMERA_NEAR);
    assert!(CAMERA_Z > CAMERA_NEAR && CAMERA_Z < CAMERA_FAR);

    // every particle must fit inside the far plane from any sway position
    let half = PARTICLE_CUBE_SIZE / 2.0;
    let worst = ((CAMERA_SWAY + half).powi(2) * 2.0 + (CAMERA_Z + half).powi(2)).sqrt();
    assert!(worst < CAMERA_FAR);

    assert!(PARTICLE_SPIN_X < PARTICLE_SPIN_Y);
    assert!(PARTICLE_HUE_MIN + PARTICLE_HUE_SPAN <= 1.0);
    assert_eq!(SHAPE_POSITIONS.len(), SHAPE_COUNT);
    assert!(FOG_DENSITY > 0.0);
    assert!(SHAPE_OPACITY > 0.0 && SHAPE_OPACITY < PARTICLE_OPACITY);
}
