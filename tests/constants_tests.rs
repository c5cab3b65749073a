// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so the web constants are included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use starfield_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn field_constants_are_within_reasonable_bounds() {
    assert!(BASE_SPACING > 0.0);
    assert!(BASE_SIZE_FRACTION > 0.0 && BASE_SIZE_FRACTION < 1.0);

    // ambient alpha never leaves [0, 1]
    assert!(ALPHA_BASE_MIN >= 0.0);
    assert!(ALPHA_BASE_MIN + ALPHA_BASE_RANGE <= 1.0);

    assert!(POINTER_RADIUS > BASE_SPACING);
    assert!(POINTER_ALPHA_GAIN > 0.0 && POINTER_ALPHA_GAIN <= 1.0);
    assert!(WAVE_WARMUP > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn flash_constants_have_logical_relationships() {
    assert!(FLASH_MIN_AGE > 0);
    assert!(FLASH_MIN_AGE < FLASH_MAX_AGE);
    assert!(FLASH_MIN_SCALE <= FLASH_MAX_SCALE);
    assert!(SPAWN_MARGIN >= 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn glow_and_shape_factors() {
    assert!(GLOW_THRESHOLD > ALPHA_BASE_MIN);
    assert!(GLOW_RADIUS_FACTOR > 1.0);
    assert!(STAR_INNER_FACTOR < STAR_OUTER_FACTOR);
    assert!(STATIC_SIZE_MIN < STATIC_SIZE_MAX);
}

#[test]
fn far_away_sentinel_is_outside_any_surface() {
    let [x, y] = FAR_AWAY;
    assert!(x + POINTER_RADIUS < 0.0);
    assert!(y + POINTER_RADIUS < 0.0);
}

#[test]
fn rgba_formats_and_clamps() {
    assert_eq!(rgba(STAR_RGB, 0.185), "rgba(167, 139, 250, 0.185)");
    assert_eq!(rgba(GLOW_RGB, 2.0), "rgba(139, 92, 246, 1.000)");
    assert_eq!(rgba(GLOW_RGB, -1.0), "rgba(139, 92, 246, 0.000)");
}

#[test]
fn layer_style_never_intercepts_input() {
    let fixed = layer_style(true, 0);
    assert!(fixed.contains("position:fixed"));
    assert!(fixed.contains("height:100%"));
    assert!(fixed.contains("pointer-events:none"));
    assert!(fixed.contains("z-index:-1"));

    let doc = layer_style(false, 4200);
    assert!(doc.contains("position:absolute"));
    assert!(doc.contains("height:4200px"));
    assert!(doc.contains("pointer-events:none"));
    assert!(doc.contains(BACKGROUND_CSS));
}

#[test]
fn ready_state_matches_dom_string() {
    // `document.readyState` is a plain string in web-sys
    assert_eq!(READY_STATE_LOADING, "loading");
}
