// Host-side tests for constants and the CSS value builders.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod css {
    include!("../src/css.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(TOTAL_SCENES >= 1);

    // Reveal cutoffs are fractions of a scene
    assert!(OPENING_HINT_CUTOFF > 0.0 && OPENING_HINT_CUTOFF < 1.0);
    assert!(END_MARKER_CUTOFF > 0.0 && END_MARKER_CUTOFF < 1.0);

    // Fade and ramp rates reach their endpoint within a scene
    assert!(OPENING_TEXT_FADE_RATE >= 1.0);
    assert!(FIRE_RAMP_RATE >= 1.0);

    // Opacity-adjacent spans stay sane
    assert!(DARKNESS_MAX > 0.0 && DARKNESS_MAX <= 1.0);
    assert!(SUN_SCALE_BASE > 0.0);
    assert!(SUN_SCALE_BASE + SUN_SCALE_SPAN <= 2.0);

    // Particle populations are bounded
    assert!(EMBER_MAX > 0 && EMBER_MAX <= 100);
    assert!(STAR_COUNT > 0 && STAR_COUNT <= 100);
    assert!(MOTE_COUNT > 0 && MOTE_COUNT <= 100);
}

#[test]
fn sun_travel_moves_upward() {
    assert!(SUN_TRAVEL_FROM_PX > SUN_TRAVEL_TO_PX);
}

#[test]
fn ray_fan_divides_the_circle() {
    assert_eq!(360 % SUN_RAY_COUNT, 0);
}

#[test]
fn css_color_builders_format_whole_channels() {
    assert_eq!(css::hsl(200.0, 70.0, 80.0), "hsl(200, 70%, 80%)");
    assert_eq!(css::hsl(199.6, 70.4, 80.0), "hsl(200, 70%, 80%)");
    assert_eq!(css::hsla(25.0, 100.0, 50.0, 0.5), "hsla(25, 100%, 50%, 0.50)");
}

#[test]
fn css_length_builders() {
    assert_eq!(css::px(50.0), "50.0px");
    assert_eq!(css::pct(33.25), "33.2%");
    assert_eq!(css::alpha(0.5), "0.500");
}

#[test]
fn css_gradients_have_three_and_two_stops() {
    let g3 = css::vertical_gradient("a", "b", "c");
    assert_eq!(g3, "linear-gradient(180deg, a 0%, b 50%, c 100%)");
    let g2 = css::vertical_gradient2("a", "b");
    assert_eq!(g2, "linear-gradient(180deg, a 0%, b 100%)");
}
