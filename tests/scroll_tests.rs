// Host-side tests for scroll progress and the horizontal parallax mapping.

use site_core::constants::{MOBILE_BREAKPOINT_PX, PARALLAX_MAX_SHIFT_PCT};
use site_core::{
    is_mobile, scroll_progress, translation_percent, MotionPreference, ParallaxConfig,
    ParallaxMapper, ScrollSample,
};

const VH: f64 = 800.0;
const HEIGHT: f64 = 1200.0;

fn at_top(top: f64) -> ScrollSample {
    ScrollSample {
        top,
        height: HEIGHT,
        viewport_height: VH,
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn progress_spans_entry_to_exit() {
    // Top edge at the viewport bottom: just entering.
    assert!(approx(scroll_progress(&at_top(VH)), 0.0));
    // Bottom edge at the viewport top: just leaving.
    assert!(approx(scroll_progress(&at_top(-HEIGHT)), 1.0));
    // Halfway through the travel range.
    let mid = VH - (VH + HEIGHT) * 0.5;
    assert!(approx(scroll_progress(&at_top(mid)), 0.5));
}

#[test]
fn progress_is_clamped_outside_the_tracked_range() {
    for top in [VH + 1.0, 5_000.0, f64::MAX] {
        assert_eq!(scroll_progress(&at_top(top)), 0.0);
    }
    for top in [-HEIGHT - 1.0, -50_000.0, f64::MIN] {
        assert_eq!(scroll_progress(&at_top(top)), 1.0);
    }
    let degenerate = ScrollSample::default();
    assert_eq!(scroll_progress(&degenerate), 0.0);
    assert_eq!(scroll_progress(&at_top(f64::NAN)), 0.0);
}

#[test]
fn translation_is_linear_in_progress() {
    let cfg = ParallaxConfig::default();
    assert!(approx(translation_percent(0.0, &cfg), 0.0));
    assert!(approx(translation_percent(1.0, &cfg), PARALLAX_MAX_SHIFT_PCT));
    for i in 0..=10 {
        let p = i as f64 / 10.0;
        assert!(approx(translation_percent(p, &cfg), p * -60.0));
    }
}

#[test]
fn breakpoint_is_exclusive() {
    let cfg = ParallaxConfig::default();
    assert!(is_mobile(MOBILE_BREAKPOINT_PX - 1.0, &cfg));
    assert!(!is_mobile(MOBILE_BREAKPOINT_PX, &cfg));
}

#[test]
fn mapper_applies_translation_on_desktop() {
    let mut m = ParallaxMapper::new(MotionPreference::NoPreference, 1280.0, ParallaxConfig::default());
    assert!(m.is_enabled());
    let t = m.on_scroll_sample(&at_top(-HEIGHT));
    assert!(approx(t, -60.0));
    assert!(approx(m.progress(), 1.0));
    assert_eq!(m.css_transform(), "translateX(-60.000%)");
}

#[test]
fn mapper_holds_zero_on_mobile_or_reduced_motion() {
    let mut mobile = ParallaxMapper::new(MotionPreference::NoPreference, 375.0, ParallaxConfig::default());
    assert!(!mobile.is_enabled());
    assert_eq!(mobile.on_scroll_sample(&at_top(-HEIGHT)), 0.0);

    let mut reduced = ParallaxMapper::new(MotionPreference::Reduce, 1280.0, ParallaxConfig::default());
    assert!(!reduced.is_enabled());
    assert_eq!(reduced.on_scroll_sample(&at_top(-HEIGHT)), 0.0);
    // Progress is still tracked so re-enabling resumes at the right offset.
    assert!(approx(reduced.progress(), 1.0));
    reduced.set_preference(MotionPreference::NoPreference);
    assert!(approx(reduced.translation(), -60.0));
}

#[test]
fn resize_across_breakpoint_toggles_parallax() {
    let mut m = ParallaxMapper::new(MotionPreference::NoPreference, 1280.0, ParallaxConfig::default());
    m.on_scroll_sample(&at_top(0.0));
    let desktop = m.translation();
    assert!(desktop < 0.0);

    m.on_viewport(500.0);
    assert!(!m.is_enabled());
    assert_eq!(m.translation(), 0.0);

    m.on_viewport(1024.0);
    assert!(approx(m.translation(), desktop));
}
