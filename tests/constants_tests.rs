// Host-side tests for DOM ids and their relationship to the static content.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use site_core::constants::*;
use site_core::content::{ServiceIcon, NAV_LINKS, PORTFOLIO_ITEMS, SERVICES, STORY_CARDS};
use std::collections::HashSet;

#[test]
fn dom_ids_are_unique_and_non_empty() {
    let ids = [
        APP_ROOT_ID,
        MOTION_TOGGLE_ID,
        HERO_ID,
        ABOUT_ID,
        SERVICES_ID,
        WORK_ID,
        CONTACT_ID,
        HERO_CONTENT_ID,
        ABOUT_TRACK_ID,
        PORTFOLIO_FILTERS_ID,
        PORTFOLIO_SELECT_ID,
        PORTFOLIO_GRID_ID,
        CONTACT_FORM_ID,
        CONTACT_NAME_ID,
        CONTACT_EMAIL_ID,
        CONTACT_BRIEF_ID,
        CONTACT_SUBMIT_ID,
    ];
    let mut seen = HashSet::new();
    for id in ids {
        assert!(!id.is_empty());
        assert!(!id.contains(' '), "{:?} is not a valid id", id);
        assert!(seen.insert(id), "duplicate id {:?}", id);
    }
}

#[test]
fn navigation_targets_existing_sections() {
    for link in NAV_LINKS {
        let target = link.href.trim_start_matches('#');
        assert!(
            ALL_SECTION_IDS.contains(&target),
            "{} points at missing section {}",
            link.label,
            link.href
        );
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tuning_constants_are_sane() {
    assert!(TILT_MAX_DEG > 0.0);
    assert!(TILT_INPUT_SCALE > 0.0);
    assert!(PARALLAX_MAX_SHIFT_PCT < 0.0 && PARALLAX_MAX_SHIFT_PCT >= -100.0);
    assert!(MOBILE_BREAKPOINT_PX > 0.0);
    assert_eq!(SUBMIT_LATENCY_MS, 800);
    assert_eq!(MOTION_STORAGE_KEY, "limitless-motion");
    assert!(REDUCED_MOTION_QUERY.contains("prefers-reduced-motion"));
}

#[test]
fn content_has_the_expected_shape() {
    assert_eq!(STORY_CARDS.len(), 5);
    assert_eq!(SERVICES.len(), 4);
    assert_eq!(PORTFOLIO_ITEMS.len(), 6);
    let ids: HashSet<u32> = PORTFOLIO_ITEMS.iter().map(|it| it.id).collect();
    assert_eq!(ids.len(), PORTFOLIO_ITEMS.len());
    assert!(STORY_CARDS.iter().all(|c| c.image_url.starts_with("https://")));
}

#[test]
fn every_nav_target_is_checked_after_mount() {
    let targets: HashSet<&str> = NAV_LINKS
        .iter()
        .map(|l| l.href.trim_start_matches('#'))
        .collect();
    let checked: HashSet<&str> = ALL_SECTION_IDS.into_iter().collect();
    assert!(targets.is_subset(&checked));
    assert!(checked.contains(HERO_ID));
}

#[test]
fn story_copy_matches_the_site_text() {
    let texts: Vec<&str> = STORY_CARDS.iter().map(|c| c.text).collect();
    assert_eq!(
        texts,
        vec![
            "We start with story. The narrative defines form.",
            "Design as performance — every pixel has intent.",
            "Technology as canvas — systems that scale with style.",
            "Motion to guide, never distract. Precision and play.",
            "Outcomes that feel inevitable — crafted without limits.",
        ]
    );
}

#[test]
fn each_service_carries_its_own_icon() {
    let icons: Vec<ServiceIcon> = SERVICES.iter().map(|s| s.icon).collect();
    assert_eq!(
        icons,
        vec![
            ServiceIcon::Palette,
            ServiceIcon::Code,
            ServiceIcon::Rocket,
            ServiceIcon::Sparkles,
        ]
    );
    for icon in icons {
        assert!(!icon.glyph().is_empty());
        assert!(!icon.name().contains(' '));
    }
}
