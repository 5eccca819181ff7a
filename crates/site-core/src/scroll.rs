//! Scroll-linked horizontal parallax for the story section.
//!
//! Progress runs from 0 when the container's top edge enters at the bottom of
//! the viewport to 1 when its bottom edge leaves through the top. It maps
//! linearly onto a horizontal shift of the card track.

use crate::constants::{MOBILE_BREAKPOINT_PX, PARALLAX_MAX_SHIFT_PCT};
use crate::motion::MotionPreference;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxConfig {
    pub max_shift_pct: f64,
    pub mobile_breakpoint_px: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            max_shift_pct: PARALLAX_MAX_SHIFT_PCT,
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
        }
    }
}

/// Container geometry relative to the viewport, as reported by
/// `getBoundingClientRect` at the time of a scroll or resize event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
}

pub fn scroll_progress(sample: &ScrollSample) -> f64 {
    let travel = sample.viewport_height + sample.height;
    if !(travel > 0.0) || !sample.top.is_finite() {
        return 0.0;
    }
    ((sample.viewport_height - sample.top) / travel).clamp(0.0, 1.0)
}

#[inline]
pub fn translation_percent(progress: f64, config: &ParallaxConfig) -> f64 {
    progress.clamp(0.0, 1.0) * config.max_shift_pct
}

#[inline]
pub fn is_mobile(viewport_width: f64, config: &ParallaxConfig) -> bool {
    viewport_width < config.mobile_breakpoint_px
}

#[derive(Clone, Debug)]
pub struct ParallaxMapper {
    config: ParallaxConfig,
    reduced: bool,
    mobile: bool,
    progress: f64,
}

impl ParallaxMapper {
    pub fn new(preference: MotionPreference, viewport_width: f64, config: ParallaxConfig) -> Self {
        Self {
            mobile: is_mobile(viewport_width, &config),
            reduced: preference.is_reduced(),
            config,
            progress: 0.0,
        }
    }

    pub fn set_preference(&mut self, preference: MotionPreference) {
        self.reduced = preference.is_reduced();
    }

    /// Resize handler: re-evaluates the mobile breakpoint.
    pub fn on_viewport(&mut self, viewport_width: f64) {
        let mobile = is_mobile(viewport_width, &self.config);
        if mobile != self.mobile {
            log::debug!("[parallax] mobile={}", mobile);
        }
        self.mobile = mobile;
    }

    /// Records a new geometry sample and returns the translation to apply.
    pub fn on_scroll_sample(&mut self, sample: &ScrollSample) -> f64 {
        self.progress = scroll_progress(sample);
        self.translation()
    }

    #[inline]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        !self.mobile && !self.reduced
    }

    /// Horizontal shift in percent; held at 0 while disabled.
    pub fn translation(&self) -> f64 {
        if self.is_enabled() {
            translation_percent(self.progress, &self.config)
        } else {
            0.0
        }
    }

    pub fn css_transform(&self) -> String {
        format!("translateX({:.3}%)", self.translation())
    }
}
