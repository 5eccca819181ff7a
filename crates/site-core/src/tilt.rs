use crate::constants::{TILT_INPUT_SCALE, TILT_MAX_DEG};
use crate::motion::MotionPreference;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    pub input_scale: f32,
    pub max_deg: f32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            input_scale: TILT_INPUT_SCALE,
            max_deg: TILT_MAX_DEG,
        }
    }
}

/// Rotation applied to the hero content, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
}

impl Tilt {
    pub const ZERO: Tilt = Tilt {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
    };

    pub fn css_transform(&self) -> String {
        format!(
            "perspective(1200px) rotateX({:.3}deg) rotateY({:.3}deg)",
            self.rotate_x_deg, self.rotate_y_deg
        )
    }
}

/// Linear interpolation from `[in_lo, in_hi]` to `[out_lo, out_hi]`, clamped to
/// the output range.
#[inline]
pub fn map_range_clamped(v: f32, in_lo: f32, in_hi: f32, out_lo: f32, out_hi: f32) -> f32 {
    let span = in_hi - in_lo;
    if span.abs() < f32::EPSILON || !v.is_finite() {
        return (out_lo + out_hi) * 0.5;
    }
    let t = ((v - in_lo) / span).clamp(0.0, 1.0);
    out_lo + (out_hi - out_lo) * t
}

/// Pointer offset from the viewport center, each axis in [-1, 1].
#[inline]
pub fn normalized_offset(pointer: Vec2, viewport: Vec2) -> Vec2 {
    let center = viewport * 0.5;
    if center.x <= 0.0 || center.y <= 0.0 {
        return Vec2::ZERO;
    }
    ((pointer - center) / center).clamp(Vec2::splat(-1.0), Vec2::splat(1.0))
}

/// Cross-coupled mapping: horizontal movement turns around the vertical axis
/// and vertical movement around the horizontal axis, so the content leans
/// toward the cursor.
pub fn tilt_for_pointer(pointer: Vec2, viewport: Vec2, config: &TiltConfig) -> Tilt {
    let scaled = normalized_offset(pointer, viewport) * config.input_scale;
    let s = config.input_scale;
    let m = config.max_deg;
    Tilt {
        rotate_x_deg: map_range_clamped(scaled.y, -s, s, m, -m),
        rotate_y_deg: map_range_clamped(scaled.x, -s, s, -m, m),
    }
}

/// Tilt state for the hero. Produces updates only while motion is allowed.
#[derive(Clone, Debug)]
pub struct TiltTracker {
    config: TiltConfig,
    active: bool,
    current: Tilt,
}

impl TiltTracker {
    pub fn new(preference: MotionPreference, config: TiltConfig) -> Self {
        Self {
            config,
            active: !preference.is_reduced(),
            current: Tilt::ZERO,
        }
    }

    /// Returns true when the active state changed. Deactivation resets the
    /// rotation to zero.
    pub fn set_preference(&mut self, preference: MotionPreference) -> bool {
        let active = !preference.is_reduced();
        if active == self.active {
            return false;
        }
        self.active = active;
        if !active {
            self.current = Tilt::ZERO;
        }
        log::debug!("[tilt] active={}", active);
        true
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn on_pointer_move(&mut self, pointer: Vec2, viewport: Vec2) -> Option<Tilt> {
        if !self.active {
            return None;
        }
        self.current = tilt_for_pointer(pointer, viewport, &self.config);
        Some(self.current)
    }

    #[inline]
    pub fn current(&self) -> Tilt {
        self.current
    }
}
