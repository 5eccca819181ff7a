//! Behavioral tuning shared by the web front-end and host tests.

// Motion preference
pub const MOTION_STORAGE_KEY: &str = "limitless-motion";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Pointer tilt
pub const TILT_INPUT_SCALE: f32 = 50.0; // normalized offset [-1, 1] -> [-50, 50]
pub const TILT_MAX_DEG: f32 = 8.0; // |rotation| never exceeds this

// Horizontal parallax
pub const PARALLAX_MAX_SHIFT_PCT: f64 = -60.0; // translation at progress == 1
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0; // widths below this disable parallax

// Contact form
pub const SUBMIT_LATENCY_MS: u32 = 800;
