// DOM ids and class names shared by the section builders.

// Mount point
pub const APP_ROOT_ID: &str = "app";

// Header
pub const MOTION_TOGGLE_ID: &str = "motion-toggle";

// Sections (also anchor targets for the header navigation)
pub const HERO_ID: &str = "top";
pub const ABOUT_ID: &str = "about";
pub const SERVICES_ID: &str = "services";
pub const WORK_ID: &str = "work";
pub const CONTACT_ID: &str = "contact";

// Interactive elements
pub const HERO_CONTENT_ID: &str = "hero-content";
pub const ABOUT_TRACK_ID: &str = "about-track";
pub const PORTFOLIO_FILTERS_ID: &str = "portfolio-filters";
pub const PORTFOLIO_SELECT_ID: &str = "portfolio-select";
pub const PORTFOLIO_GRID_ID: &str = "portfolio-grid";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_NAME_ID: &str = "contact-name";
pub const CONTACT_EMAIL_ID: &str = "contact-email";
pub const CONTACT_BRIEF_ID: &str = "contact-brief";
pub const CONTACT_SUBMIT_ID: &str = "contact-submit";

// Applied to <html> while motion is reduced so CSS entrance animations stop too
pub const REDUCE_MOTION_CLASS: &str = "reduce-motion";

// Portfolio filter button states
pub const FILTER_BUTTON_BASE: &str = "rounded-full border px-3 py-1.5 text-sm transition-colors";
pub const FILTER_BUTTON_ACTIVE: &str = "border-blue-500 bg-blue-500/10 text-blue-300";
pub const FILTER_BUTTON_IDLE: &str = "border-white/10 bg-white/5 text-white/70 hover:text-white";

// Every section the header navigation can target; checked after mount
pub const ALL_SECTION_IDS: [&str; 5] = [HERO_ID, ABOUT_ID, SERVICES_ID, WORK_ID, CONTACT_ID];
