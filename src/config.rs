use log::Level;

pub const COMPANY_NAME: &str = "BuildMaster Construction";
pub const BRAND: &str = "BuildMaster";

pub const ADDRESS: &str = "123 Construction Ave, Building City, BC 10001";
pub const PHONE: &str = "(555) 123-4567";
pub const EMAIL: &str = "info@buildmaster.com";
pub const PHONE_HOURS: &str = "Mon-Fri, 8:00 AM - 6:00 PM";
pub const OFFICE_HOURS: &[&str] = &[
    "Monday - Friday: 8:00 AM - 6:00 PM",
    "Saturday: 9:00 AM - 2:00 PM",
    "Sunday: Closed",
];

/// Header switches from transparent to solid past this many pixels.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Viewport width at which the desktop navigation replaces the mobile menu.
pub const DESKTOP_BREAKPOINT: f64 = 768.0;

/// Title shown on every page, after the page's own name.
pub fn title_suffix() -> &'static str {
    COMPANY_NAME
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
