/// Site constants used throughout the page
/// This file centralizes naming and metadata constants

/// Document title shown in the browser tab
pub const SITE_TITLE: &str = "Mahdi Hazrati - Frontend Developer";

/// Meta description for search engines and link previews
pub const SITE_DESCRIPTION: &str =
    "Portfolio website of Mahdi Hazrati, a frontend developer specializing in React and Next.js";

/// Version of the site (should match Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// CSS/DOM id prefix for injected styles and window state
pub const CSS_ID_PREFIX: &str = "portfolio";
