#![allow(non_snake_case)]

mod components;
mod libs;
mod state;
mod utils;

use libs::ui;
use utils::constants::{ APP_VERSION, SITE_TITLE };

fn main() {
    // Initialize debug logging first
    utils::logger::init_debug_logging();

    always_print!("🚀 Initializing {} (v{})...", SITE_TITLE, APP_VERSION);

    // Parse the embedded profile up front so a broken file is reported at startup
    let profile = &*state::profile::PROFILE;
    debug_print!(
        "📇 Profile loaded: {} skills, {} projects, {} links",
        profile.skills.len(),
        profile.projects.len(),
        profile.links.len()
    );

    dioxus::launch(ui::app);
}
