use crate::utils::constants::{ SITE_DESCRIPTION, SITE_TITLE };
use dioxus::prelude::*;

const GLOBAL_STYLES_CSS: &str = include_str!("../../assets/style.css");

/// Document head: title, description and the global stylesheet
#[component]
pub fn Header() -> Element {
    rsx! {
      document::Title { "{SITE_TITLE}" }
      document::Meta { name: "description", content: SITE_DESCRIPTION }
      document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }

      // Inline global styles so web and desktop builds share one code path
      style { dangerous_inner_html: GLOBAL_STYLES_CSS }
    }
}
