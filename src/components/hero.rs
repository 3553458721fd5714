use crate::state::profile::PROFILE;
use dioxus::prelude::*;
use lucide_dioxus::Download;

#[component]
pub fn Hero() -> Element {
    let profile = &*PROFILE;

    rsx! {
      section { class: "hero reveal", "data-reveal": "true",
        div { class: "hero-wave", "👋" }
        h1 { class: "hero-title gradient-text", "<Hello World />" }
        h2 { class: "hero-name", "I'm {profile.name}" }
        p { class: "hero-role text-muted", "{profile.role}" }
        a {
          href: "{profile.cv_url}",
          target: "_blank",
          rel: "noopener noreferrer",
          class: "btn-primary pressable",
          Download { class: "w-5 h-5" }
          "Download CV"
        }
      }
    }
}
