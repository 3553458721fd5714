use crate::components::navbar::Section;
use crate::state::profile::{ LinkKind, SocialLink, PROFILE };
use crate::utils::spacing::{ CARD_PADDING, GAP_SPACING };
use dioxus::prelude::*;
use lucide_dioxus::{ ExternalLink, Github, Linkedin, Youtube };

/// Outbound profile links
#[component]
pub fn Connect() -> Element {
    rsx! {
      section {
        id: Section::Connect.anchor(),
        class: "mb-16 reveal",
        "data-reveal": "true",
        h3 { class: "section-title mb-8", "<Connect /> 🌐" }
        div { class: "grid grid-4 {GAP_SPACING}",
          for link in PROFILE.links.iter() {
            SocialLinkCard { key: "{link.url}", link: link.clone() }
          }
        }
      }
    }
}

#[component]
fn SocialLinkCard(link: SocialLink) -> Element {
    rsx! {
      a {
        href: "{link.url}",
        target: "_blank",
        rel: "noopener noreferrer",
        class: "card {CARD_PADDING} social-link hover-grow",
        {
            match link.kind {
                LinkKind::Github => rsx! { Github { class: "w-5 h-5" } },
                LinkKind::Linkedin => rsx! { Linkedin { class: "w-5 h-5" } },
                LinkKind::Youtube => rsx! { Youtube { class: "w-5 h-5" } },
                LinkKind::Website => rsx! { ExternalLink { class: "w-5 h-5" } },
            }
        }
        span { "{link.label}" }
      }
    }
}
