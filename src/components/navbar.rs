use crate::libs::scroll::use_scroll_progress;
use crate::state::profile::PROFILE;
use crate::utils::motion::nav_style;
use dioxus::prelude::*;
use strum::{ EnumIter, IntoEnumIterator };

/// Page sections reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Section {
    About,
    Skills,
    Projects,
    Connect,
}

impl Section {
    /// Element id of the section, also used as the link fragment
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Connect => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::About => "👨‍💻 About",
            Section::Skills => "🚀 Skills",
            Section::Projects => "💡 Projects",
            Section::Connect => "🤝 Connect",
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    let progress = use_scroll_progress();
    let style = nav_style(progress());
    let handle = &PROFILE.handle;

    rsx! {
      nav { class: "navbar", style: "{style}",
        div { class: "navbar-inner",
          h2 { class: "navbar-brand slide-in-left", "<{handle} />" }
          div { class: "navbar-links slide-in-right",
            for section in Section::iter() {
              a { key: "{section:?}", href: format!("#{}", section.anchor()), class: "link", {section.label()} }
            }
          }
        }
      }
    }
}
