use crate::components::about::About;
use crate::components::connect::Connect;
use crate::components::hero::Hero;
use crate::components::navbar::NavBar;
use crate::components::projects::Projects;
use crate::components::terminal_overlay::TerminalOverlay;
use crate::libs::easter_egg::use_konami_reveal;
use crate::libs::scroll::use_reveal_on_scroll;
use crate::state::profile::PROFILE;
use crate::utils::spacing::CONTENT_PADDING;
use dioxus::prelude::*;

#[component]
pub fn HomePage() -> Element {
    // Secret terminal: one key listener for as long as the page is mounted
    let easter_egg = use_konami_reveal();
    use_reveal_on_scroll();

    let show_terminal = easter_egg.read().is_active();
    let reveal_id = easter_egg.read().reveals();

    rsx! {
      main { class: "page",
        if show_terminal {
          TerminalOverlay { key: "{reveal_id}", lines: PROFILE.terminal_lines.clone() }
        }

        NavBar {}

        div { class: CONTENT_PADDING,
          Hero {}
          About {}
          Projects {}
          Connect {}
        }
      }
    }
}
