use dioxus::prelude::*;

/// Full-screen fake terminal shown while the secret is revealed
#[component]
pub fn TerminalOverlay(lines: Vec<String>) -> Element {
    rsx! {
      div { class: "terminal-overlay drop-in", role: "dialog", "aria-label": "Secret terminal",
        div { class: "terminal-lines",
          for (index, line) in lines.iter().enumerate() {
            // delay-0 .. delay-4 stagger the typing animation
            p { key: "{index}", class: format!("typing-animation delay-{}", index.min(4)), "{line}" }
          }
        }
      }
    }
}
