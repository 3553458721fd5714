use crate::components::navbar::Section;
use crate::state::profile::{ Project, PROFILE };
use crate::utils::spacing::SECTION_SPACING;
use dioxus::prelude::*;

#[component]
pub fn Projects() -> Element {
    rsx! {
      section {
        id: Section::Projects.anchor(),
        class: "{SECTION_SPACING} reveal",
        "data-reveal": "true",
        h3 { class: "section-title mb-8", "<Projects /> 🛠️" }
        div { class: "grid grid-3 gap-6",
          for (index, project) in PROFILE.projects.iter().enumerate() {
            ProjectCard { key: "{index}", project: project.clone(), index }
          }
        }
      }
    }
}

#[component]
fn ProjectCard(project: Project, index: usize) -> Element {
    let delay = format!("animation-delay: {}ms;", index * 100);

    rsx! {
      div { class: "card p-6 rise-in hover-lift", style: "{delay}",
        h4 { class: "card-title text-xl mb-2", "{project.title}" }
        p { class: "text-muted mb-4", "{project.description}" }
        a { href: "{project.url}", class: "link text-primary", "View Project →" }
      }
    }
}
