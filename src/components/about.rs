use crate::components::navbar::Section;
use crate::state::profile::{ Skill, SkillIcon, PROFILE };
use crate::utils::spacing::{ CARD_PADDING, GAP_SPACING, SECTION_SPACING, STACK_SPACING };
use dioxus::prelude::*;
use lucide_dioxus::{ CodeXml, Terminal };

/// About text next to the skills grid
#[component]
pub fn About() -> Element {
    let profile = &*PROFILE;

    rsx! {
      section {
        id: Section::About.anchor(),
        class: "two-columns {SECTION_SPACING} reveal",
        "data-reveal": "true",
        div { class: "{STACK_SPACING}",
          h3 { class: "section-title", "<AboutMe /> 🧙‍♂️" }
          p { class: "lead text-muted", "{profile.about}" }
        }
        div { id: Section::Skills.anchor(), class: "{STACK_SPACING}",
          h3 { class: "section-title", "<Skills /> 🎯" }
          div { class: "grid grid-2 {GAP_SPACING}",
            for (index, skill) in profile.skills.iter().enumerate() {
              SkillCard { key: "{index}", skill: skill.clone(), index }
            }
          }
        }
      }
    }
}

#[component]
fn SkillCard(skill: Skill, index: usize) -> Element {
    // Cards pop in one after another
    let delay = format!("animation-delay: {}ms;", index * 100);

    rsx! {
      div { class: "card {CARD_PADDING} pop-in hover-grow", style: "{delay}",
        {
            match skill.icon {
                SkillIcon::Code => rsx! { CodeXml { class: "w-8 h-8 mb-2 text-primary" } },
                SkillIcon::Terminal => rsx! { Terminal { class: "w-8 h-8 mb-2 text-primary" } },
            }
        }
        h4 { class: "card-title", "{skill.title}" }
        p { class: "text-sm text-muted", "{skill.details}" }
      }
    }
}
