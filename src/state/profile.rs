use crate::utils::data;
use crate::always_eprint;
use once_cell::sync::Lazy;
use serde::Deserialize;

const PROFILE_JSON: &str = include_str!("../../assets/portfolio.json");

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SkillIcon {
    Code,
    Terminal,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Skill {
    pub icon: SkillIcon,
    pub title: String,
    pub details: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Github,
    Linkedin,
    Youtube,
    Website,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SocialLink {
    pub kind: LinkKind,
    pub label: String,
    pub url: String,
}

/// Everything the page shows about its owner
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    /// Shown as `<Handle />` in the navigation bar
    pub handle: String,
    pub role: String,
    pub about: String,
    pub cv_url: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub links: Vec<SocialLink>,
    /// Lines printed by the hidden terminal
    #[serde(default)]
    pub terminal_lines: Vec<String>,
}

impl Profile {
    pub fn load() -> Self {
        Self::from_json(PROFILE_JSON)
    }

    /// Parse profile content, falling back to defaults if it is invalid
    pub fn from_json(contents: &str) -> Self {
        match data::parse_json_from_str::<Profile>(contents, "portfolio.json") {
            Ok(profile) => profile,
            Err(e) => {
                always_eprint!("Warning: Failed to load profile: {}. Using defaults.", e);
                Self::default()
            }
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Mahdi Hazrati".to_string(),
            handle: "MahdiHazrati".to_string(),
            role: "Frontend Developer".to_string(),
            about: String::new(),
            cv_url: "https://mahdihazrati.ir".to_string(),
            skills: Vec::new(),
            projects: Vec::new(),
            links: Vec::new(),
            terminal_lines: vec!["$ whoami".to_string(), "mahdi_hazrati".to_string()],
        }
    }
}

pub static PROFILE: Lazy<Profile> = Lazy::new(Profile::load);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_profile_parses() {
        let profile = data::parse_json_from_str::<Profile>(PROFILE_JSON, "portfolio.json").unwrap();
        assert_eq!(profile.name, "Mahdi Hazrati");
        assert_eq!(profile.skills.len(), 2);
        assert_eq!(profile.projects.len(), 3);
        assert_eq!(profile.terminal_lines.len(), 5);
        assert!(profile.cv_url.ends_with(".pdf"));
    }

    #[test]
    fn embedded_profile_links_every_kind() {
        let kinds: Vec<LinkKind> = PROFILE.links.iter().map(|link| link.kind).collect();
        assert_eq!(kinds, vec![LinkKind::Github, LinkKind::Linkedin, LinkKind::Youtube, LinkKind::Website]);
        assert!(PROFILE.links.iter().all(|link| link.url.starts_with("https://")));
    }

    #[test]
    fn invalid_json_falls_back_to_defaults() {
        assert_eq!(Profile::from_json("{ not json"), Profile::default());
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let profile = Profile::from_json(
            r#"{ "name": "A", "handle": "A", "role": "Dev", "about": "", "cv_url": "https://a.example/cv.pdf" }"#
        );
        assert_eq!(profile.name, "A");
        assert!(profile.skills.is_empty());
        assert!(profile.links.is_empty());
        assert!(profile.terminal_lines.is_empty());
    }

    #[test]
    fn kinds_are_read_from_lowercase_names() {
        let icons: Vec<SkillIcon> = serde_json::from_str(r#"["code", "terminal"]"#).unwrap();
        assert_eq!(icons, vec![SkillIcon::Code, SkillIcon::Terminal]);
        assert!(serde_json::from_str::<LinkKind>(r#""GitHub""#).is_err());
    }
}
