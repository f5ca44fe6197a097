//! The portfolio content tree.
//!
//! Everything here is read-only data rendered verbatim. Field names follow
//! the camelCase keys of the content document; optional fields default so a
//! trimmed-down document still loads.

use serde::{Deserialize, Serialize};

use super::sections::SectionDescriptor;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub research_profile: ResearchProfile,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub publications: Publications,
    #[serde(default)]
    pub talks: Talks,
    #[serde(default)]
    pub teaching: Teaching,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub awards: Vec<Award>,
    #[serde(default)]
    pub service: Vec<Service>,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub navigation: Vec<SectionDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub profile_image: Option<String>,
    pub current_position: String,
    pub institution: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearchProfile {
    /// Free text; blank lines separate paragraphs. Rendered as markdown on export.
    pub statement: String,
    pub themes: Vec<ResearchTheme>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearchTheme {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub period: String,
    pub thesis: Option<String>,
    pub supervisors: Vec<String>,
    pub distinction: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub title: String,
    pub institution: String,
    pub location: String,
    pub period: String,
    pub description: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Publications {
    pub journals: Vec<Publication>,
    pub conferences: Vec<Publication>,
    pub preprints: Vec<Publication>,
}

impl Publications {
    pub fn total(&self) -> usize {
        self.journals.len() + self.conferences.len() + self.preprints.len()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Publication {
    pub title: String,
    pub authors: String,
    pub venue: Option<String>,
    pub year: Option<u32>,
    pub volume: Option<String>,
    pub pages: Option<String>,
    pub doi: Option<String>,
    pub arxiv: Option<String>,
    pub hal: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub award: Option<String>,
    pub tags: Vec<String>,
}

impl Publication {
    pub fn doi_url(&self) -> Option<String> {
        self.doi.as_ref().map(|d| format!("https://doi.org/{}", d))
    }

    pub fn arxiv_url(&self) -> Option<String> {
        self.arxiv.as_ref().map(|a| format!("https://arxiv.org/abs/{}", a))
    }

    pub fn hal_url(&self) -> Option<String> {
        self.hal.as_ref().map(|h| format!("https://hal.science/hal-{}", h))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Talks {
    pub invited: Vec<Talk>,
    pub contributed: Vec<Talk>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Talk {
    pub title: String,
    pub venue: String,
    pub location: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Teaching {
    pub courses: Vec<Course>,
    pub supervision: Vec<Supervision>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Course {
    pub title: String,
    pub role: String,
    pub institution: String,
    pub period: String,
    pub level: Option<String>,
    pub description: Option<String>,
    pub students: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Supervision {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub institution: String,
    pub period: String,
    pub title: String,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub mathematics: Vec<Skill>,
    pub ai_ml: Vec<Skill>,
    pub programming: Vec<Skill>,
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    pub level: String,
    pub details: Option<String>,
    pub icon: Option<String>,
}

/// Proficiency levels in descending order of mastery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SkillLevel {
    Expert,
    Advanced,
    Intermediate,
    Beginner,
}

impl SkillLevel {
    pub fn parse(level: &str) -> Option<Self> {
        match level.trim().to_ascii_lowercase().as_str() {
            "expert" => Some(Self::Expert),
            "advanced" => Some(Self::Advanced),
            "intermediate" => Some(Self::Intermediate),
            "beginner" => Some(Self::Beginner),
            _ => None,
        }
    }

    /// Filled dots out of four, as drawn next to a skill.
    pub fn dots(&self) -> u8 {
        match self {
            Self::Expert => 4,
            Self::Advanced => 3,
            Self::Intermediate => 2,
            Self::Beginner => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Award {
    pub title: String,
    pub organization: String,
    pub year: Option<u32>,
    pub amount: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    #[serde(rename = "type")]
    pub kind: String,
    pub venues: Vec<String>,
    pub event: Option<String>,
    pub venue: Option<String>,
    pub year: Option<u32>,
    pub session: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    pub email: String,
    pub alternate_email: Option<String>,
    pub cv_url: Option<String>,
    pub google_scholar: Option<String>,
    pub github: Option<String>,
    pub orcid: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
    pub address: Address,
}

impl Contact {
    /// Labelled profile links, skipping the ones left empty in the content.
    pub fn profile_links(&self) -> Vec<(&'static str, &str)> {
        [
            ("Google Scholar", &self.google_scholar),
            ("GitHub", &self.github),
            ("ORCID", &self.orcid),
            ("LinkedIn", &self.linkedin),
            ("Twitter", &self.twitter),
            ("Website", &self.website),
        ]
        .into_iter()
        .filter_map(|(label, url)| {
            url.as_deref()
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .map(|u| (label, u))
        })
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub institution: String,
    pub street: Option<String>,
    pub city: String,
    pub country: String,
}

impl Address {
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if !self.institution.is_empty() {
            lines.push(self.institution.clone());
        }
        if let Some(street) = self.street.as_ref().filter(|s| !s.is_empty()) {
            lines.push(street.clone());
        }
        let city_country: Vec<&str> = [self.city.as_str(), self.country.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        if !city_country.is_empty() {
            lines.push(city_country.join(", "));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document_uses_defaults() {
        let json = r#"{"personalInfo": {"name": "Ada"}}"#;
        let portfolio: Portfolio = serde_json::from_str(json).unwrap();
        assert_eq!(portfolio.personal_info.name, "Ada");
        assert!(portfolio.navigation.is_empty());
        assert_eq!(portfolio.publications.total(), 0);
    }

    #[test]
    fn test_type_field_maps_to_kind() {
        let json = r#"{"title": "T", "venue": "V", "location": "L", "date": "June 2025", "type": "Workshop Talk"}"#;
        let talk: Talk = serde_json::from_str(json).unwrap();
        assert_eq!(talk.kind.as_deref(), Some("Workshop Talk"));
    }

    #[test]
    fn test_profile_links_skip_empty() {
        let contact = Contact {
            github: Some("https://github.com/someone".to_string()),
            twitter: Some(String::new()),
            website: Some("   ".to_string()),
            ..Default::default()
        };
        let links = contact.profile_links();
        assert_eq!(links, vec![("GitHub", "https://github.com/someone")]);
    }

    #[test]
    fn test_skill_level_ordering() {
        assert!(SkillLevel::Expert < SkillLevel::Beginner);
        assert_eq!(SkillLevel::parse(" advanced "), Some(SkillLevel::Advanced));
        assert_eq!(SkillLevel::parse("guru"), None);
        assert_eq!(SkillLevel::Intermediate.dots(), 2);
    }

    #[test]
    fn test_publication_urls() {
        let p = Publication {
            doi: Some("10.1/x".to_string()),
            hal: Some("05304713v2".to_string()),
            ..Default::default()
        };
        assert_eq!(p.doi_url().as_deref(), Some("https://doi.org/10.1/x"));
        assert_eq!(p.hal_url().as_deref(), Some("https://hal.science/hal-05304713v2"));
        assert_eq!(p.arxiv_url(), None);
    }

    #[test]
    fn test_address_lines() {
        let address = Address {
            institution: "INRAE".to_string(),
            street: None,
            city: "Rennes".to_string(),
            country: "France".to_string(),
        };
        assert_eq!(address.lines(), vec!["INRAE".to_string(), "Rennes, France".to_string()]);
    }
}
