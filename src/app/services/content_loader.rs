//! Loading the portfolio content document.
//!
//! The bundled portfolio is compiled in. An external document may be given
//! as JSON, TOML or YAML; the format is picked from the file extension.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use regex_lite::Regex;

use crate::app::domain::content::Portfolio;
use crate::app::domain::sections::SectionKind;
use crate::app::infrastructure::error::{AppError, Result};

/// Environment variable pointing at an external content document.
pub const CONTENT_ENV: &str = "FOLIO_CONTENT";

const BUNDLED_CONTENT: &str = include_str!("../../../content/portfolio.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Json,
    Toml,
    Yaml,
}

impl ContentFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

pub fn parse_content(text: &str, format: ContentFormat) -> Result<Portfolio> {
    let portfolio = match format {
        ContentFormat::Json => serde_json::from_str(text)?,
        ContentFormat::Toml => toml::from_str(text)?,
        ContentFormat::Yaml => serde_yaml::from_str(text)?,
    };
    Ok(portfolio)
}

pub fn load_bundled() -> Result<Portfolio> {
    parse_content(BUNDLED_CONTENT, ContentFormat::Json)
}

pub fn load_from_path(path: &Path) -> Result<Portfolio> {
    let format = ContentFormat::from_path(path).ok_or_else(|| {
        AppError::Content(format!(
            "{}: unsupported content format (expected .json, .toml or .yaml)",
            path.display()
        ))
    })?;
    let text = fs::read_to_string(path)?;
    parse_content(&text, format)
}

/// Pick the content document: command line, then `FOLIO_CONTENT`, then settings.
pub fn resolve_content_path(
    cli_arg: Option<PathBuf>,
    env_value: Option<String>,
    settings_path: Option<&Path>,
) -> Option<PathBuf> {
    cli_arg
        .or_else(|| env_value.filter(|v| !v.trim().is_empty()).map(PathBuf::from))
        .or_else(|| settings_path.map(Path::to_path_buf))
}

/// Load the external document if one is configured, else the bundled one.
///
/// A broken external document falls back to the bundled portfolio; the error
/// is returned alongside so the caller can report it.
pub fn load_portfolio(path: Option<&Path>) -> Result<(Portfolio, Option<AppError>)> {
    match path {
        Some(path) => match load_from_path(path) {
            Ok(portfolio) => {
                log::info!("Loaded content from {}", path.display());
                Ok((portfolio, None))
            }
            Err(e) => {
                log::warn!("Could not load {}: {}. Showing bundled content.", path.display(), e);
                Ok((load_bundled()?, Some(e)))
            }
        },
        None => Ok((load_bundled()?, None)),
    }
}

/// Non-fatal problems with a content document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentWarning {
    EmptyNavigation,
    InvalidAnchor(String),
    DuplicateSection(String),
    UnknownSection(String),
}

impl std::fmt::Display for ContentWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyNavigation => write!(f, "navigation list is empty"),
            Self::InvalidAnchor(id) => write!(f, "section id '{}' is not a valid anchor", id),
            Self::DuplicateSection(id) => write!(f, "section id '{}' appears more than once", id),
            Self::UnknownSection(id) => write!(f, "section id '{}' has no renderer and will be skipped", id),
        }
    }
}

/// Check navigation ids. Problems are reported, never rejected.
pub fn validate(portfolio: &Portfolio) -> Vec<ContentWarning> {
    let mut warnings = Vec::new();
    if portfolio.navigation.is_empty() {
        warnings.push(ContentWarning::EmptyNavigation);
        return warnings;
    }

    let anchor = Regex::new(r"^[a-z][a-z0-9-]*$").expect("anchor pattern is valid");
    let mut seen = HashSet::new();
    for section in &portfolio.navigation {
        if !anchor.is_match(&section.id) {
            warnings.push(ContentWarning::InvalidAnchor(section.id.clone()));
        }
        if !seen.insert(section.id.as_str()) {
            warnings.push(ContentWarning::DuplicateSection(section.id.clone()));
        }
        if SectionKind::from_id(&section.id).is_none() {
            warnings.push(ContentWarning::UnknownSection(section.id.clone()));
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::sections::SectionDescriptor;

    #[test]
    fn test_bundled_content_parses() {
        let portfolio = load_bundled().unwrap();
        assert!(!portfolio.personal_info.name.is_empty());
        let ids: Vec<&str> = portfolio.navigation.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["about", "research", "publications", "experience", "talks", "teaching", "skills", "awards", "contact"]
        );
        assert!(validate(&portfolio).is_empty());
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ContentFormat::from_path(Path::new("a.JSON")), Some(ContentFormat::Json));
        assert_eq!(ContentFormat::from_path(Path::new("a.toml")), Some(ContentFormat::Toml));
        assert_eq!(ContentFormat::from_path(Path::new("a.yml")), Some(ContentFormat::Yaml));
        assert_eq!(ContentFormat::from_path(Path::new("a.txt")), None);
        assert_eq!(ContentFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_toml_document() {
        let text = r#"
[personalInfo]
name = "Ada Lovelace"

[[navigation]]
id = "about"
label = "About"

[[awards]]
title = "Medal"
organization = "Society"
year = 1843
"#;
        let portfolio = parse_content(text, ContentFormat::Toml).unwrap();
        assert_eq!(portfolio.personal_info.name, "Ada Lovelace");
        assert_eq!(portfolio.awards[0].year, Some(1843));
        assert_eq!(portfolio.navigation, vec![SectionDescriptor::new("about", "About")]);
    }

    #[test]
    fn test_yaml_document() {
        let text = "personalInfo:\n  name: Ada\ntalks:\n  invited:\n    - title: Notes\n      venue: RS\n      location: London\n      date: '1843'\n      type: Lecture\n";
        let portfolio = parse_content(text, ContentFormat::Yaml).unwrap();
        assert_eq!(portfolio.talks.invited[0].kind.as_deref(), Some("Lecture"));
    }

    #[test]
    fn test_unsupported_extension_is_content_error() {
        let err = load_from_path(Path::new("portfolio.txt")).unwrap_err();
        assert!(matches!(err, AppError::Content(_)));
    }

    #[test]
    fn test_broken_external_file_falls_back_to_bundled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("me.json");
        fs::write(&path, "{ nope").unwrap();
        let (portfolio, err) = load_portfolio(Some(&path)).unwrap();
        assert!(matches!(err, Some(AppError::Json(_))));
        assert_eq!(portfolio, load_bundled().unwrap());
    }

    #[test]
    fn test_external_file_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("me.yaml");
        fs::write(&path, "personalInfo:\n  name: Grace\n").unwrap();
        let (portfolio, err) = load_portfolio(Some(&path)).unwrap();
        assert!(err.is_none());
        assert_eq!(portfolio.personal_info.name, "Grace");
    }

    #[test]
    fn test_resolve_content_path_precedence() {
        let settings = PathBuf::from("/s.json");
        assert_eq!(
            resolve_content_path(Some(PathBuf::from("/cli.json")), Some("/env.json".into()), Some(&settings)),
            Some(PathBuf::from("/cli.json"))
        );
        assert_eq!(
            resolve_content_path(None, Some("/env.json".into()), Some(&settings)),
            Some(PathBuf::from("/env.json"))
        );
        assert_eq!(resolve_content_path(None, Some("  ".into()), Some(&settings)), Some(settings.clone()));
        assert_eq!(resolve_content_path(None, None, None), None);
    }

    #[test]
    fn test_validate_reports_problems() {
        let portfolio = Portfolio {
            navigation: vec![
                SectionDescriptor::new("about", "About"),
                SectionDescriptor::new("about", "Again"),
                SectionDescriptor::new("Blog Posts", "Blog"),
            ],
            ..Default::default()
        };
        let warnings = validate(&portfolio);
        assert!(warnings.contains(&ContentWarning::DuplicateSection("about".into())));
        assert!(warnings.contains(&ContentWarning::InvalidAnchor("Blog Posts".into())));
        assert!(warnings.contains(&ContentWarning::UnknownSection("Blog Posts".into())));
        assert_eq!(validate(&Portfolio::default()), vec![ContentWarning::EmptyNavigation]);
    }
}
