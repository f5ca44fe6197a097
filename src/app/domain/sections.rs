use serde::{Deserialize, Serialize};

/// One navigable content section. The order of the navigation list defines
/// both the menu order and the priority used to pick the active section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDescriptor {
    pub id: String,
    pub label: String,
}

impl SectionDescriptor {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Section kinds Folio knows how to render, keyed by navigation id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    About,
    Research,
    Publications,
    Experience,
    Talks,
    Teaching,
    Skills,
    Awards,
    Contact,
}

impl SectionKind {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "about" => Some(Self::About),
            "research" => Some(Self::Research),
            "publications" => Some(Self::Publications),
            "experience" => Some(Self::Experience),
            "talks" => Some(Self::Talks),
            "teaching" => Some(Self::Teaching),
            "skills" => Some(Self::Skills),
            "awards" => Some(Self::Awards),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Research => "research",
            Self::Publications => "publications",
            Self::Experience => "experience",
            Self::Talks => "talks",
            Self::Teaching => "teaching",
            Self::Skills => "skills",
            Self::Awards => "awards",
            Self::Contact => "contact",
        }
    }

    pub fn all() -> &'static [SectionKind] {
        &[
            Self::About,
            Self::Research,
            Self::Publications,
            Self::Experience,
            Self::Talks,
            Self::Teaching,
            Self::Skills,
            Self::Awards,
            Self::Contact,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_id_mapping_is_consistent() {
        for kind in SectionKind::all() {
            assert_eq!(SectionKind::from_id(kind.id()), Some(*kind));
        }
        assert_eq!(SectionKind::from_id("footer"), None);
    }

    #[test]
    fn test_descriptor_deserializes_from_navigation_entry() {
        let json = r#"{"id": "talks", "label": "Talks"}"#;
        let desc: SectionDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(desc, SectionDescriptor::new("talks", "Talks"));
    }
}
