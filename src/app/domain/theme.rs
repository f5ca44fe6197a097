use serde::{Deserialize, Serialize};

/// Display mode of the whole viewer. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Canonical string written to preference storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored preference. Only the exact canonical strings are accepted.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn palette(&self) -> ThemePalette {
        match self {
            Self::Light => ThemePalette::light(),
            Self::Dark => ThemePalette::dark(),
        }
    }
}

/// An sRGB color, kept toolkit-agnostic so the palette can feed both
/// FLTK widgets and the HTML exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Color tokens shared by every section renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    /// Main headings
    pub primary: Rgb,
    pub primary_bg: Rgb,
    /// Gold accent used for the active nav pill, badges and links
    pub accent: Rgb,
    pub accent_bg: Rgb,
    pub text_primary: Rgb,
    pub text_secondary: Rgb,
    pub text_muted: Rgb,
    pub bg_primary: Rgb,
    /// Alternating section background
    pub bg_secondary: Rgb,
    /// Card background
    pub bg_tertiary: Rgb,
    pub border: Rgb,
    pub border_hover: Rgb,
    pub hover: Rgb,
    pub active: Rgb,
}

impl ThemePalette {
    pub fn light() -> Self {
        Self {
            primary: Rgb(16, 42, 67),
            primary_bg: Rgb(16, 42, 67),
            accent: Rgb(217, 119, 6),
            accent_bg: Rgb(217, 119, 6),
            text_primary: Rgb(15, 23, 42),
            text_secondary: Rgb(71, 85, 105),
            text_muted: Rgb(100, 116, 139),
            bg_primary: Rgb(255, 255, 255),
            bg_secondary: Rgb(248, 250, 252),
            bg_tertiary: Rgb(241, 245, 249),
            border: Rgb(226, 232, 240),
            border_hover: Rgb(203, 213, 225),
            hover: Rgb(241, 245, 249),
            active: Rgb(255, 251, 235),
        }
    }

    pub fn dark() -> Self {
        Self {
            primary: Rgb(255, 255, 255),
            primary_bg: Rgb(30, 41, 59),
            accent: Rgb(251, 191, 36),
            accent_bg: Rgb(245, 158, 11),
            text_primary: Rgb(241, 245, 249),
            text_secondary: Rgb(203, 213, 225),
            text_muted: Rgb(148, 163, 184),
            bg_primary: Rgb(15, 23, 42),
            bg_secondary: Rgb(30, 41, 59),
            bg_tertiary: Rgb(51, 65, 85),
            border: Rgb(51, 65, 85),
            border_hover: Rgb(71, 85, 105),
            hover: Rgb(51, 65, 85),
            active: Rgb(30, 41, 59),
        }
    }
}
