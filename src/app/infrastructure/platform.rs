use crate::app::domain::theme::ThemeMode;

/// Environment variable that forces the ambient color scheme (`dark`/`light`).
pub const COLOR_SCHEME_ENV: &str = "FOLIO_COLOR_SCHEME";

/// The host's ambient "prefers dark color scheme" signal.
///
/// Implementations must not fail: an unreadable or malformed signal reports
/// `false` (prefers light).
pub trait ColorSchemeSignal {
    fn prefers_dark(&self) -> bool;
}

/// A signal with a fixed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticColorScheme(pub bool);

impl ColorSchemeSignal for StaticColorScheme {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

/// Reads the desktop environment's preference, unless overridden by
/// `FOLIO_COLOR_SCHEME`.
#[derive(Debug, Clone, Default)]
pub struct HostColorScheme {
    forced: Option<ThemeMode>,
}

impl HostColorScheme {
    pub fn from_env() -> Self {
        let forced = std::env::var(COLOR_SCHEME_ENV)
            .ok()
            .and_then(|v| parse_override(&v));
        Self { forced }
    }
}

impl ColorSchemeSignal for HostColorScheme {
    fn prefers_dark(&self) -> bool {
        match self.forced {
            Some(mode) => {
                log::debug!("Color scheme forced to {} by {}", mode.as_str(), COLOR_SCHEME_ENV);
                mode.is_dark()
            }
            None => detect_system_dark_mode(),
        }
    }
}

fn parse_override(value: &str) -> Option<ThemeMode> {
    match value.trim().to_ascii_lowercase().as_str() {
        "dark" => Some(ThemeMode::Dark),
        "light" => Some(ThemeMode::Light),
        _ => None,
    }
}

/// Interpret `gsettings get org.gnome.desktop.interface color-scheme`.
/// `None` when the key is unknown or the output is not recognisable.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_gnome_color_scheme(output: &str) -> Option<bool> {
    let value = output.trim().trim_matches('\'');
    match value {
        "prefer-dark" => Some(true),
        "prefer-light" | "default" => Some(false),
        _ => None,
    }
}

/// Interpret `gsettings get org.gnome.desktop.interface gtk-theme`.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_gtk_theme(output: &str) -> bool {
    output.to_lowercase().contains("dark")
}

/// Interpret `defaults read -g AppleInterfaceStyle`. The key is absent in light mode.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn parse_apple_interface_style(output: &str) -> bool {
    output.trim().eq_ignore_ascii_case("dark")
}

pub fn detect_system_dark_mode() -> bool {
    // Windows: Check registry for dark mode preference
    #[cfg(target_os = "windows")]
    {
        use winreg::RegKey;
        use winreg::enums::HKEY_CURRENT_USER;

        if let Ok(hkcu) = RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        {
            // AppsUseLightTheme: 0 = dark mode, 1 = light mode
            if let Ok(value) = hkcu.get_value::<u32, _>("AppsUseLightTheme") {
                return value == 0;
            }
        }
    }

    // Linux: GNOME 42+ color-scheme first, then the legacy gtk-theme name
    #[cfg(target_os = "linux")]
    {
        use std::process::Command;

        if let Ok(output) = Command::new("gsettings")
            .args(["get", "org.gnome.desktop.interface", "color-scheme"])
            .output()
            && output.status.success()
            && let Some(dark) = parse_gnome_color_scheme(&String::from_utf8_lossy(&output.stdout))
            && dark
        {
            return true;
        }

        if let Ok(output) = Command::new("gsettings")
            .args(["get", "org.gnome.desktop.interface", "gtk-theme"])
            .output()
            && output.status.success()
            && parse_gtk_theme(&String::from_utf8_lossy(&output.stdout))
        {
            return true;
        }
    }

    // macOS: Check AppleInterfaceStyle
    #[cfg(target_os = "macos")]
    {
        use std::process::Command;

        if let Ok(output) = Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
            && output.status.success()
            && parse_apple_interface_style(&String::from_utf8_lossy(&output.stdout))
        {
            return true;
        }
    }

    // Default to light mode if detection fails
    false
}
