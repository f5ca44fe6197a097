use super::theme::ThemeMode;

/// All messages that can be sent through the FLTK channel.
/// Widgets and timers send one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    NavigateTo(String),
    NavigateFirst,
    NavigateLast,
    /// The scroll position of the content viewport moved.
    ScrollChanged,
    /// One frame of a running smooth-scroll animation.
    ScrollAnimationTick,
    /// The tracker picked a different active section.
    ActiveSectionChanged(String),

    // Theme
    ToggleTheme,
    ThemeChanged(ThemeMode),

    // Actions
    OpenLink(String),
    ExportHtml,
    ShowAbout,
    WindowResized,
    WindowClose,
    Quit,
}
