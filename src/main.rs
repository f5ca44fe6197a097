#![cfg_attr(all(target_os = "windows", not(debug_assertions)), windows_subsystem = "windows")]

use std::path::PathBuf;

use chrono::Datelike;
use fltk::{app, dialog, prelude::*};

use folio::app::domain::messages::Message;
use folio::app::domain::settings::AppSettings;
use folio::app::infrastructure::platform::HostColorScheme;
use folio::app::infrastructure::storage::{default_preferences_path, open_preferences};
use folio::app::services::content_loader::{self, CONTENT_ENV};
use folio::app::services::theme_store::ThemePreferenceStore;
use folio::app::state::AppState;
#[cfg(target_os = "windows")]
use folio::ui::theme::set_windows_titlebar_theme;
use folio::ui::main_window::build_main_window;

const SCROLL_POLL_INTERVAL: f64 = 1.0 / 30.0;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = app::App::default();
    let settings = AppSettings::load();

    let content_path = content_loader::resolve_content_path(
        std::env::args_os().nth(1).map(PathBuf::from),
        std::env::var(CONTENT_ENV).ok(),
        settings.content_path.as_deref(),
    );
    let (portfolio, load_error) = match content_loader::load_portfolio(content_path.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            log::error!("Bundled content is unreadable: {}", e);
            dialog::alert_default(&format!("Folio cannot start: {}", e));
            std::process::exit(1);
        }
    };
    for warning in content_loader::validate(&portfolio) {
        log::warn!("Content: {}", warning);
    }

    let theme_store =
        ThemePreferenceStore::new(open_preferences(default_preferences_path()), HostColorScheme::from_env());

    let (sender, receiver) = app::channel::<Message>();
    let mut widgets = build_main_window(
        settings.window_width,
        settings.window_height,
        &portfolio.personal_info.name,
        &sender,
    );
    // Text measurement needs an open display
    widgets.wind.show();
    #[cfg(target_os = "windows")]
    set_windows_titlebar_theme(&widgets.wind, theme_store.is_dark());

    let poll_scroll = widgets.scroll.clone();
    let year = chrono::Local::now().year();
    let mut state = AppState::new(widgets, portfolio, settings, theme_store, year, sender);

    if let Some(e) = load_error {
        dialog::alert_default(&format!("Could not load content, showing the bundled portfolio.\n\n{}", e));
    }

    // The scroll widget has no change callback, so watch its offset
    let mut last_position = poll_scroll.yposition();
    app::add_timeout3(SCROLL_POLL_INTERVAL, move |handle| {
        let position = poll_scroll.yposition();
        if position != last_position {
            last_position = position;
            sender.send(Message::ScrollChanged);
        }
        if !poll_scroll.was_deleted() {
            app::repeat_timeout3(SCROLL_POLL_INTERVAL, handle);
        }
    });

    while app.wait() {
        if let Some(msg) = receiver.recv()
            && !state.handle_message(msg)
        {
            app.quit();
        }
    }
}
