use std::path::PathBuf;
use std::time::Duration;

use fltk::{app::Sender, dialog, group::Scroll, menu::MenuBar, prelude::*, window::Window};

use super::domain::content::Portfolio;
use super::domain::messages::Message;
use super::domain::sections::SectionDescriptor;
use super::domain::settings::AppSettings;
use super::domain::theme::ThemeMode;
use super::render::{SectionView, footer_text, navigable_sections, render_portfolio};
use super::services::html_export::{self, ExportPage};
use super::services::scroll_tracker::{ScrollSectionTracker, Viewport, is_scrolled};
use super::services::theme_store::{SharedThemeStore, ThemeContext, ThemePreferenceStore};
use crate::ui::dialogs::about::show_about_dialog;
use crate::ui::main_window::MainWidgets;
use crate::ui::menu::{build_menu, set_dark_mode_checked};
use crate::ui::nav_bar::NavBar;
use crate::ui::section_view::build_page;
use crate::ui::theme::apply_theme;
#[cfg(target_os = "windows")]
use crate::ui::theme::set_windows_titlebar_theme;
use crate::ui::viewport::FltkViewport;

pub struct AppState {
    pub window: Window,
    pub menu: MenuBar,
    pub nav_bar: NavBar,
    pub scroll: Scroll,
    pub viewport: FltkViewport,
    pub tracker: ScrollSectionTracker,
    pub theme: SharedThemeStore,
    theme_ctx: ThemeContext,
    pub portfolio: Portfolio,
    pub views: Vec<SectionView>,
    pub sections: Vec<SectionDescriptor>,
    pub settings: AppSettings,
    pub footer: String,
    pub export_path: PathBuf,
    pub sender: Sender<Message>,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        portfolio: Portfolio,
        settings: AppSettings,
        mut theme_store: ThemePreferenceStore,
        year: i32,
        sender: Sender<Message>,
    ) -> Self {
        let MainWidgets {
            wind: window,
            mut menu,
            mut nav_bar,
            scroll,
            ..
        } = widgets;

        let views = render_portfolio(&portfolio);
        let sections = navigable_sections(&portfolio);
        let footer = footer_text(&portfolio, year);

        let mut tracker = ScrollSectionTracker::new(sections.clone()).with_threshold(settings.active_threshold);
        tracker.subscribe(move |id| sender.send(Message::ActiveSectionChanged(id.to_string())));

        theme_store.subscribe(move |mode| sender.send(Message::ThemeChanged(mode)));
        let mode = theme_store.mode();
        let theme = theme_store.into_shared();
        let theme_ctx = ThemeContext::new(&theme);

        build_menu(&mut menu, &sender, &sections, mode.is_dark());
        nav_bar.set_sections(&sections, tracker.active_id());
        nav_bar.apply_theme(mode);

        let viewport = FltkViewport::new(
            scroll.clone(),
            settings.smooth_scroll,
            Duration::from_millis(settings.scroll_duration_ms),
            sender,
        );

        let mut state = Self {
            window,
            menu,
            nav_bar,
            scroll,
            viewport,
            tracker,
            theme,
            theme_ctx,
            portfolio,
            views,
            sections,
            settings,
            footer,
            export_path: html_export::default_export_path(),
            sender,
        };
        state.rebuild_page();
        state
    }

    pub fn mode(&self) -> ThemeMode {
        self.theme_ctx.mode()
    }

    /// Recreate the section widgets for the current width and theme,
    /// keeping the reader at the same scroll offset.
    pub fn rebuild_page(&mut self) {
        let saved = self.viewport.scroll_position();
        let palette = self.theme_ctx.palette();
        let page = build_page(&mut self.scroll, &self.views, &self.footer, &palette, self.sender);
        self.viewport.set_page(page.anchors, page.content_height);
        self.viewport.jump_to(saved);
        apply_theme(&mut self.window, &mut self.menu, &mut self.scroll, &palette);
        self.on_scroll();
    }

    /// Recompute everything that depends on the scroll offset.
    pub fn on_scroll(&mut self) {
        self.tracker.recompute_active(&self.viewport);
        self.nav_bar.set_scrolled(is_scrolled(self.viewport.scroll_position()));
    }

    pub fn navigate_to(&mut self, id: &str) {
        self.tracker.navigate_to(id, &mut self.viewport, self.settings.nav_offset);
    }

    pub fn navigate_first(&mut self) {
        if let Some(id) = self.tracker.first_id().map(str::to_string) {
            self.navigate_to(&id);
        } else {
            self.viewport.scroll_to(0, true);
        }
    }

    pub fn navigate_last(&mut self) {
        if let Some(id) = self.tracker.last_id().map(str::to_string) {
            self.navigate_to(&id);
        }
    }

    pub fn animation_tick(&mut self) {
        self.viewport.tick();
        self.on_scroll();
    }

    pub fn on_active_section_changed(&mut self, id: &str) {
        self.nav_bar.set_active(id);
    }

    pub fn toggle_theme(&mut self) {
        // Listeners only post messages, so holding the borrow here is fine
        self.theme.borrow_mut().toggle();
    }

    pub fn apply_mode(&mut self, mode: ThemeMode) {
        self.nav_bar.apply_theme(mode);
        set_dark_mode_checked(&mut self.menu, mode.is_dark());
        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.window, mode.is_dark());
        self.rebuild_page();
    }

    pub fn open_link(&self, url: &str) {
        log::info!("Opening {}", url);
        if let Err(e) = open::that(url) {
            log::warn!("Could not open {}: {}", url, e);
            dialog::alert_default(&format!("Could not open link:\n{}", url));
        }
    }

    pub fn export_html(&self) {
        let palette = self.theme_ctx.palette();
        let page = ExportPage {
            title: &self.portfolio.personal_info.name,
            navigation: &self.sections,
            sections: &self.views,
            palette: &palette,
            footer: &self.footer,
        };
        if let Err(e) = html_export::export_and_open(&page, &self.export_path) {
            log::warn!("HTML export failed: {}", e);
            dialog::alert_default(&format!("Export failed: {}", e));
        }
    }

    pub fn show_about(&self) {
        show_about_dialog(&self.portfolio.personal_info.name, &self.theme_ctx.palette());
    }

    /// Persist the window size for the next launch.
    pub fn save_window_size(&mut self) {
        if self.settings.window_width == self.window.w() && self.settings.window_height == self.window.h() {
            return;
        }
        self.settings.window_width = self.window.w();
        self.settings.window_height = self.window.h();
        if let Err(e) = self.settings.save() {
            log::warn!("Failed to save settings: {}", e);
        }
    }

    /// Dispatch one message. Returns `false` once the application should exit.
    pub fn handle_message(&mut self, msg: Message) -> bool {
        match msg {
            Message::NavigateTo(id) => self.navigate_to(&id),
            Message::NavigateFirst => self.navigate_first(),
            Message::NavigateLast => self.navigate_last(),
            Message::ScrollChanged => self.on_scroll(),
            Message::ScrollAnimationTick => self.animation_tick(),
            Message::ActiveSectionChanged(id) => self.on_active_section_changed(&id),
            Message::ToggleTheme => self.toggle_theme(),
            Message::ThemeChanged(mode) => self.apply_mode(mode),
            Message::OpenLink(url) => self.open_link(&url),
            Message::ExportHtml => self.export_html(),
            Message::ShowAbout => self.show_about(),
            Message::WindowResized => self.rebuild_page(),
            Message::WindowClose | Message::Quit => {
                self.save_window_size();
                return false;
            }
        }
        true
    }
}
