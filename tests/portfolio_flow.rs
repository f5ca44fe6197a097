use std::collections::HashMap;

use folio::app::render::{footer_text, navigable_sections, render_portfolio};
use folio::app::services::content_loader::{load_bundled, load_portfolio, validate};
use folio::app::services::html_export::{ExportPage, export_document, write_export};
use folio::app::{
    JsonFileStorage, PreferenceStorage, ScrollSectionTracker, StaticColorScheme, THEME_STORAGE_KEY, ThemeMode,
    ThemePreferenceStore, Viewport,
};

/// Sections stacked one after another, 600 px apart.
struct StackedPage {
    tops: HashMap<String, i32>,
    scroll: i32,
}

impl StackedPage {
    fn new(ids: &[&str]) -> Self {
        let tops = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.to_string(), i as i32 * 600))
            .collect();
        Self { tops, scroll: 0 }
    }
}

impl Viewport for StackedPage {
    fn section_top(&self, id: &str) -> Option<i32> {
        self.tops.get(id).map(|top| top - self.scroll)
    }

    fn scroll_position(&self) -> i32 {
        self.scroll
    }

    fn scroll_to(&mut self, y: i32, _animated: bool) {
        self.scroll = y;
    }
}

#[test]
fn bundled_content_renders_every_navigation_entry() {
    let portfolio = load_bundled().unwrap();
    assert!(validate(&portfolio).is_empty());

    let sections = navigable_sections(&portfolio);
    let views = render_portfolio(&portfolio);
    assert_eq!(sections.len(), views.len());
    for (section, view) in sections.iter().zip(&views) {
        assert_eq!(section.id, view.id);
        assert!(!view.blocks.is_empty(), "section '{}' rendered nothing", view.id);
    }
}

#[test]
fn missing_content_file_falls_back_to_bundled() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nowhere.json");
    let (portfolio, error) = load_portfolio(Some(missing.as_path())).unwrap();
    assert!(error.is_some());
    assert_eq!(portfolio, load_bundled().unwrap());
}

#[test]
fn navigating_through_the_page_updates_the_active_section() {
    let portfolio = load_bundled().unwrap();
    let sections = navigable_sections(&portfolio);
    let ids: Vec<&str> = sections.iter().map(|s| s.id.as_str()).collect();
    let mut page = StackedPage::new(&ids);
    let mut tracker = ScrollSectionTracker::new(sections.clone());

    for section in &sections {
        tracker.navigate_to(&section.id, &mut page, 80);
        assert_eq!(tracker.recompute_active(&page), section.id);
    }

    // Back to the top: the first section sits at offset 0
    let first = tracker.first_id().unwrap().to_string();
    tracker.navigate_to(&first, &mut page, 80);
    assert_eq!(page.scroll_position(), 0);
    assert_eq!(tracker.recompute_active(&page), first);
}

#[test]
fn theme_choice_persists_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("folio").join("preferences.json");

    let mut store = ThemePreferenceStore::new(JsonFileStorage::new(&path), StaticColorScheme(false));
    assert_eq!(store.mode(), ThemeMode::Light);
    store.toggle();

    let restarted = ThemePreferenceStore::new(JsonFileStorage::new(&path), StaticColorScheme(false));
    assert_eq!(restarted.mode(), ThemeMode::Dark);
    assert_eq!(
        JsonFileStorage::new(&path).get(THEME_STORAGE_KEY).unwrap().as_deref(),
        Some("dark")
    );
}

#[test]
fn exported_page_links_navigation_to_sections() {
    let portfolio = load_bundled().unwrap();
    let sections = navigable_sections(&portfolio);
    let views = render_portfolio(&portfolio);
    let palette = ThemeMode::Dark.palette();
    let footer = footer_text(&portfolio, 2026);

    let html = export_document(&ExportPage {
        title: &portfolio.personal_info.name,
        navigation: &sections,
        sections: &views,
        palette: &palette,
        footer: &footer,
    });
    for section in &sections {
        assert!(html.contains(&format!("href=\"#{}\"", section.id)));
        assert!(html.contains(&format!("<section id=\"{}\">", section.id)));
    }
    assert!(html.contains("2026"));

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("site").join("index.html");
    write_export(&html, &out).unwrap();
    assert_eq!(std::fs::read_to_string(&out).unwrap(), html);
}
