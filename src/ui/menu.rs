use fltk::{
    app::Sender,
    enums::{Key, Shortcut},
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::messages::Message;
use crate::app::domain::sections::SectionDescriptor;

/// Escape characters FLTK treats as menu path syntax.
fn menu_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('/', "\\/").replace('&', "&&").replace('_', "\\_")
}

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, sections: &[SectionDescriptor], initial_dark_mode: bool) {
    let s = sender;

    // File
    menu.add("File/Export as HTML", Shortcut::Ctrl | 'e', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ExportHtml) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Quit) });

    // View
    let dm_flag = if initial_dark_mode { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Dark Mode", Shortcut::Ctrl | 'd', dm_flag, { let s = *s; move |_| s.send(Message::ToggleTheme) });

    // Go
    menu.add("Go/First Section", Shortcut::None | Key::Home, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::NavigateFirst) });
    menu.add("Go/Last Section", Shortcut::None | Key::End, MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::NavigateLast) });
    for section in sections {
        let id = section.id.clone();
        let path = format!("Go/{}", menu_label(&section.label));
        menu.add(&path, Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::NavigateTo(id.clone())) });
    }

    // Help
    menu.add("Help/About Folio", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}

/// Keep the "Dark Mode" check mark in sync when the theme changes elsewhere.
pub fn set_dark_mode_checked(menu: &mut MenuBar, is_dark: bool) {
    if let Some(mut item) = menu.find_item("View/Dark Mode") {
        if is_dark {
            item.set();
        } else {
            item.clear();
        }
    }
}
