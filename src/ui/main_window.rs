use fltk::{
    app::Sender,
    group::{Flex, Scroll, ScrollType},
    menu::MenuBar,
    prelude::*,
    window::Window,
};

use super::nav_bar::{NAV_BAR_HEIGHT, NavBar};
use crate::app::domain::messages::Message;

const MENU_HEIGHT: i32 = 26;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub nav_bar: NavBar,
    pub scroll: Scroll,
}

pub fn build_main_window(width: i32, height: i32, title: &str, sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, width, height, None);
    wind.set_label(&format!("{} - Folio", title));
    wind.set_xclass("Folio");
    wind.size_range(480, 360, 0, 0);

    let mut flex = Flex::new(0, 0, width, height, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    flex.fixed(&menu, MENU_HEIGHT);

    let nav_bar = NavBar::new(0, MENU_HEIGHT, width, title, *sender);
    flex.fixed(&nav_bar.widget, NAV_BAR_HEIGHT);

    let mut scroll = Scroll::new(0, 0, 0, 0, None);
    scroll.set_type(ScrollType::Vertical);
    scroll.set_scrollbar_size(12);
    scroll.end();

    flex.end();
    wind.resizable(&flex);
    wind.end();

    // Rewrapping text is only needed when the width changes
    let resize_sender = *sender;
    let mut last_width = width;
    wind.resize_callback(move |_, _, _, w, _| {
        if w != last_width {
            last_width = w;
            resize_sender.send(Message::WindowResized);
        }
    });

    let close_sender = *sender;
    wind.set_callback(move |_| {
        if fltk::app::event() == fltk::enums::Event::Close {
            close_sender.send(Message::WindowClose);
        }
    });

    MainWidgets {
        wind,
        flex,
        menu,
        nav_bar,
        scroll,
    }
}
