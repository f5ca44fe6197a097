use fltk::{enums::Color, group::Scroll, menu::MenuBar, prelude::*, window::Window};

use crate::app::domain::theme::{Rgb, ThemePalette};

pub fn color(rgb: Rgb) -> Color {
    Color::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// Recolor the window chrome. Section widgets are rebuilt separately since
/// every card carries its own colors.
pub fn apply_theme(window: &mut Window, menu: &mut MenuBar, scroll: &mut Scroll, palette: &ThemePalette) {
    window.set_color(color(palette.bg_primary));
    window.set_label_color(color(palette.text_primary));

    menu.set_color(color(palette.bg_secondary));
    menu.set_text_color(color(palette.text_primary));
    menu.set_selection_color(color(palette.hover)); // Hover color

    scroll.set_color(color(palette.bg_primary));
    let mut scrollbar = scroll.scrollbar();
    scrollbar.set_color(color(palette.bg_secondary));
    scrollbar.set_selection_color(color(palette.border_hover));

    window.redraw();
    menu.redraw();
    scroll.redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DWMWINDOWATTRIBUTE, DwmSetWindowAttribute};

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);

        let on: i32 = if is_dark { 1 } else { 0 };

        // DWMWA_USE_IMMERSIVE_DARK_MODE, Windows 11 / Windows 10 2004+
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(20),
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );

        // Pre-2004 builds used 19
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(19),
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );
    }
}
