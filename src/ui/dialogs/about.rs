use fltk::{
    button::Button,
    enums::{Align, Font},
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

use super::run_dialog;
use crate::app::domain::theme::ThemePalette;
use crate::ui::section_view::label_text;
use crate::ui::theme::color;

/// Show About dialog
pub fn show_about_dialog(owner_name: &str, palette: &ThemePalette) {
    let version = env!("CARGO_PKG_VERSION");
    let mut dialog = Window::default()
        .with_size(420, 300)
        .with_label("About Folio")
        .center_screen();
    dialog.make_modal(true);
    dialog.set_color(color(palette.bg_primary));

    let mut flex = Flex::new(10, 10, 400, 280, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(10);

    let mut title = Frame::default();
    title.set_label("Folio");
    title.set_label_size(24);
    title.set_label_font(Font::HelveticaBold);
    title.set_label_color(color(palette.primary));
    flex.fixed(&title, 40);

    let mut version_frame = Frame::default();
    version_frame.set_label(&format!("Version {}", version));
    version_frame.set_label_size(14);
    version_frame.set_label_color(color(palette.text_primary));
    flex.fixed(&version_frame, 25);

    let mut desc_frame = Frame::default();
    desc_frame.set_label("A single-page academic portfolio viewer");
    desc_frame.set_label_size(12);
    desc_frame.set_label_color(color(palette.text_muted));
    flex.fixed(&desc_frame, 25);

    let info_text = format!(
        "Portfolio of {}\n\n\
         Built with Rust and FLTK\n\
         Ctrl+D theme \u{00b7} Ctrl+E export \u{00b7} Home/End jump",
        label_text(owner_name)
    );
    let mut info_frame = Frame::default();
    info_frame.set_label(&info_text);
    info_frame.set_label_size(12);
    info_frame.set_label_color(color(palette.text_secondary));
    info_frame.set_align(Align::Center | Align::Inside);
    flex.fixed(&info_frame, 90);

    let _spacer = Frame::default();

    let mut close_btn = Button::default().with_label("Close");
    flex.fixed(&close_btn, 35);

    flex.end();
    dialog.end();

    let mut dialog_close = dialog.clone();
    close_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    dialog.show();
    run_dialog(&dialog);
}
