pub mod about;

use fltk::{app, prelude::*, window::Window};

/// Pump events until `dialog` is hidden. A quit request from the main
/// window hides it too.
pub fn run_dialog(dialog: &Window) {
    let mut handle = dialog.clone();
    while handle.shown() {
        app::wait();
        if app::should_program_quit() {
            handle.hide();
        }
    }
}
