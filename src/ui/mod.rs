pub mod dialogs;
pub mod main_window;
pub mod menu;
pub mod nav_bar;
pub mod section_view;
pub mod theme;
pub mod viewport;
