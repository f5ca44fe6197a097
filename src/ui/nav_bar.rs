use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    app::Sender,
    draw,
    enums::{Align, Color, Cursor, Event, Font},
    prelude::*,
    widget::Widget,
};

use crate::app::domain::messages::Message;
use crate::app::domain::sections::SectionDescriptor;
use crate::app::domain::theme::{ThemeMode, ThemePalette};
use crate::ui::section_view::label_text;
use crate::ui::theme::color;

pub const NAV_BAR_HEIGHT: i32 = 56;

const H_PADDING: i32 = 20;
const PILL_H_PADDING: i32 = 12;
const PILL_HEIGHT: i32 = 30;
const PILL_GAP: i32 = 4;
const MIN_PILL_WIDTH: i32 = 44;
const TOGGLE_SIZE: i32 = 34;
const TOGGLE_GAP: i32 = 12;
const CORNER_RADIUS: i32 = 8;
const LOGO_FONT_SIZE: i32 = 18;
const PILL_FONT_SIZE: i32 = 13;

/// Horizontal extent of one clickable element, relative to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub x: i32,
    pub width: i32,
}

impl Span {
    fn contains(&self, mx: i32) -> bool {
        mx >= self.x && mx < self.x + self.width
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavHit {
    Logo,
    Section(usize),
    ThemeToggle,
    None,
}

/// Positions of the logo, the section pills and the theme toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavLayout {
    pub logo: Option<Span>,
    pub sections: Vec<Span>,
    pub toggle: Option<Span>,
}

impl NavLayout {
    /// Lay out a bar of `width` pixels from measured text widths.
    ///
    /// Pills are right-aligned against the toggle. When they do not fit
    /// between the logo and the toggle they shrink evenly, never below
    /// `MIN_PILL_WIDTH`.
    pub fn compute(width: i32, logo_text_w: i32, label_widths: &[i32]) -> Self {
        let toggle = Span {
            x: (width - H_PADDING - TOGGLE_SIZE).max(0),
            width: TOGGLE_SIZE,
        };
        let logo = Span {
            x: H_PADDING,
            width: logo_text_w.min((toggle.x - H_PADDING).max(0)),
        };

        let mut pill_widths: Vec<i32> = label_widths.iter().map(|w| w + PILL_H_PADDING * 2).collect();
        let gaps = PILL_GAP * (pill_widths.len() as i32 - 1).max(0);
        let available = toggle.x - TOGGLE_GAP - (logo.x + logo.width + TOGGLE_GAP);
        let natural: i32 = pill_widths.iter().sum::<i32>() + gaps;
        if natural > available && !pill_widths.is_empty() {
            let each = ((available - gaps) / pill_widths.len() as i32).max(MIN_PILL_WIDTH);
            for w in &mut pill_widths {
                *w = (*w).min(each);
            }
        }

        let total: i32 = pill_widths.iter().sum::<i32>() + gaps;
        let mut cursor = toggle.x - TOGGLE_GAP - total;
        let sections = pill_widths
            .into_iter()
            .map(|w| {
                let span = Span { x: cursor, width: w };
                cursor += w + PILL_GAP;
                span
            })
            .collect();

        Self {
            logo: Some(logo),
            sections,
            toggle: Some(toggle),
        }
    }

    /// Hit-test a point given relative to the widget's top-left corner.
    pub fn hit(&self, mx: i32, my: i32) -> NavHit {
        if !(0..NAV_BAR_HEIGHT).contains(&my) {
            return NavHit::None;
        }
        if self.toggle.is_some_and(|t| t.contains(mx)) {
            return NavHit::ThemeToggle;
        }
        if let Some(index) = self.sections.iter().position(|s| s.contains(mx)) {
            return NavHit::Section(index);
        }
        if self.logo.is_some_and(|l| l.contains(mx)) {
            return NavHit::Logo;
        }
        NavHit::None
    }
}

struct NavBarState {
    logo_text: String,
    logo_caption: String,
    sections: Vec<SectionDescriptor>,
    /// Section labels as drawn
    captions: Vec<String>,
    active_index: Option<usize>,
    scrolled: bool,
    mode: ThemeMode,
    layout: NavLayout,
    hover: NavHit,
    sender: Sender<Message>,
}

pub struct NavBar {
    pub widget: Widget,
    state: Rc<RefCell<NavBarState>>,
}

impl NavBar {
    pub fn new(x: i32, y: i32, w: i32, logo_text: &str, sender: Sender<Message>) -> Self {
        let state = Rc::new(RefCell::new(NavBarState {
            logo_text: logo_text.to_string(),
            logo_caption: label_text(logo_text),
            sections: Vec::new(),
            captions: Vec::new(),
            active_index: None,
            scrolled: false,
            mode: ThemeMode::Light,
            layout: NavLayout::default(),
            hover: NavHit::None,
            sender,
        }));

        let mut widget = Widget::new(x, y, w, NAV_BAR_HEIGHT, None);

        let draw_state = state.clone();
        widget.draw(move |wid| {
            let mut st = draw_state.borrow_mut();
            relayout(&mut st, wid.w());
            draw_nav_bar(wid, &st);
        });

        let handle_state = state.clone();
        widget.handle(move |wid, event| handle_nav_bar(wid, event, &handle_state));

        Self { widget, state }
    }

    pub fn set_sections(&mut self, sections: &[SectionDescriptor], active_id: &str) {
        let mut st = self.state.borrow_mut();
        st.sections = sections.to_vec();
        st.captions = captions(sections);
        st.active_index = st.sections.iter().position(|s| s.id == active_id);
        st.hover = NavHit::None;
        relayout(&mut st, self.widget.w());
        drop(st);
        self.widget.redraw();
    }

    pub fn set_active(&mut self, active_id: &str) {
        let mut st = self.state.borrow_mut();
        let index = st.sections.iter().position(|s| s.id == active_id);
        if index != st.active_index {
            st.active_index = index;
            drop(st);
            self.widget.redraw();
        }
    }

    pub fn set_scrolled(&mut self, scrolled: bool) {
        let mut st = self.state.borrow_mut();
        if st.scrolled != scrolled {
            st.scrolled = scrolled;
            drop(st);
            self.widget.redraw();
        }
    }

    pub fn apply_theme(&mut self, mode: ThemeMode) {
        self.state.borrow_mut().mode = mode;
        self.widget.redraw();
    }
}

// --- Layout ---

/// Pill labels escaped for FLTK's `@` symbol syntax.
fn captions(sections: &[SectionDescriptor]) -> Vec<String> {
    sections.iter().map(|s| label_text(&s.label)).collect()
}

fn relayout(st: &mut NavBarState, width: i32) {
    draw::set_font(Font::HelveticaBold, LOGO_FONT_SIZE);
    let (logo_w, _) = draw::measure(&st.logo_text, false);
    draw::set_font(Font::Helvetica, PILL_FONT_SIZE);
    let label_widths: Vec<i32> = st
        .sections
        .iter()
        .map(|s| draw::measure(&s.label, false).0)
        .collect();
    st.layout = NavLayout::compute(width, logo_w, &label_widths);
}

// --- Drawing ---

fn draw_rounded_rect(x: i32, y: i32, w: i32, h: i32, r: i32, fill: Color) {
    let r = r.min(h / 2).min(w / 2);
    draw::set_draw_color(fill);
    draw::draw_rectf(x + r, y, w - 2 * r, h);
    draw::draw_rectf(x, y + r, r, h - 2 * r);
    draw::draw_rectf(x + w - r, y + r, r, h - 2 * r);
    draw::draw_pie(x, y, 2 * r, 2 * r, 90.0, 180.0);
    draw::draw_pie(x + w - 2 * r, y, 2 * r, 2 * r, 0.0, 90.0);
    draw::draw_pie(x, y + h - 2 * r, 2 * r, 2 * r, 180.0, 270.0);
    draw::draw_pie(x + w - 2 * r, y + h - 2 * r, 2 * r, 2 * r, 270.0, 360.0);
}

fn draw_nav_bar(wid: &Widget, st: &NavBarState) {
    let wx = wid.x();
    let wy = wid.y();
    let ww = wid.w();
    let wh = wid.h();
    let palette: ThemePalette = st.mode.palette();

    // Raised style once the page has scrolled
    let bar_bg = if st.scrolled { palette.bg_secondary } else { palette.bg_primary };
    draw::set_draw_color(color(bar_bg));
    draw::draw_rectf(wx, wy, ww, wh);
    if st.scrolled {
        draw::set_draw_color(color(palette.border));
        draw::draw_rectf(wx, wy + wh - 1, ww, 1);
    }

    if let Some(logo) = st.layout.logo {
        draw::set_draw_color(color(palette.primary));
        draw::set_font(Font::HelveticaBold, LOGO_FONT_SIZE);
        draw::draw_text2(&st.logo_caption, wx + logo.x, wy, logo.width, wh, Align::Left | Align::Inside | Align::Clip);
    }

    let pill_y = wy + (wh - PILL_HEIGHT) / 2;
    draw::set_font(Font::Helvetica, PILL_FONT_SIZE);
    for (index, (span, caption)) in st.layout.sections.iter().zip(&st.captions).enumerate() {
        let is_active = st.active_index == Some(index);
        let is_hover = st.hover == NavHit::Section(index);
        let text = if is_active {
            draw_rounded_rect(wx + span.x, pill_y, span.width, PILL_HEIGHT, CORNER_RADIUS, color(palette.primary_bg));
            palette.primary
        } else if is_hover {
            draw_rounded_rect(wx + span.x, pill_y, span.width, PILL_HEIGHT, CORNER_RADIUS, color(palette.hover));
            palette.text_primary
        } else {
            palette.text_secondary
        };
        draw::set_draw_color(color(text));
        draw::draw_text2(caption, wx + span.x, pill_y, span.width, PILL_HEIGHT, Align::Center | Align::Clip);
    }

    if let Some(toggle) = st.layout.toggle {
        let ty = wy + (wh - TOGGLE_SIZE) / 2;
        let bg = if st.hover == NavHit::ThemeToggle { palette.hover } else { palette.bg_tertiary };
        draw_rounded_rect(wx + toggle.x, ty, TOGGLE_SIZE, TOGGLE_SIZE, TOGGLE_SIZE / 2, color(bg));
        // Shows the mode a click switches to
        let glyph = if st.mode.is_dark() { "\u{2600}" } else { "\u{263e}" };
        draw::set_draw_color(color(palette.text_primary));
        draw::set_font(Font::Helvetica, 16);
        draw::draw_text2(glyph, wx + toggle.x, ty, TOGGLE_SIZE, TOGGLE_SIZE, Align::Center);
    }
}

// --- Events ---

fn handle_nav_bar(wid: &mut Widget, event: Event, state: &Rc<RefCell<NavBarState>>) -> bool {
    match event {
        Event::Push => {
            if fltk::app::event_button() != 1 {
                return false;
            }
            let st = state.borrow();
            let hit = st.layout.hit(fltk::app::event_x() - wid.x(), fltk::app::event_y() - wid.y());
            let sender = st.sender;
            let message = match hit {
                NavHit::Logo => Some(Message::NavigateFirst),
                NavHit::Section(index) => st.sections.get(index).map(|s| Message::NavigateTo(s.id.clone())),
                NavHit::ThemeToggle => Some(Message::ToggleTheme),
                NavHit::None => None,
            };
            drop(st);
            match message {
                Some(msg) => {
                    sender.send(msg);
                    true
                }
                None => false,
            }
        }
        Event::Move | Event::Enter => {
            let mut st = state.borrow_mut();
            let hit = st.layout.hit(fltk::app::event_x() - wid.x(), fltk::app::event_y() - wid.y());
            if let Some(mut win) = wid.window() {
                let cursor = if hit == NavHit::None { Cursor::Default } else { Cursor::Hand };
                win.set_cursor(cursor);
            }
            if hit != st.hover {
                st.hover = hit;
                drop(st);
                wid.redraw();
            }
            true
        }
        Event::Leave => {
            let mut st = state.borrow_mut();
            if let Some(mut win) = wid.window() {
                win.set_cursor(Cursor::Default);
            }
            if st.hover != NavHit::None {
                st.hover = NavHit::None;
                drop(st);
                wid.redraw();
            }
            false
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_right_aligned() {
        let layout = NavLayout::compute(1000, 120, &[40, 60]);
        let toggle = layout.toggle.unwrap();
        assert_eq!(toggle.x + toggle.width, 1000 - H_PADDING);
        assert_eq!(layout.logo, Some(Span { x: H_PADDING, width: 120 }));
    }

    #[test]
    fn test_pills_end_before_toggle_in_order() {
        let layout = NavLayout::compute(1000, 120, &[40, 60, 50]);
        let toggle = layout.toggle.unwrap();
        let last = layout.sections.last().unwrap();
        assert_eq!(last.x + last.width, toggle.x - TOGGLE_GAP);
        assert_eq!(layout.sections[0].width, 40 + PILL_H_PADDING * 2);
        for pair in layout.sections.windows(2) {
            assert_eq!(pair[0].x + pair[0].width + PILL_GAP, pair[1].x);
        }
    }

    #[test]
    fn test_pills_shrink_when_crowded() {
        let widths = vec![120; 9];
        let layout = NavLayout::compute(700, 100, &widths);
        assert!(layout.sections.iter().all(|s| s.width < 120 + PILL_H_PADDING * 2));
        assert!(layout.sections.iter().all(|s| s.width >= MIN_PILL_WIDTH));
    }

    #[test]
    fn test_hit_testing() {
        let layout = NavLayout::compute(1000, 120, &[40, 60]);
        let first = layout.sections[0];
        let toggle = layout.toggle.unwrap();
        assert_eq!(layout.hit(first.x + 1, 20), NavHit::Section(0));
        assert_eq!(layout.hit(first.x + first.width, 20), NavHit::None);
        assert_eq!(layout.hit(layout.sections[1].x, 20), NavHit::Section(1));
        assert_eq!(layout.hit(toggle.x + 5, 20), NavHit::ThemeToggle);
        assert_eq!(layout.hit(H_PADDING + 10, 20), NavHit::Logo);
        assert_eq!(layout.hit(5, 20), NavHit::None);
        assert_eq!(layout.hit(first.x + 1, NAV_BAR_HEIGHT), NavHit::None);
        assert_eq!(layout.hit(first.x + 1, -1), NavHit::None);
    }

    #[test]
    fn test_captions_escape_symbol_prefix() {
        let sections = vec![SectionDescriptor::new("qa", "Q@A"), SectionDescriptor::new("talks", "Talks")];
        assert_eq!(captions(&sections), vec!["Q@@A".to_string(), "Talks".to_string()]);
    }

    #[test]
    fn test_empty_sections() {
        let layout = NavLayout::compute(800, 100, &[]);
        assert!(layout.sections.is_empty());
        assert_eq!(layout.hit(400, 20), NavHit::None);
    }
}
