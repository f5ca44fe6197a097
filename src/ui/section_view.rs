//! Turns rendered sections into FLTK widgets inside the page scroll.
//!
//! Widgets are positioned by hand in one column; text heights come from
//! measuring word-wrapped labels with the current font. The whole page is
//! rebuilt when the width or the theme changes.

use fltk::{
    app::Sender,
    button::Button,
    draw,
    enums::{Align, Cursor, Event, Font, FrameType},
    frame::Frame,
    group::Scroll,
    prelude::*,
};

use super::theme::color;
use crate::app::domain::messages::Message;
use crate::app::domain::theme::{Rgb, ThemePalette};
use crate::app::render::{Block, Card, Link, SectionView, plain_text};

pub const CONTENT_MAX_WIDTH: i32 = 880;
const SIDE_MARGIN: i32 = 32;
const SCROLLBAR_ALLOWANCE: i32 = 18;
const SECTION_PADDING: i32 = 48;
const CARD_PADDING: i32 = 16;
const BLOCK_GAP: i32 = 10;
const CHIP_H_PADDING: i32 = 8;
const CHIP_HEIGHT: i32 = 22;
const LINK_HEIGHT: i32 = 26;
const BODY_SIZE: i32 = 14;

/// The widget marking the top edge of a section.
#[derive(Clone)]
pub struct SectionAnchor {
    pub id: String,
    pub frame: Frame,
}

pub struct PageWidgets {
    pub anchors: Vec<SectionAnchor>,
    pub content_height: i32,
}

/// Count the lines `text` occupies when greedily wrapped at `width`.
/// Explicit newlines always start a new line.
pub fn wrap_lines(text: &str, width: i32, measure: impl Fn(&str) -> i32) -> usize {
    let mut lines = 0;
    for source_line in text.split('\n') {
        lines += 1;
        let mut current = String::new();
        for word in source_line.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };
            if !current.is_empty() && measure(&candidate) > width {
                lines += 1;
                current = word.to_string();
            } else {
                current = candidate;
            }
        }
    }
    lines
}

/// FLTK draws `@` as a symbol prefix in labels.
pub fn label_text(text: &str) -> String {
    text.replace('@', "@@")
}

fn text_height(text: &str, font: Font, size: i32, width: i32) -> i32 {
    draw::set_font(font, size);
    let lines = wrap_lines(text, width, |s| draw::measure(s, false).0);
    lines as i32 * draw::height() + 4
}

fn text_width(text: &str, font: Font, size: i32) -> i32 {
    draw::set_font(font, size);
    draw::measure(text, false).0
}

pub fn content_column(scroll: &Scroll) -> (i32, i32) {
    let usable = scroll.w() - SCROLLBAR_ALLOWANCE - SIDE_MARGIN * 2;
    let width = usable.clamp(200, CONTENT_MAX_WIDTH);
    let x = scroll.x() + SIDE_MARGIN + (usable - width).max(0) / 2;
    (x, width)
}

struct PageBuilder<'a> {
    x: i32,
    width: i32,
    y: i32,
    palette: &'a ThemePalette,
    sender: Sender<Message>,
}

impl PageBuilder<'_> {
    fn text(&mut self, text: &str, font: Font, size: i32, fg: Rgb, indent: i32, width: i32) -> Frame {
        let h = text_height(text, font, size, width);
        let mut frame = Frame::new(self.x + indent, self.y, width, h, None);
        frame.set_label(&label_text(text));
        frame.set_label_font(font);
        frame.set_label_size(size);
        frame.set_label_color(color(fg));
        frame.set_align(Align::Left | Align::Top | Align::Inside | Align::Wrap);
        self.y += h;
        frame
    }

    fn chip(&self, text: &str, x: i32, y: i32, bg: Rgb, fg: Rgb) -> i32 {
        let w = text_width(text, Font::Helvetica, 12) + CHIP_H_PADDING * 2;
        let mut frame = Frame::new(x, y, w, CHIP_HEIGHT, None);
        frame.set_frame(FrameType::RFlatBox);
        frame.set_color(color(bg));
        frame.set_label(&label_text(text));
        frame.set_label_size(12);
        frame.set_label_color(color(fg));
        w
    }

    /// A wrapping row of chips.
    fn chips(&mut self, items: &[String], indent: i32, width: i32, bg: Rgb, fg: Rgb) {
        let left = self.x + indent;
        let mut cx = left;
        for item in items {
            let w = text_width(item, Font::Helvetica, 12) + CHIP_H_PADDING * 2;
            if cx > left && cx + w > left + width {
                cx = left;
                self.y += CHIP_HEIGHT + 4;
            }
            cx += self.chip(item, cx, self.y, bg, fg) + 6;
        }
        self.y += CHIP_HEIGHT;
    }

    fn links(&mut self, links: &[Link], indent: i32, width: i32) {
        let left = self.x + indent;
        let mut cx = left;
        for link in links {
            let w = text_width(&link.label, Font::HelveticaBold, 13) + 16;
            if cx > left && cx + w > left + width {
                cx = left;
                self.y += LINK_HEIGHT + 4;
            }
            let mut button = Button::new(cx, self.y, w, LINK_HEIGHT, None);
            button.set_label(&label_text(&link.label));
            button.set_frame(FrameType::RFlatBox);
            button.set_down_frame(FrameType::RFlatBox);
            button.set_color(color(self.palette.primary_bg));
            button.set_selection_color(color(self.palette.hover));
            button.set_label_color(color(self.palette.primary));
            button.set_label_font(Font::HelveticaBold);
            button.set_label_size(13);
            button.set_tooltip(&link.url);
            button.clear_visible_focus();
            let url = link.url.clone();
            let sender = self.sender;
            button.set_callback(move |_| sender.send(Message::OpenLink(url.clone())));
            button.handle(|b, ev| {
                if let Some(mut win) = b.window() {
                    match ev {
                        Event::Enter => win.set_cursor(Cursor::Hand),
                        Event::Leave => win.set_cursor(Cursor::Default),
                        _ => {}
                    }
                }
                false
            });
            cx += w + 8;
        }
        self.y += LINK_HEIGHT;
    }

    /// A centered flat button that scrolls to `target`.
    fn jump(&mut self, label: &str, target: &str) {
        self.y += 8;
        let w = text_width(label, Font::Helvetica, BODY_SIZE) + 24;
        let mut button = Button::new(self.x + (self.width - w) / 2, self.y, w, LINK_HEIGHT, None);
        button.set_label(&label_text(label));
        button.set_frame(FrameType::FlatBox);
        button.set_down_frame(FrameType::FlatBox);
        button.set_color(color(self.palette.bg_primary));
        button.set_selection_color(color(self.palette.hover));
        button.set_label_color(color(self.palette.text_muted));
        button.set_label_size(BODY_SIZE);
        button.clear_visible_focus();
        let target = target.to_string();
        let sender = self.sender;
        button.set_callback(move |_| sender.send(Message::NavigateTo(target.clone())));
        self.y += LINK_HEIGHT;
    }

    fn card(&mut self, card: &Card) {
        let p = *self.palette;
        let top = self.y;
        let mut bg = Frame::new(self.x, top, self.width, 0, None);
        bg.set_frame(FrameType::RFlatBox);
        bg.set_color(color(p.bg_secondary));

        let inner = self.width - CARD_PADDING * 2;
        self.y += CARD_PADDING;

        let badge_w = card
            .badge
            .as_ref()
            .map(|b| text_width(b, Font::Helvetica, 12) + CHIP_H_PADDING * 2 + 8)
            .unwrap_or(0);
        let title_top = self.y;
        self.text(&card.title, Font::HelveticaBold, 15, p.text_primary, CARD_PADDING, inner - badge_w);
        if let Some(badge) = &card.badge {
            self.chip(badge, self.x + self.width - CARD_PADDING - badge_w + 8, title_top, p.accent_bg, p.accent);
        }
        if let Some(subtitle) = &card.subtitle {
            self.text(subtitle, Font::Helvetica, 13, p.text_secondary, CARD_PADDING, inner);
        }
        if !card.meta.is_empty() {
            self.text(&card.meta.join(" \u{00b7} "), Font::Helvetica, 12, p.text_muted, CARD_PADDING, inner);
        }
        if let Some(body) = &card.body {
            self.y += 4;
            self.text(body, Font::Helvetica, 13, p.text_primary, CARD_PADDING, inner);
        }
        for bullet in &card.bullets {
            self.text(&format!("\u{2022} {}", bullet), Font::Helvetica, 13, p.text_secondary, CARD_PADDING + 8, inner - 8);
        }
        if !card.tags.is_empty() {
            self.y += 6;
            self.chips(&card.tags, CARD_PADDING, inner, p.bg_tertiary, p.text_secondary);
        }
        if !card.links.is_empty() {
            self.y += 8;
            self.links(&card.links, CARD_PADDING, inner);
        }
        self.y += CARD_PADDING;
        bg.resize(self.x, top, self.width, self.y - top);
    }

    fn block(&mut self, block: &Block) {
        let p = *self.palette;
        let w = self.width;
        match block {
            Block::Lead { name, title, tagline } => {
                self.y += 24;
                self.text(name, Font::HelveticaBold, 34, p.text_primary, 0, w);
                self.text(title, Font::Helvetica, 20, p.primary, 0, w);
                self.y += 6;
                self.text(tagline, Font::Helvetica, 15, p.text_secondary, 0, w);
            }
            Block::Heading(text) => {
                self.y += 12;
                self.text(text, Font::HelveticaBold, 18, p.text_primary, 0, w);
            }
            Block::Paragraph(text) => {
                self.text(text, Font::Helvetica, BODY_SIZE, p.text_secondary, 0, w);
            }
            Block::Markdown(text) => {
                self.text(&plain_text(text), Font::Helvetica, BODY_SIZE, p.text_secondary, 0, w);
            }
            Block::Card(card) => self.card(card),
            Block::Tags(tags) => self.chips(tags, 0, w, p.bg_tertiary, p.text_secondary),
            Block::Links(links) => self.links(links, 0, w),
            Block::Jump { label, target } => self.jump(label, target),
            Block::Skill { name, level, dots, details } => {
                let meter = format!(
                    "{}{}  {}",
                    "\u{25cf}".repeat(*dots as usize),
                    "\u{25cb}".repeat(4usize.saturating_sub(*dots as usize)),
                    level
                );
                let meter_w = text_width(&meter, Font::Helvetica, 13) + 4;
                let row_top = self.y;
                self.text(name, Font::HelveticaBold, BODY_SIZE, p.text_primary, 0, w - meter_w);
                let mut frame = Frame::new(self.x + w - meter_w, row_top, meter_w, self.y - row_top, None);
                frame.set_label(&meter);
                frame.set_label_size(13);
                frame.set_label_color(color(p.primary));
                frame.set_align(Align::Right | Align::Top | Align::Inside);
                if let Some(details) = details {
                    self.text(details, Font::Helvetica, 12, p.text_muted, 0, w);
                }
            }
        }
        self.y += BLOCK_GAP;
    }

    fn section(&mut self, view: &SectionView) -> SectionAnchor {
        let anchor = Frame::new(self.x, self.y, self.width, 1, None);
        self.y += SECTION_PADDING;
        if !matches!(view.blocks.first(), Some(Block::Lead { .. })) {
            self.text(&view.title, Font::HelveticaBold, 26, self.palette.primary, 0, self.width);
            self.y += BLOCK_GAP;
        }
        for block in &view.blocks {
            self.block(block);
        }
        self.y += SECTION_PADDING - BLOCK_GAP;

        let mut rule = Frame::new(self.x, self.y, self.width, 1, None);
        rule.set_frame(FrameType::FlatBox);
        rule.set_color(color(self.palette.border));
        self.y += 1;

        SectionAnchor {
            id: view.id.clone(),
            frame: anchor,
        }
    }

    fn footer(&mut self, text: &str) {
        self.y += 24;
        let mut frame = self.text(text, Font::Helvetica, 13, self.palette.text_muted, 0, self.width);
        frame.set_align(Align::Center | Align::Inside | Align::Wrap);
        let w = text_width("Back to top", Font::Helvetica, 13) + 16;
        let mut back = Button::new(self.x + (self.width - w) / 2, self.y + 4, w, LINK_HEIGHT, "Back to top");
        back.set_frame(FrameType::FlatBox);
        back.set_down_frame(FrameType::FlatBox);
        back.set_color(color(self.palette.bg_primary));
        back.set_selection_color(color(self.palette.hover));
        back.set_label_color(color(self.palette.primary));
        back.set_label_size(13);
        back.clear_visible_focus();
        let sender = self.sender;
        back.set_callback(move |_| sender.send(Message::NavigateFirst));
        self.y += LINK_HEIGHT + 32;
    }
}

/// Replace the scroll's children with widgets for `views`.
///
/// The scroll position is reset to the top; callers restore it afterwards.
pub fn build_page(
    scroll: &mut Scroll,
    views: &[SectionView],
    footer: &str,
    palette: &ThemePalette,
    sender: Sender<Message>,
) -> PageWidgets {
    scroll.scroll_to(0, 0);
    scroll.clear();
    scroll.begin();

    let (x, width) = content_column(scroll);
    let mut builder = PageBuilder {
        x,
        width,
        y: scroll.y(),
        palette,
        sender,
    };
    let anchors = views.iter().map(|view| builder.section(view)).collect();
    builder.footer(footer);

    scroll.end();
    scroll.redraw();

    PageWidgets {
        anchors,
        content_height: builder.y - scroll.y(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_width(s: &str) -> i32 {
        s.chars().count() as i32 * 10
    }

    #[test]
    fn test_wrap_single_line_fits() {
        assert_eq!(wrap_lines("short text", 200, fixed_width), 1);
        assert_eq!(wrap_lines("", 200, fixed_width), 1);
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        // "aaaa bbbb" is 90 px, over the 80 px limit
        assert_eq!(wrap_lines("aaaa bbbb cccc", 80, fixed_width), 3);
        assert_eq!(wrap_lines("aaaa bbbb cccc", 90, fixed_width), 2);
    }

    #[test]
    fn test_wrap_counts_explicit_newlines() {
        assert_eq!(wrap_lines("one\ntwo\nthree", 500, fixed_width), 3);
    }

    #[test]
    fn test_long_word_takes_its_own_line() {
        assert_eq!(wrap_lines("a supercalifragilistic b", 50, fixed_width), 3);
    }

    #[test]
    fn test_label_escapes_at_sign() {
        assert_eq!(label_text("me@example.org"), "me@@example.org");
    }
}
