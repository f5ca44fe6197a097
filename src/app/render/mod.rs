//! Section renderers.
//!
//! Each section of the portfolio is a pure function from its content subtree
//! to a [`SectionView`]: a flat list of presentation blocks. The FLTK view
//! and the HTML exporter both consume these; neither looks at the content
//! tree directly, and the theme is applied only when blocks become widgets
//! or markup.

mod career;
mod profile;
mod scholarship;

use pulldown_cmark::{Event, Parser, TagEnd};

use crate::app::domain::content::Portfolio;
use crate::app::domain::sections::{SectionDescriptor, SectionKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Link {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    pub fn mailto(address: &str) -> Self {
        Self::new(address, format!("mailto:{}", address))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Card {
    pub title: String,
    pub subtitle: Option<String>,
    /// Short facts shown on one line, e.g. place and period
    pub meta: Vec<String>,
    pub body: Option<String>,
    pub bullets: Vec<String>,
    pub tags: Vec<String>,
    /// Highlighted label such as a status or a talk type
    pub badge: Option<String>,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// The large introduction at the top of the page
    Lead {
        name: String,
        title: String,
        tagline: String,
    },
    Heading(String),
    Paragraph(String),
    /// Text with inline markdown. The window shows it flattened, the HTML
    /// export renders it.
    Markdown(String),
    Card(Card),
    Tags(Vec<String>),
    Links(Vec<Link>),
    /// A control that scrolls to another section of the page
    Jump {
        label: String,
        target: String,
    },
    Skill {
        name: String,
        level: String,
        /// Filled dots out of four; zero when the level is not recognised
        dots: u8,
        details: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub id: String,
    pub title: String,
    pub blocks: Vec<Block>,
}

impl SectionView {
    fn new(kind: SectionKind, title: &str) -> Self {
        Self {
            id: kind.id().to_string(),
            title: title.to_string(),
            blocks: Vec::new(),
        }
    }

    fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Push a heading followed by cards, or nothing when there are no cards.
    fn push_group(&mut self, heading: String, cards: Vec<Card>) {
        if cards.is_empty() {
            return;
        }
        self.push(Block::Heading(heading));
        self.blocks.extend(cards.into_iter().map(Block::Card));
    }
}

pub fn render_section(kind: SectionKind, portfolio: &Portfolio) -> SectionView {
    match kind {
        SectionKind::About => profile::about(&portfolio.personal_info, &portfolio.contact),
        SectionKind::Research => profile::research(&portfolio.research_profile),
        SectionKind::Publications => scholarship::publications(&portfolio.publications),
        SectionKind::Experience => career::experience(&portfolio.experience, &portfolio.education),
        SectionKind::Talks => scholarship::talks(&portfolio.talks),
        SectionKind::Teaching => career::teaching(&portfolio.teaching),
        SectionKind::Skills => career::skills(&portfolio.skills),
        SectionKind::Awards => scholarship::awards(&portfolio.awards, &portfolio.service),
        SectionKind::Contact => profile::contact(&portfolio.contact),
    }
}

/// Render every navigable section in navigation order. Ids without a
/// renderer are skipped.
pub fn render_portfolio(portfolio: &Portfolio) -> Vec<SectionView> {
    portfolio
        .navigation
        .iter()
        .filter_map(|desc| {
            SectionKind::from_id(&desc.id).map(|kind| render_section(kind, portfolio))
        })
        .collect()
}

/// Navigation entries that actually have a rendered target.
pub fn navigable_sections(portfolio: &Portfolio) -> Vec<SectionDescriptor> {
    portfolio
        .navigation
        .iter()
        .filter(|desc| SectionKind::from_id(&desc.id).is_some())
        .cloned()
        .collect()
}

pub fn footer_text(portfolio: &Portfolio, year: i32) -> String {
    format!("\u{00a9} {} {}. All rights reserved.", year, portfolio.personal_info.name)
}

/// Flatten markdown to display text: emphasis markers dropped, paragraphs
/// separated by a blank line.
pub fn plain_text(markdown: &str) -> String {
    let mut out = String::new();
    for event in Parser::new(markdown) {
        match event {
            Event::Text(text) | Event::Code(text) => out.push_str(&text),
            Event::SoftBreak => out.push(' '),
            Event::HardBreak => out.push('\n'),
            Event::End(TagEnd::Paragraph) => out.push_str("\n\n"),
            _ => {}
        }
    }
    out.trim_end().to_string()
}

/// Split free text on blank lines.
fn paragraphs(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn push_if_set(meta: &mut Vec<String>, value: &str) {
    if !value.trim().is_empty() {
        meta.push(value.to_string());
    }
}
