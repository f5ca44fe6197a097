//! Standalone HTML export of the rendered portfolio.
//!
//! The document carries its own stylesheet built from the current palette,
//! so the file opens the same way in any browser.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use pulldown_cmark::{Options, Parser, html};

use crate::app::domain::sections::SectionDescriptor;
use crate::app::domain::theme::ThemePalette;
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::render::{Block, Card, Link, SectionView};

/// Everything the exporter needs, already rendered.
pub struct ExportPage<'a> {
    pub title: &'a str,
    pub navigation: &'a [SectionDescriptor],
    pub sections: &'a [SectionView],
    pub palette: &'a ThemePalette,
    pub footer: &'a str,
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render markdown to an HTML fragment. Raw HTML in the input is escaped.
pub fn render_markdown(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(text, options).map(|event| match event {
        pulldown_cmark::Event::Html(raw) | pulldown_cmark::Event::InlineHtml(raw) => {
            pulldown_cmark::Event::Text(raw)
        }
        other => other,
    });
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

fn stylesheet(p: &ThemePalette) -> String {
    format!(
        "body{{margin:0;font-family:system-ui,sans-serif;background:{bg};color:{text};line-height:1.6}}\
nav{{position:sticky;top:0;background:{bg2};border-bottom:1px solid {border};padding:12px 24px;display:flex;gap:8px;flex-wrap:wrap}}\
nav a{{color:{text2};text-decoration:none;padding:4px 12px;border-radius:999px}}\
nav a:hover{{background:{hover}}}\
nav .logo{{font-weight:700;color:{primary};margin-right:auto}}\
main{{max-width:960px;margin:0 auto;padding:0 24px}}\
section{{padding:48px 0;scroll-margin-top:80px;border-bottom:1px solid {border}}}\
h1{{font-size:2.5em;margin:0}}h2{{color:{primary}}}\
.lead-title{{font-size:1.3em;color:{text2}}}.muted,.meta{{color:{muted}}}\
.card{{background:{bg2};border:1px solid {border};border-radius:12px;padding:16px 20px;margin:12px 0}}\
.card:hover{{border-color:{border_hover}}}\
.badge{{display:inline-block;background:{accent_bg};color:{accent};border-radius:999px;padding:2px 10px;font-size:.85em}}\
.tag{{display:inline-block;background:{bg3};border-radius:6px;padding:2px 8px;margin:2px;font-size:.85em}}\
.links a{{color:{primary};margin-right:16px}}\
.dots{{color:{primary};letter-spacing:2px}}\
footer{{text-align:center;padding:32px;color:{muted}}}",
        bg = p.bg_primary.hex(),
        bg2 = p.bg_secondary.hex(),
        bg3 = p.bg_tertiary.hex(),
        text = p.text_primary.hex(),
        text2 = p.text_secondary.hex(),
        muted = p.text_muted.hex(),
        border = p.border.hex(),
        border_hover = p.border_hover.hex(),
        hover = p.hover.hex(),
        primary = p.primary.hex(),
        accent = p.accent.hex(),
        accent_bg = p.accent_bg.hex(),
    )
}

fn write_links(out: &mut String, links: &[Link]) {
    out.push_str("<p class=\"links\">");
    for link in links {
        let _ = write!(
            out,
            "<a href=\"{}\">{}</a>",
            escape_html(&link.url),
            escape_html(&link.label)
        );
    }
    out.push_str("</p>\n");
}

fn write_tags(out: &mut String, tags: &[String]) {
    out.push_str("<p>");
    for tag in tags {
        let _ = write!(out, "<span class=\"tag\">{}</span>", escape_html(tag));
    }
    out.push_str("</p>\n");
}

fn write_card(out: &mut String, card: &Card) {
    out.push_str("<div class=\"card\">\n");
    let _ = write!(out, "<h4>{}", escape_html(&card.title));
    if let Some(badge) = &card.badge {
        let _ = write!(out, " <span class=\"badge\">{}</span>", escape_html(badge));
    }
    out.push_str("</h4>\n");
    if let Some(subtitle) = &card.subtitle {
        let _ = writeln!(out, "<p><strong>{}</strong></p>", escape_html(subtitle));
    }
    if !card.meta.is_empty() {
        let meta: Vec<String> = card.meta.iter().map(|m| escape_html(m)).collect();
        let _ = writeln!(out, "<p class=\"meta\">{}</p>", meta.join(" &middot; "));
    }
    if let Some(body) = &card.body {
        let _ = writeln!(out, "<p>{}</p>", escape_html(body));
    }
    if !card.bullets.is_empty() {
        out.push_str("<ul>");
        for bullet in &card.bullets {
            let _ = write!(out, "<li>{}</li>", escape_html(bullet));
        }
        out.push_str("</ul>\n");
    }
    if !card.tags.is_empty() {
        write_tags(out, &card.tags);
    }
    if !card.links.is_empty() {
        write_links(out, &card.links);
    }
    out.push_str("</div>\n");
}

fn write_block(out: &mut String, block: &Block) {
    match block {
        Block::Lead { name, title, tagline } => {
            let _ = writeln!(out, "<h1>{}</h1>", escape_html(name));
            let _ = writeln!(out, "<p class=\"lead-title\">{}</p>", escape_html(title));
            let _ = writeln!(out, "<p class=\"muted\">{}</p>", escape_html(tagline));
        }
        Block::Heading(text) => {
            let _ = writeln!(out, "<h3>{}</h3>", escape_html(text));
        }
        Block::Paragraph(text) => {
            let _ = writeln!(out, "<p>{}</p>", escape_html(text).replace('\n', "<br>"));
        }
        Block::Markdown(text) => out.push_str(&render_markdown(text)),
        Block::Card(card) => write_card(out, card),
        Block::Tags(tags) => write_tags(out, tags),
        Block::Links(links) => write_links(out, links),
        Block::Jump { label, target } => {
            let _ = writeln!(
                out,
                "<p class=\"jump\"><a href=\"#{}\">{}</a></p>",
                escape_html(target),
                escape_html(label)
            );
        }
        Block::Skill { name, level, dots, details } => {
            let filled = "\u{25cf}".repeat(*dots as usize);
            let empty = "\u{25cb}".repeat(4usize.saturating_sub(*dots as usize));
            let _ = write!(
                out,
                "<p><strong>{}</strong> <span class=\"dots\">{}{}</span> <span class=\"muted\">{}</span>",
                escape_html(name),
                filled,
                empty,
                escape_html(level)
            );
            if let Some(details) = details {
                let _ = write!(out, "<br><span class=\"muted\">{}</span>", escape_html(details));
            }
            out.push_str("</p>\n");
        }
    }
}

/// Build the complete HTML document.
pub fn export_document(page: &ExportPage<'_>) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape_html(page.title));
    let _ = writeln!(out, "<style>{}</style>\n</head>\n<body id=\"top\">", stylesheet(page.palette));

    out.push_str("<nav>");
    if let Some(first) = page.navigation.first() {
        let _ = write!(
            out,
            "<a class=\"logo\" href=\"#{}\">{}</a>",
            escape_html(&first.id),
            escape_html(page.title)
        );
    }
    for section in page.navigation {
        let _ = write!(
            out,
            "<a href=\"#{}\">{}</a>",
            escape_html(&section.id),
            escape_html(&section.label)
        );
    }
    out.push_str("</nav>\n<main>\n");

    for view in page.sections {
        let _ = writeln!(out, "<section id=\"{}\">", escape_html(&view.id));
        // The hero already shows the name in large type
        if !matches!(view.blocks.first(), Some(Block::Lead { .. })) {
            let _ = writeln!(out, "<h2>{}</h2>", escape_html(&view.title));
        }
        for block in &view.blocks {
            write_block(&mut out, block);
        }
        out.push_str("</section>\n");
    }

    let _ = writeln!(
        out,
        "</main>\n<footer><p>{}</p><p><a href=\"#top\">Back to top</a></p></footer>\n</body>\n</html>",
        escape_html(page.footer)
    );
    out
}

pub fn default_export_path() -> PathBuf {
    std::env::temp_dir().join("folio").join("portfolio.html")
}

/// Write the document, creating parent directories as needed.
pub fn write_export(html: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, html)?;
    log::info!("Exported portfolio to {}", path.display());
    Ok(())
}

/// Write the document and hand it to the system browser.
pub fn export_and_open(page: &ExportPage<'_>, path: &Path) -> Result<()> {
    if page.sections.is_empty() {
        return Err(AppError::Export("nothing to export".to_string()));
    }
    write_export(&export_document(page), path)?;
    open::that(path).map_err(|e| AppError::Export(format!("could not open {}: {}", path.display(), e)))
}
