use super::{Block, Card, Link, SectionView, non_empty, paragraphs};
use crate::app::domain::content::{Contact, PersonalInfo, ResearchProfile};
use crate::app::domain::sections::SectionKind;

/// Percent-encoded "Postdoctoral Position Inquiry".
const OPPORTUNITY_SUBJECT: &str = "Postdoctoral%20Position%20Inquiry";

pub(super) fn about(info: &PersonalInfo, contact: &Contact) -> SectionView {
    let mut view = SectionView::new(SectionKind::About, "About");
    view.push(Block::Lead {
        name: info.name.clone(),
        title: info.title.clone(),
        tagline: info.tagline.clone(),
    });

    let position: Vec<&str> = [info.current_position.as_str(), info.institution.as_str()]
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .collect();
    if !position.is_empty() {
        view.push(Block::Paragraph(position.join(" \u{00b7} ")));
    }

    let mut links = Vec::new();
    if !contact.email.trim().is_empty() {
        links.push(Link::new("Email", format!("mailto:{}", contact.email.trim())));
    }
    if let Some(cv) = non_empty(&contact.cv_url) {
        links.push(Link::new("Download CV", cv));
    }
    if let Some(scholar) = non_empty(&contact.google_scholar) {
        links.push(Link::new("Google Scholar", scholar));
    }
    if let Some(github) = non_empty(&contact.github) {
        links.push(Link::new("GitHub", github));
    }
    if !links.is_empty() {
        view.push(Block::Links(links));
    }

    view.push(Block::Jump {
        label: "\u{2193} Research".to_string(),
        target: SectionKind::Research.id().to_string(),
    });
    view
}

pub(super) fn research(profile: &ResearchProfile) -> SectionView {
    let mut view = SectionView::new(SectionKind::Research, "Research Profile");
    for paragraph in paragraphs(&profile.statement) {
        view.push(Block::Markdown(paragraph));
    }
    let themes = profile
        .themes
        .iter()
        .map(|theme| Card {
            title: theme.title.clone(),
            body: Some(super::plain_text(&theme.description)).filter(|b| !b.is_empty()),
            ..Default::default()
        })
        .collect();
    view.push_group("Core Research Themes".to_string(), themes);
    view
}

pub(super) fn contact(contact: &Contact) -> SectionView {
    let mut view = SectionView::new(SectionKind::Contact, "Get in Touch");

    let mut direct = Vec::new();
    if !contact.email.trim().is_empty() {
        direct.push(Link::mailto(contact.email.trim()));
    }
    if let Some(alt) = non_empty(&contact.alternate_email) {
        direct.push(Link::mailto(&alt));
    }
    let address = contact.address.lines();
    if !direct.is_empty() || !address.is_empty() {
        view.push(Block::Heading("Contact Information".to_string()));
        if !direct.is_empty() {
            view.push(Block::Links(direct));
        }
        if !address.is_empty() {
            view.push(Block::Paragraph(address.join("\n")));
        }
    }

    let profiles: Vec<Link> = contact
        .profile_links()
        .into_iter()
        .map(|(label, url)| Link::new(label, url))
        .collect();
    if !profiles.is_empty() {
        view.push(Block::Heading("Academic Profiles".to_string()));
        view.push(Block::Links(profiles));
    }

    let mut actions = Vec::new();
    if !contact.email.trim().is_empty() {
        actions.push(Link::new(
            "Contact for Opportunities",
            format!("mailto:{}?subject={}", contact.email.trim(), OPPORTUNITY_SUBJECT),
        ));
    }
    if let Some(cv) = non_empty(&contact.cv_url) {
        actions.push(Link::new("Download CV", cv));
    }
    if !actions.is_empty() {
        view.push(Block::Links(actions));
    }
    view
}
