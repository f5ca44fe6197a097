use super::{Block, Card, Link, SectionView, non_empty, push_if_set};
use crate::app::domain::content::{Award, Publication, Publications, Service, Talk, Talks};
use crate::app::domain::sections::SectionKind;

pub(super) fn publications(publications: &Publications) -> SectionView {
    let mut view = SectionView::new(SectionKind::Publications, "Publications");
    let total = publications.total();
    if total == 0 {
        return view;
    }
    view.push(Block::Paragraph(format!(
        "{} {}",
        total,
        if total == 1 { "publication" } else { "publications" }
    )));

    for (label, items) in [
        ("Journal Articles", &publications.journals),
        ("Conference Papers", &publications.conferences),
        ("Preprints", &publications.preprints),
    ] {
        view.push_group(
            format!("{} ({})", label, items.len()),
            items.iter().map(publication_card).collect(),
        );
    }
    view
}

fn publication_card(publication: &Publication) -> Card {
    let mut meta = Vec::new();
    if let Some(venue) = non_empty(&publication.venue) {
        meta.push(venue);
    }
    if let Some(volume) = non_empty(&publication.volume) {
        meta.push(format!("Vol. {}", volume));
    }
    if let Some(pages) = non_empty(&publication.pages) {
        meta.push(format!("pp. {}", pages));
    }
    if let Some(location) = non_empty(&publication.location) {
        meta.push(location);
    }
    if let Some(year) = publication.year {
        meta.push(year.to_string());
    }

    let links = [
        ("DOI", publication.doi_url()),
        ("arXiv", publication.arxiv_url()),
        ("HAL", publication.hal_url()),
    ]
    .into_iter()
    .filter_map(|(label, url)| url.map(|u| Link::new(label, u)))
    .collect();

    Card {
        title: publication.title.clone(),
        subtitle: Some(publication.authors.clone()).filter(|a| !a.is_empty()),
        meta,
        tags: publication.tags.clone(),
        badge: non_empty(&publication.award).or_else(|| non_empty(&publication.status)),
        links,
        ..Default::default()
    }
}

pub(super) fn talks(talks: &Talks) -> SectionView {
    let mut view = SectionView::new(SectionKind::Talks, "Talks & Presentations");
    view.push_group(
        format!("Invited Talks ({})", talks.invited.len()),
        talks.invited.iter().map(talk_card).collect(),
    );
    view.push_group(
        format!("Conference Presentations ({})", talks.contributed.len()),
        talks.contributed.iter().map(talk_card).collect(),
    );
    view
}

fn talk_card(talk: &Talk) -> Card {
    let mut meta = Vec::new();
    push_if_set(&mut meta, &talk.location);
    push_if_set(&mut meta, &talk.date);
    Card {
        title: talk.title.clone(),
        subtitle: Some(talk.venue.clone()).filter(|v| !v.is_empty()),
        meta,
        badge: non_empty(&talk.kind),
        ..Default::default()
    }
}

pub(super) fn awards(awards: &[Award], service: &[Service]) -> SectionView {
    let mut view = SectionView::new(SectionKind::Awards, "Awards & Grants");
    let award_cards = awards
        .iter()
        .map(|award| {
            let mut meta = Vec::new();
            if let Some(year) = award.year {
                meta.push(year.to_string());
            }
            if let Some(amount) = non_empty(&award.amount) {
                meta.push(amount);
            }
            Card {
                title: award.title.clone(),
                subtitle: Some(award.organization.clone()).filter(|o| !o.is_empty()),
                meta,
                body: non_empty(&award.description),
                ..Default::default()
            }
        })
        .collect::<Vec<_>>();
    view.blocks.extend(award_cards.into_iter().map(Block::Card));

    let service_cards = service
        .iter()
        .map(|entry| {
            let mut meta = Vec::new();
            if let Some(event) = non_empty(&entry.event) {
                meta.push(event);
            }
            if let Some(venue) = non_empty(&entry.venue) {
                meta.push(venue);
            }
            if let Some(year) = entry.year {
                meta.push(year.to_string());
            }
            Card {
                title: entry.kind.clone(),
                meta,
                body: non_empty(&entry.session),
                tags: entry.venues.clone(),
                ..Default::default()
            }
        })
        .collect();
    view.push_group("Professional Service".to_string(), service_cards);
    view
}
