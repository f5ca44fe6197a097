use super::{Block, Card, SectionView, non_empty, push_if_set};
use crate::app::domain::content::{Education, Experience, Skill, SkillLevel, Skills, Teaching};
use crate::app::domain::sections::SectionKind;

pub(super) fn experience(experience: &[Experience], education: &[Education]) -> SectionView {
    let mut view = SectionView::new(SectionKind::Experience, "Experience & Education");

    let jobs = experience
        .iter()
        .map(|job| {
            let mut meta = Vec::new();
            push_if_set(&mut meta, &job.location);
            push_if_set(&mut meta, &job.period);
            Card {
                title: job.title.clone(),
                subtitle: Some(job.institution.clone()).filter(|i| !i.is_empty()),
                meta,
                body: Some(job.description.clone()).filter(|d| !d.is_empty()),
                bullets: job.highlights.clone(),
                ..Default::default()
            }
        })
        .collect();
    view.push_group("Experience".to_string(), jobs);

    let degrees = education.iter().map(education_card).collect();
    view.push_group("Education".to_string(), degrees);
    view
}

fn education_card(degree: &Education) -> Card {
    let mut meta = Vec::new();
    push_if_set(&mut meta, &degree.location);
    push_if_set(&mut meta, &degree.period);

    let mut bullets = Vec::new();
    if let Some(thesis) = non_empty(&degree.thesis) {
        bullets.push(format!("Thesis: {}", thesis));
    }
    if !degree.supervisors.is_empty() {
        bullets.push(format!("Supervisors: {}", degree.supervisors.join(", ")));
    }

    Card {
        title: degree.degree.clone(),
        subtitle: Some(degree.institution.clone()).filter(|i| !i.is_empty()),
        meta,
        body: non_empty(&degree.description),
        bullets,
        badge: non_empty(&degree.distinction),
        ..Default::default()
    }
}

pub(super) fn teaching(teaching: &Teaching) -> SectionView {
    let mut view = SectionView::new(SectionKind::Teaching, "Teaching & Supervision");

    let courses = teaching
        .courses
        .iter()
        .map(|course| {
            let mut meta = Vec::new();
            push_if_set(&mut meta, &course.institution);
            push_if_set(&mut meta, &course.period);
            if let Some(level) = non_empty(&course.level) {
                meta.push(level);
            }
            if let Some(students) = non_empty(&course.students) {
                meta.push(format!("{} students", students));
            }
            Card {
                title: course.title.clone(),
                subtitle: Some(course.role.clone()).filter(|r| !r.is_empty()),
                meta,
                body: non_empty(&course.description),
                ..Default::default()
            }
        })
        .collect();
    view.push_group("Teaching Experience".to_string(), courses);

    let students = teaching
        .supervision
        .iter()
        .map(|s| {
            let mut meta = Vec::new();
            push_if_set(&mut meta, &s.institution);
            push_if_set(&mut meta, &s.period);
            let who: Vec<&str> = [s.name.as_str(), s.kind.as_str()]
                .into_iter()
                .filter(|p| !p.is_empty())
                .collect();
            Card {
                title: s.title.clone(),
                subtitle: Some(who.join(" \u{00b7} ")).filter(|w| !w.is_empty()),
                meta,
                badge: non_empty(&s.status),
                ..Default::default()
            }
        })
        .collect();
    view.push_group("Student Supervision".to_string(), students);
    view
}

pub(super) fn skills(skills: &Skills) -> SectionView {
    let mut view = SectionView::new(SectionKind::Skills, "Skills & Expertise");
    for (label, items) in [
        ("Mathematics", &skills.mathematics),
        ("AI & Machine Learning", &skills.ai_ml),
        ("Programming & Tools", &skills.programming),
    ] {
        if items.is_empty() {
            continue;
        }
        view.push(Block::Heading(label.to_string()));
        view.blocks.extend(items.iter().map(skill_block));
    }
    if !skills.tools.is_empty() {
        view.push(Block::Heading("Scientific Computing Tools".to_string()));
        view.push(Block::Tags(skills.tools.clone()));
    }
    view
}

fn skill_block(skill: &Skill) -> Block {
    Block::Skill {
        name: skill.name.clone(),
        level: skill.level.clone(),
        dots: SkillLevel::parse(&skill.level).map_or(0, |l| l.dots()),
        details: non_empty(&skill.details),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::content::{Course, Supervision};

    #[test]
    fn test_experience_then_education() {
        let jobs = vec![Experience {
            title: "Postdoc".into(),
            institution: "Lab".into(),
            location: "Rennes".into(),
            period: "2024 - Present".into(),
            description: "Sampling".into(),
            highlights: vec!["Paper".into()],
        }];
        let degrees = vec![Education {
            degree: "PhD".into(),
            thesis: Some("On scores".into()),
            supervisors: vec!["A".into(), "B".into()],
            distinction: Some("Summa".into()),
            ..Default::default()
        }];
        let view = experience(&jobs, &degrees);
        assert_eq!(view.blocks[0], Block::Heading("Experience".into()));
        let Block::Card(job) = &view.blocks[1] else { panic!("expected a card") };
        assert_eq!(job.meta, vec!["Rennes", "2024 - Present"]);
        assert_eq!(job.bullets, vec!["Paper"]);
        assert_eq!(view.blocks[2], Block::Heading("Education".into()));
        let Block::Card(phd) = &view.blocks[3] else { panic!("expected a card") };
        assert_eq!(phd.bullets, vec!["Thesis: On scores", "Supervisors: A, B"]);
        assert_eq!(phd.badge.as_deref(), Some("Summa"));
    }

    #[test]
    fn test_teaching_groups() {
        let teaching_data = Teaching {
            courses: vec![Course {
                title: "Probability".into(),
                role: "TA".into(),
                students: Some("40".into()),
                ..Default::default()
            }],
            supervision: vec![Supervision {
                name: "Sam".into(),
                kind: "Master".into(),
                title: "Diffusion".into(),
                status: Some("Ongoing".into()),
                ..Default::default()
            }],
        };
        let view = teaching(&teaching_data);
        let Block::Card(course) = &view.blocks[1] else { panic!("expected a card") };
        assert_eq!(course.meta, vec!["40 students"]);
        let Block::Card(student) = &view.blocks[3] else { panic!("expected a card") };
        assert_eq!(student.subtitle.as_deref(), Some("Sam \u{00b7} Master"));
        assert_eq!(student.badge.as_deref(), Some("Ongoing"));
    }

    #[test]
    fn test_skills_keep_content_order() {
        let s = Skills {
            mathematics: vec![
                Skill { name: "Topology".into(), level: "Intermediate".into(), ..Default::default() },
                Skill { name: "Probability".into(), level: "Expert".into(), ..Default::default() },
            ],
            tools: vec!["LaTeX".into()],
            ..Default::default()
        };
        let view = skills(&s);
        assert_eq!(view.blocks[0], Block::Heading("Mathematics".into()));
        assert!(matches!(&view.blocks[1], Block::Skill { name, dots: 2, .. } if name == "Topology"));
        assert!(matches!(&view.blocks[2], Block::Skill { name, dots: 4, .. } if name == "Probability"));
        assert_eq!(view.blocks[4], Block::Tags(vec!["LaTeX".into()]));
    }

    #[test]
    fn test_unknown_skill_level_has_no_dots() {
        let skill = Skill { name: "X".into(), level: "Guru".into(), ..Default::default() };
        assert!(matches!(skill_block(&skill), Block::Skill { dots: 0, .. }));
    }
}
