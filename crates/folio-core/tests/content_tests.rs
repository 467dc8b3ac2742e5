// Sanity checks over the content model the frontend renders from.

use folio_core::{EDUCATION, PROJECTS, SKILLS, SOCIAL_LINKS};

#[test]
fn every_project_is_fully_described() {
    assert_eq!(PROJECTS.len(), 4);
    for project in PROJECTS {
        assert!(!project.title.is_empty());
        assert!(!project.summary.is_empty());
        assert!(!project.link.is_empty());
        assert!(!project.tags.is_empty());
    }
}

#[test]
fn education_entries_are_complete() {
    assert_eq!(EDUCATION.len(), 3);
    for entry in EDUCATION {
        assert!(!entry.degree.is_empty());
        assert!(!entry.school.is_empty());
        assert!(!entry.years.is_empty());
        assert!(!entry.score.is_empty());
    }
}

#[test]
fn social_links_carry_real_targets() {
    assert!(!SOCIAL_LINKS.is_empty());
    for social in SOCIAL_LINKS {
        assert!(
            social.href.starts_with("https://") || social.href.starts_with("mailto:"),
            "unexpected scheme in {}",
            social.href
        );
    }
}

#[test]
fn skills_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for skill in SKILLS {
        assert!(seen.insert(*skill), "duplicate skill {skill}");
    }
}
