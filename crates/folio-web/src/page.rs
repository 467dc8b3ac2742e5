//! Builds the dynamic parts of the page (projects, education, skills,
//! social links) from the content model in `folio-core`. The static copy
//! lives in the HTML shell; containers missing from the shell are skipped.

use crate::consts::{
    EDUCATION_LIST_ID, PROJECT_LIST_ID, REVEALED_CLASS, SKILL_LIST_ID, SOCIAL_LIST_ID,
};
use folio_core::{stagger_delay, EDUCATION, PROJECTS, SKILLS, SOCIAL_LINKS};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn render_content(document: &web::Document) {
    render_skills(document);
    render_projects(document);
    render_education(document);
    render_socials(document);
}

fn make(document: &web::Document, tag: &str, class: &str) -> Option<web::Element> {
    let el = document.create_element(tag).ok()?;
    el.set_class_name(class);
    Some(el)
}

fn append(parent: &web::Element, child: &web::Element) {
    let _ = parent.append_child(child);
}

fn set_stagger(el: &web::Element, index: usize) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        let _ = html
            .style()
            .set_property("transition-delay", &format!("{:.2}s", stagger_delay(index)));
    }
}

fn render_skills(document: &web::Document) {
    let list = match document.get_element_by_id(SKILL_LIST_ID) {
        Some(el) => el,
        None => return,
    };
    for (i, skill) in SKILLS.iter().enumerate() {
        if let Some(pill) = make(document, "span", &format!("pill pill-{}", i % 4)) {
            pill.set_text_content(Some(skill));
            let _ = pill.set_attribute("data-reveal", "");
            set_stagger(&pill, i);
            append(&list, &pill);
        }
    }
}

fn render_projects(document: &web::Document) {
    let list = match document.get_element_by_id(PROJECT_LIST_ID) {
        Some(el) => el,
        None => return,
    };
    for project in PROJECTS {
        let card = match make(document, "article", "project-card") {
            Some(el) => el,
            None => continue,
        };
        let _ = card.set_attribute("data-reveal", "");

        if let Some(title) = make(document, "h3", "project-title") {
            title.set_text_content(Some(project.title));
            append(&card, &title);
        }
        if let Some(summary) = make(document, "p", "project-summary") {
            summary.set_text_content(Some(project.summary));
            append(&card, &summary);
        }
        if let Some(tags) = make(document, "div", "tag-row") {
            for (i, tag) in project.tags.iter().enumerate() {
                if let Some(pill) = make(document, "span", &format!("pill pill-{}", i % 4)) {
                    pill.set_text_content(Some(tag));
                    append(&tags, &pill);
                }
            }
            append(&card, &tags);
        }
        if let Some(link) = make(document, "a", "project-link") {
            link.set_text_content(Some("View Project"));
            let _ = link.set_attribute("href", project.link);
            append(&card, &link);
        }
        append(&list, &card);
    }
}

fn render_education(document: &web::Document) {
    let list = match document.get_element_by_id(EDUCATION_LIST_ID) {
        Some(el) => el,
        None => return,
    };
    for entry in EDUCATION {
        let card = match make(document, "div", "education-card") {
            Some(el) => el,
            None => continue,
        };
        let _ = card.set_attribute("data-reveal", "");

        if let Some(degree) = make(document, "h3", "education-degree") {
            degree.set_text_content(Some(entry.degree));
            append(&card, &degree);
        }
        if let Some(school) = make(document, "div", "education-school") {
            school.set_text_content(Some(entry.school));
            append(&card, &school);
        }
        if let Some(years) = make(document, "div", "education-years") {
            years.set_text_content(Some(entry.years));
            append(&card, &years);
        }
        if let Some(score) = make(document, "p", "education-score") {
            score.set_text_content(Some(entry.score));
            append(&card, &score);
        }
        append(&list, &card);
    }
}

fn render_socials(document: &web::Document) {
    let list = match document.get_element_by_id(SOCIAL_LIST_ID) {
        Some(el) => el,
        None => return,
    };
    for social in SOCIAL_LINKS {
        if let Some(link) = make(document, "a", "social-link") {
            link.set_text_content(Some(social.label));
            let _ = link.set_attribute("href", social.href);
            let _ = link.set_attribute("aria-label", social.label);
            append(&list, &link);
        }
    }
    // Social links sit in the always-visible footer block of the contact
    // section; reveal them immediately rather than waiting for a scroll.
    let _ = list.class_list().add_1(REVEALED_CLASS);
}
