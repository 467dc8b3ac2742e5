// Host-side tests for section resolution against synthetic page geometry.

use folio_core::{active_section, Section, SectionRect, UnknownSection};
use std::str::FromStr;

// home [0,800) about [800,1600) education [1600,2400); work/contact missing
fn stacked_rects(section: Section) -> Option<SectionRect> {
    match section {
        Section::Home => Some(SectionRect {
            top: 0.0,
            height: 800.0,
        }),
        Section::About => Some(SectionRect {
            top: 800.0,
            height: 800.0,
        }),
        Section::Education => Some(SectionRect {
            top: 1600.0,
            height: 800.0,
        }),
        _ => None,
    }
}

#[test]
fn top_of_page_resolves_home() {
    assert_eq!(active_section(0.0, stacked_rects), Some(Section::Home));
}

#[test]
fn lookahead_keeps_home_at_650() {
    // 650 + 100 = 750, still inside home's [0, 800)
    assert_eq!(active_section(650.0, stacked_rects), Some(Section::Home));
}

#[test]
fn lookahead_crosses_into_about_at_750() {
    // 750 + 100 = 850, inside about's [800, 1600)
    assert_eq!(active_section(750.0, stacked_rects), Some(Section::About));
}

#[test]
fn section_start_is_inclusive() {
    // 700 + 100 lands exactly on about's top edge
    assert_eq!(active_section(700.0, stacked_rects), Some(Section::About));
}

#[test]
fn past_the_last_section_resolves_none() {
    // no match means the caller keeps its previous value
    assert_eq!(active_section(5000.0, stacked_rects), None);
}

#[test]
fn missing_section_is_skipped_not_fatal() {
    let rects = |section: Section| match section {
        Section::Home => None,
        Section::About => Some(SectionRect {
            top: 0.0,
            height: 800.0,
        }),
        _ => None,
    };
    assert_eq!(active_section(0.0, rects), Some(Section::About));
}

#[test]
fn first_match_wins_when_rects_overlap() {
    // vertically disjoint in practice, but the contract is positional:
    // earlier sections in the fixed order win
    let rects = |_section: Section| {
        Some(SectionRect {
            top: 0.0,
            height: 800.0,
        })
    };
    assert_eq!(active_section(0.0, rects), Some(Section::Home));
}

#[test]
fn resolution_order_matches_document_order() {
    assert_eq!(
        Section::ALL,
        [
            Section::Home,
            Section::About,
            Section::Education,
            Section::Work,
            Section::Contact,
        ]
    );
}

#[test]
fn ids_round_trip_through_from_str() {
    for section in Section::ALL {
        assert_eq!(Section::from_str(section.id()), Ok(section));
    }
}

#[test]
fn unknown_id_is_a_typed_error() {
    assert_eq!(
        Section::from_str("blog"),
        Err(UnknownSection("blog".to_owned()))
    );
}

#[test]
fn labels_are_capitalized_ids() {
    for section in Section::ALL {
        assert_eq!(section.label().to_lowercase(), section.id());
    }
}

#[test]
fn rect_containment_is_half_open() {
    let rect = SectionRect {
        top: 100.0,
        height: 50.0,
    };
    assert!(rect.contains(100.0));
    assert!(rect.contains(149.9));
    assert!(!rect.contains(150.0));
    assert!(!rect.contains(99.9));
}
