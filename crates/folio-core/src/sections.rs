use crate::constants::SCROLL_LOOKAHEAD_PX;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The named, vertically ordered regions of the single page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Education,
    Work,
    Contact,
}

impl Section {
    /// Document order; active-section resolution walks this list and the
    /// first hit wins.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Education,
        Section::Work,
        Section::Contact,
    ];

    /// The DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Education => "education",
            Section::Work => "work",
            Section::Contact => "contact",
        }
    }

    /// Capitalized text for nav links.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Education => "Education",
            Section::Work => "Work",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown section id: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Section::Home),
            "about" => Ok(Section::About),
            "education" => Ok(Section::Education),
            "work" => Ok(Section::Work),
            "contact" => Ok(Section::Contact),
            other => Err(UnknownSection(other.to_owned())),
        }
    }
}

/// Vertical extent of a rendered section, as measured from the live
/// document (`offsetTop` / `offsetHeight`). Geometry is re-read on every
/// scroll event rather than cached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub height: f64,
}

impl SectionRect {
    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Resolve which section the viewport is over at `scroll_y`.
///
/// A fixed lookahead is added so the highlight flips slightly before a
/// section reaches the very top of the viewport. `rect_of` returning `None`
/// means that section's element is missing from the document; it is skipped
/// for this tick. `None` overall means no section matched and the caller
/// should keep its previous value.
pub fn active_section<F>(scroll_y: f64, mut rect_of: F) -> Option<Section>
where
    F: FnMut(Section) -> Option<SectionRect>,
{
    let position = scroll_y + SCROLL_LOOKAHEAD_PX;
    Section::ALL
        .iter()
        .copied()
        .find(|&s| rect_of(s).is_some_and(|r| r.contains(position)))
}
