use crate::sections::Section;

/// Single owner of the nav-facing page state: which section is highlighted
/// and whether the mobile menu panel is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavState {
    pub active: Section,
    pub menu_open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            active: Section::Home,
            menu_open: false,
        }
    }
}

impl NavState {
    /// Record a new active section. Returns whether the value changed so
    /// callers can skip redundant re-renders.
    pub fn set_active(&mut self, next: Section) -> bool {
        if self.active == next {
            return false;
        }
        log::debug!("[nav] active section -> {}", next);
        self.active = next;
        true
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Every navigation intent closes the mobile panel, whether or not the
    /// target section exists.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
