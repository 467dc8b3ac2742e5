// Element ids, selectors, and class names shared with the static shell in
// web/index.html. Renaming anything here means renaming it there too.

pub const FOLLOWER_ID: &str = "cursor-follower";

pub const MENU_TOGGLE_ID: &str = "menu-toggle";
pub const MENU_PANEL_ID: &str = "mobile-menu";
pub const OPEN_CLASS: &str = "open";

pub const NAV_LINK_SELECTOR: &str = "[data-section]";
pub const NAV_HIGHLIGHT_SELECTOR: &str = ".nav-link[data-section]";
pub const ACTIVE_CLASS: &str = "active";

pub const BLOB_ID_PREFIX: &str = "blob-";

pub const REVEAL_SELECTOR: &str = "[data-reveal]";
pub const REVEALED_CLASS: &str = "is-visible";

pub const PROJECT_LIST_ID: &str = "project-list";
pub const EDUCATION_LIST_ID: &str = "education-list";
pub const SKILL_LIST_ID: &str = "skill-list";
pub const SOCIAL_LIST_ID: &str = "social-links";
