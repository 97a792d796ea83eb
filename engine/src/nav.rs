//! Navigation items and active-link decisions.
//!
//! Routing itself belongs to the caller; it passes the current path as an
//! opaque string.

/// A navigation entry. Items without a path are decorative rail shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: Option<&'static str>,
}

impl NavItem {
    const fn route(label: &'static str, path: &'static str) -> Self {
        Self {
            label,
            path: Some(path),
        }
    }

    const fn shortcut(label: &'static str) -> Self {
        Self { label, path: None }
    }
}

pub const HOME_PATH: &str = "/";
pub const ABOUT_PATH: &str = "/about";
pub const CONTACT_PATH: &str = "/contact";

/// Header and rail navigation, in display order.
pub const PRIMARY_ITEMS: [NavItem; 3] = [
    NavItem::route("Home", HOME_PATH),
    NavItem::route("About", ABOUT_PATH),
    NavItem::route("Contact", CONTACT_PATH),
];

/// Extra "Quick Links" listed under the primary items in the sidebar rail.
pub const SIDEBAR_EXTRA_ITEMS: [NavItem; 3] = [
    NavItem::shortcut("Featured"),
    NavItem::shortcut("Products"),
    NavItem::shortcut("Settings"),
];

/// Exact path match; `/about/team` does not activate `/about`.
pub fn is_active(current_path: &str, item: &NavItem) -> bool {
    item.path == Some(current_path)
}

pub fn active_item(current_path: &str) -> Option<&'static NavItem> {
    let items: &'static [NavItem] = &PRIMARY_ITEMS;
    items.iter().find(|item| is_active(current_path, item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_only() {
        let about = &PRIMARY_ITEMS[1];
        assert!(is_active("/about", about));
        assert!(!is_active("/about/", about));
        assert!(!is_active("/about/team", about));
        assert!(!is_active("/", about));
    }

    #[test]
    fn test_home_is_not_a_prefix_match() {
        assert_eq!(active_item("/").map(|item| item.label), Some("Home"));
        assert_eq!(active_item("/contact").map(|item| item.label), Some("Contact"));
        assert!(active_item("/missing").is_none());
    }

    #[test]
    fn test_shortcuts_are_never_active() {
        for item in &SIDEBAR_EXTRA_ITEMS {
            assert!(!is_active("/", item));
            assert!(item.path.is_none());
        }
    }
}
