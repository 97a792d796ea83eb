use engine::ThemeSnapshot;
use engine::catalog::CatalogFeed;
use engine::nav::{ABOUT_PATH, CONTACT_PATH, HOME_PATH};

use crate::error::AppError;

#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub enum ComponentId {
    Header,
    Sidebar,
    HomePage,
    AboutPage,
    ContactPage,
    ThemePicker,
    NoticePopup,
    GlobalKeyWatcher,
}

/// Pages reachable from the navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Home,
    About,
    Contact,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Home, Route::About, Route::Contact];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => HOME_PATH,
            Route::About => ABOUT_PATH,
            Route::Contact => CONTACT_PATH,
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    pub fn component_id(&self) -> ComponentId {
        match self {
            Route::Home => ComponentId::HomePage,
            Route::About => ComponentId::AboutPage,
            Route::Contact => ComponentId::ContactPage,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Msg {
    AppClose,
    ForceRedraw,
    Navigate(Route),
    ThemeActivity(ThemeActivityMsg),
    CatalogActivity(CatalogActivityMsg),
    ContactActivity(ContactActivityMsg),
    PopupActivity(PopupActivityMsg),
    Error(AppError),
}

#[derive(Debug, PartialEq)]
pub enum ThemeActivityMsg {
    TogglePicker,
    ThemePickerClosed,
    ThemeSelected(String),
    /// Switch to the n-th registry theme (0 based)
    QuickSwitch(usize),
    NextTheme,
    StateChanged(ThemeSnapshot),
}

#[derive(Debug, PartialEq)]
pub enum CatalogActivityMsg {
    Reload,
    Loaded(CatalogFeed),
    SearchInput(char),
    SearchBackspace,
    SearchClear,
    NextCategory,
    PreviousCategory,
    NextSort,
    PreviousSort,
    ToggleViewMode,
    FocusNext,
    FocusPrevious,
    SelectNext(usize),
    SelectPrevious(usize),
}

#[derive(Debug, PartialEq)]
pub enum ContactActivityMsg {
    Input(char),
    Backspace,
    Newline,
    FocusNext,
    FocusPrevious,
    Submit,
}

#[derive(Debug, PartialEq)]
pub enum PopupActivityMsg {
    ShowError(AppError),
    ShowWarning(String),
    ShowSuccess(String),
    CloseError,
}

impl Default for Msg {
    fn default() -> Self {
        Self::AppClose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/missing"), None);
    }
}
