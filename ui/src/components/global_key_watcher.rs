use crate::components::common::{CatalogActivityMsg, Msg, Route, ThemeActivityMsg};
use tui_realm_stdlib::Phantom;
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::{Component, Event, MockComponent, NoUserEvent};

/// Invisible component subscribed to every key event.
///
/// Pages receive typed characters, so global shortcuts use function keys and
/// modifiers only: F1-F3 navigate, F4 opens the theme picker, F5 reloads the
/// catalog, F6 cycles themes, Alt+1..9 switch straight to a theme and Ctrl+C
/// or Ctrl+Q quit.
#[derive(MockComponent, Default)]
pub struct GlobalKeyWatcher {
    component: Phantom,
}

impl Component<Msg, NoUserEvent> for GlobalKeyWatcher {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        let Event::Keyboard(KeyEvent { code, modifiers }) = ev else {
            return None;
        };

        match (code, modifiers) {
            (Key::Char('c' | 'q'), KeyModifiers::CONTROL) => Some(Msg::AppClose),
            (Key::Function(1), _) => Some(Msg::Navigate(Route::Home)),
            (Key::Function(2), _) => Some(Msg::Navigate(Route::About)),
            (Key::Function(3), _) => Some(Msg::Navigate(Route::Contact)),
            (Key::Function(4), _) | (Key::Char('t'), KeyModifiers::CONTROL) => {
                Some(Msg::ThemeActivity(ThemeActivityMsg::TogglePicker))
            }
            (Key::Function(5), _) => Some(Msg::CatalogActivity(CatalogActivityMsg::Reload)),
            (Key::Function(6), _) => Some(Msg::ThemeActivity(ThemeActivityMsg::NextTheme)),
            (Key::Char(c @ '1'..='9'), KeyModifiers::ALT) => {
                let index = c.to_digit(10).map_or(0, |d| d as usize - 1);
                Some(Msg::ThemeActivity(ThemeActivityMsg::QuickSwitch(index)))
            }
            _ => None,
        }
    }
}
