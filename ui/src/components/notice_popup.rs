use crate::components::base_popup::{PopupBuilder, PopupStyle};
use crate::components::common::{Msg, PopupActivityMsg};
use crate::components::state::ComponentState;
use crate::error::{AppError, AppResult};
use crate::theme::Palette;
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::event::{Key, KeyEvent};
use tuirealm::ratatui::layout::Rect;
use tuirealm::{AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Warning,
    Success,
}

impl NoticeKind {
    fn title(&self) -> &'static str {
        match self {
            NoticeKind::Error => "Error",
            NoticeKind::Warning => "Warning",
            NoticeKind::Success => "Done",
        }
    }
}

/// Modal message box. Closed with Enter or Esc.
pub struct NoticePopup {
    kind: NoticeKind,
    message: String,
    palette: Palette,
    is_mounted: bool,
}

impl NoticePopup {
    pub fn error(error: &AppError, palette: Palette) -> Self {
        // ErrorReporter already puts the category in the message
        Self::new(NoticeKind::Error, error.message(), palette)
    }

    pub fn warning(message: impl Into<String>, palette: Palette) -> Self {
        Self::new(NoticeKind::Warning, message, palette)
    }

    pub fn success(message: impl Into<String>, palette: Palette) -> Self {
        Self::new(NoticeKind::Success, message, palette)
    }

    fn new(kind: NoticeKind, message: impl Into<String>, palette: Palette) -> Self {
        Self {
            kind,
            message: message.into(),
            palette,
            is_mounted: false,
        }
    }

    pub fn kind(&self) -> NoticeKind {
        self.kind
    }

    /// Rows needed to show the message at `width` without scrolling.
    pub fn preferred_height(&self, width: u16) -> u16 {
        let inner = usize::from(width.saturating_sub(4).max(1));
        let body: usize = self
            .message
            .lines()
            .map(|line| line.chars().count().div_ceil(inner).max(1))
            .sum();
        // borders, leading blank, blank and instructions
        u16::try_from(body + 5).unwrap_or(u16::MAX)
    }
}

impl MockComponent for NoticePopup {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let style = match self.kind {
            NoticeKind::Error => PopupStyle::error(&self.palette),
            NoticeKind::Warning => PopupStyle::warning(&self.palette),
            NoticeKind::Success => PopupStyle::success(&self.palette),
        };

        PopupBuilder::new(self.kind.title(), style)
            .add_multiline_text(&self.message)
            .with_instructions("Enter/Esc: Close")
            .render(frame, area);
    }

    fn query(&self, _attr: Attribute) -> Option<AttrValue> {
        None
    }

    fn attr(&mut self, _attr: Attribute, _value: AttrValue) {}

    fn state(&self) -> State {
        State::None
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for NoticePopup {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Enter | Key::Esc,
                ..
            }) => Some(Msg::PopupActivity(PopupActivityMsg::CloseError)),
            _ => None,
        }
    }
}

impl ComponentState for NoticePopup {
    fn mount(&mut self) -> AppResult<()> {
        if self.is_mounted {
            log::warn!("NoticePopup is already mounted");
            return Ok(());
        }

        self.is_mounted = true;
        log::debug!("NoticePopup ({:?}) mounted", self.kind);
        Ok(())
    }
}

impl Drop for NoticePopup {
    fn drop(&mut self) {
        log::debug!("Dropping NoticePopup ({:?})", self.kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tuirealm::event::KeyModifiers;

    #[test]
    fn test_close_keys() {
        let mut popup = NoticePopup::warning("Careful", Palette::default());

        for code in [Key::Enter, Key::Esc] {
            let msg = popup.on(Event::Keyboard(KeyEvent::new(code, KeyModifiers::NONE)));
            assert_eq!(msg, Some(Msg::PopupActivity(PopupActivityMsg::CloseError)));
        }

        let msg = popup.on(Event::Keyboard(KeyEvent::new(
            Key::Char('x'),
            KeyModifiers::NONE,
        )));
        assert_eq!(msg, None);
    }

    #[test]
    fn test_preferred_height_wraps_long_lines() {
        let popup = NoticePopup::success("a".repeat(30), Palette::default());
        // 26 inner columns -> 2 rows of text
        assert_eq!(popup.preferred_height(30), 7);
        assert_eq!(popup.kind(), NoticeKind::Success);
    }
}
