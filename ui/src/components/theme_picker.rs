use crate::components::base_popup::{PopupBuilder, PopupStyle};
use crate::components::common::{Msg, ThemeActivityMsg};
use crate::components::state::ComponentState;
use crate::error::{AppError, AppResult};
use crate::theme::{Palette, ThemeContext};
use engine::ThemeRegistry;
use engine::theme::LayoutType;
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::event::{Key, KeyEvent};
use tuirealm::props::{Alignment, Style, TextModifiers};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::{List, ListItem, ListState, Paragraph};
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State, StateValue,
};

const CMD_RESULT_THEME_SELECTED: &str = "ThemeSelected";
const CMD_RESULT_CLOSE_PICKER: &str = "ClosePicker";

/// One registry theme as offered by the picker
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeOption {
    pub key: String,
    pub name: String,
    pub layout: LayoutType,
    pub swatch: Palette,
}

impl ThemeOption {
    /// Every registry theme, in registry order.
    pub fn from_registry(registry: &ThemeRegistry) -> Vec<ThemeOption> {
        registry
            .iter()
            .map(|(key, theme)| ThemeOption {
                key: key.to_string(),
                name: theme.name.clone(),
                layout: theme.layout.kind,
                swatch: Palette::from_colors(&theme.colors),
            })
            .collect()
    }
}

/// Popup listing the registry themes with a colour swatch each.
///
/// # Navigation
///
/// - **Up/Down or k/j** - Move the selection
/// - **Enter** - Apply the selected theme
/// - **Esc** - Close without switching
pub struct ThemePicker {
    ctx: ThemeContext,
    options: Vec<ThemeOption>,
    selected: usize,
}

impl ThemePicker {
    pub fn new(ctx: ThemeContext, options: Vec<ThemeOption>) -> Self {
        Self {
            ctx,
            options,
            selected: 0,
        }
    }

    pub fn selected_key(&self) -> Option<&str> {
        self.options.get(self.selected).map(|o| o.key.as_str())
    }

    fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn move_down(&mut self) {
        if self.selected + 1 < self.options.len() {
            self.selected += 1;
        }
    }

    fn option_item(&self, option: &ThemeOption) -> ListItem<'static> {
        let palette = &self.ctx.palette;
        let swatch = &option.swatch;
        let active = option.key == self.ctx.key;

        let mut spans = vec![
            Span::styled("██", Style::default().fg(swatch.primary)),
            Span::styled("██", Style::default().fg(swatch.accent)),
            Span::styled("██", Style::default().fg(swatch.background)),
            Span::raw(" "),
            Span::styled(
                option.name.clone(),
                Style::default().fg(palette.text_primary),
            ),
            Span::styled(
                format!("  {}", option.layout.as_str()),
                Style::default().fg(palette.text_secondary),
            ),
        ];
        if active {
            spans.push(Span::styled(
                "  (active)",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(TextModifiers::ITALIC),
            ));
        }
        ListItem::new(Line::from(spans))
    }
}

impl MockComponent for ThemePicker {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let palette = self.ctx.palette;
        let items: Vec<ListItem> = self
            .options
            .iter()
            .map(|option| self.option_item(option))
            .collect();

        let builder = PopupBuilder::new("Select Theme", PopupStyle::from_palette(&palette));
        let list = List::new(items)
            .block(builder.create_block())
            .highlight_style(
                Style::default()
                    .bg(palette.background)
                    .add_modifier(TextModifiers::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut list_state = ListState::default().with_selected(Some(self.selected));
        frame.render_widget(tuirealm::ratatui::widgets::Clear, area);
        frame.render_stateful_widget(list, area, &mut list_state);

        if area.height > 2 {
            let instruction_area = Rect {
                x: area.x + 1,
                y: area.y + area.height - 2,
                width: area.width.saturating_sub(2),
                height: 1,
            };
            let instructions = Paragraph::new("↑/↓/j/k: Navigate, Enter: Apply, Esc: Close")
                .style(Style::default().fg(palette.text_secondary))
                .alignment(Alignment::Center);
            frame.render_widget(instructions, instruction_area);
        }
    }

    fn query(&self, _attr: Attribute) -> Option<AttrValue> {
        None
    }

    fn attr(&mut self, _attr: Attribute, _value: AttrValue) {}

    fn state(&self) -> State {
        match self.selected_key() {
            Some(key) => State::One(StateValue::String(key.to_string())),
            None => State::None,
        }
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for ThemePicker {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        let cmd_result = match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Up | Key::Char('k'),
                ..
            }) => {
                self.move_up();
                CmdResult::Changed(State::One(StateValue::Usize(self.selected)))
            }
            Event::Keyboard(KeyEvent {
                code: Key::Down | Key::Char('j'),
                ..
            }) => {
                self.move_down();
                CmdResult::Changed(State::One(StateValue::Usize(self.selected)))
            }
            Event::Keyboard(KeyEvent {
                code: Key::Enter, ..
            }) => match self.selected_key() {
                Some(key) => CmdResult::Custom(
                    CMD_RESULT_THEME_SELECTED,
                    State::One(StateValue::String(key.to_string())),
                ),
                None => CmdResult::None,
            },
            Event::Keyboard(KeyEvent { code: Key::Esc, .. }) => {
                CmdResult::Custom(CMD_RESULT_CLOSE_PICKER, State::None)
            }
            _ => CmdResult::None,
        };

        match cmd_result {
            CmdResult::Custom(CMD_RESULT_THEME_SELECTED, State::One(StateValue::String(key))) => {
                Some(Msg::ThemeActivity(ThemeActivityMsg::ThemeSelected(key)))
            }
            CmdResult::Custom(CMD_RESULT_CLOSE_PICKER, _) => {
                Some(Msg::ThemeActivity(ThemeActivityMsg::ThemePickerClosed))
            }
            CmdResult::Changed(_) => Some(Msg::ForceRedraw),
            _ => None,
        }
    }
}

impl ComponentState for ThemePicker {
    fn mount(&mut self) -> AppResult<()> {
        if self.options.is_empty() {
            return Err(AppError::Theme("No themes available".to_string()));
        }

        // Open on the active theme
        self.selected = self
            .options
            .iter()
            .position(|o| o.key == self.ctx.key)
            .unwrap_or(0);
        log::debug!("Theme picker mounted with {} themes", self.options.len());
        Ok(())
    }
}
