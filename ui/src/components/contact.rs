use crate::app::contact_state::{ContactField, ContactState};
use crate::components::common::{ContactActivityMsg, Msg};
use crate::components::page::{self, Canvas};
use crate::components::state::ComponentState;
use crate::error::AppResult;
use crate::theme::palette::STATUS_ERROR;
use crate::theme::{Palette, ThemeContext};
use engine::layout::{Breakpoint, PageKind};
use engine::theme::LayoutType;
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::props::{Alignment, Style, TextModifiers};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};
use tuirealm::{AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State};

const INTRO: &str = "Have questions about Vitrine? Want to collaborate or just say hello? \
We'd love to hear from you. Drop us a message and we'll get back to you soon.";

const MESSAGE_ROWS: u16 = 6;

pub struct ContactInfo {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub description: &'static str,
}

pub const CONTACT_INFO: [ContactInfo; 3] = [
    ContactInfo {
        icon: "✉",
        title: "Email",
        value: "hello@vitrine.dev",
        description: "Send us an email anytime",
    },
    ContactInfo {
        icon: "☎",
        title: "Phone",
        value: "+1 (555) 123-4567",
        description: "Mon-Fri from 8am to 6pm",
    },
    ContactInfo {
        icon: "⌂",
        title: "Office",
        value: "123 Design Street, Creative City, CC 12345",
        description: "Come say hello at our office",
    },
];

/// One horizontal band of the page, top to bottom.
#[derive(Debug, Clone, PartialEq)]
enum Band {
    Intro,
    Info(Vec<usize>),
    FormHeading,
    Fields(Vec<ContactField>),
    Submit,
    Gap,
}

/// Contact page: contact details and the message form.
///
/// # Navigation
///
/// - **Tab/Shift+Tab** - Move between fields
/// - **Enter** - Next field, or a new line in the message
/// - **Ctrl+S** - Send the message
pub struct ContactPage {
    ctx: ThemeContext,
    contact: ContactState,
}

impl ContactPage {
    pub fn new(ctx: ThemeContext, contact: ContactState) -> Self {
        Self { ctx, contact }
    }

    fn palette(&self) -> Palette {
        self.ctx.content_palette
    }

    fn is_wide(&self, width: u16) -> bool {
        Breakpoint::Md.is_active_at(self.ctx.width_px(width))
    }

    fn column_gap(&self) -> u16 {
        self.ctx.cells_for_step(6).max(1)
    }

    /// Bands and their heights for a container `width` columns wide.
    fn plan(&self, width: u16, gap: u16) -> Vec<(Band, u16)> {
        let wide = self.is_wide(width);
        let info_columns: usize = if wide { 3 } else { 1 };
        let info_width = page::columns(
            Rect::new(0, 0, width, 1),
            info_columns as u16,
            self.column_gap(),
        )[0]
        .width;

        let mut bands = vec![
            (
                Band::Intro,
                1 + self.ctx.type_scale.heading_gap + page::wrapped_rows(INTRO, width),
            ),
            (Band::Gap, gap),
        ];

        let indices: Vec<usize> = (0..CONTACT_INFO.len()).collect();
        for row in indices.chunks(info_columns) {
            let height = row
                .iter()
                .map(|&i| info_height(&CONTACT_INFO[i], info_width))
                .max()
                .unwrap_or(0);
            bands.push((Band::Info(row.to_vec()), height));
            bands.push((Band::Gap, 1));
        }
        bands.push((Band::Gap, gap.saturating_sub(1)));

        bands.push((Band::FormHeading, 2));
        let field_rows: Vec<Vec<ContactField>> = if wide {
            vec![
                vec![ContactField::Name, ContactField::Email],
                vec![ContactField::Subject],
                vec![ContactField::Message],
            ]
        } else {
            ContactField::ALL.iter().map(|f| vec![*f]).collect()
        };
        for row in field_rows {
            let height = self.field_row_height(&row);
            bands.push((Band::Fields(row), height));
        }
        bands.push((Band::Gap, 1));
        bands.push((Band::Submit, 1));
        bands
    }

    fn field_row_height(&self, row: &[ContactField]) -> u16 {
        let box_height = row
            .iter()
            .map(|f| field_box_height(*f))
            .max()
            .unwrap_or(0);
        let has_error = row.iter().any(|f| self.contact.error_for(*f).is_some());
        // label, box, error or spacing row
        1 + box_height + 1 + u16::from(has_error)
    }

    /// Scroll offset keeping the focused field on screen.
    fn scroll_for(&self, bands: &[(Band, u16)], viewport_height: u16) -> u16 {
        let focus = self.contact.focus();
        let mut bottom = 0u16;
        for (band, height) in bands {
            bottom = bottom.saturating_add(*height);
            if matches!(band, Band::Fields(row) if row.contains(&focus)) {
                break;
            }
        }
        // Keep the submit line in view once the message is focused
        if focus == ContactField::Message {
            bottom = bottom.saturating_add(2);
        }
        bottom.saturating_sub(viewport_height)
    }

    fn render_intro(&self, frame: &mut Frame, area: Rect) {
        let palette = self.palette();
        let mut lines = vec![page::heading(
            "Get In Touch",
            &palette,
            self.ctx.type_scale.heading,
        )];
        lines.extend((0..self.ctx.type_scale.heading_gap).map(|_| Line::from("")));
        lines.push(Line::from(Span::styled(
            INTRO,
            Style::default()
                .fg(palette.text_secondary)
                .add_modifier(self.ctx.type_scale.body),
        )));
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            area,
        );
    }

    fn info_widget(&self, info: &ContactInfo) -> Paragraph<'static> {
        let palette = self.palette();
        let border = if self.ctx.layout == LayoutType::Grid {
            BorderType::Thick
        } else {
            BorderType::Rounded
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.surface))
            .padding(Padding::horizontal(1));

        Paragraph::new(vec![
            Line::from(Span::styled(info.icon, Style::default().fg(palette.primary))),
            Line::from(Span::styled(
                info.title,
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(TextModifiers::BOLD),
            )),
            Line::from(Span::styled(
                info.value,
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(TextModifiers::BOLD),
            )),
            Line::from(Span::styled(
                info.description,
                Style::default().fg(palette.text_secondary),
            )),
        ])
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
    }

    fn field_lines(&self, field: ContactField, focused: bool) -> Vec<Line<'static>> {
        let palette = self.palette();
        let value = self.contact.form().value(field);
        let cursor = Span::styled("▏", Style::default().fg(palette.primary));

        if value.is_empty() {
            let mut spans = Vec::new();
            if focused {
                spans.push(cursor);
            }
            spans.push(Span::styled(
                field.placeholder(),
                Style::default()
                    .fg(palette.text_secondary)
                    .add_modifier(TextModifiers::ITALIC),
            ));
            return vec![Line::from(spans)];
        }

        let style = Style::default().fg(palette.text_primary);
        let mut lines: Vec<Line> = value
            .split('\n')
            .map(|line| Line::from(Span::styled(line.to_string(), style)))
            .collect();
        if focused {
            if let Some(last) = lines.last_mut() {
                last.spans.push(cursor);
            }
        }
        lines
    }

    fn render_field(&self, frame: &mut Frame, area: Rect, field: ContactField) {
        let palette = self.palette();
        let focused = self.contact.focus() == field;
        let error = self.contact.error_for(field);

        let label_style = if focused {
            Style::default()
                .fg(palette.primary)
                .add_modifier(TextModifiers::BOLD)
        } else {
            Style::default().fg(palette.text_primary)
        };
        let label = Rect::new(area.x, area.y, area.width, 1.min(area.height));
        frame.render_widget(Paragraph::new(Span::styled(field.label(), label_style)), label);

        let box_height = field_box_height(field).min(area.height.saturating_sub(1));
        if box_height == 0 {
            return;
        }
        let border_color = if error.is_some() {
            STATUS_ERROR
        } else if focused {
            palette.primary
        } else {
            palette.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(palette.background));
        let input = Rect::new(area.x, area.y + 1, area.width, box_height);

        let mut paragraph = Paragraph::new(self.field_lines(field, focused)).block(block);
        if field.is_multiline() {
            paragraph = paragraph.wrap(Wrap { trim: false });
        }
        frame.render_widget(paragraph, input);

        if let Some(error) = error {
            let row = area.y + 1 + box_height;
            if row < area.y + area.height {
                frame.render_widget(
                    Paragraph::new(Span::styled(
                        format!("⚠ {}", error.user_message()),
                        Style::default().fg(STATUS_ERROR),
                    )),
                    Rect::new(area.x, row, area.width, 1),
                );
            }
        }
    }
}

fn field_box_height(field: ContactField) -> u16 {
    if field.is_multiline() {
        MESSAGE_ROWS + 2
    } else {
        3
    }
}

fn info_height(info: &ContactInfo, width: u16) -> u16 {
    let inner = width.saturating_sub(4);
    // borders, icon and title
    2 + 2 + page::wrapped_rows(info.value, inner) + page::wrapped_rows(info.description, inner)
}

impl MockComponent for ContactPage {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let palette = self.palette();
        frame.render_widget(
            Block::default().style(Style::default().bg(palette.background)),
            area,
        );

        let (container, gap) = page::container(&self.ctx, area, PageKind::Content);
        let bands = self.plan(container.width, gap);
        let scroll = self.scroll_for(&bands, container.height);
        let mut canvas = Canvas::new(container, scroll);

        for (band, height) in &bands {
            if *band == Band::Gap {
                canvas.skip(*height);
                continue;
            }
            let Some(rect) = canvas.place(*height) else {
                continue;
            };

            match band {
                Band::Intro => self.render_intro(frame, rect),
                Band::Info(indices) => {
                    let columns = if self.is_wide(container.width) { 3 } else { 1 };
                    let cells = page::columns(rect, columns, self.column_gap());
                    for (&i, cell) in indices.iter().zip(cells) {
                        frame.render_widget(self.info_widget(&CONTACT_INFO[i]), cell);
                    }
                }
                Band::FormHeading => frame.render_widget(
                    Paragraph::new(page::heading(
                        "Send Us a Message",
                        &palette,
                        self.ctx.section_heading(),
                    )),
                    rect,
                ),
                Band::Fields(row) => {
                    let cells = page::columns(rect, row.len() as u16, self.column_gap());
                    for (field, cell) in row.iter().zip(cells) {
                        self.render_field(frame, cell, *field);
                    }
                }
                Band::Submit => frame.render_widget(
                    Paragraph::new(Line::from(vec![
                        page::button("➤ Send Message", &palette),
                        Span::styled(" Ctrl+S", Style::default().fg(palette.text_secondary)),
                    ]))
                    .alignment(Alignment::Right),
                    rect,
                ),
                Band::Gap => {}
            }
        }
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

impl Component<Msg, NoUserEvent> for ContactPage {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        let Event::Keyboard(KeyEvent { code, modifiers }) = ev else {
            return None;
        };

        let msg = match code {
            Key::Char('s') if modifiers == KeyModifiers::CONTROL => ContactActivityMsg::Submit,
            Key::Char(c) if modifiers == KeyModifiers::NONE || modifiers == KeyModifiers::SHIFT => {
                ContactActivityMsg::Input(c)
            }
            Key::Backspace => ContactActivityMsg::Backspace,
            Key::Tab | Key::Down => ContactActivityMsg::FocusNext,
            Key::BackTab | Key::Up => ContactActivityMsg::FocusPrevious,
            Key::Enter if self.contact.focus().is_multiline() => ContactActivityMsg::Newline,
            Key::Enter => ContactActivityMsg::FocusNext,
            _ => return None,
        };
        Some(Msg::ContactActivity(msg))
    }
}

impl ComponentState for ContactPage {
    fn mount(&mut self) -> AppResult<()> {
        log::debug!("Mounting contact page, focus {:?}", self.contact.focus());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{ThemeRegistry, ThemeSnapshot};

    fn context() -> ThemeContext {
        let registry = ThemeRegistry::builtin().unwrap();
        let snapshot = ThemeSnapshot {
            active_key: "theme1".to_string(),
            is_transitioning: false,
        };
        ThemeContext::new(&registry.default_theme(), &snapshot, 8)
    }

    fn press(page: &mut ContactPage, code: Key, modifiers: KeyModifiers) -> Option<Msg> {
        page.on(Event::Keyboard(KeyEvent::new(code, modifiers)))
    }

    #[test]
    fn test_enter_moves_on_or_breaks_line() {
        let mut state = ContactState::new();
        let mut page = ContactPage::new(context(), state.clone());
        assert_eq!(
            press(&mut page, Key::Enter, KeyModifiers::NONE),
            Some(Msg::ContactActivity(ContactActivityMsg::FocusNext))
        );

        state.focus_previous();
        assert_eq!(state.focus(), ContactField::Message);
        let mut page = ContactPage::new(context(), state);
        assert_eq!(
            press(&mut page, Key::Enter, KeyModifiers::NONE),
            Some(Msg::ContactActivity(ContactActivityMsg::Newline))
        );
    }

    #[test]
    fn test_ctrl_s_submits_and_other_chords_are_ignored() {
        let mut page = ContactPage::new(context(), ContactState::new());
        assert_eq!(
            press(&mut page, Key::Char('s'), KeyModifiers::CONTROL),
            Some(Msg::ContactActivity(ContactActivityMsg::Submit))
        );
        assert_eq!(
            press(&mut page, Key::Char('s'), KeyModifiers::NONE),
            Some(Msg::ContactActivity(ContactActivityMsg::Input('s')))
        );
        assert_eq!(press(&mut page, Key::Char('c'), KeyModifiers::CONTROL), None);
    }

    #[test]
    fn test_narrow_layout_stacks_fields() {
        let page = ContactPage::new(context(), ContactState::new());

        let wide = page.plan(120, 2);
        assert!(wide.contains(&(
            Band::Fields(vec![ContactField::Name, ContactField::Email]),
            5
        )));

        let narrow = page.plan(60, 2);
        let field_rows = narrow
            .iter()
            .filter(|(band, _)| matches!(band, Band::Fields(_)))
            .count();
        assert_eq!(field_rows, 4);
    }

    #[test]
    fn test_errors_add_a_row() {
        let mut state = ContactState::new();
        assert!(state.submit().is_err());
        let page = ContactPage::new(context(), state);
        assert_eq!(page.field_row_height(&[ContactField::Name]), 6);
        assert_eq!(page.field_row_height(&[ContactField::Message]), 11);
    }

    #[test]
    fn test_scroll_follows_focused_field() {
        let mut state = ContactState::new();
        let page = ContactPage::new(context(), state.clone());
        let bands = page.plan(120, 2);
        assert_eq!(page.scroll_for(&bands, 200), 0);

        state.focus_previous();
        let page = ContactPage::new(context(), state);
        let total: u16 = bands.iter().map(|(_, h)| *h).sum();
        assert_eq!(page.scroll_for(&bands, 10), total - 10);
    }
}
