use crate::components::common::{Msg, ThemeActivityMsg};
use crate::components::page::{self, Canvas};
use crate::components::state::ComponentState;
use crate::error::AppResult;
use crate::theme::{Palette, ThemeContext};
use engine::layout::{PageKind, feature_grid};
use engine::theme::LayoutType;
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::event::{Key, KeyEvent};
use tuirealm::props::{Alignment, Style, TextModifiers};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};
use tuirealm::{AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State};

const PAGE_STEP: u16 = 10;

const INTRO: &str = "Vitrine is more than just a demonstration, it's a showcase of what's \
possible when design meets technology. It demonstrates the power of dynamic theming in a \
modern terminal application.";

const STORY: [&str; 2] = [
    "In today's digital landscape, personalization is key. Users expect applications that \
adapt to their preferences, not just in functionality but in appearance and feel. Vitrine \
was born from this understanding.",
    "We believe that great design should be accessible, dynamic, and user-centric. Our three \
distinct themes, Minimalist, Professional Dark and Colorful Creative, each tell a different \
story and cater to different moods and use cases.",
];

const CTA_TEXT: &str = "Try switching between our themes with F4 or the quick switch keys. \
Watch as the entire interface adapts to your choice.";

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: "☻",
        title: "Community Driven",
        description: "Built by developers, for developers. Join our growing community of theme enthusiasts.",
    },
    Feature {
        icon: "◎",
        title: "Precision Design",
        description: "Every pixel matters. Our themes are crafted with attention to detail and user experience.",
    },
    Feature {
        icon: "★",
        title: "Award Winning",
        description: "Recognized for innovation in UI/UX design and development excellence.",
    },
    Feature {
        icon: "♥",
        title: "Made with Love",
        description: "Passionate about creating beautiful, functional interfaces that users love.",
    },
];

/// About page: introduction, story, feature grid and a call to action.
///
/// Scroll position lives in the component and survives redraws; a theme
/// switch remounts the page at the top.
pub struct AboutPage {
    ctx: ThemeContext,
    scroll: u16,
    max_scroll: u16,
}

impl AboutPage {
    pub fn new(ctx: ThemeContext) -> Self {
        Self {
            ctx,
            scroll: 0,
            // Unknown until the first render
            max_scroll: u16::MAX,
        }
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    fn palette(&self) -> Palette {
        self.ctx.content_palette
    }

    fn scroll_by(&mut self, delta: i32) -> bool {
        let next = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll));
        let next = u16::try_from(next).unwrap_or(0);
        let changed = next != self.scroll;
        self.scroll = next;
        changed
    }

    fn body_style(&self) -> Style {
        Style::default()
            .fg(self.palette().text_secondary)
            .add_modifier(self.ctx.type_scale.body)
    }

    fn intro_height(&self, width: u16) -> u16 {
        1 + self.ctx.type_scale.heading_gap + page::wrapped_rows(INTRO, width)
    }

    fn render_intro(&self, frame: &mut Frame, area: Rect) {
        let palette = self.palette();
        let mut lines = vec![page::heading(
            "About Vitrine",
            &palette,
            self.ctx.type_scale.heading,
        )];
        lines.extend((0..self.ctx.type_scale.heading_gap).map(|_| Line::from("")));
        lines.push(Line::from(Span::styled(INTRO, self.body_style())));

        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            area,
        );
    }

    fn story_block(&self) -> Block<'static> {
        let palette = self.palette();
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.surface))
            .padding(Padding::horizontal(2))
    }

    fn story_height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(6);
        // borders, heading and one blank line before each paragraph
        2 + 1
            + STORY
                .iter()
                .map(|p| 1 + page::wrapped_rows(p, inner))
                .sum::<u16>()
    }

    fn render_story(&self, frame: &mut Frame, area: Rect) {
        let palette = self.palette();
        let mut lines = vec![page::heading(
            "Our Story",
            &palette,
            self.ctx.section_heading(),
        )];
        for paragraph in STORY {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(paragraph, self.body_style())));
        }
        frame.render_widget(
            Paragraph::new(lines)
                .block(self.story_block())
                .wrap(Wrap { trim: true }),
            area,
        );
    }

    fn feature_height(&self, feature: &Feature, width: u16) -> u16 {
        // borders, icon, title, blank and the wrapped description
        2 + 3 + page::wrapped_rows(feature.description, width.saturating_sub(4))
    }

    fn feature_widget(&self, feature: &Feature) -> Paragraph<'static> {
        let palette = self.palette();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if self.ctx.layout == LayoutType::Grid {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.surface))
            .padding(Padding::horizontal(1));

        Paragraph::new(vec![
            Line::from(Span::styled(
                feature.icon,
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(TextModifiers::BOLD),
            )),
            Line::from(Span::styled(
                feature.title,
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(TextModifiers::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(feature.description, self.body_style())),
        ])
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
    }

    fn cta_height(&self, width: u16) -> u16 {
        // borders, heading, blank, text, blank, button
        2 + 2 + page::wrapped_rows(CTA_TEXT, width.saturating_sub(4)) + 2
    }

    fn render_cta(&self, frame: &mut Frame, area: Rect) {
        let palette = self.palette();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.primary))
            .style(Style::default().bg(palette.surface))
            .padding(Padding::horizontal(1));

        let lines = vec![
            Line::from(Span::styled(
                "Ready to Transform Your Experience?",
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(self.ctx.section_heading()),
            )),
            Line::from(""),
            Line::from(Span::styled(CTA_TEXT, self.body_style())),
            Line::from(""),
            Line::from(vec![
                page::button("Get Started", &palette),
                Span::styled(" Enter", Style::default().fg(palette.text_secondary)),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            area,
        );
    }
}

impl MockComponent for AboutPage {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let palette = self.palette();
        frame.render_widget(
            Block::default().style(Style::default().bg(palette.background)),
            area,
        );

        let (container, gap) = page::container(&self.ctx, area, PageKind::Content);
        let width = container.width;
        let mut canvas = Canvas::new(container, self.scroll);

        if let Some(rect) = canvas.place(self.intro_height(width)) {
            self.render_intro(frame, rect);
        }
        canvas.skip(gap);

        if let Some(rect) = canvas.place(self.story_height(width)) {
            self.render_story(frame, rect);
        }
        canvas.skip(gap);

        if let Some(rect) = canvas.place(1) {
            frame.render_widget(
                Paragraph::new(page::heading(
                    "What Makes Us Different",
                    &palette,
                    self.ctx.section_heading(),
                ))
                .alignment(Alignment::Center),
                rect,
            );
        }
        canvas.skip(1);

        let shape = feature_grid(self.ctx.layout);
        let columns = shape.columns_at(self.ctx.width_px(width)).max(1);
        let column_gap = self.ctx.cells_for_step(shape.gap()).max(1);
        let cell_width = page::columns(Rect::new(0, 0, width, 1), u16::from(columns), column_gap)
            .first()
            .map_or(width, |cell| cell.width);

        for row in FEATURES.chunks(usize::from(columns)) {
            let height = row
                .iter()
                .map(|feature| self.feature_height(feature, cell_width))
                .max()
                .unwrap_or(0);
            if let Some(rect) = canvas.place(height) {
                let cells = page::columns(rect, u16::from(columns), column_gap);
                for (feature, cell) in row.iter().zip(cells) {
                    frame.render_widget(self.feature_widget(feature), cell);
                }
            }
            canvas.skip(1);
        }
        canvas.skip(gap.saturating_sub(1));

        if let Some(rect) = canvas.place(self.cta_height(width)) {
            self.render_cta(frame, rect);
        }

        self.max_scroll = canvas.cursor().saturating_sub(container.height);
        self.scroll = self.scroll.min(self.max_scroll);
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

impl Component<Msg, NoUserEvent> for AboutPage {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        let Event::Keyboard(KeyEvent { code, .. }) = ev else {
            return None;
        };

        let changed = match code {
            Key::Up | Key::Char('k') => self.scroll_by(-1),
            Key::Down | Key::Char('j') => self.scroll_by(1),
            Key::PageUp => self.scroll_by(-i32::from(PAGE_STEP)),
            Key::PageDown => self.scroll_by(i32::from(PAGE_STEP)),
            Key::Home => self.scroll_by(-i32::from(u16::MAX)),
            Key::Enter => return Some(Msg::ThemeActivity(ThemeActivityMsg::TogglePicker)),
            _ => false,
        };
        changed.then_some(Msg::ForceRedraw)
    }
}

impl ComponentState for AboutPage {
    fn mount(&mut self) -> AppResult<()> {
        self.scroll = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{ThemeRegistry, ThemeSnapshot};
    use tuirealm::event::KeyModifiers;

    fn page() -> AboutPage {
        let registry = ThemeRegistry::builtin().unwrap();
        let snapshot = ThemeSnapshot {
            active_key: "theme1".to_string(),
            is_transitioning: false,
        };
        AboutPage::new(ThemeContext::new(&registry.default_theme(), &snapshot, 8))
    }

    fn press(page: &mut AboutPage, code: Key) -> Option<Msg> {
        page.on(Event::Keyboard(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[test]
    fn test_enter_opens_theme_picker() {
        let mut page = page();
        assert_eq!(
            press(&mut page, Key::Enter),
            Some(Msg::ThemeActivity(ThemeActivityMsg::TogglePicker))
        );
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut page = page();
        assert_eq!(press(&mut page, Key::Up), None);
        assert_eq!(press(&mut page, Key::Down), Some(Msg::ForceRedraw));
        assert_eq!(page.scroll(), 1);

        page.max_scroll = 4;
        press(&mut page, Key::PageDown);
        assert_eq!(page.scroll(), 4);
        press(&mut page, Key::Home);
        assert_eq!(page.scroll(), 0);
    }

    #[test]
    fn test_story_height_counts_paragraphs() {
        let page = page();
        let wide = page.story_height(400);
        assert_eq!(wide, 2 + 1 + 2 * 2);
        assert!(page.story_height(40) > wide);
    }
}
