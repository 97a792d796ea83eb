use crate::components::common::{Msg, Route};
use crate::components::state::ComponentState;
use crate::error::AppResult;
use crate::theme::ThemeContext;
use engine::nav::{self, NavItem, PRIMARY_ITEMS, SIDEBAR_EXTRA_ITEMS};
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::props::{Style, TextModifiers};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::{Block, Borders, Padding, Paragraph};
use tuirealm::{AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State};

/// Navigation rail shown beside the page by layouts that ask for one.
///
/// Whether it is drawn at all is decided by the view from the page chrome and
/// terminal width; this component only renders the items.
pub struct Sidebar {
    ctx: ThemeContext,
    route: Route,
}

impl Sidebar {
    pub fn new(ctx: ThemeContext, route: Route) -> Self {
        Self { ctx, route }
    }

    fn item_line(&self, item: &NavItem, index: Option<usize>) -> Line<'static> {
        let palette = &self.ctx.palette;
        let active = nav::is_active(self.route.path(), item);
        let marker = if active { "▌ " } else { "  " };
        let key = index.map_or_else(|| "   ".to_string(), |i| format!("F{} ", i + 1));

        let style = if active {
            Style::default()
                .fg(palette.primary)
                .add_modifier(TextModifiers::BOLD)
        } else {
            Style::default().fg(palette.text_secondary)
        };

        Line::from(vec![
            Span::styled(marker, Style::default().fg(palette.primary)),
            Span::styled(key, Style::default().fg(palette.text_secondary)),
            Span::styled(item.label, style),
        ])
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let palette = &self.ctx.palette;
        let mut lines: Vec<Line> = PRIMARY_ITEMS
            .iter()
            .enumerate()
            .map(|(i, item)| self.item_line(item, Some(i)))
            .collect();

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Additional",
            Style::default()
                .fg(palette.text_secondary)
                .add_modifier(TextModifiers::BOLD),
        )));
        lines.extend(
            SIDEBAR_EXTRA_ITEMS
                .iter()
                .map(|item| self.item_line(item, None)),
        );
        lines
    }
}

impl MockComponent for Sidebar {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let palette = self.ctx.palette;
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.surface))
            .padding(Padding::vertical(1));

        frame.render_widget(Paragraph::new(self.lines()).block(block), area);
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

impl Component<Msg, NoUserEvent> for Sidebar {
    fn on(&mut self, _ev: Event<NoUserEvent>) -> Option<Msg> {
        None
    }
}

impl ComponentState for Sidebar {
    fn mount(&mut self) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{ThemeRegistry, ThemeSnapshot};

    #[test]
    fn test_lists_primary_and_extra_items() {
        let registry = ThemeRegistry::builtin().unwrap();
        let snapshot = ThemeSnapshot {
            active_key: "theme2".to_string(),
            is_transitioning: false,
        };
        let theme = registry.get("theme2").unwrap();
        let sidebar = Sidebar::new(ThemeContext::new(&theme, &snapshot, 8), Route::Contact);

        let text: Vec<String> = sidebar.lines().iter().map(|l| l.to_string()).collect();
        assert_eq!(text.len(), PRIMARY_ITEMS.len() + 2 + SIDEBAR_EXTRA_ITEMS.len());
        assert_eq!(text[2], "▌ F3 Contact");
        assert_eq!(text[0], "  F1 Home");
        assert!(text.iter().any(|l| l.ends_with("Settings")));
    }
}
