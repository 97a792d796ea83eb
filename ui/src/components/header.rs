use crate::components::common::{Msg, Route};
use crate::components::state::ComponentState;
use crate::error::AppResult;
use crate::theme::ThemeContext;
use engine::layout::Breakpoint;
use engine::nav::{self, PRIMARY_ITEMS};
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::props::{Alignment, Style, TextModifiers};
use tuirealm::ratatui::layout::{Constraint, Direction, Layout, Rect};
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::{Block, Borders, Paragraph};
use tuirealm::{AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State};

pub const BRAND: &str = "Vitrine";
const BRAND_MARK: &str = "◆";

/// Top bar: brand, page navigation and the active theme.
pub struct Header {
    ctx: ThemeContext,
    route: Route,
}

impl Header {
    pub fn new(ctx: ThemeContext, route: Route) -> Self {
        Self { ctx, route }
    }

    /// Navigation spans; the active page is drawn in the primary colour.
    pub fn nav_spans(&self) -> Vec<Span<'static>> {
        let palette = &self.ctx.palette;
        let current = self.route.path();
        let mut spans = Vec::new();

        for (i, item) in PRIMARY_ITEMS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            let style = if nav::is_active(current, item) {
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(TextModifiers::BOLD)
            } else {
                Style::default().fg(palette.text_secondary)
            };
            spans.push(Span::styled(format!("F{} {}", i + 1, item.label), style));
        }
        spans
    }

    fn brand_line(&self) -> Line<'static> {
        let palette = &self.ctx.palette;
        Line::from(vec![
            Span::styled(format!("{BRAND_MARK} "), Style::default().fg(palette.primary)),
            Span::styled(
                BRAND,
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(self.ctx.type_scale.heading),
            ),
        ])
    }

    fn theme_line(&self) -> Line<'static> {
        let palette = &self.ctx.palette;
        let mut spans = Vec::new();
        if self.ctx.is_transitioning {
            spans.push(Span::styled(
                "switching... ",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(TextModifiers::ITALIC),
            ));
        }
        spans.push(Span::styled(
            format!("[{}]", self.ctx.name),
            Style::default().fg(palette.text_primary),
        ));
        spans.push(Span::styled(" F4", Style::default().fg(palette.text_secondary)));
        Line::from(spans)
    }
}

impl MockComponent for Header {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let palette = self.ctx.palette;
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.surface).fg(palette.text_primary));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let breakpoint = self.ctx.breakpoint(area.width);
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(BRAND.len() as u16 + 4),
                Constraint::Min(0),
                Constraint::Length(self.ctx.name.chars().count() as u16 + 20),
            ])
            .split(inner);

        frame.render_widget(Paragraph::new(self.brand_line()), chunks[0]);

        // Full navigation from lg; below that only the current page is named
        let nav_line = if breakpoint >= Breakpoint::Lg {
            Line::from(self.nav_spans())
        } else {
            let label = nav::active_item(self.route.path()).map_or("", |item| item.label);
            Line::from(Span::styled(
                format!("≡ {label}"),
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(TextModifiers::BOLD),
            ))
        };
        frame.render_widget(
            Paragraph::new(nav_line).alignment(Alignment::Center),
            chunks[1],
        );

        if breakpoint >= Breakpoint::Sm {
            frame.render_widget(
                Paragraph::new(self.theme_line()).alignment(Alignment::Right),
                chunks[2],
            );
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

impl Component<Msg, NoUserEvent> for Header {
    fn on(&mut self, _ev: Event<NoUserEvent>) -> Option<Msg> {
        None
    }
}

impl ComponentState for Header {
    fn mount(&mut self) -> AppResult<()> {
        log::debug!("Mounting header for {:?} with theme {}", self.route, self.ctx.key);
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

    #[test]
    fn test_only_current_page_is_highlighted() {
        let ctx = context();
        let header = Header::new(ctx.clone(), Route::About);

        let highlighted: Vec<String> = header
            .nav_spans()
            .into_iter()
            .filter(|span| span.style.fg == Some(ctx.palette.primary))
            .map(|span| span.content.to_string())
            .collect();

        assert_eq!(highlighted, vec!["F2 About".to_string()]);
    }
}
