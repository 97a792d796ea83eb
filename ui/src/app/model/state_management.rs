use super::Model;
use super::mounting::NOTICE_WIDTH;
use crate::components::base_popup::PopupLayout;
use crate::components::common::{ComponentId, Route};
use crate::error::{AppError, AppResult};
use engine::layout::{self, SIDEBAR_RAIL_WIDTH_PX};
use tuirealm::props::Style;
use tuirealm::ratatui::layout::{Constraint, Direction, Layout};
use tuirealm::ratatui::widgets::Block;
use tuirealm::terminal::TerminalAdapter;

/// Header rows including its bottom border
const HEADER_HEIGHT: u16 = 2;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn view(&mut self) -> AppResult<()> {
        // Extract values before the closure to avoid borrowing issues
        let route = self.state_manager.route;
        let active_component = self.state_manager.active_component.clone();
        let home_focus = (route == Route::Home).then(|| self.catalog.focus());
        let chrome = layout::page_chrome(self.ctx.layout);
        let background = Style::default()
            .bg(self.ctx.content_palette.background)
            .fg(self.ctx.content_palette.text_primary);
        let ctx = self.ctx.clone();
        let notice_height = self.notice_height;

        self.terminal
            .draw(|f| {
                f.render_widget(Block::default().style(background), f.area());

                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(HEADER_HEIGHT),
                        Constraint::Min(1),    // Main area
                        Constraint::Length(1), // Help bar
                    ])
                    .split(f.area());

                self.app.view(&ComponentId::Header, f, chunks[0]);

                // The rail only shows from its breakpoint; below that the page is full width
                let body = chunks[1];
                let page_area = if chrome.rail_visible_at(ctx.width_px(body.width)) {
                    let rail = ctx.cells_for_px(SIDEBAR_RAIL_WIDTH_PX).min(body.width / 2);
                    let split = Layout::default()
                        .direction(Direction::Horizontal)
                        .constraints([Constraint::Length(rail), Constraint::Min(1)])
                        .split(body);
                    self.app.view(&ComponentId::Sidebar, f, split[0]);
                    split[1]
                } else {
                    body
                };
                self.app.view(&route.component_id(), f, page_area);

                if self.app.mounted(&ComponentId::ThemePicker) {
                    let area = PopupLayout::centered(f.area(), 60, 50);
                    self.app.view(&ComponentId::ThemePicker, f, area);
                }
                if let Some(height) = notice_height {
                    let area = PopupLayout::fixed(f.area(), NOTICE_WIDTH, height);
                    self.app.view(&ComponentId::NoticePopup, f, area);
                }

                self.help_bar
                    .view_with_active(f, chunks[2], &active_component, home_focus);
            })
            .map_err(|e| AppError::Component(e.to_string()))?;

        Ok(())
    }
}
