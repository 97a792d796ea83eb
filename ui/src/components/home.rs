use crate::app::catalog_state::{CatalogState, HomeFocus};
use crate::components::common::{CatalogActivityMsg, Msg};
use crate::components::page::{self, Canvas};
use crate::components::product_card;
use crate::components::state::ComponentState;
use crate::error::AppResult;
use crate::theme::{Palette, ThemeContext};
use engine::catalog::{CategoryFilter, ViewMode, display_category};
use engine::layout::{PageKind, card_affordance, grid_shape};
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::props::{Alignment, Style, TextModifiers};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use tuirealm::{AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State};

pub const HERO_TITLE: &str = "Welcome to Vitrine";
const HERO_INTRO: &str = "Experience the power of dynamic theming in your terminal. \
Switch between three unique themes and watch as the entire interface transforms \
before your eyes, from layout to typography to color schemes.";
const SEARCH_PLACEHOLDER: &str = "Search products...";
/// `max-w-md` in px
const SEARCH_MAX_WIDTH_PX: u32 = 448;
/// `max-w-2xl` in px
const INTRO_MAX_WIDTH_PX: u32 = 672;
const SEARCH_BOX_HEIGHT: u16 = 3;
const CARD_ROW_GAP: u16 = 1;

/// Catalog page: hero, search and filter controls, then the product grid or
/// list.
///
/// The page is rebuilt from a [`CatalogState`] snapshot whenever the catalog
/// changes. It only reports key presses; the model owns the state.
///
/// # Navigation
///
/// - **Tab/Shift+Tab** - Move between search, category, sort, view and products
/// - **Typing** - Edit the search term while the search box is focused
/// - **←/→** - Change the focused selector, or browse products
/// - **↑/↓** - Browse products a row at a time
pub struct HomePage {
    ctx: ThemeContext,
    catalog: CatalogState,
    /// Columns drawn by the last render, for row-wise browsing
    columns: usize,
}

impl HomePage {
    pub fn new(ctx: ThemeContext, catalog: CatalogState) -> Self {
        Self {
            ctx,
            catalog,
            columns: 1,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    fn palette(&self) -> Palette {
        self.ctx.content_palette
    }

    fn focus_style(&self, focus: HomeFocus) -> Style {
        let palette = self.palette();
        if self.catalog.focus() == focus {
            Style::default()
                .fg(palette.accent)
                .add_modifier(TextModifiers::BOLD)
        } else {
            Style::default().fg(palette.text_primary)
        }
    }

    fn hero_lines(&self) -> Vec<Line<'static>> {
        let palette = self.palette();
        let sparkle = Span::styled("✦", Style::default().fg(palette.accent));
        let title = Span::styled(
            HERO_TITLE,
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(self.ctx.type_scale.heading),
        );

        let mut lines = vec![Line::from(vec![
            sparkle.clone(),
            Span::raw(" "),
            title,
            Span::raw(" "),
            sparkle,
        ])];
        lines.extend((0..self.ctx.type_scale.heading_gap).map(|_| Line::from("")));
        lines.push(Line::from(Span::styled(
            HERO_INTRO,
            Style::default()
                .fg(palette.text_secondary)
                .add_modifier(self.ctx.type_scale.body),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("[F4] ", Style::default().fg(palette.text_secondary)),
            page::button("Explore Themes", &palette),
        ]));
        lines
    }

    fn hero_height(&self, width: u16) -> u16 {
        1 + self.ctx.type_scale.heading_gap + page::wrapped_rows(HERO_INTRO, width) + 2
    }

    fn category_label(&self) -> String {
        match self.catalog.category() {
            CategoryFilter::All => "All Categories".to_string(),
            CategoryFilter::Named(name) => display_category(name),
        }
    }

    fn controls_line(&self) -> Line<'static> {
        let palette = self.palette();
        let label = Style::default().fg(palette.text_secondary);
        let view_style = |mode: ViewMode| {
            let base = self.focus_style(HomeFocus::View);
            if self.catalog.view() == mode {
                base.bg(palette.surface).add_modifier(TextModifiers::BOLD)
            } else {
                base.add_modifier(TextModifiers::DIM)
            }
        };

        Line::from(vec![
            Span::styled("⛉ Category ", label),
            Span::styled(
                format!("‹ {} ›", self.category_label()),
                self.focus_style(HomeFocus::Category),
            ),
            Span::raw("    "),
            Span::styled("Sort ", label),
            Span::styled(
                format!("‹ {} ›", self.catalog.sort().label()),
                self.focus_style(HomeFocus::Sort),
            ),
            Span::raw("    "),
            Span::styled(" ▦ Grid ", view_style(ViewMode::Grid)),
            Span::raw(" "),
            Span::styled(" ☰ List ", view_style(ViewMode::List)),
        ])
    }

    fn render_search(&self, frame: &mut Frame, row: Rect) {
        let palette = self.palette();
        let width = self
            .ctx
            .cells_for_px(SEARCH_MAX_WIDTH_PX)
            .min(row.width);
        let area = Rect::new(row.x + (row.width - width) / 2, row.y, width, row.height);

        let focused = self.catalog.focus() == HomeFocus::Search;
        let border = if focused { palette.primary } else { palette.border };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(palette.surface));

        let text = if self.catalog.search().is_empty() {
            Span::styled(
                SEARCH_PLACEHOLDER,
                Style::default()
                    .fg(palette.text_secondary)
                    .add_modifier(TextModifiers::ITALIC),
            )
        } else {
            Span::styled(
                self.catalog.search().to_string(),
                Style::default().fg(palette.text_primary),
            )
        };
        let mut spans = vec![
            Span::styled("⌕ ", Style::default().fg(palette.text_secondary)),
            text,
        ];
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(palette.primary)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }

    /// Scroll offset keeping the selected card on screen while browsing.
    fn scroll_for(&self, products_top: u16, card_height: u16, viewport_height: u16) -> u16 {
        if self.catalog.focus() != HomeFocus::Products {
            return 0;
        }
        let row = u16::try_from(self.catalog.selected() / self.columns.max(1)).unwrap_or(u16::MAX);
        let card_bottom = products_top
            .saturating_add(row.saturating_mul(card_height + CARD_ROW_GAP))
            .saturating_add(card_height);
        card_bottom.saturating_sub(viewport_height)
    }

    fn status_line(&self) -> Option<Line<'static>> {
        let palette = self.palette();
        let feed = self.catalog.feed();

        if feed.loading {
            return Some(Line::from(vec![
                Span::styled("⟳ ", Style::default().fg(palette.primary)),
                Span::styled(
                    "Loading products...",
                    Style::default().fg(palette.text_secondary),
                ),
            ]));
        }
        if let Some(error) = &feed.error {
            return Some(Line::from(vec![
                Span::styled("⚠ ", Style::default().fg(palette.accent)),
                Span::styled(
                    format!("Error loading products: {error}"),
                    Style::default().fg(palette.text_primary),
                ),
            ]));
        }
        if !feed.items.is_empty() && self.catalog.visible().is_empty() {
            return Some(Line::from(Span::styled(
                "No products found matching your criteria.",
                Style::default().fg(palette.text_secondary),
            )));
        }
        None
    }
}

impl MockComponent for HomePage {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let palette = self.palette();
        frame.render_widget(
            Block::default().style(Style::default().bg(palette.background)),
            area,
        );

        let (container, gap) = page::container(&self.ctx, area, PageKind::Catalog);
        let products = self.catalog.visible();
        let affordance = card_affordance(self.ctx.layout, self.catalog.view());
        let shape = grid_shape(self.ctx.layout, self.catalog.view());
        self.columns = usize::from(shape.columns_at(self.ctx.width_px(container.width)).max(1));

        let card_height = product_card::card_height(&affordance);
        let intro_width = self
            .ctx
            .cells_for_px(INTRO_MAX_WIDTH_PX)
            .min(container.width);
        let hero_height = self.hero_height(intro_width);
        // hero, gap, heading, blank, search, blank, controls, gap
        let products_top = hero_height + gap + 2 + SEARCH_BOX_HEIGHT + 1 + 1 + gap;
        let scroll = self.scroll_for(products_top, card_height, container.height);
        let mut canvas = Canvas::new(container, scroll);

        if let Some(rect) = canvas.place(hero_height) {
            let x = rect.x + (rect.width - intro_width) / 2;
            frame.render_widget(
                Paragraph::new(self.hero_lines())
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true }),
                Rect::new(x, rect.y, intro_width, rect.height),
            );
        }
        canvas.skip(gap);

        if let Some(rect) = canvas.place(1) {
            let title = format!("Our Products ({})", products.len());
            frame.render_widget(
                Paragraph::new(page::heading(title, &palette, self.ctx.section_heading()))
                    .alignment(Alignment::Center),
                rect,
            );
        }
        canvas.skip(1);

        if let Some(rect) = canvas.place(SEARCH_BOX_HEIGHT) {
            self.render_search(frame, rect);
        }
        canvas.skip(1);

        if let Some(rect) = canvas.place(1) {
            frame.render_widget(
                Paragraph::new(self.controls_line()).alignment(Alignment::Center),
                rect,
            );
        }
        canvas.skip(gap);

        if let Some(status) = self.status_line() {
            if let Some(rect) = canvas.place(3) {
                let block = Block::default().style(Style::default().bg(palette.surface));
                let inner = Rect::new(rect.x, rect.y + rect.height / 2, rect.width, 1);
                frame.render_widget(block, rect);
                frame.render_widget(Paragraph::new(status).alignment(Alignment::Center), inner);
            }
            return;
        }

        let feed = self.catalog.feed();
        if feed.loading || feed.error.is_some() {
            return;
        }

        let columns = u16::try_from(self.columns).unwrap_or(1);
        let column_gap = self.ctx.cells_for_step(shape.gap()).max(1);
        let browsing = self.catalog.focus() == HomeFocus::Products;

        for (row_index, row_products) in products.chunks(self.columns).enumerate() {
            if let Some(row) = canvas.place(card_height) {
                let cells = page::columns(row, columns, column_gap);
                for (i, (product, cell)) in row_products.iter().zip(cells).enumerate() {
                    let index = row_index * self.columns + i;
                    let selected = browsing && index == self.catalog.selected();
                    frame.render_widget(
                        product_card::card_widget(&self.ctx, &palette, product, &affordance, selected),
                        cell,
                    );
                }
            }
            canvas.skip(CARD_ROW_GAP);
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

impl Component<Msg, NoUserEvent> for HomePage {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        let Event::Keyboard(KeyEvent { code, modifiers }) = ev else {
            return None;
        };

        let msg = match (code, self.catalog.focus()) {
            (Key::Tab, _) => CatalogActivityMsg::FocusNext,
            (Key::BackTab, _) => CatalogActivityMsg::FocusPrevious,

            (Key::Char(c), HomeFocus::Search)
                if modifiers == KeyModifiers::NONE || modifiers == KeyModifiers::SHIFT =>
            {
                CatalogActivityMsg::SearchInput(c)
            }
            (Key::Backspace, HomeFocus::Search) => CatalogActivityMsg::SearchBackspace,
            (Key::Esc, HomeFocus::Search) => CatalogActivityMsg::SearchClear,

            (Key::Left, HomeFocus::Category) => CatalogActivityMsg::PreviousCategory,
            (Key::Right, HomeFocus::Category) => CatalogActivityMsg::NextCategory,
            (Key::Left, HomeFocus::Sort) => CatalogActivityMsg::PreviousSort,
            (Key::Right, HomeFocus::Sort) => CatalogActivityMsg::NextSort,
            (Key::Enter | Key::Left | Key::Right, HomeFocus::View) => {
                CatalogActivityMsg::ToggleViewMode
            }

            (Key::Up, HomeFocus::Products) => CatalogActivityMsg::SelectPrevious(self.columns),
            (Key::Down, HomeFocus::Products) => CatalogActivityMsg::SelectNext(self.columns),
            (Key::Left, HomeFocus::Products) => CatalogActivityMsg::SelectPrevious(1),
            (Key::Right, HomeFocus::Products) => CatalogActivityMsg::SelectNext(1),
            _ => return None,
        };
        Some(Msg::CatalogActivity(msg))
    }
}

impl ComponentState for HomePage {
    fn mount(&mut self) -> AppResult<()> {
        log::debug!(
            "Mounting home page: {} products, focus {:?}",
            self.catalog.feed().items.len(),
            self.catalog.focus()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::catalog::{CatalogFeed, Product, SortKey};
    use engine::{ThemeRegistry, ThemeSnapshot};

    fn context() -> ThemeContext {
        let registry = ThemeRegistry::builtin().unwrap();
        let snapshot = ThemeSnapshot {
            active_key: "theme1".to_string(),
            is_transitioning: false,
        };
        ThemeContext::new(&registry.default_theme(), &snapshot, 8)
    }

    fn product(id: u64, title: &str, category: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price: 10.0,
            description: String::new(),
            category: category.to_string(),
            image: String::new(),
            discount: 0,
        }
    }

    fn loaded_state() -> CatalogState {
        let mut state = CatalogState::new(ViewMode::Grid, SortKey::Name);
        state.set_feed(CatalogFeed::loaded(vec![
            product(1, "Lamp", "home"),
            product(2, "Novel", "books"),
        ]));
        state
    }

    fn press(page: &mut HomePage, code: Key, modifiers: KeyModifiers) -> Option<Msg> {
        page.on(Event::Keyboard(KeyEvent::new(code, modifiers)))
    }

    #[test]
    fn test_typing_goes_to_search() {
        let mut page = HomePage::new(context(), loaded_state());
        assert_eq!(
            press(&mut page, Key::Char('q'), KeyModifiers::NONE),
            Some(Msg::CatalogActivity(CatalogActivityMsg::SearchInput('q')))
        );
        assert_eq!(press(&mut page, Key::Char('c'), KeyModifiers::CONTROL), None);
        assert_eq!(
            press(&mut page, Key::Esc, KeyModifiers::NONE),
            Some(Msg::CatalogActivity(CatalogActivityMsg::SearchClear))
        );
    }

    #[test]
    fn test_arrows_follow_focus() {
        let mut state = loaded_state();
        state.focus_next();
        let mut page = HomePage::new(context(), state.clone());
        assert_eq!(
            press(&mut page, Key::Right, KeyModifiers::NONE),
            Some(Msg::CatalogActivity(CatalogActivityMsg::NextCategory))
        );

        state.focus_next();
        state.focus_next();
        let mut page = HomePage::new(context(), state);
        assert_eq!(
            press(&mut page, Key::Enter, KeyModifiers::NONE),
            Some(Msg::CatalogActivity(CatalogActivityMsg::ToggleViewMode))
        );
    }

    #[test]
    fn test_rows_step_by_rendered_columns() {
        let mut state = loaded_state();
        state.focus_previous();
        assert_eq!(state.focus(), HomeFocus::Products);

        let mut page = HomePage::new(context(), state);
        page.columns = 3;
        assert_eq!(
            press(&mut page, Key::Down, KeyModifiers::NONE),
            Some(Msg::CatalogActivity(CatalogActivityMsg::SelectNext(3)))
        );
        assert_eq!(
            press(&mut page, Key::Left, KeyModifiers::NONE),
            Some(Msg::CatalogActivity(CatalogActivityMsg::SelectPrevious(1)))
        );
    }

    #[test]
    fn test_status_lines() {
        let ctx = context();
        let loading = HomePage::new(ctx.clone(), CatalogState::default());
        assert_eq!(
            loading.status_line().map(|l| l.to_string()),
            Some("⟳ Loading products...".to_string())
        );

        let mut failed = CatalogState::default();
        failed.set_feed(CatalogFeed::failed("boom"));
        let page = HomePage::new(ctx.clone(), failed);
        assert_eq!(
            page.status_line().map(|l| l.to_string()),
            Some("⚠ Error loading products: boom".to_string())
        );

        let mut empty = loaded_state();
        for c in "zzz".chars() {
            empty.push_search(c);
        }
        let page = HomePage::new(ctx.clone(), empty);
        assert_eq!(
            page.status_line().map(|l| l.to_string()),
            Some("No products found matching your criteria.".to_string())
        );

        assert_eq!(HomePage::new(ctx, loaded_state()).status_line(), None);
    }

    #[test]
    fn test_scroll_keeps_selection_visible() {
        let mut state = loaded_state();
        state.focus_previous();
        let page = HomePage::new(context(), state.clone());
        assert_eq!(page.scroll_for(20, 10, 40), 0);
        assert_eq!(page.scroll_for(20, 10, 25), 5);

        state.focus_next();
        let page = HomePage::new(context(), state);
        assert_eq!(page.scroll_for(20, 10, 25), 0);
    }
}
