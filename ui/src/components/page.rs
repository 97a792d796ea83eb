//! Layout helpers shared by the pages.
//!
//! Pages lay their sections out top to bottom on a virtual column that can be
//! taller than the terminal. [`Canvas`] hands out rows on that column and maps
//! them back to the screen for the current scroll offset.

use crate::theme::{Palette, ThemeContext};
use engine::layout::{PageKind, container_spacing};
use tuirealm::props::{Style, TextModifiers};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::text::{Line, Span};

/// Horizontal container padding, `px-4`
const CONTAINER_PADDING_STEP: u8 = 4;

/// Page container inside `area`: capped at the spacing's maximum width,
/// centred, and padded. Also returns the gap between sections in rows.
pub fn container(ctx: &ThemeContext, area: Rect, page: PageKind) -> (Rect, u16) {
    let spacing = container_spacing(ctx.spacing, page);
    let padding = ctx
        .cells_for_step(CONTAINER_PADDING_STEP)
        .min(area.width / 8);
    let max_cells = ctx.cells_for_px(spacing.max_width_px());
    let width = area.width.saturating_sub(2 * padding).min(max_cells);
    let x = area.x + (area.width - width) / 2;

    // py-8 leaves a row above the first section
    let top = u16::from(area.height > 1);
    let rect = Rect::new(x, area.y + top, width, area.height - top);
    (rect, spacing.gap_rem())
}

/// Rows `text` occupies when word wrapped to `width` columns.
pub fn wrapped_rows(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut rows = 0usize;

    for paragraph in text.lines() {
        let mut line_len = 0usize;
        let mut paragraph_rows = 1usize;
        for word in paragraph.split_whitespace() {
            let len = word.chars().count();
            if line_len == 0 {
                line_len = len;
            } else if line_len + 1 + len <= width {
                line_len += 1 + len;
            } else {
                paragraph_rows += 1;
                line_len = len;
            }
            // Words longer than the line are broken
            while line_len > width {
                paragraph_rows += 1;
                line_len -= width;
            }
        }
        rows += paragraph_rows;
    }
    u16::try_from(rows.max(1)).unwrap_or(u16::MAX)
}

/// Page heading in the primary text colour.
pub fn heading(
    text: impl Into<String>,
    palette: &Palette,
    modifiers: TextModifiers,
) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(modifiers),
    ))
}

/// Filled call to action, drawn as an inverted label.
pub fn button(label: &str, palette: &Palette) -> Span<'static> {
    Span::styled(
        format!(" {label} "),
        Style::default()
            .fg(palette.background)
            .bg(palette.primary)
            .add_modifier(TextModifiers::BOLD),
    )
}

/// Vertical cursor over a scrollable column.
#[derive(Debug, Clone, Copy)]
pub struct Canvas {
    viewport: Rect,
    scroll: u16,
    cursor: u16,
}

impl Canvas {
    pub fn new(viewport: Rect, scroll: u16) -> Self {
        Self {
            viewport,
            scroll,
            cursor: 0,
        }
    }

    /// Rows handed out so far.
    pub fn cursor(&self) -> u16 {
        self.cursor
    }

    pub fn width(&self) -> u16 {
        self.viewport.width
    }

    pub fn skip(&mut self, rows: u16) {
        self.cursor = self.cursor.saturating_add(rows);
    }

    /// Reserve `height` rows and return their on-screen rectangle. Blocks
    /// scrolled past the top are hidden; blocks running off the bottom are cut.
    pub fn place(&mut self, height: u16) -> Option<Rect> {
        let top = self.cursor;
        self.skip(height);

        if top < self.scroll || height == 0 {
            return None;
        }
        let offset = top - self.scroll;
        if offset >= self.viewport.height {
            return None;
        }
        Some(Rect::new(
            self.viewport.x,
            self.viewport.y + offset,
            self.viewport.width,
            height.min(self.viewport.height - offset),
        ))
    }
}

/// Split `row` into `columns` equal cells separated by `gap` columns.
pub fn columns(row: Rect, columns: u16, gap: u16) -> Vec<Rect> {
    let columns = columns.max(1);
    let gaps = gap.saturating_mul(columns - 1);
    let cell = row.width.saturating_sub(gaps) / columns;

    (0..columns)
        .map(|i| Rect::new(row.x + i * (cell + gap), row.y, cell, row.height))
        .collect()
}
