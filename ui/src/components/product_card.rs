//! Product card rendering for the home page grid and list.
//!
//! Cards are plain paragraphs. The card affordance decides the frame: border
//! weight follows elevation, unbordered cards get a primary coloured frame in
//! place of the neutral border, and cards with a hover scale highlight the
//! selected card.

use crate::theme::{Palette, ThemeContext};
use engine::catalog::Product;
use engine::layout::{CardAffordance, Elevation};
use tuirealm::props::{Style, TextModifiers};
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Rows of a grid card, frame included
pub const GRID_CARD_HEIGHT: u16 = 10;
/// Rows of a list row, frame included
pub const LIST_CARD_HEIGHT: u16 = 7;

pub fn card_height(affordance: &CardAffordance) -> u16 {
    let base = if affordance.row {
        LIST_CARD_HEIGHT
    } else {
        GRID_CARD_HEIGHT
    };
    base + 2 * vertical_padding(affordance)
}

fn vertical_padding(affordance: &CardAffordance) -> u16 {
    // Cells are about twice as tall as they are wide
    u16::from(affordance.padding >= 6)
}

pub fn border_type(elevation: Elevation) -> BorderType {
    match elevation {
        Elevation::Subtle => BorderType::Plain,
        Elevation::Medium => BorderType::Rounded,
        Elevation::Strong => BorderType::Thick,
    }
}

/// Card frame for `affordance`, emphasised when `selected`.
pub fn card_block(
    ctx: &ThemeContext,
    palette: &Palette,
    affordance: &CardAffordance,
    selected: bool,
) -> Block<'static> {
    let frame_color = if selected {
        palette.accent
    } else if affordance.bordered {
        palette.border
    } else {
        palette.primary
    };

    let mut border_style = Style::default().fg(frame_color);
    if selected && affordance.hover_scale {
        border_style = border_style.add_modifier(TextModifiers::BOLD);
    }

    let mut border = border_type(affordance.elevation);
    if selected && affordance.elevation == Elevation::Subtle {
        border = BorderType::Double;
    }

    let horizontal = ctx.cells_for_step(affordance.padding).clamp(1, 3);
    Block::default()
        .borders(Borders::ALL)
        .border_type(border)
        .border_style(border_style)
        .style(Style::default().bg(palette.surface))
        .padding(Padding::new(
            horizontal,
            horizontal,
            vertical_padding(affordance),
            vertical_padding(affordance),
        ))
}

fn price_line(product: &Product, palette: &Palette) -> Line<'static> {
    let mut spans = vec![Span::styled(
        product.display_price(),
        Style::default()
            .fg(palette.primary)
            .add_modifier(TextModifiers::BOLD),
    )];
    if let Some(label) = product.discount_label() {
        spans.push(Span::styled(
            format!("  ◈ {label}"),
            Style::default().fg(palette.accent),
        ));
    }
    Line::from(spans)
}

fn footer_line(product: &Product, palette: &Palette, selected: bool) -> Line<'static> {
    let button_style = if selected {
        Style::default()
            .fg(palette.background)
            .bg(palette.primary)
            .add_modifier(TextModifiers::BOLD)
    } else {
        Style::default().fg(palette.primary)
    };

    Line::from(vec![
        Span::styled(
            format!("[{}]", product.display_category()),
            Style::default().fg(palette.primary),
        ),
        Span::raw("  "),
        Span::styled(" Add to Cart ", button_style),
    ])
}

/// Card body lines for one product.
pub fn card_lines(
    ctx: &ThemeContext,
    palette: &Palette,
    product: &Product,
    affordance: &CardAffordance,
    selected: bool,
) -> Vec<Line<'static>> {
    let title = Line::from(Span::styled(
        product.title.clone(),
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(TextModifiers::BOLD),
    ));
    let description = Line::from(Span::styled(
        product.description.clone(),
        Style::default()
            .fg(palette.text_secondary)
            .add_modifier(ctx.type_scale.body),
    ));

    if affordance.row {
        vec![
            title,
            price_line(product, palette),
            description,
            footer_line(product, palette, selected),
        ]
    } else {
        vec![
            title,
            Line::from(""),
            price_line(product, palette),
            description,
            Line::from(""),
            footer_line(product, palette, selected),
        ]
    }
}

pub fn card_widget(
    ctx: &ThemeContext,
    palette: &Palette,
    product: &Product,
    affordance: &CardAffordance,
    selected: bool,
) -> Paragraph<'static> {
    Paragraph::new(card_lines(ctx, palette, product, affordance, selected))
        .block(card_block(ctx, palette, affordance, selected))
        .wrap(Wrap { trim: true })
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::catalog::ViewMode;
    use engine::layout::card_affordance;
    use engine::theme::LayoutType;
    use engine::{ThemeRegistry, ThemeSnapshot};

    fn context() -> ThemeContext {
        let registry = ThemeRegistry::builtin().unwrap();
        let snapshot = ThemeSnapshot {
            active_key: "theme1".to_string(),
            is_transitioning: false,
        };
        ThemeContext::new(&registry.default_theme(), &snapshot, 8)
    }

    fn product(discount: u32) -> Product {
        Product {
            id: 7,
            title: "Desk Lamp".to_string(),
            price: 49.5,
            description: "Warm light".to_string(),
            category: "home goods".to_string(),
            image: String::new(),
            discount,
        }
    }

    #[test]
    fn test_border_follows_elevation() {
        assert_eq!(border_type(Elevation::Subtle), BorderType::Plain);
        assert_eq!(border_type(Elevation::Medium), BorderType::Rounded);
        assert_eq!(border_type(Elevation::Strong), BorderType::Thick);
    }

    #[test]
    fn test_card_heights() {
        let grid = card_affordance(LayoutType::Grid, ViewMode::Grid);
        let standard = card_affordance(LayoutType::Standard, ViewMode::Grid);
        let list = card_affordance(LayoutType::Grid, ViewMode::List);

        assert_eq!(card_height(&grid), GRID_CARD_HEIGHT + 2);
        assert_eq!(card_height(&standard), GRID_CARD_HEIGHT);
        assert_eq!(card_height(&list), LIST_CARD_HEIGHT);
    }

    #[test]
    fn test_card_lines_show_discount_and_category() {
        let ctx = context();
        let affordance = card_affordance(LayoutType::Standard, ViewMode::List);

        let lines: Vec<String> = card_lines(&ctx, &ctx.palette, &product(15), &affordance, false)
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert_eq!(lines[0], "Desk Lamp");
        assert_eq!(lines[1], "$49.5  ◈ 15% OFF");
        assert!(lines[3].starts_with("[Home Goods]"));

        let plain = card_lines(&ctx, &ctx.palette, &product(0), &affordance, false);
        assert_eq!(plain[1].to_string(), "$49.5");
    }
}
