use crate::theme::Palette;
use crate::theme::palette::{STATUS_ERROR, STATUS_SUCCESS, STATUS_WARNING};
use tuirealm::ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

/// Popup colours derived from the active palette
#[derive(Debug, Clone, Copy)]
pub struct PopupStyle {
    pub border_color: Color,
    pub title_color: Color,
    pub text_color: Color,
    pub muted_color: Color,
    pub background: Color,
}

impl PopupStyle {
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            border_color: palette.primary,
            title_color: palette.accent,
            text_color: palette.text_primary,
            muted_color: palette.text_secondary,
            background: palette.surface,
        }
    }

    pub fn error(palette: &Palette) -> Self {
        Self {
            border_color: STATUS_ERROR,
            title_color: STATUS_ERROR,
            ..Self::from_palette(palette)
        }
    }

    pub fn warning(palette: &Palette) -> Self {
        Self {
            border_color: STATUS_WARNING,
            title_color: STATUS_WARNING,
            ..Self::from_palette(palette)
        }
    }

    pub fn success(palette: &Palette) -> Self {
        Self {
            border_color: STATUS_SUCCESS,
            title_color: STATUS_SUCCESS,
            ..Self::from_palette(palette)
        }
    }
}

/// Builder for popups sharing one frame style
pub struct PopupBuilder {
    title: String,
    style: PopupStyle,
    content_lines: Vec<Line<'static>>,
    instructions: Option<String>,
}

impl PopupBuilder {
    pub fn new(title: impl Into<String>, style: PopupStyle) -> Self {
        Self {
            title: title.into(),
            style,
            content_lines: Vec::new(),
            instructions: None,
        }
    }

    pub fn add_text(mut self, text: impl Into<String>) -> Self {
        self.content_lines.push(Line::from(text.into()));
        self
    }

    pub fn add_empty_line(mut self) -> Self {
        self.content_lines.push(Line::from(""));
        self
    }

    pub fn add_line(mut self, spans: Vec<Span<'static>>) -> Self {
        self.content_lines.push(Line::from(spans));
        self
    }

    pub fn add_multiline_text(mut self, text: impl Into<String>) -> Self {
        for line in text.into().lines() {
            self.content_lines.push(Line::from(line.to_string()));
        }
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Frame only, for popups that render their own body (lists, tables).
    pub fn create_block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.style.border_color))
            .style(Style::default().bg(self.style.background))
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Center)
            .title_style(
                Style::default()
                    .fg(self.style.title_color)
                    .add_modifier(Modifier::BOLD),
            )
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let block = self.create_block();

        let mut all_lines = vec![Line::from("")];
        all_lines.extend(self.content_lines);

        if let Some(instructions) = self.instructions {
            all_lines.push(Line::from(""));
            all_lines.push(Line::from(Span::styled(
                instructions,
                Style::default().fg(self.style.muted_color),
            )));
        }

        let paragraph = Paragraph::new(all_lines)
            .block(block)
            .style(Style::default().fg(self.style.text_color))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }
}

/// Popup sizing helpers
pub struct PopupLayout;

impl PopupLayout {
    /// Centered area with the given percentage of `area`
    pub fn centered(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
        let popup_width = (area.width * width_percent) / 100;
        let popup_height = (area.height * height_percent) / 100;
        Self::fixed(area, popup_width, popup_height)
    }

    /// Centered area of `width` x `height` cells, clipped to `area`
    pub fn fixed(area: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);

        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_popup_is_clipped_and_centered() {
        let area = Rect::new(0, 0, 40, 10);

        assert_eq!(PopupLayout::fixed(area, 20, 4), Rect::new(10, 3, 20, 4));
        assert_eq!(PopupLayout::fixed(area, 60, 20), area);
        assert_eq!(PopupLayout::centered(area, 50, 50), Rect::new(10, 2, 20, 5));
    }
}
