use tuirealm::props::{Alignment, Color};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::style::Style;
use tuirealm::ratatui::text::{Line, Span, Text};
use tuirealm::ratatui::widgets::Paragraph;
use tuirealm::Frame;

use crate::app::catalog_state::HomeFocus;
use crate::components::common::ComponentId;

/// Bottom line listing the shortcuts valid for the focused component
pub struct HelpBar {
    style: Style,
}

impl Default for HelpBar {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpBar {
    pub fn new() -> Self {
        Self {
            style: Style::default().fg(Color::White).bg(Color::DarkGray),
        }
    }

    fn global_shortcuts(&self) -> Vec<(String, bool)> {
        vec![
            ("[F1-F3]".to_string(), true),
            (" Pages ".to_string(), false),
            ("[F4]".to_string(), true),
            (" Themes ".to_string(), false),
            ("[F6]".to_string(), true),
            (" Next theme ".to_string(), false),
            ("[Ctrl+C]".to_string(), true),
            (" Quit".to_string(), false),
        ]
    }

    fn context_shortcuts(
        &self,
        active_component: &ComponentId,
        home_focus: Option<HomeFocus>,
    ) -> Vec<(String, bool)> {
        match active_component {
            ComponentId::HomePage => {
                let mut shortcuts = vec![
                    ("[Tab]".to_string(), true),
                    (" Next control ".to_string(), false),
                ];
                match home_focus.unwrap_or_default() {
                    HomeFocus::Search => {
                        shortcuts.push(("[Type]".to_string(), true));
                        shortcuts.push((" Search ".to_string(), false));
                        shortcuts.push(("[Esc]".to_string(), true));
                        shortcuts.push((" Clear ".to_string(), false));
                    }
                    HomeFocus::Category | HomeFocus::Sort => {
                        shortcuts.push(("[←/→]".to_string(), true));
                        shortcuts.push((" Change ".to_string(), false));
                    }
                    HomeFocus::View => {
                        shortcuts.push(("[Enter/←/→]".to_string(), true));
                        shortcuts.push((" Grid/List ".to_string(), false));
                    }
                    HomeFocus::Products => {
                        shortcuts.push(("[↑/↓/←/→]".to_string(), true));
                        shortcuts.push((" Browse ".to_string(), false));
                    }
                }
                shortcuts.push(("[F5]".to_string(), true));
                shortcuts.push((" Reload ".to_string(), false));
                shortcuts
            }
            ComponentId::AboutPage => vec![
                ("[↑/↓]".to_string(), true),
                (" Scroll ".to_string(), false),
                ("[Enter]".to_string(), true),
                (" Get Started ".to_string(), false),
            ],
            ComponentId::ContactPage => vec![
                ("[Tab]".to_string(), true),
                (" Next field ".to_string(), false),
                ("[Enter]".to_string(), true),
                (" Next/Newline ".to_string(), false),
                ("[Ctrl+S]".to_string(), true),
                (" Send ".to_string(), false),
            ],
            ComponentId::ThemePicker => vec![
                ("[↑/↓]".to_string(), true),
                (" Navigate ".to_string(), false),
                ("[Enter]".to_string(), true),
                (" Apply ".to_string(), false),
                ("[Esc]".to_string(), true),
                (" Close ".to_string(), false),
            ],
            ComponentId::NoticePopup => vec![
                ("[Enter/Esc]".to_string(), true),
                (" Close ".to_string(), false),
            ],
            _ => vec![],
        }
    }

    /// Context shortcuts first, then the global ones.
    pub fn help_text(
        &self,
        active_component: &ComponentId,
        home_focus: Option<HomeFocus>,
    ) -> Vec<(String, bool)> {
        let mut shortcuts = self.context_shortcuts(active_component, home_focus);
        if !shortcuts.is_empty() {
            shortcuts.push((" | ".to_string(), false));
        }
        shortcuts.extend(self.global_shortcuts());
        shortcuts
    }

    pub fn view_with_active(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        active_component: &ComponentId,
        home_focus: Option<HomeFocus>,
    ) {
        let spans: Vec<Span> = self
            .help_text(active_component, home_focus)
            .into_iter()
            .map(|(text, highlight)| {
                if highlight {
                    Span::styled(text, Style::default().fg(Color::Yellow))
                } else {
                    Span::raw(text)
                }
            })
            .collect();

        let paragraph = Paragraph::new(Text::from(Line::from(spans)))
            .style(self.style)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(shortcuts: &[(String, bool)]) -> Vec<&str> {
        shortcuts
            .iter()
            .filter(|(_, highlight)| *highlight)
            .map(|(text, _)| text.as_str())
            .collect()
    }

    #[test]
    fn test_home_shortcuts_follow_focus() {
        let bar = HelpBar::new();

        let search = bar.help_text(&ComponentId::HomePage, Some(HomeFocus::Search));
        assert!(keys(&search).contains(&"[Esc]"));

        let sort = bar.help_text(&ComponentId::HomePage, Some(HomeFocus::Sort));
        assert!(keys(&sort).contains(&"[←/→]"));
        assert!(keys(&sort).contains(&"[Ctrl+C]"));
    }

    #[test]
    fn test_globals_always_present() {
        let bar = HelpBar::new();
        let shortcuts = bar.help_text(&ComponentId::Header, None);
        assert_eq!(keys(&shortcuts), vec!["[F1-F3]", "[F4]", "[F6]", "[Ctrl+C]"]);
    }
}
