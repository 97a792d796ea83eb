use engine::theme::{Rgb, ThemeColors};
use tuirealm::props::Color;

// Used when a token fails to parse. The registry validates every token, so
// these only show up for hand-built themes.
mod fallback_colors {
    use tuirealm::props::Color;

    pub const PRIMARY: Color = Color::Cyan;
    pub const SECONDARY: Color = Color::Gray;
    pub const ACCENT: Color = Color::LightCyan;
    pub const BACKGROUND: Color = Color::Reset;
    pub const SURFACE: Color = Color::Black;
    pub const BORDER: Color = Color::DarkGray;
    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_SECONDARY: Color = Color::Gray;
}

/// Fixed status colours. They do not follow the theme so warnings stay readable
/// on every background.
pub const STATUS_SUCCESS: Color = Color::Green;
pub const STATUS_WARNING: Color = Color::Yellow;
pub const STATUS_ERROR: Color = Color::Red;

/// Terminal colours for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: fallback_colors::PRIMARY,
            secondary: fallback_colors::SECONDARY,
            accent: fallback_colors::ACCENT,
            background: fallback_colors::BACKGROUND,
            surface: fallback_colors::SURFACE,
            border: fallback_colors::BORDER,
            text_primary: fallback_colors::TEXT_PRIMARY,
            text_secondary: fallback_colors::TEXT_SECONDARY,
        }
    }
}

impl Palette {
    pub fn from_colors(colors: &ThemeColors) -> Self {
        Self::blended(colors, 1.0)
    }

    /// Every foreground token mixed over the theme background at `opacity`.
    ///
    /// The background itself is kept so the page does not flash while a switch
    /// is in flight.
    pub fn blended(colors: &ThemeColors, opacity: f32) -> Self {
        let background = Rgb::parse(&colors.background).ok();
        let resolve = |token: &str, fallback: Color| -> Color {
            match (Rgb::parse(token), background) {
                (Ok(rgb), Some(base)) => to_color(rgb.over(base, opacity)),
                (Ok(rgb), None) => to_color(rgb),
                (Err(e), _) => {
                    log::warn!("Invalid colour token '{token}': {e}");
                    fallback
                }
            }
        };

        Self {
            primary: resolve(&colors.primary, fallback_colors::PRIMARY),
            secondary: resolve(&colors.secondary, fallback_colors::SECONDARY),
            accent: resolve(&colors.accent, fallback_colors::ACCENT),
            background: background
                .map(to_color)
                .unwrap_or(fallback_colors::BACKGROUND),
            surface: resolve(&colors.surface, fallback_colors::SURFACE),
            border: resolve(&colors.border, fallback_colors::BORDER),
            text_primary: resolve(&colors.text.primary, fallback_colors::TEXT_PRIMARY),
            text_secondary: resolve(&colors.text.secondary, fallback_colors::TEXT_SECONDARY),
        }
    }
}

pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::ThemeRegistry;

    #[test]
    fn test_palette_follows_theme_tokens() {
        let registry = ThemeRegistry::builtin().unwrap();
        let theme = registry.get("theme2").unwrap();
        let palette = Palette::from_colors(&theme.colors);

        assert_eq!(palette.primary, Color::Rgb(0xf5, 0x9e, 0x0b));
        assert_eq!(palette.background, Color::Rgb(0x11, 0x18, 0x27));
        assert_eq!(palette.text_primary, Color::Rgb(0xf9, 0xfa, 0xfb));
    }

    #[test]
    fn test_blended_palette_keeps_background() {
        let registry = ThemeRegistry::builtin().unwrap();
        let theme = registry.get("theme1").unwrap();
        let full = Palette::from_colors(&theme.colors);
        let dimmed = Palette::blended(&theme.colors, 0.75);

        assert_eq!(full.background, dimmed.background);
        assert_ne!(full.primary, dimmed.primary);
        // #2563eb at 75% over white
        assert_eq!(dimmed.primary, Color::Rgb(0x5c, 0x8a, 0xf0));
    }

    #[test]
    fn test_invalid_token_falls_back() {
        let registry = ThemeRegistry::builtin().unwrap();
        let mut colors = registry.get("theme1").unwrap().colors.clone();
        colors.accent = "not-a-colour".to_string();

        let palette = Palette::from_colors(&colors);
        assert_eq!(palette.accent, Color::LightCyan);
    }
}
