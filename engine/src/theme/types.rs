use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Text colour pair used for body copy and secondary captions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextColors {
    pub primary: String,
    pub secondary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeColors {
    // === Brand Colors ===
    pub primary: String,
    pub secondary: String,
    pub accent: String,

    // === Surface Colors ===
    pub background: String,
    pub surface: String,
    pub border: String,

    // === Text Colors ===
    pub text: TextColors,
}

impl ThemeColors {
    /// All colour tokens with their field names, in declaration order.
    pub fn tokens(&self) -> [(&'static str, &str); 8] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("background", &self.background),
            ("surface", &self.surface),
            ("border", &self.border),
            ("text.primary", &self.text.primary),
            ("text.secondary", &self.text.secondary),
        ]
    }
}

/// Structural page shape selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutType {
    Standard,
    Sidebar,
    Grid,
}

impl LayoutType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutType::Standard => "standard",
            LayoutType::Sidebar => "sidebar",
            LayoutType::Grid => "grid",
        }
    }
}

impl fmt::Display for LayoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(LayoutType::Standard),
            "sidebar" => Ok(LayoutType::Sidebar),
            "grid" => Ok(LayoutType::Grid),
            other => Err(format!("Unknown layout type: '{other}'")),
        }
    }
}

/// Density of the vertical rhythm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    Compact,
    Normal,
    Relaxed,
}

impl Spacing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Spacing::Compact => "compact",
            Spacing::Normal => "normal",
            Spacing::Relaxed => "relaxed",
        }
    }
}

impl fmt::Display for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Spacing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(Spacing::Compact),
            "normal" => Ok(Spacing::Normal),
            "relaxed" => Ok(Spacing::Relaxed),
            other => Err(format!("Unknown spacing: '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeLayout {
    #[serde(rename = "type")]
    pub kind: LayoutType,
    pub spacing: Spacing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Typography {
    pub font_family: String,
    pub heading_size: String,
    pub body_size: String,
}

/// A named bundle of colour, layout and typography tokens.
///
/// Every field is required; registries reject partial themes at load time so
/// consumers never need to handle a missing token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
    pub layout: ThemeLayout,
    pub typography: Typography,
}

/// An sRGB colour parsed from a `#rrggbb` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse a `#rrggbb` (or `rrggbb`) hex token.
    pub fn parse(hex: &str) -> Result<Rgb, &'static str> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err("Invalid hex color format");
        }

        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| "Invalid red component")?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| "Invalid green component")?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| "Invalid blue component")?;

        Ok(Rgb(r, g, b))
    }

    /// Mix `self` over `base` with the given opacity (0.0 keeps `base`, 1.0 keeps `self`).
    pub fn over(self, base: Rgb, opacity: f32) -> Rgb {
        let opacity = opacity.clamp(0.0, 1.0);
        let mix = |top: u8, bottom: u8| -> u8 {
            (f32::from(top) * opacity + f32::from(bottom) * (1.0 - opacity)).round() as u8
        };
        Rgb(mix(self.0, base.0), mix(self.1, base.1), mix(self.2, base.2))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(Rgb::parse("#2563eb"), Ok(Rgb(0x25, 0x63, 0xeb)));
        assert_eq!(Rgb::parse("ffffff"), Ok(Rgb(255, 255, 255)));
        assert!(Rgb::parse("#fff").is_err());
        assert!(Rgb::parse("#gg0000").is_err());
        assert!(Rgb::parse("").is_err());
    }

    #[test]
    fn test_blend_over_background() {
        let white = Rgb(255, 255, 255);
        let black = Rgb(0, 0, 0);

        assert_eq!(black.over(white, 0.0), white);
        assert_eq!(black.over(white, 1.0), black);
        assert_eq!(black.over(white, 0.5), Rgb(128, 128, 128));
        assert_eq!(Rgb(0x25, 0x63, 0xeb).to_hex(), "#2563eb");
    }

    #[test]
    fn test_layout_tokens_round_trip_through_strings() {
        assert_eq!("Sidebar".parse::<LayoutType>(), Ok(LayoutType::Sidebar));
        assert_eq!(LayoutType::Grid.to_string(), "grid");
        assert_eq!("relaxed".parse::<Spacing>(), Ok(Spacing::Relaxed));
        assert!("dense".parse::<Spacing>().is_err());
    }
}
