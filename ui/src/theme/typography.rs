use engine::theme::Typography;
use tuirealm::props::TextModifiers;

/// Terminal rendition of a theme's type tokens.
///
/// A terminal has one font, so size and family are approximated with text
/// modifiers: headings are always bold and large headings (`text-4xl` and up)
/// are underlined, while a cursive family renders body text in italics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeScale {
    pub heading: TextModifiers,
    pub body: TextModifiers,
    /// Blank rows under a section heading
    pub heading_gap: u16,
}

impl Default for TypeScale {
    fn default() -> Self {
        Self {
            heading: TextModifiers::BOLD,
            body: TextModifiers::empty(),
            heading_gap: 1,
        }
    }
}

impl TypeScale {
    pub fn from_typography(typography: &Typography) -> Self {
        let step = size_step(&typography.heading_size);

        let mut body = TextModifiers::empty();
        if generic_family(&typography.font_family) == Some("cursive") {
            body |= TextModifiers::ITALIC;
        }

        Self {
            heading: heading_modifiers(&typography.heading_size),
            body,
            heading_gap: if step >= size_step("text-5xl") { 2 } else { 1 },
        }
    }
}

const SIZE_SCALE: [&str; 13] = [
    "text-xs",
    "text-sm",
    "text-base",
    "text-lg",
    "text-xl",
    "text-2xl",
    "text-3xl",
    "text-4xl",
    "text-5xl",
    "text-6xl",
    "text-7xl",
    "text-8xl",
    "text-9xl",
];

/// Bold, plus underline from `text-4xl` up.
pub fn heading_modifiers(size_token: &str) -> TextModifiers {
    if size_step(size_token) >= size_step("text-4xl") {
        TextModifiers::BOLD | TextModifiers::UNDERLINED
    } else {
        TextModifiers::BOLD
    }
}

/// Position of a size token on the scale. Unknown tokens sit at `text-base`.
pub fn size_step(token: &str) -> usize {
    SIZE_SCALE
        .iter()
        .position(|s| *s == token.trim())
        .unwrap_or(2)
}

/// The trailing generic family of a font stack (`serif`, `sans-serif`, ...).
pub fn generic_family(font_family: &str) -> Option<&str> {
    const GENERIC: [&str; 5] = ["serif", "sans-serif", "monospace", "cursive", "fantasy"];
    font_family
        .rsplit(',')
        .map(str::trim)
        .find(|part| GENERIC.contains(part))
}
