//! # Theme Rendering Module
//!
//! Bridges the engine's theme tokens to the terminal. The engine decides which
//! theme is active and what a layout token means; this module turns that into
//! colours, text modifiers and cell measurements that components can draw with.
//!
//! Components never read the theme store directly. The model builds a
//! [`ThemeContext`] from the store's current snapshot and hands a copy to every
//! component it (re)mounts, so a theme switch is a remount with a new context.
//!
//! ## Pixel Mapping
//!
//! Layout directives are expressed in CSS pixels (breakpoints, container widths,
//! the sidebar rail). The terminal width is converted with a configurable
//! `cell_width_px` so the same breakpoints apply: with the default of 8 px per
//! cell an 80 column terminal is 640 px wide and sits at the `sm` breakpoint.

pub mod palette;
pub mod typography;

pub use palette::Palette;
pub use typography::TypeScale;

use engine::layout::{self, Breakpoint};
use engine::theme::{LayoutType, Spacing};
use engine::{Theme, ThemeRegistry, ThemeSnapshot};
use tuirealm::props::TextModifiers;

/// CSS rem expressed in px; spacing tokens are rem based.
pub const REM_PX: u32 = 16;

/// Everything a component needs to draw with the active theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeContext {
    pub key: String,
    pub name: String,
    pub layout: LayoutType,
    pub spacing: Spacing,
    pub type_scale: TypeScale,
    /// Chrome colours (header, sidebar, popups)
    pub palette: Palette,
    /// Main area colours; dimmed while a switch is in flight
    pub content_palette: Palette,
    pub is_transitioning: bool,
    pub cell_width_px: u16,
}

impl ThemeContext {
    pub fn new(theme: &Theme, snapshot: &ThemeSnapshot, cell_width_px: u16) -> Self {
        let palette = Palette::from_colors(&theme.colors);
        let opacity = f32::from(layout::transition_opacity(snapshot.is_transitioning)) / 100.0;
        let content_palette = if snapshot.is_transitioning {
            Palette::blended(&theme.colors, opacity)
        } else {
            palette
        };

        Self {
            key: snapshot.active_key.clone(),
            name: theme.name.clone(),
            layout: theme.layout.kind,
            spacing: theme.layout.spacing,
            type_scale: TypeScale::from_typography(&theme.typography),
            palette,
            content_palette,
            is_transitioning: snapshot.is_transitioning,
            cell_width_px: cell_width_px.max(1),
        }
    }

    /// Context for `snapshot`, with the theme resolved from the snapshot's own
    /// key so name and key always agree. Unknown keys use the registry default.
    pub fn for_snapshot(
        registry: &ThemeRegistry,
        snapshot: &ThemeSnapshot,
        cell_width_px: u16,
    ) -> Self {
        let theme = registry
            .get(&snapshot.active_key)
            .unwrap_or_else(|| registry.default_theme());
        Self::new(&theme, snapshot, cell_width_px)
    }

    /// Width in px of `cells` terminal columns.
    pub fn width_px(&self, cells: u16) -> u32 {
        u32::from(cells) * u32::from(self.cell_width_px)
    }

    /// Number of whole cells covering `px`.
    pub fn cells_for_px(&self, px: u32) -> u16 {
        let cells = px / u32::from(self.cell_width_px);
        u16::try_from(cells).unwrap_or(u16::MAX)
    }

    /// Cells for a spacing step measured in quarter rems (Tailwind units).
    pub fn cells_for_step(&self, step: u8) -> u16 {
        self.cells_for_px(u32::from(step) * REM_PX / 4)
    }

    /// Modifiers for page section headings, which size by layout rather than
    /// by the theme's own heading token.
    pub fn section_heading(&self) -> TextModifiers {
        typography::heading_modifiers(layout::section_heading(self.layout))
    }

    pub fn breakpoint(&self, cells: u16) -> Breakpoint {
        Breakpoint::for_width(self.width_px(cells))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::ThemeRegistry;

    fn snapshot(key: &str, is_transitioning: bool) -> ThemeSnapshot {
        ThemeSnapshot {
            active_key: key.to_string(),
            is_transitioning,
        }
    }

    #[test]
    fn test_context_from_theme() {
        let registry = ThemeRegistry::builtin().unwrap();
        let theme = registry.get("theme2").unwrap();
        let ctx = ThemeContext::new(&theme, &snapshot("theme2", false), 8);

        assert_eq!(ctx.key, "theme2");
        assert_eq!(ctx.name, "Professional Dark");
        assert_eq!(ctx.layout, LayoutType::Sidebar);
        assert_eq!(ctx.palette, ctx.content_palette);
        assert_eq!(ctx.section_heading(), TextModifiers::BOLD);
    }

    #[test]
    fn test_transition_dims_content_only() {
        let registry = ThemeRegistry::builtin().unwrap();
        let theme = registry.get("theme1").unwrap();
        let ctx = ThemeContext::new(&theme, &snapshot("theme1", true), 8);

        assert!(ctx.is_transitioning);
        assert_eq!(ctx.palette, Palette::from_colors(&theme.colors));
        assert_ne!(ctx.palette.primary, ctx.content_palette.primary);
        assert_eq!(ctx.palette.background, ctx.content_palette.background);
    }

    #[test]
    fn test_for_snapshot_uses_snapshot_key() {
        let registry = ThemeRegistry::builtin().unwrap();

        let ctx = ThemeContext::for_snapshot(&registry, &snapshot("theme3", true), 8);
        assert_eq!(ctx.key, "theme3");
        assert_eq!(ctx.name, "Colorful Creative");
        assert!(ctx.is_transitioning);

        let fallback = ThemeContext::for_snapshot(&registry, &snapshot("retired", false), 8);
        assert_eq!(fallback.name, "Minimalist");
    }

    #[test]
    fn test_cell_mapping() {
        let registry = ThemeRegistry::builtin().unwrap();
        let theme = registry.default_theme();
        let ctx = ThemeContext::new(&theme, &snapshot("theme1", false), 8);

        assert_eq!(ctx.width_px(80), 640);
        assert_eq!(ctx.breakpoint(80), Breakpoint::Sm);
        assert_eq!(ctx.breakpoint(79), Breakpoint::Base);
        assert_eq!(ctx.breakpoint(160), Breakpoint::Xl);
        assert_eq!(ctx.cells_for_px(256), 32);
        // gap-6 is 1.5rem = 24px = 3 cells
        assert_eq!(ctx.cells_for_step(6), 3);
    }

    #[test]
    fn test_zero_cell_width_is_clamped() {
        let registry = ThemeRegistry::builtin().unwrap();
        let theme = registry.default_theme();
        let ctx = ThemeContext::new(&theme, &snapshot("theme1", false), 0);

        assert_eq!(ctx.cell_width_px, 1);
        assert_eq!(ctx.cells_for_px(10), 10);
    }
}
