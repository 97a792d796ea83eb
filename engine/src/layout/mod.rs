//! Pure resolvers from theme layout tokens to rendering directives.
//!
//! Nothing here reads the store; callers pass the tokens of the active theme and
//! get back a value describing the shape to render. Every directive can be
//! rendered as a class string (`css_classes`) and also exposes the structured
//! numbers the terminal views lay out with.

mod breakpoint;

pub use breakpoint::Breakpoint;

use crate::catalog::ViewMode;
use crate::theme::{LayoutType, Spacing};

/// Width of the sidebar rail in px.
pub const SIDEBAR_RAIL_WIDTH_PX: u32 = 256;

/// Which family of page a container wraps. The catalog page runs wider than
/// the text-heavy content pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Catalog,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MaxWidth {
    FourXl,
    FiveXl,
    SixXl,
    SevenXl,
}

impl MaxWidth {
    pub fn class(self) -> &'static str {
        match self {
            MaxWidth::FourXl => "max-w-4xl",
            MaxWidth::FiveXl => "max-w-5xl",
            MaxWidth::SixXl => "max-w-6xl",
            MaxWidth::SevenXl => "max-w-7xl",
        }
    }

    pub fn px(self) -> u32 {
        match self {
            MaxWidth::FourXl => 896,
            MaxWidth::FiveXl => 1024,
            MaxWidth::SixXl => 1152,
            MaxWidth::SevenXl => 1280,
        }
    }
}

/// Page container: maximum content width and vertical gap between sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerSpacing {
    pub max_width: MaxWidth,
    /// Gap in spacing units (1 unit = 0.25rem).
    pub gap: u8,
}

impl ContainerSpacing {
    pub fn css_classes(&self) -> String {
        format!(
            "container mx-auto px-4 py-8 {} space-y-{}",
            self.max_width.class(),
            self.gap
        )
    }

    pub fn max_width_px(&self) -> u32 {
        self.max_width.px()
    }

    /// Gap expressed in whole rem, at least one.
    pub fn gap_rem(&self) -> u16 {
        (u16::from(self.gap) / 4).max(1)
    }
}

pub fn container_spacing(spacing: Spacing, page: PageKind) -> ContainerSpacing {
    let (max_width, gap) = match (page, spacing) {
        (PageKind::Catalog, Spacing::Compact) => (MaxWidth::SixXl, 6),
        (PageKind::Catalog, Spacing::Normal) => (MaxWidth::SixXl, 8),
        (PageKind::Catalog, Spacing::Relaxed) => (MaxWidth::SevenXl, 12),
        (PageKind::Content, Spacing::Compact) => (MaxWidth::FourXl, 8),
        (PageKind::Content, Spacing::Normal) => (MaxWidth::FiveXl, 12),
        (PageKind::Content, Spacing::Relaxed) => (MaxWidth::SixXl, 16),
    };
    ContainerSpacing { max_width, gap }
}

/// Arrangement of the product collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridShape {
    /// Responsive grid; `progression` lists the column count from each
    /// breakpoint upward, starting at [`Breakpoint::Base`].
    Columns {
        progression: &'static [(Breakpoint, u8)],
        gap: u8,
    },
    /// Single column of stacked rows.
    Stacked { gap: u8 },
}

const GRID_PROGRESSION: &[(Breakpoint, u8)] = &[
    (Breakpoint::Base, 1),
    (Breakpoint::Sm, 2),
    (Breakpoint::Lg, 3),
    (Breakpoint::Xl, 4),
];
const SIDEBAR_PROGRESSION: &[(Breakpoint, u8)] = &[
    (Breakpoint::Base, 1),
    (Breakpoint::Md, 2),
    (Breakpoint::Xl, 3),
];
const STANDARD_PROGRESSION: &[(Breakpoint, u8)] = &[
    (Breakpoint::Base, 1),
    (Breakpoint::Md, 2),
    (Breakpoint::Lg, 3),
    (Breakpoint::Xl, 4),
];

impl GridShape {
    pub fn columns_at(&self, width_px: u32) -> u8 {
        match self {
            GridShape::Stacked { .. } => 1,
            GridShape::Columns { progression, .. } => progression
                .iter()
                .rev()
                .find(|(bp, _)| bp.is_active_at(width_px))
                .map_or(1, |(_, cols)| *cols),
        }
    }

    pub fn max_columns(&self) -> u8 {
        match self {
            GridShape::Stacked { .. } => 1,
            GridShape::Columns { progression, .. } => progression
                .iter()
                .map(|(_, cols)| *cols)
                .max()
                .unwrap_or(1),
        }
    }

    pub fn gap(&self) -> u8 {
        match self {
            GridShape::Columns { gap, .. } | GridShape::Stacked { gap } => *gap,
        }
    }

    pub fn is_stacked(&self) -> bool {
        matches!(self, GridShape::Stacked { .. })
    }

    pub fn css_classes(&self) -> String {
        match self {
            GridShape::Stacked { gap } => format!("space-y-{gap}"),
            GridShape::Columns { progression, gap } => {
                let mut classes = String::from("grid");
                for (bp, cols) in progression.iter() {
                    classes.push_str(&format!(" {}grid-cols-{cols}", bp.prefix()));
                }
                classes.push_str(&format!(" gap-{gap}"));
                classes
            }
        }
    }
}

/// List view always stacks, whatever the theme.
pub fn grid_shape(layout: LayoutType, view: ViewMode) -> GridShape {
    if view == ViewMode::List {
        return GridShape::Stacked { gap: 4 };
    }

    match layout {
        LayoutType::Grid => GridShape::Columns {
            progression: GRID_PROGRESSION,
            gap: 8,
        },
        LayoutType::Sidebar => GridShape::Columns {
            progression: SIDEBAR_PROGRESSION,
            gap: 6,
        },
        LayoutType::Standard => GridShape::Columns {
            progression: STANDARD_PROGRESSION,
            gap: 6,
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Elevation {
    Subtle,
    Medium,
    Strong,
}

impl Elevation {
    fn classes(self) -> &'static str {
        match self {
            Elevation::Subtle => "shadow-sm hover:shadow-md",
            Elevation::Medium => "shadow-md hover:shadow-lg",
            Elevation::Strong => "shadow-lg hover:shadow-xl",
        }
    }
}

/// Visual weight of a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardAffordance {
    pub elevation: Elevation,
    pub padding: u8,
    /// Large (`2xl`) corner rounding instead of the regular `lg`.
    pub rounded_large: bool,
    pub hover_scale: bool,
    pub bordered: bool,
    /// Horizontal row layout used by the list view.
    pub row: bool,
}

impl CardAffordance {
    pub fn css_classes(&self) -> String {
        let mut classes = vec![
            format!("p-{}", self.padding),
            if self.rounded_large {
                "rounded-2xl".to_string()
            } else {
                "rounded-lg".to_string()
            },
            self.elevation.classes().to_string(),
        ];
        if self.hover_scale {
            classes.push("transform hover:scale-105".to_string());
        }
        if self.bordered {
            classes.push("border".to_string());
        }
        if self.row {
            classes.push("flex flex-col sm:flex-row gap-4".to_string());
        }
        classes.join(" ")
    }
}

pub fn card_affordance(layout: LayoutType, view: ViewMode) -> CardAffordance {
    let subtle = CardAffordance {
        elevation: Elevation::Subtle,
        padding: 4,
        rounded_large: false,
        hover_scale: false,
        bordered: true,
        row: false,
    };

    if view == ViewMode::List {
        return CardAffordance { row: true, ..subtle };
    }

    match layout {
        LayoutType::Grid => CardAffordance {
            elevation: Elevation::Strong,
            padding: 6,
            rounded_large: true,
            hover_scale: true,
            bordered: false,
            row: false,
        },
        LayoutType::Sidebar => CardAffordance {
            elevation: Elevation::Medium,
            bordered: false,
            ..subtle
        },
        LayoutType::Standard => subtle,
    }
}

/// Outer page frame: optional navigation rail and how main content is offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChrome {
    /// Rail width in px, `None` when the layout has no rail.
    pub rail_width_px: Option<u32>,
    /// Breakpoint from which the rail is shown.
    pub rail_visible_from: Breakpoint,
}

impl PageChrome {
    pub fn has_rail(&self) -> bool {
        self.rail_width_px.is_some()
    }

    pub fn rail_visible_at(&self, width_px: u32) -> bool {
        self.has_rail() && self.rail_visible_from.is_active_at(width_px)
    }

    /// Horizontal offset of the main content at `width_px`.
    pub fn main_offset_px(&self, width_px: u32) -> u32 {
        match self.rail_width_px {
            Some(rail) if self.rail_visible_at(width_px) => rail,
            _ => 0,
        }
    }

    pub fn main_classes(&self) -> &'static str {
        if self.has_rail() {
            "flex-1 ml-0 lg:ml-64"
        } else {
            "w-full"
        }
    }

    pub fn frame_classes(&self) -> &'static str {
        if self.has_rail() {
            "flex pt-20"
        } else {
            "pt-20 min-h-screen"
        }
    }
}

pub fn page_chrome(layout: LayoutType) -> PageChrome {
    match layout {
        LayoutType::Sidebar => PageChrome {
            rail_width_px: Some(SIDEBAR_RAIL_WIDTH_PX),
            rail_visible_from: Breakpoint::Lg,
        },
        LayoutType::Standard | LayoutType::Grid => PageChrome {
            rail_width_px: None,
            rail_visible_from: Breakpoint::Base,
        },
    }
}

pub fn section_heading(layout: LayoutType) -> &'static str {
    match layout {
        LayoutType::Grid => "text-4xl",
        LayoutType::Standard | LayoutType::Sidebar => "text-3xl",
    }
}

/// Feature tile grid on the about page.
pub fn feature_grid(layout: LayoutType) -> GridShape {
    const WIDE: &[(Breakpoint, u8)] = &[(Breakpoint::Base, 1), (Breakpoint::Md, 2)];
    const DENSE: &[(Breakpoint, u8)] = &[
        (Breakpoint::Base, 1),
        (Breakpoint::Md, 2),
        (Breakpoint::Lg, 4),
    ];

    match layout {
        LayoutType::Grid => GridShape::Columns {
            progression: WIDE,
            gap: 8,
        },
        LayoutType::Standard | LayoutType::Sidebar => GridShape::Columns {
            progression: DENSE,
            gap: 6,
        },
    }
}

/// Opacity (percent) of the main area.
pub fn transition_opacity(is_transitioning: bool) -> u8 {
    if is_transitioning { 75 } else { 100 }
}
