//! Color palettes for the tour UI.
//!
//! One palette per resolved theme, plus fixed accent colors for badges,
//! release tags, and change kinds (carried over from the product's web
//! styling).

use ratatui::style::Color;

use crate::catalog::{BadgeType, ChangeKind, ReleaseTag};

/// Resolved set of UI colors for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Screen background
    pub bg: Color,
    /// Primary text
    pub text: Color,
    /// Secondary text (descriptions, dates)
    pub text_secondary: Color,
    /// De-emphasized text and track lines
    pub dim: Color,
    /// Panel borders
    pub border: Color,
    /// Selection marker and highlights
    pub accent: Color,
}

impl Palette {
    pub const fn dark() -> Self {
        Self {
            bg: Color::Rgb(18, 18, 22),
            text: Color::Rgb(240, 240, 245),
            text_secondary: Color::Rgb(170, 170, 180),
            dim: Color::Rgb(100, 100, 110),
            border: Color::Rgb(70, 70, 80),
            accent: Color::Rgb(240, 240, 245),
        }
    }

    pub const fn light() -> Self {
        Self {
            bg: Color::Rgb(238, 238, 242),
            text: Color::Rgb(25, 25, 30),
            text_secondary: Color::Rgb(80, 80, 90),
            dim: Color::Rgb(150, 150, 160),
            border: Color::Rgb(175, 175, 185),
            accent: Color::Rgb(25, 25, 30),
        }
    }

    pub fn for_mode(is_dark: bool) -> Self {
        if is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Accent color for a feature badge.
pub fn badge_color(badge: BadgeType) -> Color {
    match badge {
        BadgeType::Core => Color::Rgb(34, 197, 94),
        BadgeType::Flexible => Color::Rgb(59, 130, 246),
        BadgeType::Exclusive => Color::Rgb(168, 85, 247),
        BadgeType::Beta => Color::Rgb(249, 115, 22),
        BadgeType::Smart => Color::Rgb(234, 179, 8),
        BadgeType::Design => Color::Rgb(236, 72, 153),
        BadgeType::Pro => Color::Rgb(20, 184, 166),
        BadgeType::Power => Color::Rgb(239, 68, 68),
    }
}

/// Accent color for a release tag (upcoming blue, beta purple, stable green).
pub fn tag_color(tag: ReleaseTag) -> Color {
    match tag {
        ReleaseTag::Upcoming => Color::Rgb(59, 130, 246),
        ReleaseTag::Beta => Color::Rgb(168, 85, 247),
        ReleaseTag::Stable => Color::Rgb(34, 197, 94),
    }
}

/// Accent color for a change-group heading.
pub fn kind_color(kind: ChangeKind) -> Color {
    match kind {
        ChangeKind::Added => Color::Rgb(34, 197, 94),
        ChangeKind::Feature => Color::Rgb(59, 130, 246),
        ChangeKind::Improved => Color::Rgb(168, 85, 247),
        ChangeKind::Fixed => Color::Rgb(249, 115, 22),
        ChangeKind::Removed => Color::Rgb(239, 68, 68),
        ChangeKind::Security => Color::Rgb(234, 179, 8),
    }
}
