//! Responsive layout context.
//!
//! Encapsulates terminal dimensions so render functions can make
//! proportional sizing decisions (stacked vs. side-by-side panels, short
//! labels on compact terminals) without reaching into the frame.

/// Terminal size breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Width below which list and detail panels stack vertically
    pub const STACK_WIDTH: u16 = 90;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

/// Layout context holding terminal dimensions for responsive calculations.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Extra small terminal: use the shortest labels available.
    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    /// Compact terminal: tighten paddings and drop decorations.
    pub fn is_compact(&self) -> bool {
        self.width < breakpoints::SM_WIDTH || self.height < breakpoints::SM_HEIGHT
    }

    /// Whether list and detail panels should stack vertically.
    pub fn should_stack_panels(&self) -> bool {
        self.width < breakpoints::STACK_WIDTH
    }

    /// Calculate a width as a percentage of terminal width.
    pub fn percent_width(&self, percent: u16) -> u16 {
        (self.width as u32 * percent as u32 / 100) as u16
    }
}
