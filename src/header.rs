//! Menu-bar header state: layout mode cycle, icon visibility, clock text.

/// Presentation mode for the header bar.
///
/// Mirrors the product's own bar styles: borderless, one full-width bar,
/// or two split sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLayout {
    NoShape,
    Full,
    Split,
}

impl Default for HeaderLayout {
    /// The header mounts in split mode.
    fn default() -> Self {
        HeaderLayout::Split
    }
}

impl HeaderLayout {
    /// Fixed cycle order: `no-shape → full → split → no-shape → …`.
    pub const ORDER: [HeaderLayout; 3] =
        [HeaderLayout::NoShape, HeaderLayout::Full, HeaderLayout::Split];

    /// The next mode in the fixed cycle.
    pub fn next(self) -> Self {
        let index = Self::ORDER
            .iter()
            .position(|mode| *mode == self)
            .unwrap_or(0);
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    /// Short label shown next to the cycle toggle.
    pub fn label(self) -> &'static str {
        match self {
            HeaderLayout::NoShape => "no-shape",
            HeaderLayout::Full => "full",
            HeaderLayout::Split => "split",
        }
    }
}

/// In-memory header state; resets on every launch.
#[derive(Debug, Clone)]
pub struct HeaderState {
    /// Current presentation mode.
    pub layout: HeaderLayout,
    /// Whether the status icon cluster is shown.
    pub icons_visible: bool,
    /// Latest formatted clock string, empty until the first tick lands.
    pub clock_display: String,
}

impl HeaderState {
    pub fn new() -> Self {
        Self {
            layout: HeaderLayout::default(),
            icons_visible: true,
            clock_display: String::new(),
        }
    }

    /// Advance the layout mode one step in the fixed cycle.
    pub fn cycle_layout(&mut self) {
        self.layout = self.layout.next();
    }

    /// Hide or reveal the status icon cluster.
    pub fn toggle_icons(&mut self) {
        self.icons_visible = !self.icons_visible;
    }
}
