//! Application state and message handling.
//!
//! `App` owns the three independent showcase state machines, the header
//! state, and the resolved theme. Input handlers mutate it; the render
//! layer reads it. Async work (the clock task) reports back through the
//! unbounded message channel, consumed by the main `select!` loop.

use std::time::Instant;

use color_eyre::Result;
use tokio::sync::mpsc;

use crate::catalog::{self, Faq, Feature, Release};
use crate::header::HeaderState;
use crate::showcase::ShowcaseState;
use crate::theme::ThemeResolver;
use crate::timeline;

/// Messages received from async tasks.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A fresh formatted wall-clock string from the clock task.
    ClockTick { display: String },
}

/// Which tour screen is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Features,
    Faq,
    Changelog,
}

impl Screen {
    /// Screens in menu order.
    pub const ALL: [Screen; 3] = [Screen::Features, Screen::Faq, Screen::Changelog];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Features => "Features",
            Screen::Faq => "FAQ",
            Screen::Changelog => "Changelog",
        }
    }

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let index = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Main application state.
pub struct App {
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Current screen being displayed
    pub screen: Screen,
    /// Features showcase selection state
    pub features: ShowcaseState<Feature>,
    /// FAQ showcase selection state
    pub faq: ShowcaseState<Faq>,
    /// Changelog showcase selection state, items in chronological order
    pub changelog: ShowcaseState<Release>,
    /// Menu-bar header state (layout mode, icons, clock)
    pub header: HeaderState,
    /// Resolved theme for the current run
    pub is_dark: bool,
    /// Theme service; persists explicit toggles
    theme: ThemeResolver,
    /// Redraw flag, set by anything that changes visible state
    pub needs_redraw: bool,
    /// Tick counter for animations
    pub tick_count: u64,
    /// Receiver for async messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this into spawned tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Terminal dimensions for responsive layout
    pub terminal_width: u16,
    pub terminal_height: u16,
}

impl App {
    /// Create the app, resolving the theme before the first frame so the
    /// user never sees a flash of the wrong palette.
    pub fn new(theme: ThemeResolver) -> Result<Self> {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let is_dark = theme.resolve();

        Ok(Self {
            should_quit: false,
            screen: Screen::default(),
            features: ShowcaseState::new(catalog::FEATURES.clone()),
            faq: ShowcaseState::new(catalog::FAQS.clone()),
            changelog: ShowcaseState::new(catalog::releases_chronological()),
            header: HeaderState::new(),
            is_dark,
            theme,
            needs_redraw: true,
            tick_count: 0,
            message_rx: Some(message_rx),
            message_tx,
            terminal_width: 80,
            terminal_height: 24,
        })
    }

    /// Record the current terminal size for responsive rendering.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance the animation tick and poll all pending showcase commits.
    pub fn tick(&mut self, now: Instant) {
        self.tick_count += 1;
        let committed = self.features.tick(now) | self.faq.tick(now) | self.changelog.tick(now);
        if committed {
            self.mark_dirty();
        }
    }

    /// Handle a message from an async task.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::ClockTick { display } => {
                if self.header.clock_display != display {
                    self.header.clock_display = display;
                    self.mark_dirty();
                }
            }
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn next_screen(&mut self) {
        self.screen = self.screen.next();
        self.mark_dirty();
    }

    pub fn previous_screen(&mut self) {
        self.screen = self.screen.previous();
        self.mark_dirty();
    }

    pub fn go_to_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            self.screen = screen;
            self.mark_dirty();
        }
    }

    /// Move the selection cursor down on the active screen's showcase.
    ///
    /// Each move is an activation request: the cursor highlight follows
    /// instantly while the detail panel commits after the debounce window,
    /// so holding the key skims the list without flicker.
    pub fn select_down(&mut self, now: Instant) {
        match self.screen {
            Screen::Features => self.features.select_next(now),
            Screen::Faq => self.faq.select_next(now),
            Screen::Changelog => self.changelog.select_next(now),
        }
        self.mark_dirty();
    }

    /// Move the selection cursor up on the active screen's showcase.
    pub fn select_up(&mut self, now: Instant) {
        match self.screen {
            Screen::Features => self.features.select_previous(now),
            Screen::Faq => self.faq.select_previous(now),
            Screen::Changelog => self.changelog.select_previous(now),
        }
        self.mark_dirty();
    }

    /// Jump the selection cursor straight to `index` (a click).
    pub fn activate_index(&mut self, index: usize, now: Instant) {
        match self.screen {
            Screen::Features => self.features.request_activation(index, now),
            Screen::Faq => self.faq.request_activation(index, now),
            Screen::Changelog => self.changelog.request_activation(index, now),
        }
        self.mark_dirty();
    }

    // ========================================================================
    // Header controls
    // ========================================================================

    /// Flip dark/light and persist the explicit choice.
    pub fn toggle_theme(&mut self) {
        self.is_dark = !self.is_dark;
        if let Err(err) = self.theme.apply(self.is_dark) {
            tracing::warn!(%err, "failed to persist theme preference");
        }
        self.mark_dirty();
    }

    pub fn cycle_header_layout(&mut self) {
        self.header.cycle_layout();
        self.mark_dirty();
    }

    pub fn toggle_header_icons(&mut self) {
        self.header.toggle_icons();
        self.mark_dirty();
    }

    // ========================================================================
    // Derived read models
    // ========================================================================

    /// Timeline fill percentage for the changelog track.
    pub fn changelog_progress(&self) -> f64 {
        timeline::progress_percent(self.changelog.active_index(), self.changelog.len())
    }
}
