//! Glow Tour - a terminal walkthrough of the Glow menu bar utility
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod catalog;
pub mod clock;
pub mod header;
pub mod showcase;
pub mod storage;
pub mod theme;
pub mod timeline;
pub mod timer;
pub mod ui;
