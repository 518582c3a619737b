//! Theme preference resolution and persistence.
//!
//! User intent is a three-valued preference (`system`, `light`, `dark`)
//! kept in a single persisted flag; the resolved theme is the concrete
//! dark/light boolean after consulting the desktop color scheme when the
//! preference is `system`. The store is injected so tests run against an
//! in-memory flag instead of the config directory.

use std::str::FromStr;
use std::sync::Mutex;

use color_eyre::Result;

/// Stored user intent for the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    /// Follow the desktop color scheme.
    #[default]
    System,
    Light,
    Dark,
}

impl ThemePreference {
    /// The flag value persisted for this preference.
    pub fn as_flag(self) -> &'static str {
        match self {
            ThemePreference::System => "system",
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }
}

impl FromStr for ThemePreference {
    type Err = ();

    /// Exact match only; anything else is rejected and the caller falls
    /// back to `system` (fail open to a safe default).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(ThemePreference::System),
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            _ => Err(()),
        }
    }
}

/// Storage boundary for the single theme preference flag.
pub trait PreferenceStore: Send {
    /// Read the persisted flag, `None` when absent or unreadable.
    fn load(&self) -> Option<String>;
    /// Persist the flag.
    fn save(&self, value: &str) -> Result<()>;
}

/// In-memory store for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    value: Mutex<Option<String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: &str) -> Self {
        Self {
            value: Mutex::new(Some(value.to_string())),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Option<String> {
        self.value.lock().unwrap().clone()
    }

    fn save(&self, value: &str) -> Result<()> {
        *self.value.lock().unwrap() = Some(value.to_string());
        Ok(())
    }
}

/// Whether the desktop currently prefers a dark color scheme.
///
/// Defaults to dark when detection fails or is unspecified.
pub fn system_prefers_dark() -> bool {
    !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
}

/// Resolves and persists the theme.
pub struct ThemeResolver {
    store: Box<dyn PreferenceStore>,
    probe: Box<dyn Fn() -> bool + Send>,
}

impl ThemeResolver {
    /// Resolver backed by `store` and the real desktop probe.
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        Self::with_probe(store, system_prefers_dark)
    }

    /// Resolver with a custom system probe (tests).
    pub fn with_probe(
        store: Box<dyn PreferenceStore>,
        probe: impl Fn() -> bool + Send + 'static,
    ) -> Self {
        Self {
            store,
            probe: Box::new(probe),
        }
    }

    /// Resolve the concrete dark/light state.
    ///
    /// A persisted `dark` or `light` wins outright; anything else (absent,
    /// `system`, corrupted) polls the desktop color scheme once.
    pub fn resolve(&self) -> bool {
        let stored = self.store.load();
        let preference = stored
            .as_deref()
            .and_then(|flag| flag.parse::<ThemePreference>().ok())
            .unwrap_or_default();
        let is_dark = match preference {
            ThemePreference::Dark => true,
            ThemePreference::Light => false,
            ThemePreference::System => (self.probe)(),
        };
        tracing::debug!(?stored, is_dark, "resolved theme");
        is_dark
    }

    /// Persist an explicit dark/light choice.
    ///
    /// Always narrows the stored preference to a concrete value; nothing
    /// ever writes `system` back after a manual toggle.
    pub fn apply(&self, is_dark: bool) -> Result<()> {
        let flag = if is_dark {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        };
        self.store.save(flag.as_flag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver_with(store: MemoryPreferenceStore, system_dark: bool) -> ThemeResolver {
        ThemeResolver::with_probe(Box::new(store), move || system_dark)
    }

    #[test]
    fn test_absent_flag_follows_system() {
        assert!(resolver_with(MemoryPreferenceStore::new(), true).resolve());
        assert!(!resolver_with(MemoryPreferenceStore::new(), false).resolve());
    }

    #[test]
    fn test_explicit_flag_overrides_system() {
        let light = MemoryPreferenceStore::with_value("light");
        assert!(!resolver_with(light, true).resolve());

        let dark = MemoryPreferenceStore::with_value("dark");
        assert!(resolver_with(dark, false).resolve());
    }

    #[test]
    fn test_system_flag_polls_probe() {
        let store = MemoryPreferenceStore::with_value("system");
        assert!(resolver_with(store, true).resolve());
    }

    #[test]
    fn test_corrupted_flag_fails_open_to_system() {
        let store = MemoryPreferenceStore::with_value("solarized??");
        assert!(!resolver_with(store, false).resolve());
    }

    #[test]
    fn test_apply_narrows_preference() {
        let store = MemoryPreferenceStore::with_value("system");
        let resolver = resolver_with(store, false);

        resolver.apply(true).unwrap();
        // After a manual toggle the probe no longer matters
        assert!(resolver.resolve());
        assert_eq!(resolver.store.load().as_deref(), Some("dark"));

        resolver.apply(false).unwrap();
        assert_eq!(resolver.store.load().as_deref(), Some("light"));
    }

    #[test]
    fn test_flag_round_trip() {
        for pref in [
            ThemePreference::System,
            ThemePreference::Light,
            ThemePreference::Dark,
        ] {
            assert_eq!(pref.as_flag().parse::<ThemePreference>(), Ok(pref));
        }
        assert!("Dark".parse::<ThemePreference>().is_err());
    }
}
