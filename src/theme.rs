//! Process-wide light/dark theme state.
//!
//! Modeled as a single observable value: an atomic current theme plus a
//! subscriber list notified on change. Initialized once from the persisted
//! preference (`BRANDLINK_THEME`) or the light default; no teardown.
//!
//! Renderers read [`current`] for the initial `data-theme` attribute on
//! generated pages; the in-browser toggle is client-side.

use arc_swap::ArcSwap;
use parking_lot::Mutex;
use std::sync::{Arc, LazyLock};

/// Site color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a persisted preference; anything unrecognized is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Value used for the `data-theme` attribute.
    pub const fn as_attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

type Subscriber = Box<dyn Fn(Theme) + Send + Sync>;

struct ThemeState {
    current: ArcSwap<Theme>,
    subscribers: Mutex<Vec<Subscriber>>,
}

static STATE: LazyLock<ThemeState> = LazyLock::new(|| ThemeState {
    current: ArcSwap::from_pointee(Theme::Light),
    subscribers: Mutex::new(Vec::new()),
});

/// Initialize from a persisted preference, falling back to light.
///
/// Subscribers registered before init are notified if the value changes.
pub fn init(persisted: Option<&str>) {
    let theme = persisted.and_then(Theme::parse).unwrap_or_default();
    set(theme);
}

/// Current theme value.
pub fn current() -> Theme {
    **STATE.current.load()
}

/// Replace the theme and notify subscribers on change.
pub fn set(theme: Theme) {
    let previous = *STATE.current.swap(Arc::new(theme));
    if previous == theme {
        return;
    }
    for subscriber in STATE.subscribers.lock().iter() {
        subscriber(theme);
    }
}

/// Register a change subscriber. Subscribers live for the process.
pub fn subscribe(f: impl Fn(Theme) + Send + Sync + 'static) {
    STATE.subscribers.lock().push(Box::new(f));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_parse() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse(" DARK "), Some(Theme::Dark));
        assert_eq!(Theme::parse("solarized"), None);
    }

    // Single test: the theme state is process-global, and parallel test
    // threads would otherwise observe each other's writes.
    #[test]
    fn test_init_set_and_notify() {
        static NOTIFIED: AtomicUsize = AtomicUsize::new(0);

        init(None);
        assert_eq!(current(), Theme::Light);

        init(Some("system")); // unrecognized → default
        assert_eq!(current(), Theme::Light);

        subscribe(|_| {
            NOTIFIED.fetch_add(1, Ordering::SeqCst);
        });

        set(Theme::Dark);
        assert_eq!(current(), Theme::Dark);
        let after_change = NOTIFIED.load(Ordering::SeqCst);
        assert!(after_change >= 1);

        // Same value again: no extra notification
        set(Theme::Dark);
        assert_eq!(NOTIFIED.load(Ordering::SeqCst), after_change);

        init(Some("light"));
        assert_eq!(current(), Theme::Light);
    }
}
