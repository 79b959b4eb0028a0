//! Light/dark theme toggle.
//!
//! Presentation glue: the preference is persisted through the same
//! key-value collaborator as the cart, under its own key, and applied
//! as a `data-theme` attribute on the document element.

use leptos::prelude::*;
use shophub_storage::Store;

/// Storage key the theme preference lives under.
pub const THEME_KEY: &str = "theme";

/// Color theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Handle to the theme preference. Same lifecycle as the cart store:
/// defaults until the client is interactive, then adopts the persisted
/// preference.
#[derive(Clone, Copy)]
pub struct ThemeStore {
    theme: RwSignal<Theme>,
    storage: StoredValue<Store>,
}

impl ThemeStore {
    /// Create the store at the composition root and provide it as
    /// context.
    pub fn provide(storage: Store) -> Self {
        let store = Self {
            theme: RwSignal::new(Theme::default()),
            storage: StoredValue::new(storage),
        };
        Effect::new(move |_| {
            match store.storage.with_value(|s| s.get::<String>(THEME_KEY)) {
                Ok(Some(saved)) => {
                    if let Some(theme) = Theme::from_str(&saved) {
                        store.theme.set(theme);
                    }
                }
                Ok(None) => {}
                Err(e) => tracing::warn!("discarding persisted theme: {e}"),
            }
        });
        provide_context(store);
        store
    }

    /// Current theme. Reactive.
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    /// Flip the theme and persist the new preference.
    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);
        if let Err(e) = self.storage.with_value(|s| s.set(THEME_KEY, &next.as_str())) {
            tracing::warn!("failed to persist theme: {e}");
        }
    }
}

/// Button cycling between light and dark.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = expect_context::<ThemeStore>();

    view! {
        <button
            class="theme-toggle"
            title="Toggle theme"
            on:click=move |_| store.toggle()
        >
            {move || match store.theme() {
                Theme::Light => "\u{1f319}",
                Theme::Dark => "\u{2600}\u{fe0f}",
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_round_trip() {
        assert_eq!(Theme::from_str("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_str(Theme::Light.as_str()), Some(Theme::Light));
        assert_eq!(Theme::from_str("solarized"), None);
    }

    #[test]
    fn test_toggled() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
