#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// How one page encodes its theme in storage and on `<body>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeScheme {
    pub storage_key: &'static str,
    pub light_value: &'static str,
    pub dark_value: &'static str,
    pub light_class: Option<&'static str>,
    pub dark_class: Option<&'static str>,
    pub follow_system: bool,
}

pub const PORTFOLIO_SCHEME: ThemeScheme = ThemeScheme {
    storage_key: "theme",
    light_value: "light",
    dark_value: "dark",
    light_class: Some("light-mode"),
    dark_class: None,
    follow_system: false,
};

// Both pages share one origin, so the landing page keeps its own key.
pub const LANDING_SCHEME: ThemeScheme = ThemeScheme {
    storage_key: "landing-theme",
    light_value: "theme-light",
    dark_value: "theme-dark",
    light_class: Some("theme-light"),
    dark_class: Some("theme-dark"),
    follow_system: true,
};

impl ThemeScheme {
    pub fn parse(&self, stored: &str) -> Option<Theme> {
        match stored.trim() {
            value if value == self.light_value => Some(Theme::Light),
            value if value == self.dark_value => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn encode(&self, theme: Theme) -> &'static str {
        match theme {
            Theme::Light => self.light_value,
            Theme::Dark => self.dark_value,
        }
    }

    pub fn class_for(&self, theme: Theme) -> Option<&'static str> {
        match theme {
            Theme::Light => self.light_class,
            Theme::Dark => self.dark_class,
        }
    }

    pub fn initial(&self, stored: Option<&str>, prefers_dark: bool) -> Theme {
        if let Some(theme) = stored.and_then(|value| self.parse(value)) {
            return theme;
        }
        if self.follow_system && !prefers_dark {
            return Theme::Light;
        }
        Theme::Dark
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeState {
    pub scheme: ThemeScheme,
    pub current: Theme,
}

impl ThemeState {
    pub fn new(scheme: ThemeScheme, current: Theme) -> Self {
        Self { scheme, current }
    }

    /// Flips the theme and returns the literal to persist.
    pub fn toggle(&mut self) -> &'static str {
        self.current = self.current.toggled();
        self.scheme.encode(self.current)
    }

    pub fn body_class(&self) -> Option<&'static str> {
        self.scheme.class_for(self.current)
    }

    /// Every theme class either page puts on `<body>`, paired with whether it
    /// should be present for this state.
    pub fn body_classes(&self) -> Vec<(&'static str, bool)> {
        let wanted = self.body_class();
        let mut classes: Vec<(&'static str, bool)> = Vec::new();
        for scheme in [PORTFOLIO_SCHEME, LANDING_SCHEME] {
            for theme in [Theme::Light, Theme::Dark] {
                if let Some(class) = scheme.class_for(theme) {
                    if classes.iter().all(|(known, _)| *known != class) {
                        classes.push((class, Some(class) == wanted));
                    }
                }
            }
        }
        classes
    }

    pub fn aria_pressed(&self) -> &'static str {
        if self.current.is_dark() {
            "true"
        } else {
            "false"
        }
    }
}

pub fn load_theme(scheme: ThemeScheme) -> ThemeState {
    let stored = read_stored(scheme.storage_key);
    let prefers_dark = scheme.follow_system && system_prefers_dark();
    let current = scheme.initial(stored.as_deref(), prefers_dark);
    tracing::debug!("theme: {} -> {:?}", scheme.storage_key, current);
    ThemeState::new(scheme, current)
}

pub fn toggle_theme(state: &mut ThemeState) {
    let value = state.toggle();
    write_stored(state.scheme.storage_key, value);
    apply_body_class(state);
}

#[cfg(target_arch = "wasm32")]
fn read_stored(key: &str) -> Option<String> {
    use gloo_storage::{LocalStorage, Storage};
    LocalStorage::raw().get_item(key).ok().flatten()
}

#[cfg(not(target_arch = "wasm32"))]
fn read_stored(_key: &str) -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn write_stored(key: &str, value: &str) {
    use gloo_storage::{LocalStorage, Storage};
    let _ = LocalStorage::raw().set_item(key, value);
}

#[cfg(not(target_arch = "wasm32"))]
fn write_stored(_key: &str, _value: &str) {}

#[cfg(target_arch = "wasm32")]
fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
fn system_prefers_dark() -> bool {
    false
}

pub fn apply_body_class(state: &ThemeState) {
    set_body_classes(&state.body_classes());
}

#[cfg(target_arch = "wasm32")]
fn set_body_classes(classes: &[(&str, bool)]) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let list = body.class_list();
    for &(class, on) in classes {
        let _ = list.toggle_with_force(class, on);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn set_body_classes(_classes: &[(&str, bool)]) {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn portfolio_defaults_to_dark_without_storage() {
        assert_eq!(PORTFOLIO_SCHEME.initial(None, false), Theme::Dark);
        assert_eq!(PORTFOLIO_SCHEME.initial(None, true), Theme::Dark);
        assert_eq!(PORTFOLIO_SCHEME.initial(Some("light"), false), Theme::Light);
    }

    #[test]
    fn landing_follows_system_when_nothing_stored() {
        assert_eq!(LANDING_SCHEME.initial(None, true), Theme::Dark);
        assert_eq!(LANDING_SCHEME.initial(None, false), Theme::Light);
        assert_eq!(LANDING_SCHEME.initial(Some("theme-dark"), false), Theme::Dark);
        assert_eq!(LANDING_SCHEME.initial(Some("garbage"), false), Theme::Light);
    }

    #[test]
    fn class_always_matches_last_stored_value() {
        let mut state = ThemeState::new(PORTFOLIO_SCHEME, Theme::Dark);
        let mut stored = None;
        for _ in 0..5 {
            stored = Some(state.toggle());
            let reloaded = PORTFOLIO_SCHEME.initial(stored, false);
            assert_eq!(reloaded, state.current);
            assert_eq!(
                state.body_class(),
                PORTFOLIO_SCHEME.class_for(reloaded)
            );
        }
        assert_eq!(stored, Some("light"));
        assert_eq!(state.body_class(), Some("light-mode"));
    }

    #[test]
    fn landing_toggle_reports_pressed_state() {
        let mut state = ThemeState::new(LANDING_SCHEME, Theme::Light);
        assert_eq!(state.aria_pressed(), "false");
        assert_eq!(state.toggle(), "theme-dark");
        assert_eq!(state.aria_pressed(), "true");
        assert_eq!(state.body_class(), Some("theme-dark"));
    }

    #[test]
    fn switching_pages_clears_the_other_page_classes() {
        let landing = ThemeState::new(LANDING_SCHEME, Theme::Dark);
        assert_eq!(
            landing.body_classes(),
            vec![("light-mode", false), ("theme-light", false), ("theme-dark", true)]
        );

        let portfolio = ThemeState::new(PORTFOLIO_SCHEME, Theme::Light);
        assert_eq!(
            portfolio.body_classes(),
            vec![("light-mode", true), ("theme-light", false), ("theme-dark", false)]
        );
    }
}
