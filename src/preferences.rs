//! Display preferences read by the widget consumer.
//!
//! Settings may live in two stores: the current one, and a legacy store left
//! behind by an older app version. Lookups try the current store, then the
//! legacy store, then fall back to a default. Nothing is written back.

use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{PreferenceError, prelude::*};

/// Key of the language code in the current store.
pub const LANGUAGE_KEY: &str = "language";
/// Key of the dark-mode flag in the current store.
pub const DARK_MODE_KEY: &str = "darkMode";
/// Key of the language code in the legacy store.
pub const LEGACY_LANGUAGE_KEY: &str = "@onemoondate:language";
/// Key of the theme name in the legacy store.
pub const LEGACY_DARK_MODE_KEY: &str = "@onemoondate:darkMode";

/// Language the widget labels are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[display(fmt = "ko")]
    #[serde(rename = "ko")]
    Korean,
    #[display(fmt = "en")]
    #[serde(rename = "en")]
    English,
    #[display(fmt = "ja")]
    #[serde(rename = "ja")]
    Japanese,
}

impl Language {
    pub const ALL: [Self; 3] = [Self::Korean, Self::English, Self::Japanese];

    pub const fn code(self) -> &'static str {
        match self {
            Self::Korean => "ko",
            Self::English => "en",
            Self::Japanese => "ja",
        }
    }
}

impl FromStr for Language {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|language| language.code() == s)
            .ok_or_else(|| PreferenceError::UnknownLanguage(s.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    #[display(fmt = "light")]
    Light,
    #[display(fmt = "dark")]
    Dark,
}

impl Theme {
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Reads the legacy store's value, where anything but `"dark"` meant
    /// light mode.
    pub fn from_legacy(value: &str) -> Self {
        if value == "dark" { Self::Dark } else { Self::Light }
    }
}

impl From<bool> for Theme {
    fn from(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }
}

/// Accepts the current store's boolean flag as well as theme names.
impl FromStr for Theme {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "true" | "dark" => Ok(Self::Dark),
            "false" | "light" => Ok(Self::Light),
            _ => Err(PreferenceError::UnknownTheme(s.to_owned())),
        }
    }
}

/// Read-only key/value settings store.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
}

impl PreferenceStore for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl PreferenceStore for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// A store with nothing in it, for hosts without a legacy store.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyStore;

impl PreferenceStore for EmptyStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Resolved settings for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub language: Language,
    pub theme:    Theme,
}

/// Looks each setting up in the current store, then the legacy store, then
/// takes the default.
#[derive(Debug, Clone)]
pub struct PreferenceResolver<P, L = EmptyStore> {
    primary: P,
    legacy:  L,
}

impl<P: PreferenceStore> PreferenceResolver<P> {
    pub const fn new(primary: P) -> Self {
        Self {
            primary,
            legacy: EmptyStore,
        }
    }
}

impl<P: PreferenceStore, L: PreferenceStore> PreferenceResolver<P, L> {
    pub const fn with_legacy(primary: P, legacy: L) -> Self {
        Self { primary, legacy }
    }

    pub fn language(&self) -> Language {
        parsed(&self.primary, LANGUAGE_KEY)
            .or_else(|| parsed(&self.legacy, LEGACY_LANGUAGE_KEY))
            .unwrap_or_default()
    }

    pub fn theme(&self) -> Theme {
        parsed(&self.primary, DARK_MODE_KEY)
            .or_else(|| {
                self.legacy
                    .get(LEGACY_DARK_MODE_KEY)
                    .map(|value| Theme::from_legacy(&value))
            })
            .unwrap_or_default()
    }

    pub fn resolve(&self) -> Preferences {
        Preferences {
            language: self.language(),
            theme:    self.theme(),
        }
    }
}

fn parsed<T>(store: &impl PreferenceStore, key: &str) -> Option<T>
where
    T: FromStr<Err = PreferenceError>,
{
    let value = store.get(key)?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(error) => {
            tracing::debug!(key, %error, "ignoring stored preference");
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn test_language_codes() {
        for language in Language::ALL {
            assert_eq!(language.code().parse::<Language>(), Ok(language));
            assert_eq!(language.to_string(), language.code());
        }
        assert_eq!(
            "fr".parse::<Language>(),
            Err(PreferenceError::UnknownLanguage("fr".to_owned()))
        );
        assert_eq!(Language::default(), Language::Korean);
    }

    #[test]
    fn test_theme_parsing() {
        assert_eq!("true".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert!("dim".parse::<Theme>().is_err());
        assert_eq!(Theme::from_legacy("dark"), Theme::Dark);
        assert_eq!(Theme::from_legacy("whatever"), Theme::Light);
        assert!(Theme::from(true).is_dark());
    }

    #[test]
    fn test_defaults_when_stores_are_empty() {
        let resolver = PreferenceResolver::new(EmptyStore);
        assert_eq!(
            resolver.resolve(),
            Preferences {
                language: Language::Korean,
                theme:    Theme::Light,
            }
        );
    }

    #[test]
    fn test_primary_wins_over_legacy() {
        let primary = store(&[(LANGUAGE_KEY, "ja"), (DARK_MODE_KEY, "false")]);
        let legacy = store(&[(LEGACY_LANGUAGE_KEY, "en"), (LEGACY_DARK_MODE_KEY, "dark")]);
        let resolver = PreferenceResolver::with_legacy(&primary, &legacy);
        assert_eq!(resolver.language(), Language::Japanese);
        assert_eq!(resolver.theme(), Theme::Light);
    }

    #[test]
    fn test_legacy_fills_missing_or_invalid_values() {
        let primary = store(&[(LANGUAGE_KEY, "klingon")]);
        let legacy = store(&[(LEGACY_LANGUAGE_KEY, "en"), (LEGACY_DARK_MODE_KEY, "dark")]);
        let resolver = PreferenceResolver::with_legacy(primary, legacy);
        assert_eq!(resolver.language(), Language::English);
        assert_eq!(resolver.theme(), Theme::Dark);
    }

    #[test]
    fn test_invalid_everywhere_falls_back_to_default() {
        let primary = store(&[(LANGUAGE_KEY, "")]);
        let legacy = store(&[(LEGACY_LANGUAGE_KEY, "xx")]);
        let resolver = PreferenceResolver::with_legacy(&primary, &legacy);
        assert_eq!(resolver.language(), Language::Korean);

        // resolving does not write anything back
        assert_eq!(primary.get(LANGUAGE_KEY).map(String::as_str), Some(""));
    }

    #[test]
    fn test_serde_codes() {
        let prefs = Preferences {
            language: Language::English,
            theme:    Theme::Dark,
        };
        let json = serde_json::to_string(&prefs).unwrap();
        assert_eq!(json, r#"{"language":"en","theme":"dark"}"#);
        assert_eq!(serde_json::from_str::<Preferences>(&json).unwrap(), prefs);
    }
}
