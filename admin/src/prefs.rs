//! Language preference backed by browser storage
//!
//! The storage itself is environment-provided (localStorage in the browser);
//! the core only defines the key, the codes, and the fallback.

use shared::types::Language;

/// Storage key for the interface language code
pub const LANGUAGE_KEY: &str = "budayaku.language";

/// Key-value storage supplied by the environment
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Language preference getter/setter over a [`PreferenceStore`]
#[derive(Debug, Clone)]
pub struct LanguagePreference<S: PreferenceStore> {
    store: S,
}

impl<S: PreferenceStore> LanguagePreference<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current language; unknown or missing codes fall back to Indonesian
    pub fn language(&self) -> Language {
        self.store
            .get(LANGUAGE_KEY)
            .and_then(|code| Language::from_code(&code))
            .unwrap_or_default()
    }

    pub fn set_language(&mut self, language: Language) {
        self.store.set(LANGUAGE_KEY, language.code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(HashMap<String, String>);

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) {
            self.0.insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn test_defaults_to_indonesian() {
        let prefs = LanguagePreference::new(MemoryStore::default());
        assert_eq!(prefs.language(), Language::Indonesian);
    }

    #[test]
    fn test_set_and_get() {
        let mut prefs = LanguagePreference::new(MemoryStore::default());
        prefs.set_language(Language::English);
        assert_eq!(prefs.language(), Language::English);
    }

    #[test]
    fn test_garbage_code_falls_back() {
        let mut store = MemoryStore::default();
        store.set(LANGUAGE_KEY, "xx");
        let prefs = LanguagePreference::new(store);
        assert_eq!(prefs.language(), Language::Indonesian);
    }
}
