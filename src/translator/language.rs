//! Language type: a code with an optional display name.
//!
//! Languages are plain values. Two languages are the same language when their
//! codes match; the display name is informational only.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A language identified by its code (e.g. "en", "ru", "zh-TW").
///
/// Equality, hashing and ordering only look at the code, so two separately
/// constructed values with the same code always denote the same language,
/// whatever name each one carries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Language {
    /// Language code as reported by the provider
    code: String,

    /// Human readable name, empty when the provider did not supply one
    #[serde(default)]
    name: String,
}

impl Language {
    /// Create a language from a code and a display name.
    ///
    /// # Example
    /// ```
    /// use translate_hub::Language;
    ///
    /// let russian = Language::new("ru", "Russian");
    /// assert_eq!(russian.code(), "ru");
    /// ```
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Create a language that only carries a code.
    pub fn from_code(code: impl Into<String>) -> Self {
        Self::new(code, String::new())
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True for the unset/unknown language (zero-length code).
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}

impl PartialEq for Language {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Language {}

impl Hash for Language {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl PartialOrd for Language {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Language {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code.cmp(&other.code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl From<&str> for Language {
    fn from(code: &str) -> Self {
        Self::from_code(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // ==================== Construction Tests ====================

    #[test]
    fn test_new_keeps_code_and_name() {
        let lang = Language::new("ru", "Russian");
        assert_eq!(lang.code(), "ru");
        assert_eq!(lang.name(), "Russian");
    }

    #[test]
    fn test_from_code_has_no_name() {
        let lang = Language::from_code("en");
        assert_eq!(lang.code(), "en");
        assert!(lang.name().is_empty());
    }

    #[test]
    fn test_from_str_slice() {
        let lang: Language = "fr".into();
        assert_eq!(lang.code(), "fr");
    }

    // ==================== Empty Tests ====================

    #[test]
    fn test_default_is_empty() {
        assert!(Language::default().is_empty());
    }

    #[test]
    fn test_code_is_not_empty() {
        assert!(!Language::from_code("en").is_empty());
    }

    #[test]
    fn test_name_without_code_is_empty() {
        assert!(Language::new("", "Unknown").is_empty());
    }

    // ==================== Equality Tests ====================

    #[test]
    fn test_equal_codes_different_names_are_equal() {
        let a = Language::new("en", "English");
        let b = Language::new("en", "Anglais");
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_codes_are_not_equal() {
        assert_ne!(Language::new("en", "English"), Language::new("es", "English"));
    }

    #[test]
    fn test_code_comparison_is_byte_exact() {
        assert_ne!(Language::from_code("en"), Language::from_code("EN"));
    }

    #[test]
    fn test_hash_follows_code() {
        let mut set = HashSet::new();
        set.insert(Language::new("en", "English"));
        set.insert(Language::new("en", "Inglés"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_ordering_by_code() {
        let mut langs = vec![
            Language::new("ru", "Russian"),
            Language::new("de", "German"),
            Language::new("en", "English"),
        ];
        langs.sort();
        let codes: Vec<_> = langs.iter().map(Language::code).collect();
        assert_eq!(codes, vec!["de", "en", "ru"]);
    }

    // ==================== Formatting Tests ====================

    #[test]
    fn test_display_renders_code() {
        assert_eq!(Language::new("ru", "Russian").to_string(), "ru");
    }

    #[test]
    fn test_debug_contains_name() {
        let debug = format!("{:?}", Language::new("ru", "Russian"));
        assert!(debug.contains("Russian"));
    }

    // ==================== Serde Tests ====================

    #[test]
    fn test_deserialize_without_name() {
        let lang: Language = serde_json::from_str(r#"{"code":"ja"}"#).expect("Should deserialize");
        assert_eq!(lang.code(), "ja");
        assert!(lang.name().is_empty());
    }
}
