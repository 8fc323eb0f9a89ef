//! Language codes and localized text.
//!
//! The storefront ships with a closed set of languages. Localized strings are
//! carried next to the data they describe; the presentation layer picks the
//! text for the active language.

use core::str::FromStr;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Supported storefront language.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (default and fallback).
    #[default]
    En,
    /// Hindi.
    Hi,
    /// Kannada.
    Kn,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Kn => "kn",
        }
    }
}

impl core::fmt::Display for Language {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "hi" => Ok(Language::Hi),
            "kn" => Ok(Language::Kn),
            other => Err(DomainError::validation(format!(
                "unknown language code: {other}"
            ))),
        }
    }
}

/// Text keyed by language.
///
/// Lookup falls back to English, then to any present entry, so a partially
/// translated catalog still renders.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<Language, String>);

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// English-only text (the demo seed is mostly English).
    pub fn of(en: impl Into<String>) -> Self {
        Self::new().with(Language::En, en)
    }

    pub fn with(mut self, language: Language, text: impl Into<String>) -> Self {
        self.0.insert(language, text.into());
        self
    }

    pub fn insert(&mut self, language: Language, text: impl Into<String>) {
        self.0.insert(language, text.into());
    }

    /// Text for `language`, falling back to English, then any entry.
    pub fn get(&self, language: Language) -> &str {
        self.0
            .get(&language)
            .or_else(|| self.0.get(&Language::En))
            .or_else(|| self.0.values().next())
            .map_or("", String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_round_trips_through_str() {
        for lang in [Language::En, Language::Hi, Language::Kn] {
            assert_eq!(lang.as_str().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn unknown_language_code_is_rejected() {
        let err = "fr".parse::<Language>().unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("fr")),
            _ => panic!("expected Validation error"),
        }
    }

    #[test]
    fn language_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Language::Kn).unwrap(), "\"kn\"");
    }

    #[test]
    fn lookup_prefers_exact_language() {
        let text = LocalizedText::of("clay pot").with(Language::Hi, "मिट्टी का बर्तन");
        assert_eq!(text.get(Language::Hi), "मिट्टी का बर्तन");
        assert_eq!(text.get(Language::En), "clay pot");
    }

    #[test]
    fn lookup_falls_back_to_english() {
        let text = LocalizedText::of("clay pot");
        assert_eq!(text.get(Language::Kn), "clay pot");
    }

    #[test]
    fn lookup_falls_back_to_any_entry_without_english() {
        let text = LocalizedText::new().with(Language::Kn, "ಮಣ್ಣಿನ ಮಡಕೆ");
        assert_eq!(text.get(Language::Hi), "ಮಣ್ಣಿನ ಮಡಕೆ");
    }

    #[test]
    fn empty_text_yields_empty_str() {
        assert_eq!(LocalizedText::new().get(Language::En), "");
    }

    #[test]
    fn deserializes_from_language_keyed_map() {
        let text: LocalizedText =
            serde_json::from_str(r#"{"en":"woven basket","hi":"बुनी हुई टोकरी"}"#).unwrap();
        assert_eq!(text.get(Language::En), "woven basket");
        assert_eq!(text.get(Language::Hi), "बुनी हुई टोकरी");
    }
}
