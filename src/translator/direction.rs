//! Translation direction: an ordered source→target pair.

use crate::translator::Language;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Separator used in the textual form of a direction ("en-ru").
pub const DIRECTION_SEPARATOR: char = '-';

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectionParseError {
    #[error("empty translation direction")]
    Empty,

    #[error("translation direction {0:?} has no target language")]
    MissingTarget(String),

    #[error("translation direction {0:?} has more than two languages")]
    TooManyParts(String),
}

/// Source and target of a translation.
///
/// An empty `from` means the provider should detect the source language.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Direction {
    pub from: Language,
    pub to: Language,
}

impl Direction {
    pub fn new(from: Language, to: Language) -> Self {
        Self { from, to }
    }

    /// Direction with an unset source language.
    pub fn to(target: Language) -> Self {
        Self::new(Language::default(), target)
    }

    /// True when the source language is left for the provider to detect.
    pub fn detects_source(&self) -> bool {
        self.from.is_empty()
    }
}

/// Renders "from-to", or just "to" when the source is detected.
///
/// A target code that contains the separator does not parse back to the same
/// direction ("en-zh-TW" reads as "en-zh" → "TW"); a hyphenated source does.
impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.detects_source() {
            write!(f, "{}", self.to)
        } else {
            write!(f, "{}{}{}", self.from, DIRECTION_SEPARATOR, self.to)
        }
    }
}

impl FromStr for Direction {
    type Err = DirectionParseError;

    /// Parse "en-ru" (explicit source) or "ru" (detect source).
    ///
    /// With three parts the last separator splits source from target, so a
    /// hyphenated source code is accepted: "zh-TW-en" is "zh-TW" → "en".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DirectionParseError::Empty);
        }

        let parts: Vec<&str> = s.split(DIRECTION_SEPARATOR).map(str::trim).collect();
        match parts.as_slice() {
            [to] => Ok(Self::to(Language::from_code(*to))),
            [.., to] if to.is_empty() => Err(DirectionParseError::MissingTarget(s.to_string())),
            [from, to] => Ok(Self::new(Language::from_code(*from), Language::from_code(*to))),
            [_, _, _] => {
                let (from, to) = s
                    .rsplit_once(DIRECTION_SEPARATOR)
                    .ok_or_else(|| DirectionParseError::TooManyParts(s.to_string()))?;
                Ok(Self::new(
                    Language::from_code(from.trim()),
                    Language::from_code(to.trim()),
                ))
            }
            _ => Err(DirectionParseError::TooManyParts(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Parsing Tests ====================

    #[test]
    fn test_parse_pair() {
        let dir: Direction = "en-ru".parse().expect("Should parse");
        assert_eq!(dir.from.code(), "en");
        assert_eq!(dir.to.code(), "ru");
        assert!(!dir.detects_source());
    }

    #[test]
    fn test_parse_target_only() {
        let dir: Direction = "ru".parse().expect("Should parse");
        assert!(dir.from.is_empty());
        assert_eq!(dir.to.code(), "ru");
        assert!(dir.detects_source());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let dir: Direction = " en - fr ".parse().expect("Should parse");
        assert_eq!(dir, Direction::new("en".into(), "fr".into()));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!("".parse::<Direction>(), Err(DirectionParseError::Empty));
        assert_eq!("   ".parse::<Direction>(), Err(DirectionParseError::Empty));
    }

    #[test]
    fn test_parse_missing_target() {
        let err = "en-".parse::<Direction>().unwrap_err();
        assert!(matches!(err, DirectionParseError::MissingTarget(_)));
    }

    #[test]
    fn test_parse_too_many_parts() {
        let err = "en-ru-fr-de".parse::<Direction>().unwrap_err();
        assert!(matches!(err, DirectionParseError::TooManyParts(_)));
        assert!(err.to_string().contains("en-ru-fr-de"));
    }

    #[test]
    fn test_parse_hyphenated_source() {
        let dir: Direction = "zh-TW-en".parse().expect("Should parse");
        assert_eq!(dir.from.code(), "zh-TW");
        assert_eq!(dir.to.code(), "en");
    }

    #[test]
    fn test_parse_hyphenated_source_missing_target() {
        let err = "zh-TW-".parse::<Direction>().unwrap_err();
        assert!(matches!(err, DirectionParseError::MissingTarget(_)));
    }

    #[test]
    fn test_leading_separator_detects_source() {
        let dir: Direction = "-ru".parse().expect("Should parse");
        assert!(dir.detects_source());
    }

    // ==================== Display Tests ====================

    #[test]
    fn test_display_pair() {
        let dir = Direction::new(Language::new("en", "English"), Language::new("ru", "Russian"));
        assert_eq!(dir.to_string(), "en-ru");
    }

    #[test]
    fn test_display_target_only() {
        assert_eq!(Direction::to("de".into()).to_string(), "de");
    }

    #[test]
    fn test_display_parse_agree() {
        for text in ["en-ru", "ru", "pt-es", "zh-TW-en"] {
            let dir: Direction = text.parse().expect("Should parse");
            assert_eq!(dir.to_string(), text);
        }
    }

    #[test]
    fn test_display_hyphenated_source_round_trips() {
        let dir = Direction::new("zh-TW".into(), "en".into());
        let parsed: Direction = dir.to_string().parse().expect("Should parse");
        assert_eq!(parsed, dir);
    }
}
