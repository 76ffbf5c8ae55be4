use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the two languages in the phrase table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Tshangla,
    English,
}

impl Language {
    /// The other side of the translation pair
    pub fn opposite(self) -> Self {
        match self {
            Language::Tshangla => Language::English,
            Language::English => Language::Tshangla,
        }
    }

    /// Column name in the phrase table / prefix of the audio directory
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Tshangla => "Tshangla",
            Language::English => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller passed a language name that is not one of the two table columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLanguageError(pub String);

impl fmt::Display for ParseLanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language: {:?} (expected Tshangla or English)", self.0)
    }
}

impl std::error::Error for ParseLanguageError {}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tshangla" => Ok(Language::Tshangla),
            "english" => Ok(Language::English),
            _ => Err(ParseLanguageError(s.to_string())),
        }
    }
}

/// A translation accepted by the resolver, as stored in session history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTranslation {
    pub source_language: Language,
    pub target_language: Language,
    pub source_text: String,
    pub target_text: String,
    /// Row ID, links the pair to its audio clips in both directories
    pub match_id: String,
    /// Similarity score of the accepted candidate, 0-100
    pub confidence: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involutive() {
        assert_eq!(Language::Tshangla.opposite(), Language::English);
        assert_eq!(Language::English.opposite(), Language::Tshangla);
        assert_eq!(Language::Tshangla.opposite().opposite(), Language::Tshangla);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("tshangla".parse::<Language>().unwrap(), Language::Tshangla);
        assert_eq!("English".parse::<Language>().unwrap(), Language::English);
        assert_eq!(" ENGLISH ".parse::<Language>().unwrap(), Language::English);
    }

    #[test]
    fn rejects_unknown_language() {
        let err = "Dzongkha".parse::<Language>().unwrap_err();
        assert_eq!(err, ParseLanguageError("Dzongkha".to_string()));
    }
}
