//! Real-word validation.
//!
//! The game only needs a yes/no answer for a word in a language, so the
//! checker is a trait and the bundled implementation is a plain word set.

use crate::error::LoadError;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const DEFAULT_LANGUAGE: &str = "en";

pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/dictionary.txt");

/// Answers whether a string is a real word in `language`.
pub trait DictionaryChecker {
    fn is_valid(&self, word: &str, language: &str) -> bool;
}

impl<T: DictionaryChecker + ?Sized> DictionaryChecker for &T {
    fn is_valid(&self, word: &str, language: &str) -> bool {
        (**self).is_valid(word, language)
    }
}

impl<T: DictionaryChecker + ?Sized> DictionaryChecker for Box<T> {
    fn is_valid(&self, word: &str, language: &str) -> bool {
        (**self).is_valid(word, language)
    }
}

/// Dictionary backed by an in-memory set of lowercase words for one language.
#[derive(Debug, Clone)]
pub struct WordSetDictionary {
    language: String,
    words: HashSet<String>,
}

impl WordSetDictionary {
    /// Build from newline-delimited words. Blank lines are skipped.
    pub fn from_words(language: &str, data: &str) -> Self {
        let words = data
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self {
            language: language.to_lowercase(),
            words,
        }
    }

    /// The English word list compiled into the binary.
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(DEFAULT_LANGUAGE, EMBEDDED_DICTIONARY)
    }

    pub fn from_file<P: AsRef<Path>>(language: &str, path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        let dictionary = Self::from_words(language, &data);
        if dictionary.is_empty() {
            return Err(LoadError::Empty {
                source_name: format!("dictionary '{}'", path.display()),
            });
        }
        Ok(dictionary)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl DictionaryChecker for WordSetDictionary {
    fn is_valid(&self, word: &str, language: &str) -> bool {
        if !language.eq_ignore_ascii_case(&self.language) {
            return false;
        }
        let word = word.trim().to_lowercase();
        !word.is_empty() && self.words.contains(&word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let dict = WordSetDictionary::from_words("en", "silk\nWorm\n");
        assert!(dict.is_valid("silk", "en"));
        assert!(dict.is_valid("SILK", "en"));
        assert!(dict.is_valid("worm", "EN"));
        assert!(!dict.is_valid("milk", "en"));
    }

    #[test]
    fn test_other_language_is_rejected() {
        let dict = WordSetDictionary::from_words("en", "silk\n");
        assert!(!dict.is_valid("silk", "fi"));
    }

    #[test]
    fn test_empty_word_is_never_valid() {
        let dict = WordSetDictionary::from_words("en", "\n\nsilk\n");
        assert_eq!(dict.len(), 1);
        assert!(!dict.is_valid("", "en"));
        assert!(!dict.is_valid("   ", "en"));
    }

    #[test]
    fn test_embedded_dictionary_knows_common_words() {
        let dict = WordSetDictionary::embedded();
        assert_eq!(dict.language(), "en");
        for word in ["silk", "worm", "milk", "work", "silkworm"] {
            assert!(dict.is_valid(word, DEFAULT_LANGUAGE), "missing '{word}'");
        }
        assert!(!dict.is_valid("kliswm", DEFAULT_LANGUAGE));
    }

    #[test]
    fn test_checker_through_reference_and_box() {
        let dict = WordSetDictionary::from_words("en", "silk\n");
        let by_ref: &dyn DictionaryChecker = &dict;
        assert!(by_ref.is_valid("silk", "en"));
        let boxed: Box<dyn DictionaryChecker> = Box::new(dict);
        assert!(boxed.is_valid("silk", "en"));
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join("word_scramble_dictionary_unit.txt");
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "apple").unwrap();
            writeln!(file, "pear").unwrap();
        }
        let dict = WordSetDictionary::from_file("en", &path).unwrap();
        assert_eq!(dict.len(), 2);
        assert!(dict.is_valid("pear", "en"));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_from_empty_file_is_an_error() {
        let path = std::env::temp_dir().join("word_scramble_dictionary_empty.txt");
        fs::File::create(&path).unwrap();
        let result = WordSetDictionary::from_file("en", &path);
        assert!(matches!(result, Err(LoadError::Empty { .. })));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_from_missing_file() {
        let result = WordSetDictionary::from_file("en", "/definitely/not/here/words.txt");
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }
}
