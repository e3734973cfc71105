use crate::dictionary::{DEFAULT_LANGUAGE, DictionaryChecker};
use crate::{debug_log, info_log};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

/// Root word used when the start-word list is empty.
pub const DEFAULT_ROOT_WORD: &str = "silkwarm";

/// State of one round: the root word and everything accepted so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    root_word: String,
    used_words: Vec<String>,
    score: u64,
}

impl Session {
    fn new(root_word: String) -> Self {
        Self {
            root_word,
            used_words: Vec::new(),
            score: 0,
        }
    }

    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first.
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    pub fn score(&self) -> u64 {
        self.score
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Empty,
    AlreadyUsed,
    NotASubset,
    NotARealWord,
}

impl RejectReason {
    pub fn title(self) -> &'static str {
        match self {
            Self::Empty => "Empty word",
            Self::AlreadyUsed => "Word used already",
            Self::NotASubset => "Word not recognized",
            Self::NotARealWord => "Word does not exist!",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Empty => "Type a word first.",
            Self::AlreadyUsed => "Be more original!",
            Self::NotASubset => "You can't guess them up.",
            Self::NotARealWord => "Try with a real one.",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    Accepted { points: u64 },
    Rejected(RejectReason),
}

/// Lowercase and trim a raw guess.
pub fn normalize_guess(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// Whether every letter of `word` can be taken from a distinct letter of `root`.
pub fn is_possible(word: &str, root: &str) -> bool {
    let mut remaining: Vec<char> = root.chars().collect();
    for letter in word.chars() {
        match remaining.iter().position(|&c| c == letter) {
            Some(pos) => {
                remaining.swap_remove(pos);
            }
            None => return false,
        }
    }
    true
}

/// Points for an accepted word: two to the power of its length.
pub fn points_for(word: &str) -> u64 {
    let len = u32::try_from(word.chars().count()).unwrap_or(u32::MAX);
    2u64.saturating_pow(len)
}

/// The word game: validates guesses against the current root word and keeps score.
#[derive(Debug)]
pub struct WordGame<D> {
    dictionary: D,
    session: Session,
}

impl<D: DictionaryChecker> WordGame<D> {
    pub fn new(dictionary: D) -> Self {
        Self {
            dictionary,
            session: Session::default(),
        }
    }

    /// Pick a random root word and reset the session.
    pub fn start_game(&mut self, words: &[String]) -> &str {
        self.start_game_with_rng(words, &mut rand::rng())
    }

    pub fn start_game_with_rng<R: Rng + ?Sized>(&mut self, words: &[String], rng: &mut R) -> &str {
        let root = words
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| DEFAULT_ROOT_WORD.to_string());
        info_log!("Starting game with root word '{}' ({} candidates)", root, words.len());
        self.session = Session::new(root);
        &self.session.root_word
    }

    pub fn submit_guess(&mut self, raw: &str) -> GuessResult {
        let word = normalize_guess(raw);
        let result = self.evaluate(&word);
        match result {
            GuessResult::Accepted { points } => {
                self.session.score = self.session.score.saturating_add(points);
                self.session.used_words.insert(0, word);
                info_log!(
                    "Accepted '{}' for {} points, score {}",
                    self.session.used_words[0],
                    points,
                    self.session.score
                );
            }
            GuessResult::Rejected(reason) => {
                debug_log!("Rejected '{}': {:?}", word, reason);
            }
        }
        result
    }

    fn evaluate(&self, word: &str) -> GuessResult {
        if word.is_empty() {
            return GuessResult::Rejected(RejectReason::Empty);
        }
        if self.session.used_words.iter().any(|w| w == word) {
            return GuessResult::Rejected(RejectReason::AlreadyUsed);
        }
        if !is_possible(word, &self.session.root_word) {
            return GuessResult::Rejected(RejectReason::NotASubset);
        }
        if !self.dictionary.is_valid(word, DEFAULT_LANGUAGE) {
            return GuessResult::Rejected(RejectReason::NotARealWord);
        }
        GuessResult::Accepted {
            points: points_for(word),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn root_word(&self) -> &str {
        self.session.root_word()
    }

    pub fn used_words(&self) -> &[String] {
        self.session.used_words()
    }

    pub fn score(&self) -> u64 {
        self.session.score()
    }
}
