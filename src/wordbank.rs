use crate::error::LoadError;
use crate::info_log;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_START_WORDS: &str = include_str!("resources/start.txt");

fn normalize_entry(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    (!word.is_empty() && word.chars().all(char::is_alphabetic)).then_some(word)
}

pub fn load_word_list_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(normalize_entry).collect()
}

pub fn load_word_list_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LoadError::io(path, e))?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| LoadError::io(path, e))?;
        if let Some(word) = normalize_entry(&line) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Source of candidate root words for a new game.
pub trait WordListProvider {
    /// Human readable name used in logs and error messages.
    fn name(&self) -> String;

    fn load(&self) -> Result<Vec<String>, LoadError>;
}

/// Root words compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedWordList;

impl WordListProvider for EmbeddedWordList {
    fn name(&self) -> String {
        "embedded start words".to_string()
    }

    fn load(&self) -> Result<Vec<String>, LoadError> {
        Ok(load_word_list_from_str(EMBEDDED_START_WORDS))
    }
}

/// Newline-delimited root words read from disk.
#[derive(Debug, Clone)]
pub struct FileWordList {
    path: PathBuf,
}

impl FileWordList {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordListProvider for FileWordList {
    fn name(&self) -> String {
        format!("word list '{}'", self.path.display())
    }

    fn load(&self) -> Result<Vec<String>, LoadError> {
        load_word_list_from_file(&self.path)
    }
}

/// Tries each provider in order and returns the first list that loads.
pub struct FallbackWordList {
    providers: Vec<Box<dyn WordListProvider>>,
}

impl FallbackWordList {
    pub fn new(providers: Vec<Box<dyn WordListProvider>>) -> Self {
        Self { providers }
    }
}

impl WordListProvider for FallbackWordList {
    fn name(&self) -> String {
        let names: Vec<String> = self.providers.iter().map(|p| p.name()).collect();
        names.join(" -> ")
    }

    fn load(&self) -> Result<Vec<String>, LoadError> {
        for provider in &self.providers {
            match provider.load() {
                Ok(words) => {
                    info_log!("Loaded {} words from {}", words.len(), provider.name());
                    return Ok(words);
                }
                Err(e) => {
                    log::warn!("Falling back: {e}");
                }
            }
        }
        Err(LoadError::NoSource)
    }
}
