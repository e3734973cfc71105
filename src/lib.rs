// Library interface for word-scramble
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod game_state;
pub mod logging;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use dictionary::{DEFAULT_LANGUAGE, DictionaryChecker, WordSetDictionary};
pub use error::LoadError;
pub use game::{
    DEFAULT_ROOT_WORD, GuessResult, RejectReason, Session, WordGame, is_possible, points_for,
};
pub use game_state::{GameInterface, UserAction, game_loop};
pub use wordbank::{
    EmbeddedWordList, FallbackWordList, FileWordList, WordListProvider, load_word_list_from_file,
    load_word_list_from_str,
};
