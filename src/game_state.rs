use crate::dictionary::DictionaryChecker;
use crate::error::LoadError;
use crate::game::{GuessResult, RejectReason, Session, WordGame};
use crate::info_log;
use crate::wordbank::WordListProvider;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    NewGame,
    Exit,
}

/// Front end for the game loop. Implemented by the line-based CLI and the TUI.
pub trait GameInterface {
    /// A fresh round has started.
    fn display_new_game(&mut self, session: &Session);

    /// Next user action, or `None` when the input was not usable and the loop should ask again.
    fn read_action(&mut self) -> Option<UserAction>;

    fn display_accepted(&mut self, word: &str, points: u64, session: &Session);

    fn display_rejected(&mut self, guess: &str, reason: RejectReason);

    fn display_exit_message(&mut self);
}

/// Load the root words, then play rounds until the user exits.
///
/// Returns the last session so callers can report the final score.
/// A word list that cannot be loaded is returned as an error before anything is shown.
pub fn game_loop<P, D, I>(
    provider: &P,
    dictionary: D,
    interface: &mut I,
) -> Result<Session, LoadError>
where
    P: WordListProvider + ?Sized,
    D: DictionaryChecker,
    I: GameInterface + ?Sized,
{
    let words = provider.load()?;
    info_log!("Loaded {} root words from {}", words.len(), provider.name());

    let mut game = WordGame::new(dictionary);
    game.start_game(&words);
    interface.display_new_game(game.session());

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::NewGame => {
                game.start_game(&words);
                interface.display_new_game(game.session());
            }
            UserAction::Guess(guess) => match game.submit_guess(&guess) {
                GuessResult::Accepted { points } => {
                    let word = game.used_words()[0].clone();
                    interface.display_accepted(&word, points, game.session());
                }
                // Blank input is ignored without an alert.
                GuessResult::Rejected(RejectReason::Empty) => {}
                GuessResult::Rejected(reason) => {
                    interface.display_rejected(&guess, reason);
                }
            },
        }
    }

    info_log!("Game over with score {}", game.score());
    Ok(game.session().clone())
}
