// Integration tests for the word-scramble application
// These tests verify that all modules work together correctly

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;
use word_scramble::cli::CliInterface;
use word_scramble::*;

struct FixedWords(Vec<String>);

impl WordListProvider for FixedWords {
    fn name(&self) -> String {
        "fixed words".to_string()
    }

    fn load(&self) -> Result<Vec<String>, LoadError> {
        Ok(self.0.clone())
    }
}

fn silkworm_only() -> FixedWords {
    FixedWords(vec!["silkworm".to_string()])
}

#[test]
fn test_end_to_end_cli_session() {
    // Full session through the CLI front end with the embedded dictionary
    let input = "silk\nSILK\nsilkworms\n\nworm\nmilk\n:quit\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    let session = game_loop(&silkworm_only(), WordSetDictionary::embedded(), &mut interface)
        .unwrap();

    assert_eq!(session.root_word(), "silkworm");
    assert_eq!(session.used_words(), ["milk", "worm", "silk"].map(String::from));
    assert_eq!(session.score(), 48);
}

#[test]
fn test_end_of_input_ends_game() {
    let mut interface = CliInterface::new(Cursor::new("silk\n"));
    let session = game_loop(&silkworm_only(), WordSetDictionary::embedded(), &mut interface)
        .unwrap();
    assert_eq!(session.score(), 16);
}

#[test]
fn test_new_game_command_resets_score() {
    let input = "silk\n:new\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let session = game_loop(&silkworm_only(), WordSetDictionary::embedded(), &mut interface)
        .unwrap();
    assert_eq!(session.root_word(), "silkworm");
    assert!(session.used_words().is_empty());
    assert_eq!(session.score(), 0);
}

#[test]
fn test_embedded_sources_play_together() {
    // Every embedded root word is itself a dictionary word
    let roots = EmbeddedWordList.load().unwrap();
    let dictionary = WordSetDictionary::embedded();
    let mut game = WordGame::new(&dictionary);
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..10 {
        let root = game.start_game_with_rng(&roots, &mut rng).to_string();
        assert!(roots.contains(&root));
        assert_eq!(
            game.submit_guess(&root),
            GuessResult::Accepted {
                points: points_for(&root)
            }
        );
    }
}

#[test]
fn test_score_invariant_over_mixed_guesses() {
    let dictionary = WordSetDictionary::embedded();
    let mut game = WordGame::new(&dictionary);
    game.start_game(&["silkworm".to_string()]);

    let guesses = [
        "silk", "worm", "  ", "silk", "owl", "slow", "xyz", "silkworms", "rows", "Milk",
        "mow", "kilos", "slim", "skim", "mills",
    ];
    for guess in guesses {
        let first = game.submit_guess(guess);
        let expected: u64 = game.used_words().iter().map(|w| points_for(w)).sum();
        assert_eq!(game.score(), expected, "after guessing '{guess}'");

        // A rejection is repeatable; an acceptance turns into AlreadyUsed
        let second = game.submit_guess(guess);
        match first {
            GuessResult::Rejected(reason) => assert_eq!(second, GuessResult::Rejected(reason)),
            GuessResult::Accepted { .. } => {
                assert_eq!(second, GuessResult::Rejected(RejectReason::AlreadyUsed))
            }
        }
    }

    let mut unique = game.used_words().to_vec();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), game.used_words().len());
}

#[test]
fn test_already_used_wins_over_other_checks() {
    // Once accepted, a word is reported as used even if the dictionary would now say no
    let dictionary = WordSetDictionary::from_words("en", "silk\n");
    let mut game = WordGame::new(dictionary);
    game.start_game(&["silkworm".to_string()]);
    assert!(matches!(
        game.submit_guess("silk"),
        GuessResult::Accepted { points: 16 }
    ));
    assert_eq!(
        game.submit_guess("silk"),
        GuessResult::Rejected(RejectReason::AlreadyUsed)
    );
}

#[test]
fn test_custom_files_to_game() {
    // Integration test: custom start words and dictionary files -> play game
    use std::fs::File;
    use std::io::Write;

    let temp_dir = std::env::temp_dir();
    let words_path = temp_dir.join("word_scramble_it_start.txt");
    let dict_path = temp_dir.join("word_scramble_it_dict.txt");
    {
        let mut file = File::create(&words_path).unwrap();
        writeln!(file, "Pancakes").unwrap();
        let mut file = File::create(&dict_path).unwrap();
        writeln!(file, "cake").unwrap();
        writeln!(file, "snap").unwrap();
    }

    let provider = FileWordList::new(&words_path);
    let dictionary = WordSetDictionary::from_file(DEFAULT_LANGUAGE, &dict_path).unwrap();
    let mut interface = CliInterface::new(Cursor::new("cake\nsnap\npans\n"));
    let session = game_loop(&provider, dictionary, &mut interface).unwrap();

    assert_eq!(session.root_word(), "pancakes");
    assert_eq!(session.used_words(), ["snap", "cake"].map(String::from));
    assert_eq!(session.score(), 32);

    std::fs::remove_file(&words_path).unwrap();
    std::fs::remove_file(&dict_path).unwrap();
}

#[test]
fn test_missing_word_list_falls_back() {
    let provider = FallbackWordList::new(vec![
        Box::new(FileWordList::new("/definitely/not/here/start.txt")),
        Box::new(silkworm_only()),
    ]);
    let mut interface = CliInterface::new(Cursor::new("silk\n"));
    let session = game_loop(&provider, WordSetDictionary::embedded(), &mut interface).unwrap();
    assert_eq!(session.root_word(), "silkworm");
    assert_eq!(session.score(), 16);
}

#[test]
fn test_missing_word_list_without_fallback_is_an_error() {
    let provider = FileWordList::new("/definitely/not/here/start.txt");
    let mut interface = CliInterface::new(Cursor::new(""));
    let result = game_loop(&provider, WordSetDictionary::embedded(), &mut interface);
    assert!(matches!(result, Err(LoadError::Io { .. })));
}

#[test]
fn test_empty_word_list_uses_default_root() {
    let mut interface = CliInterface::new(Cursor::new("warm\n"));
    let session = game_loop(
        &FixedWords(Vec::new()),
        WordSetDictionary::embedded(),
        &mut interface,
    )
    .unwrap();
    assert_eq!(session.root_word(), DEFAULT_ROOT_WORD);
    assert_eq!(session.used_words(), ["warm".to_string()]);
}
