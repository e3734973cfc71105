use std::io;
use std::path::Path;
use std::process::ExitCode;
use word_scramble::cli::{CliInterface, parse_cli};
use word_scramble::logging::init_logging;
use word_scramble::tui::TuiInterface;
use word_scramble::{
    DEFAULT_LANGUAGE, DictionaryChecker, EmbeddedWordList, FallbackWordList, FileWordList,
    LoadError, WordListProvider, WordSetDictionary, game_loop,
};

fn load_dictionary(path: Option<&str>) -> Result<WordSetDictionary, LoadError> {
    match path {
        Some(path) => WordSetDictionary::from_file(DEFAULT_LANGUAGE, path),
        None => Ok(WordSetDictionary::embedded()),
    }
}

/// A custom word list falls back to the embedded one instead of aborting.
fn word_list_provider(path: Option<&str>) -> Box<dyn WordListProvider> {
    match path {
        Some(path) => Box::new(FallbackWordList::new(vec![
            Box::new(FileWordList::new(path)),
            Box::new(EmbeddedWordList),
        ])),
        None => Box::new(EmbeddedWordList),
    }
}

fn run<D: DictionaryChecker>(
    provider: &dyn WordListProvider,
    dictionary: D,
    use_tui: bool,
) -> Result<u64, Box<dyn std::error::Error>> {
    let session = if use_tui {
        let mut interface = TuiInterface::new()?;
        let session = game_loop(provider, dictionary, &mut interface);
        // Restore the terminal before anything is printed.
        drop(interface);
        session?
    } else {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(provider, dictionary, &mut interface)?
    };
    Ok(session.score())
}

fn main() -> ExitCode {
    let cli = parse_cli();

    match init_logging(cli.log_file.as_deref().map(Path::new)) {
        Ok(path) => log::info!("Logging to {}", path.display()),
        Err(e) => eprintln!("Logging disabled: {e}"),
    }

    let dictionary = match load_dictionary(cli.dictionary_path.as_deref()) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            eprintln!("Failed to load dictionary: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("Dictionary ready with {} words", dictionary.len());

    let provider = word_list_provider(cli.words_path.as_deref());
    match run(provider.as_ref(), dictionary, cli.tui) {
        Ok(score) => {
            println!("Final score: {score}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
