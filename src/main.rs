use std::io;
use std::process::ExitCode;

use log::error;
use word_scramble::cli::{Cli, CliInterface, parse_cli};
use word_scramble::logging::init_logging;
use word_scramble::tui::TuiInterface;
use word_scramble::wordbank::{EMBEDDED_ROOT_WORDS, load_words_from_file, load_words_from_str};
use word_scramble::{GameError, RootWordProvider, WordListDictionary, game_loop, info_log};

fn run(cli: &Cli) -> Result<(), GameError> {
    let corpus = match &cli.wordbank_path {
        Some(path) => load_words_from_file(path)?,
        None => load_words_from_str(EMBEDDED_ROOT_WORDS),
    };
    let dictionary = match &cli.dictionary_path {
        Some(path) => WordListDictionary::from_file(path)?,
        None => WordListDictionary::default_english(),
    };
    info_log!(
        "Loaded {} root words and {} dictionary words",
        corpus.len(),
        dictionary.len()
    );

    let mut provider = RootWordProvider::new(corpus, cli.seed)?;

    if cli.plain {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&mut provider, &dictionary, &mut interface)?;
    } else {
        let mut interface = TuiInterface::new()?;
        game_loop(&mut provider, &dictionary, &mut interface)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logging(cli.verbose, !cli.plain);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("word-scramble: {e}");
            ExitCode::FAILURE
        }
    }
}
