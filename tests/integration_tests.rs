// Integration tests for the word-scramble application
// These tests verify that all modules work together correctly

use std::io::Cursor;
use word_scramble::cli::CliInterface;
use word_scramble::wordbank::{EMBEDDED_ROOT_WORDS, load_words_from_str};
use word_scramble::*;

fn accepts_everything(_: &str, _: &str) -> bool {
    true
}

#[test]
fn test_scenario_accept_silk() {
    let dictionary = WordListDictionary::embedded();
    let session = Session::new("silkworm");

    let (session, outcome) = reduce(&session, Action::Submit("silk".into()), &dictionary);

    assert_eq!(
        outcome,
        Outcome::Accepted {
            word: "silk".into(),
            points: 4
        }
    );
    assert_eq!(session.used_words, vec!["silk"]);
    assert_eq!(session.score, 4);
}

#[test]
fn test_scenario_uppercase_repeat_is_already_used() {
    let dictionary = WordListDictionary::embedded();
    let session = Session {
        root_word: "silkworm".into(),
        used_words: vec!["silk".into()],
        score: 4,
    };

    let (after, outcome) = reduce(&session, Action::Submit("SILK".into()), &dictionary);

    match outcome {
        Outcome::Rejected { reason, alert } => {
            assert_eq!(reason, ReasonCode::AlreadyUsed);
            assert_eq!(alert.title, "Word used already");
            assert_eq!(alert.message, "Be more original!");
        }
        other => panic!("Expected AlreadyUsed, got {other:?}"),
    }
    assert_eq!(after, session);
}

#[test]
fn test_scenario_dog_from_cat_not_possible() {
    assert_eq!(
        validate("dog", "cat", &[] as &[String], &accepts_everything),
        Some(ValidationOutcome::Rejected(ReasonCode::NotPossible))
    );
}

#[test]
fn test_scenario_short_word_too_trivial() {
    assert_eq!(
        validate("ca", "cat", &[] as &[String], &accepts_everything),
        Some(ValidationOutcome::Rejected(ReasonCode::TooTrivial))
    );
}

#[test]
fn test_scenario_root_word_too_trivial() {
    assert_eq!(
        validate("cat", "cat", &[] as &[String], &accepts_everything),
        Some(ValidationOutcome::Rejected(ReasonCode::TooTrivial))
    );
}

#[test]
fn test_scenario_restart_resets_atomically() {
    let dictionary = WordListDictionary::embedded();
    let mut provider = RootWordProvider::new(load_words_from_str(EMBEDDED_ROOT_WORDS), Some(9)).unwrap();

    let session = Session::new("silkworm");
    let (session, _) = reduce(&session, Action::Submit("silk".into()), &dictionary);
    let (session, _) = reduce(&session, Action::Submit("worm".into()), &dictionary);
    assert_eq!(session.score, 8);

    let root_word = provider.next_root_word().unwrap();
    let (after, outcome) = reduce(
        &session,
        Action::Restart {
            root_word: root_word.clone(),
        },
        &dictionary,
    );

    assert_eq!(outcome, Outcome::Restarted { root_word: root_word.clone() });
    assert_eq!(after.root_word, root_word);
    assert!(after.used_words.is_empty());
    assert_eq!(after.score, 0);
}

#[test]
fn test_used_words_always_rejected_regardless_of_root() {
    let used = vec!["stone".to_string()];
    for root in ["silkworm", "cat", "stone", "z"] {
        assert_eq!(
            validate("stone", root, &used, &accepts_everything),
            Some(ValidationOutcome::Rejected(ReasonCode::AlreadyUsed)),
            "root {root}"
        );
    }
}

#[test]
fn test_normalization_equivalence_through_reducer() {
    let dictionary = WordListDictionary::embedded();
    let session = Session::new("silkworm");
    let padded = reduce(&session, Action::Submit(" SILK \n".into()), &dictionary);
    let plain = reduce(&session, Action::Submit("silk".into()), &dictionary);
    assert_eq!(padded, plain);
}

#[test]
fn test_unrecognized_word_with_embedded_dictionary() {
    let dictionary = WordListDictionary::embedded();
    let session = Session::new("silkworm");
    let (after, outcome) = reduce(&session, Action::Submit("klim".into()), &dictionary);
    match outcome {
        Outcome::Rejected { reason, alert } => {
            assert_eq!(reason, ReasonCode::NotRecognized);
            assert_eq!(alert.message, "You can't just make them up, you know!");
        }
        other => panic!("Expected NotRecognized, got {other:?}"),
    }
    assert_eq!(after, session);
}

#[test]
fn test_score_accumulates_by_length() {
    let dictionary = WordListDictionary::embedded();
    let mut session = Session::new("mountain");
    for word in ["mount", "main", "ant", "moat"] {
        let (next, outcome) = reduce(&session, Action::Submit(word.into()), &dictionary);
        assert!(matches!(outcome, Outcome::Accepted { .. }), "{word}: {outcome:?}");
        session = next;
    }
    assert_eq!(session.used_words, vec!["moat", "ant", "main", "mount"]);
    assert_eq!(session.score, 5 + 4 + 3 + 4);
}

#[test]
fn test_plurals_accepted_from_silkworm() {
    let dictionary = WordListDictionary::embedded();
    let mut session = Session::new("silkworm");
    for word in ["owls", "oils", "lows", "worms"] {
        let (next, outcome) = reduce(&session, Action::Submit(word.into()), &dictionary);
        assert!(matches!(outcome, Outcome::Accepted { .. }), "{word}: {outcome:?}");
        session = next;
    }
    assert_eq!(session.score, 4 + 4 + 4 + 5);
}

#[test]
fn test_capitalized_corpus_entry_still_playable() {
    let dictionary = WordListDictionary::embedded();
    let mut provider = RootWordProvider::new(vec!["Silkworm".to_string()], Some(2)).unwrap();
    let session = Session::new(provider.next_root_word().unwrap());

    let (_, outcome) = reduce(&session, Action::Submit("silk".into()), &dictionary);

    assert_eq!(
        outcome,
        Outcome::Accepted {
            word: "silk".into(),
            points: 4
        }
    );
}

#[test]
fn test_cli_game_loop_end_to_end() {
    let dictionary = WordListDictionary::embedded();
    let mut provider = RootWordProvider::new(vec!["silkworm".to_string()], Some(1)).unwrap();
    let input = "silk\nSILK\n\ndog\nworm\n:exit\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    let session = game_loop(&mut provider, &dictionary, &mut interface).unwrap();

    assert_eq!(session.root_word, "silkworm");
    assert_eq!(session.used_words, vec!["worm", "silk"]);
    assert_eq!(session.score, 8);
}

#[test]
fn test_cli_game_loop_restart_then_eof() {
    let dictionary = WordListDictionary::embedded();
    let mut provider = RootWordProvider::new(vec!["silkworm".to_string()], Some(1)).unwrap();
    let input = "silk\n:restart\nmilk\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    let session = game_loop(&mut provider, &dictionary, &mut interface).unwrap();

    assert_eq!(session.used_words, vec!["milk"]);
    assert_eq!(session.score, 4);
}

#[test]
fn test_empty_corpus_is_fatal() {
    let corpus = load_words_from_str("\n\n  \n");
    assert!(matches!(
        RootWordProvider::new(corpus, None),
        Err(GameError::EmptyCorpus)
    ));
}

#[test]
fn test_custom_files_to_game() {
    use std::fs::File;
    use std::io::Write;

    let temp_dir = std::env::temp_dir();
    let start_path = temp_dir.join("word_scramble_it_start.txt");
    let dict_path = temp_dir.join("word_scramble_it_dictionary.txt");
    {
        let mut file = File::create(&start_path).unwrap();
        writeln!(file, "Treasure").unwrap();
        let mut file = File::create(&dict_path).unwrap();
        writeln!(file, "treat").unwrap();
        writeln!(file, "rest").unwrap();
    }

    let corpus = load_words_from_file(&start_path).unwrap();
    let dictionary = WordListDictionary::from_file(&dict_path).unwrap();
    let mut provider = RootWordProvider::new(corpus, Some(5)).unwrap();
    let mut interface = CliInterface::new(Cursor::new("treat\nsure\nrest\n"));

    let session = game_loop(&mut provider, &dictionary, &mut interface).unwrap();

    assert_eq!(session.root_word, "treasure");
    assert_eq!(session.used_words, vec!["rest", "treat"]);
    assert_eq!(session.score, 9);

    std::fs::remove_file(&start_path).unwrap();
    std::fs::remove_file(&dict_path).unwrap();
}
