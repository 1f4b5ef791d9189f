use crate::dictionary::Dictionary;
use crate::error::GameError;
use crate::root_word::RootWordProvider;
use crate::validator::{Alert, ReasonCode, ValidationOutcome, validate};
use crate::{debug_log, info_log};

/// Everything that lives for one game: root word, accepted words and score.
///
/// The three fields are only ever replaced together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub root_word: String,
    /// Most recently accepted first.
    pub used_words: Vec<String>,
    pub score: usize,
}

impl Session {
    pub fn new(root_word: impl Into<String>) -> Self {
        Self {
            root_word: root_word.into(),
            used_words: Vec::new(),
            score: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Raw text as typed by the player.
    Submit(String),
    /// Start over with a freshly drawn root word.
    Restart { root_word: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ignored,
    Accepted { word: String, points: usize },
    Rejected { reason: ReasonCode, alert: Alert },
    Restarted { root_word: String },
}

/// Apply one action to a session, returning the next session and what happened.
///
/// The input session is never modified. Ignored and rejected submissions return
/// an unchanged copy.
pub fn reduce(session: &Session, action: Action, dictionary: &dyn Dictionary) -> (Session, Outcome) {
    match action {
        Action::Submit(raw) => {
            match validate(&raw, &session.root_word, session.used_words.as_slice(), dictionary) {
                None => (session.clone(), Outcome::Ignored),
                Some(ValidationOutcome::Rejected(reason)) => {
                    let alert = reason.alert(&session.root_word);
                    (session.clone(), Outcome::Rejected { reason, alert })
                }
                Some(ValidationOutcome::Accepted(word)) => {
                    let points = word.chars().count();
                    let mut used_words = Vec::with_capacity(session.used_words.len() + 1);
                    used_words.push(word.clone());
                    used_words.extend(session.used_words.iter().cloned());
                    let next = Session {
                        root_word: session.root_word.clone(),
                        used_words,
                        score: session.score + points,
                    };
                    (next, Outcome::Accepted { word, points })
                }
            }
        }
        Action::Restart { root_word } => {
            let next = Session::new(root_word.clone());
            (next, Outcome::Restarted { root_word })
        }
    }
}

/// What the player asked for, as read by a front end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserAction {
    Submit(String),
    Restart,
    Exit,
}

/// Seam between the game loop and a concrete front end.
pub trait GameInterface {
    /// Block until the player does something. `None` means nothing actionable
    /// was read and the loop should ask again.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_session(&mut self, session: &Session);
    fn display_accepted(&mut self, word: &str, points: usize, session: &Session);
    fn display_rejection(&mut self, alert: &Alert);
    fn display_restart(&mut self, session: &Session);
    fn display_exit_message(&mut self);
}

/// Drive a front end until the player exits. Returns the final session.
pub fn game_loop<I: GameInterface + ?Sized>(
    provider: &mut RootWordProvider,
    dictionary: &dyn Dictionary,
    interface: &mut I,
) -> Result<Session, GameError> {
    let mut session = Session::new(provider.next_root_word()?);
    info_log!("game_loop() - starting with root word '{}'", session.root_word);
    interface.display_session(&session);

    loop {
        let action = match interface.read_action() {
            Some(UserAction::Exit) => {
                interface.display_exit_message();
                break;
            }
            Some(UserAction::Restart) => Action::Restart {
                root_word: provider.next_root_word()?,
            },
            Some(UserAction::Submit(raw)) => Action::Submit(raw),
            None => continue,
        };

        let (next, outcome) = reduce(&session, action, dictionary);
        session = next;
        debug_log!("game_loop() - outcome {:?}, score {}", outcome, session.score);

        match outcome {
            Outcome::Ignored => {}
            Outcome::Accepted { word, points } => {
                interface.display_accepted(&word, points, &session);
            }
            Outcome::Rejected { alert, .. } => interface.display_rejection(&alert),
            Outcome::Restarted { .. } => {
                info_log!("game_loop() - restarted with root word '{}'", session.root_word);
                interface.display_restart(&session);
            }
        }
    }
    Ok(session)
}
