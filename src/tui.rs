//! TUI (Terminal User Interface) module for Word Scramble
//!
//! Full-screen front end built on Ratatui and crossterm.
//!
//! # Layout
//! Root word title, score and input line, accepted words, alert panel,
//! status line and key help.
//!
//! # State Machine
//! - `EnteringWord` → (ENTER with rejected word) → `ShowingAlert` → (any key) → `EnteringWord`
//! - a letter that dismisses an alert is also typed into the input
//! - ENTER with an accepted word stays in `EnteringWord`
//! - CTRL-R restarts from either state; ESC exits from either state

use crate::session::{GameInterface, Session, UserAction};
use crate::validator::Alert;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use std::io;

const MAX_INPUT_LENGTH: usize = 32;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const ALERT_TITLE_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    EnteringWord,
    /// A rejection is on screen until the next key press.
    ShowingAlert,
}

/// Borrowed view of everything the renderer needs.
struct RenderContext<'a> {
    session: &'a Session,
    current_input: &'a str,
    state: TuiState,
    alert: Option<&'a Alert>,
    message: &'a str,
    status: &'a str,
}

/// Keyboard-facing state: the raw input buffer and whatever alert or
/// message is on screen. Kept apart from the terminal so key handling can
/// run without one.
#[derive(Debug)]
struct InputPanel {
    current_input: String,
    state: TuiState,
    alert: Option<Alert>,
    message: String,
}

impl InputPanel {
    fn new() -> Self {
        Self {
            current_input: String::new(),
            state: TuiState::EnteringWord,
            alert: None,
            message: String::new(),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        if key.code == KeyCode::Esc {
            info_log!("handle_key() - ESC pressed, returning Exit");
            return Some(UserAction::Exit);
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('r' | 'R')) {
            info_log!("handle_key() - CTRL-R pressed, returning Restart");
            return Some(UserAction::Restart);
        }

        if self.state == TuiState::ShowingAlert {
            self.alert = None;
            self.state = TuiState::EnteringWord;
            // A typed letter both dismisses the alert and starts the next word
            if !matches!(key.code, KeyCode::Char(_)) {
                return None;
            }
        }
        self.handle_word_input(key)
    }

    fn handle_word_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.message.clear();
        match key.code {
            KeyCode::Char(c) if !c.is_control() && !Self::has_modifier_keys(&key) => {
                if self.current_input.chars().count() < MAX_INPUT_LENGTH {
                    self.current_input.push(c);
                }
                None
            }
            KeyCode::Backspace => {
                self.current_input.pop();
                None
            }
            KeyCode::Enter => {
                // Input is cleared whatever the verdict
                let raw = std::mem::take(&mut self.current_input);
                info_log!("handle_word_input() - Submitting '{}'", raw);
                Some(UserAction::Submit(raw))
            }
            _ => {
                debug_log!("handle_word_input() - Ignoring key: {:?}", key.code);
                None
            }
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn show_alert(&mut self, alert: &Alert) {
        self.panel.show_alert(alert);
    }

    fn reset(&mut self) {
        self.current_input.clear();
        self.alert = None;
        self.state = TuiState::EnteringWord;
    }
}

/// Main TUI interface component.
///
/// Owns the terminal and the input panel. The session itself belongs
/// to the game loop; a copy is kept only for drawing.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    session: Session,
    panel: InputPanel,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            session: Session::new(""),
            panel: InputPanel::new(),
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            session: &self.session,
            current_input: &self.panel.current_input,
            state: self.panel.state,
            alert: self.panel.alert.as_ref(),
            message: &self.panel.message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Root word
                Constraint::Length(3), // Score + input
                Constraint::Min(6),    // Used words
                Constraint::Length(4), // Alert / message
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0], &ctx.session.root_word);
        Self::render_input(f, chunks[1], ctx.session.score, ctx.current_input, ctx.state);
        Self::render_used_words(f, chunks[2], &ctx.session.used_words);
        Self::render_alert(f, chunks[3], ctx.alert, ctx.message);
        Self::render_status(f, chunks[4], ctx.status);
        Self::render_instructions(f, chunks[5], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect, root_word: &str) {
        let title = Paragraph::new(root_word.to_string())
            .style(HEADER_STYLE)
            .block(Block::default().title("WORD SCRAMBLE").borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_input(f: &mut Frame, area: Rect, score: usize, current_input: &str, state: TuiState) {
        let cursor = if state == TuiState::EnteringWord { "_" } else { "" };
        let line = Line::from(vec![
            Span::raw("Enter your word: "),
            Span::styled(format!("{current_input}{cursor}"), INFO_STYLE),
        ]);
        let paragraph = Paragraph::new(line).block(
            Block::default()
                .title(format!("Your current score: {score}"))
                .borders(Borders::ALL),
        );
        f.render_widget(paragraph, area);
    }

    fn render_used_words(f: &mut Frame, area: Rect, used_words: &[String]) {
        let items: Vec<ListItem> = used_words
            .iter()
            .map(|word| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("({}) ", word.chars().count()), SUCCESS_STYLE),
                    Span::raw(word.clone()),
                ]))
            })
            .collect();
        let list = List::new(items).block(
            Block::default()
                .title(format!("Words ({})", used_words.len()))
                .borders(Borders::ALL),
        );
        f.render_widget(list, area);
    }

    fn render_alert(f: &mut Frame, area: Rect, alert: Option<&Alert>, message: &str) {
        let mut lines = Vec::new();
        if let Some(alert) = alert {
            lines.push(Line::from(Span::styled(alert.title.clone(), ALERT_TITLE_STYLE)));
            lines.push(Line::from(Span::styled(alert.message.clone(), ERROR_STYLE)));
        } else if !message.is_empty() {
            lines.push(Line::from(Span::styled(message.to_string(), SUCCESS_STYLE)));
        }
        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::EnteringWord => "Type a word | ENTER: Submit | CTRL-R: Restart | ESC: Quit",
            TuiState::ShowingAlert => "Press any key to continue | CTRL-R: Restart | ESC: Quit",
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => {
                // Only process Press events, ignore Release and Repeat to avoid double input
                if key.kind != event::KeyEventKind::Press {
                    return Ok(None);
                }
                debug_log!(
                    "handle_input() - Key event received: code={:?}, modifiers={:?}",
                    key.code,
                    key.modifiers
                );
                Ok(self.panel.handle_key(key))
            }
            _other => {
                debug_log!("handle_input() - Ignoring event: {:?}", _other);
                Ok(None)
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }
            match self.handle_input() {
                Ok(Some(action)) => return Some(action),
                Ok(None) => {}
                Err(_e) => {
                    info_log!("read_action() - Error handling input, returning Exit");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_session(&mut self, session: &Session) {
        self.session = session.clone();
        self.status = format!("Make words from '{}'", session.root_word);
        self.draw_or_log();
    }

    fn display_accepted(&mut self, word: &str, points: usize, session: &Session) {
        self.session = session.clone();
        self.panel.message = format!("Added '{word}' (+{points})");
        self.status = format!("Score: {}", session.score);
        self.draw_or_log();
    }

    fn display_rejection(&mut self, alert: &Alert) {
        self.panel.show_alert(alert);
        self.status = alert.title.clone();
        self.draw_or_log();
    }

    fn display_restart(&mut self, session: &Session) {
        self.session = session.clone();
        self.panel.reset();
        self.panel.message = "New game started.".to_string();
        self.status = format!("Make words from '{}'", session.root_word);
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
