//! TUI (Terminal User Interface) module for Word Scramble
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! - `EnteringWord`: letters are typed into the input line, ENTER submits
//! - `ShowingAlert`: a rejected word is explained; any key returns to `EnteringWord`

use crate::game::{RejectReason, Session};
use crate::game_state::{GameInterface, UserAction};
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
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const MAX_INPUT_LENGTH: usize = 32;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ROOT_FOOTER: &str = "Make as many words as possible from the letters of this word.";

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const ALERT_TITLE_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const ROOT_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    EnteringWord,
    ShowingAlert,
}

#[derive(Debug, Clone)]
struct Alert {
    guess: String,
    reason: RejectReason,
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    session: &'a Session,
    current_input: &'a str,
    state: TuiState,
    alert: Option<&'a Alert>,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and session display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    session: Session,
    current_input: String,
    state: TuiState,
    alert: Option<Alert>,
    error_message: String,
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
            session: Session::default(),
            current_input: String::new(),
            state: TuiState::EnteringWord,
            alert: None,
            error_message: String::new(),
            status: "Ready".to_string(),
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
            current_input: &self.current_input,
            state: self.state,
            alert: self.alert.as_ref(),
            error_message: &self.error_message,
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
                Constraint::Length(3), // Title
                Constraint::Length(4), // Root word
                Constraint::Length(3), // Input
                Constraint::Min(6),    // Used words
                Constraint::Length(4), // Alert
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_root(f, chunks[1], ctx.session);
        Self::render_input(f, chunks[2], ctx.current_input, ctx.state);
        Self::render_words(f, chunks[3], ctx.session);
        Self::render_alert(f, chunks[4], ctx.alert, ctx.error_message);
        Self::render_status(f, chunks[5], ctx.status);
        Self::render_instructions(f, chunks[6], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("WORD SCRAMBLE")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_root(f: &mut Frame, area: Rect, session: &Session) {
        let lines = vec![
            Line::from(Span::styled(session.root_word().to_uppercase(), ROOT_STYLE)),
            Line::from(Span::styled(ROOT_FOOTER, Style::default().fg(Color::Gray))),
        ];
        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Root word").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_input(f: &mut Frame, area: Rect, current_input: &str, state: TuiState) {
        let caret = if state == TuiState::EnteringWord {
            "_"
        } else {
            ""
        };
        let paragraph = Paragraph::new(format!("> {current_input}{caret}"))
            .block(Block::default().title("Enter your word").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_words(f: &mut Frame, area: Rect, session: &Session) {
        let mut lines = vec![Line::from(Span::styled(
            format!("{} points", session.score()),
            SUCCESS_STYLE,
        ))];
        for word in session.used_words() {
            lines.push(Line::from(format!(
                "  [{:>2}] {}",
                word.chars().count(),
                word
            )));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Your words").borders(Borders::ALL))
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }

    fn render_alert(f: &mut Frame, area: Rect, alert: Option<&Alert>, error_message: &str) {
        let mut lines = Vec::new();
        if let Some(alert) = alert {
            lines.push(Line::from(vec![
                Span::styled(alert.reason.title(), ALERT_TITLE_STYLE),
                Span::raw(format!(" ('{}')", alert.guess.trim())),
            ]));
            lines.push(Line::from(alert.reason.message()));
        } else if !error_message.is_empty() {
            lines.push(Line::from(Span::styled(error_message, ERROR_STYLE)));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Alert").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::EnteringWord => "Type a word | ENTER: Submit | CTRL-R: Reload | ESC: Quit",
            TuiState::ShowingAlert => "Press any key to continue | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let Event::Key(key) = event::read()? else {
            return Ok(None);
        };

        // Only process Press events, ignore Release and Repeat to avoid double input
        if key.kind != event::KeyEventKind::Press {
            return Ok(None);
        }

        debug_log!(
            "handle_input() - Key event received: code={:?}, modifiers={:?}",
            key.code,
            key.modifiers
        );
        Ok(match self.state {
            TuiState::EnteringWord => self.handle_word_input(key),
            TuiState::ShowingAlert => self.handle_alert_input(key),
        })
    }

    fn handle_word_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();
        let has_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let has_alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('r' | 'R') if has_ctrl => {
                info_log!("handle_word_input() - Reload requested");
                return Some(UserAction::NewGame);
            }
            KeyCode::Char('c') if has_ctrl => return Some(UserAction::Exit),
            KeyCode::Char(_) if has_ctrl || has_alt => {
                debug_log!("handle_word_input() - Ignoring modified key: {:?}", key);
            }
            KeyCode::Char(c) if c.is_alphabetic() => {
                if self.current_input.chars().count() < MAX_INPUT_LENGTH {
                    self.current_input.push(c);
                } else {
                    self.error_message = format!("Words are at most {MAX_INPUT_LENGTH} letters");
                }
            }
            KeyCode::Char(c) => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
            }
            KeyCode::Backspace => {
                self.current_input.pop();
            }
            KeyCode::Enter => {
                let guess = std::mem::take(&mut self.current_input);
                return Some(UserAction::Guess(guess));
            }
            KeyCode::Esc => return Some(UserAction::Exit),
            _ => {}
        }
        None
    }

    fn handle_alert_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        if key.code == KeyCode::Esc {
            return Some(UserAction::Exit);
        }
        self.alert = None;
        self.state = TuiState::EnteringWord;
        self.status = "Ready".to_string();
        None
    }
}

impl GameInterface for TuiInterface {
    fn display_new_game(&mut self, session: &Session) {
        self.session = session.clone();
        self.current_input.clear();
        self.alert = None;
        self.error_message.clear();
        self.state = TuiState::EnteringWord;
        self.status = format!("New root word: {}", session.root_word());
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(e) => {
                    info_log!("read_action() - Input error: {}", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_accepted(&mut self, word: &str, points: u64, session: &Session) {
        self.session = session.clone();
        self.status = format!("+{points} for '{word}'");
        self.draw_or_log();
    }

    fn display_rejected(&mut self, guess: &str, reason: RejectReason) {
        self.alert = Some(Alert {
            guess: guess.to_string(),
            reason,
        });
        self.state = TuiState::ShowingAlert;
        self.status = reason.title().to_string();
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.status = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
