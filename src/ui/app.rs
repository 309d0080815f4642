//! Main TUI application state and logic

use crate::parser::{ParserSession, TraceEntry, Verdict};
use crate::scanner::{LexError, Scanner, Token};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Tokens,
    Trace,
}

impl FocusedPane {
    /// Move focus to the other pane.
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Tokens => FocusedPane::Trace,
            FocusedPane::Trace => FocusedPane::Tokens,
        }
    }
}

/// The main application state
pub struct App {
    /// Name of the loaded source file, if any
    pub source_name: Option<String>,

    /// Tokens produced before the scan ended (or stopped at an error)
    pub tokens: Vec<Token>,

    /// The lexical error that stopped the scan, if any
    pub lex_error: Option<LexError>,

    /// Symbol string being edited for the parser
    pub symbols: String,

    /// Trace of the last parse run
    pub trace: Vec<TraceEntry>,

    /// Verdict of the last parse run
    pub verdict: Option<Verdict>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub tokens_scroll: usize,
    pub trace_scroll: usize,

    /// Whether the symbol input line is capturing keystrokes
    pub editing: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app, scanning `source` up front if one was loaded.
    /// Tokens produced before a lexical error are kept for display.
    pub fn new(source_name: Option<String>, source: Option<&str>) -> Self {
        let mut tokens = Vec::new();
        let mut lex_error = None;

        if let Some(text) = source {
            let mut scanner = Scanner::new(text);
            loop {
                match scanner.scan() {
                    Ok(Some(token)) => tokens.push(token),
                    Ok(None) => break,
                    Err(error) => {
                        lex_error = Some(error);
                        break;
                    }
                }
            }
        }

        let status_message = match (&source_name, &lex_error) {
            (_, Some(_)) => "Scan stopped at a lexical error".to_string(),
            (Some(name), None) => format!("Scanned {} — {} token(s)", name, tokens.len()),
            (None, None) => String::from("Ready!"),
        };

        App {
            source_name,
            tokens,
            lex_error,
            symbols: String::new(),
            trace: Vec::new(),
            verdict: None,
            focused_pane: FocusedPane::Tokens,
            tokens_scroll: 0,
            trace_scroll: 0,
            editing: false,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes above, one-line status bar below
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(pane_area);

        super::panes::render_tokens_pane(
            frame,
            columns[0],
            self.source_name.as_deref(),
            &self.tokens,
            self.lex_error.as_ref(),
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        super::panes::render_trace_pane(
            frame,
            columns[1],
            &self.symbols,
            self.editing,
            &self.trace,
            self.verdict,
            self.focused_pane == FocusedPane::Trace,
            &mut self.trace_scroll,
        );

        super::panes::render_status_bar(frame, status_area, &self.status_message, self.editing);
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.editing {
            match key.code {
                KeyCode::Esc => {
                    self.editing = false;
                    self.status_message = "Edit cancelled".to_string();
                }
                KeyCode::Enter => {
                    self.run_parse();
                }
                KeyCode::Backspace => {
                    self.symbols.pop();
                }
                KeyCode::Char(c) if !c.is_control() => {
                    self.symbols.push(c);
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                self.focused_pane = FocusedPane::Trace;
                self.editing = true;
                self.status_message = "Enter a symbol string ending in #".to_string();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Tokens => {
                    self.tokens_scroll = self.tokens_scroll.saturating_sub(1);
                }
                FocusedPane::Trace => {
                    self.trace_scroll = self.trace_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Tokens => {
                    self.tokens_scroll = self.tokens_scroll.saturating_add(1);
                }
                FocusedPane::Trace => {
                    self.trace_scroll = self.trace_scroll.saturating_add(1);
                }
            },
            KeyCode::Enter => {
                if self.focused_pane == FocusedPane::Trace && !self.symbols.is_empty() {
                    self.run_parse();
                }
            }
            _ => {}
        }
    }

    /// Run the predictive parser over the current symbol string.
    fn run_parse(&mut self) {
        self.editing = false;

        let mut session = ParserSession::new(&self.symbols);
        let verdict = session.parse();
        self.trace = session.trace().to_vec();
        self.verdict = Some(verdict);
        self.trace_scroll = 0;

        self.status_message = if self.trace.is_empty() && verdict == Verdict::Rejected {
            format!("'{}' rejected — input must end with #", self.symbols)
        } else {
            format!("'{}' {} in {} step(s)", self.symbols, verdict, self.trace.len())
        };
    }
}
