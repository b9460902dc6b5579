//! Main TUI application state and logic

use crate::evaluator::engine::evaluate_all;
use crate::evaluator::errors::TableError;
use crate::parser::parse::{parse, ParseError, ParsedExpression};
use crate::table::TruthTable;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::info;
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::Duration;

/// Rows moved by PageUp / PageDown
const PAGE_SIZE: usize = 10;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Input,
    Table,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Input => FocusedPane::Table,
            FocusedPane::Table => FocusedPane::Input,
        }
    }
}

/// Outcome of parsing and evaluating the current input
#[derive(Debug, Clone)]
pub enum Evaluation {
    /// Nothing submitted yet
    Empty,
    Ready {
        parsed: ParsedExpression,
        table: TruthTable,
    },
    /// Parsed, but the table was refused
    Refused {
        parsed: ParsedExpression,
        error: TableError,
    },
    Invalid(ParseError),
}

impl Evaluation {
    pub fn from_input(input: &str) -> Self {
        if input.trim().is_empty() {
            return Evaluation::Empty;
        }
        match parse(input) {
            Ok(parsed) => match evaluate_all(&parsed) {
                Ok(table) => Evaluation::Ready { parsed, table },
                Err(error) => Evaluation::Refused { parsed, error },
            },
            Err(error) => Evaluation::Invalid(error),
        }
    }

    pub fn table(&self) -> Option<&TruthTable> {
        match self {
            Evaluation::Ready { table, .. } => Some(table),
            _ => None,
        }
    }

    fn status(&self) -> String {
        match self {
            Evaluation::Empty => String::from("Type an expression and press Enter"),
            Evaluation::Ready { table, .. } => format!(
                "{} rows, {} true ({})",
                table.len(),
                table.true_count(),
                table.classification()
            ),
            Evaluation::Refused { error, .. } => error.to_string(),
            Evaluation::Invalid(error) => format!("Invalid expression: {}", error),
        }
    }
}

/// The main application state
pub struct App {
    /// Expression being edited
    pub input: String,

    /// Result for the last submitted expression
    pub evaluation: Evaluation,

    /// Expression text the evaluation belongs to
    pub submitted: String,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// First visible table row
    pub table_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app, evaluating `initial` right away if it is not empty
    pub fn new(initial: String) -> Self {
        let evaluation = Evaluation::from_input(&initial);
        let focused_pane = match evaluation {
            Evaluation::Empty => FocusedPane::Input,
            _ => FocusedPane::Table,
        };
        App {
            status_message: evaluation.status(),
            submitted: initial.clone(),
            input: initial,
            evaluation,
            focused_pane,
            table_scroll: 0,
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(250))? {
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

        // Input line, panes, status bar
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[1]);

        super::panes::render_input_pane(
            frame,
            main_chunks[0],
            &self.input,
            self.focused_pane == FocusedPane::Input,
        );

        super::panes::render_table_pane(
            frame,
            columns[0],
            &self.evaluation,
            self.focused_pane == FocusedPane::Table,
            &mut self.table_scroll,
        );

        super::panes::render_info_pane(frame, columns[1], &self.submitted, &self.evaluation);

        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            &self.status_message,
            self.focused_pane,
            &self.evaluation,
        );
    }

    /// Handle keyboard events
    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.next();
            }
            _ => match self.focused_pane {
                FocusedPane::Input => self.handle_input_key(key.code),
                FocusedPane::Table => self.handle_table_key(key.code),
            },
        }
    }

    fn handle_input_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => self.input.push(c),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn handle_table_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char('e') | KeyCode::Enter => self.focused_pane = FocusedPane::Input,
            KeyCode::Up => self.table_scroll = self.table_scroll.saturating_sub(1),
            KeyCode::Down => self.table_scroll = self.table_scroll.saturating_add(1),
            KeyCode::PageUp => self.table_scroll = self.table_scroll.saturating_sub(PAGE_SIZE),
            KeyCode::PageDown => self.table_scroll = self.table_scroll.saturating_add(PAGE_SIZE),
            KeyCode::Home => self.table_scroll = 0,
            // Clamped to the last page on the next render
            KeyCode::End => self.table_scroll = usize::MAX,
            _ => {}
        }
    }

    /// Parse and evaluate the input line
    fn submit(&mut self) {
        info!("evaluating {:?}", self.input);
        self.evaluation = Evaluation::from_input(&self.input);
        self.submitted = self.input.clone();
        self.table_scroll = 0;
        self.status_message = self.evaluation.status();
        if self.evaluation.table().is_some() {
            self.focused_pane = FocusedPane::Table;
        }
    }
}
