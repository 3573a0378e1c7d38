//! Main TUI application state machine.
//!
//! Handles:
//! - Screen navigation
//! - Input event handling
//! - Synchronous screening via the injected service
//!
//! One prediction cycle (gather inputs → build features → call model →
//! classify → render) runs to completion before the next begins; the local
//! regression call is fast, so no background worker is needed.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use crate::application::ScreeningService;
use crate::ports::GlyhbModel;

use super::ui::{
    form::{render_form, MeasurementFormState},
    render_disclaimer,
    result::{render_result, ResultState},
};

/// Current screen/view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Form,
    Result,
}

/// Main application state
pub struct App<M>
where
    M: GlyhbModel,
{
    /// Current screen
    screen: Screen,

    /// Whether the app should quit
    should_quit: bool,

    /// Screening service with the injected model handle
    service: ScreeningService<M>,

    /// Measurement form state
    form_state: MeasurementFormState,

    /// Result screen state
    result_state: ResultState,
}

impl<M> App<M>
where
    M: GlyhbModel,
{
    /// Create the application with an injected screening service
    /// (Composition Root pattern: `main.rs` constructs all adapters).
    #[must_use]
    pub fn new(service: ScreeningService<M>) -> Self {
        Self {
            screen: Screen::Form,
            should_quit: false,
            service,
            form_state: MeasurementFormState::default(),
            result_state: ResultState::default(),
        }
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Main loop
        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                let area = f.area();
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(3)])
                    .split(area);

                match self.screen {
                    Screen::Form => render_form(f, chunks[0], &self.form_state),
                    Screen::Result => render_result(f, chunks[0], &self.result_state),
                }

                render_disclaimer(f, chunks[1]);
            })?;

            // Handle input (short poll to stay responsive)
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key.code, key.modifiers);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        // Global quit handling
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Form => self.handle_form_key(key),
            Screen::Result => self.handle_result_key(key),
        }
    }

    fn handle_form_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => {
                self.form_state.prev_field();
            }
            KeyCode::Down | KeyCode::Tab => {
                self.form_state.next_field();
            }
            KeyCode::Char('u') | KeyCode::Char('U') => {
                self.form_state.toggle_unit();
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.form_state.load_sample_data();
            }
            KeyCode::Char(c) => {
                self.form_state.input_char(c);
            }
            KeyCode::Backspace => {
                self.form_state.delete_char();
            }
            KeyCode::Delete => {
                self.form_state.clear_field();
            }
            KeyCode::Enter => {
                self.submit_form();
            }
            _ => {}
        }
    }

    fn handle_result_key(&mut self, key: KeyCode) {
        match &self.result_state {
            ResultState::Error { .. } => {
                if matches!(key, KeyCode::Enter | KeyCode::Esc) {
                    self.screen = Screen::Form;
                }
            }
            _ => match key {
                KeyCode::Char('n') | KeyCode::Char('N') => {
                    self.form_state = MeasurementFormState::default();
                    self.screen = Screen::Form;
                }
                KeyCode::Esc => {
                    // Keep entered values for editing
                    self.screen = Screen::Form;
                }
                _ => {}
            },
        }
    }

    fn submit_form(&mut self) {
        let measurements = match self.form_state.to_measurements() {
            Ok(m) => m,
            Err(e) => {
                self.form_state.error_message = Some(e);
                return;
            }
        };

        // Synchronous prediction cycle; any failure halts the cycle and is
        // shown on the result screen, never retried.
        self.result_state = match self.service.run_screening(&measurements) {
            Ok(screening) => ResultState::Complete { screening },
            Err(e) => {
                tracing::error!("Screening failed: {e}");
                ResultState::Error {
                    message: e.to_string(),
                }
            }
        };
        self.screen = Screen::Result;
    }
}
