//! Main TUI application state and logic

use crate::codegen::{self, GenOptions};
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::ops::Range;
use std::time::{Duration, Instant};

use super::panes::{self, SourceScrollState};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Generated,
    Variables,
    Terminal,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: source -> terminal -> generated -> variables)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Terminal,
            FocusedPane::Terminal => FocusedPane::Generated,
            FocusedPane::Generated => FocusedPane::Variables,
            FocusedPane::Variables => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Variables,
            FocusedPane::Terminal => FocusedPane::Source,
            FocusedPane::Generated => FocusedPane::Terminal,
            FocusedPane::Variables => FocusedPane::Generated,
        }
    }
}

/// The main application state
pub struct App {
    /// Interpreter whose history is being browsed
    pub interpreter: Interpreter,

    /// The script being shown
    pub source_code: String,

    /// Go translation of the whole program
    pub generated_code: String,

    /// Generated line range of each top-level statement
    pub statement_lines: Vec<Range<usize>>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    pub source_scroll: SourceScrollState,
    pub generated_scroll: usize,
    pub variables_scroll: usize,
    pub terminal_scroll: usize,

    /// Cleared by a manual scroll of the generated pane, set again by stepping
    pub follow_generated: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app over an interpreter that has already run.
    ///
    /// The history is rewound so browsing starts at the first statement.
    pub fn new(mut interpreter: Interpreter, source_code: String, options: &GenOptions) -> Self {
        let generated_code = codegen::generate(interpreter.program(), options);
        let statement_lines = statement_line_ranges(&interpreter, &generated_code, options);
        let status_message = match interpreter.rewind_to_start() {
            Ok(()) => String::from("Ready!"),
            Err(e) => e.to_string(),
        };

        let now = Instant::now();
        App {
            interpreter,
            source_code,
            generated_code,
            statement_lines,
            focused_pane: FocusedPane::Source,
            source_scroll: SourceScrollState::default(),
            generated_scroll: 0,
            variables_scroll: 0,
            terminal_scroll: 0,
            follow_generated: true,
            should_quit: false,
            status_message,
            is_playing: false,
            last_play_time: now,
            last_space_press: now.checked_sub(Duration::from_secs(1)).unwrap_or(now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= Duration::from_secs(1) {
                if self.interpreter.step_forward().is_ok() {
                    self.status_message = "Playing...".to_string();
                    self.after_step();
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Poll with a timeout so auto-play keeps ticking
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

    /// Generated lines of the statement about to run
    pub fn current_generated_range(&self) -> Option<Range<usize>> {
        self.statement_lines
            .get(self.interpreter.statement_index())
            .cloned()
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // 4 panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(main_chunks[0]);

        // Left column: Source (top) | Demo output (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[0]);

        // Right column: Generated Go (top) | Variables (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[1]);

        let current_line = self
            .interpreter
            .current_statement()
            .map(|_| self.interpreter.current_location().line);

        panes::render_source_pane(
            frame,
            left_rows[0],
            &self.source_code,
            current_line,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        panes::render_terminal_pane(
            frame,
            left_rows[1],
            self.interpreter.terminal(),
            self.focused_pane == FocusedPane::Terminal,
            &mut self.terminal_scroll,
        );

        let highlighted = self.current_generated_range();
        panes::render_generated_pane(
            frame,
            right_rows[0],
            &self.generated_code,
            highlighted,
            self.focused_pane == FocusedPane::Generated,
            &mut self.generated_scroll,
            self.follow_generated,
        );

        panes::render_variables_pane(
            frame,
            right_rows[1],
            self.interpreter.variables(),
            self.focused_pane == FocusedPane::Variables,
            &mut self.variables_scroll,
        );

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.interpreter.history_position(),
            self.interpreter.total_snapshots(),
            self.interpreter.evaluation_errors().len(),
            self.is_playing,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let stepped = (0..n)
                    .take_while(|_| self.interpreter.step_forward().is_ok())
                    .count();
                self.status_message = format!("Stepped forward {} step(s)", stepped);
                self.after_step();
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => {
                self.is_playing = false;
                let result = self.interpreter.step_backward();
                self.report_step(result, "Stepped backward", "Cannot step backward");
            }
            KeyCode::Right => {
                self.is_playing = false;
                let result = self.interpreter.step_forward();
                self.report_step(result, "Stepped forward", "Cannot step forward");
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Source => {
                    // Scrolling up makes the current line move down visually
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_add(1));
                    }
                }
                FocusedPane::Generated => {
                    self.follow_generated = false;
                    self.generated_scroll = self.generated_scroll.saturating_sub(1);
                }
                FocusedPane::Variables => {
                    self.variables_scroll = self.variables_scroll.saturating_sub(1);
                }
                FocusedPane::Terminal => {
                    self.terminal_scroll = self.terminal_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Source => {
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_sub(1));
                    }
                }
                FocusedPane::Generated => {
                    self.follow_generated = false;
                    self.generated_scroll = self.generated_scroll.saturating_add(1);
                }
                FocusedPane::Variables => {
                    self.variables_scroll = self.variables_scroll.saturating_add(1);
                }
                FocusedPane::Terminal => {
                    self.terminal_scroll = self.terminal_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // 200ms debounce against key repeat
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        let now = Instant::now();
                        self.last_play_time =
                            now.checked_sub(Duration::from_secs(1)).unwrap_or(now);
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                let result = self.interpreter.jump_to_end();
                self.report_step(result, "Jumped to end", "Cannot jump");
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                let result = self.interpreter.rewind_to_start();
                self.report_step(result, "Jumped to start", "Cannot jump");
            }
            _ => {}
        }
    }

    fn report_step(&mut self, result: Result<(), RuntimeError>, done: &str, failed: &str) {
        match result {
            Ok(()) => {
                self.status_message = done.to_string();
                self.after_step();
            }
            Err(RuntimeError::HistoryBoundary { message, .. }) => {
                self.status_message = format!("{}: {}", failed, message);
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    fn after_step(&mut self) {
        // Auto-scroll output to bottom and follow the current statement
        self.terminal_scroll = usize::MAX;
        self.follow_generated = true;
    }
}

/// Line range each top-level statement occupies in `generated_code`
fn statement_line_ranges(
    interpreter: &Interpreter,
    generated_code: &str,
    options: &GenOptions,
) -> Vec<Range<usize>> {
    let mut start = if options.wrap_in_main {
        generated_code
            .lines()
            .position(|line| line == "func main() {")
            .map_or(0, |idx| idx + 1)
    } else {
        0
    };

    interpreter
        .program()
        .statements
        .iter()
        .map(|statement| {
            let count = codegen::generate_statement(statement, options).lines().count();
            let range = start..start + count;
            start += count;
            range
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::constants::DEFAULT_SNAPSHOT_LIMIT;
    use crate::parser::parse::Parser;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    const SCRIPT: &str = "ye x = 10\nagar x\n bol x\nend\nbol x\nye y = x * 2";

    fn app(options: &GenOptions) -> App {
        let program = Parser::new(SCRIPT).parse_program().expect("Parsing failed");
        let mut interpreter = Interpreter::new(program, DEFAULT_SNAPSHOT_LIMIT);
        interpreter.run().expect("Execution failed");
        App::new(interpreter, SCRIPT.to_string(), options)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_starts_rewound() {
        let app = app(&GenOptions::default());
        assert_eq!(app.interpreter.history_position(), 0);
        assert_eq!(app.current_generated_range(), Some(0..1));
    }

    #[test]
    fn test_statement_line_ranges() {
        let app = app(&GenOptions::default());
        assert_eq!(app.statement_lines, vec![0..1, 1..4, 4..5, 5..6]);

        let wrapped = app_with_wrap();
        // package, blank, import block (3 lines), blank, func main
        assert_eq!(wrapped.statement_lines[0], 7..8);
    }

    fn app_with_wrap() -> App {
        app(&GenOptions {
            wrap_in_main: true,
            ..GenOptions::default()
        })
    }

    #[test]
    fn test_stepping_keys() {
        let mut app = app(&GenOptions::default());

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.interpreter.history_position(), 2);
        assert_eq!(app.current_generated_range(), Some(4..5));

        press(&mut app, KeyCode::Left);
        assert_eq!(app.interpreter.history_position(), 1);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.interpreter.history_position(), 4);
        assert_eq!(app.current_generated_range(), None);
        assert_eq!(app.interpreter.variables().get("y"), Some(20));

        press(&mut app, KeyCode::Right);
        assert!(app.status_message.starts_with("Cannot step forward"));

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.interpreter.history_position(), 0);

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.interpreter.history_position(), 3);
    }

    #[test]
    fn test_focus_and_quit() {
        let mut app = app(&GenOptions::default());
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Terminal);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused_pane, FocusedPane::Source);

        app.focused_pane = FocusedPane::Generated;
        press(&mut app, KeyCode::Down);
        assert!(!app.follow_generated);
        press(&mut app, KeyCode::Right);
        assert!(app.follow_generated);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_panes() {
        let mut app = app(&GenOptions::default());
        press(&mut app, KeyCode::Enter);
        let text = screen_text(&mut app);

        assert!(text.contains("Source"));
        assert!(text.contains("Generated Go"));
        assert!(text.contains("Variables (2)"));
        assert!(text.contains("Demo Output"));
        assert!(text.contains("fmt.Println(x)"));
        assert!(text.contains("Output: 10"));
        assert!(text.contains("END"));
    }
}
