//! vikey TUI - a terminal host for the vikey modal keystroke interpreter.
//!
//! Run with: cargo run [file]

use std::env;
use std::fs;
use std::io::{self, stdout};
use std::time::Instant;

use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use vikey::host::Host;
use vikey::interpreter::Interpreter;
use vikey::state::Mode;
use vikey::types::Span;

use vikey_tui::host::TuiHost;
use vikey_tui::key;

struct App {
    interpreter: Interpreter,
    host: TuiHost,
}

impl App {
    fn new(path: Option<std::path::PathBuf>) -> App {
        let text = match &path {
            Some(p) => fs::read_to_string(p).unwrap_or_default(),
            None => String::new(),
        };
        App {
            interpreter: Interpreter::new(),
            host: TuiHost::new(text, path),
        }
    }

    /// Feeds one key through the interpreter. Keys the interpreter
    /// doesn't consume (plain typing in Insert mode) are applied
    /// directly to the buffer at the caret.
    fn handle_key(&mut self, k: vikey::key::Key) {
        let consumed = self
            .interpreter
            .handle_key(&mut self.host, k, Instant::now());
        if consumed || self.interpreter.mode() != Mode::Insert {
            return;
        }
        self.apply_insert_key(k);
    }

    fn apply_insert_key(&mut self, k: vikey::key::Key) {
        let cursor = self.host.selection().start.0;
        match k {
            vikey::key::Key::Char(c) => {
                let s = c.to_string();
                if self.host.guarded_replace(Span::caret(cursor), &s) {
                    let new_cursor = cursor + c.len_utf16();
                    self.host.set_selection(Span::caret(new_cursor));
                }
            }
            vikey::key::Key::Enter => {
                if self.host.guarded_replace(Span::caret(cursor), "\n") {
                    self.host.set_selection(Span::caret(cursor + 1));
                }
            }
            vikey::key::Key::Tab => {
                if self.host.guarded_replace(Span::caret(cursor), "\t") {
                    self.host.set_selection(Span::caret(cursor + 1));
                }
            }
            vikey::key::Key::Backspace => {
                if cursor > 0 {
                    let range = Span::new(cursor - 1, cursor);
                    if self.host.guarded_replace(range, "") {
                        self.host.set_selection(Span::caret(cursor - 1));
                    }
                }
            }
            _ => {}
        }
    }
}

fn main() -> io::Result<()> {
    let path = env::args().nth(1).map(std::path::PathBuf::from);

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(path);

    loop {
        terminal.draw(|frame| render(frame, &app))?;

        if event::poll(std::time::Duration::from_millis(16))? {
            if let Event::Key(event) = event::read()? {
                if event.kind == KeyEventKind::Press {
                    if let Some(k) = key::from_crossterm(event) {
                        app.handle_key(k);
                    }
                }
            }
        }

        if app.host.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    Ok(())
}

fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    render_buffer(frame, chunks[0], app);
    render_status(frame, chunks[1], app);
}

fn render_buffer(frame: &mut Frame, area: Rect, app: &App) {
    let text = app.host.buffer.text();
    let lines: Vec<Line> = text
        .split('\n')
        .enumerate()
        .map(|(i, line)| {
            let num = format!("{:4} ", i + 1);
            Line::from(vec![
                ratatui::text::Span::styled(num, Style::default().fg(Color::DarkGray)),
                ratatui::text::Span::raw(line.to_string()),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" vikey "));
    frame.render_widget(widget, area);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.interpreter.state();
    let mode_style = match state.mode {
        Mode::Normal => Style::default().bg(Color::Blue).fg(Color::White),
        Mode::Insert => Style::default().bg(Color::Green).fg(Color::Black),
        Mode::Visual | Mode::VisualLine => Style::default().bg(Color::Magenta).fg(Color::White),
        Mode::Command => Style::default().bg(Color::Gray).fg(Color::Black),
    };

    let status = ratatui::text::Line::from(vec![
        ratatui::text::Span::styled(
            format!(" {} ", vikey::presentation::status_line(state)),
            mode_style,
        ),
        ratatui::text::Span::raw(format!(" {}", app.host.status_line)),
    ]);

    frame.render_widget(Paragraph::new(status), area);
}
