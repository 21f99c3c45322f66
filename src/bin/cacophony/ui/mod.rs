//! TUI module for cacophony
//!
//! Shows a summary bar, a timeline with one row per sound sequence, and a
//! pitch contour of every line.

mod contour;
pub mod state;
mod summary;
mod timeline;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    DefaultTerminal, Frame,
};
use std::time::Duration;

pub use state::ViewState;

use contour::render_contour;
use summary::render_summary;
use timeline::render_timeline;

/// Seconds scrolled per arrow key press
const SCROLL_STEP_S: f64 = 0.5;

/// Colors cycled through for successive lines
pub(crate) const LINE_COLORS: [Color; 5] = [
    Color::Cyan,
    Color::Magenta,
    Color::Green,
    Color::Yellow,
    Color::Blue,
];

/// UI application state
pub struct UiApp {
    state: ViewState,
    /// Time at the left edge of the timeline
    scroll_s: f64,
    should_quit: bool,
}

impl UiApp {
    pub fn new(state: ViewState) -> Self {
        Self {
            state,
            scroll_s: 0.0,
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.scroll_s = (self.scroll_s - SCROLL_STEP_S).max(0.0);
            }
            KeyCode::Right => {
                self.scroll_s = (self.scroll_s + SCROLL_STEP_S).min(self.state.duration_s);
            }
            KeyCode::Home => {
                self.scroll_s = 0.0;
            }
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Summary bar
                Constraint::Min(4),     // Timeline
                Constraint::Length(10), // Pitch contour
                Constraint::Length(1),  // Help bar
            ])
            .split(area);

        render_summary(frame, chunks[0], &self.state);

        let timeline_block = Block::default().title(" Timeline ").borders(Borders::ALL);
        let timeline_inner = timeline_block.inner(chunks[1]);
        frame.render_widget(timeline_block, chunks[1]);
        render_timeline(frame, timeline_inner, &self.state, self.scroll_s);

        render_contour(frame, chunks[2], &self.state);

        let help = Paragraph::new(" [Q] Quit  [←/→] Scroll  [Home] Start")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cacophony::{Cacophony, SoundSequence};

    fn app() -> UiApp {
        let line = SoundSequence::builder().note(60, 1.0).build().unwrap();
        let state = ViewState::new("test", &Cacophony::new([line]), &[], 8.0);
        UiApp::new(state)
    }

    #[test]
    fn scroll_is_clamped() {
        let mut app = app();
        app.handle_key(KeyCode::Left);
        assert_eq!(app.scroll_s, 0.0);

        for _ in 0..10 {
            app.handle_key(KeyCode::Right);
        }
        assert_eq!(app.scroll_s, 1.0);

        app.handle_key(KeyCode::Home);
        assert_eq!(app.scroll_s, 0.0);
    }

    #[test]
    fn quits_on_q_and_esc() {
        let mut app = app();
        app.handle_key(KeyCode::Char('x'));
        assert!(!app.should_quit);
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit);
    }
}
