//! Summary bar widget - shows title, line count, length and pitch range

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::ViewState;

/// Render the summary bar
pub fn render_summary(frame: &mut Frame, area: Rect, state: &ViewState) {
    let block = Block::default()
        .title(format!(" {} ", state.title))
        .borders(Borders::ALL);

    let range = match state.pitch_range() {
        Some((lo, hi)) => format!("{:.1}-{:.1} Hz", lo, hi),
        None => String::from("silent"),
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" Lines: {}  ", state.lines.len()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("Length: {:.2}s  ", state.duration_s),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("Sounds: {}  Rests: {}  ", state.sound_count(), state.rest_count()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(range, Style::default().fg(Color::Magenta)),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}
