//! Timeline widget - one row per sound sequence, sounds as blocks and rests as dots

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::state::{LineInfo, ViewState};
use super::LINE_COLORS;

const LABEL_WIDTH: usize = 8;

/// What a single timeline column shows for one line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cell {
    Sound,
    Rest,
    Empty,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Sound => '▓',
            Cell::Rest => '·',
            Cell::Empty => ' ',
        }
    }
}

/// Render the timeline starting at `scroll_s` seconds
pub fn render_timeline(frame: &mut Frame, area: Rect, state: &ViewState, scroll_s: f64) {
    if area.height < 2 || (area.width as usize) < LABEL_WIDTH + 4 {
        return;
    }

    let width = area.width as usize - LABEL_WIDTH;
    let mut lines = Vec::new();

    // Seconds ruler
    lines.push(Line::from(Span::styled(
        format!("{}{}", " ".repeat(LABEL_WIDTH), ruler(width, scroll_s, state.columns_per_second)),
        Style::default().fg(Color::DarkGray),
    )));

    for (i, line) in state.lines.iter().enumerate() {
        let name = format!("{:<w$.w$}", line.name, w = LABEL_WIDTH - 2);
        let cells: String = (0..width)
            .map(|column| {
                let t = scroll_s + (column as f64 + 0.5) / state.columns_per_second;
                cell_at(line, t).symbol()
            })
            .collect();

        lines.push(Line::from(vec![
            Span::styled(format!("{}  ", name), Style::default().fg(Color::White)),
            Span::styled(cells, Style::default().fg(LINE_COLORS[i % LINE_COLORS.len()])),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Mark every whole second with `|n`; labels that would overlap are dropped
fn ruler(width: usize, scroll_s: f64, columns_per_second: f64) -> String {
    let mut ruler = vec![' '; width];
    let first_second = scroll_s.ceil();
    let mut next_free = 0;

    // One pass over the columns, so any zoom level terminates
    for column in 0..width {
        if column < next_free {
            continue;
        }
        // Second rounding onto this column, if any
        let second = (scroll_s + (column as f64 - 0.5) / columns_per_second)
            .ceil()
            .max(first_second);
        if second >= scroll_s + (column as f64 + 0.5) / columns_per_second {
            continue;
        }
        let label = format!("|{}", second as u64);
        for (offset, ch) in label.chars().enumerate() {
            if let Some(slot) = ruler.get_mut(column + offset) {
                *slot = ch;
            }
        }
        next_free = column + label.len();
    }
    ruler.into_iter().collect()
}

fn cell_at(line: &LineInfo, t: f64) -> Cell {
    line.events
        .iter()
        .find(|event| t >= event.start_s && t < event.start_s + event.duration_s)
        .map(|event| {
            if event.pitch_hz.is_some() {
                Cell::Sound
            } else {
                Cell::Rest
            }
        })
        .unwrap_or(Cell::Empty)
}
