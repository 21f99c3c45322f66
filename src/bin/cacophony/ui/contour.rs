//! Pitch contour widget - MIDI note of every line over time

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use super::state::{LineInfo, ViewState};
use super::LINE_COLORS;

/// Points sampled per second of each sound
const SAMPLES_PER_SECOND: f64 = 32.0;

/// Render the pitch contour chart
pub fn render_contour(frame: &mut Frame, area: Rect, state: &ViewState) {
    let block = Block::default()
        .title(" Pitch contour ")
        .borders(Borders::ALL);

    let data: Vec<Vec<(f64, f64)>> = state.lines.iter().map(contour_points).collect();

    let datasets = state
        .lines
        .iter()
        .zip(&data)
        .enumerate()
        .map(|(i, (line, points))| {
            Dataset::default()
                .name(line.name.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(LINE_COLORS[i % LINE_COLORS.len()]))
                .data(points)
        })
        .collect();

    let (lo, hi) = note_bounds(&data);
    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, state.duration_s.max(1.0)])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([lo, hi])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}

/// (time, MIDI note) points covering every sounding event of a line
fn contour_points(line: &LineInfo) -> Vec<(f64, f64)> {
    line.events
        .iter()
        .filter_map(|event| event.midi_note.map(|note| (event, note as f64)))
        .flat_map(|(event, note)| {
            let samples = (event.duration_s * SAMPLES_PER_SECOND).ceil().max(1.0) as usize;
            (0..samples).map(move |i| {
                let t = event.start_s + event.duration_s * i as f64 / samples as f64;
                (t, note)
            })
        })
        .collect()
}

/// Vertical bounds with one note of headroom; a full octave when nothing sounds
fn note_bounds(data: &[Vec<(f64, f64)>]) -> (f64, f64) {
    let notes = data.iter().flatten().map(|&(_, note)| note);
    let lo = notes.clone().fold(f64::INFINITY, f64::min);
    let hi = notes.fold(f64::NEG_INFINITY, f64::max);
    if lo.is_finite() && hi.is_finite() {
        (lo - 1.0, hi + 1.0)
    } else {
        (60.0, 72.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cacophony::{Cacophony, SoundSequence};

    #[test]
    fn skips_rests() {
        let sequence = SoundSequence::builder()
            .rest(1.0)
            .note(69, 0.5)
            .build()
            .unwrap();
        let state = ViewState::new("test", &Cacophony::new([sequence]), &[], 8.0);
        let points = contour_points(&state.lines[0]);

        assert_eq!(points.len(), 16);
        assert!(points.iter().all(|&(t, note)| t >= 1.0 && note == 69.0));
    }

    #[test]
    fn bounds_pad_the_range() {
        let data = vec![vec![(0.0, 60.0)], vec![(0.0, 67.0)]];
        assert_eq!(note_bounds(&data), (59.0, 68.0));
        assert_eq!(note_bounds(&[]), (60.0, 72.0));
    }
}
