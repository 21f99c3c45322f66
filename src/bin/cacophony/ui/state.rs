//! View state derived once from the cacophony being shown

use cacophony::{Cacophony, SoundSequence};

/// Everything the widgets need, computed up front
#[derive(Clone, Debug)]
pub struct ViewState {
    pub title: String,
    /// Longest line in seconds
    pub duration_s: f64,
    pub columns_per_second: f64,
    pub lines: Vec<LineInfo>,
}

/// One timeline row
#[derive(Clone, Debug)]
pub struct LineInfo {
    pub name: String,
    /// Sounds laid out in time, rests included
    pub events: Vec<SoundEvent>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoundEvent {
    pub start_s: f64,
    pub duration_s: f64,
    /// None for rests
    pub pitch_hz: Option<f64>,
    pub midi_note: Option<u8>,
}

impl ViewState {
    pub fn new(
        title: &str,
        cacophony: &Cacophony,
        names: &[String],
        columns_per_second: f64,
    ) -> Self {
        let lines = cacophony
            .iter()
            .enumerate()
            .map(|(i, sequence)| LineInfo {
                name: names
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| format!("line {}", i + 1)),
                events: layout(sequence),
            })
            .collect();

        Self {
            title: title.to_string(),
            duration_s: cacophony.duration_s(),
            columns_per_second,
            lines,
        }
    }

    pub fn sound_count(&self) -> usize {
        self.lines
            .iter()
            .flat_map(|line| &line.events)
            .filter(|event| event.pitch_hz.is_some())
            .count()
    }

    pub fn rest_count(&self) -> usize {
        self.lines
            .iter()
            .flat_map(|line| &line.events)
            .filter(|event| event.pitch_hz.is_none())
            .count()
    }

    /// Lowest and highest sounding pitch, if any line has a sound
    pub fn pitch_range(&self) -> Option<(f64, f64)> {
        self.lines
            .iter()
            .flat_map(|line| &line.events)
            .filter_map(|event| event.pitch_hz)
            .fold(None, |range, hz| match range {
                None => Some((hz, hz)),
                Some((lo, hi)) => Some((lo.min(hz), hi.max(hz))),
            })
    }
}

/// Place each sound of a sequence right after the previous one
fn layout(sequence: &SoundSequence) -> Vec<SoundEvent> {
    let mut cursor = 0.0;
    sequence
        .iter()
        .map(|sound| {
            let event = SoundEvent {
                start_s: cursor,
                duration_s: sound.duration_s(),
                pitch_hz: (!sound.is_rest()).then(|| sound.pitch_hz()),
                midi_note: sound.midi_note(),
            };
            cursor += sound.duration_s();
            event
        })
        .collect()
}
