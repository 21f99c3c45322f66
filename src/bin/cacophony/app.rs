//! Viewer - builder and runner for the terminal UI

use color_eyre::eyre::{eyre, Result as EyreResult};

use cacophony::Cacophony;

use super::ui::{UiApp, ViewState};

/// Zoom range accepted by the viewer (columns per second of music)
const MIN_COLUMNS_PER_SECOND: f64 = 0.01;
const MAX_COLUMNS_PER_SECOND: f64 = 1000.0;

/// Main application builder
pub struct Viewer {
    title: String,
    columns_per_second: f64,
    line_names: Vec<String>,
}

impl Viewer {
    pub fn new() -> Self {
        Self {
            title: String::from("cacophony"),
            columns_per_second: 8.0,
            line_names: Vec::new(),
        }
    }

    /// Title shown in the summary bar
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Horizontal zoom: terminal columns drawn per second of music
    pub fn columns_per_second(mut self, columns_per_second: f64) -> Self {
        self.columns_per_second = columns_per_second;
        self
    }

    /// Labels for the timeline rows; unnamed lines are numbered
    pub fn line_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.line_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Take over the terminal and show `cacophony` until the user quits
    pub fn show(self, cacophony: Cacophony) -> EyreResult<()> {
        self.check_zoom()?;

        let state = ViewState::new(
            &self.title,
            &cacophony,
            &self.line_names,
            self.columns_per_second,
        );

        let mut terminal = ratatui::init();
        let result = UiApp::new(state).run(&mut terminal);
        ratatui::restore();
        result
    }

    fn check_zoom(&self) -> EyreResult<()> {
        let zoom = self.columns_per_second;
        if (MIN_COLUMNS_PER_SECOND..=MAX_COLUMNS_PER_SECOND).contains(&zoom) {
            Ok(())
        } else {
            Err(eyre!(
                "columns per second must be between {} and {}, got {}",
                MIN_COLUMNS_PER_SECOND,
                MAX_COLUMNS_PER_SECOND,
                zoom
            ))
        }
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_must_be_in_range() {
        assert!(Viewer::new().check_zoom().is_ok());
        assert!(Viewer::new().columns_per_second(0.01).check_zoom().is_ok());

        for zoom in [0.0, -4.0, 1e-300, 1e6, f64::NAN, f64::INFINITY] {
            assert!(Viewer::new().columns_per_second(zoom).check_zoom().is_err());
        }
    }
}
