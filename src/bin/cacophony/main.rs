//! cacophony - terminal viewer for a composition
//!
//! Run with: cargo run
//! Print the value instead of opening the viewer: cargo run -- --print

mod app;
mod ui;

use app::Viewer;
use cacophony::{Cacophony, SoundSequence};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Define lines
    let melody = SoundSequence::builder()
        .note(60, 0.5)
        .note(63, 0.5)
        .note(65, 0.25)
        .note(63, 0.25)
        .note(65, 0.5)
        .rest(0.5)
        .note(67, 1.0)
        .build()?;
    let bassline = SoundSequence::builder()
        .note(36, 1.0)
        .rest(0.5)
        .note(43, 0.5)
        .note(36, 1.0)
        .rest(1.0)
        .build()?;
    let drone = SoundSequence::builder().sound(130.81, 4.0).build()?;

    let cacophony = Cacophony::new([melody, bassline, drone]);

    if std::env::args().skip(1).any(|arg| arg == "--print") {
        println!("{}", cacophony);
        return Ok(());
    }

    Viewer::new()
        .title("demo")
        .columns_per_second(16.0)
        .line_names(["melody", "bass", "drone"])
        .show(cacophony)
}
