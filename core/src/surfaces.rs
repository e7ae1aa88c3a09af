//! Collaborator surfaces
//!
//! The engine drives a display and an audio device it knows nothing about.
//! Frontends implement these traits; the controller holds them as boxed
//! trait objects and never learns what is behind them.

use crate::signal::Signal;

/// Visual feedback surface.
pub trait DisplaySurface: Send {
    /// Light up a pad.
    fn activate(&mut self, signal: Signal);

    /// Return a pad to its resting state.
    fn deactivate(&mut self, signal: Signal);

    /// Render the progress markers for the current level.
    fn render_choice_trail(&mut self, choices: &[Signal]);

    /// Show the level / status / game-over banner.
    fn show_message(&mut self, text: &str);
}

/// What the audio surface can be asked to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// The tone belonging to one pad.
    Signal(Signal),
    /// The failure sound.
    Wrong,
}

/// Sound playback surface. Fire-and-forget; no result is consumed.
pub trait AudioSurface: Send {
    fn play(&mut self, cue: AudioCue);
}

/// Audio surface that plays nothing.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSurface for NullAudio {
    fn play(&mut self, _cue: AudioCue) {}
}
