//! Tone playback
//!
//! Synthesizes one sine tone per cue instead of shipping sound files.
//! Each cue plays on a detached thread holding its own output stream;
//! the sink outlives the call, the game never waits on it.

use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, Sink};

use simon_core::{AudioCue, AudioSurface, Signal};

/// The classic Simon pad frequencies, plus a low buzz for a loss.
fn tone(cue: AudioCue) -> (f32, Duration) {
    match cue {
        AudioCue::Signal(Signal::Green) => (415.3, Duration::from_millis(200)),
        AudioCue::Signal(Signal::Red) => (310.0, Duration::from_millis(200)),
        AudioCue::Signal(Signal::Yellow) => (252.0, Duration::from_millis(200)),
        AudioCue::Signal(Signal::Blue) => (209.0, Duration::from_millis(200)),
        AudioCue::Wrong => (92.5, Duration::from_millis(500)),
    }
}

/// Audio surface that beeps through the default output device.
#[derive(Debug, Default)]
pub struct ToneAudio;

impl AudioSurface for ToneAudio {
    fn play(&mut self, cue: AudioCue) {
        let (frequency, length) = tone(cue);

        std::thread::spawn(move || {
            let Ok((_stream, handle)) = OutputStream::try_default() else {
                return;
            };
            let Ok(sink) = Sink::try_new(&handle) else {
                return;
            };

            sink.append(
                SineWave::new(frequency)
                    .take_duration(length)
                    .amplify(0.20),
            );
            sink.sleep_until_end();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cue_has_its_own_pitch() {
        let mut pitches: Vec<f32> = Signal::ALL
            .into_iter()
            .map(|s| tone(AudioCue::Signal(s)).0)
            .collect();
        pitches.push(tone(AudioCue::Wrong).0);

        for (i, a) in pitches.iter().enumerate() {
            for b in &pitches[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
