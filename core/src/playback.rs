//! Playback scheduling
//!
//! The pattern is shown as a fixed-rate series of activate/deactivate
//! effects. Schedule construction is pure data so the timing contract can
//! be tested without timers; [`play`] drives a schedule against the tokio
//! clock and resolves once the final deactivate has fired.

use std::time::Duration;

use crate::signal::Signal;
use crate::surfaces::DisplaySurface;

/// A single display effect within a playback run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Activate(Signal),
    Deactivate(Signal),
}

/// An effect with its offset from playback start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedEffect {
    pub offset: Duration,
    pub effect: Effect,
    /// Set on the final deactivate; firing it completes playback.
    pub last: bool,
}

/// Build the effect schedule for one playback of `sequence`.
///
/// Element `i` activates at `i * 2D` and deactivates at `i * 2D + D`,
/// where `D` is `interval`. Offsets are strictly increasing, so no two
/// pads are ever lit at once.
pub fn schedule(sequence: &[Signal], interval: Duration) -> Vec<TimedEffect> {
    let mut effects = Vec::with_capacity(sequence.len() * 2);

    for (i, &signal) in sequence.iter().enumerate() {
        let activate_at = interval * (2 * i as u32);
        effects.push(TimedEffect {
            offset: activate_at,
            effect: Effect::Activate(signal),
            last: false,
        });
        effects.push(TimedEffect {
            offset: activate_at + interval,
            effect: Effect::Deactivate(signal),
            last: i == sequence.len() - 1,
        });
    }

    effects
}

/// Play `sequence` on the display, one effect at a time.
///
/// Suspends between effects; resolves once the effect flagged `last` has
/// fired. Effects are fire-and-forget: the display gets no chance to fail
/// or to push back.
pub async fn play(sequence: &[Signal], interval: Duration, display: &mut dyn DisplaySurface) {
    run(schedule(sequence, interval), display).await;
}

async fn run(effects: Vec<TimedEffect>, display: &mut dyn DisplaySurface) {
    let start = tokio::time::Instant::now();

    for timed in effects {
        tokio::time::sleep_until(start + timed.offset).await;
        match timed.effect {
            Effect::Activate(signal) => display.activate(signal),
            Effect::Deactivate(signal) => display.deactivate(signal),
        }
        if timed.last {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::Signal::{Blue, Green, Red};

    const D: Duration = Duration::from_millis(200);

    #[test]
    fn empty_sequence_schedules_nothing() {
        assert!(schedule(&[], D).is_empty());
    }

    #[test]
    fn offsets_follow_the_contract() {
        let effects = schedule(&[Green, Red, Blue], D);

        let expected = [
            (0, Effect::Activate(Green), false),
            (200, Effect::Deactivate(Green), false),
            (400, Effect::Activate(Red), false),
            (600, Effect::Deactivate(Red), false),
            (800, Effect::Activate(Blue), false),
            (1000, Effect::Deactivate(Blue), true),
        ];

        assert_eq!(effects.len(), expected.len());
        for (timed, (ms, effect, last)) in effects.iter().zip(expected) {
            assert_eq!(timed.offset, Duration::from_millis(ms));
            assert_eq!(timed.effect, effect);
            assert_eq!(timed.last, last);
        }
    }

    #[test]
    fn offsets_strictly_increase() {
        let effects = schedule(&[Green, Green, Green, Green], D);
        for pair in effects.windows(2) {
            assert!(pair[0].offset < pair[1].offset);
        }
    }

    #[test]
    fn only_the_final_deactivate_is_last() {
        let effects = schedule(&[Red, Blue], D);
        let last_flags: Vec<bool> = effects.iter().map(|e| e.last).collect();
        assert_eq!(last_flags, [false, false, false, true]);
    }

    /// Records each effect with the paused-clock time it fired at.
    struct TimedRecorder {
        start: tokio::time::Instant,
        fired: Vec<(Duration, Effect)>,
    }

    impl TimedRecorder {
        fn new() -> Self {
            Self {
                start: tokio::time::Instant::now(),
                fired: Vec::new(),
            }
        }
    }

    impl DisplaySurface for TimedRecorder {
        fn activate(&mut self, signal: Signal) {
            self.fired
                .push((self.start.elapsed(), Effect::Activate(signal)));
        }

        fn deactivate(&mut self, signal: Signal) {
            self.fired
                .push((self.start.elapsed(), Effect::Deactivate(signal)));
        }

        fn render_choice_trail(&mut self, _choices: &[Signal]) {}

        fn show_message(&mut self, _text: &str) {}
    }

    #[tokio::test(start_paused = true)]
    async fn effects_fire_at_exact_offsets() {
        let mut recorder = TimedRecorder::new();
        play(&[Green, Red], D, &mut recorder).await;

        let expected = [
            (0, Effect::Activate(Green)),
            (200, Effect::Deactivate(Green)),
            (400, Effect::Activate(Red)),
            (600, Effect::Deactivate(Red)),
        ];

        assert_eq!(recorder.fired.len(), expected.len());
        for ((at, effect), (ms, want)) in recorder.fired.iter().zip(expected) {
            assert_eq!(*at, Duration::from_millis(ms));
            assert_eq!(*effect, want);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn completion_is_driven_by_the_last_flag() {
        let mut effects = schedule(&[Green, Red], D);
        // Flag green's deactivate as the end; red must never light.
        effects[1].last = true;

        let mut recorder = TimedRecorder::new();
        run(effects, &mut recorder).await;

        assert_eq!(
            recorder.fired,
            [
                (Duration::ZERO, Effect::Activate(Green)),
                (Duration::from_millis(200), Effect::Deactivate(Green)),
            ]
        );
    }
}
