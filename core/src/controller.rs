//! Game controller
//!
//! Orchestrates the loop: extend the pattern, play it back, collect input,
//! validate, advance or end. All user input arrives on one mpsc channel
//! and is processed one event at a time, so input can never race playback
//! or another input. Playback is awaited inline; nothing scheduled by one
//! game can fire into the next.

use rand::rngs::StdRng;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::events::{EventTap, GameEvent};
use crate::playback;
use crate::session::{GamePhase, GameSession};
use crate::signal::Signal;
use crate::surfaces::{AudioCue, AudioSurface, DisplaySurface};
use crate::validator::{self, Verdict};

/// Banner shown when a mismatch ends the game.
pub const GAME_OVER_MESSAGE: &str =
    "You lost! Listen to Simon next time... Press any key to start again.";

/// One user input event, as raised by the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A pad was pressed (pointer or key alias).
    Press(Signal),
    /// Any other input; only meaningful on the game-over screen.
    Any,
}

/// Owns the session and the collaborator surfaces, and runs the game.
pub struct GameController {
    session: GameSession,
    config: GameConfig,
    display: Box<dyn DisplaySurface>,
    audio: Box<dyn AudioSurface>,
    rng: StdRng,
    input_rx: mpsc::Receiver<InputEvent>,
    event_tap: Option<EventTap>,
}

impl GameController {
    pub fn new(
        config: GameConfig,
        display: Box<dyn DisplaySurface>,
        audio: Box<dyn AudioSurface>,
        rng: StdRng,
        input_rx: mpsc::Receiver<InputEvent>,
    ) -> Self {
        Self {
            session: GameSession::new(),
            config,
            display,
            audio,
            rng,
            input_rx,
            event_tap: None,
        }
    }

    /// Attach an observer for [`GameEvent`]s.
    pub fn with_event_tap(mut self, tap: EventTap) -> Self {
        self.event_tap = Some(tap);
        self
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Run the game until the input source goes away.
    ///
    /// Starts level 1 immediately, then serializes every input event
    /// through the state machine. Closing the input channel ends the run.
    pub async fn run(mut self) {
        info!("game session starting");
        self.start_level().await;

        while let Some(event) = self.input_rx.recv().await {
            self.handle_input(event).await;
        }

        info!(level = self.session.level(), "input source closed, session over");
    }

    /// Extend the pattern and show it, then open input.
    pub(crate) async fn start_level(&mut self) {
        let drawn = self.session.begin_showing(&mut self.rng);
        let level = self.session.level();
        debug!(level, %drawn, length = self.session.sequence().len(), "showing sequence");

        self.display.show_message(&format!("Level {level}"));
        self.display.render_choice_trail(self.session.choices());
        self.emit(GameEvent::LevelStarted { level });

        playback::play(
            self.session.sequence(),
            self.config.interval(),
            self.display.as_mut(),
        )
        .await;
        self.session.playback_finished();

        // Input that arrived during playback is dropped, never replayed.
        while self.input_rx.try_recv().is_ok() {}

        self.emit(GameEvent::PlaybackFinished);
    }

    pub(crate) async fn handle_input(&mut self, event: InputEvent) {
        match self.session.phase() {
            // Any input restarts after a loss.
            GamePhase::GameOver => self.restart().await,
            GamePhase::AwaitingInput => {
                if let InputEvent::Press(signal) = event {
                    self.accept_press(signal).await;
                }
            }
            // Idle, ShowingSequence, LevelComplete: input has no effect.
            _ => {}
        }
    }

    async fn accept_press(&mut self, signal: Signal) {
        let verdict = validator::submit(&mut self.session, signal);
        if verdict == Verdict::Ignored {
            return;
        }

        // The pressed pad always gives its own feedback first, even when
        // the press is wrong; the failure cue follows it.
        self.audio.play(AudioCue::Signal(signal));
        self.flash(signal).await;

        match verdict {
            Verdict::Continue => {
                self.display.render_choice_trail(self.session.choices());
                self.emit(GameEvent::ChoiceAccepted { signal });
            }
            Verdict::LevelComplete => {
                self.display.render_choice_trail(self.session.choices());
                self.emit(GameEvent::ChoiceAccepted { signal });

                let level = self.session.level();
                self.session.level_complete();
                debug!(level, "level complete");
                self.emit(GameEvent::LevelCompleted { level });

                // Let the UI settle before the next playback.
                tokio::time::sleep(self.config.level_pause()).await;
                self.session.advance_level();
                self.start_level().await;
            }
            Verdict::Mismatch => {
                let level = self.session.level();
                self.session.game_over();
                info!(level, expected = %self.session.sequence()[self.session.choices().len() - 1], got = %signal, "mismatch, game over");

                self.audio.play(AudioCue::Wrong);
                self.display.show_message(GAME_OVER_MESSAGE);
                self.emit(GameEvent::GameOver { level });
            }
            Verdict::Ignored => {}
        }
    }

    /// Brief press feedback on the pad itself.
    async fn flash(&mut self, signal: Signal) {
        self.display.activate(signal);
        tokio::time::sleep(self.config.flash()).await;
        self.display.deactivate(signal);
    }

    /// Full re-initialization followed by a fresh level 1.
    async fn restart(&mut self) {
        self.session.reset();
        info!(game = self.session.epoch(), "restarting");
        self.emit(GameEvent::Restarted {
            epoch: self.session.epoch(),
        });
        self.start_level().await;
    }

    fn emit(&self, event: GameEvent) {
        debug!(event = event.name(), ?event, "game event");
        if let Some(tap) = &self.event_tap {
            let _ = tap.send(event);
        }
    }
}
