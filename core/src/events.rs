//! Engine event stream
//!
//! Signals emitted by the controller for anything observing the game from
//! outside: frontends, logs, tests. These describe "interesting things
//! that happened" one level above individual display effects.

use tokio::sync::mpsc;

use crate::signal::Signal;

/// Events emitted by the game controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A level's playback is about to begin.
    LevelStarted { level: u32 },
    /// Playback finished; input is open.
    PlaybackFinished,
    /// A correct choice was recorded.
    ChoiceAccepted { signal: Signal },
    /// The full pattern was reproduced.
    LevelCompleted { level: u32 },
    /// A mismatch ended the game at this level.
    GameOver { level: u32 },
    /// The session was re-initialized.
    Restarted { epoch: u64 },
}

impl GameEvent {
    /// Discriminant name, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LevelStarted { .. } => "LevelStarted",
            Self::PlaybackFinished => "PlaybackFinished",
            Self::ChoiceAccepted { .. } => "ChoiceAccepted",
            Self::LevelCompleted { .. } => "LevelCompleted",
            Self::GameOver { .. } => "GameOver",
            Self::Restarted { .. } => "Restarted",
        }
    }
}

/// Sender handle for observing game events.
pub type EventTap = mpsc::UnboundedSender<GameEvent>;

/// Create a new event channel.
pub fn event_channel() -> (EventTap, mpsc::UnboundedReceiver<GameEvent>) {
    mpsc::unbounded_channel()
}
