pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod playback;
pub mod sequence;
pub mod session;
pub mod signal;
pub mod surfaces;
pub mod validator;


// Re-exports for convenience
pub use config::GameConfig;
pub use controller::{GAME_OVER_MESSAGE, GameController, InputEvent};
pub use error::ConfigError;
pub use events::{EventTap, GameEvent, event_channel};
pub use playback::{Effect, TimedEffect, schedule};
pub use session::{GamePhase, GameSession};
pub use signal::{Signal, signal_for_key};
pub use surfaces::{AudioCue, AudioSurface, DisplaySurface, NullAudio};
pub use validator::{Verdict, submit};
