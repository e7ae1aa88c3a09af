pub mod audio;
pub mod input;
pub mod logging;
pub mod terminal;

pub use audio::ToneAudio;
pub use terminal::TerminalDisplay;
