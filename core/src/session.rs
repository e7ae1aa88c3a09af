//! Game session state
//!
//! One `GameSession` owns the full mutable state of a game: the pattern
//! shown so far, the choices made this level, the level counter, and the
//! phase. Nothing else mutates it; the controller calls the transition
//! methods and every other component gets read-only views.

use rand::Rng;

use crate::sequence;
use crate::signal::Signal;

/// Which inputs the game currently accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Idle,
    ShowingSequence,
    AwaitingInput,
    LevelComplete,
    GameOver,
}

/// The owned state of one running game.
#[derive(Debug)]
pub struct GameSession {
    /// The full pattern shown so far; append-only within a game.
    sequence: Vec<Signal>,
    /// Choices made during the current level; cleared at each level start.
    choices: Vec<Signal>,
    level: u32,
    phase: GamePhase,
    /// Bumped on every reset, so state from a previous game is identifiable.
    epoch: u64,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            sequence: Vec::new(),
            choices: Vec::new(),
            level: 1,
            phase: GamePhase::Idle,
            epoch: 0,
        }
    }

    pub fn sequence(&self) -> &[Signal] {
        &self.sequence
    }

    pub fn choices(&self) -> &[Signal] {
        &self.choices
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Clear the choice log, extend the pattern by one fresh draw, and
    /// enter playback. Returns the drawn signal.
    pub fn begin_showing(&mut self, rng: &mut impl Rng) -> Signal {
        self.choices.clear();
        let drawn = sequence::extend(&mut self.sequence, rng);
        self.phase = GamePhase::ShowingSequence;
        drawn
    }

    /// Playback finished. Only honored while actually showing; a stale
    /// completion from a previous game changes nothing.
    pub fn playback_finished(&mut self) {
        if self.phase == GamePhase::ShowingSequence {
            self.phase = GamePhase::AwaitingInput;
        }
    }

    /// The full pattern was reproduced; input closes until the next level.
    pub fn level_complete(&mut self) {
        self.phase = GamePhase::LevelComplete;
    }

    /// Bump the level counter after a completed round.
    pub fn advance_level(&mut self) {
        self.level += 1;
        self.choices.clear();
    }

    pub fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
    }

    /// Full re-initialization: empty lists, level 1, idle phase, next epoch.
    pub fn reset(&mut self) {
        self.sequence.clear();
        self.choices.clear();
        self.level = 1;
        self.phase = GamePhase::Idle;
        self.epoch += 1;
    }

    pub(crate) fn record_choice(&mut self, signal: Signal) {
        self.choices.push(signal);
        debug_assert!(
            self.choices.len() <= self.sequence.len(),
            "choice log outgrew the sequence"
        );
    }
}
