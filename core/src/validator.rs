//! Input validation
//!
//! Compares each submitted signal against the expected position in the
//! pattern and decides whether the level continues, completes, or ends the
//! game. A wrong final press is a loss, not a win: the mismatch check runs
//! before the length check.

use crate::session::{GamePhase, GameSession};
use crate::signal::Signal;

/// Outcome of one submitted signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Right so far; more of the pattern remains.
    Continue,
    /// The whole pattern was reproduced.
    LevelComplete,
    /// Wrong signal; the game is over.
    Mismatch,
    /// Submitted outside the awaiting-input phase; state untouched.
    Ignored,
}

/// Validate one submitted signal against the session's pattern.
///
/// Outside `AwaitingInput` this is a no-op: the choice log is not touched
/// and `Ignored` is returned.
pub fn submit(session: &mut GameSession, signal: Signal) -> Verdict {
    if session.phase() != GamePhase::AwaitingInput {
        return Verdict::Ignored;
    }

    session.record_choice(signal);
    let position = session.choices().len() - 1;

    if session.sequence()[position] != signal {
        Verdict::Mismatch
    } else if session.choices().len() == session.sequence().len() {
        Verdict::LevelComplete
    } else {
        Verdict::Continue
    }
}
