//! Sequence generation
//!
//! One uniform draw per level, independent of every previous draw.
//! Repeats are allowed; a fair Simon is a repetitive Simon.

use rand::Rng;

use crate::signal::Signal;

/// Draw one signal uniformly from the fixed set.
pub fn draw(rng: &mut impl Rng) -> Signal {
    Signal::ALL[rng.gen_range(0..Signal::ALL.len())]
}

/// Append one fresh draw to the pattern, returning what was added.
pub fn extend(sequence: &mut Vec<Signal>, rng: &mut impl Rng) -> Signal {
    let drawn = draw(rng);
    sequence.push(drawn);
    drawn
}
