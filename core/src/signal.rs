//! The fixed signal set
//!
//! Simon's stimuli are four colored pads. The set is closed: every other
//! part of the engine works in terms of `Signal`, and anything a frontend
//! reads from the outside world (key presses, config strings) has to pass
//! through `from_name` or the key alias table to become one.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four pads the game can light up and sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Green,
    Red,
    Blue,
    Yellow,
}

impl Signal {
    /// The full identifier set, in draw order.
    pub const ALL: [Signal; 4] = [Signal::Green, Signal::Red, Signal::Blue, Signal::Yellow];

    pub fn name(self) -> &'static str {
        match self {
            Signal::Green => "green",
            Signal::Red => "red",
            Signal::Blue => "blue",
            Signal::Yellow => "yellow",
        }
    }

    /// Parse an external identifier. Unknown names are rejected with `None`
    /// so malformed input can never reach the session state.
    pub fn from_name(name: &str) -> Option<Signal> {
        match name {
            "green" => Some(Signal::Green),
            "red" => Some(Signal::Red),
            "blue" => Some(Signal::Blue),
            "yellow" => Some(Signal::Yellow),
            _ => None,
        }
    }

    /// Position within [`Signal::ALL`].
    pub fn index(self) -> usize {
        match self {
            Signal::Green => 0,
            Signal::Red => 1,
            Signal::Blue => 2,
            Signal::Yellow => 3,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Default keyboard aliases: home-row keys, left to right.
static KEY_ALIASES: phf::Map<char, Signal> = phf::phf_map! {
    'a' => Signal::Green,
    's' => Signal::Red,
    'd' => Signal::Yellow,
    'f' => Signal::Blue,
};

/// Look up the signal bound to a key, if any.
pub fn signal_for_key(key: char) -> Option<Signal> {
    KEY_ALIASES.get(&key).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for signal in Signal::ALL {
            assert_eq!(Signal::from_name(signal.name()), Some(signal));
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(Signal::from_name("purple"), None);
        assert_eq!(Signal::from_name(""), None);
        assert_eq!(Signal::from_name("GREEN"), None);
    }

    #[test]
    fn key_aliases_cover_all_pads() {
        assert_eq!(signal_for_key('a'), Some(Signal::Green));
        assert_eq!(signal_for_key('s'), Some(Signal::Red));
        assert_eq!(signal_for_key('d'), Some(Signal::Yellow));
        assert_eq!(signal_for_key('f'), Some(Signal::Blue));
        assert_eq!(signal_for_key('g'), None);
    }

    #[test]
    fn index_matches_all_order() {
        for (i, signal) in Signal::ALL.into_iter().enumerate() {
            assert_eq!(signal.index(), i);
        }
    }
}
