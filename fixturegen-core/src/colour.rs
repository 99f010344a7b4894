//! Lane colours

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a slot within a game.
///
/// `None` is a bye, `Referee` is the non-competing lane. The remaining
/// variants are competing lanes, numbered 1.. in the order below.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Colour {
    None,
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Pink,
    Cyan,
    Orange,
    White,
    Referee,
}

/// Competing colours indexed by code - 1
const COMPETING: [Colour; 9] = [
    Colour::Red,
    Colour::Blue,
    Colour::Green,
    Colour::Yellow,
    Colour::Purple,
    Colour::Pink,
    Colour::Cyan,
    Colour::Orange,
    Colour::White,
];

impl Colour {
    /// Map a numeric lane code to a colour (0 = bye).
    ///
    /// Returns `None` for codes with no colour.
    pub fn from_code(code: u8) -> Option<Colour> {
        match code {
            0 => Some(Colour::None),
            n => COMPETING.get(n as usize - 1).copied(),
        }
    }

    /// Numeric lane code, or `None` for the referee lane
    pub fn code(self) -> Option<u8> {
        match self {
            Colour::None => Some(0),
            Colour::Referee => None,
            c => COMPETING.iter().position(|&x| x == c).map(|i| i as u8 + 1),
        }
    }

    /// True for lanes where the team actually plays
    pub fn is_competing(self) -> bool {
        !matches!(self, Colour::None | Colour::Referee)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
