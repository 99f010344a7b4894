//! Block library - precomputed ring designs
//!
//! Each block is a balanced design for an exact number of players and rings:
//! rows are rounds, columns are players, and each cell is the ring (colour
//! code 1..) the player competes in that round, or 0 for a bye. Every player
//! in every block plays six times.
//!
//! Level 4 - Static data

use fixturegen_core::Colour;

/// Ring counts with designs available
pub const SUPPORTED_RINGS: [usize; 2] = [5, 6];

struct RawBlock {
    players: usize,
    plays: &'static [u8],
}

/// A design for one (rings, players) pair
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    rings: usize,
    players: usize,
    plays: &'static [u8],
}

impl Block {
    pub fn rings(&self) -> usize {
        self.rings
    }

    pub fn players(&self) -> usize {
        self.players
    }

    /// Number of rounds in the design
    pub fn games(&self) -> usize {
        self.plays.len() / self.players
    }

    /// Colour codes for each round, one per player
    pub fn rows(&self) -> impl Iterator<Item = &'static [u8]> {
        self.plays.chunks(self.players)
    }

    /// Ring colour of `player` in round `game` (`Colour::None` for a bye)
    pub fn colour(&self, game: usize, player: usize) -> Colour {
        self.plays
            .get(game * self.players + player)
            .filter(|_| player < self.players)
            .and_then(|&code| Colour::from_code(code))
            .unwrap_or(Colour::None)
    }
}

pub fn is_supported_ring_count(rings: usize) -> bool {
    SUPPORTED_RINGS.contains(&rings)
}

/// Look up the design for `players` in `rings` rings
pub fn block(rings: usize, players: usize) -> Option<Block> {
    raw_blocks(rings)
        .iter()
        .find(|raw| raw.players == players)
        .map(|raw| Block {
            rings,
            players: raw.players,
            plays: raw.plays,
        })
}

/// Player counts with a design for `rings`, smallest first (empty if unsupported)
pub fn block_sizes(rings: usize) -> Vec<usize> {
    raw_blocks(rings).iter().map(|raw| raw.players).collect()
}

fn raw_blocks(rings: usize) -> &'static [RawBlock] {
    match rings {
        5 => &FIVE_RINGS,
        6 => &SIX_RINGS,
        _ => &[],
    }
}

// ============================================================================
// Designs
// ============================================================================

/// 5-ring designs, smallest first
static FIVE_RINGS: [RawBlock; 9] = [
    RawBlock {
        players: 16,
        plays: &[
            1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 0,
            1, 2, 5, 0, 1, 5, 2, 4, 3, 4, 5, 3, 2, 3, 4, 1,
            5, 1, 0, 2, 3, 4, 2, 3, 1, 1, 3, 5, 5, 2, 4, 4,
            3, 1, 4, 3, 1, 5, 2, 4, 0, 5, 2, 1, 4, 5, 3, 2,
            4, 1, 3, 5, 3, 4, 3, 4, 2, 5, 2, 0, 5, 1, 2, 1,
            2, 1, 3, 1, 4, 5, 5, 1, 4, 3, 2, 5, 4, 2, 0, 3,
            0, 0, 1, 2, 0, 0, 0, 0, 2, 0, 0, 1, 0, 0, 1, 2,
        ],
    },
    RawBlock {
        players: 17,
        plays: &[
            1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 0, 0,
            1, 2, 3, 5, 3, 4, 0, 4, 0, 1, 4, 5, 1, 2, 3, 2, 5,
            2, 5, 4, 2, 1, 5, 5, 4, 2, 1, 3, 0, 4, 0, 3, 3, 1,
            3, 0, 5, 2, 3, 4, 5, 2, 1, 5, 0, 1, 1, 4, 2, 3, 4,
            5, 1, 0, 3, 4, 2, 4, 0, 2, 3, 1, 5, 4, 3, 5, 2, 1,
            0, 4, 5, 4, 0, 5, 2, 1, 3, 1, 2, 5, 4, 2, 3, 1, 3,
            1, 3, 2, 0, 3, 0, 4, 1, 2, 0, 2, 3, 0, 1, 0, 4, 4,
        ],
    },
    RawBlock {
        players: 18,
        plays: &[
            1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 0, 0, 0,
            0, 3, 5, 2, 3, 4, 1, 2, 4, 0, 1, 5, 5, 0, 4, 1, 2, 3,
            1, 5, 2, 0, 3, 2, 5, 2, 0, 3, 4, 5, 0, 4, 1, 1, 3, 4,
            5, 0, 4, 4, 2, 1, 0, 3, 2, 3, 4, 5, 1, 2, 0, 3, 1, 5,
            5, 1, 4, 3, 0, 2, 3, 5, 4, 2, 0, 0, 5, 2, 3, 1, 1, 4,
            5, 4, 2, 4, 1, 0, 2, 0, 5, 2, 5, 0, 1, 4, 3, 1, 3, 3,
            2, 3, 0, 5, 1, 3, 2, 1, 5, 4, 3, 5, 4, 0, 1, 0, 2, 4,
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0,
        ],
    },
    RawBlock {
        players: 19,
        plays: &[
            1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 0, 0, 0, 0,
            2, 0, 0, 2, 5, 4, 3, 2, 0, 1, 5, 3, 3, 1, 0, 1, 4, 4, 5,
            5, 1, 4, 0, 0, 1, 3, 1, 5, 5, 3, 0, 4, 0, 2, 2, 4, 3, 2,
            2, 4, 5, 4, 3, 0, 2, 0, 1, 0, 1, 3, 4, 3, 2, 0, 1, 5, 5,
            5, 0, 4, 3, 4, 1, 0, 2, 0, 2, 0, 1, 2, 5, 4, 3, 3, 5, 1,
            0, 1, 0, 4, 0, 3, 4, 5, 3, 2, 5, 1, 0, 4, 5, 3, 2, 1, 2,
            4, 2, 3, 5, 1, 4, 2, 1, 5, 0, 3, 0, 4, 3, 0, 2, 1, 0, 5,
            0, 2, 1, 0, 2, 0, 0, 0, 3, 2, 0, 1, 0, 0, 3, 1, 0, 3, 0,
        ],
    },
    RawBlock {
        players: 20,
        plays: &[
            1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 0, 0, 0, 0, 0,
            1, 2, 0, 0, 0, 4, 3, 4, 5, 2, 3, 4, 0, 1, 3, 1, 2, 5, 5, 0,
            5, 0, 4, 2, 3, 5, 1, 0, 0, 4, 5, 2, 1, 0, 0, 4, 1, 2, 3, 3,
            0, 5, 0, 2, 1, 3, 0, 1, 3, 0, 0, 4, 4, 1, 2, 5, 2, 5, 4, 3,
            4, 3, 5, 4, 0, 5, 4, 2, 1, 1, 3, 0, 3, 1, 2, 0, 5, 0, 0, 2,
            0, 2, 3, 0, 5, 0, 0, 4, 5, 0, 3, 1, 4, 3, 2, 5, 1, 4, 2, 1,
            1, 0, 2, 2, 1, 3, 5, 4, 2, 3, 4, 0, 0, 0, 0, 4, 1, 5, 3, 5,
            3, 5, 4, 2, 5, 0, 1, 0, 0, 3, 0, 5, 3, 1, 4, 2, 0, 4, 1, 2,
        ],
    },
    RawBlock {
        players: 21,
        plays: &[
            1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 0, 0, 0, 0, 0, 0,
            0, 0, 3, 0, 2, 5, 1, 4, 5, 0, 5, 0, 1, 2, 0, 1, 2, 3, 3, 4, 4,
            2, 3, 0, 3, 1, 0, 1, 0, 0, 4, 5, 2, 0, 4, 3, 5, 2, 5, 0, 4, 1,
            0, 3, 2, 5, 3, 1, 0, 4, 2, 5, 0, 3, 2, 0, 4, 5, 4, 0, 1, 0, 1,
            3, 5, 0, 2, 4, 1, 5, 0, 2, 0, 4, 0, 4, 3, 1, 0, 0, 5, 2, 1, 3,
            4, 5, 2, 0, 0, 3, 0, 3, 5, 3, 2, 1, 1, 0, 0, 4, 5, 0, 4, 1, 2,
            0, 0, 0, 5, 4, 3, 3, 5, 1, 2, 0, 3, 0, 5, 4, 4, 2, 1, 2, 1, 0,
            1, 4, 3, 1, 0, 0, 3, 2, 0, 0, 2, 0, 1, 3, 0, 4, 5, 5, 2, 4, 5,
            2, 0, 1, 0, 0, 0, 0, 0, 0, 2, 0, 1, 0, 0, 1, 0, 0, 2, 0, 0, 0,
        ],
    },
    RawBlock {
        players: 22,
        plays: &[
            1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 0, 0, 0, 0, 0, 0, 0,
            0, 3, 0, 4, 0, 0, 0, 5, 0, 5, 0, 4, 2, 5, 1, 1, 1, 2, 2, 3, 3, 4,
            5, 3, 4, 0, 1, 4, 5, 0, 1, 0, 1, 2, 0, 0, 2, 3, 4, 3, 5, 2, 0, 0,
            3, 0, 5, 1, 2, 0, 0, 2, 0, 3, 4, 0, 3, 5, 4, 0, 1, 0, 5, 1, 4, 2,
            5, 1, 0, 0, 0, 4, 4, 0, 5, 0, 2, 1, 2, 1, 0, 2, 3, 5, 0, 4, 3, 3,
            2, 3, 5, 5, 4, 2, 3, 2, 0, 1, 0, 0, 3, 0, 1, 4, 0, 5, 4, 0, 0, 1,
            0, 0, 1, 2, 0, 5, 1, 2, 4, 0, 3, 5, 0, 4, 0, 1, 4, 5, 0, 3, 2, 3,
            4, 2, 0, 4, 2, 3, 0, 0, 1, 5, 4, 0, 1, 0, 2, 3, 5, 0, 5, 0, 3, 1,
            0, 0, 3, 0, 3, 0, 2, 1, 4, 3, 0, 4, 0, 2, 0, 0, 0, 1, 4, 1, 2, 0,
        ],
    },
    RawBlock {
        players: 23,
        plays: &[
            1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 1, 4, 5, 3, 0, 3, 4, 0, 0, 0, 2, 0, 0, 5, 1, 1, 2, 2, 3, 4, 5, 0,
            5, 1, 0, 2, 0, 1, 0, 0, 2, 4, 3, 0, 4, 1, 0, 5, 3, 2, 0, 0, 3, 4, 5,
            0, 2, 5, 0, 2, 1, 4, 2, 3, 5, 1, 3, 1, 4, 5, 0, 0, 0, 4, 3, 0, 0, 0,
            4, 0, 2, 3, 1, 0, 0, 0, 1, 5, 3, 0, 0, 5, 0, 1, 4, 2, 0, 3, 5, 4, 2,
            0, 2, 0, 0, 0, 4, 4, 1, 2, 0, 0, 5, 0, 1, 3, 4, 5, 0, 2, 3, 3, 1, 5,
            1, 0, 4, 5, 4, 1, 3, 2, 0, 2, 4, 0, 5, 0, 3, 0, 0, 1, 0, 2, 5, 0, 3,
            4, 3, 5, 0, 2, 0, 0, 0, 4, 4, 1, 2, 3, 0, 2, 1, 5, 3, 5, 0, 0, 1, 0,
            2, 0, 0, 3, 0, 5, 1, 4, 0, 0, 0, 3, 4, 3, 0, 4, 1, 1, 2, 2, 5, 0, 5,
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1,
        ],
    },
    RawBlock {
        players: 24,
        plays: &[
            1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0, 2, 4, 0, 5, 0, 0, 1, 5, 1, 0, 0, 1, 2, 2, 3, 3, 3, 4, 4, 5,
            5, 2, 1, 1, 0, 0, 2, 0, 3, 5, 0, 0, 0, 4, 5, 3, 4, 0, 3, 1, 0, 4, 0, 2,
            1, 0, 5, 0, 5, 3, 1, 4, 0, 0, 3, 2, 5, 0, 0, 4, 0, 2, 0, 4, 1, 0, 2, 3,
            4, 1, 2, 5, 0, 0, 0, 0, 1, 3, 0, 4, 0, 4, 5, 0, 2, 3, 2, 0, 5, 3, 1, 0,
            5, 4, 0, 0, 3, 4, 2, 0, 0, 0, 2, 0, 4, 0, 3, 1, 0, 5, 5, 2, 1, 1, 0, 3,
            0, 5, 1, 5, 4, 2, 0, 4, 2, 2, 0, 3, 0, 1, 3, 3, 5, 0, 0, 0, 4, 0, 1, 0,
            1, 0, 0, 4, 0, 0, 3, 2, 0, 5, 2, 0, 1, 3, 0, 0, 2, 4, 3, 5, 0, 1, 5, 4,
            0, 3, 2, 0, 3, 5, 0, 0, 1, 0, 0, 1, 4, 0, 2, 5, 1, 5, 0, 3, 4, 2, 0, 4,
            0, 0, 0, 1, 0, 0, 1, 2, 3, 2, 3, 0, 0, 3, 0, 0, 0, 0, 2, 0, 0, 0, 1, 0,
        ],
    },
];

/// 6-ring designs, smallest first
static SIX_RINGS: [RawBlock; 10] = [
    RawBlock {
        players: 18,
        plays: &[
            1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6,
            1, 3, 4, 1, 2, 3, 3, 5, 6, 2, 4, 5, 1, 4, 6, 2, 5, 6,
            2, 3, 4, 1, 2, 6, 5, 1, 3, 6, 2, 5, 4, 1, 5, 3, 6, 4,
            5, 3, 4, 2, 3, 6, 4, 1, 6, 1, 6, 2, 1, 3, 5, 4, 5, 2,
            1, 5, 2, 5, 2, 3, 4, 6, 1, 5, 4, 3, 3, 1, 6, 6, 2, 4,
            2, 3, 5, 6, 1, 5, 2, 1, 6, 2, 3, 4, 3, 4, 5, 4, 6, 1,
        ],
    },
    RawBlock {
        players: 19,
        plays: &[
            1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6, 0,
            1, 2, 5, 1, 3, 4, 0, 4, 5, 4, 6, 5, 1, 2, 6, 2, 3, 6, 3,
            5, 2, 6, 4, 2, 0, 1, 6, 3, 2, 3, 4, 1, 5, 6, 1, 3, 5, 4,
            5, 1, 6, 1, 4, 3, 5, 4, 0, 6, 2, 5, 3, 2, 1, 6, 3, 4, 2,
            5, 6, 3, 2, 3, 1, 4, 5, 2, 4, 1, 6, 3, 2, 0, 1, 6, 4, 5,
            2, 1, 5, 4, 2, 6, 5, 4, 3, 3, 4, 6, 3, 5, 6, 2, 0, 1, 1,
            0, 0, 0, 0, 0, 2, 1, 0, 2, 0, 0, 0, 0, 0, 1, 0, 1, 0, 2,
        ],
    },
    RawBlock {
        players: 20,
        plays: &[
            1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6, 0, 0,
            2, 3, 6, 1, 3, 5, 3, 4, 6, 1, 4, 5, 1, 2, 4, 0, 0, 5, 2, 6,
            2, 1, 0, 1, 3, 5, 4, 2, 5, 2, 5, 3, 0, 6, 4, 1, 6, 4, 3, 6,
            2, 3, 6, 0, 1, 4, 2, 5, 1, 4, 6, 5, 1, 0, 3, 2, 3, 6, 4, 5,
            0, 1, 3, 5, 2, 3, 6, 1, 0, 2, 6, 5, 3, 1, 5, 2, 6, 4, 4, 4,
            6, 5, 2, 3, 0, 6, 4, 3, 1, 1, 5, 4, 4, 2, 0, 2, 3, 1, 5, 6,
            1, 0, 3, 2, 1, 0, 0, 0, 2, 0, 0, 0, 4, 2, 3, 4, 1, 0, 3, 4,
        ],
    },
    RawBlock {
        players: 21,
        plays: &[
            1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6, 0, 0, 0,
            2, 3, 4, 3, 4, 5, 0, 1, 4, 3, 5, 6, 2, 5, 6, 0, 0, 2, 1, 1, 6,
            0, 3, 6, 4, 3, 2, 1, 2, 0, 2, 0, 1, 3, 4, 6, 5, 6, 1, 4, 5, 5,
            6, 3, 0, 1, 2, 5, 2, 1, 6, 0, 6, 3, 4, 2, 0, 1, 3, 5, 4, 5, 4,
            5, 0, 4, 1, 3, 4, 5, 0, 2, 6, 1, 3, 1, 0, 2, 3, 6, 2, 4, 5, 6,
            6, 2, 3, 0, 0, 0, 4, 1, 5, 3, 2, 6, 5, 3, 4, 4, 5, 1, 6, 2, 1,
            1, 6, 4, 1, 3, 2, 5, 4, 2, 5, 4, 0, 0, 6, 3, 2, 1, 0, 5, 3, 6,
        ],
    },
    RawBlock {
        players: 22,
        plays: &[
            1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6, 0, 0, 0, 0,
            0, 5, 6, 1, 4, 6, 2, 4, 5, 0, 2, 3, 0, 1, 2, 0, 3, 6, 1, 3, 4, 5,
            1, 6, 0, 6, 3, 0, 3, 2, 1, 6, 5, 2, 2, 4, 0, 1, 5, 4, 5, 3, 0, 4,
            4, 0, 5, 0, 6, 1, 4, 0, 0, 4, 1, 2, 1, 6, 5, 3, 6, 2, 5, 3, 2, 3,
            4, 1, 6, 4, 3, 1, 6, 1, 3, 5, 3, 2, 4, 0, 2, 2, 0, 0, 5, 5, 6, 0,
            6, 5, 1, 3, 0, 2, 0, 4, 3, 4, 6, 0, 0, 5, 3, 5, 1, 4, 2, 6, 2, 1,
            6, 5, 0, 4, 6, 1, 2, 4, 3, 0, 0, 5, 2, 3, 1, 4, 2, 6, 5, 0, 3, 1,
            0, 0, 1, 0, 0, 0, 0, 0, 0, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 2, 2,
        ],
    },
    RawBlock {
        players: 23,
        plays: &[
            1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6, 0, 0, 0, 0, 0,
            1, 3, 6, 0, 1, 0, 4, 2, 5, 0, 0, 2, 5, 6, 2, 6, 0, 4, 1, 3, 3, 4, 5,
            4, 0, 2, 5, 6, 3, 5, 2, 0, 1, 6, 4, 3, 0, 1, 0, 5, 2, 3, 1, 4, 6, 0,
            4, 3, 1, 0, 0, 6, 0, 5, 1, 3, 2, 0, 4, 2, 0, 3, 4, 6, 5, 6, 1, 5, 2,
            0, 2, 1, 6, 2, 3, 4, 3, 2, 1, 5, 6, 0, 4, 5, 5, 1, 0, 0, 6, 4, 0, 3,
            4, 2, 0, 5, 3, 2, 3, 0, 1, 6, 2, 3, 5, 1, 0, 5, 0, 6, 1, 0, 6, 4, 4,
            3, 0, 5, 1, 2, 0, 4, 6, 3, 1, 3, 0, 4, 0, 5, 0, 6, 2, 1, 4, 6, 5, 2,
            0, 1, 0, 2, 0, 3, 0, 0, 0, 0, 0, 3, 0, 1, 2, 3, 4, 0, 4, 4, 0, 1, 2,
        ],
    },
    RawBlock {
        players: 24,
        plays: &[
            1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6, 0, 0, 0, 0, 0, 0,
            0, 2, 3, 0, 0, 5, 0, 0, 1, 4, 3, 1, 1, 5, 0, 2, 3, 6, 2, 4, 4, 5, 6, 6,
            1, 0, 5, 3, 6, 1, 6, 5, 3, 3, 0, 0, 4, 2, 1, 4, 0, 0, 2, 4, 0, 6, 2, 5,
            4, 2, 5, 3, 6, 0, 4, 0, 6, 1, 6, 2, 0, 5, 3, 0, 1, 4, 0, 3, 5, 2, 1, 0,
            4, 5, 2, 6, 2, 1, 0, 1, 0, 0, 5, 4, 2, 0, 5, 3, 0, 6, 6, 0, 1, 3, 3, 4,
            2, 5, 0, 6, 3, 0, 5, 3, 1, 4, 2, 0, 0, 3, 0, 4, 6, 0, 1, 1, 6, 2, 5, 4,
            5, 3, 6, 0, 0, 3, 6, 5, 3, 5, 0, 2, 4, 2, 1, 0, 1, 2, 1, 6, 4, 0, 0, 4,
            0, 0, 0, 4, 2, 3, 4, 6, 0, 0, 3, 6, 1, 0, 5, 3, 1, 2, 6, 2, 5, 1, 5, 4,
        ],
    },
    RawBlock {
        players: 25,
        plays: &[
            1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6, 0, 0, 0, 0, 0, 0, 0,
            2, 3, 0, 6, 3, 4, 6, 1, 0, 0, 0, 0, 5, 6, 0, 5, 2, 0, 1, 1, 2, 3, 4, 4, 5,
            0, 4, 1, 6, 0, 5, 0, 0, 5, 3, 4, 1, 3, 0, 2, 4, 2, 5, 3, 0, 0, 6, 6, 2, 1,
            1, 0, 0, 4, 2, 0, 1, 5, 4, 1, 4, 3, 0, 5, 2, 0, 3, 2, 0, 6, 6, 3, 0, 6, 5,
            2, 3, 5, 0, 0, 4, 3, 0, 2, 0, 6, 2, 1, 5, 0, 4, 6, 1, 4, 6, 1, 5, 3, 0, 0,
            0, 1, 5, 5, 3, 6, 6, 2, 0, 4, 0, 2, 0, 0, 4, 2, 0, 1, 3, 6, 0, 4, 3, 5, 1,
            4, 0, 3, 0, 1, 0, 1, 4, 6, 5, 2, 0, 2, 6, 0, 1, 3, 5, 3, 5, 6, 0, 4, 2, 0,
            4, 3, 0, 6, 2, 3, 0, 1, 0, 3, 5, 2, 2, 4, 6, 0, 0, 0, 4, 0, 5, 1, 5, 1, 6,
            0, 0, 2, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 1, 2, 0, 0, 0, 1,
        ],
    },
    RawBlock {
        players: 26,
        plays: &[
            1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6, 0, 0, 0, 0, 0, 0, 0, 0,
            5, 3, 4, 6, 0, 0, 1, 0, 0, 0, 6, 0, 1, 3, 0, 4, 0, 6, 1, 2, 2, 2, 3, 4, 5, 5,
            0, 3, 0, 0, 2, 1, 4, 1, 2, 6, 5, 4, 3, 4, 5, 0, 2, 0, 6, 1, 0, 5, 0, 0, 3, 6,
            2, 0, 1, 3, 4, 0, 0, 2, 0, 3, 0, 2, 0, 0, 4, 5, 3, 1, 5, 4, 6, 0, 6, 6, 5, 1,
            0, 6, 3, 0, 6, 1, 4, 5, 1, 2, 6, 3, 2, 1, 0, 0, 4, 0, 5, 3, 5, 2, 4, 0, 0, 0,
            2, 6, 1, 5, 0, 4, 4, 0, 1, 3, 0, 6, 0, 0, 3, 2, 0, 6, 0, 0, 1, 2, 3, 5, 4, 5,
            5, 0, 0, 4, 2, 5, 0, 2, 6, 0, 1, 0, 2, 4, 0, 4, 1, 0, 5, 6, 0, 3, 3, 6, 1, 3,
            0, 2, 5, 0, 5, 1, 3, 0, 0, 2, 1, 6, 6, 4, 3, 0, 6, 4, 5, 0, 1, 0, 0, 2, 4, 3,
            2, 0, 0, 2, 0, 0, 0, 4, 1, 0, 0, 0, 0, 0, 3, 1, 0, 3, 0, 2, 3, 4, 1, 4, 0, 0,
        ],
    },
    RawBlock {
        players: 27,
        plays: &[
            1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 5, 6, 3, 2, 6, 6, 0, 0, 5, 0, 0, 0, 0, 0, 2, 0, 1, 1, 1, 2, 3, 3, 4, 4, 4, 5,
            2, 0, 0, 0, 3, 5, 0, 6, 3, 0, 5, 4, 2, 3, 1, 0, 4, 0, 2, 6, 6, 0, 1, 5, 1, 0, 4,
            0, 2, 4, 2, 0, 6, 3, 6, 1, 1, 2, 5, 0, 0, 4, 6, 3, 5, 0, 0, 0, 4, 0, 1, 5, 3, 0,
            2, 0, 0, 0, 3, 0, 6, 1, 0, 6, 4, 0, 1, 4, 2, 2, 0, 5, 4, 3, 6, 0, 3, 0, 1, 5, 5,
            4, 5, 1, 1, 0, 2, 0, 4, 2, 0, 0, 4, 3, 1, 0, 3, 5, 0, 2, 6, 5, 6, 0, 6, 0, 0, 3,
            3, 2, 0, 4, 3, 0, 2, 0, 0, 4, 1, 5, 0, 0, 4, 0, 6, 1, 5, 0, 5, 6, 1, 2, 6, 3, 0,
            0, 3, 4, 5, 0, 1, 0, 6, 2, 0, 2, 1, 5, 3, 0, 3, 0, 0, 0, 5, 2, 6, 1, 0, 4, 6, 4,
            2, 0, 5, 0, 3, 0, 2, 0, 1, 4, 0, 0, 6, 4, 3, 0, 5, 1, 5, 4, 0, 1, 6, 3, 0, 6, 2,
        ],
    },
];
