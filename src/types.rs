use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two sides. Hosts decide how each side is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    First,
    Second,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Cell code used in snapshots: 1 for `First`, 2 for `Second`.
    pub fn code(self) -> u8 {
        match self {
            Player::First => 1,
            Player::Second => 2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::First => f.write_str("first player"),
            Player::Second => f.write_str("second player"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// 0=empty, 1=first, 2=second.
    pub fn code(self) -> u8 {
        self.player().map_or(0, Player::code)
    }
}

/// A board coordinate. Ordered row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A legal destination and every opponent stone it captures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Move {
    pub destination: Position,
    /// Contract: non-empty, deduplicated, row-major order.
    pub flips: Vec<Position>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EndReason {
    /// Every cell is occupied.
    BoardFull,
    /// Neither player has a legal move.
    NoMoves,
    /// A player gave up.
    Conceded,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// `None` is a tie.
    pub winner: Option<Player>,
    pub reason: EndReason,
    pub first_count: u16,
    pub second_count: u16,
}

/// What a successful `apply_move` did, so the host can refresh its view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    pub player: Player,
    pub position: Position,
    pub flipped: Vec<Position>,
    /// Contract:
    /// - `true` when the opponent had no legal move and the turn came back to `player`.
    /// - `false` otherwise, including when the game ended.
    pub passed: bool,
    pub ended: bool,
}

/// Public game state returned to hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub rows: u8,
    pub cols: u8,
    /// Row-major cell codes, see [`Cell::code`].
    pub board: Vec<u8>,
    pub current_player: Player,
    pub first_count: u16,
    pub second_count: u16,
    pub legal_moves: Vec<Position>,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when the last turn change skipped a player with no legal move.
    /// - `false` after a normal alternation.
    pub is_pass: bool,
    /// Stones flipped by the last move. Empty before the first move.
    pub flipped: Vec<Position>,
    pub result: Option<GameResult>,
}
