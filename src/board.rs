use log::trace;

use crate::config::GameConfig;
use crate::error::Result;
use crate::types::{Cell, Move, Player, Position};

const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Rectangular Reversi grid stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u8,
    cols: u8,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates the starting board. With `r0 = (rows-2)/2` and `c0 = (cols-2)/2`:
    /// (r0,c0)=second, (r0,c0+1)=first, (r0+1,c0)=first, (r0+1,c0+1)=second.
    ///
    /// On odd sides the integer division leaves the cross one cell closer to the
    /// top-left corner.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::starting(config))
    }

    /// Creates a board with no stones, for setting up custom positions.
    pub fn empty(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::blank(config))
    }

    /// Caller contract: `config` is valid.
    fn starting(config: GameConfig) -> Self {
        let mut board = Self::blank(config);
        let r0 = (config.rows - 2) / 2;
        let c0 = (config.cols - 2) / 2;

        board.set(Position::new(r0, c0), Cell::Occupied(Player::Second));
        board.set(Position::new(r0, c0 + 1), Cell::Occupied(Player::First));
        board.set(Position::new(r0 + 1, c0), Cell::Occupied(Player::First));
        board.set(Position::new(r0 + 1, c0 + 1), Cell::Occupied(Player::Second));
        board
    }

    fn blank(config: GameConfig) -> Self {
        Self {
            rows: config.rows,
            cols: config.cols,
            cells: vec![Cell::Empty; config.rows as usize * config.cols as usize],
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Returns `None` outside the board.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Writes one cell. Returns `false` and leaves the board untouched when `pos`
    /// is outside it.
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Dimensions as a config, re-checked against the side limits.
    pub fn config(&self) -> Result<GameConfig> {
        GameConfig::new(self.rows as usize, self.cols as usize)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Returns every legal move for `player`, one per destination, in row-major order.
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        let mut moves = Vec::new();

        for destination in self.positions() {
            if self.get(destination) != Some(Cell::Empty) {
                continue;
            }
            let flips = self.collect_flips(destination, player);
            if !flips.is_empty() {
                moves.push(Move { destination, flips });
            }
        }

        trace!("{} legal moves for {player}", moves.len());
        moves
    }

    /// Stones `player` would capture by playing at `pos`. Empty when the move is illegal.
    pub fn flips_for(&self, pos: Position, player: Player) -> Vec<Position> {
        if self.get(pos) != Some(Cell::Empty) {
            return Vec::new();
        }
        self.collect_flips(pos, player)
    }

    /// Places `mv` for `player` and turns over its captures.
    /// Caller contract: `mv` came from `legal_moves(player)` on this board.
    pub(crate) fn play(&mut self, player: Player, mv: &Move) {
        let stone = Cell::Occupied(player);
        self.set(mv.destination, stone);
        for &pos in &mv.flips {
            self.set(pos, stone);
        }
    }

    pub fn count(&self, player: Player) -> u16 {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Occupied(player))
            .count() as u16
    }

    pub fn empty_count(&self) -> u16 {
        self.cells.iter().filter(|&&cell| cell == Cell::Empty).count() as u16
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Row-major cell codes where 0=empty, 1=first, 2=second.
    pub fn to_codes(&self) -> Vec<u8> {
        self.cells.iter().map(|cell| cell.code()).collect()
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }

    fn collect_flips(&self, pos: Position, player: Player) -> Vec<Position> {
        let me = Cell::Occupied(player);
        let opp = Cell::Occupied(player.opponent());
        let mut flips = Vec::new();

        for (dr, dc) in DIRECTIONS {
            let mut r = pos.row as i32 + dr;
            let mut c = pos.col as i32 + dc;
            let mut line = Vec::new();

            while let Some(square) = self.step(r, c) {
                let cell = self.get(square);
                if cell == Some(opp) {
                    line.push(square);
                } else if cell == Some(me) {
                    flips.append(&mut line);
                    break;
                } else {
                    break;
                }

                r += dr;
                c += dc;
            }
        }

        flips.sort_unstable();
        flips
    }

    fn step(&self, row: i32, col: i32) -> Option<Position> {
        let in_bounds =
            (0..self.rows as i32).contains(&row) && (0..self.cols as i32).contains(&col);
        in_bounds.then(|| Position::new(row as u8, col as u8))
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if pos.row < self.rows && pos.col < self.cols {
            Some(pos.row as usize * self.cols as usize + pos.col as usize)
        } else {
            None
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting(GameConfig::default())
    }
}
