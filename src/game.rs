use log::debug;

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::{EngineError, Result};
use crate::types::{EndReason, GameResult, GameSnapshot, Move, MoveOutcome, Player, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    InProgress,
    Ended(GameResult),
}

/// One game session: the board, whose turn it is, and that player's legal moves.
///
/// Mutated only through [`GameState::apply_move`] and [`GameState::concede`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    legal_moves: Vec<Move>,
    consecutive_passes: u8,
    status: Status,
    is_pass: bool,
    flipped: Vec<Position>,
}

impl GameState {
    /// Starts a game on a `rows` x `cols` board with the first player to move.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Self::from_config(GameConfig::new(rows, cols)?)
    }

    pub fn from_config(config: GameConfig) -> Result<Self> {
        let board = Board::new(config)?;
        debug!("new game on {}x{} board", config.rows, config.cols);
        Self::from_board(board, Player::First)
    }

    /// Resumes play from an arbitrary position.
    ///
    /// Passes and game end are settled immediately, so `current_player` may differ
    /// from `to_move` when that player has no legal move.
    pub fn from_board(board: Board, to_move: Player) -> Result<Self> {
        board.config()?;
        let mut state = Self {
            board,
            current_player: to_move,
            legal_moves: Vec::new(),
            consecutive_passes: 0,
            status: Status::InProgress,
            is_pass: false,
            flipped: Vec::new(),
        };
        state.is_pass = state.settle();
        Ok(state)
    }

    /// Plays `position` for `player`, flips the captured stones and hands the turn on.
    pub fn apply_move(&mut self, player: Player, position: Position) -> Result<MoveOutcome> {
        if self.is_ended() {
            return Err(EngineError::game_over());
        }
        if player != self.current_player {
            return Err(EngineError::illegal(
                player,
                position,
                format!("it is the {}'s turn", self.current_player),
            ));
        }
        if !self.board.contains(position) {
            return Err(EngineError::illegal(
                player,
                position,
                format!(
                    "position is outside the {}x{} board",
                    self.board.rows(),
                    self.board.cols()
                ),
            ));
        }

        let Some(idx) = self
            .legal_moves
            .iter()
            .position(|mv| mv.destination == position)
        else {
            return Err(EngineError::illegal(player, position, "not a legal destination"));
        };

        let mv = self.legal_moves.swap_remove(idx);
        self.board.play(player, &mv);
        debug!("{player} played {position}, flipping {}", mv.flips.len());

        self.current_player = player.opponent();
        self.consecutive_passes = 0;
        let passed = self.settle();

        self.is_pass = passed;
        self.flipped = mv.flips.clone();

        Ok(MoveOutcome {
            player,
            position,
            flipped: mv.flips,
            passed,
            ended: self.is_ended(),
        })
    }

    /// Ends the game with `conceder`'s opponent as winner, whatever the stone counts.
    pub fn concede(&mut self, conceder: Player) -> Result<GameResult> {
        if self.is_ended() {
            return Err(EngineError::game_over());
        }
        debug!("{conceder} conceded");
        Ok(self.finish(EndReason::Conceded, Some(conceder.opponent())))
    }

    pub fn rows(&self) -> u8 {
        self.board.rows()
    }

    pub fn cols(&self) -> u8 {
        self.board.cols()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move. After a `NoMoves` end this is the player whose turn
    /// it was when the stalemate was found.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Legal moves for the current player. Empty once the game has ended.
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    pub fn legal_move_at(&self, position: Position) -> Option<&Move> {
        self.legal_moves
            .iter()
            .find(|mv| mv.destination == position)
    }

    pub fn count(&self, player: Player) -> u16 {
        self.board.count(player)
    }

    pub fn empty_count(&self) -> u16 {
        self.board.empty_count()
    }

    /// Turns skipped since the last stone was placed: 1 after an automatic pass,
    /// 2 when neither side could move.
    pub fn consecutive_passes(&self) -> u8 {
        self.consecutive_passes
    }

    pub fn is_ended(&self) -> bool {
        matches!(self.status, Status::Ended(_))
    }

    pub fn result(&self) -> Option<GameResult> {
        match self.status {
            Status::InProgress => None,
            Status::Ended(result) => Some(result),
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            rows: self.board.rows(),
            cols: self.board.cols(),
            board: self.board.to_codes(),
            current_player: self.current_player,
            first_count: self.board.count(Player::First),
            second_count: self.board.count(Player::Second),
            legal_moves: self.legal_moves.iter().map(|mv| mv.destination).collect(),
            is_game_over: self.is_ended(),
            is_pass: self.is_pass,
            flipped: self.flipped.clone(),
            result: self.result(),
        }
    }

    /// Recomputes legal moves for `current_player`, skipping a stuck player at most
    /// once. Returns `true` when a pass happened and play continues.
    ///
    /// When neither side can move the turn is handed over twice, so `current_player`
    /// ends on the player that was checked first.
    fn settle(&mut self) -> bool {
        self.legal_moves.clear();

        if self.board.is_full() {
            self.finish_by_count(EndReason::BoardFull);
            return false;
        }

        for attempt in 0..2 {
            let moves = self.board.legal_moves(self.current_player);
            if !moves.is_empty() {
                self.legal_moves = moves;
                return attempt > 0;
            }

            debug!("{} has no legal move", self.current_player);
            self.consecutive_passes += 1;
            self.current_player = self.current_player.opponent();
        }

        self.finish_by_count(EndReason::NoMoves);
        false
    }

    fn finish_by_count(&mut self, reason: EndReason) -> GameResult {
        let first = self.board.count(Player::First);
        let second = self.board.count(Player::Second);
        let winner = if first > second {
            Some(Player::First)
        } else if second > first {
            Some(Player::Second)
        } else {
            None
        };
        self.finish(reason, winner)
    }

    fn finish(&mut self, reason: EndReason, winner: Option<Player>) -> GameResult {
        let result = GameResult {
            winner,
            reason,
            first_count: self.board.count(Player::First),
            second_count: self.board.count(Player::Second),
        };
        self.legal_moves.clear();
        self.status = Status::Ended(result);
        debug!("game over: {reason:?}, winner {winner:?}");
        result
    }
}
