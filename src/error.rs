use thiserror::Error;

use crate::types::{Player, Position};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("kind=invalid_dimensions: {message}")]
    InvalidDimensions { message: String },
    #[error("kind=illegal_move: {player} cannot play {position}: {message}")]
    IllegalMove {
        player: Player,
        position: Position,
        message: String,
    },
    #[error("kind=invalid_state: {message}")]
    InvalidState { message: String },
}

impl EngineError {
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::InvalidDimensions { .. } => "invalid_dimensions",
            EngineError::IllegalMove { .. } => "illegal_move",
            EngineError::InvalidState { .. } => "invalid_state",
        }
    }

    pub(crate) fn illegal(player: Player, position: Position, message: impl Into<String>) -> Self {
        EngineError::IllegalMove {
            player,
            position,
            message: message.into(),
        }
    }

    pub(crate) fn game_over() -> Self {
        EngineError::InvalidState {
            message: "game is already over".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_display_prefix() {
        let errors = [
            EngineError::InvalidDimensions {
                message: "rows must be at least 2".to_string(),
            },
            EngineError::illegal(Player::First, Position::new(0, 0), "not a legal destination"),
            EngineError::game_over(),
        ];

        for err in errors {
            assert!(err.to_string().starts_with(&format!("kind={}:", err.kind())));
        }
    }

    #[test]
    fn illegal_move_message_names_player_and_square() {
        let err = EngineError::illegal(Player::Second, Position::new(2, 3), "not your turn");

        assert_eq!(
            err.to_string(),
            "kind=illegal_move: second player cannot play (2, 3): not your turn"
        );
    }
}
