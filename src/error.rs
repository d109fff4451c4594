use std::path::PathBuf;

use crate::game::Color;

/// Errors raised by board queries and moves.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("{0} camel is not on the board")]
    NotFound(Color),

    #[error("board invariant violated: {0}")]
    InvariantViolation(String),
}

/// Errors raised when claiming bet cards.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BetError {
    #[error("all the {0} cards are gone")]
    Exhausted(Color),
}

/// Errors that can occur while applying a turn action to a game session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("the game is over")]
    GameOver,

    #[error("no dice remain in this leg")]
    NoDiceRemaining,

    #[error("the {0} die has already been rolled this leg")]
    DieAlreadyRolled(Color),

    #[error(transparent)]
    Bet(#[from] BetError),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::NotFound(Color::Purple);
        assert_eq!(err.to_string(), "purple camel is not on the board");
    }

    #[test]
    fn test_bet_error_display() {
        let err = BetError::Exhausted(Color::Red);
        assert_eq!(err.to_string(), "all the red cards are gone");
    }

    #[test]
    fn test_turn_error_is_transparent() {
        let err: TurnError = BetError::Exhausted(Color::Green).into();
        assert_eq!(err.to_string(), "all the green cards are gone");

        let err: TurnError = BoardError::InvariantViolation("blue appears twice".into()).into();
        assert_eq!(err.to_string(), "board invariant violated: blue appears twice");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("rules.hint_cost must be >= 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: rules.hint_cost must be >= 0"
        );
    }
}
