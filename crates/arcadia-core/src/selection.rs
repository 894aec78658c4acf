//! Selection state machine driving the game modal

use thiserror::Error;

use crate::catalog::GameRecord;

/// A selection request referenced an id absent from the catalog. The state
/// is left unchanged; callers log and move on.
#[derive(Debug, Error, PartialEq)]
pub enum SelectError {
    #[error("no game with id `{0}` in the catalog")]
    UnknownId(String),
}

/// The currently presented game, if any. At most one game is ever open.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Selection {
    #[default]
    Closed,
    Open(GameRecord),
}

impl Selection {
    /// Look up `id` in the catalog and open it. Selecting while a game is
    /// already open replaces it; the caller must tear down the previous
    /// embed target before applying the new state.
    pub fn select(&self, games: &[GameRecord], id: &str) -> Result<Selection, SelectError> {
        match games.iter().find(|g| g.id == id) {
            Some(game) => Ok(Selection::Open(game.clone())),
            None => Err(SelectError::UnknownId(id.to_string())),
        }
    }

    /// Dismiss the current game, from any state.
    pub fn close(&self) -> Selection {
        Selection::Closed
    }

    pub fn game(&self) -> Option<&GameRecord> {
        match self {
            Selection::Closed => None,
            Selection::Open(game) => Some(game),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open(_))
    }
}
