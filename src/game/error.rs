use thiserror::Error;

/// Failures raised by the game core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The grid described by a [`GameConfig`](super::GameConfig) cannot be built
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Every cell of the grid is occupied, so no food can be placed
    #[error("no free cell left for food on a grid of {cells} cells")]
    FoodPlacementExhausted { cells: usize },
}

impl GameError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        GameError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
