use thiserror::Error;

use crate::core::CardError;

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum HoldemError {
    #[error("A board can only have 0, 3, 4, or 5 cards, got {0}")]
    InvalidBoardSize(usize),
    #[error("Hand strength needs at least one trial")]
    ZeroTrials,
    #[error("The opponent needs at least one hole card")]
    NoOpponentCards,
    #[error("Invalid cards")]
    Card(#[from] CardError),
}
