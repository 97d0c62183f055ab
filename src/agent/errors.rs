use thiserror::Error;

use crate::core::CardError;
use crate::holdem::HoldemError;

use super::Action;

/// Contract violations found while building a decision or checking one.
///
/// These all mean the state the engine handed over (or the action about to
/// be returned) is inconsistent. Nothing is clamped or defaulted.
#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum AgentError {
    #[error("Hand record is missing {0}")]
    MissingField(&'static str),
    #[error("A hand needs exactly two hole cards, got {0}")]
    WrongHoleCardCount(usize),
    #[error("No legal actions were supplied")]
    NoLegalActions,
    #[error("Raising is legal but no raise bounds were supplied")]
    MissingRaiseBounds,
    #[error("Raise bounds are inverted: min {min} is above max {max}")]
    InvalidRaiseBounds { min: u32, max: u32 },
    #[error("Raise to {amount} is outside the bounds {min}..={max}")]
    RaiseOutOfBounds { amount: u32, min: u32, max: u32 },
    #[error("{0:?} is not a legal action")]
    IllegalAction(Action),
    #[error("Invalid cards")]
    Card(#[from] CardError),
    #[error("Unable to estimate hand strength")]
    Holdem(#[from] HoldemError),
}
