use thiserror::Error;

use super::Card;

/// Everything that can go wrong when turning input into cards or decks.
///
/// All of these point at a bug in whoever built the input, the core never
/// substitutes a default when it sees one.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CardError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Input ended in the middle of a card")]
    UnexpectedEnd,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("Card {0} is not part of the card universe")]
    OutsideUniverse(Card),
    #[error("Asked for {requested} cards but only {available} remain")]
    NotEnoughCards { requested: usize, available: usize },
}
