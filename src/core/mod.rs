/// card.rs has value and suit.
mod card;
/// Export the `Card`, `Value`, and `Suit` types.
pub use self::card::{Card, Suit, Value, parse_cards};

/// A u64 backed set of cards.
mod card_bit_set;
/// Export `CardBitSet` and its iterator.
pub use self::card_bit_set::{CardBitSet, CardBitSetIter};

/// The unseen cards of a hand.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Errors for parsing and building cards.
mod error;
/// Export `CardError`
pub use self::error::CardError;

/// 7 card hand ranking.
mod rank;
/// Export `Rank` and the `Rankable` trait.
pub use self::rank::{Rank, Rankable};
