use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, BitXor};

use super::{Card, Value};

/// Mask with all 52 card bits set.
const FULL_DECK: u64 = (1 << 52) - 1;

/// A set of cards stored as a single u64.
///
/// Bit `n` is set when the card with index `n` is in the set. Since the set
/// can't hold a card twice it's a natural way to check for duplicate cards
/// between a hand and the board.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardBitSet {
    cards: u64,
}

impl CardBitSet {
    /// Create an empty set.
    pub const fn new() -> Self {
        Self { cards: 0 }
    }

    /// Create a set holding all 52 cards.
    pub const fn full() -> Self {
        Self { cards: FULL_DECK }
    }

    /// Add a card. Returns false if it was already there.
    pub fn insert(&mut self, card: Card) -> bool {
        let bit = 1_u64 << card.index();
        let added = self.cards & bit == 0;
        self.cards |= bit;
        added
    }

    /// Remove a card. Returns false if it wasn't there.
    pub fn remove(&mut self, card: Card) -> bool {
        let bit = 1_u64 << card.index();
        let removed = self.cards & bit != 0;
        self.cards &= !bit;
        removed
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards & (1_u64 << card.index()) != 0
    }

    pub fn count(&self) -> usize {
        self.cards.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.cards == 0
    }

    /// Does any card in the set have this value?
    pub fn contains_value(&self, value: Value) -> bool {
        // One bit per suit, 13 apart.
        let mask = (0..4).fold(0_u64, |acc, suit| acc | (1 << (suit * 13 + value as u64)));
        self.cards & mask != 0
    }

    /// Cards in both sets.
    pub fn intersection(&self, other: &Self) -> Self {
        *self & *other
    }

    /// Cards in `self` that aren't in `other`.
    pub fn difference(&self, other: &Self) -> Self {
        Self {
            cards: self.cards & !other.cards,
        }
    }

    pub fn iter(&self) -> CardBitSetIter {
        CardBitSetIter { cards: self.cards }
    }
}

impl fmt::Debug for CardBitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|c| c.to_string())).finish()
    }
}

impl BitOr for CardBitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            cards: self.cards | rhs.cards,
        }
    }
}

impl BitOrAssign for CardBitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.cards |= rhs.cards;
    }
}

impl BitAnd for CardBitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self {
            cards: self.cards & rhs.cards,
        }
    }
}

impl BitXor for CardBitSet {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self {
            cards: self.cards ^ rhs.cards,
        }
    }
}

impl From<Card> for CardBitSet {
    fn from(card: Card) -> Self {
        let mut set = Self::new();
        set.insert(card);
        set
    }
}

/// Collect cards into a set, silently merging duplicates. Use
/// [`super::Deck::build`] or [`super::parse_cards`] when duplicates need to
/// be reported.
impl FromIterator<Card> for CardBitSet {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut set = Self::new();
        for card in iter {
            set.insert(card);
        }
        set
    }
}

/// Iterator over the cards of a `CardBitSet`, lowest index first.
#[derive(Debug, Clone)]
pub struct CardBitSetIter {
    cards: u64,
}

impl Iterator for CardBitSetIter {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if self.cards == 0 {
            return None;
        }
        let idx = self.cards.trailing_zeros() as u8;
        // Clear the lowest set bit.
        self.cards &= self.cards - 1;
        Card::from_index(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.cards.count_ones() as usize;
        (n, Some(n))
    }
}

impl IntoIterator for CardBitSet {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> CardBitSetIter {
        self.iter()
    }
}

impl IntoIterator for &CardBitSet {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> CardBitSetIter {
        self.iter()
    }
}
