use rand::Rng;
use rand::seq::index;

use super::{Card, CardBitSet, CardError};

/// The cards that haven't been seen yet in the current hand.
///
/// A `Deck` is built once per estimation from the cards that are known
/// (own hole cards and the board) and then sampled over and over. Sampling
/// never removes cards, every call is an independent draw from the same
/// remaining cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Flat list of the cards for fast indexed sampling.
    cards: Vec<Card>,
    /// Same cards as a set for membership checks.
    set: CardBitSet,
}

impl Deck {
    /// Build the standard 52 card deck minus the `excluded` cards.
    ///
    /// # Examples
    ///
    /// ```
    /// use bounty_holdem::core::{Deck, parse_cards};
    ///
    /// let known = parse_cards("AhKh2c7d8s").unwrap();
    /// let deck = Deck::build(&known).unwrap();
    /// assert_eq!(47, deck.len());
    /// ```
    ///
    /// # Errors
    ///
    /// `CardError::DuplicateCard` if a card is excluded twice.
    pub fn build(excluded: &[Card]) -> Result<Self, CardError> {
        Self::from_universe(CardBitSet::full(), excluded)
    }

    /// Build a deck from a closed card universe minus the `excluded` cards.
    ///
    /// Small universes make exhaustive checks of the estimator possible.
    ///
    /// # Errors
    ///
    /// `CardError::DuplicateCard` if a card is excluded twice and
    /// `CardError::OutsideUniverse` if an excluded card isn't in `universe`.
    pub fn from_universe(universe: CardBitSet, excluded: &[Card]) -> Result<Self, CardError> {
        let mut removed = CardBitSet::new();
        for &card in excluded {
            if !universe.contains(card) {
                return Err(CardError::OutsideUniverse(card));
            }
            if !removed.insert(card) {
                return Err(CardError::DuplicateCard(card));
            }
        }

        let set = universe.difference(&removed);
        Ok(Self {
            cards: set.iter().collect(),
            set,
        })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.set.contains(card)
    }

    /// Draw `k` distinct cards uniformly at random without replacement.
    ///
    /// The returned cards are in random order so callers can split them
    /// positionally (first the opponent's hole cards, then the board).
    ///
    /// # Errors
    ///
    /// `CardError::NotEnoughCards` when `k` is larger than the deck.
    pub fn sample<R: Rng + ?Sized>(&self, k: usize, rng: &mut R) -> Result<Vec<Card>, CardError> {
        if k > self.cards.len() {
            return Err(CardError::NotEnoughCards {
                requested: k,
                available: self.cards.len(),
            });
        }
        Ok(index::sample(rng, self.cards.len(), k)
            .into_iter()
            .map(|idx| self.cards[idx])
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::core::{Suit, Value, parse_cards};

    #[test]
    fn test_build_full() {
        let deck = Deck::build(&[]).unwrap();
        assert_eq!(52, deck.len());
    }

    #[test]
    fn test_build_removes_known() {
        let known = parse_cards("AsKs").unwrap();
        let deck = Deck::build(&known).unwrap();
        assert_eq!(50, deck.len());
        assert!(!deck.contains(Card::new(Value::Ace, Suit::Spade)));
        assert!(deck.contains(Card::new(Value::Ace, Suit::Heart)));
    }

    #[test]
    fn test_build_duplicate_excluded() {
        let ace = Card::new(Value::Ace, Suit::Spade);
        assert_eq!(
            Err(CardError::DuplicateCard(ace)),
            Deck::build(&[ace, ace])
        );
    }

    #[test]
    fn test_universe_rejects_outsider() {
        let universe: CardBitSet = parse_cards("2c3c4c").unwrap().into_iter().collect();
        let outsider = Card::new(Value::Ace, Suit::Spade);
        assert_eq!(
            Err(CardError::OutsideUniverse(outsider)),
            Deck::from_universe(universe, &[outsider])
        );
    }

    #[test]
    fn test_sample_distinct_and_from_deck() {
        let known = parse_cards("AsKsQs").unwrap();
        let deck = Deck::build(&known).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let draw = deck.sample(7, &mut rng).unwrap();
            assert_eq!(7, draw.len());
            let set: CardBitSet = draw.iter().copied().collect();
            assert_eq!(7, set.count());
            assert!(draw.iter().all(|c| deck.contains(*c)));
        }
        // Sampling doesn't consume anything.
        assert_eq!(49, deck.len());
    }

    #[test]
    fn test_sample_whole_deck() {
        let universe: CardBitSet = parse_cards("2c3c4c").unwrap().into_iter().collect();
        let deck = Deck::from_universe(universe, &[]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let draw: CardBitSet = deck.sample(3, &mut rng).unwrap().into_iter().collect();
        assert_eq!(universe, draw);
    }

    #[test]
    fn test_sample_too_many() {
        let universe: CardBitSet = parse_cards("2c3c").unwrap().into_iter().collect();
        let deck = Deck::from_universe(universe, &[]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            Err(CardError::NotEnoughCards {
                requested: 3,
                available: 2
            }),
            deck.sample(3, &mut rng)
        );
    }

    #[test]
    fn test_sample_seeded_is_repeatable() {
        let deck = Deck::build(&[]).unwrap();
        let a = deck.sample(5, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = deck.sample(5, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }
}
