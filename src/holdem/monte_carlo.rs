use std::cmp::Ordering;

use rand::Rng;
use tracing::{instrument, trace};

use crate::core::{Card, CardBitSet, Deck, Rankable};

use super::{HoldemError, Street};

/// Default number of simulated deals per estimate.
pub const DEFAULT_TRIALS: usize = 100;
/// Hole cards in a hold'em hand.
pub const DEFAULT_OPPONENT_CARDS: usize = 2;

/// Estimate how often a hand wins against a single random opponent hand.
///
/// Every trial deals the opponent random hole cards and runs out the rest of
/// the board from the cards that haven't been seen. Wins count 1, ties 0.5
/// and losses 0. The estimate is the average over all trials.
///
/// More trials give a lower variance estimate at a linear cost in time, so
/// `trials` is the knob to turn when decisions are too slow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonteCarloEstimator {
    trials: usize,
    opponent_cards: usize,
    /// Every card that could possibly be dealt.
    universe: CardBitSet,
}

impl Default for MonteCarloEstimator {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            opponent_cards: DEFAULT_OPPONENT_CARDS,
            universe: CardBitSet::full(),
        }
    }
}

impl MonteCarloEstimator {
    /// Create an estimator over the full deck.
    ///
    /// # Errors
    ///
    /// `HoldemError::ZeroTrials` if `trials` is zero and
    /// `HoldemError::NoOpponentCards` if `opponent_cards` is zero.
    pub fn new(trials: usize, opponent_cards: usize) -> Result<Self, HoldemError> {
        if trials == 0 {
            return Err(HoldemError::ZeroTrials);
        }
        if opponent_cards == 0 {
            return Err(HoldemError::NoOpponentCards);
        }
        Ok(Self {
            trials,
            opponent_cards,
            universe: CardBitSet::full(),
        })
    }

    /// Restrict the cards that can be dealt to a closed universe.
    pub fn with_universe(mut self, universe: CardBitSet) -> Self {
        self.universe = universe;
        self
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn opponent_cards(&self) -> usize {
        self.opponent_cards
    }

    /// Estimate the win rate of `own` hole cards given the `board` so far.
    ///
    /// The result is always in `[0, 1]` and is fully determined by the state
    /// of `rng`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bounty_holdem::core::parse_cards;
    /// use bounty_holdem::holdem::MonteCarloEstimator;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// // Royal flush on the river can't lose.
    /// let own = parse_cards("AsKs").unwrap();
    /// let board = parse_cards("QsJsTs2h3d").unwrap();
    /// let mut rng = StdRng::seed_from_u64(0);
    /// let win_rate = MonteCarloEstimator::default()
    ///     .estimate(&own, &board, &mut rng)
    ///     .unwrap();
    /// assert_eq!(1.0, win_rate);
    /// ```
    ///
    /// # Errors
    ///
    /// - `HoldemError::InvalidBoardSize` when the board isn't 0, 3, 4 or 5
    ///   cards.
    /// - `HoldemError::Card` when a card repeats between `own` and `board`,
    ///   when a card isn't part of the universe, or when the universe is too
    ///   small to deal the opponent and the rest of the board.
    #[instrument(level = "trace", skip(self, rng), fields(trials = self.trials))]
    pub fn estimate<R: Rng + ?Sized>(
        &self,
        own: &[Card],
        board: &[Card],
        rng: &mut R,
    ) -> Result<f64, HoldemError> {
        if self.trials == 0 {
            return Err(HoldemError::ZeroTrials);
        }
        let street = Street::from_board_size(board.len())?;

        let known: Vec<Card> = own.iter().chain(board.iter()).copied().collect();
        let deck = Deck::from_universe(self.universe, &known)?;

        let own_set: CardBitSet = own.iter().copied().collect();
        let board_set: CardBitSet = board.iter().copied().collect();
        let to_deal = (5 - street.board_size()) + self.opponent_cards;

        let mut score = 0.0_f64;
        for _ in 0..self.trials {
            let draw = deck.sample(to_deal, rng)?;
            let (opponent, run_out) = draw.split_at(self.opponent_cards);

            let full_board = board_set | run_out.iter().copied().collect::<CardBitSet>();
            let opponent_set: CardBitSet = opponent.iter().copied().collect();

            let own_rank = (own_set | full_board).rank();
            let opponent_rank = (opponent_set | full_board).rank();

            score += match own_rank.cmp(&opponent_rank) {
                Ordering::Greater => 1.0,
                Ordering::Equal => 0.5,
                Ordering::Less => 0.0,
            };
        }

        let win_rate = score / self.trials as f64;
        trace!(%street, win_rate, "estimated hand strength");
        Ok(win_rate)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::core::{CardError, Suit, Value, parse_cards};

    fn std_dev(values: &[f64]) -> f64 {
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
        var.sqrt()
    }

    #[test]
    fn test_new_rejects_zero_trials() {
        assert_eq!(Err(HoldemError::ZeroTrials), MonteCarloEstimator::new(0, 2));
        assert_eq!(
            Err(HoldemError::NoOpponentCards),
            MonteCarloEstimator::new(10, 0)
        );
    }

    #[test]
    fn test_every_board_size_in_range() {
        let own = parse_cards("7h2c").unwrap();
        let full_board = parse_cards("AsKd9c4h3s").unwrap();
        let estimator = MonteCarloEstimator::default();
        let mut rng = StdRng::seed_from_u64(3);

        for size in [0, 3, 4, 5] {
            let win_rate = estimator
                .estimate(&own, &full_board[..size], &mut rng)
                .unwrap();
            assert!((0.0..=1.0).contains(&win_rate), "{size} => {win_rate}");
        }
    }

    #[test]
    fn test_invalid_board_size() {
        let own = parse_cards("7h2c").unwrap();
        let board = parse_cards("AsKd").unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            Err(HoldemError::InvalidBoardSize(2)),
            MonteCarloEstimator::default().estimate(&own, &board, &mut rng)
        );
    }

    #[test]
    fn test_overlapping_cards_fail() {
        let own = parse_cards("AsKd").unwrap();
        let board = parse_cards("As9c4h").unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            Err(HoldemError::Card(CardError::DuplicateCard(Card::new(
                Value::Ace,
                Suit::Spade
            )))),
            MonteCarloEstimator::default().estimate(&own, &board, &mut rng)
        );
    }

    #[test]
    fn test_unbeatable_hand_always_wins() {
        let own = parse_cards("AsKs").unwrap();
        let board = parse_cards("QsJsTs2h3d").unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let win_rate = MonteCarloEstimator::new(500, 2)
            .unwrap()
            .estimate(&own, &board, &mut rng)
            .unwrap();
        assert_relative_eq!(1.0, win_rate);
    }

    #[test]
    fn test_board_plays_is_always_a_tie() {
        let own = parse_cards("2c3d").unwrap();
        let board = parse_cards("AhKhQhJhTh").unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let win_rate = MonteCarloEstimator::default()
            .estimate(&own, &board, &mut rng)
            .unwrap();
        assert_relative_eq!(0.5, win_rate);
    }

    #[test]
    fn test_closed_universe_always_loses() {
        // Every hand the opponent can hold from the three unseen cards beats
        // ace high: Th makes a royal flush and 8c8d is a pair.
        let own = parse_cards("2c3d").unwrap();
        let board = parse_cards("AhKhQhJh7c").unwrap();
        let unseen = parse_cards("Th8c8d").unwrap();
        let universe: CardBitSet = own
            .iter()
            .chain(board.iter())
            .chain(unseen.iter())
            .copied()
            .collect();

        let mut rng = StdRng::seed_from_u64(5);
        let win_rate = MonteCarloEstimator::new(300, 2)
            .unwrap()
            .with_universe(universe)
            .estimate(&own, &board, &mut rng)
            .unwrap();
        assert_relative_eq!(0.0, win_rate);
    }

    #[test]
    fn test_universe_too_small() {
        let own = parse_cards("2c3d").unwrap();
        let universe: CardBitSet = parse_cards("2c3d4d5d").unwrap().into_iter().collect();
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(
            Err(HoldemError::Card(CardError::NotEnoughCards {
                requested: 7,
                available: 2
            })),
            MonteCarloEstimator::default()
                .with_universe(universe)
                .estimate(&own, &[], &mut rng)
        );
    }

    #[test]
    fn test_seeded_estimates_repeat() {
        let own = parse_cards("QdJd").unwrap();
        let board = parse_cards("Td9c2s").unwrap();
        let estimator = MonteCarloEstimator::default();

        let a = estimator
            .estimate(&own, &board, &mut StdRng::seed_from_u64(77))
            .unwrap();
        let b = estimator
            .estimate(&own, &board, &mut StdRng::seed_from_u64(77))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_pocket_aces_are_favored() {
        let own = parse_cards("AsAh").unwrap();
        let mut rng = StdRng::seed_from_u64(19);
        let win_rate = MonteCarloEstimator::new(2_000, 2)
            .unwrap()
            .estimate(&own, &[], &mut rng)
            .unwrap();
        // True equity is about 0.85.
        assert!(win_rate > 0.78, "{win_rate}");
        assert!(win_rate < 0.92, "{win_rate}");
    }

    #[test]
    fn test_more_trials_less_spread() {
        let own = parse_cards("9h8h").unwrap();
        let board: &[Card] = &[];

        let few = MonteCarloEstimator::new(100, 2).unwrap();
        let many = MonteCarloEstimator::new(10_000, 2).unwrap();

        let few_runs: Vec<f64> = (0..8)
            .map(|seed| {
                few.estimate(&own, board, &mut StdRng::seed_from_u64(seed))
                    .unwrap()
            })
            .collect();
        let many_runs: Vec<f64> = (0..8)
            .map(|seed| {
                many.estimate(&own, board, &mut StdRng::seed_from_u64(seed))
                    .unwrap()
            })
            .collect();

        assert!(std_dev(&many_runs) < std_dev(&few_runs));
    }
}
