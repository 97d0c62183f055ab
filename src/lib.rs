//! # bounty_holdem
//!
//! The decision engine for a heads-up hold'em bot where each player holds a
//! hidden bounty rank.
//!
//! The crate is split the same way the game is:
//!
//! - [`core`] has cards, decks and 7 card hand ranking.
//! - [`holdem`] has streets and the monte carlo hand strength estimator.
//! - [`bounty`] tracks which ranks the opponent's bounty could still be.
//! - [`agent`] turns all of that into a single betting action.
//!
//! ```
//! use bounty_holdem::core::{Value, parse_cards};
//! use bounty_holdem::holdem::MonteCarloEstimator;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let own = parse_cards("AsAh").unwrap();
//! let board = parse_cards("Ad7c2s").unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let win_rate = MonteCarloEstimator::default()
//!     .estimate(&own, &board, &mut rng)
//!     .unwrap();
//! assert!(win_rate > 0.8);
//! assert_eq!(Value::Ace, own[0].value);
//! ```

/// Cards, sets of cards, the deck and hand ranking.
pub mod core;

/// Hold'em specific code: streets and hand strength estimation.
pub mod holdem;

/// Opponent bounty belief tracking.
pub mod bounty;

/// The betting policy and the bot that drives it.
pub mod agent;
