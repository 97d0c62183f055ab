//! Tracking the opponent's hidden bounty rank.
//!
//! Every player is assigned a bounty rank that stays fixed for an epoch of
//! hands. Ours is known, the opponent's never is. What we can see is whether
//! their bounty was hit at the end of a hand and which cards were shown.
//! [`BountyTracker`] turns those observations into a shrinking
//! [`BeliefSet`] of ranks the opponent's bounty could still be.

/// The set of candidate ranks.
mod belief;
/// Export `BeliefSet`
pub use self::belief::BeliefSet;

/// The end of hand information the tracker learns from.
mod outcome;
/// Export `HandOutcome`
pub use self::outcome::HandOutcome;

/// Epoch aware belief updates.
mod tracker;
/// Export `BountyTracker` and `BeliefState`
pub use self::tracker::{BeliefState, BountyTracker, DEFAULT_EPOCH_LENGTH};
