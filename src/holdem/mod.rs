/// Betting streets and how they map onto board sizes.
mod street;
/// Export `Street`
pub use self::street::Street;

/// Monte carlo estimation of how often a hand wins.
mod monte_carlo;
/// Export `MonteCarloEstimator`
pub use self::monte_carlo::MonteCarloEstimator;

/// Errors for estimation inputs.
mod error;
/// Export `HoldemError`
pub use self::error::HoldemError;
