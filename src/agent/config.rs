//! # Agent Configuration
//!
//! JSON configuration for [`BountyAgent`](super::BountyAgent). Every field
//! is optional and falls back to the values the bot plays with.
//!
//! ```rust
//! use bounty_holdem::agent::AgentConfig;
//!
//! let config = AgentConfig::from_json(r#"{"trials": 250, "seed": 7}"#).unwrap();
//! assert_eq!(250, config.trials);
//! assert_eq!(25, config.epoch_length);
//! ```
//!
//! ## Example
//!
//! ```json
//! {
//!   "name": "bounty-bot",
//!   "trials": 100,
//!   "opponent_cards": 2,
//!   "epoch_length": 25,
//!   "seed": 42,
//!   "policy": {
//!     "fold_tiers": [
//!       {"above": 0, "min_win_rate": 0.5},
//!       {"above": 50, "min_win_rate": 0.65}
//!     ],
//!     "call_floor": 0.4
//!   }
//! }
//! ```
use std::{io::ErrorKind, num::NonZeroU32, path::Path};

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{BountyAgent, DecisionPolicy, PolicyConfig};
use crate::bounty::BountyTracker;
use crate::holdem::{HoldemError, MonteCarloEstimator};

/// Configuration for a [`BountyAgent`](super::BountyAgent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AgentConfig {
    /// Name used in logs.
    pub name: String,
    /// Monte carlo trials per decision.
    pub trials: usize,
    /// Hole cards dealt to the opponent.
    pub opponent_cards: usize,
    /// Hands between bounty re-assignments.
    pub epoch_length: u32,
    /// Seed for the agent's rng. Random when missing.
    pub seed: Option<u64>,
    pub policy: PolicyConfig,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: "BountyAgent".to_string(),
            trials: 100,
            opponent_cards: 2,
            epoch_length: 25,
            seed: None,
            policy: PolicyConfig::default(),
        }
    }
}

/// Errors that can occur during agent configuration
#[derive(Debug, Error)]
pub enum AgentConfigError {
    /// Invalid probability value (must be between 0.0 and 1.0)
    #[error("Invalid probability value: {0} (must be between 0.0 and 1.0)")]
    InvalidProbability(f64),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The estimator rejected its settings
    #[error("Estimator error: {0}")]
    EstimatorError(#[from] HoldemError),

    /// Generic validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl AgentConfig {
    /// Validate that the configuration is correct
    pub fn validate(&self) -> Result<(), AgentConfigError> {
        if self.trials == 0 {
            return Err(AgentConfigError::ValidationError(
                "trials must be at least 1".to_string(),
            ));
        }
        if self.opponent_cards == 0 {
            return Err(AgentConfigError::ValidationError(
                "opponent_cards must be at least 1".to_string(),
            ));
        }
        if self.epoch_length == 0 {
            return Err(AgentConfigError::ValidationError(
                "epoch_length must be at least 1".to_string(),
            ));
        }

        let policy = &self.policy;
        validate_probabilities(
            policy
                .fold_tiers
                .iter()
                .map(|tier| tier.min_win_rate)
                .chain([
                    policy.max_raise_win_rate,
                    policy.raise_win_rate,
                    policy.raise_interpolation_floor,
                    policy.call_floor,
                ]),
        )?;
        if policy.raise_interpolation_floor > policy.raise_win_rate {
            return Err(AgentConfigError::ValidationError(
                "raise_interpolation_floor must not be above raise_win_rate".to_string(),
            ));
        }
        for (name, value) in [
            ("pot_odds_fold_fraction", policy.pot_odds_fold_fraction),
            ("opponent_bounty_pressure", policy.opponent_bounty_pressure),
            ("own_bounty_pip_weight", policy.own_bounty_pip_weight),
            ("pot_odds_epsilon", policy.pot_odds_epsilon),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(AgentConfigError::ValidationError(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if policy.pot_odds_epsilon == 0.0 {
            return Err(AgentConfigError::ValidationError(
                "pot_odds_epsilon must be above zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Create from a JSON string
    pub fn from_json(json: &str) -> Result<Self, AgentConfigError> {
        let config: AgentConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Create from a file path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AgentConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Build the agent this configuration describes.
    ///
    /// Without a `seed` the agent's rng is seeded from the thread rng.
    pub fn build_agent(&self) -> Result<BountyAgent, AgentConfigError> {
        self.validate()?;
        let estimator = MonteCarloEstimator::new(self.trials, self.opponent_cards)?;
        let epoch_length = NonZeroU32::new(self.epoch_length).ok_or_else(|| {
            AgentConfigError::ValidationError("epoch_length must be at least 1".to_string())
        })?;
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        Ok(BountyAgent::new(
            self.name.clone(),
            estimator,
            BountyTracker::new(epoch_length),
            DecisionPolicy::new(self.policy.clone()),
            rng,
        ))
    }

    /// Try to parse as file path first, then as inline JSON
    pub fn from_str_or_file(input: &str) -> Result<Self, AgentConfigError> {
        match Self::from_file(input) {
            Ok(config) => Ok(config),
            Err(AgentConfigError::IoError(err)) if err.kind() == ErrorKind::NotFound => {
                Self::from_json(input)
            }
            Err(err) => Err(err),
        }
    }
}

fn validate_probabilities(probs: impl IntoIterator<Item = f64>) -> Result<(), AgentConfigError> {
    for p in probs {
        if !(0.0..=1.0).contains(&p) {
            return Err(AgentConfigError::InvalidProbability(p));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::agent::{Bot, FoldTier};

    #[test]
    fn test_defaults_are_valid() {
        assert!(AgentConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(AgentConfig::default(), AgentConfig::from_json("{}").unwrap());
    }

    #[test]
    fn test_partial_policy() {
        let config = AgentConfig::from_json(
            r#"{"policy": {"call_floor": 0.3, "fold_tiers": [{"above": 0, "min_win_rate": 0.45}]}}"#,
        )
        .unwrap();
        assert_eq!(0.3, config.policy.call_floor);
        assert_eq!(
            vec![FoldTier {
                above: 0,
                min_win_rate: 0.45
            }],
            config.policy.fold_tiers
        );
        // Untouched fields keep their defaults.
        assert_eq!(0.95, config.policy.max_raise_win_rate);
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = AgentConfig {
            seed: Some(9),
            trials: 400,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(config, AgentConfig::from_json(&json).unwrap());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(matches!(
            AgentConfig::from_json(r#"{"trails": 10}"#),
            Err(AgentConfigError::JsonError(_))
        ));
    }

    #[test]
    fn test_zero_trials_rejected() {
        assert!(matches!(
            AgentConfig::from_json(r#"{"trials": 0}"#),
            Err(AgentConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_zero_epoch_rejected() {
        assert!(matches!(
            AgentConfig::from_json(r#"{"epoch_length": 0}"#),
            Err(AgentConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_bad_probability_rejected() {
        assert!(matches!(
            AgentConfig::from_json(r#"{"policy": {"call_floor": 1.5}}"#),
            Err(AgentConfigError::InvalidProbability(p)) if p == 1.5
        ));
    }

    #[test]
    fn test_negative_multiplier_rejected() {
        assert!(matches!(
            AgentConfig::from_json(r#"{"policy": {"opponent_bounty_pressure": -1.0}}"#),
            Err(AgentConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_build_agent() {
        let config = AgentConfig::from_json(
            r#"{"name": "hero", "trials": 50, "epoch_length": 10, "seed": 3, "policy": {"call_floor": 0.35}}"#,
        )
        .unwrap();
        let agent = config.build_agent().unwrap();
        assert_eq!("hero", agent.name());
        assert_eq!(50, agent.estimator().trials());
        assert_eq!(10, agent.tracker().epoch_length().get());
        assert_eq!(0.35, agent.policy().config().call_floor);
    }

    #[test]
    fn test_build_agent_rejects_invalid() {
        let config = AgentConfig {
            trials: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.build_agent(),
            Err(AgentConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"trials": 321}}"#).unwrap();

        let config = AgentConfig::from_file(file.path()).unwrap();
        assert_eq!(321, config.trials);

        let path = file.path().to_str().unwrap().to_string();
        assert_eq!(321, AgentConfig::from_str_or_file(&path).unwrap().trials);
    }

    #[test]
    fn test_from_str_or_file_falls_back_to_json() {
        let config = AgentConfig::from_str_or_file(r#"{"trials": 12}"#).unwrap();
        assert_eq!(12, config.trials);
    }
}
