use std::sync::atomic::{AtomicUsize, Ordering};

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, instrument, trace};

use crate::bounty::{BeliefState, BountyTracker, HandOutcome};
use crate::holdem::MonteCarloEstimator;

use super::{Action, AgentError, Bot, Decision, DecisionContext, DecisionPolicy, HandRecord};

/// The bounty hold'em bot.
///
/// Each decision runs a monte carlo estimate of the hand, then hands the win
/// rate and the current beliefs about the opponent's bounty to the
/// [`DecisionPolicy`]. Beliefs are updated from every hand outcome and reset
/// when the bounties are re-assigned.
///
/// All randomness comes from the agent's own `StdRng`, so two agents built
/// with the same seed make the same decisions.
#[derive(Debug, Clone)]
pub struct BountyAgent {
    name: String,
    estimator: MonteCarloEstimator,
    tracker: BountyTracker,
    policy: DecisionPolicy,
    beliefs: BeliefState,
    hand_number: u32,
    rng: StdRng,
}

impl BountyAgent {
    pub fn new(
        name: impl Into<String>,
        estimator: MonteCarloEstimator,
        tracker: BountyTracker,
        policy: DecisionPolicy,
        rng: StdRng,
    ) -> Self {
        Self {
            name: name.into(),
            estimator,
            tracker,
            policy,
            beliefs: BeliefState::default(),
            hand_number: 0,
            rng,
        }
    }

    /// An agent with the default estimator, tracker and policy and a
    /// deterministic rng.
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self::new(
            name,
            MonteCarloEstimator::default(),
            BountyTracker::default(),
            DecisionPolicy::default(),
            StdRng::seed_from_u64(seed),
        )
    }

    pub fn estimator(&self) -> &MonteCarloEstimator {
        &self.estimator
    }

    pub fn tracker(&self) -> &BountyTracker {
        &self.tracker
    }

    pub fn policy(&self) -> &DecisionPolicy {
        &self.policy
    }

    /// What the agent currently believes about the opponent's bounty.
    pub fn beliefs(&self) -> BeliefState {
        self.beliefs
    }

    /// The last hand number seen by `handle_new_round`.
    pub fn hand_number(&self) -> u32 {
        self.hand_number
    }

    /// Like [`Bot::get_action`] but also returns the rule that fired and
    /// the pot odds it saw.
    ///
    /// # Errors
    ///
    /// `AgentError::Holdem` if the hand can't be estimated, or any of the
    /// validation errors from [`Action::validate`] if the policy's action
    /// isn't one the engine will take.
    #[instrument(
        level = "trace",
        skip(self, record),
        fields(agent_name = %self.name, hand_number = self.hand_number, street = %record.street())
    )]
    pub fn decide(&mut self, record: &HandRecord) -> Result<Decision, AgentError> {
        let win_rate = self
            .estimator
            .estimate(record.own_cards(), record.board(), &mut self.rng)?;
        trace!(
            win_rate,
            continue_cost = record.continue_cost(),
            candidates = %self.beliefs.candidates,
            "estimated hand strength"
        );

        let ctx = DecisionContext::from_record(record, win_rate, self.beliefs.candidates);
        let decision = self.policy.explain(&ctx);
        decision
            .action
            .validate(record.legal(), record.raise_bounds())?;

        debug!(
            action = %decision.action,
            rule = %decision.rule,
            win_rate = decision.win_rate,
            pot_odds = decision.pot_odds,
            "BountyAgent decision"
        );
        Ok(decision)
    }
}

impl Default for BountyAgent {
    fn default() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let idx = COUNTER.fetch_add(1, Ordering::Relaxed);
        Self::new(
            format!("BountyAgent-{idx}"),
            MonteCarloEstimator::default(),
            BountyTracker::default(),
            DecisionPolicy::default(),
            StdRng::from_rng(&mut rand::rng()),
        )
    }
}

impl Bot for BountyAgent {
    fn handle_new_round(&mut self, hand_number: u32) {
        self.hand_number = hand_number;
        self.beliefs = self.tracker.begin_hand(self.beliefs, hand_number);
    }

    fn get_action(&mut self, record: &HandRecord) -> Result<Action, AgentError> {
        self.decide(record).map(|decision| decision.action)
    }

    fn handle_round_over(&mut self, outcome: &HandOutcome) {
        self.beliefs = self.tracker.observe(self.beliefs, outcome);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
