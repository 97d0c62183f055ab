//! The betting policy.
//!
//! A decision is an ordered cascade of rules where the first match wins:
//!
//! 1. Fold when the cost to continue is too high for the win rate.
//! 2. Raise for value with a strong hand.
//! 3. Min raise when nothing is bet and our own bounty is live.
//! 4. Check.
//! 5. Call, unless the hand is too weak for the pot odds.
use std::fmt::{self, Display};

use crate::bounty::BeliefSet;
use crate::core::{CardBitSet, Value};
use crate::holdem::Street;

use super::{Action, ActionKind, HandRecord, LegalActions, RaiseBounds};

/// Minimum win rate needed to pay more than `above` chips to continue.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoldTier {
    pub above: u32,
    pub min_win_rate: f64,
}

/// All of the knobs of [`DecisionPolicy`].
///
/// The defaults are the tuned values the bot plays with.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyConfig {
    /// Fold with less than `min_win_rate` when the cost is above `above`.
    /// The strictest matching tier applies.
    pub fold_tiers: Vec<FoldTier>,
    /// Win rate needed for a big raise.
    pub max_raise_win_rate: f64,
    /// Win rate needed for a scaled raise.
    pub raise_win_rate: f64,
    /// Win rate where the scaled raise starts growing from the minimum.
    pub raise_interpolation_floor: f64,
    /// Call nothing below this win rate.
    pub call_floor: f64,
    /// Fold when the win rate is below this fraction of the pot odds.
    pub pot_odds_fold_fraction: f64,
    /// How much more both the cost to continue and our own pip weigh when
    /// the opponent is chasing a bounty rank that we're already holding or
    /// that is on the board.
    pub opponent_bounty_pressure: f64,
    /// How much more the opponent's pip is worth when our bounty is live.
    pub own_bounty_pip_weight: f64,
    /// Largest combined flop pip where a bounty open is still made.
    pub flop_bounty_pip_limit: u32,
    /// Keeps pot odds finite when nothing has been bet.
    pub pot_odds_epsilon: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            fold_tiers: vec![
                FoldTier {
                    above: 0,
                    min_win_rate: 0.50,
                },
                FoldTier {
                    above: 50,
                    min_win_rate: 0.65,
                },
                FoldTier {
                    above: 100,
                    min_win_rate: 0.75,
                },
                FoldTier {
                    above: 200,
                    min_win_rate: 0.85,
                },
            ],
            max_raise_win_rate: 0.95,
            raise_win_rate: 0.75,
            raise_interpolation_floor: 0.70,
            call_floor: 0.40,
            pot_odds_fold_fraction: 0.25,
            opponent_bounty_pressure: 1.5,
            own_bounty_pip_weight: 1.5,
            flop_bounty_pip_limit: 50,
            pot_odds_epsilon: 0.1,
        }
    }
}

/// Everything a single decision depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionContext {
    /// Estimated chance of winning at showdown, in `[0, 1]`.
    pub win_rate: f64,
    pub street: Street,
    pub legal: LegalActions,
    pub raise_bounds: Option<RaiseBounds>,
    pub my_pip: u32,
    pub opp_pip: u32,
    pub own_bounty: Value,
    /// Our hole cards and the board.
    pub cards_in_play: CardBitSet,
    /// Candidates for the opponent's bounty.
    pub belief: BeliefSet,
}

impl DecisionContext {
    pub fn from_record(record: &HandRecord, win_rate: f64, belief: BeliefSet) -> Self {
        Self {
            win_rate,
            street: record.street(),
            legal: record.legal(),
            raise_bounds: record.raise_bounds(),
            my_pip: record.my_pip(),
            opp_pip: record.opp_pip(),
            own_bounty: record.own_bounty(),
            cards_in_play: record.cards_in_play(),
            belief,
        }
    }

    pub fn continue_cost(&self) -> u32 {
        self.opp_pip.saturating_sub(self.my_pip)
    }

    /// Our bounty rank is in our hand or on the board.
    pub fn own_bounty_live(&self) -> bool {
        self.cards_in_play.contains_value(self.own_bounty)
    }

    /// The opponent's bounty has been narrowed to one rank and we can see
    /// that rank in our hand or on the board.
    pub fn opponent_bounty_blocked(&self) -> bool {
        self.belief
            .single()
            .is_some_and(|v| self.cards_in_play.contains_value(v))
    }

    fn raise_bounds_if_legal(&self) -> Option<RaiseBounds> {
        self.raise_bounds
            .filter(|_| self.legal.contains(ActionKind::Raise))
    }
}

/// Which rule of the cascade produced an action.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleFired {
    /// Continuing cost more than the win rate justifies.
    FoldThreshold,
    /// Near certain win, raise big.
    MaxRaise,
    /// Strong hand, raise an amount that grows with the win rate.
    ScaledRaise,
    /// Nothing to call and our bounty is live, open with a min raise.
    BountyOpen,
    Check,
    /// Too weak to call.
    FallbackFold,
    FallbackCall,
}

impl Display for RuleFired {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuleFired::FoldThreshold => "fold threshold",
            RuleFired::MaxRaise => "max raise",
            RuleFired::ScaledRaise => "scaled raise",
            RuleFired::BountyOpen => "bounty open",
            RuleFired::Check => "check",
            RuleFired::FallbackFold => "fallback fold",
            RuleFired::FallbackCall => "fallback call",
        };
        write!(f, "{name}")
    }
}

/// An action and why it was chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub action: Action,
    pub rule: RuleFired,
    pub win_rate: f64,
    /// Pot odds after the bounty adjustments.
    pub pot_odds: f64,
    /// Cost to continue after the bounty adjustments.
    pub effective_cost: f64,
}

/// Turns a [`DecisionContext`] into an [`Action`].
///
/// This is a pure function of the context. It always produces an action of
/// a legal kind, and any raise it returns is within the raise bounds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecisionPolicy {
    config: PolicyConfig,
}

impl DecisionPolicy {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Pick an action.
    ///
    /// # Examples
    ///
    /// ```
    /// use bounty_holdem::agent::{
    ///     Action, ActionKind, DecisionContext, DecisionPolicy, LegalActions,
    /// };
    /// use bounty_holdem::bounty::BeliefSet;
    /// use bounty_holdem::core::{CardBitSet, Value};
    /// use bounty_holdem::holdem::Street;
    ///
    /// let ctx = DecisionContext {
    ///     win_rate: 0.3,
    ///     street: Street::Flop,
    ///     legal: LegalActions::new(&[ActionKind::Fold, ActionKind::Call]),
    ///     raise_bounds: None,
    ///     my_pip: 0,
    ///     opp_pip: 10,
    ///     own_bounty: Value::Ace,
    ///     cards_in_play: CardBitSet::new(),
    ///     belief: BeliefSet::full(),
    /// };
    /// assert_eq!(Action::Fold, DecisionPolicy::default().decide(&ctx));
    /// ```
    pub fn decide(&self, ctx: &DecisionContext) -> Action {
        self.explain(ctx).action
    }

    /// Pick an action and report which rule chose it.
    pub fn explain(&self, ctx: &DecisionContext) -> Decision {
        let cfg = &self.config;
        let win_rate = ctx.win_rate;

        // The two bounty adjustments are independent of each other. Pressure
        // scales both the cost and what we've already put in.
        let mut cost = ctx.continue_cost() as f64;
        let mut my_pip = ctx.my_pip as f64;
        if ctx.opponent_bounty_blocked() {
            cost *= cfg.opponent_bounty_pressure;
            my_pip *= cfg.opponent_bounty_pressure;
        }
        let own_bounty_live = ctx.own_bounty_live();
        let opp_pip_weight = if own_bounty_live {
            cfg.own_bounty_pip_weight
        } else {
            1.0
        };
        let pot_odds = cost
            / (my_pip + opp_pip_weight * ctx.opp_pip as f64 + cost + cfg.pot_odds_epsilon);

        let decision = |action, rule| Decision {
            action,
            rule,
            win_rate,
            pot_odds,
            effective_cost: cost,
        };

        if cost > 0.0 && win_rate < self.required_win_rate(cost) {
            return decision(give_up(ctx), RuleFired::FoldThreshold);
        }

        if let Some(bounds) = ctx.raise_bounds_if_legal() {
            if win_rate > cfg.max_raise_win_rate && win_rate > pot_odds {
                // Bet more the fewer streets are left.
                let rounds_left = ctx.street.rounds_left();
                let amount = bounds.max() / (rounds_left * rounds_left);
                return decision(Action::Raise(bounds.clamp(amount)), RuleFired::MaxRaise);
            }

            if win_rate > cfg.raise_win_rate && win_rate > pot_odds {
                let spread = (bounds.max() - bounds.min()) as f64;
                let extra = (spread * (win_rate - cfg.raise_interpolation_floor)).max(0.0);
                let amount = bounds.min().saturating_add(extra as u32);
                return decision(Action::Raise(bounds.clamp(amount)), RuleFired::ScaledRaise);
            }

            let open_street = match ctx.street {
                Street::Preflop => true,
                Street::Flop => {
                    my_pip + (ctx.opp_pip as f64) < cfg.flop_bounty_pip_limit as f64
                }
                Street::Turn | Street::River => false,
            };
            if ctx.continue_cost() == 0 && own_bounty_live && open_street {
                return decision(Action::Raise(bounds.min()), RuleFired::BountyOpen);
            }
        }

        if ctx.legal.contains(ActionKind::Check) {
            return decision(Action::Check, RuleFired::Check);
        }

        if win_rate < cfg.call_floor || win_rate < cfg.pot_odds_fold_fraction * pot_odds {
            return decision(give_up(ctx), RuleFired::FallbackFold);
        }

        if ctx.legal.contains(ActionKind::Call) {
            decision(Action::Call, RuleFired::FallbackCall)
        } else {
            decision(give_up(ctx), RuleFired::FallbackFold)
        }
    }

    /// The win rate needed to pay `cost` chips to continue.
    fn required_win_rate(&self, cost: f64) -> f64 {
        self.config
            .fold_tiers
            .iter()
            .filter(|tier| cost > tier.above as f64)
            .map(|tier| tier.min_win_rate)
            .fold(0.0, f64::max)
    }
}

/// The cheapest way out of a hand that the engine will accept.
fn give_up(ctx: &DecisionContext) -> Action {
    if ctx.legal.contains(ActionKind::Fold) {
        Action::Fold
    } else if ctx.legal.contains(ActionKind::Check) {
        Action::Check
    } else if ctx.legal.contains(ActionKind::Call) {
        Action::Call
    } else if let Some(bounds) = ctx.raise_bounds_if_legal() {
        Action::Raise(bounds.min())
    } else {
        Action::Call
    }
}
