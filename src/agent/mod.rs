//! The bot side of the game.
//!
//! The engine hands the bot a [`HandRecord`] whenever it has to act and a
//! [`HandOutcome`] when a hand is over. [`BountyAgent`] estimates hand
//! strength, feeds it through the [`DecisionPolicy`] and checks the result
//! is something the engine will accept.
mod action;
mod bounty_agent;
#[cfg(feature = "serde")]
mod config;
mod errors;
mod policy;
mod record;

use crate::bounty::HandOutcome;

/// The lifecycle the game engine drives a bot through.
///
/// Calls arrive in order: `handle_new_round`, then any number of
/// `get_action`, then `handle_round_over`. Hand numbers start at 1.
pub trait Bot {
    /// A new hand is about to be dealt.
    fn handle_new_round(&mut self, hand_number: u32);

    /// Choose an action for the current decision point.
    ///
    /// An error means the record and the returned action couldn't be made
    /// consistent. The caller decides what to send the engine in that case.
    fn get_action(&mut self, record: &HandRecord) -> Result<Action, AgentError>;

    /// The hand is over. This is the only place the bot gets to learn.
    fn handle_round_over(&mut self, outcome: &HandOutcome);

    fn name(&self) -> &str;
}

pub use action::{Action, ActionKind, LegalActions, RaiseBounds};
pub use bounty_agent::BountyAgent;
#[cfg(feature = "serde")]
pub use config::{AgentConfig, AgentConfigError};
pub use errors::AgentError;
pub use policy::{
    Decision, DecisionContext, DecisionPolicy, FoldTier, PolicyConfig, RuleFired,
};
pub use record::{HandRecord, HandRecordBuilder};
