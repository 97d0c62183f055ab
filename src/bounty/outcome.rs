use crate::core::{Card, Value};

use super::BeliefSet;

/// What we legally learn when a hand is over.
///
/// There is deliberately no field for the opponent's bounty rank. Even when
/// the engine's state carries it, it isn't ours to read.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HandOutcome {
    /// 1 based number of the hand in the match.
    pub hand_number: u32,
    /// Chips won (positive) or lost (negative) this hand.
    pub delta: i32,
    /// Our bounty rank showed up in our hand or on the board.
    pub own_bounty_hit: bool,
    /// The opponent's bounty rank showed up in their hand or on the board.
    pub opponent_bounty_hit: bool,
    /// Our bounty rank for this hand.
    pub own_bounty: Option<Value>,
    /// Community cards dealt before the hand ended.
    pub board: Vec<Card>,
    /// The opponent's hole cards, empty if they weren't shown.
    pub opponent_cards: Vec<Card>,
}

impl HandOutcome {
    pub fn is_loss(&self) -> bool {
        self.delta < 0
    }

    pub fn went_to_showdown(&self) -> bool {
        !self.opponent_cards.is_empty()
    }

    /// Values of every card we got to see that the opponent could use: the
    /// board and, after a showdown, their hole cards.
    pub fn revealed_values(&self) -> BeliefSet {
        BeliefSet::values_of(self.board.iter().chain(self.opponent_cards.iter()))
    }
}
