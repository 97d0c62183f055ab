use std::cmp::Ordering;
use std::num::NonZeroU32;

use tracing::{debug, warn};

use super::{BeliefSet, HandOutcome};

/// Bounties are re-assigned every 25 hands.
pub const DEFAULT_EPOCH_LENGTH: NonZeroU32 = match NonZeroU32::new(25) {
    Some(n) => n,
    None => unreachable!(),
};

/// What we currently believe about the opponent's bounty.
///
/// This is a plain value: the tracker takes one in and hands a new one back
/// so the owner decides where it lives.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BeliefState {
    /// Ranks the opponent's bounty could still be.
    pub candidates: BeliefSet,
    /// Zero based epoch the candidates belong to.
    pub epoch: u32,
    /// Number of updates skipped because they contradicted the candidates.
    pub contradictions: u32,
}

impl BeliefState {
    /// Fresh state at the start of `epoch`, keeping the contradiction count
    /// since that's a match long statistic.
    fn reset_to(self, epoch: u32) -> Self {
        Self {
            candidates: BeliefSet::full(),
            epoch,
            contradictions: self.contradictions,
        }
    }
}

/// Narrows down the opponent's bounty rank one hand at a time.
///
/// Two kinds of evidence are used:
///
/// - The opponent hit their bounty and showed their cards. The bounty has to
///   be one of the revealed ranks.
/// - We lost, the opponent didn't hit, and cards were revealed. None of the
///   revealed ranks can be the bounty, otherwise it would have hit.
///
/// Inside an epoch the candidates only ever shrink. They go back to every
/// rank when a new epoch starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BountyTracker {
    epoch_length: NonZeroU32,
}

impl Default for BountyTracker {
    fn default() -> Self {
        Self::new(DEFAULT_EPOCH_LENGTH)
    }
}

impl BountyTracker {
    pub fn new(epoch_length: NonZeroU32) -> Self {
        Self { epoch_length }
    }

    pub fn epoch_length(&self) -> NonZeroU32 {
        self.epoch_length
    }

    /// The zero based epoch that 1 based `hand_number` falls in.
    pub fn epoch_of(&self, hand_number: u32) -> u32 {
        hand_number.saturating_sub(1) / self.epoch_length.get()
    }

    /// Move `state` to the epoch of `hand_number`, starting over if that's a
    /// later epoch. A hand from an earlier epoch leaves `state` alone.
    pub fn begin_hand(&self, state: BeliefState, hand_number: u32) -> BeliefState {
        let epoch = self.epoch_of(hand_number);
        match epoch.cmp(&state.epoch) {
            Ordering::Greater => {
                debug!(hand_number, epoch, "new bounty epoch, resetting beliefs");
                state.reset_to(epoch)
            }
            Ordering::Equal => state,
            Ordering::Less => {
                warn!(
                    hand_number,
                    epoch,
                    current_epoch = state.epoch,
                    "hand is from an earlier epoch, keeping beliefs"
                );
                state
            }
        }
    }

    /// Learn from the end of a hand.
    ///
    /// An update that would leave no candidates is skipped and counted in
    /// `contradictions` instead. Outcomes from an earlier epoch are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use bounty_holdem::bounty::{BeliefState, BountyTracker, HandOutcome};
    /// use bounty_holdem::core::{Value, parse_cards};
    ///
    /// let tracker = BountyTracker::default();
    /// let outcome = HandOutcome {
    ///     hand_number: 3,
    ///     delta: -120,
    ///     opponent_bounty_hit: true,
    ///     board: parse_cards("Ah Kd 2c 2s 9d").unwrap(),
    ///     opponent_cards: parse_cards("9s 2h").unwrap(),
    ///     ..Default::default()
    /// };
    ///
    /// let state = tracker.observe(BeliefState::default(), &outcome);
    /// assert_eq!(4, state.candidates.len());
    /// assert!(state.candidates.contains(Value::Nine));
    /// ```
    pub fn observe(&self, state: BeliefState, outcome: &HandOutcome) -> BeliefState {
        if self.epoch_of(outcome.hand_number) < state.epoch {
            warn!(
                hand_number = outcome.hand_number,
                current_epoch = state.epoch,
                "ignoring outcome from an earlier epoch"
            );
            return state;
        }
        let mut state = self.begin_hand(state, outcome.hand_number);
        let revealed = outcome.revealed_values();

        let updated = if outcome.opponent_bounty_hit {
            if !outcome.went_to_showdown() {
                // Their bounty may be hiding in cards we never saw.
                return state;
            }
            state.candidates & revealed
        } else if outcome.is_loss() && !revealed.is_empty() {
            state.candidates.difference(&revealed)
        } else {
            return state;
        };

        if updated.is_empty() {
            state.contradictions += 1;
            warn!(
                hand_number = outcome.hand_number,
                candidates = %state.candidates,
                %revealed,
                "bounty evidence contradicts beliefs, ignoring it"
            );
            return state;
        }

        debug!(
            hand_number = outcome.hand_number,
            own_bounty_hit = outcome.own_bounty_hit,
            before = %state.candidates,
            after = %updated,
            "updated opponent bounty beliefs"
        );
        state.candidates = updated;
        state
    }
}
