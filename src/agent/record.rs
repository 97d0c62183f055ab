use crate::core::{Card, CardBitSet, CardError, Value};
use crate::holdem::Street;

use super::{ActionKind, AgentError, LegalActions, RaiseBounds};

/// Everything the engine tells us at a decision point.
///
/// Built once per decision with [`HandRecordBuilder`], which checks that
/// the cards, street and raise bounds are consistent. Read only after that.
#[derive(Debug, Clone, PartialEq)]
pub struct HandRecord {
    own_cards: Vec<Card>,
    board: Vec<Card>,
    street: Street,
    my_pip: u32,
    opp_pip: u32,
    my_stack: u32,
    opp_stack: u32,
    starting_stack: u32,
    legal: LegalActions,
    raise_bounds: Option<RaiseBounds>,
    own_bounty: Value,
}

impl HandRecord {
    pub fn builder() -> HandRecordBuilder {
        HandRecordBuilder::default()
    }

    pub fn own_cards(&self) -> &[Card] {
        &self.own_cards
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn street(&self) -> Street {
        self.street
    }

    /// Chips we've put in on this street.
    pub fn my_pip(&self) -> u32 {
        self.my_pip
    }

    /// Chips the opponent has put in on this street.
    pub fn opp_pip(&self) -> u32 {
        self.opp_pip
    }

    pub fn my_stack(&self) -> u32 {
        self.my_stack
    }

    pub fn opp_stack(&self) -> u32 {
        self.opp_stack
    }

    pub fn legal(&self) -> LegalActions {
        self.legal
    }

    pub fn raise_bounds(&self) -> Option<RaiseBounds> {
        self.raise_bounds
    }

    pub fn own_bounty(&self) -> Value {
        self.own_bounty
    }

    /// Chips needed to stay in the hand.
    pub fn continue_cost(&self) -> u32 {
        self.opp_pip.saturating_sub(self.my_pip)
    }

    /// Total chips we've put in the pot this hand.
    pub fn my_contribution(&self) -> u32 {
        self.starting_stack.saturating_sub(self.my_stack)
    }

    /// Total chips the opponent has put in the pot this hand.
    pub fn opp_contribution(&self) -> u32 {
        self.starting_stack.saturating_sub(self.opp_stack)
    }

    /// Our hole cards plus the board.
    pub fn cards_in_play(&self) -> CardBitSet {
        self.own_cards.iter().chain(self.board.iter()).copied().collect()
    }
}

/// Builder for [`HandRecord`]. Cards, legal actions and the bounty are
/// required, chip counts default to zero.
///
/// # Examples
///
/// ```
/// use bounty_holdem::agent::{ActionKind, HandRecord};
/// use bounty_holdem::core::{Value, parse_cards};
/// use bounty_holdem::holdem::Street;
///
/// let record = HandRecord::builder()
///     .own_cards(parse_cards("AsKd").unwrap())
///     .board(parse_cards("7h2c9s").unwrap())
///     .pips(10, 30)
///     .stacks(390, 370, 400)
///     .legal(&[ActionKind::Fold, ActionKind::Call, ActionKind::Raise])
///     .raise_bounds(50, 390)
///     .own_bounty(Value::King)
///     .build()
///     .unwrap();
///
/// assert_eq!(Street::Flop, record.street());
/// assert_eq!(20, record.continue_cost());
/// ```
#[derive(Debug, Clone, Default)]
pub struct HandRecordBuilder {
    own_cards: Option<Vec<Card>>,
    board: Vec<Card>,
    my_pip: u32,
    opp_pip: u32,
    my_stack: u32,
    opp_stack: u32,
    starting_stack: u32,
    legal: LegalActions,
    raise_bounds: Option<(u32, u32)>,
    own_bounty: Option<Value>,
}

impl HandRecordBuilder {
    pub fn own_cards(mut self, cards: Vec<Card>) -> Self {
        self.own_cards = Some(cards);
        self
    }

    /// Community cards dealt so far. Leave unset preflop.
    pub fn board(mut self, cards: Vec<Card>) -> Self {
        self.board = cards;
        self
    }

    pub fn pips(mut self, my_pip: u32, opp_pip: u32) -> Self {
        self.my_pip = my_pip;
        self.opp_pip = opp_pip;
        self
    }

    pub fn stacks(mut self, my_stack: u32, opp_stack: u32, starting_stack: u32) -> Self {
        self.my_stack = my_stack;
        self.opp_stack = opp_stack;
        self.starting_stack = starting_stack;
        self
    }

    pub fn legal(mut self, kinds: &[ActionKind]) -> Self {
        self.legal = LegalActions::new(kinds);
        self
    }

    pub fn raise_bounds(mut self, min: u32, max: u32) -> Self {
        self.raise_bounds = Some((min, max));
        self
    }

    pub fn own_bounty(mut self, value: Value) -> Self {
        self.own_bounty = Some(value);
        self
    }

    /// # Errors
    ///
    /// - `AgentError::MissingField` if the hole cards or bounty weren't set.
    /// - `AgentError::WrongHoleCardCount` unless there are two hole cards.
    /// - `AgentError::Card` when a card is repeated.
    /// - `AgentError::Holdem` for a board that isn't 0, 3, 4 or 5 cards.
    /// - `AgentError::NoLegalActions`, `AgentError::MissingRaiseBounds` or
    ///   `AgentError::InvalidRaiseBounds` for inconsistent actions.
    pub fn build(self) -> Result<HandRecord, AgentError> {
        let own_cards = self.own_cards.ok_or(AgentError::MissingField("own cards"))?;
        let own_bounty = self.own_bounty.ok_or(AgentError::MissingField("own bounty"))?;

        if own_cards.len() != 2 {
            return Err(AgentError::WrongHoleCardCount(own_cards.len()));
        }
        let mut seen = CardBitSet::new();
        for &card in own_cards.iter().chain(self.board.iter()) {
            if !seen.insert(card) {
                return Err(CardError::DuplicateCard(card).into());
            }
        }
        let street = Street::from_board_size(self.board.len())?;

        if self.legal.is_empty() {
            return Err(AgentError::NoLegalActions);
        }
        let raise_bounds = match self.raise_bounds {
            Some((min, max)) => Some(RaiseBounds::new(min, max)?),
            None if self.legal.contains(ActionKind::Raise) => {
                return Err(AgentError::MissingRaiseBounds);
            }
            None => None,
        };

        Ok(HandRecord {
            own_cards,
            board: self.board,
            street,
            my_pip: self.my_pip,
            opp_pip: self.opp_pip,
            my_stack: self.my_stack,
            opp_stack: self.opp_stack,
            starting_stack: self.starting_stack,
            legal: self.legal,
            raise_bounds,
            own_bounty,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Suit, parse_cards};
    use crate::holdem::HoldemError;

    fn base() -> HandRecordBuilder {
        HandRecord::builder()
            .own_cards(parse_cards("AsKd").unwrap())
            .legal(&[ActionKind::Fold, ActionKind::Call])
            .own_bounty(Value::Two)
    }

    #[test]
    fn test_preflop_defaults() {
        let record = base().stacks(398, 396, 400).pips(2, 4).build().unwrap();
        assert_eq!(Street::Preflop, record.street());
        assert_eq!(2, record.continue_cost());
        assert_eq!(2, record.my_contribution());
        assert_eq!(4, record.opp_contribution());
        assert_eq!(None, record.raise_bounds());
        assert_eq!(2, record.cards_in_play().count());
    }

    #[test]
    fn test_continue_cost_never_negative() {
        let record = base().pips(30, 10).build().unwrap();
        assert_eq!(0, record.continue_cost());
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            Err(AgentError::MissingField("own cards")),
            HandRecord::builder().own_bounty(Value::Two).build()
        );
        assert_eq!(
            Err(AgentError::MissingField("own bounty")),
            HandRecord::builder()
                .own_cards(parse_cards("AsKd").unwrap())
                .build()
        );
    }

    #[test]
    fn test_wrong_hole_card_count() {
        assert_eq!(
            Err(AgentError::WrongHoleCardCount(3)),
            base().own_cards(parse_cards("AsKdQh").unwrap()).build()
        );
    }

    #[test]
    fn test_duplicate_between_hand_and_board() {
        assert_eq!(
            Err(AgentError::Card(CardError::DuplicateCard(Card::new(
                Value::King,
                Suit::Diamond
            )))),
            base().board(parse_cards("Kd7h2c").unwrap()).build()
        );
    }

    #[test]
    fn test_bad_board_size() {
        assert_eq!(
            Err(AgentError::Holdem(HoldemError::InvalidBoardSize(1))),
            base().board(parse_cards("7h").unwrap()).build()
        );
    }

    #[test]
    fn test_raise_needs_bounds() {
        assert_eq!(
            Err(AgentError::MissingRaiseBounds),
            base()
                .legal(&[ActionKind::Check, ActionKind::Raise])
                .build()
        );
        assert_eq!(
            Err(AgentError::InvalidRaiseBounds { min: 10, max: 5 }),
            base()
                .legal(&[ActionKind::Check, ActionKind::Raise])
                .raise_bounds(10, 5)
                .build()
        );
    }

    #[test]
    fn test_no_legal_actions() {
        assert_eq!(
            Err(AgentError::NoLegalActions),
            base().legal(&[]).build()
        );
    }
}
