use std::fmt;
use std::str::FromStr;

use super::CardError;

/// Card rank or value.
/// This is basically the face value - 2
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy, Hash)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s, lowest first.
    pub const fn values() -> [Self; 13] {
        VALUES
    }

    /// Take a u8 in 0..13 and turn it into a value.
    pub fn from_u8(v: u8) -> Option<Self> {
        VALUES.get(v as usize).copied()
    }

    /// Given a character parse that char into a value.
    /// Case is ignored as long as the char is in the ascii range (It should
    /// be).
    ///
    /// # Examples
    ///
    /// ```
    /// use bounty_holdem::core::Value;
    ///
    /// assert_eq!(Some(Value::Ace), Value::from_char('A'));
    /// assert_eq!(Some(Value::Ten), Value::from_char('t'));
    /// assert_eq!(None, Value::from_char('1'));
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::Ace),
            'K' => Some(Self::King),
            'Q' => Some(Self::Queen),
            'J' => Some(Self::Jack),
            'T' => Some(Self::Ten),
            '9' => Some(Self::Nine),
            '8' => Some(Self::Eight),
            '7' => Some(Self::Seven),
            '6' => Some(Self::Six),
            '5' => Some(Self::Five),
            '4' => Some(Self::Four),
            '3' => Some(Self::Three),
            '2' => Some(Self::Two),
            _ => None,
        }
    }

    /// Convert this Value to a char.
    pub fn to_char(self) -> char {
        match self {
            Self::Ace => 'A',
            Self::King => 'K',
            Self::Queen => 'Q',
            Self::Jack => 'J',
            Self::Ten => 'T',
            Self::Nine => '9',
            Self::Eight => '8',
            Self::Seven => '7',
            Self::Six => '6',
            Self::Five => '5',
            Self::Four => '4',
            Self::Three => '3',
            Self::Two => '2',
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Enum for the four different suits.
/// Suits carry no bounty information, they only matter for flushes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy, Hash)]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Clubs
    Club = 1,
    /// Hearts
    Heart = 2,
    /// Diamonds
    Diamond = 3,
}

const SUITS: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Self; 4] {
        SUITS
    }

    pub fn from_u8(s: u8) -> Option<Self> {
        SUITS.get(s as usize).copied()
    }

    /// Given a character that represents a suit try and parse that char.
    pub fn from_char(s: char) -> Option<Self> {
        match s.to_ascii_lowercase() {
            's' => Some(Self::Spade),
            'c' => Some(Self::Club),
            'h' => Some(Self::Heart),
            'd' => Some(Self::Diamond),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Self::Spade => 's',
            Self::Club => 'c',
            Self::Heart => 'h',
            Self::Diamond => 'd',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Position of the card in a 52 card universe, suit major.
    pub(crate) const fn index(self) -> u8 {
        (self.suit as u8) * 13 + self.value as u8
    }

    pub(crate) fn from_index(idx: u8) -> Option<Self> {
        Some(Self {
            value: Value::from_u8(idx % 13)?,
            suit: Suit::from_u8(idx / 13)?,
        })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parse a two character card like `Ah` or `9c`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let value_char = chars.next().ok_or(CardError::UnexpectedEnd)?;
        let suit_char = chars.next().ok_or(CardError::UnexpectedEnd)?;
        if chars.next().is_some() {
            return Err(CardError::UnparsedCharsRemaining);
        }
        let value = Value::from_char(value_char).ok_or(CardError::UnexpectedValueChar)?;
        let suit = Suit::from_char(suit_char).ok_or(CardError::UnexpectedSuitChar)?;
        Ok(Card::new(value, suit))
    }
}

/// Parse a run of cards such as `"AhKd"` or `"Ah Kd 2c"`.
///
/// Whitespace between cards is ignored. A card that shows up twice is
/// rejected since it can't exist in a single deal.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, CardError> {
    let compact: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.len() % 2 != 0 {
        return Err(CardError::UnexpectedEnd);
    }

    let mut seen = super::CardBitSet::new();
    let mut cards = Vec::with_capacity(compact.len() / 2);
    for pair in compact.chunks(2) {
        let value = Value::from_char(pair[0]).ok_or(CardError::UnexpectedValueChar)?;
        let suit = Suit::from_char(pair[1]).ok_or(CardError::UnexpectedSuitChar)?;
        let card = Card::new(value, suit);
        if seen.contains(card) {
            return Err(CardError::DuplicateCard(card));
        }
        seen.insert(card);
        cards.push(card);
    }
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor() {
        let c = Card::new(Value::Three, Suit::Spade);
        assert_eq!(Suit::Spade, c.suit);
        assert_eq!(Value::Three, c.value);
    }

    #[test]
    fn test_compare_values() {
        assert!(Value::Two < Value::Ace);
        assert!(Value::King < Value::Ace);
        assert_eq!(Value::Two, Value::Two);
    }

    #[test]
    fn test_value_char_round_trip_all() {
        for v in Value::values() {
            assert_eq!(Some(v), Value::from_char(v.to_char()));
        }
    }

    #[test]
    fn test_index_round_trip_all() {
        for idx in 0..52 {
            let card = Card::from_index(idx).unwrap();
            assert_eq!(idx, card.index());
        }
        assert_eq!(None, Card::from_index(52));
    }

    #[test]
    fn test_parse_card() {
        let c: Card = "Td".parse().unwrap();
        assert_eq!(Card::new(Value::Ten, Suit::Diamond), c);
        assert_eq!("Td", c.to_string());
    }

    #[test]
    fn test_parse_card_errors() {
        assert_eq!(Err(CardError::UnexpectedEnd), "A".parse::<Card>());
        assert_eq!(Err(CardError::UnexpectedValueChar), "1h".parse::<Card>());
        assert_eq!(Err(CardError::UnexpectedSuitChar), "Ax".parse::<Card>());
        assert_eq!(
            Err(CardError::UnparsedCharsRemaining),
            "Ahh".parse::<Card>()
        );
    }

    #[test]
    fn test_parse_cards_with_spaces() {
        let cards = parse_cards("Ah Kd 2c").unwrap();
        assert_eq!(3, cards.len());
        assert_eq!(Card::new(Value::Two, Suit::Club), cards[2]);
    }

    #[test]
    fn test_parse_cards_rejects_duplicate() {
        let err = parse_cards("AhKdAh").unwrap_err();
        assert_eq!(
            CardError::DuplicateCard(Card::new(Value::Ace, Suit::Heart)),
            err
        );
    }

    #[test]
    fn test_parse_cards_empty() {
        assert!(parse_cards("").unwrap().is_empty());
    }
}
