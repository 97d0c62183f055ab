use super::{Card, CardBitSet};

/// Hand categories from worst to best.
///
/// Each category carries a u32 that orders hands inside the category. The
/// derived `Ord` compares the category first and then that value, so two
/// ranks can be compared directly to find the winner of a showdown.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum Rank {
    /// No matches
    HighCard(u32),
    /// One Card matches another.
    OnePair(u32),
    /// Two different pair of matching cards.
    TwoPair(u32),
    /// Three of the same value.
    ThreeOfAKind(u32),
    /// Five cards in a sequence
    Straight(u32),
    /// Five cards of the same suit
    Flush(u32),
    /// Three of one value and two of another value
    FullHouse(u32),
    /// Four of the same value.
    FourOfAKind(u32),
    /// Five cards in a sequence all for the same suit.
    StraightFlush(u32),
}

/// Ace, two, three, four, five.
const WHEEL: u32 = 0b1_0000_0000_1111;

/// Find the highest straight in a set of values.
///
/// The wheel is 0, six high is 1 and so on up to broadway at 9.
fn rank_straight(value_set: u32) -> Option<u32> {
    // Only the top card of a run of five survives the shifts.
    let left =
        value_set & (value_set << 1) & (value_set << 2) & (value_set << 3) & (value_set << 4);
    let idx = left.leading_zeros();
    if idx < 32 {
        Some(32 - 4 - idx)
    } else if value_set & WHEEL == WHEEL {
        Some(0)
    } else {
        None
    }
}

/// Keep only the most significant bit.
fn keep_highest(rank: u32) -> u32 {
    if rank == 0 {
        return 0;
    }
    1 << (32 - rank.leading_zeros() - 1)
}

/// Keep the `to_keep` most significant bits.
fn keep_n(rank: u32, to_keep: u32) -> u32 {
    let mut result = rank;
    while result.count_ones() > to_keep {
        result &= result - 1;
    }
    result
}

/// Rank the best five card hand that can be made out of `cards`.
fn rank_cards(cards: impl Iterator<Item = Card>) -> Rank {
    let mut value_to_count = [0_u8; 13];
    let mut count_to_value = [0_u32; 5];
    let mut suit_value_sets = [0_u32; 4];
    let mut value_set: u32 = 0;

    for c in cards {
        let v = c.value as u8;
        value_set |= 1 << v;
        value_to_count[v as usize] = value_to_count[v as usize].saturating_add(1);
        suit_value_sets[c.suit as usize] |= 1 << v;
    }

    // Repeated cards can push a count past four, treat those as quads.
    for (value, &count) in value_to_count.iter().enumerate() {
        count_to_value[count.min(4) as usize] |= 1 << value;
    }

    // With at most 7 cards only one suit can reach five.
    if let Some(flush) = suit_value_sets.iter().find(|sv| sv.count_ones() >= 5) {
        return match rank_straight(*flush) {
            Some(high) => Rank::StraightFlush(high),
            None => Rank::Flush(keep_n(*flush, 5)),
        };
    }

    let quads = count_to_value[4];
    let sets = count_to_value[3];
    let pairs = count_to_value[2];

    if quads != 0 {
        let kicker = keep_highest(value_set ^ quads);
        Rank::FourOfAKind((quads << 13) | kicker)
    } else if sets.count_ones() == 2 {
        // The lower set plays as the pair.
        let set = keep_highest(sets);
        Rank::FullHouse((set << 13) | (sets ^ set))
    } else if sets != 0 && pairs != 0 {
        Rank::FullHouse((sets << 13) | keep_highest(pairs))
    } else if let Some(high) = rank_straight(value_set) {
        Rank::Straight(high)
    } else if sets != 0 {
        let kickers = keep_n(value_set ^ sets, 2);
        Rank::ThreeOfAKind((sets << 13) | kickers)
    } else if pairs.count_ones() >= 2 {
        // A third pair can still play as the kicker.
        let top_pairs = keep_n(pairs, 2);
        let kicker = keep_highest(value_set ^ top_pairs);
        Rank::TwoPair((top_pairs << 13) | kicker)
    } else if pairs == 0 {
        Rank::HighCard(keep_n(value_set, 5))
    } else {
        let kickers = keep_n(value_set ^ pairs, 3);
        Rank::OnePair((pairs << 13) | kickers)
    }
}

/// Anything that can be ranked as a poker hand.
///
/// This is the comparison capability the estimator relies on: rank both
/// hands, the greater `Rank` wins and equal ranks split.
pub trait Rankable {
    fn cards(&self) -> impl Iterator<Item = Card>;

    /// Rank the best 5 card hand out of these cards.
    ///
    /// The cards should be distinct. A repeated card never panics, but the
    /// resulting rank doesn't describe a real hand.
    ///
    /// # Examples
    /// ```
    /// use bounty_holdem::core::{Rank, Rankable, parse_cards};
    ///
    /// let hand = parse_cards("2h2d8d8sKd6sTh").unwrap();
    /// let rank = hand.rank();
    /// assert!(Rank::TwoPair(0) <= rank);
    /// assert!(Rank::TwoPair(u32::MAX) >= rank);
    /// ```
    fn rank(&self) -> Rank {
        rank_cards(self.cards())
    }
}

impl Rankable for CardBitSet {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter()
    }
}

impl Rankable for [Card] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for Vec<Card> {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}
