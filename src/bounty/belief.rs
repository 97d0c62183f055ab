use std::fmt;
use std::ops::BitAnd;

use crate::core::{Card, Value};

/// Mask with one bit for each of the 13 values.
const ALL_VALUES: u16 = (1 << 13) - 1;

/// An ordered set of card values.
///
/// Used as the candidates for an opponent's bounty rank.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BeliefSet {
    values: u16,
}

impl Default for BeliefSet {
    /// With no information every rank is possible.
    fn default() -> Self {
        Self::full()
    }
}

impl BeliefSet {
    /// Every value from two to ace.
    pub const fn full() -> Self {
        Self {
            values: ALL_VALUES,
        }
    }

    pub const fn empty() -> Self {
        Self { values: 0 }
    }

    /// The distinct values among `cards`.
    pub fn values_of<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Self {
        cards.into_iter().map(|c| c.value).collect()
    }

    pub fn contains(&self, value: Value) -> bool {
        self.values & (1 << value as u16) != 0
    }

    pub fn insert(&mut self, value: Value) {
        self.values |= 1 << value as u16;
    }

    pub fn len(&self) -> usize {
        self.values.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.values == 0
    }

    pub fn is_full(&self) -> bool {
        self.values == ALL_VALUES
    }

    pub fn is_subset(&self, other: &Self) -> bool {
        self.values & !other.values == 0
    }

    /// The only remaining value, if the set has narrowed down to one.
    pub fn single(&self) -> Option<Value> {
        if self.values.count_ones() == 1 {
            Value::from_u8(self.values.trailing_zeros() as u8)
        } else {
            None
        }
    }

    /// Values in `self` that aren't in `other`.
    pub fn difference(&self, other: &Self) -> Self {
        Self {
            values: self.values & !other.values,
        }
    }

    /// Values lowest first.
    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        Value::values().into_iter().filter(move |v| self.contains(*v))
    }
}

impl BitAnd for BeliefSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self {
            values: self.values & rhs.values,
        }
    }
}

impl FromIterator<Value> for BeliefSet {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        let mut set = Self::empty();
        for v in iter {
            set.insert(v);
        }
        set
    }
}

impl fmt::Debug for BeliefSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|v| v.to_char())).finish()
    }
}

impl fmt::Display for BeliefSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
