use std::fmt::{self, Display};

use super::HoldemError;

/// The four betting rounds of a hold'em hand.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Default)]
pub enum Street {
    #[default]
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    /// Work out the street from how many community cards are out.
    ///
    /// # Errors
    ///
    /// `HoldemError::InvalidBoardSize` for anything other than 0, 3, 4 or 5.
    pub fn from_board_size(board_size: usize) -> Result<Self, HoldemError> {
        match board_size {
            0 => Ok(Street::Preflop),
            3 => Ok(Street::Flop),
            4 => Ok(Street::Turn),
            5 => Ok(Street::River),
            n => Err(HoldemError::InvalidBoardSize(n)),
        }
    }

    /// Number of community cards dealt by the time this street is bet.
    pub fn board_size(&self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }

    /// How many betting rounds are left including this one.
    pub fn rounds_left(&self) -> u32 {
        match self {
            Street::Preflop => 4,
            Street::Flop => 3,
            Street::Turn => 2,
            Street::River => 1,
        }
    }
}

impl Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Street::Preflop => write!(f, "Preflop"),
            Street::Flop => write!(f, "Flop"),
            Street::Turn => write!(f, "Turn"),
            Street::River => write!(f, "River"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_size_round_trip() {
        for street in [Street::Preflop, Street::Flop, Street::Turn, Street::River] {
            assert_eq!(street, Street::from_board_size(street.board_size()).unwrap());
        }
    }

    #[test]
    fn test_invalid_board_sizes() {
        for n in [1, 2, 6, 7] {
            assert_eq!(
                Err(HoldemError::InvalidBoardSize(n)),
                Street::from_board_size(n)
            );
        }
    }

    #[test]
    fn test_rounds_left_counts_down() {
        assert_eq!(4, Street::Preflop.rounds_left());
        assert_eq!(1, Street::River.rounds_left());
        assert!(Street::Flop.rounds_left() > Street::Turn.rounds_left());
    }
}
