use std::fmt::{self, Display};

use super::AgentError;

/// The kinds of action the engine can allow.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Raise,
}

impl ActionKind {
    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// One decision, sent back to the engine.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Action {
    /// Give up the hand.
    Fold,
    /// Pass when there's nothing to call.
    Check,
    /// Match the opponent's pip.
    Call,
    /// Raise so that our pip for the street is this many chips.
    Raise(u32),
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Fold => ActionKind::Fold,
            Action::Check => ActionKind::Check,
            Action::Call => ActionKind::Call,
            Action::Raise(_) => ActionKind::Raise,
        }
    }

    /// Make sure the engine would accept this action.
    ///
    /// # Errors
    ///
    /// `AgentError::IllegalAction` if the kind isn't allowed,
    /// `AgentError::MissingRaiseBounds` for a raise without bounds and
    /// `AgentError::RaiseOutOfBounds` for a raise outside of them.
    pub fn validate(
        &self,
        legal: LegalActions,
        bounds: Option<RaiseBounds>,
    ) -> Result<(), AgentError> {
        if !legal.contains(self.kind()) {
            return Err(AgentError::IllegalAction(*self));
        }
        if let Action::Raise(amount) = *self {
            let bounds = bounds.ok_or(AgentError::MissingRaiseBounds)?;
            if !bounds.contains(amount) {
                return Err(AgentError::RaiseOutOfBounds {
                    amount,
                    min: bounds.min(),
                    max: bounds.max(),
                });
            }
        }
        Ok(())
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Fold => write!(f, "fold"),
            Action::Check => write!(f, "check"),
            Action::Call => write!(f, "call"),
            Action::Raise(amount) => write!(f, "raise to {amount}"),
        }
    }
}

/// The set of action kinds the engine allows right now.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub struct LegalActions {
    kinds: u8,
}

impl LegalActions {
    pub fn new(kinds: &[ActionKind]) -> Self {
        kinds.iter().copied().collect()
    }

    pub fn contains(&self, kind: ActionKind) -> bool {
        self.kinds & kind.bit() != 0
    }

    pub fn insert(&mut self, kind: ActionKind) {
        self.kinds |= kind.bit();
    }

    pub fn is_empty(&self) -> bool {
        self.kinds == 0
    }
}

impl FromIterator<ActionKind> for LegalActions {
    fn from_iter<T: IntoIterator<Item = ActionKind>>(iter: T) -> Self {
        let mut legal = Self::default();
        for kind in iter {
            legal.insert(kind);
        }
        legal
    }
}

/// Smallest and largest legal raise, both inclusive.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct RaiseBounds {
    min: u32,
    max: u32,
}

impl RaiseBounds {
    /// # Errors
    ///
    /// `AgentError::InvalidRaiseBounds` when `min > max`.
    pub fn new(min: u32, max: u32) -> Result<Self, AgentError> {
        if min > max {
            return Err(AgentError::InvalidRaiseBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, amount: u32) -> bool {
        (self.min..=self.max).contains(&amount)
    }

    /// Pull an amount the policy computed into the legal range.
    pub fn clamp(&self, amount: u32) -> u32 {
        amount.clamp(self.min, self.max)
    }
}
