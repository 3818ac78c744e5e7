use std::fmt;

use serde::{Deserialize, Serialize};

use crate::player::Action;

/// Single-character symbol recorded for each betting-round step. `Skip` is
/// only ever recorded on the turn of a seat that has already folded.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum MoveSymbol {
    /// Placeholder for an already-folded seat's turn ('0')
    Skip,
    /// 'r'
    Raise,
    /// 'c'
    Call,
    /// 'f'
    Fold,
    /// 'a'
    AllIn,
}

impl MoveSymbol {
    pub fn as_char(self) -> char {
        match self {
            MoveSymbol::Skip => '0',
            MoveSymbol::Raise => 'r',
            MoveSymbol::Call => 'c',
            MoveSymbol::Fold => 'f',
            MoveSymbol::AllIn => 'a',
        }
    }

    pub fn from_action(action: Action) -> MoveSymbol {
        match action {
            Action::Raise => MoveSymbol::Raise,
            Action::Call => MoveSymbol::Call,
            Action::Fold => MoveSymbol::Fold,
            Action::AllIn => MoveSymbol::AllIn,
        }
    }
}

/// Append-only ordered log of per-turn symbols. Its length is the one and
/// only turn counter: the acting seat for step i is `seats[i % SEAT_COUNT]`.
/// The history is never rewound or edited.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct MoveHistory {
    symbols: Vec<MoveSymbol>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[MoveSymbol] {
        &self.symbols
    }

    /// Compact character encoding of the whole history, e.g. "rc0fa".
    pub fn encoded(&self) -> String {
        self.symbols.iter().map(|s| s.as_char()).collect()
    }

    pub(crate) fn push_action(&mut self, action: Action) {
        self.symbols.push(MoveSymbol::from_action(action));
    }

    pub(crate) fn push_skip(&mut self) {
        self.symbols.push(MoveSymbol::Skip);
    }
}

impl fmt::Display for MoveHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encoded())
    }
}
