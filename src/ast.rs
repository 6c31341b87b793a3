//! AST types for translation tables

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::types::{Angle, Color, Distance};

/// A drawing operation bound to a symbol, with its parameter already resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Move without drawing (pen up)
    Forward(Distance),
    /// Move and draw a line (pen down)
    Draw(Distance),
    /// Turn by the given angle
    SetAngle(Angle),
    /// Flush the current segment and switch stroke color
    SetColor(Color),
    /// Save position, heading and color
    Push,
    /// Restore the most recently saved state
    Pop,
    NoOp,
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Forward(_) => OperationKind::Forward,
            Operation::Draw(_) => OperationKind::Draw,
            Operation::SetAngle(_) => OperationKind::Angle,
            Operation::SetColor(_) => OperationKind::Color,
            Operation::Push => OperationKind::Push,
            Operation::Pop => OperationKind::Pop,
            Operation::NoOp => OperationKind::Nop,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Forward(d) | Operation::Draw(d) => write!(f, "{} {}", self.kind(), d),
            Operation::SetAngle(a) => write!(f, "{} {}", self.kind(), a),
            Operation::SetColor(c) => write!(f, "{} {}", self.kind(), c),
            Operation::Push | Operation::Pop | Operation::NoOp => write!(f, "{}", self.kind()),
        }
    }
}

/// Operation names accepted on the right-hand side of a translation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Forward,
    Draw,
    Angle,
    Color,
    Push,
    Pop,
    Nop,
}

impl OperationKind {
    pub const ALL: [OperationKind; 7] = [
        OperationKind::Forward,
        OperationKind::Draw,
        OperationKind::Angle,
        OperationKind::Color,
        OperationKind::Push,
        OperationKind::Pop,
        OperationKind::Nop,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OperationKind::Forward => "forward",
            OperationKind::Draw => "draw",
            OperationKind::Angle => "angle",
            OperationKind::Color => "color",
            OperationKind::Push => "push",
            OperationKind::Pop => "pop",
            OperationKind::Nop => "nop",
        }
    }

    /// Whether the operation requires a parameter
    pub fn takes_parameter(self) -> bool {
        matches!(
            self,
            OperationKind::Forward | OperationKind::Draw | OperationKind::Angle | OperationKind::Color
        )
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OperationKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperationKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or(())
    }
}

/// Mapping from single-character symbols to operations.
///
/// Built once by [`crate::translate`] and immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationTable {
    entries: BTreeMap<char, Operation>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the operation it replaced (last one wins).
    pub(crate) fn insert(&mut self, symbol: char, op: Operation) -> Option<Operation> {
        self.entries.insert(symbol, op)
    }

    pub fn get(&self, symbol: char) -> Option<&Operation> {
        self.entries.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Symbols in ascending order
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &Operation)> + '_ {
        self.entries.iter().map(|(symbol, op)| (*symbol, op))
    }
}

impl FromIterator<(char, Operation)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (char, Operation)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_kind_round_trips_names() {
        for kind in OperationKind::ALL {
            assert_eq!(kind.name().parse::<OperationKind>(), Ok(kind));
        }
        assert!("jump".parse::<OperationKind>().is_err());
        assert!("Forward".parse::<OperationKind>().is_err());
    }

    #[test]
    fn operation_display() {
        let op = Operation::Draw(Distance::try_new(10.0).unwrap());
        assert_eq!(op.to_string(), "draw 10");
        assert_eq!(Operation::SetColor(Color::Rgb(1, 2, 3)).to_string(), "color rgb(1, 2, 3)");
        assert_eq!(Operation::Pop.to_string(), "pop");
    }
}
