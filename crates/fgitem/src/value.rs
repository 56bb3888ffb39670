use crate::Item;

/// Kind of value an element holds, the in-memory analogue of a value representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Strings,
    Floats,
    UInts,
    Sequence,
}

/// Typed element value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Strings(Vec<String>),
    Floats(Vec<f64>),
    UInts(Vec<u32>),
    Sequence(Vec<Item>),
}

impl Value {
    /// Creates an empty value of the given kind.
    pub fn empty(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Strings => Self::Strings(vec![]),
            ValueKind::Floats => Self::Floats(vec![]),
            ValueKind::UInts => Self::UInts(vec![]),
            ValueKind::Sequence => Self::Sequence(vec![]),
        }
    }

    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Strings(_) => ValueKind::Strings,
            Self::Floats(_) => ValueKind::Floats,
            Self::UInts(_) => ValueKind::UInts,
            Self::Sequence(_) => ValueKind::Sequence,
        }
    }

    #[inline]
    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Number of values (value multiplicity), or number of items for sequences.
    pub fn len(&self) -> usize {
        match self {
            Self::Strings(v) => v.len(),
            Self::Floats(v) => v.len(),
            Self::UInts(v) => v.len(),
            Self::Sequence(v) => v.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
