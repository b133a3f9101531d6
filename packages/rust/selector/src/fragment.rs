//! Selector fragments and the kind rank table.

use std::fmt;

/// The kind of a single selector fragment.
///
/// Variants are declared in the order they must appear inside a compound
/// selector; [`FragmentKind::rank`] exposes that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    Element,
    Id,
    Class,
    Attribute,
    PseudoClass,
    PseudoElement,
    Combinator,
}

impl FragmentKind {
    /// Position in the compound ordering. `None` for combinators, which
    /// separate compounds rather than belong to one.
    pub fn rank(self) -> Option<u8> {
        match self {
            Self::Element => Some(0),
            Self::Id => Some(1),
            Self::Class => Some(2),
            Self::Attribute => Some(3),
            Self::PseudoClass => Some(4),
            Self::PseudoElement => Some(5),
            Self::Combinator => None,
        }
    }

    /// Whether this kind may appear more than once in a compound.
    pub fn is_repeatable(self) -> bool {
        matches!(self, Self::Class | Self::Attribute | Self::PseudoClass)
    }

    /// Human-readable name used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::Id => "id",
            Self::Class => "class",
            Self::Attribute => "attribute",
            Self::PseudoClass => "pseudo-class",
            Self::PseudoElement => "pseudo-element",
            Self::Combinator => "combinator",
        }
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One atomic piece of a selector, holding its already-formatted CSS text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    kind: FragmentKind,
    value: String,
}

impl Fragment {
    /// Build a fragment, prefixing or wrapping `raw` with the kind's sigil.
    pub fn new(kind: FragmentKind, raw: &str) -> Self {
        let value = match kind {
            FragmentKind::Element => raw.to_string(),
            FragmentKind::Id => format!("#{raw}"),
            FragmentKind::Class => format!(".{raw}"),
            FragmentKind::Attribute => format!("[{raw}]"),
            FragmentKind::PseudoClass => format!(":{raw}"),
            FragmentKind::PseudoElement => format!("::{raw}"),
            FragmentKind::Combinator => format!(" {raw} "),
        };
        Self { kind, value }
    }

    pub fn kind(&self) -> FragmentKind {
        self.kind
    }

    /// The formatted CSS text, sigil included.
    pub fn value(&self) -> &str {
        &self.value
    }
}
