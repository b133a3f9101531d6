//! The [`SelectorBuilder`] facade and typed [`Combinator`]s.

use std::fmt;
use std::str::FromStr;

use selkit_shared::SelkitError;

use crate::fragment::{Fragment, FragmentKind};
use crate::selector::Selector;

/// A CSS combinator joining two selectors.
///
/// [`SelectorBuilder::combine`] accepts any string, so this enum is a
/// convenience for callers that want the four standard combinators typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// `A B`: B is a descendant of A.
    Descendant,
    /// `A > B`: B is a direct child of A.
    Child,
    /// `A + B`: B immediately follows A.
    NextSibling,
    /// `A ~ B`: B follows A, not necessarily immediately.
    SubsequentSibling,
}

impl Combinator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }
}

impl AsRef<str> for Combinator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Combinator {
    type Err = SelkitError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            " " => Ok(Self::Descendant),
            ">" => Ok(Self::Child),
            "+" => Ok(Self::NextSibling),
            "~" => Ok(Self::SubsequentSibling),
            other => Err(SelkitError::parse(format!(
                "unknown combinator '{other}': expected ' ', '>', '+' or '~'"
            ))),
        }
    }
}

/// Entry point for building selectors.
///
/// Each method starts a fresh [`Selector`]; the first fragment can never
/// violate a rule, so these calls are infallible. Continue the chain with the
/// fallible methods on [`Selector`].
///
/// ```
/// use selkit_selector::SelectorBuilder;
///
/// let builder = SelectorBuilder;
/// let sel = builder.id("main").class("container")?.class("editable")?;
/// assert_eq!(builder.stringify(&sel), "#main.container.editable");
/// # Ok::<(), selkit_shared::SelkitError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectorBuilder;

impl SelectorBuilder {
    pub fn element(&self, name: &str) -> Selector {
        start(FragmentKind::Element, name)
    }

    pub fn id(&self, name: &str) -> Selector {
        start(FragmentKind::Id, name)
    }

    pub fn class(&self, name: &str) -> Selector {
        start(FragmentKind::Class, name)
    }

    pub fn attr(&self, expr: &str) -> Selector {
        start(FragmentKind::Attribute, expr)
    }

    pub fn pseudo_class(&self, name: &str) -> Selector {
        start(FragmentKind::PseudoClass, name)
    }

    pub fn pseudo_element(&self, name: &str) -> Selector {
        start(FragmentKind::PseudoElement, name)
    }

    /// `a`, then `combinator` padded with spaces, then `b`.
    pub fn combine(&self, a: &Selector, combinator: impl AsRef<str>, b: &Selector) -> Selector {
        a.combine(combinator, b)
    }

    pub fn stringify(&self, selector: &Selector) -> String {
        selector.stringify()
    }
}

fn start(kind: FragmentKind, raw: &str) -> Selector {
    Selector::from_fragment(Fragment::new(kind, raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use selkit_shared::{Result, ValidationRule};

    const B: SelectorBuilder = SelectorBuilder;

    #[test]
    fn id_with_classes() -> Result<()> {
        let sel = B.id("main").class("container")?.class("editable")?;
        assert_eq!(B.stringify(&sel), "#main.container.editable");
        Ok(())
    }

    #[test]
    fn element_attr_pseudo_class() -> Result<()> {
        let sel = B.element("a").attr(r#"href$=".png""#)?.pseudo_class("focus")?;
        assert_eq!(sel.stringify(), r#"a[href$=".png"]:focus"#);
        Ok(())
    }

    #[test]
    fn duplicate_element_is_rejected() {
        let sel = B.element("a").id("x").expect("id after element");
        let err = sel.element("b").unwrap_err();
        assert_eq!(err.rule(), Some(ValidationRule::DuplicateKind));
        assert!(err.to_string().contains("element"));
    }

    #[test]
    fn element_after_id_is_rejected() {
        let err = B.id("x").element("a").unwrap_err();
        assert_eq!(err.rule(), Some(ValidationRule::Ordering));
    }

    #[test]
    fn class_then_attr_but_not_reverse() {
        assert!(B.class("c").attr(r#"href$=".png""#).is_ok());
        let err = B.attr(r#"href$=".png""#).class("c").unwrap_err();
        assert_eq!(err.rule(), Some(ValidationRule::Ordering));
    }

    #[test]
    fn duplicate_id_and_pseudo_element_are_rejected() {
        assert_eq!(
            B.id("a").id("b").unwrap_err().rule(),
            Some(ValidationRule::DuplicateKind)
        );
        assert_eq!(
            B.pseudo_element("before")
                .pseudo_element("after")
                .unwrap_err()
                .rule(),
            Some(ValidationRule::DuplicateKind)
        );
    }

    #[test]
    fn repeatable_kinds_accumulate() -> Result<()> {
        let sel = B
            .class("a")
            .class("b")?
            .attr("x")?
            .attr("y")?
            .pseudo_class("hover")?
            .pseudo_class("focus")?;
        assert_eq!(sel.stringify(), ".a.b[x][y]:hover:focus");
        Ok(())
    }

    #[test]
    fn combine_with_plus() {
        let sel = B.combine(&B.element("div"), "+", &B.element("span"));
        assert_eq!(sel.stringify(), "div + span");
    }

    #[test]
    fn nested_combine() {
        let inner = B.combine(&B.element("a"), ">", &B.element("b"));
        let sel = B.combine(&inner, "~", &B.element("c"));
        assert_eq!(sel.stringify(), "a > b ~ c");
    }

    #[test]
    fn typed_combinators_match_strings() {
        let a = B.element("a");
        let b = B.element("b");
        for (typed, raw) in [
            (Combinator::Descendant, " "),
            (Combinator::Child, ">"),
            (Combinator::NextSibling, "+"),
            (Combinator::SubsequentSibling, "~"),
        ] {
            assert_eq!(B.combine(&a, typed, &b), B.combine(&a, raw, &b));
            assert_eq!(raw.parse::<Combinator>().expect("parse"), typed);
        }
        assert!("|".parse::<Combinator>().is_err());
    }

    #[test]
    fn deeply_nested_combine() -> Result<()> {
        let sel = B.combine(
            &B.element("div").id("main")?.class("container")?.class("draggable")?,
            "+",
            &B.combine(
                &B.element("table").id("data")?,
                "~",
                &B.combine(
                    &B.element("tr").pseudo_class("nth-of-type(even)")?,
                    " ",
                    &B.element("td").pseudo_class("nth-of-type(even)")?,
                ),
            ),
        );
        assert_eq!(
            sel.stringify(),
            "div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)"
        );
        Ok(())
    }

    #[test]
    fn combine_keeps_operands_intact() {
        let a = B.element("a");
        let b = B.element("b");
        let _ = B.combine(&a, ">", &b);
        assert_eq!(a.stringify(), "a");
        assert_eq!(b.stringify(), "b");
    }
}
