//! The [`Selector`] value and its append rules.
//!
//! A selector is an immutable list of [`Fragment`]s. Every append returns a
//! fresh selector, so a chain like `base.class("a")` never disturbs `base`.

use std::fmt;

use selkit_shared::{Result, SelkitError};
use tracing::{debug, trace};

use crate::fragment::{Fragment, FragmentKind};

const ORDER_HINT: &str = "selector parts should be arranged in the following order: \
                          element, id, class, attribute, pseudo-class, pseudo-element";

/// An ordered sequence of fragments forming one (possibly combined) CSS selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    fragments: Vec<Fragment>,
}

impl Selector {
    /// An empty selector. Renders as the empty string.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element(&self, name: &str) -> Result<Self> {
        self.append(FragmentKind::Element, name)
    }

    pub fn id(&self, name: &str) -> Result<Self> {
        self.append(FragmentKind::Id, name)
    }

    pub fn class(&self, name: &str) -> Result<Self> {
        self.append(FragmentKind::Class, name)
    }

    /// Append an attribute selector; `expr` is the text between the brackets.
    pub fn attr(&self, expr: &str) -> Result<Self> {
        self.append(FragmentKind::Attribute, expr)
    }

    pub fn pseudo_class(&self, name: &str) -> Result<Self> {
        self.append(FragmentKind::PseudoClass, name)
    }

    pub fn pseudo_element(&self, name: &str) -> Result<Self> {
        self.append(FragmentKind::PseudoElement, name)
    }

    /// Join `self` and `other` with `combinator`, which is embedded verbatim
    /// between single spaces.
    pub fn combine(&self, combinator: impl AsRef<str>, other: &Selector) -> Self {
        let combinator = combinator.as_ref();
        let mut fragments = Vec::with_capacity(self.fragments.len() + other.fragments.len() + 1);
        fragments.extend_from_slice(&self.fragments);
        fragments.push(Fragment::new(FragmentKind::Combinator, combinator));
        fragments.extend_from_slice(&other.fragments);

        debug!(
            combinator,
            left = self.fragments.len(),
            right = other.fragments.len(),
            "combined selectors"
        );

        Self { fragments }
    }

    /// Render the selector. Pure: repeated calls return the same string.
    pub fn stringify(&self) -> String {
        self.fragments.iter().map(Fragment::value).collect()
    }

    /// Render the selector, consuming it.
    pub fn into_string(self) -> String {
        self.stringify()
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// The fragments after the last combinator: the compound that appends
    /// are validated against.
    pub fn compound(&self) -> &[Fragment] {
        let start = self
            .fragments
            .iter()
            .rposition(|f| f.kind() == FragmentKind::Combinator)
            .map_or(0, |i| i + 1);
        &self.fragments[start..]
    }

    pub(crate) fn from_fragment(fragment: Fragment) -> Self {
        Self {
            fragments: vec![fragment],
        }
    }

    fn append(&self, kind: FragmentKind, raw: &str) -> Result<Self> {
        self.check(kind)?;

        let mut fragments = self.fragments.clone();
        fragments.push(Fragment::new(kind, raw));
        trace!(%kind, raw, len = fragments.len(), "appended fragment");

        Ok(Self { fragments })
    }

    fn check(&self, kind: FragmentKind) -> Result<()> {
        let compound = self.compound();

        if !kind.is_repeatable() && compound.iter().any(|f| f.kind() == kind) {
            debug!(%kind, "rejected duplicate fragment");
            return Err(SelkitError::duplicate(format!(
                "{kind} should not occur more than one time inside the selector"
            )));
        }

        if let Some(later) = compound
            .iter()
            .map(Fragment::kind)
            .find(|k| k.rank() > kind.rank())
        {
            debug!(%kind, %later, "rejected out-of-order fragment");
            return Err(SelkitError::ordering(format!(
                "{kind} cannot follow {later}; {ORDER_HINT}"
            )));
        }

        Ok(())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            f.write_str(fragment.value())?;
        }
        Ok(())
    }
}

impl From<Selector> for String {
    fn from(selector: Selector) -> Self {
        selector.into_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use selkit_shared::ValidationRule;

    #[test]
    fn full_compound_in_order() {
        let sel = Selector::new()
            .element("a")
            .and_then(|s| s.id("home"))
            .and_then(|s| s.class("nav"))
            .and_then(|s| s.class("active"))
            .and_then(|s| s.attr("target=_blank"))
            .and_then(|s| s.pseudo_class("hover"))
            .and_then(|s| s.pseudo_class("focus"))
            .and_then(|s| s.pseudo_element("after"))
            .expect("valid chain");
        assert_eq!(
            sel.stringify(),
            "a#home.nav.active[target=_blank]:hover:focus::after"
        );
        assert_eq!(sel.len(), 8);
    }

    #[test]
    fn failed_append_leaves_receiver_untouched() {
        let base = Selector::new().class("c").expect("class");
        let err = base.id("x").unwrap_err();
        assert_eq!(err.rule(), Some(ValidationRule::Ordering));
        assert_eq!(base.stringify(), ".c");
        assert_eq!(base.len(), 1);
    }

    #[test]
    fn appends_do_not_alias() {
        let base = Selector::new().element("li").expect("element");
        let odd = base.pseudo_class("nth-child(odd)").expect("odd");
        let even = base.pseudo_class("nth-child(even)").expect("even");
        assert_eq!(base.stringify(), "li");
        assert_eq!(odd.stringify(), "li:nth-child(odd)");
        assert_eq!(even.stringify(), "li:nth-child(even)");
    }

    #[test]
    fn duplicate_wins_over_ordering() {
        let sel = Selector::new()
            .id("x")
            .and_then(|s| s.class("c"))
            .expect("valid");
        let err = sel.id("y").unwrap_err();
        assert_eq!(err.rule(), Some(ValidationRule::DuplicateKind));
    }

    #[test]
    fn pseudo_element_is_unique_and_last() {
        let sel = Selector::new().pseudo_element("before").expect("pe");
        assert_eq!(
            sel.pseudo_element("after").unwrap_err().rule(),
            Some(ValidationRule::DuplicateKind)
        );
        assert_eq!(
            sel.pseudo_class("hover").unwrap_err().rule(),
            Some(ValidationRule::Ordering)
        );
    }

    #[test]
    fn element_after_class_is_ordering_error() {
        let sel = Selector::new().class("c").expect("class");
        let err = sel.element("div").unwrap_err();
        assert_eq!(err.rule(), Some(ValidationRule::Ordering));
        assert!(err.to_string().contains("element cannot follow class"));
    }

    #[test]
    fn checks_apply_to_trailing_compound_only() {
        let left = Selector::new().element("ul").expect("ul");
        let right = Selector::new().element("li").expect("li");
        let combined = left.combine(">", &right);
        assert_eq!(
            combined.element("span").unwrap_err().rule(),
            Some(ValidationRule::DuplicateKind)
        );

        let extended = combined.class("item").expect("class on trailing compound");
        assert_eq!(extended.stringify(), "ul > li.item");
        assert_eq!(extended.compound().len(), 2);
    }

    #[test]
    fn stringify_is_repeatable() {
        let sel = Selector::new().id("main").expect("id");
        assert_eq!(sel.stringify(), "#main");
        assert_eq!(sel.stringify(), "#main");
        assert_eq!(sel.to_string(), "#main");
        assert_eq!(String::from(sel), "#main");
    }

    #[test]
    fn empty_selector_renders_empty() {
        let sel = Selector::new();
        assert!(sel.is_empty());
        assert_eq!(sel.stringify(), "");
        assert!(sel.compound().is_empty());
    }
}
