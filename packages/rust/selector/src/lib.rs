//! Fluent, validated construction of CSS selector strings.
//!
//! Selectors are built from typed fragments (element, id, class, attribute,
//! pseudo-class, pseudo-element) that must appear in that order inside each
//! compound, and joined into complex selectors with combinators:
//!
//! ```
//! use selkit_selector::{Combinator, SelectorBuilder};
//!
//! let b = SelectorBuilder;
//! let sel = b.combine(
//!     &b.element("a").attr(r#"href$=".png""#)?.pseudo_class("focus")?,
//!     Combinator::Descendant,
//!     &b.element("img"),
//! );
//! assert_eq!(sel.stringify(), r#"a[href$=".png"]:focus   img"#);
//! # Ok::<(), selkit_shared::SelkitError>(())
//! ```

pub mod builder;
pub mod fragment;
pub mod recipe;
pub mod selector;

pub use builder::{Combinator, SelectorBuilder};
pub use fragment::{Fragment, FragmentKind};
pub use recipe::{CombineRecipe, CompoundRecipe, NamedRecipe, Part, Recipe, RecipeFile};
pub use selector::Selector;
