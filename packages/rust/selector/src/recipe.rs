//! Declarative selector recipes loaded from JSON or TOML.
//!
//! A recipe is a tree: leaves are compounds, inner nodes combine two
//! subtrees. Building a recipe drives the same checked builder API that
//! hand-written code uses.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use selkit_shared::{Result, SelkitError};

use crate::selector::Selector;

// ---------------------------------------------------------------------------
// Recipe tree
// ---------------------------------------------------------------------------

/// One node of a selector recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recipe {
    /// `left <combinator> right`.
    Combine(CombineRecipe),
    /// A single compound selector.
    Compound(CompoundRecipe),
}

/// Two subtrees joined by a combinator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CombineRecipe {
    pub left: Box<Recipe>,
    /// Falls back to the configured default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combinator: Option<String>,
    pub right: Box<Recipe>,
}

impl CombineRecipe {
    pub fn build(&self, default_combinator: &str) -> Result<Selector> {
        let left = self.left.build(default_combinator)?;
        let right = self.right.build(default_combinator)?;
        let combinator = self.combinator.as_deref().unwrap_or(default_combinator);
        Ok(left.combine(combinator, &right))
    }
}

/// One fragment of a compound recipe, written as a single-key table such
/// as `{ "class": "active" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Part {
    Element(String),
    Id(String),
    Class(String),
    Attr(String),
    PseudoClass(String),
    PseudoElement(String),
}

/// The parts of one compound selector, applied in the order written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompoundRecipe {
    pub parts: Vec<Part>,
}

impl CompoundRecipe {
    pub fn build(&self) -> Result<Selector> {
        self.parts.iter().try_fold(Selector::new(), |sel, part| match part {
            Part::Element(name) => sel.element(name),
            Part::Id(name) => sel.id(name),
            Part::Class(name) => sel.class(name),
            Part::Attr(expr) => sel.attr(expr),
            Part::PseudoClass(name) => sel.pseudo_class(name),
            Part::PseudoElement(name) => sel.pseudo_element(name),
        })
    }
}

impl Recipe {
    /// Build the selector this recipe describes.
    pub fn build(&self, default_combinator: &str) -> Result<Selector> {
        match self {
            Self::Compound(compound) => compound.build(),
            Self::Combine(combine) => combine.build(default_combinator),
        }
    }
}

// ---------------------------------------------------------------------------
// Recipe files
// ---------------------------------------------------------------------------

/// A named recipe inside a [`RecipeFile`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRecipe {
    pub name: String,
    pub selector: Recipe,
}

/// Root structure of a recipe file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeFile {
    #[serde(default)]
    pub selectors: Vec<NamedRecipe>,
}

impl RecipeFile {
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input)
            .map_err(|e| SelkitError::parse(format!("invalid JSON recipe file: {e}")))
    }

    pub fn from_toml(input: &str) -> Result<Self> {
        toml::from_str(input)
            .map_err(|e| SelkitError::parse(format!("invalid TOML recipe file: {e}")))
    }

    /// Load a recipe file, choosing the format from the extension
    /// (`.toml`, otherwise JSON).
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SelkitError::io(path, e))?;
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let file = if is_toml {
            Self::from_toml(&content)?
        } else {
            Self::from_json(&content)?
        };
        debug!(?path, count = file.selectors.len(), "loaded recipe file");
        Ok(file)
    }

    /// Build every recipe, returning `(name, selector string)` pairs in file
    /// order. Stops at the first invalid recipe.
    #[instrument(skip(self), fields(count = self.selectors.len()))]
    pub fn render(&self, default_combinator: &str) -> Result<Vec<(String, String)>> {
        self.selectors
            .iter()
            .map(|named| -> Result<(String, String)> {
                let selector = named.selector.build(default_combinator).map_err(|e| match e {
                    SelkitError::Validation { rule, message } => SelkitError::Validation {
                        rule,
                        message: format!("recipe '{}': {message}", named.name),
                    },
                    other => other,
                })?;
                Ok((named.name.clone(), selector.into_string()))
            })
            .collect()
    }
}
