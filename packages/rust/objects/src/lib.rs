//! Shape objects and typed JSON helpers for selkit.

pub mod json;
pub mod shape;

pub use json::{from_json, to_json, to_json_pretty};
pub use shape::{Circle, Rectangle, Shape};
