//! Typed JSON encode/decode helpers over `serde_json`.
//!
//! `from_json::<T>` is the typed counterpart of "create an object with a given
//! prototype and assign the parsed fields to it": the target type supplies the
//! behaviour, the JSON supplies the data.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::trace;

use selkit_shared::{Result, SelkitError};

/// Encode `value` as compact JSON (`[1,2,3]`, `{"width":10,"height":20}`).
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| SelkitError::json(format!("encode failed: {e}")))
}

/// Encode `value` as indented JSON.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| SelkitError::json(format!("encode failed: {e}")))
}

/// Decode `json` into a `T`. Unknown fields are ignored unless `T` denies them.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T> {
    let type_name = std::any::type_name::<T>();
    trace!(type_name, len = json.len(), "decoding json");
    serde_json::from_str(json)
        .map_err(|e| SelkitError::json(format!("cannot decode {type_name}: {e}")))
}
