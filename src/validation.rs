//! Field checks shared by every entity.
//!
//! Creates and full updates use [`require_text`]/[`require`]; the `merge_*` variants take the
//! [`UpdateMode`] into account so a PATCH may leave a required field out while a PUT may not.
//! An explicit empty string is rejected in both modes, and so is an explicit JSON `null`
//! for a required field (see [`present`]).

use crate::framework::UpdateMode;
use serde::{Deserialize, Deserializer};

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("{0} must be a positive number")]
    InvalidNumber(&'static str),
}

/// `deserialize_with` for required fields of update payloads.
///
/// Together with `#[serde(default)]` an absent field stays `None`, while a field that is
/// present must carry a value: `null` fails to decode instead of reading as "unchanged".
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

pub fn require<T>(field: &'static str, value: Option<T>) -> Result<T, FieldError> {
    value.ok_or(FieldError::Missing(field))
}

pub fn require_text(field: &'static str, value: Option<String>) -> Result<String, FieldError> {
    let text = require(field, value)?;
    if text.is_empty() {
        return Err(FieldError::Empty(field));
    }
    Ok(text)
}

/// Required field in an update: absent is only allowed for PATCH.
pub fn merge_required<T>(
    field: &'static str,
    value: Option<T>,
    mode: UpdateMode,
) -> Result<Option<T>, FieldError> {
    match value {
        None if !mode.is_partial() => Err(FieldError::Missing(field)),
        value => Ok(value),
    }
}

/// Required text field in an update: absent only for PATCH, never empty.
pub fn merge_text(
    field: &'static str,
    value: Option<String>,
    mode: UpdateMode,
) -> Result<Option<String>, FieldError> {
    match merge_required(field, value, mode)? {
        Some(text) if text.is_empty() => Err(FieldError::Empty(field)),
        value => Ok(value),
    }
}

pub fn check_count(field: &'static str, value: u32) -> Result<u32, FieldError> {
    if value > 0 {
        Ok(value)
    } else {
        Err(FieldError::InvalidNumber(field))
    }
}

pub fn check_amount(field: &'static str, value: f64) -> Result<f64, FieldError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(FieldError::InvalidNumber(field))
    }
}
