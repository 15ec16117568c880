//! Text-field parsing for problem instances.
//!
//! Input arrives as free-form text typed into a form: a single integer
//! for the capacity and separator-delimited integer lists for weights
//! and values. Lists split on any run of commas and/or whitespace, so
//! `"10, 20,30"` and `"10 20 30"` parse identically.

use super::error::{Field, InputError};

/// Parses the capacity field: trimmed, integral, positive, in range.
pub(super) fn capacity_from_text(text: &str) -> Result<u32, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::Empty {
            field: Field::Capacity,
        });
    }
    let value: i64 = text.parse().map_err(|_| InputError::NotAnInteger {
        field: Field::Capacity,
        token: text.to_string(),
    })?;
    if value <= 0 {
        return Err(InputError::NotPositive {
            field: Field::Capacity,
            value,
        });
    }
    u32::try_from(value).map_err(|_| InputError::OutOfRange {
        field: Field::Capacity,
        token: text.to_string(),
    })
}

/// Parses a weights/values field into a list of positive integers.
///
/// Checks run in a fixed order and the first failure wins: empty text,
/// unparsable token, no tokens at all, non-positive entry, entry out
/// of range.
pub(super) fn list_from_text(field: Field, text: &str) -> Result<Vec<u32>, InputError> {
    if text.trim().is_empty() {
        return Err(InputError::Empty { field });
    }

    let mut parsed: Vec<i64> = Vec::new();
    for token in split_tokens(text) {
        let value = token.parse().map_err(|_| InputError::NotAnInteger {
            field,
            token: token.to_string(),
        })?;
        parsed.push(value);
    }

    if parsed.is_empty() {
        return Err(InputError::NoNumbers { field });
    }
    if let Some(&value) = parsed.iter().find(|&&v| v <= 0) {
        return Err(InputError::NotPositive { field, value });
    }

    parsed
        .into_iter()
        .map(|value| {
            u32::try_from(value).map_err(|_| InputError::OutOfRange {
                field,
                token: value.to_string(),
            })
        })
        .collect()
}

/// Splits on any run of commas/whitespace, discarding empty tokens.
fn split_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
}
