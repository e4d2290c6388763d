//! Turns whatever a user typed into a list of distinct integers.
//!
//! Anything that isn't an ASCII digit, a comma or whitespace is thrown away first, so `"1a2"`
//! reads as `12` and `"-3"` reads as `3`. What remains is split on runs of commas and whitespace.
//! Repeats are detected on the parsed numbers: `"1, 01"` is a duplicate.
//!
//! # Examples
//!
//! ```
//! use bst::input::{parse_values, InputError};
//!
//! assert_eq!(parse_values("5, 3, 9, 1"), Ok(vec![5, 3, 9, 1]));
//! assert_eq!(parse_values("1,1,2"), Err(InputError::Duplicate { value: 1 }));
//! assert_eq!(parse_values(",,,"), Err(InputError::Empty));
//! ```

use std::collections::HashSet;

use thiserror::Error;

/// Why some input couldn't be turned into values for a tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// No numbers were found.
    #[error("please enter at least one number")]
    Empty,
    /// A token made of digits still didn't fit in an `i64`.
    #[error("`{token}` is not a valid number")]
    InvalidNumber {
        /// The offending token.
        token: String,
    },
    /// The same number was given twice.
    #[error("{value} appears more than once; please enter unique numbers")]
    Duplicate {
        /// The repeated value.
        value: i64,
    },
}

fn is_kept(c: char) -> bool {
    c.is_ascii_digit() || c == ',' || c.is_whitespace()
}

fn is_separator(c: char) -> bool {
    c == ',' || c.is_whitespace()
}

/// Parses `input` into integers, preserving the order they were typed in.
pub fn parse_values(input: &str) -> Result<Vec<i64>, InputError> {
    let cleaned: String = input.chars().filter(|&c| is_kept(c)).collect();

    let tokens: Vec<&str> = cleaned
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .collect();
    if tokens.is_empty() {
        return Err(InputError::Empty);
    }

    let mut seen = HashSet::with_capacity(tokens.len());
    let mut values = Vec::with_capacity(tokens.len());
    for token in tokens {
        let value: i64 = token.parse().map_err(|_| InputError::InvalidNumber {
            token: token.to_string(),
        })?;
        if !seen.insert(value) {
            return Err(InputError::Duplicate { value });
        }
        values.push(value);
    }

    Ok(values)
}

/// Whether [`parse_values`] would accept `input`.
pub fn is_valid(input: &str) -> bool {
    parse_values(input).is_ok()
}
