//! Event severity model.
//!
//! Eventd describes event urgency on a closed ordinal scale from 0
//! (undefined) to 7 (critical). Callers supply the numeric code on the
//! command line; the wire format carries the canonical textual name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ErrorCode;

/// Event severity.
///
/// A closed enumeration of the eight eventd severity levels. Code 0 is an
/// internal sentinel outside the documented 1–7 range but is accepted on
/// input.
///
/// | Code | Variant | Wire name |
/// |------|---------|-----------|
/// | 0 | [`Undefined`](Self::Undefined) | `undef` |
/// | 1 | [`Indeterminate`](Self::Indeterminate) | `Indeterminate` |
/// | 2 | [`Cleared`](Self::Cleared) | `Cleared` |
/// | 3 | [`Normal`](Self::Normal) | `Normal` |
/// | 4 | [`Warning`](Self::Warning) | `Warning` |
/// | 5 | [`Minor`](Self::Minor) | `Minor` |
/// | 6 | [`Major`](Self::Major) | `Major` |
/// | 7 | [`Critical`](Self::Critical) | `Critical` |
///
/// # Example
///
/// ```
/// use sendevent_types::Severity;
///
/// assert_eq!(Severity::resolve("4").unwrap(), Severity::Warning);
/// assert_eq!(Severity::Warning.name(), "Warning");
/// assert_eq!(Severity::Warning.code(), 4);
/// assert!(Severity::resolve("8").is_err());
/// assert!(Severity::resolve("high").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    /// Internal sentinel, code 0.
    Undefined = 0,
    /// Code 1.
    Indeterminate = 1,
    /// Code 2.
    Cleared = 2,
    /// Code 3.
    Normal = 3,
    /// Code 4.
    Warning = 4,
    /// Code 5.
    Minor = 5,
    /// Code 6.
    Major = 6,
    /// Code 7.
    Critical = 7,
}

impl Severity {
    /// All levels in code order.
    pub const ALL: [Severity; 8] = [
        Severity::Undefined,
        Severity::Indeterminate,
        Severity::Cleared,
        Severity::Normal,
        Severity::Warning,
        Severity::Minor,
        Severity::Major,
        Severity::Critical,
    ];

    /// Resolves a numeric severity string to its level.
    ///
    /// The input must parse as an integer in `[0, 7]`. This is a pure
    /// function: no state, no side effects.
    ///
    /// # Errors
    ///
    /// [`SeverityError::NotAnInteger`] when the input does not parse as an
    /// integer, [`SeverityError::OutOfRange`] when it parses but falls
    /// outside `[0, 7]`.
    pub fn resolve(input: &str) -> Result<Self, SeverityError> {
        let code: i64 = input
            .parse()
            .map_err(|_| SeverityError::NotAnInteger(input.to_string()))?;
        Self::from_code(code).ok_or_else(|| SeverityError::OutOfRange(input.to_string()))
    }

    /// Returns the level for a numeric code, or `None` if out of range.
    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Undefined),
            1 => Some(Self::Indeterminate),
            2 => Some(Self::Cleared),
            3 => Some(Self::Normal),
            4 => Some(Self::Warning),
            5 => Some(Self::Minor),
            6 => Some(Self::Major),
            7 => Some(Self::Critical),
            _ => None,
        }
    }

    /// Returns the canonical wire name for this level.
    ///
    /// Note the asymmetric casing: `undef` is lowercase, the documented
    /// 1–7 names are capitalized. The receiving server expects exactly
    /// these strings.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Undefined => "undef",
            Self::Indeterminate => "Indeterminate",
            Self::Cleared => "Cleared",
            Self::Normal => "Normal",
            Self::Warning => "Warning",
            Self::Minor => "Minor",
            Self::Major => "Major",
            Self::Critical => "Critical",
        }
    }

    /// Returns the numeric code for this level.
    #[must_use]
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = SeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

/// Severity resolution error.
///
/// Both variants are input errors and never recoverable.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SeverityError {
    /// The supplied severity did not parse as an integer.
    #[error("severity {0} is not an integer")]
    NotAnInteger(String),

    /// The supplied severity parsed as an integer outside `[0, 7]`.
    #[error("severity {0} is not valid, must be between 0 and 7")]
    OutOfRange(String),
}

impl ErrorCode for SeverityError {
    fn code(&self) -> &'static str {
        match self {
            Self::NotAnInteger(_) => "SEVERITY_NOT_AN_INTEGER",
            Self::OutOfRange(_) => "SEVERITY_OUT_OF_RANGE",
        }
    }

    fn is_recoverable(&self) -> bool {
        false
    }
}
