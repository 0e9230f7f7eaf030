//! Share model
//!
//! A share is one participant's portion of an expense. Shares arrive as raw
//! [`ShareInput`]s and become [`Share`]s once the split validator has checked
//! them and computed the amount each participant owes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// How a share's value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareType {
    /// Percentage points of the full expense total
    Percentage,
    /// An exact amount in currency units
    Exact,
}

impl fmt::Display for ShareType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percentage => write!(f, "percentage"),
            Self::Exact => write!(f, "exact"),
        }
    }
}

impl FromStr for ShareType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "percentage" | "percent" | "pct" | "%" => Ok(Self::Percentage),
            "exact" | "amount" => Ok(Self::Exact),
            other => Err(format!(
                "unknown share type '{}' (expected 'percentage' or 'exact')",
                other
            )),
        }
    }
}

/// A share as submitted, before validation
///
/// Every field is kept as entered so that the validator, not the caller,
/// decides what is well formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareInput {
    pub person: String,
    #[serde(rename = "type")]
    pub share_type: String,
    pub value: String,
}

impl ShareInput {
    pub fn new(
        person: impl Into<String>,
        share_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            person: person.into(),
            share_type: share_type.into(),
            value: value.into(),
        }
    }

    pub fn percentage(person: impl Into<String>, value: impl fmt::Display) -> Self {
        Self::new(person, "percentage", value.to_string())
    }

    pub fn exact(person: impl Into<String>, value: impl fmt::Display) -> Self {
        Self::new(person, "exact", value.to_string())
    }

    /// Parse the compact command-line form
    ///
    /// `NAME=VALUE%` is a percentage share, `NAME=VALUE` an exact amount.
    /// Anything unrecognizable is passed through with empty fields so the
    /// validator reports it as malformed.
    pub fn from_arg(arg: &str) -> Self {
        let Some((person, value)) = arg.split_once('=') else {
            return Self::new(arg.trim(), "", "");
        };

        let value = value.trim();
        match value.strip_suffix('%') {
            Some(pct) => Self::percentage(person.trim(), pct.trim()),
            None => Self::exact(person.trim(), value.trim_start_matches('$')),
        }
    }
}

/// Identity of a participant name: trimmed, case folded
pub fn person_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// A validated share with its resolved amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    /// Participant name
    pub person: String,

    /// How `value` is interpreted
    #[serde(rename = "type")]
    pub share_type: ShareType,

    /// Value as entered: percentage points or currency units
    pub value: Decimal,

    /// Amount this participant owes for the expense
    pub resolved_amount: Money,
}

impl Share {
    /// Compact display of the entered value: "50%" or "40.00"
    pub fn display_value(&self) -> String {
        match self.share_type {
            ShareType::Percentage => format!("{}%", self.value.normalize()),
            ShareType::Exact => format!("{:.2}", self.value),
        }
    }

    /// Back to the submitted form, e.g. for re-validating a stored split
    pub fn to_input(&self) -> ShareInput {
        ShareInput::new(
            self.person.clone(),
            self.share_type.to_string(),
            self.value.to_string(),
        )
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.person, self.display_value())
    }
}
