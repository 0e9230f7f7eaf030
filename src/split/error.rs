//! Split validation errors

use thiserror::Error;

use crate::models::Money;

/// Why a split was rejected
///
/// Every variant is an expected, recoverable outcome of validating user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Resolved shares do not add up to the expense total
    ///
    /// `delta` is `total - resolved`: negative when the shares claim more
    /// than the total, positive when they leave part of it unassigned.
    #[error("Shares resolve to {resolved} but the total is {total} (delta {delta}, {})", direction(.delta))]
    UnbalancedSplit {
        total: Money,
        resolved: Money,
        delta: Money,
    },

    #[error("Participant '{person}' appears more than once in the split")]
    DuplicateParticipant { person: String },

    /// A share is missing a field or has one that cannot be parsed
    #[error("Share #{} is malformed: {reason}", .index + 1)]
    MalformedShare { index: usize, reason: String },

    #[error("Expense total must be greater than zero, got {total}")]
    NonPositiveTotal { total: Money },
}

fn direction(delta: &Money) -> &'static str {
    if delta.is_negative() {
        "over-allocated"
    } else {
        "under-allocated"
    }
}

impl ValidationError {
    /// Stable machine-readable kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnbalancedSplit { .. } => "unbalanced_split",
            Self::DuplicateParticipant { .. } => "duplicate_participant",
            Self::MalformedShare { .. } => "malformed_share",
            Self::NonPositiveTotal { .. } => "non_positive_total",
        }
    }

    /// Signed delta for unbalanced splits
    pub fn delta(&self) -> Option<Money> {
        match self {
            Self::UnbalancedSplit { delta, .. } => Some(*delta),
            _ => None,
        }
    }

    pub(crate) fn malformed(index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedShare {
            index,
            reason: reason.into(),
        }
    }
}
