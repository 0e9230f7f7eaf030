//! Share resolution and validation
//!
//! Percentage shares are always a percentage of the FULL expense total, never
//! of what remains after exact shares. A split of a 100.00 expense with
//! `A exact 40` and `B percentage 60` therefore resolves to 40.00 + 60.00.
//! Resolution is a single pass with no ordering between shares. Percentages do
//! not have to add up to 100 on their own; only the resolved amounts must
//! balance against the total.
//!
//! Checks run in a fixed order and the first failure is returned:
//!
//! 1. the total is positive
//! 2. every share is well formed (person, type, non-negative value, percent <= 100)
//! 3. no participant appears twice
//! 4. the resolved amounts sum to the total within [`SPLIT_TOLERANCE`]
//!
//! Participants are identified by name, trimmed and compared without regard
//! to case, so `Alice` and ` alice` are the same person. A value too large to
//! be represented in cents, alone or summed with the other shares, is a
//! malformed share.

use std::collections::HashSet;

use rust_decimal::Decimal;

use super::error::ValidationError;
use crate::models::{share::person_key, Money, Share, ShareInput, ShareType};

/// Largest allowed difference between the total and the resolved shares
pub const SPLIT_TOLERANCE: Money = Money::from_cents(1);

/// A share after parsing, before its amount is computed
struct ParsedShare {
    person: String,
    share_type: ShareType,
    value: Decimal,
}

/// Validate a split and compute the amount each participant owes
///
/// Pure function of its inputs. On success the returned shares are in the
/// same order as `shares`.
pub fn resolve_shares(total: Money, shares: &[ShareInput]) -> Result<Vec<Share>, ValidationError> {
    if !total.is_positive() {
        return Err(ValidationError::NonPositiveTotal { total });
    }

    if shares.is_empty() {
        return Err(ValidationError::malformed(0, "a split needs at least one share"));
    }

    let parsed = shares
        .iter()
        .enumerate()
        .map(|(index, input)| parse_share(index, input))
        .collect::<Result<Vec<_>, _>>()?;

    let mut seen = HashSet::with_capacity(parsed.len());
    for share in &parsed {
        if !seen.insert(person_key(&share.person)) {
            return Err(ValidationError::DuplicateParticipant {
                person: share.person.clone(),
            });
        }
    }

    let resolved = parsed
        .into_iter()
        .enumerate()
        .map(|(index, share)| resolve_one(index, total, share))
        .collect::<Result<Vec<_>, _>>()?;

    check_balance(total, &resolved)?;

    Ok(resolved)
}

/// Check that already-resolved shares add up to `total`
pub fn check_balance(total: Money, shares: &[Share]) -> Result<(), ValidationError> {
    let resolved = shares
        .iter()
        .enumerate()
        .try_fold(Money::zero(), |acc, (index, share)| {
            acc.checked_add(share.resolved_amount).ok_or_else(|| {
                ValidationError::malformed(index, "shares add up to more than can be represented")
            })
        })?;
    let delta = total.checked_sub(resolved).ok_or_else(|| {
        ValidationError::malformed(shares.len().saturating_sub(1), "shares are out of range")
    })?;

    if delta.abs() > SPLIT_TOLERANCE {
        return Err(ValidationError::UnbalancedSplit {
            total,
            resolved,
            delta,
        });
    }

    Ok(())
}

fn parse_share(index: usize, input: &ShareInput) -> Result<ParsedShare, ValidationError> {
    let person = input.person.trim();
    if person.is_empty() {
        return Err(ValidationError::malformed(index, "person is empty"));
    }

    if input.share_type.trim().is_empty() {
        return Err(ValidationError::malformed(index, "share type is missing"));
    }
    let share_type: ShareType = input
        .share_type
        .parse()
        .map_err(|reason: String| ValidationError::malformed(index, reason))?;

    let raw_value = input.value.trim();
    if raw_value.is_empty() {
        return Err(ValidationError::malformed(index, "value is missing"));
    }
    let value: Decimal = raw_value.parse().map_err(|_| {
        ValidationError::malformed(index, format!("value '{}' is not a number", raw_value))
    })?;

    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::malformed(
            index,
            format!("value {} is negative", value),
        ));
    }
    if share_type == ShareType::Percentage && value > Decimal::ONE_HUNDRED {
        return Err(ValidationError::malformed(
            index,
            format!("percentage {} is above 100", value),
        ));
    }

    Ok(ParsedShare {
        person: person.to_string(),
        share_type,
        value,
    })
}

fn resolve_one(index: usize, total: Money, share: ParsedShare) -> Result<Share, ValidationError> {
    let resolved_amount = match share.share_type {
        ShareType::Exact => Money::from_decimal(share.value),
        ShareType::Percentage => total.percentage(share.value),
    }
    .ok_or_else(|| ValidationError::malformed(index, "value is out of range"))?;

    Ok(Share {
        person: share.person,
        share_type: share.share_type,
        value: share.value,
        resolved_amount,
    })
}
