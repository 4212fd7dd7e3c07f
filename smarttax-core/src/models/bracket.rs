use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One marginal bracket: the rate applied to income up to `upper_bound`.
/// `None` marks the open top bracket whose rate applies to all income
/// above the previous bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    pub fn up_to(upper_bound: Decimal, rate: Decimal) -> Self {
        Self {
            upper_bound: Some(upper_bound),
            rate,
        }
    }

    pub fn above(rate: Decimal) -> Self {
        Self {
            upper_bound: None,
            rate,
        }
    }
}

/// Errors detected by [`BracketTable::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketTableError {
    #[error("bracket table is empty")]
    Empty,

    /// The last bracket must be open so the table covers `[0, ∞)`.
    #[error("bracket table has no open top bracket")]
    MissingOpenTopBracket,

    /// Only the last bracket may be open.
    #[error("open bracket at position {0} is not the last bracket")]
    OpenBracketNotLast(usize),

    #[error("bracket bounds not strictly increasing at position {0}")]
    BoundsNotAscending(usize),

    #[error("negative tax rate {0}")]
    NegativeRate(Decimal),
}

/// An ordered marginal bracket schedule, exhaustive over `[0, ∞)`.
///
/// Construction is unchecked; the built-in schedules are covered by
/// validation tests, and any future data-loaded table should call
/// [`validate`](Self::validate) before use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketTable(Vec<TaxBracket>);

impl BracketTable {
    pub fn new(brackets: Vec<TaxBracket>) -> Self {
        Self(brackets)
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.0
    }

    /// Checks the table invariants: non-empty, strictly increasing bounds,
    /// non-negative rates, and exactly one open bracket in the last position.
    pub fn validate(&self) -> Result<(), BracketTableError> {
        if self.0.is_empty() {
            return Err(BracketTableError::Empty);
        }

        let mut previous: Option<Decimal> = None;
        for (i, bracket) in self.0.iter().enumerate() {
            if bracket.rate < Decimal::ZERO {
                return Err(BracketTableError::NegativeRate(bracket.rate));
            }
            match bracket.upper_bound {
                Some(bound) => {
                    if previous.is_some_and(|p| bound <= p) {
                        return Err(BracketTableError::BoundsNotAscending(i));
                    }
                    previous = Some(bound);
                }
                None if i + 1 != self.0.len() => {
                    return Err(BracketTableError::OpenBracketNotLast(i));
                }
                None => return Ok(()),
            }
        }

        Err(BracketTableError::MissingOpenTopBracket)
    }
}
