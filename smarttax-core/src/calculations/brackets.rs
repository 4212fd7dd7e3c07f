//! Marginal bracket integration shared by both jurisdictions.

use rust_decimal::Decimal;

use crate::models::BracketTable;

/// Integrates a marginal bracket schedule over `[0, taxable_income]`.
///
/// Walks the table in order, taxing the slice of income that falls inside
/// each bracket at that bracket's rate: `(min(T, bound_i) − bound_{i−1}) ×
/// rate_i`. The open top bracket taxes everything above the last finite
/// bound. The result is continuous at every bound — income exactly at a
/// bound is taxed once, in the bracket it closes.
///
/// Returns the unrounded tax; callers apply display rounding.
pub fn marginal_tax(
    table: &BracketTable,
    taxable_income: Decimal,
) -> Decimal {
    if taxable_income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let mut tax = Decimal::ZERO;
    let mut lower = Decimal::ZERO;

    for bracket in table.brackets() {
        let upper = match bracket.upper_bound {
            Some(bound) => bound.min(taxable_income),
            None => taxable_income,
        };
        if upper > lower {
            tax += (upper - lower) * bracket.rate;
        }
        match bracket.upper_bound {
            Some(bound) if taxable_income > bound => lower = bound,
            _ => break,
        }
    }

    tax
}
