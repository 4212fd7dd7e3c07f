//! Indian income tax calculation, both regimes.
//!
//! The calculation proceeds in three stages:
//!
//! 1. **Deductions** — new regime: standard deduction only; old regime:
//!    standard deduction + capped Section 80C + Section 80D + other
//!    exemptions.
//! 2. **Basic tax** — marginal integration of the regime's slab table
//!    over taxable income.
//! 3. **Post-processing** — the Section 87A rebate zeroes basic tax at or
//!    below the regime threshold (a cliff, applied after the continuous
//!    slab computation, never folded into the table), then the 4% health
//!    and education cess is added on whatever basic tax remains.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::brackets::marginal_tax;
use crate::calculations::common::{floor_at_zero, round_half_up};
use crate::models::{BreakdownItem, Currency, IndiaProfile, TaxRegime, TaxResult};
use crate::schedules::{IndiaSchedule, india_schedule};

pub fn calculate(profile: &IndiaProfile) -> TaxResult {
    let schedule = india_schedule(profile.regime);
    let gross = floor_at_zero(profile.gross_income);

    let total_deductions = total_deductions(profile, &schedule);
    let taxable_income = floor_at_zero(gross - total_deductions);

    let mut basic_tax = marginal_tax(&schedule.brackets, taxable_income);
    // Section 87A: full forgiveness at or below the threshold, not a reduction.
    if taxable_income <= schedule.rebate_threshold {
        basic_tax = Decimal::ZERO;
    }
    let basic_tax = round_half_up(basic_tax);
    // Cess applies to basic tax after the rebate and is never rebated itself.
    let cess = round_half_up(basic_tax * schedule.cess_rate);
    let total_tax = basic_tax + cess;

    debug!(
        regime = profile.regime.as_str(),
        %gross,
        %taxable_income,
        %basic_tax,
        %cess,
        "computed indian tax"
    );

    TaxResult::assemble(
        gross,
        total_deductions,
        taxable_income,
        total_tax,
        Currency::Inr,
        vec![
            BreakdownItem::new("Basic Tax", basic_tax),
            BreakdownItem::highlighted("Health & Edu Cess (4%)", cess),
        ],
    )
}

fn total_deductions(
    profile: &IndiaProfile,
    schedule: &IndiaSchedule,
) -> Decimal {
    match profile.regime {
        TaxRegime::New => schedule.standard_deduction,
        TaxRegime::Old => {
            let capped_80c = floor_at_zero(profile.section_80c).min(schedule.section_80c_cap);
            schedule.standard_deduction
                + capped_80c
                + floor_at_zero(profile.section_80d)
                + floor_at_zero(profile.other_deductions)
        }
    }
}
