//! USA federal income tax and FICA calculation.
//!
//! Federal tax is the marginal integration of the filing-status schedule
//! over taxable income (gross − standard deduction − retirement
//! contributions). FICA is layered on top: social security at 6.2% of
//! gross up to the wage base, plus uncapped medicare at 1.45% of gross.
//! FICA is deliberately assessed on **gross** income rather than the
//! federal taxable base.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::brackets::marginal_tax;
use crate::calculations::common::{floor_at_zero, round_half_up};
use crate::models::{BreakdownItem, Currency, TaxResult, UsaProfile};
use crate::schedules::{FicaSchedule, usa_schedule};

pub fn calculate(profile: &UsaProfile) -> TaxResult {
    let schedule = usa_schedule(profile.filing_status);
    let gross = floor_at_zero(profile.gross_income);

    let total_deductions =
        schedule.standard_deduction + floor_at_zero(profile.retirement_contribution);
    let taxable_income = floor_at_zero(gross - total_deductions);

    let federal_tax = round_half_up(marginal_tax(&schedule.brackets, taxable_income));
    let fica = round_half_up(fica_tax(gross, &schedule.fica));
    let total_tax = federal_tax + fica;

    debug!(
        filing_status = profile.filing_status.as_str(),
        %gross,
        %taxable_income,
        %federal_tax,
        %fica,
        "computed us tax"
    );

    TaxResult::assemble(
        gross,
        total_deductions,
        taxable_income,
        total_tax,
        Currency::Usd,
        vec![
            BreakdownItem::new("Federal Income Tax", federal_tax),
            BreakdownItem::highlighted("FICA (SS + Medicare)", fica),
        ],
    )
}

/// Combined social security and medicare tax on gross income.
fn fica_tax(
    gross: Decimal,
    fica: &FicaSchedule,
) -> Decimal {
    let social_security = gross.min(fica.ss_wage_base) * fica.ss_rate;
    let medicare = gross * fica.medicare_rate;
    social_security + medicare
}
