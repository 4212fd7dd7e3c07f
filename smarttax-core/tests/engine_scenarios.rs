//! End-to-end engine scenarios across both jurisdictions.

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use smarttax_core::{
    Currency, FilingStatus, IncomeProfile, IndiaProfile, Jurisdiction, TaxRegime, UsaProfile,
    compute_tax,
};

fn india_profile(
    gross: Decimal,
    regime: TaxRegime,
) -> IncomeProfile {
    IncomeProfile::India(IndiaProfile {
        gross_income: gross,
        regime,
        section_80c: Decimal::ZERO,
        section_80d: Decimal::ZERO,
        other_deductions: Decimal::ZERO,
    })
}

fn usa_profile(
    gross: Decimal,
    filing_status: FilingStatus,
    retirement: Decimal,
) -> IncomeProfile {
    IncomeProfile::Usa(UsaProfile {
        gross_income: gross,
        filing_status,
        retirement_contribution: retirement,
    })
}

#[test]
fn india_new_regime_twelve_lakh() {
    let result = compute_tax(&india_profile(dec!(1200000), TaxRegime::New));

    assert_eq!(result.currency, Currency::Inr);
    assert_eq!(result.total_deductions, dec!(75000));
    assert_eq!(result.taxable_income, dec!(1125000));
    assert_eq!(result.total_tax, dec!(54600));
    assert_eq!(result.net_income, dec!(1145400));
    assert_eq!(result.effective_rate, dec!(0.0455));
}

#[test]
fn usa_single_seventy_five_thousand() {
    let result = compute_tax(&usa_profile(
        dec!(75000),
        FilingStatus::Single,
        dec!(5000),
    ));

    assert_eq!(result.currency, Currency::Usd);
    assert_eq!(result.total_deductions, dec!(19600));
    assert_eq!(result.taxable_income, dec!(55400));
    assert_eq!(result.breakdown[1].value, dec!(5737.50));
    assert_eq!(result.total_tax, dec!(12978.50));
}

#[test]
fn taxable_income_is_never_negative() {
    for gross in [dec!(0), dec!(10000), dec!(75000), dec!(-1)] {
        let result = compute_tax(&india_profile(gross, TaxRegime::New));
        assert!(result.taxable_income >= Decimal::ZERO);
        assert!(result.total_tax >= Decimal::ZERO);

        let result = compute_tax(&usa_profile(gross, FilingStatus::Single, Decimal::ZERO));
        assert!(result.taxable_income >= Decimal::ZERO);
        assert!(result.total_tax >= Decimal::ZERO);
    }
}

#[test]
fn taxable_income_identity_holds() {
    let result = compute_tax(&usa_profile(
        dec!(120000),
        FilingStatus::HeadOfHousehold,
        dec!(7500),
    ));

    assert_eq!(
        result.taxable_income,
        (result.gross_income - result.total_deductions).max(Decimal::ZERO)
    );
    assert_eq!(result.net_income, result.gross_income - result.total_tax);
}

#[test]
fn recomputation_is_idempotent() {
    let profile = india_profile(dec!(1234567.89), TaxRegime::Old);

    assert_eq!(compute_tax(&profile), compute_tax(&profile));

    let profile = usa_profile(dec!(250000.50), FilingStatus::MarriedJoint, dec!(23000));

    assert_eq!(compute_tax(&profile), compute_tax(&profile));
}

#[test]
fn rebate_cliff_new_regime() {
    // Taxable exactly 700000 (gross 775000 − 75000 standard): fully rebated.
    let at = compute_tax(&india_profile(dec!(775000), TaxRegime::New));
    assert_eq!(at.total_tax, Decimal::ZERO);

    // One rupee more: strictly positive tax, no phase-out.
    let above = compute_tax(&india_profile(dec!(775001), TaxRegime::New));
    assert!(above.total_tax > Decimal::ZERO);
}

#[test]
fn rebate_cliff_old_regime() {
    let at = compute_tax(&india_profile(dec!(550000), TaxRegime::Old));
    assert_eq!(at.taxable_income, dec!(500000));
    assert_eq!(at.total_tax, Decimal::ZERO);

    let above = compute_tax(&india_profile(dec!(550001), TaxRegime::Old));
    assert!(above.total_tax > Decimal::ZERO);
}

#[test]
fn social_security_caps_at_wage_base() {
    let below = compute_tax(&usa_profile(
        dec!(100000),
        FilingStatus::Single,
        Decimal::ZERO,
    ));
    // Below the base: FICA = gross × (6.2% + 1.45%).
    assert_eq!(below.breakdown[1].value, dec!(100000) * dec!(0.0765));

    let above = compute_tax(&usa_profile(
        dec!(400000),
        FilingStatus::Single,
        Decimal::ZERO,
    ));
    // Above the base: SS frozen at 168600 × 6.2%, medicare keeps growing.
    assert_eq!(
        above.breakdown[1].value,
        dec!(168600) * dec!(0.062) + dec!(400000) * dec!(0.0145)
    );
}

#[test]
fn zero_income_produces_all_zero_result() {
    let result = compute_tax(&usa_profile(
        Decimal::ZERO,
        FilingStatus::Single,
        Decimal::ZERO,
    ));

    assert_eq!(result.gross_income, Decimal::ZERO);
    assert_eq!(result.total_tax, Decimal::ZERO);
    assert_eq!(result.net_income, Decimal::ZERO);
    assert_eq!(result.effective_rate, Decimal::ZERO);
}

#[test]
fn profile_reports_its_jurisdiction() {
    assert_eq!(
        india_profile(dec!(1), TaxRegime::New).jurisdiction(),
        Jurisdiction::India
    );
    assert_eq!(
        usa_profile(dec!(1), FilingStatus::Single, Decimal::ZERO).jurisdiction(),
        Jurisdiction::Usa
    );
}
