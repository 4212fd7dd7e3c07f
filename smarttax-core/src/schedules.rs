//! Versioned bracket schedules and regime constants.
//!
//! Every rate, threshold, and deduction amount lives here as named
//! configuration data, one schedule per (jurisdiction, regime or filing
//! status) combination. A future tax-year update is a data change in this
//! module, not a logic change in the calculators.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{BracketTable, FilingStatus, TaxBracket, TaxRegime};

/// Constants for one Indian regime: slab table plus the deduction and
/// post-processing parameters layered on top of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndiaSchedule {
    pub standard_deduction: Decimal,
    /// Ceiling on the Section 80C component (old regime only).
    pub section_80c_cap: Decimal,
    /// Section 87A: basic tax is forgiven entirely at or below this
    /// taxable income.
    pub rebate_threshold: Decimal,
    /// Health & education cess, applied to basic tax after the rebate.
    pub cess_rate: Decimal,
    pub brackets: BracketTable,
}

/// USA payroll tax parameters. FICA is assessed on gross income.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FicaSchedule {
    /// Annual cap on earnings subject to social security tax.
    pub ss_wage_base: Decimal,
    pub ss_rate: Decimal,
    /// Medicare has no wage cap.
    pub medicare_rate: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsaSchedule {
    pub standard_deduction: Decimal,
    pub fica: FicaSchedule,
    pub brackets: BracketTable,
}

/// Current Indian schedule for the given regime (FY 2025-26).
pub fn india_schedule(regime: TaxRegime) -> IndiaSchedule {
    match regime {
        TaxRegime::New => india_new_fy2025_26(),
        TaxRegime::Old => india_old_fy2025_26(),
    }
}

/// New regime slabs for FY 2025-26.
///
/// | Taxable income (₹)      | Rate |
/// |-------------------------|------|
/// | 0 – 4,00,000            | 0%   |
/// | 4,00,001 – 8,00,000     | 5%   |
/// | 8,00,001 – 12,00,000    | 10%  |
/// | 12,00,001 – 16,00,000   | 15%  |
/// | 16,00,001 – 20,00,000   | 20%  |
/// | 20,00,001 – 24,00,000   | 25%  |
/// | above 24,00,000         | 30%  |
pub fn india_new_fy2025_26() -> IndiaSchedule {
    IndiaSchedule {
        standard_deduction: dec!(75000),
        section_80c_cap: dec!(150000),
        rebate_threshold: dec!(700000),
        cess_rate: dec!(0.04),
        brackets: BracketTable::new(vec![
            TaxBracket::up_to(dec!(400000), Decimal::ZERO),
            TaxBracket::up_to(dec!(800000), dec!(0.05)),
            TaxBracket::up_to(dec!(1200000), dec!(0.10)),
            TaxBracket::up_to(dec!(1600000), dec!(0.15)),
            TaxBracket::up_to(dec!(2000000), dec!(0.20)),
            TaxBracket::up_to(dec!(2400000), dec!(0.25)),
            TaxBracket::above(dec!(0.30)),
        ]),
    }
}

/// Old regime slabs (unchanged for FY 2025-26).
///
/// | Taxable income (₹)      | Rate |
/// |-------------------------|------|
/// | 0 – 2,50,000            | 0%   |
/// | 2,50,001 – 5,00,000     | 5%   |
/// | 5,00,001 – 10,00,000    | 20%  |
/// | above 10,00,000         | 30%  |
pub fn india_old_fy2025_26() -> IndiaSchedule {
    IndiaSchedule {
        standard_deduction: dec!(50000),
        section_80c_cap: dec!(150000),
        rebate_threshold: dec!(500000),
        cess_rate: dec!(0.04),
        brackets: BracketTable::new(vec![
            TaxBracket::up_to(dec!(250000), Decimal::ZERO),
            TaxBracket::up_to(dec!(500000), dec!(0.05)),
            TaxBracket::up_to(dec!(1000000), dec!(0.20)),
            TaxBracket::above(dec!(0.30)),
        ]),
    }
}

/// Current USA schedule for the given filing status (tax year 2024).
pub fn usa_schedule(filing_status: FilingStatus) -> UsaSchedule {
    usa_2024(filing_status)
}

/// 2024 federal schedule plus FICA parameters for the given filing status.
///
/// Head of household shares the joint bracket table in this simplified
/// estimator; the standard deduction is still status-specific.
pub fn usa_2024(filing_status: FilingStatus) -> UsaSchedule {
    let standard_deduction = match filing_status {
        FilingStatus::Single => dec!(14600),
        FilingStatus::MarriedJoint => dec!(29200),
        FilingStatus::HeadOfHousehold => dec!(21900),
    };
    let brackets = match filing_status {
        FilingStatus::Single => usa_schedule_x_2024(),
        FilingStatus::MarriedJoint | FilingStatus::HeadOfHousehold => usa_schedule_y1_2024(),
    };

    UsaSchedule {
        standard_deduction,
        fica: fica_2024(),
        brackets,
    }
}

/// 2024 Schedule X (single filers).
fn usa_schedule_x_2024() -> BracketTable {
    BracketTable::new(vec![
        TaxBracket::up_to(dec!(11600), dec!(0.10)),
        TaxBracket::up_to(dec!(47150), dec!(0.12)),
        TaxBracket::up_to(dec!(100525), dec!(0.22)),
        TaxBracket::up_to(dec!(191950), dec!(0.24)),
        TaxBracket::up_to(dec!(243725), dec!(0.32)),
        TaxBracket::up_to(dec!(609350), dec!(0.35)),
        TaxBracket::above(dec!(0.37)),
    ])
}

/// 2024 Schedule Y-1 (married filing jointly).
fn usa_schedule_y1_2024() -> BracketTable {
    BracketTable::new(vec![
        TaxBracket::up_to(dec!(23200), dec!(0.10)),
        TaxBracket::up_to(dec!(94300), dec!(0.12)),
        TaxBracket::up_to(dec!(201050), dec!(0.22)),
        TaxBracket::up_to(dec!(383900), dec!(0.24)),
        TaxBracket::up_to(dec!(487450), dec!(0.32)),
        TaxBracket::up_to(dec!(731200), dec!(0.35)),
        TaxBracket::above(dec!(0.37)),
    ])
}

/// 2024 FICA parameters.
pub fn fica_2024() -> FicaSchedule {
    FicaSchedule {
        ss_wage_base: dec!(168600),
        ss_rate: dec!(0.062),
        medicare_rate: dec!(0.0145),
    }
}
