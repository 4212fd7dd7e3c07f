use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::jurisdiction::{FilingStatus, Jurisdiction, TaxRegime};

/// Indian income profile.
///
/// The itemized deduction fields (`section_80c`, `section_80d`,
/// `other_deductions`) are consulted only under [`TaxRegime::Old`].
/// Callers map blank form fields to zero; negative amounts are clamped
/// to zero by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndiaProfile {
    pub gross_income: Decimal,
    pub regime: TaxRegime,
    pub section_80c: Decimal,
    pub section_80d: Decimal,
    pub other_deductions: Decimal,
}

/// USA income profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsaProfile {
    pub gross_income: Decimal,
    pub filing_status: FilingStatus,
    /// Pre-tax 401(k) / IRA contributions, deducted alongside the
    /// standard deduction.
    pub retirement_contribution: Decimal,
}

/// Input to one tax calculation. Immutable per calculation; the caller
/// constructs a fresh profile from current form state on every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeProfile {
    India(IndiaProfile),
    Usa(UsaProfile),
}

impl IncomeProfile {
    pub fn jurisdiction(&self) -> Jurisdiction {
        match self {
            Self::India(_) => Jurisdiction::India,
            Self::Usa(_) => Jurisdiction::Usa,
        }
    }

    pub fn gross_income(&self) -> Decimal {
        match self {
            Self::India(p) => p.gross_income,
            Self::Usa(p) => p.gross_income,
        }
    }
}
