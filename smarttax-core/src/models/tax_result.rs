use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    Inr,
    Usd,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inr => "INR",
            Self::Usd => "USD",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Inr => "₹",
            Self::Usd => "$",
        }
    }
}

/// One line of the jurisdiction-specific tax breakdown. Secondary taxes
/// (cess, FICA) are marked `highlight` to distinguish them from the
/// primary bracket tax when rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownItem {
    pub label: String,
    pub value: Decimal,
    pub highlight: bool,
}

impl BreakdownItem {
    pub fn new(label: impl Into<String>, value: Decimal) -> Self {
        Self {
            label: label.into(),
            value,
            highlight: false,
        }
    }

    pub fn highlighted(label: impl Into<String>, value: Decimal) -> Self {
        Self {
            label: label.into(),
            value,
            highlight: true,
        }
    }
}

/// Output of one tax calculation. Immutable; a recomputation replaces the
/// prior result wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    pub gross_income: Decimal,
    pub total_deductions: Decimal,
    pub taxable_income: Decimal,
    pub total_tax: Decimal,
    pub net_income: Decimal,
    /// `total_tax / gross_income` as a ratio; zero when gross income is zero.
    pub effective_rate: Decimal,
    pub currency: Currency,
    pub breakdown: Vec<BreakdownItem>,
}

impl TaxResult {
    /// Assembles a result from the computed figures, deriving net income
    /// and the effective rate.
    pub fn assemble(
        gross_income: Decimal,
        total_deductions: Decimal,
        taxable_income: Decimal,
        total_tax: Decimal,
        currency: Currency,
        breakdown: Vec<BreakdownItem>,
    ) -> Self {
        let effective_rate = if gross_income > Decimal::ZERO {
            total_tax / gross_income
        } else {
            Decimal::ZERO
        };

        Self {
            gross_income,
            total_deductions,
            taxable_income,
            total_tax,
            net_income: gross_income - total_tax,
            effective_rate,
            currency,
            breakdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn assemble_derives_net_income_and_effective_rate() {
        let result = TaxResult::assemble(
            dec!(100000),
            dec!(15000),
            dec!(85000),
            dec!(20000),
            Currency::Usd,
            vec![],
        );

        assert_eq!(result.net_income, dec!(80000));
        assert_eq!(result.effective_rate, dec!(0.2));
    }

    #[test]
    fn assemble_zero_gross_has_zero_effective_rate() {
        let result = TaxResult::assemble(
            Decimal::ZERO,
            dec!(75000),
            Decimal::ZERO,
            Decimal::ZERO,
            Currency::Inr,
            vec![],
        );

        assert_eq!(result.effective_rate, Decimal::ZERO);
        assert_eq!(result.net_income, Decimal::ZERO);
    }
}
