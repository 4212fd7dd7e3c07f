use crate::calculations::{india, usa};
use crate::models::{IncomeProfile, TaxResult};

/// Computes the estimated tax liability for an income profile.
///
/// Total over its whole input domain: negative amounts are clamped to zero
/// rather than rejected, so every profile produces a result (possibly
/// all-zero). Pure and deterministic — identical profiles yield identical
/// results, and nothing is shared between invocations.
pub fn compute_tax(profile: &IncomeProfile) -> TaxResult {
    match profile {
        IncomeProfile::India(p) => india::calculate(p),
        IncomeProfile::Usa(p) => usa::calculate(p),
    }
}
