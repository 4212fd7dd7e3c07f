mod bracket;
mod income_profile;
mod jurisdiction;
mod tax_result;

pub use bracket::{BracketTable, BracketTableError, TaxBracket};
pub use income_profile::{IncomeProfile, IndiaProfile, UsaProfile};
pub use jurisdiction::{FilingStatus, Jurisdiction, TaxRegime};
pub use tax_result::{BreakdownItem, Currency, TaxResult};
