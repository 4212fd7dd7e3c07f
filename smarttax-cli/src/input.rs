//! Parsing helpers for money amounts entered on the command line.

use rust_decimal::Decimal;

/// Parses a money amount for clap.
///
/// Accepts comma thousands separators (`1,200,000`). Empty or
/// whitespace-only input is treated as zero, matching the form behavior
/// where a blank field means "nothing entered".
pub fn parse_money(s: &str) -> Result<Decimal, String> {
    let normalized = s.trim().replace(',', "");
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized
        .parse()
        .map_err(|e| format!("invalid amount '{s}': {e}"))
}
