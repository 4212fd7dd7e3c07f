//! Text rendering for tax results.
//!
//! Amounts are shown to whole units with locale-style digit grouping:
//! lakh/crore grouping for INR (`₹11,18,100`), western grouping for USD
//! (`$62,022`).

use rust_decimal::{Decimal, RoundingStrategy};
use smarttax_core::{Currency, TaxResult};

/// Formats a money amount with currency symbol and digit grouping,
/// rounded to whole units for display.
pub fn format_money(
    value: Decimal,
    currency: Currency,
) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().normalize().to_string();
    let grouped = match currency {
        Currency::Inr => group_indian(&digits),
        Currency::Usd => group_western(&digits),
    };

    format!(
        "{}{}{}",
        if negative { "-" } else { "" },
        currency.symbol(),
        grouped
    )
}

/// Western grouping: thousands separators every three digits.
fn group_western(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Indian grouping: the last three digits form one group, everything
/// before that is grouped in twos.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, c) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push(',');
    out.push_str(tail);
    out
}

/// Effective rate as a percentage with one decimal place.
pub fn format_rate(rate: Decimal) -> String {
    let percent = (rate * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{percent:.1}%")
}

/// Renders the full result summary, one line per figure, breakdown lines
/// in engine order.
pub fn render_result(result: &TaxResult) -> String {
    let c = result.currency;
    let mut lines = vec![
        ("Gross Income".to_string(), format_money(result.gross_income, c)),
        (
            "Deductions".to_string(),
            format!("-{}", format_money(result.total_deductions, c)),
        ),
        (
            "Taxable Income".to_string(),
            format_money(result.taxable_income, c),
        ),
    ];
    for item in &result.breakdown {
        lines.push((item.label.clone(), format_money(item.value, c)));
    }
    lines.push((
        "Total Tax".to_string(),
        format!(
            "{}  (effective rate {})",
            format_money(result.total_tax, c),
            format_rate(result.effective_rate)
        ),
    ));
    lines.push(("Net Income".to_string(), format_money(result.net_income, c)));

    let width = lines.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    lines
        .into_iter()
        .map(|(label, value)| format!("{label:<width$}  {value}\n"))
        .collect()
}
