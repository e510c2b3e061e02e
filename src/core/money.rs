use rust_decimal::{Decimal, RoundingStrategy};

/// Baht amounts are displayed with two decimal places
pub const BAHT_SCALE: u32 = 2;

/// Round an amount for display.
///
/// Stored amounts are never rounded; only presentation goes through here.
pub fn round_baht(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(BAHT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount the way the dashboard shows money, e.g. `฿12,500.00`
pub fn format_baht(amount: Decimal) -> String {
    let rounded = round_baht(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.width$}", rounded.abs(), width = BAHT_SCALE as usize);
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}฿{}.{}", if negative { "-" } else { "" }, grouped, fraction)
}

/// Validate that a monetary amount can be stored
pub fn validate_amount(field: &str, amount: Decimal) -> Result<(), String> {
    if amount < Decimal::ZERO {
        return Err(format!("{} cannot be negative", field));
    }
    Ok(())
}

/// Validate a fraction in `[0, 1]` such as a commission rate
pub fn validate_rate(field: &str, rate: Decimal) -> Result<(), String> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(format!("{} must be between 0 and 1, got {}", field, rate));
    }
    Ok(())
}

/// Render a rate as a percentage with one decimal, e.g. `0.15` -> `15.0%`
pub fn format_rate(rate: Decimal) -> String {
    format!("{:.1}%", rate * Decimal::ONE_HUNDRED)
}
