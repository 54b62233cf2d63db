use crate::models::currency::{Currency, RateTable};
use crate::utils::error::ConversionError;

/// Converts `amount` of `source` into `target`, pivoting through USD.
///
/// Returns full precision; rounding belongs to whoever displays it.
pub fn convert(
    table: &RateTable,
    amount: f64,
    source: Currency,
    target: Currency,
) -> Result<f64, ConversionError> {
    if !amount.is_finite() {
        return Err(ConversionError::Invalid(format!("amount must be a finite number, got {}", amount)));
    }
    if amount < 0.0 {
        return Err(ConversionError::Invalid(format!("amount must be >= 0, got {}", amount)));
    }
    let amount = non_negative_zero(amount);

    let divisor = table.rate(source);
    if divisor == 0.0 {
        return Err(ConversionError::DivisionByZero);
    }

    let result = (amount / divisor) * table.rate(target);
    if !result.is_finite() {
        return Err(ConversionError::Invalid(format!(
            "{} {} does not convert to a finite {} amount",
            amount, source, target
        )));
    }
    Ok(result)
}

/// `-0.0` passes `>= 0` checks but prints with a sign.
pub fn non_negative_zero(amount: f64) -> f64 {
    if amount == 0.0 { 0.0 } else { amount }
}

/// `"{amount} {source} is equal to {converted:.2} {target}"`
pub fn describe(amount: f64, source: Currency, converted: f64, target: Currency) -> String {
    format!(
        "{} {} is equal to {:.2} {}",
        format_amount(non_negative_zero(amount)),
        source,
        non_negative_zero(converted),
        target
    )
}

/// Shortest round-trip form, always with a fractional part (`100.0`, `12.5`).
/// Outside `1e-4..1e16` it switches to scientific notation with a signed,
/// two-digit exponent (`1e+16`, `2.5e-07`).
pub fn format_amount(amount: f64) -> String {
    let repr = format!("{:?}", amount);
    let Some((mantissa, exp)) = repr.split_once('e') else {
        return repr;
    };
    match exp.parse::<i32>() {
        Ok(e) => format!("{}e{}{:02}", mantissa, if e < 0 { '-' } else { '+' }, e.abs()),
        Err(_) => repr,
    }
}
