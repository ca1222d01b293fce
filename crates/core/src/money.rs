//! Money
//!
//! All amounts are Colombian pesos. Arithmetic is done on minor units so that
//! no operation can fail on a currency mismatch.

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use serde::{Serializer, ser::Error as _};
use thiserror::Error;

/// Currency used for every amount in the register.
pub const CURRENCY: &Currency = iso::COP;

/// A peso amount.
pub type Amount = Money<'static, Currency>;

/// Errors converting external values into amounts.
#[derive(Debug, Error, PartialEq)]
pub enum MoneyParseError {
    /// The decimal value does not fit in minor units.
    #[error("valor fuera de rango: {0}")]
    OutOfRange(Decimal),

    /// The text is not a decimal number.
    #[error("valor inválido: {0:?}")]
    InvalidAmount(String),
}

fn minor_per_peso() -> i64 {
    10_i64.pow(CURRENCY.exponent)
}

/// Zero pesos.
pub fn zero() -> Amount {
    Money::from_minor(0, CURRENCY)
}

/// Build an amount from whole pesos.
pub fn pesos(value: i64) -> Amount {
    Money::from_minor(value.saturating_mul(minor_per_peso()), CURRENCY)
}

/// Build an amount from a decimal peso value, rounding to the nearest minor unit.
///
/// # Errors
///
/// Returns [`MoneyParseError::OutOfRange`] when the value does not fit in minor units.
pub fn from_decimal(value: Decimal) -> Result<Amount, MoneyParseError> {
    let minor_units = value
        .checked_mul(Decimal::from(minor_per_peso()))
        .and_then(|minor| minor.round_dp(0).to_i64())
        .ok_or(MoneyParseError::OutOfRange(value))?;

    Ok(Money::from_minor(minor_units, CURRENCY))
}

/// Parse a user-entered peso value such as `"15000"` or `"2500.5"`.
///
/// Blank input is zero.
///
/// # Errors
///
/// Returns an error if the text is not a decimal number or is out of range.
pub fn parse(text: &str) -> Result<Amount, MoneyParseError> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Ok(zero());
    }

    let value = trimmed
        .parse::<Decimal>()
        .map_err(|_err| MoneyParseError::InvalidAmount(text.to_string()))?;

    from_decimal(value)
}

/// The peso value of an amount.
pub fn to_decimal(amount: Amount) -> Decimal {
    Decimal::new(amount.to_minor_units(), CURRENCY.exponent).normalize()
}

/// Round to the nearest whole peso, halves rounding up.
pub fn round_to_peso(amount: Amount) -> Amount {
    let per_peso = minor_per_peso();
    let rounded = amount
        .to_minor_units()
        .saturating_add(per_peso / 2)
        .div_euclid(per_peso)
        .saturating_mul(per_peso);

    Money::from_minor(rounded, CURRENCY)
}

/// Sum a sequence of amounts.
pub fn sum(amounts: impl IntoIterator<Item = Amount>) -> Amount {
    let total = amounts
        .into_iter()
        .fold(0_i64, |acc, amount| acc.saturating_add(amount.to_minor_units()));

    Money::from_minor(total, CURRENCY)
}

/// `amount × quantity`.
pub fn times(amount: Amount, quantity: u32) -> Amount {
    Money::from_minor(
        amount.to_minor_units().saturating_mul(i64::from(quantity)),
        CURRENCY,
    )
}

/// `left − right`, which may be negative.
pub fn difference(left: Amount, right: Amount) -> Amount {
    Money::from_minor(
        left.to_minor_units()
            .saturating_sub(right.to_minor_units()),
        CURRENCY,
    )
}

/// Clamp an amount into `[low, high]`. When `high < low` the result is `low`.
pub fn clamp(amount: Amount, low: Amount, high: Amount) -> Amount {
    let minor = amount
        .to_minor_units()
        .min(high.to_minor_units())
        .max(low.to_minor_units());

    Money::from_minor(minor, CURRENCY)
}

/// The amount, or zero if it is negative.
pub fn max_zero(amount: Amount) -> Amount {
    Money::from_minor(amount.to_minor_units().max(0), CURRENCY)
}

/// Format an amount for display.
pub fn format_money(amount: &Amount) -> String {
    format!("{amount}")
}

/// Serialize an amount as a JSON number of pesos.
///
/// Whole amounts are written as integers (`5000`), the rest as floats.
///
/// # Errors
///
/// Fails when the amount cannot be represented as a float.
pub fn serialize_pesos<S: Serializer>(amount: &Amount, serializer: S) -> Result<S::Ok, S::Error> {
    let value = to_decimal(*amount);

    if value.fract().is_zero()
        && let Some(whole) = value.to_i64()
    {
        return serializer.serialize_i64(whole);
    }

    let float = value
        .to_f64()
        .ok_or_else(|| S::Error::custom(format!("amount {value} is not representable")))?;

    serializer.serialize_f64(float)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn pesos_and_to_decimal_agree() {
        assert_eq!(to_decimal(pesos(5000)), Decimal::from(5000));
    }

    #[test]
    fn round_to_peso_rounds_halves_up() -> TestResult {
        assert_eq!(round_to_peso(from_decimal(Decimal::new(70_004, 1))?), pesos(7000));
        assert_eq!(round_to_peso(from_decimal(Decimal::new(70_005, 1))?), pesos(7001));
        assert_eq!(round_to_peso(pesos(7000)), pesos(7000));

        Ok(())
    }

    #[test]
    fn parse_accepts_blank_and_decimals() -> TestResult {
        assert_eq!(parse("")?, zero());
        assert_eq!(parse(" 15000 ")?, pesos(15_000));
        assert_eq!(to_decimal(parse("2500.5")?), Decimal::new(25_005, 1));

        Ok(())
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(
            parse("mucho"),
            Err(MoneyParseError::InvalidAmount("mucho".to_string()))
        );
    }

    #[test]
    fn clamp_respects_bounds() {
        assert_eq!(clamp(pesos(-5), zero(), pesos(10)), zero());
        assert_eq!(clamp(pesos(50), zero(), pesos(10)), pesos(10));
        assert_eq!(clamp(pesos(7), zero(), pesos(10)), pesos(7));
    }

    #[test]
    fn difference_and_max_zero() {
        assert_eq!(difference(pesos(3), pesos(5)), pesos(-2));
        assert_eq!(max_zero(difference(pesos(3), pesos(5))), zero());
    }

    #[test]
    fn sum_and_times() {
        assert_eq!(sum([pesos(5000), pesos(1200), pesos(800)]), pesos(7000));
        assert_eq!(sum([]), zero());
        assert_eq!(times(pesos(7000), 2), pesos(14_000));
    }
}
