// storefront/src/services/pricing.rs

use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

/// Two decimal places, half away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
  amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn line_total(price: Decimal, quantity: i64) -> Decimal {
  round_money(price * Decimal::from(quantity))
}

/// Reads a quantity the way a lenient JSON client would send it.
///
/// Accepts an integer, a float (truncated toward zero) or a string with a leading
/// integer such as `"3"`, `" 7 items"` or `"2.9"`. Anything else, or a value
/// outside the `i32` range, is `None`.
pub fn coerce_quantity(value: &Value) -> Option<i64> {
  let parsed = match value {
    Value::Number(n) => match n.as_i64() {
      Some(i) => Some(i),
      None => n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64),
    },
    Value::String(s) => parse_leading_int(s),
    _ => None,
  }?;
  i32::try_from(parsed).ok().map(i64::from)
}

fn parse_leading_int(raw: &str) -> Option<i64> {
  let trimmed = raw.trim_start();
  let (negative, rest) = match trimmed.as_bytes().first() {
    Some(b'-') => (true, &trimmed[1..]),
    Some(b'+') => (false, &trimmed[1..]),
    _ => (false, trimmed),
  };
  let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
  if digits.is_empty() {
    return None;
  }
  let magnitude = digits.parse::<i64>().ok()?;
  Some(if negative { -magnitude } else { magnitude })
}
