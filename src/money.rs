use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("invalid amount '{0}', expected e.g. 600, 600K or 12L")]
    Invalid(String),
    #[error("amount must not be negative: {0}")]
    Negative(String),
    #[error("amount is too large: {0}")]
    TooLarge(String),
}

/// Parse an amount into thousands.
///
/// A bare number or a `K` suffix is thousands, `L`, `lac` or `lakh` is lakh.
pub fn parse_amount(s: &str) -> Result<Decimal, AmountError> {
    let trimmed = s.trim();
    let lower = trimmed.to_lowercase();
    let (number, in_lakh) = ["lakh", "lac", "l"]
        .iter()
        .find_map(|suffix| lower.strip_suffix(suffix).map(|n| (n, true)))
        .or_else(|| lower.strip_suffix('k').map(|n| (n, false)))
        .unwrap_or((lower.as_str(), false));

    let amount = Decimal::from_str(number.trim().replace(',', "").as_str())
        .map_err(|_| AmountError::Invalid(trimmed.to_string()))?;
    if amount < Decimal::ZERO {
        return Err(AmountError::Negative(trimmed.to_string()));
    }

    if !in_lakh {
        return Ok(amount);
    }
    amount
        .checked_mul(dec!(100))
        .ok_or_else(|| AmountError::TooLarge(trimmed.to_string()))
}

/// Display an amount in thousands as lakh or K, to at most 2 decimal places
pub fn format_money(amount: Decimal) -> String {
    if amount >= dec!(100) {
        format!("{} lakh", round(amount / dec!(100)))
    } else {
        format!("{}K", round(amount))
    }
}

fn round(amount: Decimal) -> Decimal {
    amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_lakh() {
        assert_eq!(format_money(dec!(1000)), "10 lakh");
        assert_eq!(format_money(dec!(607)), "6.07 lakh");
        assert_eq!(format_money(dec!(100)), "1 lakh");
        assert_eq!(format_money(dec!(1234.5)), "12.35 lakh");
        assert_eq!(format_money(dec!(10000)), "100 lakh");
    }

    #[test]
    fn formats_thousands() {
        assert_eq!(format_money(dec!(50)), "50K");
        assert_eq!(format_money(dec!(99.999)), "100K");
        assert_eq!(format_money(dec!(3.8415)), "3.84K");
        assert_eq!(format_money(Decimal::ZERO), "0K");
        assert_eq!(format_money(dec!(-1)), "-1K");
    }

    #[test]
    fn parses_thousands() {
        assert_eq!(parse_amount("600"), Ok(dec!(600)));
        assert_eq!(parse_amount("600K"), Ok(dec!(600)));
        assert_eq!(parse_amount(" 62.5k "), Ok(dec!(62.5)));
        assert_eq!(parse_amount("1,200"), Ok(dec!(1200)));
    }

    #[test]
    fn parses_lakh() {
        assert_eq!(parse_amount("12L"), Ok(dec!(1200)));
        assert_eq!(parse_amount("12 lakh"), Ok(dec!(1200)));
        assert_eq!(parse_amount("1.5lac"), Ok(dec!(150)));
        assert_eq!(parse_amount("0.5 L"), Ok(dec!(50)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            parse_amount("twelve"),
            Err(AmountError::Invalid("twelve".to_string()))
        );
        assert!(parse_amount("").is_err());
        assert!(parse_amount("L").is_err());
    }

    #[test]
    fn rejects_lakh_beyond_decimal_range() {
        assert_eq!(
            parse_amount("79228162514264337593543950335L"),
            Err(AmountError::TooLarge(
                "79228162514264337593543950335L".to_string()
            ))
        );
        // the same digits are fine as thousands
        assert!(parse_amount("79228162514264337593543950335").is_ok());
        assert!(parse_amount("792281625142643375935439503350").is_err());
    }

    #[test]
    fn rejects_negative() {
        assert_eq!(
            parse_amount("-5L"),
            Err(AmountError::Negative("-5L".to_string()))
        );
    }
}
