use super::Amount;
use std::str::FromStr;

/// Parse what a user typed into an amount, falling back to zero.
///
/// Inputs are free text coming straight from a text field, so anything that
/// isn't a number (empty, "abc", "1,5", "1_5") simply contributes nothing
/// instead of failing the whole split.
pub fn parse_decimal_or_zero(raw: &str) -> Amount {
    let raw = raw.trim();
    if raw.is_empty() {
        return Amount::ZERO;
    }

    // rust_decimal reads `_` as a digit separator, nobody types "1_5" meaning 15.
    if raw.contains('_') {
        tracing::trace!(input = raw, "input is not a number, using 0");
        return Amount::ZERO;
    }

    match Amount::from_str(raw).or_else(|_| Amount::from_scientific(raw)) {
        Ok(amount) => amount,
        Err(err) => {
            tracing::trace!(input = raw, error = %err, "input is not a number, using 0");
            Amount::ZERO
        }
    }
}

#[test]
fn test_parse_decimal_or_zero() {
    use rust_decimal_macros::dec;

    for (raw, want) in vec![
        ("75.0", dec!(75)),
        ("50", dec!(50)),
        ("  20.5 ", dec!(20.5)),
        ("1.5", dec!(1.5)),
        ("0.1", dec!(0.1)),
        ("-3", dec!(-3)),
        ("1e2", dec!(100)),
        ("", dec!(0)),
        ("   ", dec!(0)),
        ("abc", dec!(0)),
        ("12abc", dec!(0)),
        ("NaN", dec!(0)),
        ("1_5", dec!(0)),
        ("5_0", dec!(0)),
        ("1_000", dec!(0)),
        ("1_000.5_0", dec!(0)),
        ("1__2", dec!(0)),
        ("2_0e1", dec!(0)),
    ] {
        assert_eq!(want, parse_decimal_or_zero(raw), "parsing {:?}", raw);
    }
}
