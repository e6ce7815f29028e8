pub mod calculator;
pub mod equal;
pub mod exact;
pub mod parse;
pub mod participant;
pub mod percentage;
pub mod reconcile;
pub mod shares;
pub mod strategy;

pub use calculator::calculate;
pub use participant::Participant;
pub use reconcile::{reconcile, Reconciliation};
pub use strategy::SplitStrategy;

use rust_decimal::RoundingStrategy;

// Using named types doesn't provide any compiler help, but it helps a lot with
// readability: `owed_amount: Amount` says what the field holds, a bare
// `Decimal` doesn't.
//
// I decided to use a decimal library instead of the built-in f64 type, to be
// safe when dealing with money: 0.1 + 0.2 is exactly 0.3 here, and cents never
// drift when many shares are summed.
pub type Amount = rust_decimal::Decimal;
pub const CENT_PRECISION: u32 = 2;

/// Round an amount to the cent, half-up (0.005 becomes 0.01, -0.005 becomes -0.01).
///
/// The result always carries exactly two decimal places, so `50` comes out
/// as `50.00`.
pub fn round_to_cents(amount: Amount) -> Amount {
    to_cents(amount, RoundingStrategy::MidpointAwayFromZero)
}

/// Cut an amount down to the cent, dropping anything below it.
pub(crate) fn truncate_to_cents(amount: Amount) -> Amount {
    to_cents(amount, RoundingStrategy::ToZero)
}

/// `0.00`, what every participant owes when there's nothing to split.
pub(crate) fn zero_cents() -> Amount {
    Amount::new(0, CENT_PRECISION)
}

// Decimal arithmetic panics on overflow. Amounts that large can only come
// from garbage input, and garbage input contributes nothing.
pub(crate) fn or_zero(amount: Option<Amount>, operation: &str) -> Amount {
    amount.unwrap_or_else(|| {
        tracing::warn!(operation, "amount overflowed, using 0");
        Amount::ZERO
    })
}

/// Sum the given amounts, `None` on overflow.
pub(crate) fn checked_sum(amounts: impl IntoIterator<Item = Amount>) -> Option<Amount> {
    amounts
        .into_iter()
        .try_fold(Amount::ZERO, |sum, amount| sum.checked_add(amount))
}

fn to_cents(amount: Amount, strategy: RoundingStrategy) -> Amount {
    // round_dp leaves amounts that are already precise enough untouched,
    // rescale pads them back to two decimal places.
    let mut cents = amount.round_dp_with_strategy(CENT_PRECISION, strategy);
    cents.rescale(CENT_PRECISION);
    cents
}

#[cfg(test)]
mod tests {
    use super::{checked_sum, or_zero, round_to_cents, truncate_to_cents, zero_cents, Amount};
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero_cents() {
        assert_eq!(Amount::ZERO, zero_cents());
        assert_eq!("0.00", zero_cents().to_string());
    }

    #[test]
    fn test_checked_sum() {
        assert_eq!(
            Some(dec!(100.00)),
            checked_sum(vec![dec!(33.34), dec!(33.33), dec!(33.33)])
        );
        assert_eq!(Some(dec!(0)), checked_sum(Vec::new()));
        assert_eq!(None, checked_sum(vec![Amount::MAX, Amount::MAX]));
    }

    #[test]
    fn test_or_zero() {
        assert_eq!(dec!(1.5), or_zero(Some(dec!(1.5)), "test"));
        assert_eq!(dec!(0), or_zero(None, "test"));
    }

    #[test]
    fn test_round_to_cents() {
        for (raw, want) in vec![
            (dec!(1), dec!(1.00)),
            (dec!(0.005), dec!(0.01)),
            (dec!(0.004999), dec!(0.00)),
            (dec!(33.3333333), dec!(33.33)),
            (dec!(66.6666666), dec!(66.67)),
            (dec!(2.675), dec!(2.68)),
            (dec!(-0.005), dec!(-0.01)),
        ] {
            assert_eq!(want, round_to_cents(raw), "rounding {}", raw);
        }
    }

    #[test]
    fn test_round_to_cents_keeps_two_decimals() {
        assert_eq!("50.00", round_to_cents(dec!(50)).to_string());
        assert_eq!("0.10", round_to_cents(dec!(0.1)).to_string());
    }

    #[test]
    fn test_truncate_to_cents() {
        for (raw, want) in vec![
            (dec!(0.005), dec!(0.00)),
            (dec!(33.3399), dec!(33.33)),
            (dec!(50), dec!(50.00)),
        ] {
            assert_eq!(want, truncate_to_cents(raw), "truncating {}", raw);
        }
    }
}
