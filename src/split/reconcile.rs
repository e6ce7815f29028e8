use super::participant::Participant;
use super::{checked_sum, or_zero, round_to_cents, Amount};

/// How a computed split compares to the expense total.
///
/// `calculate` happily allocates more or less than the total (exact amounts
/// typed by hand, percentages not adding up to 100). This is what the expense
/// screen uses to warn about it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reconciliation {
    /// The total, rounded to the cent. Non-positive totals expect nothing.
    pub expected: Amount,

    /// Sum of what the participants owe.
    pub allocated: Amount,

    /// `expected - allocated`: positive when some money is left unassigned,
    /// negative when participants were asked for too much.
    pub difference: Amount,
}

impl Reconciliation {
    pub fn is_balanced(&self) -> bool {
        self.difference.is_zero()
    }

    pub fn is_under_allocated(&self) -> bool {
        self.difference > Amount::ZERO
    }

    pub fn is_over_allocated(&self) -> bool {
        self.difference < Amount::ZERO
    }
}

/// Compare the owed amounts of already computed participants to the total.
pub fn reconcile(total_amount: Amount, participants: &[Participant]) -> Reconciliation {
    let expected = round_to_cents(total_amount.max(Amount::ZERO));
    let allocated = round_to_cents(or_zero(
        checked_sum(participants.iter().map(|p| p.owed_amount)),
        "allocated sum",
    ));

    Reconciliation {
        expected,
        allocated,
        difference: expected - allocated,
    }
}

#[cfg(test)]
mod tests {
    use super::reconcile;
    use crate::split::{calculate, Participant, SplitStrategy};
    use rust_decimal_macros::dec;

    fn participants(inputs: &[&str]) -> Vec<Participant> {
        inputs
            .iter()
            .enumerate()
            .map(|(i, input)| Participant::new(format!("u{}", i), "", true, *input))
            .collect()
    }

    #[test]
    fn test_balanced_equal_split() {
        let split = calculate(dec!(100), &participants(&["", "", ""]), SplitStrategy::Equal);
        let got = reconcile(dec!(100), &split);

        assert!(got.is_balanced());
        assert!(!got.is_under_allocated());
        assert!(!got.is_over_allocated());
        assert_eq!(dec!(100.00), got.allocated);
    }

    #[test]
    fn test_exact_amounts_short_of_the_total() {
        let split = calculate(
            dec!(100),
            &participants(&["abc", "50"]),
            SplitStrategy::ExactAmount,
        );
        let got = reconcile(dec!(100), &split);

        assert!(got.is_under_allocated());
        assert_eq!(dec!(100.00), got.expected);
        assert_eq!(dec!(50.00), got.allocated);
        assert_eq!(dec!(50.00), got.difference);
    }

    #[test]
    fn test_percentages_over_100() {
        let split = calculate(
            dec!(100),
            &participants(&["60", "50"]),
            SplitStrategy::Percentage,
        );
        let got = reconcile(dec!(100), &split);

        assert!(got.is_over_allocated());
        assert_eq!(dec!(-10.00), got.difference);
    }

    #[test]
    fn test_uneven_shares_miss_a_cent() {
        let split = calculate(
            dec!(100),
            &participants(&["1", "1", "1"]),
            SplitStrategy::ShareWeighted,
        );
        let got = reconcile(dec!(100), &split);

        assert_eq!(dec!(0.01), got.difference);
    }

    #[test]
    fn test_non_positive_total() {
        let split = calculate(dec!(-20), &participants(&["", ""]), SplitStrategy::Equal);
        let got = reconcile(dec!(-20), &split);

        assert!(got.is_balanced());
        assert_eq!(dec!(0), got.expected);
    }

    #[test]
    fn test_no_participants() {
        let got = reconcile(dec!(12.345), &[]);

        assert_eq!(dec!(12.35), got.expected);
        assert_eq!(dec!(0), got.allocated);
        assert_eq!(dec!(12.35), got.difference);
    }
}
