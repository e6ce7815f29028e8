use super::Amount;

/// Someone taking part in an expense.
///
/// Participants are built by the caller before every calculation and
/// replaced by the ones the calculator returns. The calculator only ever
/// reads `is_included` and `raw_input`, and only ever writes `owed_amount`.
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub id: String,

    /// Only shown to users, never used in the calculation.
    pub display_name: String,

    /// Excluded participants owe nothing and don't count in any denominator.
    pub is_included: bool,

    /// What the user typed for the current strategy: an exact amount, a
    /// percentage or a number of shares. May be empty or garbage.
    pub raw_input: String,

    /// Output of the calculation.
    pub owed_amount: Amount,
}

impl Participant {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        is_included: bool,
        raw_input: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            is_included,
            raw_input: raw_input.into(),
            owed_amount: Amount::ZERO,
        }
    }

    // Returns a copy of the participant owing the given amount.
    pub(super) fn owing(&self, owed_amount: Amount) -> Self {
        Self {
            owed_amount,
            ..self.clone()
        }
    }
}

#[test]
fn test_new_participant_owes_nothing() {
    let participant = Participant::new("u1", "Alice", true, "12.5");

    assert_eq!("u1", participant.id);
    assert_eq!("Alice", participant.display_name);
    assert!(participant.is_included);
    assert_eq!("12.5", participant.raw_input);
    assert_eq!(Amount::ZERO, participant.owed_amount);
}

#[test]
fn test_owing_keeps_other_fields() {
    use rust_decimal_macros::dec;

    let participant = Participant::new("u2", "Bob", false, "abc");
    let got = participant.owing(dec!(4.20));

    assert_eq!(dec!(4.20), got.owed_amount);
    assert_eq!(participant.id, got.id);
    assert_eq!(participant.display_name, got.display_name);
    assert_eq!(participant.is_included, got.is_included);
    assert_eq!(participant.raw_input, got.raw_input);
}
