use super::parse::parse_decimal_or_zero;
use super::participant::Participant;
use super::{round_to_cents, Amount};

/// Everyone owes exactly the amount they typed, rounded to the cent.
///
/// Nothing is redistributed and the amounts aren't checked against the
/// total: telling the user that the split doesn't add up is the caller's job
/// (see `split::reconcile`).
pub(super) fn split(active: &[&Participant]) -> Vec<Amount> {
    active
        .iter()
        .map(|participant| round_to_cents(parse_decimal_or_zero(&participant.raw_input)))
        .collect()
}
