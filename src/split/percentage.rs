use super::parse::parse_decimal_or_zero;
use super::participant::Participant;
use super::{checked_sum, or_zero, round_to_cents, zero_cents, Amount};
use rust_decimal_macros::dec;

/// Everyone owes their percentage of the total.
///
/// Percentages are not normalised against 100: if they add up to 110%, the
/// participants owe 110% of the total. When they add up to nothing at all,
/// nobody owes anything.
pub(super) fn split(total_amount: Amount, active: &[&Participant]) -> Vec<Amount> {
    let percentages: Vec<Amount> = active
        .iter()
        .map(|participant| parse_decimal_or_zero(&participant.raw_input))
        .collect();

    let total_percent = or_zero(checked_sum(percentages.iter().copied()), "total percentage");
    if total_percent.is_zero() {
        tracing::debug!(%total_amount, "percentages add up to 0, nobody owes anything");
        return vec![zero_cents(); active.len()];
    }

    percentages
        .into_iter()
        .map(|percent| {
            let owed = total_amount
                .checked_mul(percent)
                .and_then(|amount| amount.checked_div(dec!(100)));
            round_to_cents(or_zero(owed, "percentage share"))
        })
        .collect()
}
