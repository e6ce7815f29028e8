use super::participant::Participant;
use super::{checked_sum, or_zero, round_to_cents, truncate_to_cents, Amount};

/// Split the total equally between the active participants.
///
/// Every share is cut down to the cent, so the shares may add up to a few
/// cents less than the total. The first active participant absorbs all of
/// that residual: not the last one, and it's not spread round-robin. Whoever
/// comes first in the list always pays the extra cents, which keeps the
/// result stable for a given list.
pub(super) fn split(total_amount: Amount, active: &[&Participant]) -> Vec<Amount> {
    if active.is_empty() {
        return Vec::new();
    }

    let count = Amount::from(active.len());
    let share = truncate_to_cents(or_zero(total_amount.checked_div(count), "equal share"));

    let mut owed = vec![share; active.len()];
    let allocated = or_zero(checked_sum(owed.iter().copied()), "equal shares sum");
    let residual = round_to_cents(total_amount) - allocated;

    owed[0] = round_to_cents(owed[0] + residual);

    owed
}
