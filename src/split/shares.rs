use super::parse::parse_decimal_or_zero;
use super::participant::Participant;
use super::{checked_sum, or_zero, round_to_cents, zero_cents, Amount};

/// Everyone owes their number of shares times the value of one share.
///
/// Shares are decimals, so someone can take 1.5 shares. When nobody has any
/// share, nobody owes anything.
pub(super) fn split(total_amount: Amount, active: &[&Participant]) -> Vec<Amount> {
    let shares: Vec<Amount> = active
        .iter()
        .map(|participant| parse_decimal_or_zero(&participant.raw_input))
        .collect();

    let total_shares = or_zero(checked_sum(shares.iter().copied()), "total shares");
    if total_shares.is_zero() {
        tracing::debug!(%total_amount, "shares add up to 0, nobody owes anything");
        return vec![zero_cents(); active.len()];
    }

    let per_share_value = or_zero(total_amount.checked_div(total_shares), "share value");

    shares
        .into_iter()
        .map(|share| round_to_cents(or_zero(share.checked_mul(per_share_value), "share")))
        .collect()
}
