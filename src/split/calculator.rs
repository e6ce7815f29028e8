use super::participant::Participant;
use super::strategy::SplitStrategy;
use super::{equal, exact, percentage, shares, zero_cents, Amount};

/// Work out how much every participant owes.
///
/// Returns a new list, in the same order as `participants`, where only
/// `owed_amount` changed. This never fails: non-positive totals, nobody
/// included, unparseable inputs and empty denominators all end up as
/// participants owing `0.00`.
///
/// Participants that aren't included always owe `0.00`, and are ignored
/// when counting heads, percentages or shares.
///
/// ```rust
/// use rust_decimal_macros::dec;
/// use split_engine::split::{calculate, Participant, SplitStrategy};
///
/// let participants = vec![
///     Participant::new("1", "Alice", true, ""),
///     Participant::new("2", "Bob", true, ""),
///     Participant::new("3", "Carol", true, ""),
/// ];
///
/// let owed: Vec<_> = calculate(dec!(100), &participants, SplitStrategy::Equal)
///     .into_iter()
///     .map(|p| p.owed_amount)
///     .collect();
/// assert_eq!(vec![dec!(33.34), dec!(33.33), dec!(33.33)], owed);
/// ```
pub fn calculate(
    total_amount: Amount,
    participants: &[Participant],
    strategy: SplitStrategy,
) -> Vec<Participant> {
    if participants.is_empty() {
        return Vec::new();
    }

    if total_amount <= Amount::ZERO {
        tracing::debug!(%total_amount, %strategy, "nothing to split");
        return owing_nothing(participants);
    }

    let active: Vec<&Participant> = participants.iter().filter(|p| p.is_included).collect();
    if active.is_empty() {
        tracing::debug!(%total_amount, %strategy, "nobody is included in the split");
        return owing_nothing(participants);
    }

    let owed = match strategy {
        SplitStrategy::Equal => equal::split(total_amount, &active),
        SplitStrategy::ExactAmount => exact::split(&active),
        SplitStrategy::Percentage => percentage::split(total_amount, &active),
        SplitStrategy::ShareWeighted => shares::split(total_amount, &active),
    };

    // Owed amounts are in the order of the active participants, so we hand
    // them out while walking the full list.
    let mut owed = owed.into_iter();
    participants
        .iter()
        .map(|participant| {
            if participant.is_included {
                participant.owing(owed.next().unwrap_or_else(zero_cents))
            } else {
                participant.owing(zero_cents())
            }
        })
        .collect()
}

fn owing_nothing(participants: &[Participant]) -> Vec<Participant> {
    participants
        .iter()
        .map(|participant| participant.owing(zero_cents()))
        .collect()
}
