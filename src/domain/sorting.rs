use std::cmp::Ordering;

use crate::domain::debt::Debt;

/// Unpaid debts first, then most recent first within the same status.
pub fn compare_debts(a: &Debt, b: &Debt) -> Ordering {
    a.paid.cmp(&b.paid).then_with(|| b.date.cmp(&a.date))
}

/// Returns a sorted copy; the input is left as it was.
pub fn sort_debts(debts: &[Debt]) -> Vec<Debt> {
    let mut sorted = debts.to_vec();
    sorted.sort_by(compare_debts);
    sorted
}
