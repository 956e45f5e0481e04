use crate::{common::money::Money, domain::debt::Debt};

/// Sum of face amounts over unpaid debts. Payments already made against those
/// debts are not subtracted, and paid debts never contribute.
pub fn outstanding_total(debts: &[Debt]) -> Money {
    debts.iter().filter(|d| !d.paid).map(|d| d.amount).sum()
}

/// Sum of every payment recorded on every debt, paid or not.
pub fn collected_total(debts: &[Debt]) -> Money {
    debts.iter().map(Debt::paid_amount).sum()
}

/// Both totals over one collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub outstanding: Money,
    pub collected: Money,
}

impl Totals {
    pub fn of(debts: &[Debt]) -> Self {
        Self {
            outstanding: outstanding_total(debts),
            collected: collected_total(debts),
        }
    }
}
