use chrono::NaiveDate;

use crate::{common::money::Money, domain::debt::DebtId};

/// A ledger line read from input, applied to the debt book by the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerEvent {
    Debt {
        id: DebtId,
        debtor: String,
        amount: Money,
        date: NaiveDate,
        due_date: Option<NaiveDate>,
        description: String,
    },
    Payment { id: DebtId, amount: Money },
    Settle { id: DebtId },
}
