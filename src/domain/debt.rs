use std::fmt;

use chrono::NaiveDate;

use crate::common::{locale::Language, money::Money};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DebtId(pub u32);

impl fmt::Display for DebtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One settlement applied against a debt. Payments are only ever appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payment {
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debt {
    pub id: DebtId,
    pub debtor_name: String,
    pub amount: Money,
    pub description: String,
    /// Day the debt was recorded.
    pub date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    /// Set by the host; not reconciled against `payment_history`.
    pub paid: bool,
    pub payment_history: Vec<Payment>,
}

/// What the entry form hands to the host on a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewDebt {
    pub debtor_name: String,
    pub amount: Money,
    pub description: String,
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Unpaid,
    Paid,
}

impl PaymentStatus {
    /// Badge text shown next to a debt.
    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (PaymentStatus::Paid, Language::Arabic) => "مدفوع",
            (PaymentStatus::Unpaid, Language::Arabic) => "غير مدفوع",
            (PaymentStatus::Paid, Language::English) => "Paid",
            (PaymentStatus::Unpaid, Language::English) => "Unpaid",
        }
    }
}

impl Debt {
    /// A freshly entered debt: unpaid with no payments yet.
    pub fn new(id: DebtId, data: NewDebt, date: NaiveDate) -> Self {
        Self {
            id,
            debtor_name: data.debtor_name,
            amount: data.amount,
            description: data.description,
            date,
            due_date: data.due_date,
            paid: false,
            payment_history: Vec::new(),
        }
    }

    pub fn status(&self) -> PaymentStatus {
        if self.paid {
            PaymentStatus::Paid
        } else {
            PaymentStatus::Unpaid
        }
    }

    /// Sum of the payment history.
    pub fn paid_amount(&self) -> Money {
        self.payment_history.iter().map(|p| p.amount).sum()
    }

    /// Face amount minus payments; negative when overpaid.
    pub fn remaining_amount(&self) -> Money {
        self.amount - self.paid_amount()
    }

    pub fn record_payment(&mut self, amount: Money) {
        self.payment_history.push(Payment { amount });
    }

    pub fn set_paid(&mut self, paid: bool) {
        self.paid = paid;
    }
}
