//! Per-debtor history: every debt recorded against one name, with what has
//! been paid on each and the debtor's totals.

use chrono::NaiveDate;

use crate::{
    common::{
        currency::{CurrencyFormatter, to_arabic_digits},
        locale::{DisplayContext, Language},
        money::Money,
    },
    domain::{
        debt::{Debt, DebtId, PaymentStatus},
        totals::Totals,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub id: DebtId,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Money,
    pub paid_amount: Money,
    pub remaining_amount: Money,
    pub status: PaymentStatus,
}

impl HistoryRow {
    fn from_debt(debt: &Debt) -> Self {
        Self {
            id: debt.id,
            date: debt.date,
            description: debt.description.clone(),
            amount: debt.amount,
            paid_amount: debt.paid_amount(),
            remaining_amount: debt.remaining_amount(),
            status: debt.status(),
        }
    }
}

/// Display strings for one row, in the order the table shows them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub date: String,
    pub description: String,
    pub amount: String,
    pub paid: String,
    pub remaining: String,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedHistory {
    pub title: String,
    pub summary: String,
    pub direction: &'static str,
    pub rows: Vec<RenderedRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebtHistory {
    debtor_name: String,
    rows: Vec<HistoryRow>,
    totals: Totals,
}

impl DebtHistory {
    /// Keeps the debts whose name matches exactly, in the order given.
    /// Totals cover those debts only.
    pub fn new(debtor_name: &str, debts: &[Debt]) -> Self {
        let own: Vec<Debt> = debts
            .iter()
            .filter(|d| d.debtor_name == debtor_name)
            .cloned()
            .collect();

        Self {
            debtor_name: debtor_name.to_owned(),
            rows: own.iter().map(HistoryRow::from_debt).collect(),
            totals: Totals::of(&own),
        }
    }

    pub fn debtor_name(&self) -> &str {
        &self.debtor_name
    }

    pub fn rows(&self) -> &[HistoryRow] {
        &self.rows
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn rendered(&self, ctx: DisplayContext) -> RenderedHistory {
        let fmt = CurrencyFormatter::new(ctx.language);
        let (outstanding, collected) = totals_labels(ctx.language);

        RenderedHistory {
            title: self.debtor_name.clone(),
            summary: format!(
                "{outstanding}: {} | {collected}: {}",
                fmt.format(self.totals.outstanding),
                fmt.format(self.totals.collected)
            ),
            direction: ctx.direction().as_str(),
            rows: self
                .rows
                .iter()
                .map(|row| RenderedRow {
                    date: format_date(row.date, ctx.language),
                    description: row.description.clone(),
                    amount: fmt.format(row.amount),
                    paid: fmt.format(row.paid_amount),
                    remaining: fmt.format(row.remaining_amount),
                    status: row.status.label(ctx.language),
                })
                .collect(),
        }
    }

    /// Closes the view. Nothing is returned to the host.
    pub fn dismiss<F: FnOnce()>(self, on_close: F) {
        tracing::debug!(debtor = %self.debtor_name, "history dismissed");
        on_close();
    }
}

fn totals_labels(language: Language) -> (&'static str, &'static str) {
    match language {
        Language::Arabic => ("المستحق", "المحصل"),
        Language::English => ("Outstanding", "Collected"),
    }
}

fn format_date(date: NaiveDate, language: Language) -> String {
    match language {
        Language::English => date.format("%-m/%-d/%Y").to_string(),
        Language::Arabic => to_arabic_digits(&date.format("%-d/%-m/%Y").to_string()),
    }
}
