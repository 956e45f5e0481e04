use crate::{
    common::{error::AppError, event::LedgerEvent},
    domain::{book::DebtBook, debt::NewDebt},
    worker::handlers::{debt, payment, settle},
};

#[derive(Debug, Default)]
pub struct Processor {}
impl Processor {
    pub fn new() -> Self {
        Self {}
    }

    pub fn process(&mut self, book: &mut DebtBook, event: LedgerEvent) -> Result<(), AppError> {
        match event {
            LedgerEvent::Debt {
                id,
                debtor,
                amount,
                date,
                due_date,
                description,
            } => {
                let data = NewDebt {
                    debtor_name: debtor,
                    amount,
                    description,
                    due_date,
                };
                debt::handle(book, id, data, date)?;
            }
            LedgerEvent::Payment { id, amount } => {
                payment::handle(book, id, amount)?;
            }
            LedgerEvent::Settle { id } => {
                settle::handle(book, id)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{common::money::Money, domain::debt::DebtId};

    #[test]
    fn dispatches_each_event_kind() {
        let mut book = DebtBook::new();
        let mut processor = Processor::new();
        let events = vec![
            LedgerEvent::Debt {
                id: DebtId(1),
                debtor: "Ali".into(),
                amount: Money::from_units(100),
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                due_date: NaiveDate::from_ymd_opt(2024, 2, 1),
                description: "loan".into(),
            },
            LedgerEvent::Payment {
                id: DebtId(1),
                amount: Money::from_units(100),
            },
            LedgerEvent::Settle { id: DebtId(1) },
        ];

        for event in events {
            processor.process(&mut book, event).unwrap();
        }

        let debt = book.get(DebtId(1)).unwrap();
        assert!(debt.paid);
        assert_eq!(debt.paid_amount(), Money::from_units(100));
        assert_eq!(debt.due_date, NaiveDate::from_ymd_opt(2024, 2, 1));
        assert_eq!(debt.description, "loan");
    }
}
