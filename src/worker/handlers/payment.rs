use crate::{
    common::{error::AppError, money::Money},
    domain::{book::DebtBook, debt::DebtId},
};

pub fn handle(book: &mut DebtBook, id: DebtId, amount: Money) -> Result<(), AppError> {
    if amount < Money::zero() {
        return Err(AppError::Process(format!(
            "payment on debt {id} has a negative amount"
        )));
    }

    // payments may land on settled debts and may exceed the face amount
    if !book.apply_payment(id, amount) {
        tracing::warn!(%id, "ignoring payment for unknown debt");
        return Ok(());
    }

    tracing::debug!(%id, %amount, "recorded payment");
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::debt::NewDebt;

    fn book_with_debt(amount: i64) -> (DebtBook, DebtId) {
        let mut book = DebtBook::new();
        let id = book.record(
            NewDebt {
                debtor_name: "Huda".into(),
                amount: Money::from_units(amount),
                ..NewDebt::default()
            },
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        );
        (book, id)
    }

    #[test]
    fn appends_to_history_in_order() {
        let (mut book, id) = book_with_debt(100);
        handle(&mut book, id, Money::from_units(30)).unwrap();
        handle(&mut book, id, Money::from_units(20)).unwrap();

        let debt = book.get(id).unwrap();
        let amounts: Vec<_> = debt.payment_history.iter().map(|p| p.amount).collect();
        assert_eq!(amounts, vec![Money::from_units(30), Money::from_units(20)]);
        assert!(!debt.paid, "payments never flip the paid flag");
    }

    #[test]
    fn overpayment_is_recorded() {
        let (mut book, id) = book_with_debt(10);
        handle(&mut book, id, Money::from_units(15)).unwrap();
        assert_eq!(book.get(id).unwrap().paid_amount(), Money::from_units(15));
    }

    #[test]
    fn unknown_debt_is_ignored() {
        let (mut book, id) = book_with_debt(10);
        handle(&mut book, DebtId(id.0 + 100), Money::from_units(5)).unwrap();
        assert!(book.get(id).unwrap().payment_history.is_empty());
    }

    #[test]
    fn negative_payment_is_an_error() {
        let (mut book, id) = book_with_debt(10);
        assert!(handle(&mut book, id, Money::from_units(-1)).is_err());
    }
}
