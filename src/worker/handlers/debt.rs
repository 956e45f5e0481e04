use chrono::NaiveDate;

use crate::{
    common::{error::AppError, money::Money},
    domain::{
        book::DebtBook,
        debt::{Debt, DebtId, NewDebt},
    },
};

pub fn handle(
    book: &mut DebtBook,
    id: DebtId,
    data: NewDebt,
    date: NaiveDate,
) -> Result<(), AppError> {
    if data.debtor_name.is_empty() {
        return Err(AppError::Process(format!("debt {id} has no debtor name")));
    }
    if data.amount < Money::zero() {
        return Err(AppError::Process(format!("debt {id} has a negative amount")));
    }

    // duplicate ids keep the first record
    if !book.insert(Debt::new(id, data, date)) {
        tracing::warn!(%id, "ignoring duplicate debt id");
        return Ok(());
    }

    tracing::debug!(%id, "recorded debt");
    Ok(())
}
