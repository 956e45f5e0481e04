use crate::{
    common::error::AppError,
    domain::{book::DebtBook, debt::DebtId},
};

pub fn handle(book: &mut DebtBook, id: DebtId) -> Result<(), AppError> {
    if !book.mark_paid(id) {
        tracing::warn!(%id, "ignoring settlement for unknown debt");
    }
    Ok(())
}
