use std::io::Write;

use crate::{
    common::{currency::CurrencyFormatter, locale::DisplayContext},
    domain::{debt::Debt, directory::unique_debtors, totals::Totals},
    ui::history::DebtHistory,
};

#[derive(serde::Serialize)]
/// One line per debtor: `debtor,debts,outstanding,collected`.
struct SummaryRow<'a> {
    debtor: &'a str,
    debts: usize,
    outstanding: String,
    collected: String,
}

#[derive(serde::Serialize)]
/// One line per debt: `id,date,description,amount,paid,remaining,status`.
struct HistoryRow<'a> {
    id: u32,
    date: &'a str,
    description: &'a str,
    amount: &'a str,
    paid: &'a str,
    remaining: &'a str,
    status: &'a str,
}

/// Writes a summary row for every debtor in the directory, alphabetically.
///
/// Totals are per debtor and amounts go through `fmt`.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use debt_ledger::common::{currency::CurrencyFormatter, locale::Language};
/// use debt_ledger::io::writer::write_summary;
///
/// let mut out = Vec::new();
/// write_summary(&mut out, &[], &CurrencyFormatter::new(Language::English)).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert!(s.is_empty());
/// ```
pub fn write_summary<W: Write>(
    writer: W,
    debts: &[Debt],
    fmt: &CurrencyFormatter,
) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for name in unique_debtors(debts) {
        let own: Vec<Debt> = debts
            .iter()
            .filter(|d| d.debtor_name == name)
            .cloned()
            .collect();
        let totals = Totals::of(&own);
        wtr.serialize(SummaryRow {
            debtor: &name,
            debts: own.len(),
            outstanding: fmt.format(totals.outstanding),
            collected: fmt.format(totals.collected),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes one debtor's history rows in the order the view holds them.
pub fn write_history<W: Write>(
    writer: W,
    history: &DebtHistory,
    ctx: DisplayContext,
) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    let rendered = history.rendered(ctx);
    for (row, shown) in history.rows().iter().zip(&rendered.rows) {
        wtr.serialize(HistoryRow {
            id: row.id.0,
            date: &shown.date,
            description: &shown.description,
            amount: &shown.amount,
            paid: &shown.paid,
            remaining: &shown.remaining,
            status: shown.status,
        })?;
    }

    wtr.flush()?;
    Ok(())
}
