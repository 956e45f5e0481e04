use crate::{
    common::{event::LedgerEvent, money::Money},
    domain::debt::DebtId,
};
use chrono::NaiveDate;
use std::{io::Read, str::FromStr};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the input headers. Only `debt`
/// rows use every column.
struct CsvRow {
    #[serde(rename = "type")]
    kind: String,
    id: u32,
    debtor: Option<String>,
    // blank for paid rows
    amount: Option<String>,
    date: Option<String>,
    due_date: Option<String>,
    description: Option<String>,
}

/// Reads and validates ledger rows from a CSV reader.
///
/// Supported headers: `type,id,debtor,amount,date,due_date,description`.
/// `type` is one of `debt`, `payment` or `paid` (also `settle`), compared
/// case-insensitively. Dates are `YYYY-MM-DD`; errors include the row id.
///
/// # Examples
///
/// ```
/// use debt_ledger::io::reader::read_events;
/// use debt_ledger::common::event::LedgerEvent;
/// use csv::ReaderBuilder;
///
/// let data = "type,id,debtor,amount,date,due_date,description\n\
/// debt,1,Ali,100,2024-01-05,,rent\n\
/// payment,1,,40,,,\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let events: Vec<_> = read_events(&mut rdr).collect();
///
/// assert!(matches!(events[0], Ok(LedgerEvent::Debt { .. })));
/// assert!(matches!(events[1], Ok(LedgerEvent::Payment { .. })));
/// ```
pub fn read_events<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<LedgerEvent, String>> + '_ {
    rdr.deserialize::<CsvRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;
        let kind = row.kind.trim().to_ascii_lowercase();
        let id = DebtId(row.id);

        match kind.as_str() {
            "debt" => {
                let debtor = row
                    .debtor
                    .filter(|d| !d.is_empty())
                    .ok_or_else(|| format!("debt missing debtor for id {id}"))?;
                let amount = parse_amount(row.amount, "debt", id)?;
                let date = row
                    .date
                    .ok_or_else(|| format!("debt missing date for id {id}"))
                    .and_then(|d| parse_date(&d, id))?;
                let due_date = match row.due_date.filter(|d| !d.trim().is_empty()) {
                    Some(d) => Some(parse_date(&d, id)?),
                    None => None,
                };

                Ok(LedgerEvent::Debt {
                    id,
                    debtor,
                    amount,
                    date,
                    due_date,
                    description: row.description.unwrap_or_default(),
                })
            }
            "payment" => {
                let amount = parse_amount(row.amount, "payment", id)?;
                Ok(LedgerEvent::Payment { id, amount })
            }
            "paid" | "settle" => Ok(LedgerEvent::Settle { id }),
            other => Err(format!("unknown row type: {other} for id {id}")),
        }
    })
}

fn parse_amount(raw: Option<String>, kind: &str, id: DebtId) -> Result<Money, String> {
    let raw = raw.ok_or_else(|| format!("{kind} missing amount for id {id}"))?;
    Money::from_str(&raw).map_err(|e| format!("{kind} amount for id {id}: {e}"))
}

fn parse_date(raw: &str, id: DebtId) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|e| format!("bad date {raw:?} for id {id}: {e}"))
}
