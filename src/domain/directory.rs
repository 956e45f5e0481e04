use std::collections::BTreeSet;

use crate::domain::debt::Debt;

/// Distinct debtor names in ascending order. Names are compared exactly, so
/// "Ali" and "ali" are two debtors.
///
/// # Examples
/// ```
/// use debt_ledger::domain::directory::unique_debtors;
///
/// assert!(unique_debtors(&[]).is_empty());
/// ```
pub fn unique_debtors(debts: &[Debt]) -> Vec<String> {
    debts
        .iter()
        .map(|d| d.debtor_name.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Directory entries containing `query`, ignoring case. An empty query keeps
/// every name.
pub fn filter_debtors<'a>(names: &'a [String], query: &str) -> Vec<&'a str> {
    if query.is_empty() {
        return names.iter().map(String::as_str).collect();
    }
    let needle = query.to_lowercase();
    names
        .iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .map(String::as_str)
        .collect()
}
