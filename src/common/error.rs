#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("missing ledger csv path. usage: debt_ledger <ledger.csv> [--debtor NAME] [--lang ar|en]")]
    MissingArg,
    #[error("unrecognised argument: {0}")]
    UnknownArg(String),
    #[error("failed to open input file: {0}")]
    OpenInput(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("process error: {0}")]
    Process(String),
}

/// Why the debt form refused a submission. The form keeps its fields intact.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("debtor name is required")]
    MissingDebtorName,
    #[error("amount must not be negative")]
    NegativeAmount,
}
