use std::io::{BufWriter, Read, Write, stdout};

use crate::{
    common::{currency::CurrencyFormatter, error::AppError, locale::DisplayContext},
    domain::{book::DebtBook, sorting::sort_debts, totals::Totals},
    io::{reader, writer},
    ui::history::DebtHistory,
    worker::processor::Processor,
};

/// Command-line settings: `<ledger.csv> [--debtor NAME] [--lang ar|en]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input_path: String,
    pub debtor: Option<String>,
    pub display: DisplayContext,
}

impl Settings {
    /// Parses the full argument list, program name first.
    pub fn from_args<I, S>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
        let mut args = args.into_iter().skip(1);
        let mut input_path = None;
        let mut debtor = None;
        let mut display = DisplayContext::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--debtor" => {
                    debtor = Some(args.next().ok_or_else(|| AppError::UnknownArg(arg.clone()))?);
                }
                "--lang" => {
                    let value = args.next().ok_or_else(|| AppError::UnknownArg(arg.clone()))?;
                    display.language = value.parse().map_err(AppError::Parse)?;
                }
                flag if flag.starts_with("--") => return Err(AppError::UnknownArg(flag.to_owned())),
                path if input_path.is_none() => input_path = Some(path.to_owned()),
                extra => return Err(AppError::UnknownArg(extra.to_owned())),
            }
        }

        Ok(Self {
            input_path: input_path.ok_or(AppError::MissingArg)?,
            debtor,
            display,
        })
    }
}

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let settings = Settings::from_args(args)?;

    let file = std::fs::File::open(&settings.input_path)?;
    let book = load_book(file)?;
    tracing::info!(debts = book.len(), path = %settings.input_path, "ledger loaded");

    let stdout = stdout();
    let writer = BufWriter::new(stdout.lock());
    report(&book, &settings, writer)
}

/// Builds the debt book by replaying every ledger row in order.
pub fn load_book<R: Read>(input: R) -> Result<DebtBook, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);

    let mut book = DebtBook::new();
    let mut processor = Processor::new();

    for event in reader::read_events(&mut reader) {
        let event = event.map_err(AppError::Parse)?;
        processor.process(&mut book, event)?;
    }
    Ok(book)
}

/// Writes either the directory summary or one debtor's sorted history.
pub fn report<W: Write>(book: &DebtBook, settings: &Settings, out: W) -> Result<(), AppError> {
    let fmt = CurrencyFormatter::new(settings.display.language);
    let overall = Totals::of(book.debts());
    tracing::info!(
        outstanding = %fmt.format(overall.outstanding),
        collected = %fmt.format(overall.collected),
        "ledger totals"
    );

    match &settings.debtor {
        Some(name) => {
            let history = DebtHistory::new(name, &sort_debts(book.debts()));
            if history.rows().is_empty() {
                tracing::warn!(debtor = %name, "no debts recorded for debtor");
            }
            writer::write_history(out, &history, settings.display)?;
        }
        None => writer::write_summary(out, book.debts(), &fmt)?,
    }
    Ok(())
}
