use std::process::ExitCode;

fn main() -> ExitCode {
    // stdout carries the csv report
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    match debt_ledger::app::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
