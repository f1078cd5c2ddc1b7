mod cli;
mod demo;

use clap::Parser;
use cli::Cli;
use colsv_core::{RowSep, SinkTarget, WriteOptions};
use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("colsv: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> colsv_base::Result<()> {
    let table = match &cli.input {
        Some(path) => demo::table_from_whitespace_file(path)?,
        None => demo::demo_table(),
    };

    let options = WriteOptions {
        field_sep: cli.field_sep,
        row_sep: RowSep::new(&cli.row_sep)?,
        na_token: cli.na.clone().into_bytes(),
        decimal_sep: cli.decimal_sep,
        quote_mode: cli.quote_mode.into(),
        quote_method: cli.quote_method.into(),
        bool_as_int: cli.bool_as_int,
        emit_row_index: cli.row_index,
        emit_header: cli.header,
        buffer_mib: cli.buffer_mib,
        threads: cli.threads.max(1),
        turbo: !cli.no_turbo,
    };

    let (progress_tx, progress_rx) = crossbeam_channel::unbounded();
    let progress_thread = std::thread::spawn(move || {
        while let Ok(event) = progress_rx.recv() {
            tracing::info!(
                batches_done = event.batches_done,
                num_batches = event.num_batches,
                rows_done = event.rows_done,
                nrow = event.nrow,
                elapsed_ms = event.elapsed.as_millis() as u64,
                threads = event.threads,
                failed = event.failed,
                "write progress"
            );
        }
    });

    let to_stdout = match &cli.output {
        None => true,
        Some(p) => is_stdout_sentinel(p),
    };
    let result = if to_stdout {
        let mut buf = Vec::new();
        let r = colsv_core::write_table(&table, &options, SinkTarget::Capture(&mut buf), Some(progress_tx));
        if r.is_ok() {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            let _ = lock.write_all(&buf);
        }
        r
    } else {
        let path = cli.output.clone().expect("to_stdout handles the None/'-' cases");
        colsv_core::write_table(
            &table,
            &options,
            SinkTarget::File { path, append: cli.append },
            Some(progress_tx),
        )
    };

    let _ = progress_thread.join();
    result
}

fn is_stdout_sentinel(path: &std::path::Path) -> bool {
    path == std::path::Path::new("-")
}
