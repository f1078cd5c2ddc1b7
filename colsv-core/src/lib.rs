//! A parallel, buffered, columnar-to-delimited text serializer.
//!
//! [`write_table`] is the single entry point: given a [`Table`], a set of
//! [`WriteOptions`], and a [`SinkTarget`], it partitions the row range into
//! batches (E, F), formats each batch on its own worker thread (D/I, using
//! A/B/C), and serializes the results to the sink in strict ascending
//! batch order (G), regardless of which worker finishes first.

pub mod dblfmt;
pub mod estimate;
pub mod fastpath;
pub mod intfmt;
pub mod latch;
mod lookups;
pub mod options;
#[cfg(test)]
mod roundtrip;
pub mod row;
pub mod schedule;
pub mod sink;
pub mod strfield;
pub mod table;

pub use latch::FailureLatch;
pub use options::{QuoteMethod, QuoteMode, RowSep, WriteOptions};
pub use sink::{ProgressEvent, SinkTarget};
pub use table::{Column, Table, NA_INT32, NA_INT64};

use colsv_base::{err, Result};
use fastpath::{turbo_scratch_width, TurboFloat64, TurboInt};
use latch::REASON_ALLOC;
use row::RowEncoder;
use schedule::BatchCursor;
use sink::{OrderedSink, SinkWriter};
use std::io::Write;
use table::Column as Col;
use tracing::debug;

enum TurboKind {
    Float64,
    Int,
}

fn turbo_kind(table: &Table, options: &WriteOptions) -> Option<TurboKind> {
    if !options.turbo || options.emit_row_index {
        return None;
    }
    if table.all_float64() {
        Some(TurboKind::Float64)
    } else if table.all_plain_int() {
        Some(TurboKind::Int)
    } else {
        None
    }
}

enum Encoder<'a> {
    Turbo(TurboEncoder<'a>),
    General(RowEncoder),
}

enum TurboEncoder<'a> {
    Float64(TurboFloat64<'a>),
    Int(TurboInt<'a>),
}

impl<'a> Encoder<'a> {
    fn new(kind: &Option<TurboKind>, columns: &'a [Col], options: &WriteOptions) -> Self {
        match kind {
            Some(TurboKind::Float64) => Encoder::Turbo(TurboEncoder::Float64(
                TurboFloat64::try_from(columns).expect("turbo_kind already checked column types"),
            )),
            Some(TurboKind::Int) => Encoder::Turbo(TurboEncoder::Int(
                TurboInt::try_from(columns).expect("turbo_kind already checked column types"),
            )),
            None => Encoder::General(RowEncoder::new(options)),
        }
    }

    fn encode_row(&mut self, columns: &[Col], row: usize, options: &WriteOptions, scratch: &mut [u8], out: &mut Vec<u8>) {
        match self {
            Encoder::Turbo(TurboEncoder::Float64(t)) => t.encode_row(row, options, scratch, out),
            Encoder::Turbo(TurboEncoder::Int(t)) => t.encode_row(row, options, scratch, out),
            Encoder::General(r) => r.encode_row(columns, row, options, out),
        }
    }
}

/// Writes `table` to `sink` under `options`. `progress`, if given, receives
/// at most one [`ProgressEvent`] per second from whichever worker currently
/// holds the ordered-write ticket (component P); the library never blocks
/// on a full channel (`try_send`, dropped on backpressure — progress is a
/// hint, never a correctness dependency).
pub fn write_table(
    table: &Table,
    options: &WriteOptions,
    sink: SinkTarget,
    progress: Option<crossbeam_channel::Sender<ProgressEvent>>,
) -> Result<()> {
    let span = tracing::info_span!("write_table", nrow = table.nrow(), ncol = table.ncol(), threads = options.threads);
    let _enter = span.enter();

    options.validate()?;
    for (name, col) in table.names().iter().zip(table.columns()) {
        if col.len() != table.nrow() {
            return Err(err(format!(
                "column '{name}' has length {} but table nrow is {}",
                col.len(),
                table.nrow()
            )));
        }
    }

    let effective_threads = if sink.forces_single_threaded() { 1 } else { options.threads };
    let max_line_len = estimate::estimate_max_line_len(table, options);
    let schedule = schedule::build_schedule(table.nrow(), max_line_len, options.buffer_mib, effective_threads);

    let path_display = match &sink {
        SinkTarget::File { path, .. } => Some(path.display().to_string()),
        SinkTarget::Capture(_) => None,
    };

    let mut writer = SinkWriter::open(sink)?;
    if options.emit_header {
        let mut header_buf = Vec::new();
        row::write_header(table.names(), options, &mut header_buf);
        writer
            .write_all(&header_buf)
            .map_err(|e| io_error_with_path(e, &path_display))?;
    }

    let latch = FailureLatch::new();
    let cursor = BatchCursor::new();
    let ordered_sink = OrderedSink::new(writer, schedule.num_batches, table.nrow(), schedule.threads, progress);
    let kind = turbo_kind(table, options);
    let scratch_width = turbo_scratch_width(options).max(options.na_token.len() + 1);

    std::thread::scope(|s| {
        for _ in 0..schedule.threads.max(1) {
            s.spawn(|| {
                let mut encoder = Encoder::new(&kind, table.columns(), options);
                let mut scratch = vec![0u8; scratch_width];
                while let Some(batch) = cursor.claim(schedule.num_batches) {
                    let (start, end) = schedule.batch_range(batch, table.nrow());
                    let rows_in_batch = end - start;
                    let mut buf = Vec::new();
                    if !latch.is_set() {
                        buf = Vec::with_capacity(rows_in_batch.saturating_mul(max_line_len));
                        for row in start..end {
                            encoder.encode_row(table.columns(), row, options, &mut scratch, &mut buf);
                        }
                        debug!(batch, rows = rows_in_batch, bytes = buf.len(), "batch formatted");
                    }
                    ordered_sink.submit(batch, rows_in_batch, &buf, &latch);
                }
            });
        }
    });

    ordered_sink.finish();

    if latch.is_set() {
        let reason = latch.reason();
        let message = if reason == REASON_ALLOC {
            "out of memory".to_string()
        } else if reason < 0 {
            "write failed".to_string()
        } else {
            std::io::Error::from_raw_os_error(reason).to_string()
        };
        let full = match &path_display {
            Some(p) => format!("{message}: '{p}'"),
            None => message,
        };
        return Err(err(full));
    }

    Ok(())
}

fn io_error_with_path(e: std::io::Error, path_display: &Option<String>) -> colsv_base::Error {
    match path_display {
        Some(p) => err(format!("{e}: '{p}'")),
        None => err(format!("{e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn opts() -> WriteOptions {
        WriteOptions::default()
    }

    fn capture(table: &Table, options: &WriteOptions) -> Vec<u8> {
        let mut out = Vec::new();
        write_table(table, options, SinkTarget::Capture(&mut out), None).unwrap();
        out
    }

    #[test]
    fn empty_table_with_no_header_emits_nothing() {
        let table = Table::new(vec![]).unwrap();
        let out = capture(&table, &opts());
        assert_eq!(out, b"");
    }

    #[test]
    fn empty_table_with_header_emits_header_only() {
        let table = Table::new(vec![("a".into(), Column::Int32(vec![]))]).unwrap();
        let mut options = opts();
        options.emit_header = true;
        let out = capture(&table, &options);
        assert_eq!(out, b"a\n");
    }

    #[test]
    fn all_na_column_is_consistent() {
        let table = Table::new(vec![("a".into(), Column::Int32(vec![NA_INT32; 5]))]).unwrap();
        let out = capture(&table, &opts());
        assert_eq!(out, b"\n\n\n\n\n");
    }

    #[test]
    fn output_is_identical_across_thread_counts() {
        let values: Vec<f64> = (0..2000).map(|i| i as f64 * 0.125).collect();
        let table = Table::new(vec![("x".into(), Column::Float64(values))]).unwrap();
        let mut single = opts();
        single.threads = 1;
        single.buffer_mib = 1;
        let mut many = opts();
        many.threads = 8;
        many.buffer_mib = 1;
        assert_eq!(capture(&table, &single), capture(&table, &many));
    }

    #[test]
    fn output_is_identical_across_buffer_sizes() {
        let values: Vec<i64> = (0..3000).collect();
        let table = Table::new(vec![("x".into(), Column::Int64(values))]).unwrap();
        let mut small_buf = opts();
        small_buf.buffer_mib = 1;
        let mut big_buf = opts();
        big_buf.buffer_mib = 16;
        assert_eq!(capture(&table, &small_buf), capture(&table, &big_buf));
    }

    #[test]
    fn well_formed_table_writes_successfully() {
        let table = Table::new(vec![("a".into(), Column::Int32(vec![1, 2, 3]))]).unwrap();
        assert!(write_table(&table, &opts(), SinkTarget::Capture(&mut Vec::new()), None).is_ok());
    }

    #[test]
    fn invalid_options_are_rejected_before_any_write() {
        let table = Table::new(vec![("a".into(), Column::Int32(vec![1]))]).unwrap();
        let mut options = opts();
        options.decimal_sep = options.field_sep;
        let mut out = Vec::new();
        let result = write_table(&table, &options, SinkTarget::Capture(&mut out), None);
        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn turbo_and_general_paths_agree_on_mixed_columns() {
        let table = Table::new(vec![
            ("n".into(), Column::Int32(vec![1, 2])),
            ("s".into(), Column::String(vec![Some(b"x".to_vec()), Some(b"y".to_vec())])),
        ])
        .unwrap();
        let mut turbo_on = opts();
        turbo_on.turbo = true;
        let mut turbo_off = opts();
        turbo_off.turbo = false;
        assert_eq!(capture(&table, &turbo_on), capture(&table, &turbo_off));
    }

    #[test]
    fn file_sink_round_trips_via_tempdir() {
        let dir = std::env::temp_dir().join(format!("colsv-test-{:p}", &dir_marker()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.csv");
        let table = Table::new(vec![("n".into(), Column::Int32(vec![1, 2, 3]))]).unwrap();
        write_table(
            &table,
            &opts(),
            SinkTarget::File {
                path: path.clone(),
                append: false,
            },
            None,
        )
        .unwrap();
        let contents = std::fs::read(&path).unwrap();
        assert_eq!(contents, b"1\n2\n3\n");
        let _ = std::fs::remove_dir_all(&dir);
    }

    fn dir_marker() -> u8 {
        0
    }
}
