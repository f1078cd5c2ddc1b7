// Component G: OrderedSink, the pipeline's correctness hinge. Serializes
// concurrently-produced batch buffers to the underlying writer in strictly
// ascending batch index, consults the shared failure latch at the same
// boundary, and reports progress (component P) through a side channel that
// never interleaves with payload bytes.
//
// The ordering discipline is a ticket lock: a `Mutex` holding the
// "next batch allowed to write" counter plus the writer itself, and a
// `Condvar` workers wait on until their ticket comes up (spec §9,
// "replacing the ordered-write directive"). Every batch's worker still
// passes through its turn even after the latch is set — it just skips the
// write — so a mid-stream failure can never strand a later batch's worker
// waiting on a turn nobody will ever take.

use crate::latch::FailureLatch;
use colsv_base::{err, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Condvar, Mutex};
use std::time::{Duration, Instant};

/// Where `write_table` sends its output. `Capture` mirrors spec.md's
/// "empty path selects the capture sink" but as an explicit variant
/// instead of a sentinel path.
pub enum SinkTarget<'a> {
    File { path: PathBuf, append: bool },
    Capture(&'a mut Vec<u8>),
}

impl<'a> SinkTarget<'a> {
    /// Capture sinks aren't safely shared across threads (spec §5, §9);
    /// the scheduler clamps to one thread in this mode.
    pub fn forces_single_threaded(&self) -> bool {
        matches!(self, SinkTarget::Capture(_))
    }
}

pub(crate) enum SinkWriter<'a> {
    File(BufWriter<File>),
    Capture(&'a mut Vec<u8>),
}

impl<'a> SinkWriter<'a> {
    pub(crate) fn open(target: SinkTarget<'a>) -> Result<Self> {
        match target {
            SinkTarget::Capture(buf) => Ok(SinkWriter::Capture(buf)),
            SinkTarget::File { path, append } => {
                let file = OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(!append)
                    .append(append)
                    .open(&path)
                    .map_err(|e| open_error(&path, e))?;
                Ok(SinkWriter::File(BufWriter::new(file)))
            }
        }
    }
}

/// Distinguishes "exists but unwritable" from "does not exist and cannot
/// be created" by probing after the fact (spec §6, §7 item 1).
fn open_error(path: &Path, e: io::Error) -> colsv_base::Error {
    if path.exists() {
        err(format!("{e}: '{}' (exists but unwritable)", path.display()))
    } else {
        err(format!("{e}: '{}'", path.display()))
    }
}

impl<'a> Write for SinkWriter<'a> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            SinkWriter::File(w) => w.write(buf),
            SinkWriter::Capture(v) => {
                v.extend_from_slice(buf);
                Ok(buf.len())
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            SinkWriter::File(w) => w.flush(),
            SinkWriter::Capture(_) => Ok(()),
        }
    }
}

/// A progress snapshot, emitted at most once per second by whichever
/// worker currently holds the ordered-write ticket (spec §5 "coordinator",
/// §4.G.4, component P).
#[derive(Debug, Clone, Copy)]
pub struct ProgressEvent {
    pub batches_done: usize,
    pub num_batches: usize,
    pub rows_done: usize,
    pub nrow: usize,
    pub elapsed: Duration,
    pub threads: usize,
    pub failed: bool,
}

struct SinkState<'a> {
    next: usize,
    writer: SinkWriter<'a>,
    rows_written: usize,
    last_report: Instant,
}

pub struct OrderedSink<'a> {
    state: Mutex<SinkState<'a>>,
    cv: Condvar,
    progress_tx: Option<crossbeam_channel::Sender<ProgressEvent>>,
    num_batches: usize,
    nrow: usize,
    threads: usize,
    started: Instant,
}

impl<'a> OrderedSink<'a> {
    pub fn new(
        writer: SinkWriter<'a>,
        num_batches: usize,
        nrow: usize,
        threads: usize,
        progress_tx: Option<crossbeam_channel::Sender<ProgressEvent>>,
    ) -> Self {
        let now = Instant::now();
        OrderedSink {
            state: Mutex::new(SinkState {
                next: 0,
                writer,
                rows_written: 0,
                last_report: now,
            }),
            cv: Condvar::new(),
            progress_tx,
            num_batches,
            nrow,
            threads,
            started: now,
        }
    }

    /// Blocks until `batch` is next in line, then writes `bytes` (unless
    /// the latch is already set, in which case the write is skipped but
    /// the turn still advances) and reports a write failure through
    /// `latch` if one occurs.
    pub fn submit(&self, batch: usize, rows_in_batch: usize, bytes: &[u8], latch: &FailureLatch) {
        let mut guard = self.state.lock().expect("sink mutex poisoned");
        while guard.next != batch {
            guard = self.cv.wait(guard).expect("sink mutex poisoned");
        }
        if !latch.is_set() {
            if let Err(e) = guard.writer.write_all(bytes) {
                latch.set(e.raw_os_error().unwrap_or(-2));
            } else {
                guard.rows_written += rows_in_batch;
            }
        }
        guard.next += 1;
        self.maybe_report(&mut guard, latch);
        self.cv.notify_all();
    }

    /// Flushes and drops the underlying writer. Called once after every
    /// worker has exited the parallel region. A close failure is
    /// deliberately swallowed in favor of any write failure already on the
    /// latch (spec §7 item 3).
    pub fn finish(self) {
        if let Ok(mut guard) = self.state.lock() {
            let _ = guard.writer.flush();
        }
    }

    fn maybe_report(&self, guard: &mut SinkState<'a>, latch: &FailureLatch) {
        let Some(tx) = &self.progress_tx else {
            return;
        };
        let now = Instant::now();
        let is_last = guard.next >= self.num_batches;
        if !is_last && now.duration_since(guard.last_report) < Duration::from_secs(1) {
            return;
        }
        guard.last_report = now;
        let _ = tx.try_send(ProgressEvent {
            batches_done: guard.next,
            num_batches: self.num_batches,
            rows_done: guard.rows_written,
            nrow: self.nrow,
            elapsed: self.started.elapsed(),
            threads: self.threads,
            failed: latch.is_set(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use test_log::test;

    #[test]
    fn batches_land_in_order_despite_reverse_submission() {
        let mut out = Vec::new();
        let sink = OrderedSink::new(SinkWriter::Capture(&mut out), 3, 3, 3, None);
        let latch = FailureLatch::new();
        thread::scope(|s| {
            s.spawn(|| sink.submit(2, 1, b"c", &latch));
            s.spawn(|| sink.submit(1, 1, b"b", &latch));
            s.spawn(|| sink.submit(0, 1, b"a", &latch));
        });
        sink.finish();
        assert_eq!(out, b"abc");
    }

    #[test]
    fn a_failed_write_stops_further_bytes() {
        let mut out = Vec::new();
        let sink = OrderedSink::new(SinkWriter::Capture(&mut out), 3, 3, 1, None);
        let latch = FailureLatch::new();
        sink.submit(0, 1, b"a", &latch);
        latch.set(5);
        sink.submit(1, 1, b"b", &latch);
        sink.submit(2, 1, b"c", &latch);
        sink.finish();
        assert_eq!(out, b"a");
    }

    #[test]
    fn open_error_distinguishes_missing_from_unwritable() {
        let missing = Path::new("/definitely/does/not/exist/out.csv");
        let target = SinkTarget::File {
            path: missing.to_path_buf(),
            append: false,
        };
        let result = SinkWriter::open(target);
        assert!(result.is_err());
    }
}
