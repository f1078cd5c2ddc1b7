// Component F: BatchScheduler. Turns a row count and an estimated max
// line width into a batch plan, and hands out batch indices to workers
// dynamically via a shared atomic counter.

use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub rows_per_batch: usize,
    pub num_batches: usize,
    pub threads: usize,
}

/// Derives `rowsPerBatch = max(1, floor(0.9 * buffer_size / max_line_len))`,
/// falling back to one row per batch if a single line could nearly fill the
/// buffer on its own (`10 * max_line_len > buffer_size`). Clamps `threads`
/// down to `num_batches` so idle threads are never spawned (spec §4.F).
/// `threads` is the caller's already-adjusted thread count (e.g. clamped to
/// 1 up front for a non-reentrant capture sink).
pub fn build_schedule(nrow: usize, max_line_len: usize, buffer_mib: usize, threads: usize) -> Schedule {
    let buffer_size = buffer_mib * 1024 * 1024;
    let max_line_len = max_line_len.max(1);
    let rows_per_batch = if 10 * max_line_len > buffer_size {
        1
    } else {
        ((buffer_size as f64 * 0.9) / max_line_len as f64).floor().max(1.0) as usize
    };
    let num_batches = nrow.div_ceil(rows_per_batch);
    let threads = threads.min(num_batches.max(1));
    Schedule {
        rows_per_batch,
        num_batches,
        threads,
    }
}

impl Schedule {
    /// The half-open row range `[start, end)` covered by `batch`.
    pub fn batch_range(&self, batch: usize, nrow: usize) -> (usize, usize) {
        let start = (batch * self.rows_per_batch).min(nrow);
        let end = (start + self.rows_per_batch).min(nrow);
        (start, end)
    }
}

/// Hands batch indices out to workers in increasing order but with no
/// fixed assignment: whichever worker asks next gets the next index
/// (spec §4.F: "dynamic" distribution; §5: "work-stealing or next-free-
/// worker queue acceptable").
#[derive(Debug, Default)]
pub struct BatchCursor(AtomicUsize);

impl BatchCursor {
    pub fn new() -> Self {
        BatchCursor(AtomicUsize::new(0))
    }

    /// Claims the next unclaimed batch index, or `None` once `num_batches`
    /// have all been claimed.
    pub fn claim(&self, num_batches: usize) -> Option<usize> {
        let idx = self.0.fetch_add(1, Ordering::Relaxed);
        if idx < num_batches {
            Some(idx)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn fits_many_rows_per_batch_for_small_lines() {
        let schedule = build_schedule(1_000_000, 10, 8, 4);
        assert!(schedule.rows_per_batch > 1);
        assert_eq!(schedule.num_batches, 1_000_000usize.div_ceil(schedule.rows_per_batch));
    }

    #[test]
    fn falls_back_to_one_row_when_line_nearly_fills_buffer() {
        let buffer_size = 1024 * 1024;
        let schedule = build_schedule(100, buffer_size / 5, 1, 4);
        assert_eq!(schedule.rows_per_batch, 1);
        assert_eq!(schedule.num_batches, 100);
    }

    #[test]
    fn threads_clamped_to_num_batches() {
        let schedule = build_schedule(3, 1_000_000, 1, 16);
        assert!(schedule.threads <= schedule.num_batches.max(1));
    }

    #[test]
    fn batch_ranges_partition_without_overlap_or_gap() {
        let schedule = build_schedule(37, 5, 1, 4);
        let mut covered = 0;
        for b in 0..schedule.num_batches {
            let (start, end) = schedule.batch_range(b, 37);
            assert_eq!(start, covered);
            covered = end;
        }
        assert_eq!(covered, 37);
    }

    #[test]
    fn zero_rows_yields_zero_batches() {
        let schedule = build_schedule(0, 10, 1, 4);
        assert_eq!(schedule.num_batches, 0);
    }

    #[test]
    fn cursor_hands_out_each_index_once() {
        let cursor = BatchCursor::new();
        let mut seen = Vec::new();
        while let Some(b) = cursor.claim(5) {
            seen.push(b);
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        assert_eq!(cursor.claim(5), None);
    }
}
