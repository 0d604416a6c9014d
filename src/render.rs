//! Row partitioning and the index-addressed row buffer shared by render workers.

use log::info;
use std::io::{self, Write};
use std::ops::Range;
use std::sync::{Mutex, PoisonError};

/// Splits `height` rows into contiguous, disjoint ranges, one per worker.
///
/// Every worker gets `height / workers` rows and the last one also takes the
/// remainder. The worker count is clamped to `[1, height]` so no range is
/// empty unless the image itself is.
pub fn partition_rows(height: u32, workers: usize) -> Vec<Range<u32>> {
    let workers = workers.clamp(1, (height as usize).max(1)) as u32;
    let rows_per_worker = height / workers;

    (0..workers)
        .map(|t| {
            let start = t * rows_per_worker;
            let end = if t == workers - 1 {
                height
            } else {
                start + rows_per_worker
            };
            start..end
        })
        .collect()
}

/// Formatted scanlines of one render, one slot per image row.
///
/// Slots are pre-allocated and addressed by row index, so workers finishing
/// out of order still produce rows in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowBuffer {
    width: u32,
    height: u32,
    rows: Vec<String>,
}

impl RowBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            rows: vec![String::new(); height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn row(&self, j: u32) -> Option<&str> {
        self.rows.get(j as usize).map(String::as_str)
    }

    /// Hands out one exclusive slice of slots per partition, tagged with the
    /// index of its first row.
    ///
    /// `partitions` must be contiguous and start at row 0, as produced by
    /// [`partition_rows`].
    pub(crate) fn split_partitions(&mut self, partitions: &[Range<u32>]) -> Vec<(u32, &mut [String])> {
        let mut rest: &mut [String] = &mut self.rows;
        let mut slices = Vec::with_capacity(partitions.len());
        let mut next_row = 0;

        for range in partitions {
            debug_assert_eq!(range.start, next_row, "partitions must be contiguous");
            let (head, tail) = std::mem::take(&mut rest).split_at_mut(range.len());
            slices.push((range.start, head));
            rest = tail;
            next_row = range.end;
        }
        debug_assert!(rest.is_empty(), "partitions must cover every row");

        slices
    }

    /// Writes the buffer as a plain-text `P3` image.
    pub fn write_ppm<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "P3")?;
        writeln!(out, "{} {}", self.width, self.height)?;
        writeln!(out, "255")?;
        for row in &self.rows {
            out.write_all(row.as_bytes())?;
        }
        out.flush()
    }
}

/// Scanline countdown shared by all workers.
pub(crate) struct Progress {
    remaining: Mutex<u32>,
}

impl Progress {
    pub(crate) fn new(total_rows: u32) -> Self {
        Self {
            remaining: Mutex::new(total_rows),
        }
    }

    pub(crate) fn row_done(&self) {
        let mut remaining = self.remaining.lock().unwrap_or_else(PoisonError::into_inner);
        *remaining = remaining.saturating_sub(1);
        if *remaining % 20 == 0 {
            info!("Scanlines remaining: {}", *remaining);
        }
    }
}
