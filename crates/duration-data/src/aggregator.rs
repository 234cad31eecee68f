//! Monthly aggregation of per-row durations.
//!
//! Groups event rows into calendar-month buckets keyed by `"%Y-%m"` and
//! averages each duration column per bucket. Months appear in the output in
//! the order they are first seen in the input, and unset durations are
//! excluded from their column's mean rather than dragging it down.

use std::collections::HashMap;

use tracing::debug;

use duration_core::models::{EventRow, MonthlyRow, MonthlyTable};

// ── MonthlyAccumulator ────────────────────────────────────────────────────────

/// Running sum and defined-value count for every duration column of one
/// month.
#[derive(Debug, Clone)]
struct MonthlyAccumulator {
    month: String,
    sums: Vec<f64>,
    counts: Vec<u32>,
}

impl MonthlyAccumulator {
    fn new(month: impl Into<String>, column_count: usize) -> Self {
        Self {
            month: month.into(),
            sums: vec![0.0; column_count],
            counts: vec![0; column_count],
        }
    }

    /// Fold one row's durations into the running totals, skipping unset
    /// values.
    fn add_row(&mut self, durations: &[Option<f64>]) {
        for (i, duration) in durations.iter().enumerate() {
            if let Some(minutes) = duration {
                self.sums[i] += minutes;
                self.counts[i] += 1;
            }
        }
    }

    /// Finalise into a [`MonthlyRow`]; columns with no defined value yield an
    /// unset mean.
    fn finish(self) -> MonthlyRow {
        let means = self
            .sums
            .iter()
            .zip(self.counts.iter())
            .map(|(sum, count)| {
                if *count == 0 {
                    None
                } else {
                    Some(sum / f64::from(*count))
                }
            })
            .collect();
        MonthlyRow {
            month: self.month,
            means,
        }
    }
}

// ── MonthlyAggregator ─────────────────────────────────────────────────────────

/// Stateless helper that buckets event rows by calendar month.
pub struct MonthlyAggregator;

impl MonthlyAggregator {
    /// Aggregate `rows` into a [`MonthlyTable`] with the given duration
    /// column names.
    ///
    /// Months are emitted in first-seen order, which for chronologically
    /// entered data is chronological order; an insertion-ordered bucket list
    /// keeps that guarantee even when rows interleave across months.
    pub fn aggregate(rows: &[EventRow], duration_columns: Vec<String>) -> MonthlyTable {
        let column_count = duration_columns.len();

        // Bucket order is the Vec; the map only resolves key → position.
        let mut buckets: Vec<MonthlyAccumulator> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for row in rows {
            let key = row.month_key();
            let pos = *index.entry(key.clone()).or_insert_with(|| {
                buckets.push(MonthlyAccumulator::new(key, column_count));
                buckets.len() - 1
            });
            buckets[pos].add_row(&row.durations);
        }

        debug!(
            "Aggregated {} rows into {} monthly buckets",
            rows.len(),
            buckets.len()
        );

        MonthlyTable {
            duration_columns,
            rows: buckets.into_iter().map(MonthlyAccumulator::finish).collect(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
