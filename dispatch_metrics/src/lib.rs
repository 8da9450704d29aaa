//! # dispatch_metrics
//!
//! Tagged metric log for dispatch runs.
//!
//! One [`Bag`] accumulates three kinds of measurement; each entry carries
//! an explicit [`Metric`] tag, so the per-kind totals are a pattern match
//! rather than a runtime type test.
//!
//! ```
//! use dispatch_metrics::DispatchLog;
//!
//! let mut log = DispatchLog::new();
//! log.record_volumetric_weight(120.0);
//! log.record_billed_weight(95.5);
//! log.record_box_count(3);
//! log.record_volumetric_weight(40.0);
//!
//! assert_eq!(log.total_volumetric_weight(), 160.0);
//! assert_eq!(log.total_billed_weight(), 95.5);
//! assert_eq!(log.total_boxes(), 3);
//! ```

use std::fmt;

use array_adt::Bag;

/// One recorded measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    /// Volumetric weight of a dispatched load, in kg.
    VolumetricWeight(f64),
    /// Billed weight of a dispatched load, in kg.
    BilledWeight(f64),
    /// Number of boxes in a dispatched load.
    BoxCount(u32),
}

/// Append-only log of dispatch measurements.
///
/// Entries of all three kinds share one bag; the totals walk the bag once
/// and sum the matching variant.
#[derive(Debug, Clone, Default)]
pub struct DispatchLog {
    entries: Bag<Metric>,
}

impl DispatchLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        DispatchLog {
            entries: Bag::new(),
        }
    }

    /// Records a volumetric weight, in kg.
    pub fn record_volumetric_weight(&mut self, kg: f64) {
        self.entries.add(Metric::VolumetricWeight(kg));
    }

    /// Records a billed weight, in kg.
    pub fn record_billed_weight(&mut self, kg: f64) {
        self.entries.add(Metric::BilledWeight(kg));
    }

    /// Records a number of dispatched boxes.
    pub fn record_box_count(&mut self, boxes: u32) {
        self.entries.add(Metric::BoxCount(boxes));
    }

    /// Sum of every recorded volumetric weight.
    pub fn total_volumetric_weight(&self) -> f64 {
        self.entries
            .iter()
            .filter_map(|m| match m {
                Metric::VolumetricWeight(kg) => Some(*kg),
                _ => None,
            })
            .sum()
    }

    /// Sum of every recorded billed weight.
    pub fn total_billed_weight(&self) -> f64 {
        self.entries
            .iter()
            .filter_map(|m| match m {
                Metric::BilledWeight(kg) => Some(*kg),
                _ => None,
            })
            .sum()
    }

    /// Sum of every recorded box count.
    pub fn total_boxes(&self) -> u64 {
        self.entries
            .iter()
            .filter_map(|m| match m {
                Metric::BoxCount(n) => Some(u64::from(*n)),
                _ => None,
            })
            .sum()
    }

    /// Number of entries recorded, across all kinds.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the raw entries.
    pub fn iter(&self) -> impl Iterator<Item = &Metric> {
        self.entries.iter()
    }
}

impl fmt::Display for DispatchLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dispatch metrics:")?;
        writeln!(
            f,
            "  total volumetric weight: {} kg",
            self.total_volumetric_weight()
        )?;
        writeln!(f, "  total billed weight: {} kg", self.total_billed_weight())?;
        write!(f, "  total boxes dispatched: {}", self.total_boxes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_log_totals_are_zero() {
        let log = DispatchLog::new();
        assert!(log.is_empty());
        assert_eq!(log.total_volumetric_weight(), 0.0);
        assert_eq!(log.total_billed_weight(), 0.0);
        assert_eq!(log.total_boxes(), 0);
    }

    #[test]
    fn totals_only_sum_their_own_kind() {
        let mut log = DispatchLog::new();
        log.record_volumetric_weight(10.0);
        log.record_billed_weight(7.5);
        log.record_box_count(2);
        log.record_volumetric_weight(5.0);
        log.record_box_count(3);

        assert_eq!(log.len(), 5);
        assert_eq!(log.total_volumetric_weight(), 15.0);
        assert_eq!(log.total_billed_weight(), 7.5);
        assert_eq!(log.total_boxes(), 5);
    }

    #[test]
    fn display_reports_all_three_totals() {
        let mut log = DispatchLog::new();
        log.record_volumetric_weight(1.5);
        log.record_billed_weight(2.5);
        log.record_box_count(4);

        let report = log.to_string();
        assert!(report.contains("1.5 kg"));
        assert!(report.contains("2.5 kg"));
        assert!(report.contains("boxes dispatched: 4"));
    }
}
