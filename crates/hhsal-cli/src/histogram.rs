//! Equal-width histogram of the reference-salary series, rendered as text.

use std::io::Write;

use hhsal_core::format_rub;

const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Histogram {
    pub min: f64,
    pub max: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Buckets `values` into `bins` equal-width bins spanning `min..=max`.
    ///
    /// The last bin is closed on the right. When every value is equal the
    /// series collapses into a single bin. Returns `None` for an empty series
    /// or zero bins.
    pub(crate) fn from_values(values: &[f64], bins: usize) -> Option<Self> {
        if bins == 0 {
            return None;
        }
        let min = values.iter().copied().reduce(f64::min)?;
        let max = values.iter().copied().reduce(f64::max)?;

        if (max - min).abs() < f64::EPSILON {
            return Some(Self {
                min,
                max,
                counts: vec![values.len()],
            });
        }

        #[allow(clippy::cast_precision_loss)]
        let width = (max - min) / bins as f64;
        let mut counts = vec![0usize; bins];
        for value in values {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let idx = (((value - min) / width).floor() as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Some(Self { min, max, counts })
    }

    /// Lower and upper edge of bin `idx`.
    pub(crate) fn bin_edges(&self, idx: usize) -> (f64, f64) {
        #[allow(clippy::cast_precision_loss)]
        let width = (self.max - self.min) / self.counts.len() as f64;
        #[allow(clippy::cast_precision_loss)]
        let lower = self.min + width * idx as f64;
        (lower, lower + width)
    }

    /// Writes one line per bin: the range, a proportional bar, and the count.
    pub(crate) fn render(&self, out: &mut impl Write) -> std::io::Result<()> {
        let peak = self.counts.iter().copied().max().unwrap_or(0).max(1);
        for (idx, count) in self.counts.iter().enumerate() {
            let (lower, upper) = self.bin_edges(idx);
            let bar = "#".repeat(count * BAR_WIDTH / peak);
            writeln!(
                out,
                "{:>13} - {:<13} | {bar:<BAR_WIDTH$} {count}",
                format_rub(lower),
                format_rub(upper),
            )?;
        }
        Ok(())
    }
}
