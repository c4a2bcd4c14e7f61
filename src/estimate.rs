//! Capacity estimate for a candidate row count.

use alloc::vec::Vec;
use core::f64::consts::PI;

use num_traits::Float;

use crate::row::Row;

/// Rows built for one candidate row count, with their summed seat estimate.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Estimate {
    /// Sum of the estimated seat counts of all rows.
    pub total: u64,
    /// Rows from innermost to outermost.
    pub rows: Vec<Row>,
}

impl Estimate {
    /// Number of rows in this candidate.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Seat counts, innermost first, dropping capacities.
    pub fn seats(&self) -> Vec<u32> {
        self.rows.iter().map(|r| r.seats).collect()
    }

    /// Clamp every row to at most `cap` seats and recompute the total.
    pub fn capped(mut self, cap: u32) -> Self {
        for row in &mut self.rows {
            row.seats = row.seats.min(cap);
        }
        self.total = self.rows.iter().map(|r| u64::from(r.seats)).sum();
        self
    }

    /// Give every row estimated at zero seats a single seat.
    ///
    /// Returns how many seats were added. Only the innermost row can round
    /// to zero; every outer row holds at least `round(PI)` seats.
    pub fn lift_empty_rows(&mut self) -> u64 {
        let mut lifted = 0;
        for row in self.rows.iter_mut().filter(|r| r.seats == 0) {
            row.seats = 1;
            lifted += 1;
        }
        self.total += lifted;
        lifted
    }
}

/// Estimate `row_count` rows spaced `row_spacing` apart, starting at `inner_radius`.
///
/// Row `i` sits at `inner_radius + i * row_spacing` and gets a capacity of
/// `PI * radius`, holding `round(capacity / row_spacing)` seats. A row at the
/// centre holds a single seat. An innermost row much narrower than the
/// spacing rounds to zero seats; see [`Estimate::lift_empty_rows`].
///
/// Estimates beyond `u32::MAX` saturate. All arguments are expected to be
/// non-negative.
pub fn estimate(row_count: u32, row_spacing: f64, inner_radius: f64) -> Estimate {
    if row_count == 0 {
        return Estimate::default();
    }

    let rows: Vec<Row> = (0..row_count)
        .map(|i| {
            let radius = inner_radius + f64::from(i) * row_spacing;
            let capacity = PI * radius;
            let seats = if radius == 0.0 || capacity == 0.0 {
                1
            } else {
                Float::round(capacity / row_spacing) as u32
            };
            Row::new(seats, capacity)
        })
        .collect();
    let total = rows.iter().map(|r| u64::from(r.seats)).sum();

    Estimate { total, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rows_is_empty() {
        let e = estimate(0, 1.0, 5.0);
        assert_eq!(e.total, 0);
        assert!(e.rows.is_empty());
    }

    #[test]
    fn single_row_from_inner_radius() {
        // PI * 1 / 2 = 1.57 → 2
        let e = estimate(1, 2.0, 1.0);
        assert_eq!(e.seats(), vec![2]);
        assert_eq!(e.total, 2);
        assert!((e.rows[0].capacity - PI).abs() < 1e-12);
    }

    #[test]
    fn rows_grow_outward() {
        // radii 1, 1.5, 2, 2.5 at spacing 0.5
        let e = estimate(4, 0.5, 1.0);
        assert_eq!(e.seats(), vec![6, 9, 13, 16]);
        assert_eq!(e.total, 44);
        assert_eq!(e.row_count(), 4);
    }

    #[test]
    fn centre_row_holds_one_seat() {
        let e = estimate(3, 1.0, 0.0);
        assert_eq!(e.rows[0], Row::new(1, 0.0));
        assert_eq!(e.seats(), vec![1, 3, 6]);
        assert_eq!(e.total, 10);
    }

    #[test]
    fn tiny_inner_row_rounds_to_zero() {
        // PI * 0.01 / 3.33 rounds to zero
        let e = estimate(3, 10.0 / 3.0, 0.01);
        assert_eq!(e.seats(), vec![0, 3, 6]);
        assert_eq!(e.total, 9);
    }

    #[test]
    fn outer_rows_hold_at_least_three() {
        for n in 2..50 {
            let e = estimate(n, 7.0 / f64::from(n), 0.001);
            assert!(e.rows[1..].iter().all(|r| r.seats >= 3), "n={n}: {:?}", e.seats());
        }
    }

    #[test]
    fn lift_empty_rows_adds_one_seat() {
        let mut e = estimate(3, 10.0 / 3.0, 0.01);
        assert_eq!(e.lift_empty_rows(), 1);
        assert_eq!(e.seats(), vec![1, 3, 6]);
        assert_eq!(e.total, 10);
        assert_eq!(e.lift_empty_rows(), 0);
    }

    #[test]
    fn huge_estimate_saturates_then_caps() {
        // PI * 1e6 / 1e-6 is far beyond u32::MAX
        let e = estimate(1, 1e-6, 1e6);
        assert_eq!(e.rows[0].seats, u32::MAX);
        let e = e.capped(11);
        assert_eq!(e.seats(), vec![11]);
        assert_eq!(e.total, 11);
    }

    #[test]
    fn capped_leaves_small_rows() {
        let e = estimate(4, 0.5, 1.0).capped(10);
        assert_eq!(e.seats(), vec![6, 9, 10, 10]);
        assert_eq!(e.total, 35);
    }
}
