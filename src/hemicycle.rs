//! Seat distribution entry point.
//!
//! Validates the radii, handles the degenerate geometries, normalizes the
//! radius order for the row search and restores the caller's order on the way
//! out.
//!
//! # Example
//!
//! ```
//! use zenseats::{Hemicycle, Resolution};
//!
//! let plan = Hemicycle::new(3.0, 1.0).plan(50).unwrap();
//!
//! // Inner radius is larger, so the biggest row comes first.
//! assert_eq!(plan.seats, vec![18, 14, 11, 7]);
//! assert!(plan.reversed);
//! assert_eq!(plan.total(), 50);
//! assert!(matches!(plan.resolution, Resolution::Grown(_)));
//! ```

use alloc::vec;
use alloc::vec::Vec;

use crate::row::SeatError;
use crate::search::{Fit, arrange_rows, default_max_rows};

/// How a [`SeatPlan`] was produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// No seats were requested.
    Empty,
    /// Radii are equal; seats were split over two rows.
    Split,
    /// The capacity estimate matched the total exactly.
    Exact,
    /// The closest candidate undershot and this many seats were added.
    Grown(u64),
    /// The closest candidate overshot and this many seats were removed.
    Shrunk(u64),
}

impl From<Fit> for Resolution {
    fn from(fit: Fit) -> Self {
        match fit {
            Fit::Exact => Self::Exact,
            Fit::Grown(n) => Self::Grown(n),
            Fit::Shrunk(n) => Self::Shrunk(n),
        }
    }
}

/// Seats per row for a hemicycle, in the caller's inner → outer order.
#[derive(Clone, Debug, PartialEq)]
pub struct SeatPlan {
    /// Seats per row. Index 0 is the row at the caller's `inner_radius`.
    pub seats: Vec<u32>,
    /// Radial distance between consecutive rows. Zero for `Empty` and `Split`.
    pub row_spacing: f64,
    /// True when the radii were swapped for the search and the rows reversed back.
    pub reversed: bool,
    /// How the row counts were reconciled with the requested total.
    pub resolution: Resolution,
}

impl SeatPlan {
    /// Seats per row.
    pub fn rows(&self) -> &[u32] {
        &self.seats
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.seats.len()
    }

    /// Total seats placed.
    pub fn total(&self) -> u64 {
        self.seats.iter().map(|&s| u64::from(s)).sum()
    }

    fn empty() -> Self {
        Self {
            seats: Vec::new(),
            row_spacing: 0.0,
            reversed: false,
            resolution: Resolution::Empty,
        }
    }
}

/// Annular region between two radii, to be filled with concentric rows.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hemicycle {
    /// Radius of the first row.
    pub inner_radius: f64,
    /// Radius bounding the last row.
    pub outer_radius: f64,
    max_rows: Option<u32>,
}

impl Hemicycle {
    /// Create a region from the caller's inner and outer radius.
    ///
    /// The radii may be given in either order.
    pub fn new(inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            inner_radius,
            outer_radius,
            max_rows: None,
        }
    }

    /// Cap the number of row counts tried by the search.
    ///
    /// Defaults to one more than the seat total, which always suffices.
    /// With a lower cap the largest candidate tried is grown to the total.
    pub fn max_rows(mut self, max_rows: u32) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    /// Distribute `total_seats` over concentric rows.
    pub fn plan(&self, total_seats: u32) -> Result<SeatPlan, SeatError> {
        if total_seats == 0 {
            return Ok(SeatPlan::empty());
        }
        let (mut inner, mut outer) = (self.inner_radius, self.outer_radius);
        if inner < 0.0 || outer < 0.0 {
            return Err(SeatError::NegativeRadius);
        }
        if !inner.is_finite() || !outer.is_finite() {
            return Err(SeatError::NonFiniteRadius);
        }

        if inner == outer {
            // Treated as a rectangle: two rows, the front one gets the smaller half.
            #[cfg(feature = "tracing")]
            tracing::debug!(radius = inner, total_seats, "equal radii, splitting into two rows");
            let front = total_seats / 2;
            return Ok(SeatPlan {
                seats: vec![front, total_seats - front],
                row_spacing: 0.0,
                reversed: false,
                resolution: Resolution::Split,
            });
        }

        let reversed = inner > outer;
        if reversed {
            core::mem::swap(&mut inner, &mut outer);
        }

        let max_rows = self
            .max_rows
            .unwrap_or_else(|| default_max_rows(total_seats));
        let arranged = arrange_rows(outer - inner, total_seats, inner, max_rows)?;

        let mut seats = arranged.seats;
        if reversed {
            seats.reverse();
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            rows = seats.len(),
            row_spacing = arranged.row_spacing,
            reversed,
            fit = ?arranged.fit,
            "seats distributed"
        );

        Ok(SeatPlan {
            seats,
            row_spacing: arranged.row_spacing,
            reversed,
            resolution: arranged.fit.into(),
        })
    }
}

/// Distribute `total_seats` between `inner_radius` and `outer_radius`.
///
/// Returns seats per row, ordered from the row at `inner_radius` to the row
/// at `outer_radius`. Empty when `total_seats` is zero.
pub fn distribute(
    inner_radius: f64,
    outer_radius: f64,
    total_seats: u32,
) -> Result<Vec<u32>, SeatError> {
    Hemicycle::new(inner_radius, outer_radius)
        .plan(total_seats)
        .map(|plan| plan.seats)
}
