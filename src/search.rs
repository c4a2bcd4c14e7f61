//! Row count search.
//!
//! Tries 1, 2, 3, ... rows until the estimated capacity reaches the requested
//! total, then balances whichever of the two bracketing candidates is closer.

use alloc::vec::Vec;

use crate::balance::{add_seats, remove_seats};
use crate::estimate::{Estimate, estimate};
use crate::row::SeatError;

/// How the chosen candidate was reconciled with the requested total.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Fit {
    /// The estimate matched the total exactly.
    Exact,
    /// The undershooting candidate was grown by this many seats.
    Grown(u64),
    /// The overshooting candidate was shrunk by this many seats.
    Shrunk(u64),
}

/// Result of a row count search.
#[derive(Clone, Debug, PartialEq)]
pub struct Arranged {
    /// Seats per row, innermost first.
    pub seats: Vec<u32>,
    /// Radial distance between consecutive rows of the chosen candidate.
    pub row_spacing: f64,
    /// How the candidate was balanced.
    pub fit: Fit,
}

/// Default search bound for `total_seats`.
///
/// Every row past the innermost holds at least three seats, so
/// `total_seats + 1` rows always overshoot.
pub fn default_max_rows(total_seats: u32) -> u32 {
    total_seats.saturating_add(1)
}

/// Arrange `total_seats` into rows spanning `radius_diff`, starting at `inner_radius`.
///
/// At most `max_rows` candidates are tried. If none of them reaches the total,
/// the largest one is grown to fit.
///
/// Candidates are compared on their rounded estimates, empty innermost row
/// included. Only the chosen candidate has that row lifted to one seat, and
/// the lifted seat is folded into its balancing gap.
pub fn arrange_rows(
    radius_diff: f64,
    total_seats: u32,
    inner_radius: f64,
    max_rows: u32,
) -> Result<Arranged, SeatError> {
    let target = u64::from(total_seats);
    // Rows past this already lose the bracket to any undershoot.
    let cap = u32::try_from(2 * target + 1).unwrap_or(u32::MAX);
    let mut previous: Option<(Estimate, f64)> = None;

    for row_count in 1..=max_rows.max(1) {
        let row_spacing = radius_diff / f64::from(row_count);
        let mut current = estimate(row_count, row_spacing, inner_radius).capped(cap);

        if current.total == target {
            let lifted = current.lift_empty_rows();
            #[cfg(feature = "tracing")]
            tracing::trace!(row_count, row_spacing, lifted, "estimate matches seat total");
            if lifted == 0 {
                return Ok(Arranged {
                    seats: current.seats(),
                    row_spacing,
                    fit: Fit::Exact,
                });
            }
            return Ok(Arranged {
                seats: remove_seats(current.rows, lifted)?,
                row_spacing,
                fit: Fit::Shrunk(lifted),
            });
        }

        if current.total < target {
            previous = Some((current, row_spacing));
            continue;
        }

        let current_gap = current.total - target;
        match previous {
            Some((mut under, under_spacing)) if target - under.total <= current_gap => {
                under.lift_empty_rows();
                let gap = target - under.total;
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    row_count = row_count - 1,
                    gap,
                    current_gap,
                    "growing undershooting candidate"
                );
                return Ok(Arranged {
                    seats: add_seats(under.rows, gap)?,
                    row_spacing: under_spacing,
                    fit: Fit::Grown(gap),
                });
            }
            _ => {
                let gap = current_gap + current.lift_empty_rows();
                #[cfg(feature = "tracing")]
                tracing::trace!(row_count, gap, "shrinking overshooting candidate");
                return Ok(Arranged {
                    seats: remove_seats(current.rows, gap)?,
                    row_spacing,
                    fit: Fit::Shrunk(gap),
                });
            }
        }
    }

    // Bound reached without overshooting.
    let (mut under, under_spacing) = previous.unwrap_or_default();
    under.lift_empty_rows();
    let gap = target - under.total;
    #[cfg(feature = "tracing")]
    tracing::debug!(max_rows, gap, "row search bound reached, growing largest candidate");
    Ok(Arranged {
        seats: add_seats(under.rows, gap)?,
        row_spacing: under_spacing,
        fit: Fit::Grown(gap),
    })
}
