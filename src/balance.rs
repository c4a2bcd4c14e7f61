//! Greedy single-seat adjustments that close the gap to an exact seat total.
//!
//! Both operations take ownership of the candidate rows, apply exactly `n`
//! single-seat steps, and hand back only the final seat counts.

use alloc::vec::Vec;

use crate::row::{Row, SeatError};

/// Add `n` seats, one at a time, each to the row with the most space per seat.
///
/// Ties go to the innermost row. Adding to an empty slice is a no-op.
pub fn add_seats(mut rows: Vec<Row>, n: u64) -> Result<Vec<u32>, SeatError> {
    for _ in 0..n {
        let Some(i) = widest(&rows)? else {
            break;
        };
        let seats = rows[i].seats + 1;
        rows[i].reseat(seats)?;
    }
    Ok(rows.into_iter().map(|r| r.seats).collect())
}

/// Remove `n` seats, one at a time, each from the row with the least space per seat.
///
/// Rows holding a single seat are never picked. When no row can give up a
/// seat the step does nothing. Ties go to the innermost row.
pub fn remove_seats(mut rows: Vec<Row>, n: u64) -> Result<Vec<u32>, SeatError> {
    for _ in 0..n {
        let Some(i) = tightest(&rows)? else {
            continue;
        };
        let seats = rows[i].seats - 1;
        rows[i].reseat(seats)?;
    }
    Ok(rows.into_iter().map(|r| r.seats).collect())
}

/// Index of the row with the strictly greatest space per seat, first wins.
fn widest(rows: &[Row]) -> Result<Option<usize>, SeatError> {
    let best = rows
        .iter()
        .enumerate()
        .try_fold(None, |best: Option<(usize, f64)>, (i, row)| -> Result<_, SeatError> {
            let space = row.space_per_seat()?;
            Ok(match best {
                Some((_, s)) if space <= s => best,
                _ => Some((i, space)),
            })
        })?;
    Ok(best.map(|(i, _)| i))
}

/// Index of the row with the strictly smallest space per seat among rows
/// holding more than one seat, first wins.
fn tightest(rows: &[Row]) -> Result<Option<usize>, SeatError> {
    let best = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| row.seats > 1)
        .try_fold(None, |best: Option<(usize, f64)>, (i, row)| -> Result<_, SeatError> {
            let space = row.space_per_seat()?;
            Ok(match best {
                Some((_, s)) if space >= s => best,
                _ => Some((i, space)),
            })
        })?;
    Ok(best.map(|(i, _)| i))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(layout: &[(u32, f64)]) -> Vec<Row> {
        layout.iter().map(|&(s, c)| Row::new(s, c)).collect()
    }

    // ── add_seats ───────────────────────────────────────────────────────

    #[test]
    fn add_goes_to_widest_row() {
        // spacing 1.0, 2.0, 1.5 → middle row wins
        let out = add_seats(rows(&[(2, 2.0), (2, 4.0), (2, 3.0)]), 1).unwrap();
        assert_eq!(out, vec![2, 3, 2]);
    }

    #[test]
    fn add_ties_go_to_first_row() {
        let out = add_seats(rows(&[(2, 4.0), (2, 4.0)]), 1).unwrap();
        assert_eq!(out, vec![3, 2]);
    }

    #[test]
    fn add_spreads_as_spacing_shrinks() {
        // capacity is carried, so a row's spacing drops as it fills up
        let out = add_seats(rows(&[(1, 6.0), (1, 6.0)]), 4).unwrap();
        assert_eq!(out, vec![3, 3]);
    }

    #[test]
    fn add_exactly_n() {
        let out = add_seats(rows(&[(3, 3.14), (6, 9.42), (9, 15.7)]), 7).unwrap();
        assert_eq!(out.iter().sum::<u32>(), 18 + 7);
    }

    #[test]
    fn add_zero_is_identity() {
        let out = add_seats(rows(&[(3, 1.0), (5, 2.0)]), 0).unwrap();
        assert_eq!(out, vec![3, 5]);
    }

    #[test]
    fn add_to_no_rows_is_noop() {
        assert_eq!(add_seats(Vec::new(), 3).unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn add_with_empty_row_errors() {
        assert_eq!(
            add_seats(rows(&[(0, 1.0), (2, 2.0)]), 1),
            Err(SeatError::EmptyRow)
        );
    }

    // ── remove_seats ────────────────────────────────────────────────────

    #[test]
    fn remove_goes_to_tightest_row() {
        // spacing 1.0, 0.5, 2.0 → middle row loses a seat
        let out = remove_seats(rows(&[(3, 3.0), (4, 2.0), (2, 4.0)]), 1).unwrap();
        assert_eq!(out, vec![3, 3, 2]);
    }

    #[test]
    fn remove_ties_go_to_first_row() {
        let out = remove_seats(rows(&[(4, 2.0), (4, 2.0)]), 1).unwrap();
        assert_eq!(out, vec![3, 4]);
    }

    #[test]
    fn remove_skips_single_seat_rows() {
        // first row is tightest but holds one seat
        let out = remove_seats(rows(&[(1, 0.1), (3, 6.0)]), 1).unwrap();
        assert_eq!(out, vec![1, 2]);
    }

    #[test]
    fn remove_never_empties_a_row() {
        let out = remove_seats(rows(&[(2, 1.0), (3, 1.0)]), 10).unwrap();
        assert_eq!(out, vec![1, 1]);
    }

    #[test]
    fn remove_exactly_n() {
        let out = remove_seats(rows(&[(6, 6.28), (9, 9.42), (13, 12.57)]), 5).unwrap();
        assert_eq!(out.iter().sum::<u32>(), 28 - 5);
        assert!(out.iter().all(|&s| s >= 1));
    }
}
