//! Seat distribution across concentric rows of an annular region.
//!
//! Given an inner radius, an outer radius and a seat total, picks a row
//! count and assigns a seat count to every row so that the total is met
//! exactly and seats within each row are spread as evenly as the row's
//! estimated capacity allows.
//!
//! Pure arithmetic — no coordinates, no I/O, `no_std` compatible (needs `alloc`).
//!
//! # Modules
//!
//! - [`row`] — A single row and its per-seat spacing
//! - [`estimate`] — Capacity estimate for a candidate row count
//! - [`balance`] — Greedy single-seat adjustments toward an exact total
//! - [`search`] — Row count search bracketing the requested total
//! - [`hemicycle`] — Entry point: validation, degenerate geometry, ordering
//!
//! # Example
//!
//! ```
//! use zenseats::distribute;
//!
//! let rows = distribute(1.0, 3.0, 50).unwrap();
//! assert_eq!(rows, vec![7, 11, 14, 18]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod balance;
pub mod estimate;
pub mod hemicycle;
pub mod row;
pub mod search;

pub use estimate::Estimate;
pub use hemicycle::{Hemicycle, Resolution, SeatPlan, distribute};
pub use row::{Row, SeatError};
