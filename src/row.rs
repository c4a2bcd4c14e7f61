//! A single concentric row and the seat error type.

/// One concentric row of seats.
///
/// `capacity` starts out proportional to the row's radius (half its
/// circumference) and is only used to derive the spacing between seats.
/// Once seats are added or removed it is carried forward from the spacing,
/// not recomputed from geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Row {
    /// Seats assigned to this row.
    pub seats: u32,
    /// Room available in this row, in radius units.
    pub capacity: f64,
}

impl Row {
    /// Create a row with the given seat count and capacity.
    pub const fn new(seats: u32, capacity: f64) -> Self {
        Self { seats, capacity }
    }

    /// Capacity available to each seat in this row.
    ///
    /// Fails with [`SeatError::EmptyRow`] when the row holds no seats.
    pub fn space_per_seat(&self) -> Result<f64, SeatError> {
        if self.seats == 0 {
            return Err(SeatError::EmptyRow);
        }
        Ok(self.capacity / f64::from(self.seats))
    }

    /// Set a new seat count and carry the capacity forward.
    ///
    /// The spacing is read after the count changes, so the capacity is
    /// `seats * (capacity / seats)`.
    pub(crate) fn reseat(&mut self, seats: u32) -> Result<(), SeatError> {
        self.seats = seats;
        self.capacity = f64::from(seats) * self.space_per_seat()?;
        Ok(())
    }
}

/// Seat distribution error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SeatError {
    /// Inner or outer radius is below zero.
    NegativeRadius,
    /// Inner or outer radius is NaN or infinite.
    NonFiniteRadius,
    /// A row with zero seats was asked for its spacing.
    ///
    /// Indicates a balancing bug; never produced by [`crate::distribute`].
    EmptyRow,
}

impl core::fmt::Display for SeatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NegativeRadius => f.write_str("inner and outer radius cannot be negative"),
            Self::NonFiniteRadius => f.write_str("inner and outer radius must be finite"),
            Self::EmptyRow => f.write_str("number of seats in row cannot be zero"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SeatError {}
