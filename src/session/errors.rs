//! Booking error types
//!
//! This module defines [`BookingError`], covering every way a selection or
//! confirmation can fail (as opposed to setup errors, which are rejected
//! before a session exists).
//!
//! All booking errors are synchronous and local: the core never retries and
//! never leaves the grid partially mutated.  A failed booking-id lookup is
//! not an error at all; it surfaces as an empty `Option`.

use crate::seating::code;
use crate::seating::grid::SeatPos;
use std::fmt;

/// Errors from seat selection and confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// A seat code failed to decode, decoded outside the grid, or the
    /// requested contiguous block would run past the end of the row
    OutOfRange { code: String, count: usize },

    /// A seat in the requested block or selection is already booked
    SeatUnavailable { seat: SeatPos },

    /// Fewer free seats exist than were requested (auto-select only)
    InsufficientSeats { requested: usize, available: usize },

    /// Confirmation was attempted with an empty selection
    EmptySelection,
}

impl fmt::Display for BookingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingError::OutOfRange { code, count } => {
                write!(
                    f,
                    "no room for a block of {} seat{} starting at {}",
                    count,
                    if *count == 1 { "" } else { "s" },
                    code
                )
            }
            BookingError::SeatUnavailable { seat } => {
                write!(f, "seat {} is already booked", code::encode(*seat))
            }
            BookingError::InsufficientSeats {
                requested,
                available,
            } => {
                write!(
                    f,
                    "not enough seats: {} requested, only {} available",
                    requested, available
                )
            }
            BookingError::EmptySelection => {
                write!(f, "cannot confirm an empty selection")
            }
        }
    }
}

impl std::error::Error for BookingError {}
