//! The booking session
//!
//! [`CinemaSession`] composes the seating grid and the booking ledger for a
//! single screening behind one narrow API.  Selection calls are pure and may
//! be repeated or replaced freely; state changes only when a tentative
//! selection is confirmed, which marks the seats and records the booking
//! atomically.
//!
//! The session holds no locks: every mutating operation takes `&mut self`,
//! so single-writer access is enforced by ownership.  Sharing a session
//! across threads would require an external mutex around the whole value.

use super::errors::BookingError;
use crate::booking::ledger::{Booking, BookingLedger, DEFAULT_PREFIX};
use crate::seating::code;
use crate::seating::grid::{SeatingGrid, Selection};
use crate::setup::Setup;

/// Core state for one screening: title, grid, and ledger.
pub struct CinemaSession {
    title: String,
    grid: SeatingGrid,
    ledger: BookingLedger,
}

impl CinemaSession {
    /// Create a session with the default booking-id prefix.
    pub fn new(setup: Setup) -> Self {
        Self::with_prefix(setup, DEFAULT_PREFIX)
    }

    /// Create a session whose booking ids carry a custom prefix.
    pub fn with_prefix(setup: Setup, prefix: impl Into<String>) -> Self {
        CinemaSession {
            grid: SeatingGrid::new(setup.rows, setup.seats_per_row),
            ledger: BookingLedger::new(prefix),
            title: setup.title,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Read-only view of the grid for rendering.
    pub fn grid(&self) -> &SeatingGrid {
        &self.grid
    }

    pub fn available_seats(&self) -> usize {
        self.grid.available_count()
    }

    pub fn is_valid_seat_code(&self, code: &str) -> bool {
        self.grid.is_valid_code(code)
    }

    /// Auto-select `count` seats near the center of the front rows.
    ///
    /// Precondition (caller-checked, like the interactive loop does before
    /// offering a selection): `count` is positive and at most
    /// [`CinemaSession::available_seats`].
    pub fn auto_select_seats(&self, count: usize) -> Result<Selection, BookingError> {
        self.grid.auto_select(count)
    }

    /// Select a contiguous block of `count` seats starting at `code`.
    ///
    /// The code is decoded through the shared codec; anything that fails to
    /// decode or lands outside the grid is out of range.
    pub fn select_from_seat_code(
        &self,
        seat_code: &str,
        count: usize,
    ) -> Result<Selection, BookingError> {
        let start = code::decode(seat_code).ok_or_else(|| BookingError::OutOfRange {
            code: seat_code.to_string(),
            count,
        })?;
        self.grid.select_from_code(start, count)
    }

    /// Confirm a tentative selection: mark its seats occupied and record the
    /// booking, as one inseparable step.
    ///
    /// Empty selections are rejected without consuming a booking id.  On any
    /// failure neither the grid nor the ledger changes, so a confirmed seat
    /// always has a ledger entry and vice versa.
    pub fn confirm_selection(&mut self, selection: &Selection) -> Result<&Booking, BookingError> {
        if selection.is_empty() {
            return Err(BookingError::EmptySelection);
        }
        let seats = self.grid.confirm(selection)?;
        Ok(self.ledger.record(seats))
    }

    /// Look up a past booking by id.
    pub fn find_booking(&self, id: &str) -> Option<&Booking> {
        self.ledger.find_by_id(id)
    }
}
