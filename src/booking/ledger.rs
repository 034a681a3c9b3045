//! Booking ledger
//!
//! Insertion-ordered history of confirmed bookings for one session, plus the
//! sequence counter that seeds booking ids.  Ids take the form
//! `<PREFIX><4-digit sequence>` starting at `0001`; the prefix is supplied by
//! whoever constructs the ledger.

use crate::seating::code;
use crate::seating::grid::SeatPos;

/// Booking-id prefix used when the caller does not supply one.
pub const DEFAULT_PREFIX: &str = "GIC";

/// An immutable confirmed reservation of one or more seats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: String,
    pub seats: Vec<SeatPos>,
}

impl Booking {
    /// Seat codes in booking order, e.g. `["A04", "A05", "A06"]`.
    pub fn seat_codes(&self) -> Vec<String> {
        self.seats.iter().copied().map(code::encode).collect()
    }
}

/// The insertion-ordered booking history.
#[derive(Debug, Clone)]
pub struct BookingLedger {
    bookings: Vec<Booking>,
    sequence: u32,
    prefix: String,
}

impl BookingLedger {
    pub fn new(prefix: impl Into<String>) -> Self {
        BookingLedger {
            bookings: Vec::new(),
            sequence: 0,
            prefix: prefix.into(),
        }
    }

    /// Append a booking for `seats`, allocating the next id.  Never fails;
    /// validating the seats happened at confirmation time.
    pub fn record(&mut self, seats: Vec<SeatPos>) -> &Booking {
        self.sequence += 1;
        let id = format!("{}{:04}", self.prefix, self.sequence);
        self.bookings.push(Booking { id, seats });
        // just pushed, so the last slot is always present
        &self.bookings[self.bookings.len() - 1]
    }

    /// Linear lookup by exact id.  A missing id is an empty result, not an
    /// error.
    pub fn find_by_id(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_and_zero_padded() {
        let mut ledger = BookingLedger::new("GIC");
        assert_eq!(ledger.record(vec![SeatPos { row: 0, col: 0 }]).id, "GIC0001");
        assert_eq!(ledger.record(vec![SeatPos { row: 0, col: 1 }]).id, "GIC0002");
        // sequence counts confirmations, not seats
        let many = (0..5).map(|col| SeatPos { row: 1, col }).collect();
        assert_eq!(ledger.record(many).id, "GIC0003");
    }

    #[test]
    fn prefix_is_configurable() {
        let mut ledger = BookingLedger::new("XYZ");
        assert_eq!(ledger.record(Vec::new()).id, "XYZ0001");
    }

    #[test]
    fn lookup_is_exact_match() {
        let mut ledger = BookingLedger::new(DEFAULT_PREFIX);
        ledger.record(vec![SeatPos { row: 0, col: 0 }]);

        let found = ledger.find_by_id("GIC0001").expect("recorded above");
        assert_eq!(found.seat_codes(), ["A01"]);
        assert!(ledger.find_by_id("GIC001").is_none());
        assert!(ledger.find_by_id("gic0001").is_none());
        assert!(ledger.find_by_id("GIC0002").is_none());
    }
}
