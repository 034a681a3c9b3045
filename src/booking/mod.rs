//! Confirmed bookings
//!
//! - [`ledger`]: the append-only [`ledger::BookingLedger`] with sequential
//!   id generation and lookup by id
//!
//! Bookings exist only as the result of confirming a tentative selection and
//! are immutable afterward; there is no cancellation.

pub mod ledger;
