//! # Introduction
//!
//! cinetty simulates seat booking for a single cinema screening.  A session
//! is configured from one `[Title] [Rows] [SeatsPerRow]` line, after which a
//! terminal UI built with [ratatui](https://docs.rs/ratatui) drives the
//! booking loop: auto-select a block of seats, re-anchor it from a seat code,
//! confirm, and look bookings up again by id.
//!
//! ## Booking pipeline
//!
//! ```text
//! Setup line → Setup → CinemaSession (SeatingGrid + BookingLedger) ⇄ TUI
//! ```
//!
//! 1. [`setup`] — validates the setup line before the core is constructed.
//! 2. [`seating`] — the in-memory seating model: [`seating::grid::SeatingGrid`]
//!    with the selection algorithms, and the seat-code codec in
//!    [`seating::code`].
//! 3. [`booking`] — the append-only [`booking::ledger::BookingLedger`] of
//!    confirmed bookings with 4-digit sequential ids.
//! 4. [`session`] — [`session::session::CinemaSession`], the orchestrator that
//!    exclusively owns grid and ledger; the grid mutates only when a tentative
//!    selection is confirmed.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Selection model
//!
//! Selections are tentative: both selectors are pure and return a candidate
//! set of seats without touching grid state.  Confirmation validates every
//! seat again and then marks the whole block occupied and records the booking
//! as one inseparable step, so a failed confirm leaves nothing mutated.

pub mod booking;
pub mod seating;
pub mod session;
pub mod setup;
pub mod ui;
