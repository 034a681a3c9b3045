//! In-memory seating model
//!
//! This module provides the seating abstractions the session is built on:
//! - [`code`]: the seat-code codec, the only place the `A01` string form is
//!   parsed or formatted
//! - [`grid`]: per-seat occupancy state, seat-code validation against actual
//!   dimensions, and the two selection algorithms
//!
//! # Coordinates
//!
//! Positions are zero-based `(row, col)` pairs ordered row-major.  The
//! external form is a [`grid::SeatPos`] encoded as one uppercase row letter
//! (`'A'` = row 0) plus a two-digit 1-based column number, so `B03` is
//! `SeatPos { row: 1, col: 2 }`.  Row A is the front row, closest to the
//! screen.

pub mod code;
pub mod grid;
