// Integration tests for the booking core

use cinetty::seating::grid::{SeatPos, Selection};
use cinetty::session::errors::BookingError;
use cinetty::session::session::CinemaSession;
use cinetty::setup::parse_setup_line;

fn session_5x10() -> CinemaSession {
    let setup = parse_setup_line("TestMovie 5 10").expect("valid setup line");
    CinemaSession::new(setup)
}

#[test]
fn fresh_session_has_every_seat_available() {
    let session = session_5x10();
    assert_eq!(session.available_seats(), 50);
    assert_eq!(session.title(), "TestMovie");
}

#[test]
fn seat_code_validation_respects_grid_bounds() {
    let session = session_5x10();

    assert!(session.is_valid_seat_code("A01"));
    assert!(session.is_valid_seat_code("E10"));

    assert!(!session.is_valid_seat_code("F01")); // row beyond 5 rows
    assert!(!session.is_valid_seat_code("A11")); // column beyond 10 seats
    assert!(!session.is_valid_seat_code("Z10"));
    assert!(!session.is_valid_seat_code("AA1"));
    assert!(!session.is_valid_seat_code("a01"));
    assert!(!session.is_valid_seat_code("A1"));
    assert!(!session.is_valid_seat_code("A001"));
    assert!(!session.is_valid_seat_code(""));
}

#[test]
fn auto_select_offers_center_left_front_row_block() {
    let session = session_5x10();

    let selection = session.auto_select_seats(3).expect("plenty of seats");
    let codes: Vec<String> = selection
        .iter()
        .map(|&pos| cinetty::seating::code::encode(pos))
        .collect();
    // center 5, first start offset tried is center - count = 2
    assert_eq!(codes, ["A03", "A04", "A05"]);

    // pure: an unconfirmed selection leaves the grid unchanged, so a second
    // call returns the same block
    let again = session.auto_select_seats(3).expect("grid unchanged");
    assert_eq!(selection, again);
    assert_eq!(session.available_seats(), 50);
}

#[test]
fn manual_selection_round_trips_through_confirmation() {
    let mut session = session_5x10();

    let selection = session
        .select_from_seat_code("A01", 3)
        .expect("front corner is free");
    let expected: Selection = [
        SeatPos { row: 0, col: 0 },
        SeatPos { row: 0, col: 1 },
        SeatPos { row: 0, col: 2 },
    ]
    .into_iter()
    .collect();
    assert_eq!(selection, expected);

    let booking = session
        .confirm_selection(&selection)
        .expect("selection is free");
    assert_eq!(booking.id, "GIC0001");
    assert_eq!(booking.seat_codes(), ["A01", "A02", "A03"]);

    assert_eq!(session.available_seats(), 47);
    let found = session.find_booking("GIC0001").expect("recorded booking");
    assert_eq!(found.seat_codes(), ["A01", "A02", "A03"]);
    assert!(session.find_booking("GIC0002").is_none());
}

#[test]
fn manual_selection_fails_on_an_occupied_block() {
    let mut session = session_5x10();

    let corner = session.select_from_seat_code("A01", 1).expect("free seat");
    session.confirm_selection(&corner).expect("first booking");

    assert_eq!(
        session.select_from_seat_code("A01", 3),
        Err(BookingError::SeatUnavailable {
            seat: SeatPos { row: 0, col: 0 },
        })
    );
}

#[test]
fn manual_selection_never_wraps_rows() {
    let session = session_5x10();
    assert!(matches!(
        session.select_from_seat_code("A09", 3),
        Err(BookingError::OutOfRange { .. })
    ));
    // undecodable input surfaces as out of range too, without panicking
    assert!(matches!(
        session.select_from_seat_code("banana", 2),
        Err(BookingError::OutOfRange { .. })
    ));
}

#[test]
fn auto_select_fails_when_more_seats_are_requested_than_exist() {
    let session = session_5x10();
    assert_eq!(
        session.auto_select_seats(51),
        Err(BookingError::InsufficientSeats {
            requested: 51,
            available: 50,
        })
    );
    // nothing was reserved by the failed attempt
    assert_eq!(session.available_seats(), 50);
}

#[test]
fn booking_ids_increase_per_confirmation_regardless_of_size() {
    let setup = parse_setup_line("TestMovie 5 10").expect("valid setup line");
    let mut session = CinemaSession::with_prefix(setup, "XYZ");

    let first = session.auto_select_seats(4).expect("seats available");
    assert_eq!(session.confirm_selection(&first).expect("free").id, "XYZ0001");

    let second = session.auto_select_seats(1).expect("seats available");
    assert_eq!(session.confirm_selection(&second).expect("free").id, "XYZ0002");

    assert_eq!(session.available_seats(), 45);
}

#[test]
fn empty_selection_is_rejected_without_consuming_an_id() {
    let mut session = session_5x10();

    assert_eq!(
        session.confirm_selection(&Selection::new()),
        Err(BookingError::EmptySelection)
    );
    assert_eq!(session.available_seats(), 50);

    // the sequence was not bumped by the rejected confirmation
    let selection = session.select_from_seat_code("C05", 2).expect("free seats");
    assert_eq!(
        session.confirm_selection(&selection).expect("free").id,
        "GIC0001"
    );
}

#[test]
fn auto_select_skips_seats_booked_earlier() {
    let mut session = session_5x10();

    // occupy the block auto-select would otherwise offer
    let first = session.auto_select_seats(3).expect("seats available");
    session.confirm_selection(&first).expect("free");

    let second = session.auto_select_seats(3).expect("seats available");
    for pos in &second {
        assert!(!first.contains(pos), "offered an occupied seat: {:?}", pos);
    }

    session.confirm_selection(&second).expect("still free");
    assert_eq!(session.available_seats(), 44);
}

#[test]
fn stale_selection_fails_confirmation_without_partial_booking() {
    let mut session = session_5x10();

    // two copies of the same tentative block; confirming the first makes
    // the second stale
    let held = session.select_from_seat_code("B02", 3).expect("free seats");
    let stale = held.clone();
    session.confirm_selection(&held).expect("free");

    assert!(matches!(
        session.confirm_selection(&stale),
        Err(BookingError::SeatUnavailable { .. })
    ));
    // no second booking and no double-marking happened
    assert_eq!(session.available_seats(), 47);
    assert!(session.find_booking("GIC0002").is_none());
}
