//! Main TUI application state and logic
//!
//! [`App`] drives the booking state machine against a
//! [`CinemaSession`]: Idle at the menu, Selecting while a tentative
//! selection is held, then either Confirmed or abandoned back to the menu.
//! The session is only mutated on confirmation; every other transition is a
//! pure screen change.

use crate::seating::grid::{SeatPos, Selection};
use crate::session::session::CinemaSession;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use rustc_hash::FxHashSet;
use std::io;
use std::time::Duration;

/// Which interaction screen is active
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Main menu: book, check bookings, exit
    Menu,

    /// Collecting the number of tickets to book
    TicketCount,

    /// A tentative selection is held; accept it or re-anchor it from a
    /// starting seat code (same count, fresh block)
    Selecting { count: usize, selection: Selection },

    /// A booking was just confirmed
    Confirmed {
        booking_id: String,
        seat_codes: Vec<String>,
    },

    /// Collecting a booking id to look up
    Lookup,

    /// Showing a found booking overlaid on the seating map
    BookingView { booking_id: String },
}

/// The main application state
pub struct App {
    /// The booking session being driven
    pub session: CinemaSession,

    /// Active screen
    pub screen: Screen,

    /// Shared input buffer for the prompt screens
    pub input: String,

    /// Status message to display
    pub status_message: String,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new app around the given session
    pub fn new(session: CinemaSession) -> Self {
        App {
            session,
            screen: Screen::Menu,
            input: String::new(),
            status_message: String::from("Ready!"),
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Seating chart and menu side by side, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        let overlay = self.overlay();
        super::panes::render_seating_pane(frame, columns[0], self.session.grid(), &overlay);
        super::panes::render_menu_pane(frame, columns[1], &self.session, &self.screen, &self.input);
        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.session.available_seats(),
        );
    }

    /// Seats highlighted on the chart for the active screen
    fn overlay(&self) -> FxHashSet<SeatPos> {
        match &self.screen {
            Screen::Selecting { selection, .. } => selection.iter().copied().collect(),
            Screen::BookingView { booking_id } => self
                .session
                .find_booking(booking_id)
                .map(|b| b.seats.iter().copied().collect())
                .unwrap_or_default(),
            _ => FxHashSet::default(),
        }
    }

    /// Handle keyboard events for the active screen
    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.handle_escape();
            return;
        }

        match self.screen.clone() {
            Screen::Menu => self.handle_menu_key(key),
            Screen::TicketCount => self.handle_ticket_count_key(key),
            Screen::Selecting { count, selection } => {
                self.handle_selecting_key(key, count, &selection)
            }
            Screen::Lookup => self.handle_lookup_key(key),
            Screen::Confirmed { .. } | Screen::BookingView { .. } => self.back_to_menu(),
        }
    }

    /// Esc abandons the current flow; at the menu it quits
    fn handle_escape(&mut self) {
        if matches!(self.screen, Screen::Menu) {
            self.should_quit = true;
            return;
        }
        let was_selecting = matches!(self.screen, Screen::Selecting { .. });
        self.back_to_menu();
        if was_selecting {
            self.status_message = String::from("Selection discarded; no seats were booked");
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('1') => {
                self.input.clear();
                self.status_message.clear();
                self.screen = Screen::TicketCount;
            }
            KeyCode::Char('2') => {
                self.input.clear();
                self.status_message.clear();
                self.screen = Screen::Lookup;
            }
            KeyCode::Char('3') | KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_ticket_count_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => self.input.push(c),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => self.submit_ticket_count(),
            _ => {}
        }
    }

    /// Blank input goes back to the menu; otherwise validate the count and
    /// offer an auto-selected block
    fn submit_ticket_count(&mut self) {
        if self.input.is_empty() {
            self.back_to_menu();
            return;
        }

        let count: usize = match self.input.parse() {
            Ok(n) if n > 0 => n,
            _ => {
                self.input.clear();
                self.status_message = String::from("Please enter a positive number of tickets");
                return;
            }
        };

        // Availability is checked here, before auto-select is invoked
        let available = self.session.available_seats();
        if count > available {
            self.input.clear();
            self.status_message = format!("Sorry, there are only {} seats left", available);
            return;
        }

        match self.session.auto_select_seats(count) {
            Ok(selection) => {
                self.input.clear();
                self.status_message = format!(
                    "Auto-selected {} seat{}; Enter to confirm",
                    count,
                    if count == 1 { "" } else { "s" }
                );
                self.screen = Screen::Selecting { count, selection };
            }
            Err(e) => {
                self.input.clear();
                self.status_message = e.to_string();
            }
        }
    }

    fn handle_selecting_key(&mut self, key: KeyEvent, count: usize, selection: &Selection) {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphanumeric() => {
                self.input.push(c.to_ascii_uppercase())
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => {
                if self.input.is_empty() {
                    self.confirm_current(selection);
                } else {
                    self.reanchor_selection(count);
                }
            }
            _ => {}
        }
    }

    /// Confirm the held selection and show the booking summary
    fn confirm_current(&mut self, selection: &Selection) {
        match self.session.confirm_selection(selection) {
            Ok(booking) => {
                let booking_id = booking.id.clone();
                let seat_codes = booking.seat_codes();
                self.status_message = format!("Booking {} confirmed", booking_id);
                self.screen = Screen::Confirmed {
                    booking_id,
                    seat_codes,
                };
            }
            Err(e) => self.status_message = e.to_string(),
        }
    }

    /// Replace the tentative selection with a block starting at the typed
    /// seat code; the previous selection stays on failure
    fn reanchor_selection(&mut self, count: usize) {
        let code = std::mem::take(&mut self.input);
        if !self.session.is_valid_seat_code(&code) {
            self.status_message = String::from("Invalid seat code");
            return;
        }
        match self.session.select_from_seat_code(&code, count) {
            Ok(selection) => {
                self.status_message = format!("Selection moved to start at {}", code);
                self.screen = Screen::Selecting { count, selection };
            }
            Err(e) => self.status_message = e.to_string(),
        }
    }

    fn handle_lookup_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphanumeric() => {
                self.input.push(c.to_ascii_uppercase())
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => self.submit_lookup(),
            _ => {}
        }
    }

    /// Blank input goes back to the menu; a missing id is reported and the
    /// prompt stays open for another try
    fn submit_lookup(&mut self) {
        if self.input.is_empty() {
            self.back_to_menu();
            return;
        }

        let id = std::mem::take(&mut self.input);
        if self.session.find_booking(&id).is_some() {
            self.status_message = format!("Showing booking {}", id);
            self.screen = Screen::BookingView { booking_id: id };
        } else {
            self.status_message = format!("Booking id \"{}\" not found", id);
        }
    }

    fn back_to_menu(&mut self) {
        self.screen = Screen::Menu;
        self.input.clear();
    }
}
