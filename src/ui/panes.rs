//! Rendering logic for each TUI pane

use crate::seating::code;
use crate::seating::grid::{SeatPos, SeatState, SeatingGrid};
use crate::session::session::CinemaSession;
use crate::ui::app::Screen;
use crate::ui::theme::DEFAULT_THEME;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};
use rustc_hash::FxHashSet;

/// Render the seating chart with an optional tentative-seat overlay.
///
/// Rows are drawn back row first, so row A (the front row) sits at the
/// bottom of the chart.  Occupied seats are `#`, free seats `.`, overlay
/// seats `o`.
pub fn render_seating_pane(
    frame: &mut Frame,
    area: Rect,
    grid: &SeatingGrid,
    overlay: &FxHashSet<SeatPos>,
) {
    let block = Block::default()
        .title(" Seating Map ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    // 2 columns per seat plus the row-letter gutter
    let chart_width = grid.seats_per_row() * 2 + 2;

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        format!("{:^chart_width$}", "S C R E E N"),
        Style::default()
            .fg(DEFAULT_THEME.screen_label)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "-".repeat(chart_width),
        Style::default().fg(DEFAULT_THEME.comment),
    )));

    for row in (0..grid.rows()).rev() {
        let label = (b'A' + row as u8) as char;
        let mut spans = vec![Span::styled(
            format!("{} ", label),
            Style::default().fg(DEFAULT_THEME.fg),
        )];
        for col in 0..grid.seats_per_row() {
            let pos = SeatPos { row, col };
            let (glyph, color) = if overlay.contains(&pos) {
                (" o", DEFAULT_THEME.seat_tentative)
            } else if grid.state(pos) == SeatState::Occupied {
                (" #", DEFAULT_THEME.seat_occupied)
            } else {
                (" .", DEFAULT_THEME.seat_free)
            };
            spans.push(Span::styled(glyph, Style::default().fg(color)));
        }
        lines.push(Line::from(spans));
    }

    // Column-number footer
    let mut footer = String::from("  ");
    for col in 1..=grid.seats_per_row() {
        footer.push_str(&format!("{:2}", col));
    }
    lines.push(Line::from(Span::styled(
        footer,
        Style::default().fg(DEFAULT_THEME.comment),
    )));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Render the menu/prompt pane for the active screen.
///
/// All user-facing text and input echo lives here; key handling lives in
/// [`crate::ui::app`].
pub fn render_menu_pane(
    frame: &mut Frame,
    area: Rect,
    session: &CinemaSession,
    screen: &Screen,
    input: &str,
) {
    let block = Block::default()
        .title(" Menu ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let fg = Style::default().fg(DEFAULT_THEME.fg);
    let dim = Style::default().fg(DEFAULT_THEME.comment);
    let accent = Style::default().fg(DEFAULT_THEME.secondary);

    let mut lines: Vec<Line> = Vec::new();
    match screen {
        Screen::Menu => {
            lines.push(Line::from(Span::styled(
                "Welcome to GIC Cinemas",
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!(
                    "[1] Book tickets for {} ({} seats available)",
                    session.title(),
                    session.available_seats()
                ),
                fg,
            )));
            lines.push(Line::from(Span::styled("[2] Check bookings", fg)));
            lines.push(Line::from(Span::styled("[3] Exit", fg)));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Please enter your selection.",
                dim,
            )));
        }
        Screen::TicketCount => {
            lines.push(Line::from(Span::styled(
                format!("Booking tickets for {}.", session.title()),
                fg,
            )));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Enter number of tickets to book,",
                fg,
            )));
            lines.push(Line::from(Span::styled(
                "or leave blank to go back to the menu:",
                dim,
            )));
            lines.push(prompt_line(input));
        }
        Screen::Selecting { count, selection } => {
            lines.push(Line::from(Span::styled(
                format!(
                    "Tentatively holding {} seat{}:",
                    count,
                    if *count == 1 { "" } else { "s" }
                ),
                fg,
            )));
            let codes: Vec<String> = selection.iter().copied().map(code::encode).collect();
            lines.push(Line::from(Span::styled(codes.join(", "), accent)));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Press Enter to accept the selection,",
                fg,
            )));
            lines.push(Line::from(Span::styled(
                "or enter a new starting seat code (e.g. B03):",
                dim,
            )));
            lines.push(prompt_line(input));
        }
        Screen::Confirmed {
            booking_id,
            seat_codes,
        } => {
            lines.push(Line::from(Span::styled(
                format!(
                    "Successfully booked {} {} ticket{}.",
                    seat_codes.len(),
                    session.title(),
                    if seat_codes.len() == 1 { "" } else { "s" }
                ),
                Style::default().fg(DEFAULT_THEME.success),
            )));
            lines.push(Line::from(vec![
                Span::styled("Booking id: ", fg),
                Span::styled(
                    booking_id.clone(),
                    Style::default()
                        .fg(DEFAULT_THEME.primary)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Seats: ", fg),
                Span::styled(seat_codes.join(", "), accent),
            ]));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Press any key to return to the menu.",
                dim,
            )));
        }
        Screen::Lookup => {
            lines.push(Line::from(Span::styled("Enter booking id,", fg)));
            lines.push(Line::from(Span::styled(
                "or leave blank to go back to the menu:",
                dim,
            )));
            lines.push(prompt_line(input));
        }
        Screen::BookingView { booking_id } => match session.find_booking(booking_id) {
            Some(booking) => {
                lines.push(Line::from(vec![
                    Span::styled("Booking id: ", fg),
                    Span::styled(
                        booking.id.clone(),
                        Style::default()
                            .fg(DEFAULT_THEME.primary)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]));
                lines.push(Line::from(vec![
                    Span::styled("Seats: ", fg),
                    Span::styled(booking.seat_codes().join(", "), accent),
                ]));
                lines.push(Line::from(Span::styled(
                    "The booked seats are highlighted on the seating map.",
                    dim,
                )));
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    "Press any key to return to the menu.",
                    dim,
                )));
            }
            None => {
                lines.push(Line::from(Span::styled(
                    format!("Booking id \"{}\" not found.", booking_id),
                    Style::default().fg(DEFAULT_THEME.error),
                )));
            }
        },
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Render the status bar at the bottom: availability segment, message, and
/// keybind hints.
pub fn render_status_bar(frame: &mut Frame, area: Rect, message: &str, available: usize) {
    let layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            ratatui::layout::Constraint::Percentage(60),
            ratatui::layout::Constraint::Percentage(40),
        ])
        .split(area);

    let left_spans = vec![
        Span::styled(
            format!(" {} seats free ", available),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];
    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);

    let right_spans = vec![
        Span::styled(" ↵ ", key_style),
        Span::styled(" submit ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" Esc ", key_style),
        Span::styled(" back ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" q ", key_style),
        Span::styled(" quit ", desc_style),
    ];
    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}

/// The shared `>` input-echo line with a block cursor.
fn prompt_line(input: &str) -> Line<'_> {
    Line::from(vec![
        Span::styled("> ", Style::default().fg(DEFAULT_THEME.primary)),
        Span::styled(input, Style::default().fg(DEFAULT_THEME.fg)),
        Span::styled(
            "█",
            Style::default().fg(DEFAULT_THEME.secondary),
        ),
    ])
}
