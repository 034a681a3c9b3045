// cinetty: terminal cinema seat-booking simulator

mod booking;
mod seating;
mod session;
mod setup;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use session::session::CinemaSession;
use ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("cinetty");
        eprintln!("Error: No setup line provided");
        eprintln!();
        eprintln!("Usage: {} [Title] [Rows] [SeatsPerRow]", program_name);
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {} Inception 8 10       # 8 rows of 10 seats", program_name);
        eprintln!(
            "  {} Dune 26 50           # the largest supported screen",
            program_name
        );
        std::process::exit(1);
    }

    // The setup line may arrive as one quoted argument or as three separate
    // ones; both join back into the same [Title] [Rows] [SeatsPerRow] form.
    let line = args[1..].join(" ");
    let setup = match setup::parse_setup_line(&line) {
        Ok(setup) => setup,
        Err(e) => {
            eprintln!("Setup error: {}", e);
            std::process::exit(1);
        }
    };

    let session = CinemaSession::new(setup);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
