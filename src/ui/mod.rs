//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, and the
//!   menu/selecting/lookup screen machine
//! - **[`panes`]** — stateless render functions for the seating chart, the
//!   menu/prompt pane, and the status bar
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`CinemaSession`] and call [`App::run`] to start the event loop.  All
//! user-facing text lives here; the core session never prints.
//!
//! [`CinemaSession`]: crate::session::session::CinemaSession
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
