//! UI Components
//!
//! Leptos components; all state changes go through the engine.

mod error_notification;
mod footer;
mod header;
mod todo_row;

pub use error_notification::ErrorNotification;
pub use footer::Footer;
pub use header::Header;
pub use todo_row::TodoRow;
