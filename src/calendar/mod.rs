//! Calendar persistence.
//!
//! The parser produces tasks and meetings; something has to store them.
//! [`CalendarClient`] is that seam, [`LocalCalendar`] keeps items in the local
//! SQLite database, and [`EventStore`] ties a message to a stored item.

mod client;
mod local;
mod store;

pub use client::{CalendarClient, CreatedItem};
pub use local::LocalCalendar;
pub use store::EventStore;

#[cfg(test)]
pub use client::MockCalendarClient;
