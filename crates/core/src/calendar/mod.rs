//! Host calendar: per-day states and the owner's blocked-day toggle

pub mod service;
pub mod view;

pub use service::HostCalendarService;
pub use view::{day_state, month_window, render_window, CalendarCell, DayState};
