pub mod timezone;
pub mod window;

pub use timezone::{EventInstant, normalize_end, normalize_start};
pub use window::{EventWindow, NormalizedEvent, normalize_event, select_window};
