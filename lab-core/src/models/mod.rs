mod draft;
mod lab;
mod reservation;

pub use draft::{DraftField, ReservationDraft, UnknownFieldError};
pub use lab::{Lab, UnknownLabError};
pub use reservation::Reservation;

/// Calendar date format used by the form, the listing and the report.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
