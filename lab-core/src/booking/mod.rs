//! Acceptance rules and the in-memory reservation store.
//!
//! A draft becomes a [`Reservation`](crate::Reservation) only through
//! [`ReservationBook::submit`], which checks, in order:
//!
//! | Step | Rule | Rejection |
//! |------|------|-----------|
//! | 1 | required fields are filled in | `MissingField` |
//! | 2 | lab, date, headcount and telephone parse | `UnknownLab`, `InvalidDate`, `InvalidHeadcount`, `InvalidTelephone` |
//! | 3 | date is at least the lead time away from today | `LeadTimeViolation` |
//! | 4 | no stored reservation has the same lab and date | `DoubleBooking` |

mod book;
mod error;
mod lead_time;

pub use book::ReservationBook;
pub use error::RejectionReason;
pub use lead_time::{DEFAULT_LEAD_TIME_DAYS, LeadTimeRule};
