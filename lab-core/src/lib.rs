pub mod booking;
pub mod clock;
pub mod models;
pub mod presenter;
pub mod report;
pub mod session;

pub use booking::{LeadTimeRule, RejectionReason, ReservationBook};
pub use clock::{Clock, FixedClock, SystemClock};
pub use models::*;
pub use presenter::{ReservationRow, parse_filter_date};
pub use report::{REPORT_FILE_NAME, REPORT_MIME_TYPE, generate_report};
pub use session::{Layout, ReservationSession, SessionConfig, ViewMode};
