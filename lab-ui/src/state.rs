//! Application state for the reservation UI.
//!
//! One [`AppState`] lives in Cursive's user data for the whole run. It owns
//! the reservation session; views borrow it through
//! `Cursive::with_user_data` and never keep state of their own.

use std::path::PathBuf;

use lab_core::{Clock, ReservationSession};

use crate::{
    config::AppConfig,
    export::{self, ExportError},
};

#[derive(Debug)]
pub struct AppState {
    pub session: ReservationSession,
    /// Directory the report is exported to.
    pub report_dir: PathBuf,
    /// One-line feedback shown under the listing (filter errors, export result).
    pub notice: Option<String>,
}

impl AppState {
    pub fn new(
        config: &AppConfig,
        clock: impl Clock + 'static,
    ) -> Self {
        Self {
            session: ReservationSession::new(config.session_config(), clock),
            report_dir: config.report_dir.clone(),
            notice: None,
        }
    }

    /// Writes the report for every stored reservation.
    pub fn export_report(&self) -> Result<PathBuf, ExportError> {
        export::write_report(&self.report_dir, &self.session.report())
    }
}
