//! Front-end independent flows: building the state and batch import.

use std::{fmt, path::PathBuf};

use lab_core::{Clock, Lab, RejectionReason, ReservationDraft};
use tracing::{info, warn};

use crate::{config::AppConfig, export::ExportError, state::AppState};

/// Outcome of replaying a batch of drafts through the form rules.
#[derive(Debug)]
pub struct ImportSummary {
    pub accepted: usize,
    /// 1-based row number and the reason that row was refused.
    pub rejected: Vec<(usize, RejectionReason)>,
    pub report_path: PathBuf,
}

impl fmt::Display for ImportSummary {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Accepted: {}", self.accepted)?;
        writeln!(f, "Rejected: {}", self.rejected.len())?;
        for (row, reason) in &self.rejected {
            writeln!(f, "  row {row}: {reason}")?;
        }
        write!(f, "Report:   {}", self.report_path.display())
    }
}

pub fn build_state(
    config: &AppConfig,
    clock: impl Clock + 'static,
) -> AppState {
    AppState::new(config, clock)
}

/// Submits each draft in order, exactly as if typed into the form one after
/// another, then exports the report of everything accepted.
pub fn run_import(
    state: &mut AppState,
    drafts: Vec<ReservationDraft>,
) -> Result<ImportSummary, ExportError> {
    let mut accepted = 0;
    let mut rejected = Vec::new();

    for (idx, draft) in drafts.into_iter().enumerate() {
        let row = idx + 1;
        state.session.load_draft(draft);
        match state.session.submit() {
            Ok(()) => accepted += 1,
            Err(reason) => {
                warn!(row, %reason, "import row rejected");
                rejected.push((row, reason));
            }
        }
    }

    let report_path = state.export_report()?;
    info!(accepted, rejected = rejected.len(), "import finished");

    Ok(ImportSummary {
        accepted,
        rejected,
        report_path,
    })
}

/// The lab catalogue, one name per line in form order.
pub fn lab_catalogue() -> String {
    Lab::ALL
        .iter()
        .map(Lab::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_lists_all_labs_in_form_order() {
        let catalogue = lab_catalogue();
        let lines: Vec<_> = catalogue.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "Informática 1");
        assert_eq!(lines[10], "Anatomia");
    }
}
