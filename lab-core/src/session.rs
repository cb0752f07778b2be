//! The reservation session: the single owner of the draft, the book and the
//! view state for one run of the application.
//!
//! Front ends hold a [`ReservationSession`] and drive it with discrete user
//! events (field edits, submit, view switch, filter change). Nothing here
//! blocks or performs I/O; exporting the report is the caller's job.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Clock, LeadTimeRule, RejectionReason, ReservationBook,
    models::{DraftField, Reservation, ReservationDraft, UnknownFieldError},
    presenter::{self, ReservationRow},
    report,
};

/// How the entry form and the listing share the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// One view at a time, switched from a tab bar.
    #[default]
    Tabs,
    /// Both views side by side.
    Panels,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Entry,
    Listing,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [ViewMode::Entry, ViewMode::Listing];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Entry => "Reservation Form",
            Self::Listing => "Active Reservations",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    pub lead_time: LeadTimeRule,
    pub layout: Layout,
}

#[derive(Debug)]
pub struct ReservationSession {
    config: SessionConfig,
    clock: Box<dyn Clock>,
    book: ReservationBook,
    draft: ReservationDraft,
    error: Option<RejectionReason>,
    view: ViewMode,
    filter: Option<NaiveDate>,
}

impl ReservationSession {
    /// Opens a session with an empty book and the form's date pre-filled with
    /// the earliest date the lead-time rule allows.
    pub fn new(
        config: SessionConfig,
        clock: impl Clock + 'static,
    ) -> Self {
        let draft = ReservationDraft::with_date(config.lead_time.earliest_date(clock.today()));
        debug!(date = %draft.date, layout = ?config.layout, "reservation session opened");

        Self {
            config,
            clock: Box::new(clock),
            book: ReservationBook::new(config.lead_time),
            draft,
            error: None,
            view: ViewMode::default(),
            filter: None,
        }
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    // ── input collector ─────────────────────────────────────────────────────

    pub fn draft(&self) -> &ReservationDraft {
        &self.draft
    }

    pub fn set_field(
        &mut self,
        field: DraftField,
        value: impl Into<String>,
    ) {
        self.draft.set(field, value);
    }

    pub fn set_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), UnknownFieldError> {
        self.draft.set_field(name, value)
    }

    /// Replaces the whole draft, e.g. with a row read from a file.
    pub fn load_draft(
        &mut self,
        draft: ReservationDraft,
    ) {
        self.draft = draft;
    }

    // ── validator / store ───────────────────────────────────────────────────

    /// Submits the current draft.
    ///
    /// On success the reservation is appended, the error is cleared and the
    /// draft is reset to empty. On rejection the draft is kept for correction
    /// and the reason is remembered for inline display.
    pub fn submit(&mut self) -> Result<(), RejectionReason> {
        let today = self.clock.today();
        if let Err(reason) = self.book.submit(&self.draft, today).map(|_| ()) {
            self.error = Some(reason.clone());
            return Err(reason);
        }

        self.error = None;
        self.draft.clear();
        Ok(())
    }

    /// The reason the last submit was rejected, until the next successful one.
    pub fn error(&self) -> Option<&RejectionReason> {
        self.error.as_ref()
    }

    pub fn reservations(&self) -> &[Reservation] {
        self.book.reservations()
    }

    // ── presenter ───────────────────────────────────────────────────────────

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn select_view(
        &mut self,
        view: ViewMode,
    ) {
        self.view = view;
    }

    /// Views on screen right now: just the selected one for tabs, both for panels.
    pub fn visible_views(&self) -> &'static [ViewMode] {
        match (self.config.layout, self.view) {
            (Layout::Panels, _) => &ViewMode::ALL,
            (Layout::Tabs, ViewMode::Entry) => &[ViewMode::Entry],
            (Layout::Tabs, ViewMode::Listing) => &[ViewMode::Listing],
        }
    }

    pub fn filter(&self) -> Option<NaiveDate> {
        self.filter
    }

    pub fn set_filter(
        &mut self,
        date: Option<NaiveDate>,
    ) {
        self.filter = date;
    }

    /// Applies the text of the filter box. Invalid text leaves the current
    /// filter in place.
    pub fn apply_filter_input(
        &mut self,
        input: &str,
    ) -> Result<(), RejectionReason> {
        self.filter = presenter::parse_filter_date(input)?;
        Ok(())
    }

    /// Listing rows under the current filter.
    pub fn rows(&self) -> Vec<ReservationRow> {
        presenter::rows(self.book.reservations(), self.filter)
    }

    /// The report always covers every reservation, regardless of the filter.
    pub fn report(&self) -> String {
        report::generate_report(self.book.reservations())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedClock;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn session(layout: Layout) -> ReservationSession {
        ReservationSession::new(
            SessionConfig {
                layout,
                ..Default::default()
            },
            FixedClock(today()),
        )
    }

    fn fill(
        session: &mut ReservationSession,
        lab: &str,
        date: &str,
    ) {
        session.set_field(DraftField::Lab, lab);
        session.set_field(DraftField::Date, date);
        session.set_field(DraftField::Professor, "Dr. Silva");
        session.set_field(DraftField::Discipline, "Bio");
        session.set_field(DraftField::QtdStudents, "20");
        session.set_field(DraftField::Telephone, "5551234");
    }

    #[test]
    fn new_session_prefills_the_earliest_acceptable_date() {
        let s = session(Layout::Tabs);
        assert_eq!(s.draft().date, "2026-10-21");
        assert_eq!(s.draft().lab, "");
        assert!(s.reservations().is_empty());
        assert_eq!(s.view(), ViewMode::Entry);
    }

    #[test]
    fn prefilled_date_passes_the_lead_time_rule() {
        let mut s = session(Layout::Tabs);
        let date = s.draft().date.clone();
        fill(&mut s, "Anatomia", &date);
        assert_eq!(s.submit(), Ok(()));
    }

    #[test]
    fn successful_submit_resets_draft_and_clears_error() {
        let mut s = session(Layout::Tabs);
        fill(&mut s, "Farmácia", "2026-10-20");
        assert!(s.submit().is_err());
        assert!(s.error().is_some());

        s.set_field(DraftField::Date, "2026-10-22");
        assert_eq!(s.submit(), Ok(()));

        assert_eq!(s.error(), None);
        assert_eq!(s.draft(), &ReservationDraft::default());
        assert_eq!(s.reservations().len(), 1);
    }

    #[test]
    fn rejected_submit_keeps_the_draft_for_correction() {
        let mut s = session(Layout::Tabs);
        fill(&mut s, "Farmácia", "2026-10-20");
        let before = s.draft().clone();

        let err = s.submit().unwrap_err();

        assert!(matches!(err, RejectionReason::LeadTimeViolation { .. }));
        assert_eq!(s.error(), Some(&err));
        assert_eq!(s.draft(), &before);
        assert!(s.reservations().is_empty());
    }

    #[test]
    fn set_field_by_name_uses_form_names() {
        let mut s = session(Layout::Tabs);
        s.set_field_by_name("qtdStudents", "12").unwrap();
        assert_eq!(s.draft().qtd_students, "12");
        assert!(s.set_field_by_name("nope", "x").is_err());
    }

    #[test]
    fn tabs_show_one_view_and_panels_show_both() {
        let mut tabs = session(Layout::Tabs);
        assert_eq!(tabs.visible_views(), &[ViewMode::Entry]);
        tabs.select_view(ViewMode::Listing);
        assert_eq!(tabs.visible_views(), &[ViewMode::Listing]);

        let mut panels = session(Layout::Panels);
        panels.select_view(ViewMode::Listing);
        assert_eq!(panels.visible_views(), &[ViewMode::Entry, ViewMode::Listing]);
    }

    #[test]
    fn filter_input_narrows_rows_but_not_the_report() {
        let mut s = session(Layout::Tabs);
        fill(&mut s, "Farmácia", "2026-10-22");
        s.submit().unwrap();
        fill(&mut s, "Anatomia", "2026-10-23");
        s.submit().unwrap();

        s.apply_filter_input("2026-10-23").unwrap();
        let rows = s.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].lab, "Anatomia");
        assert!(s.report().contains("Laboratório: Farmácia"));

        assert!(s.apply_filter_input("tomorrow").is_err());
        assert_eq!(s.filter(), NaiveDate::from_ymd_opt(2026, 10, 23));

        s.apply_filter_input("").unwrap();
        assert_eq!(s.rows().len(), 2);

        s.set_filter(NaiveDate::from_ymd_opt(2026, 10, 24));
        assert!(s.rows().is_empty());
    }
}
