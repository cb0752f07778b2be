use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::{debug, info, warn};

use super::{LeadTimeRule, RejectionReason};
use crate::models::{DATE_FORMAT, Lab, Reservation, ReservationDraft};

static TELEPHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("telephone pattern is valid"));

/// Insertion-ordered collection of accepted reservations, unique on (lab, date).
///
/// Lookups are linear scans; a session only ever holds a handful of entries.
#[derive(Debug, Clone, Default)]
pub struct ReservationBook {
    rule: LeadTimeRule,
    reservations: Vec<Reservation>,
}

impl ReservationBook {
    pub fn new(rule: LeadTimeRule) -> Self {
        Self {
            rule,
            reservations: Vec::new(),
        }
    }

    /// Stored reservations, oldest first.
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    pub fn is_booked(
        &self,
        lab: Lab,
        date: NaiveDate,
    ) -> bool {
        self.reservations.iter().any(|r| r.occupies(lab, date))
    }

    /// Runs every acceptance rule against `draft` without storing anything.
    ///
    /// # Errors
    ///
    /// The first [`RejectionReason`] hit, checking field contents, then lead
    /// time, then double-booking.
    pub fn validate(
        &self,
        draft: &ReservationDraft,
        today: NaiveDate,
    ) -> Result<Reservation, RejectionReason> {
        let reservation = parse_draft(draft)?;
        self.rule.check(reservation.date, today)?;

        if self.is_booked(reservation.lab, reservation.date) {
            return Err(RejectionReason::DoubleBooking {
                lab: reservation.lab,
                date: reservation.date,
            });
        }

        Ok(reservation)
    }

    /// Validates `draft` and appends it on success.
    ///
    /// A rejected draft leaves the book exactly as it was.
    pub fn submit(
        &mut self,
        draft: &ReservationDraft,
        today: NaiveDate,
    ) -> Result<&Reservation, RejectionReason> {
        let reservation = match self.validate(draft, today) {
            Ok(r) => r,
            Err(reason) => {
                warn!(%reason, lab = %draft.lab, date = %draft.date, "reservation rejected");
                return Err(reason);
            }
        };

        info!(
            lab = %reservation.lab,
            date = %reservation.date.format(DATE_FORMAT),
            professor = %reservation.professor,
            "reservation accepted"
        );
        self.reservations.push(reservation);
        debug!(count = self.reservations.len(), "reservation book updated");

        Ok(&self.reservations[self.reservations.len() - 1])
    }
}

/// Turns the raw form text into a typed reservation, or names the first bad field.
fn parse_draft(draft: &ReservationDraft) -> Result<Reservation, RejectionReason> {
    if let Some(field) = draft.first_missing() {
        return Err(RejectionReason::MissingField(field));
    }

    let lab = Lab::parse(&draft.lab).ok_or_else(|| RejectionReason::UnknownLab(draft.lab.clone()))?;

    let date = NaiveDate::parse_from_str(draft.date.trim(), DATE_FORMAT)
        .map_err(|_| RejectionReason::InvalidDate(draft.date.clone()))?;

    let qtd_students = draft
        .qtd_students
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| RejectionReason::InvalidHeadcount(draft.qtd_students.clone()))?;

    let telephone = draft.telephone.trim();
    if !TELEPHONE.is_match(telephone) {
        return Err(RejectionReason::InvalidTelephone(draft.telephone.clone()));
    }

    Ok(Reservation {
        lab,
        date,
        professor: draft.professor.trim().to_string(),
        discipline: draft.discipline.trim().to_string(),
        qtd_students,
        telephone: telephone.to_string(),
        materials: draft.materials.clone(),
        observations: draft.observations.clone(),
    })
}
