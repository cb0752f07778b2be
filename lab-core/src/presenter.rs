//! Read-only projections of the reservation book for the listing view.

use chrono::NaiveDate;

use crate::{
    RejectionReason,
    models::{DATE_FORMAT, Reservation},
};

/// Column titles of the listing table, in [`ReservationRow::cells`] order.
pub const COLUMN_HEADERS: [&str; 7] = [
    "Lab",
    "Date",
    "Professor",
    "Telephone",
    "Discipline",
    "Qty",
    "Materials",
];

/// One table row, every cell already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRow {
    pub lab: String,
    pub date: String,
    pub professor: String,
    pub telephone: String,
    pub discipline: String,
    pub qtd: String,
    pub materials: String,
}

impl ReservationRow {
    pub fn cells(&self) -> [&str; 7] {
        [
            &self.lab,
            &self.date,
            &self.professor,
            &self.telephone,
            &self.discipline,
            &self.qtd,
            &self.materials,
        ]
    }
}

impl From<&Reservation> for ReservationRow {
    fn from(r: &Reservation) -> Self {
        Self {
            lab: r.lab.to_string(),
            date: r.date.format(DATE_FORMAT).to_string(),
            professor: r.professor.clone(),
            telephone: r.telephone.clone(),
            discipline: r.discipline.clone(),
            qtd: r.qtd_students.to_string(),
            materials: r.materials.clone(),
        }
    }
}

/// Reservations on `date`, or all of them when no date is given, in stored order.
pub fn filter_by_date(
    reservations: &[Reservation],
    date: Option<NaiveDate>,
) -> impl Iterator<Item = &Reservation> {
    reservations
        .iter()
        .filter(move |r| date.is_none_or(|d| r.date == d))
}

pub fn rows(
    reservations: &[Reservation],
    date: Option<NaiveDate>,
) -> Vec<ReservationRow> {
    filter_by_date(reservations, date)
        .map(ReservationRow::from)
        .collect()
}

/// Parses the listing's date filter box. Blank input clears the filter.
pub fn parse_filter_date(input: &str) -> Result<Option<NaiveDate>, RejectionReason> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(Some)
        .map_err(|_| RejectionReason::InvalidDate(input.to_string()))
}
