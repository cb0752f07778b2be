use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{DraftField, Lab};

/// Why a draft was not accepted. Every variant is recoverable: the form is
/// shown again with the message inline and the store is left untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RejectionReason {
    #[error("{} is required.", .0.label())]
    MissingField(DraftField),

    #[error("Unknown laboratory '{0}'.")]
    UnknownLab(String),

    #[error("Invalid date '{0}'; expected YYYY-MM-DD.")]
    InvalidDate(String),

    #[error("Number of students must be a positive whole number, got '{0}'.")]
    InvalidHeadcount(String),

    #[error("Telephone must contain digits only, got '{0}'.")]
    InvalidTelephone(String),

    /// The requested date falls before `earliest`.
    #[error("Reservations must be made at least {} in advance.", day_count(.days))]
    LeadTimeViolation { days: u32, earliest: NaiveDate },

    #[error("A reservation already exists for this lab on this date.")]
    DoubleBooking { lab: Lab, date: NaiveDate },
}

fn day_count(days: &u32) -> String {
    match days {
        1 => "1 day".to_string(),
        n => format!("{n} days"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn messages_match_the_form_wording() {
        let date = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();

        assert_eq!(
            RejectionReason::LeadTimeViolation {
                days: 2,
                earliest: date
            }
            .to_string(),
            "Reservations must be made at least 2 days in advance."
        );
        assert_eq!(
            RejectionReason::DoubleBooking {
                lab: Lab::Anatomia,
                date
            }
            .to_string(),
            "A reservation already exists for this lab on this date."
        );
        assert_eq!(
            RejectionReason::LeadTimeViolation {
                days: 1,
                earliest: date
            }
            .to_string(),
            "Reservations must be made at least 1 day in advance."
        );
        assert_eq!(
            RejectionReason::MissingField(DraftField::QtdStudents).to_string(),
            "Number of students is required."
        );
    }
}
