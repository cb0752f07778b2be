use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::DATE_FORMAT;

/// Returned by [`ReservationDraft::set_field`] for a name that is not a form field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown reservation field '{0}'")]
pub struct UnknownFieldError(pub String);

/// One input of the reservation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Lab,
    Date,
    Professor,
    Discipline,
    QtdStudents,
    Telephone,
    Materials,
    Observations,
}

impl DraftField {
    /// Form order. Required-field checks report the first empty field in this order.
    pub const ALL: [DraftField; 8] = [
        DraftField::Lab,
        DraftField::Date,
        DraftField::Professor,
        DraftField::Discipline,
        DraftField::QtdStudents,
        DraftField::Telephone,
        DraftField::Materials,
        DraftField::Observations,
    ];

    /// Form field name, as accepted by [`ReservationDraft::set_field`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Lab => "lab",
            Self::Date => "date",
            Self::Professor => "professor",
            Self::Discipline => "discipline",
            Self::QtdStudents => "qtdStudents",
            Self::Telephone => "telephone",
            Self::Materials => "materials",
            Self::Observations => "observations",
        }
    }

    /// Human-readable label used in the form and in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Lab => "Laboratory",
            Self::Date => "Date",
            Self::Professor => "Professor",
            Self::Discipline => "Discipline",
            Self::QtdStudents => "Number of students",
            Self::Telephone => "Telephone",
            Self::Materials => "Materials needed",
            Self::Observations => "Observations",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Self::Materials | Self::Observations)
    }
}

impl fmt::Display for DraftField {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DraftField {
    type Err = UnknownFieldError;

    /// Accepts the form name (`qtdStudents`) and its snake_case spelling (`qtd_students`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "lab" => Ok(Self::Lab),
            "date" => Ok(Self::Date),
            "professor" => Ok(Self::Professor),
            "discipline" => Ok(Self::Discipline),
            "qtdStudents" | "qtd_students" => Ok(Self::QtdStudents),
            "telephone" => Ok(Self::Telephone),
            "materials" => Ok(Self::Materials),
            "observations" => Ok(Self::Observations),
            other => Err(UnknownFieldError(other.to_string())),
        }
    }
}

/// The in-progress, unvalidated contents of the reservation form.
///
/// Every field is kept as the raw text the user typed; parsing happens only
/// when the draft is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDraft {
    pub lab: String,
    pub date: String,
    pub professor: String,
    pub discipline: String,
    pub qtd_students: String,
    pub telephone: String,
    pub materials: String,
    pub observations: String,
}

impl ReservationDraft {
    /// An empty draft with only the date filled in.
    pub fn with_date(date: NaiveDate) -> Self {
        Self {
            date: date.format(DATE_FORMAT).to_string(),
            ..Default::default()
        }
    }

    pub fn get(
        &self,
        field: DraftField,
    ) -> &str {
        match field {
            DraftField::Lab => &self.lab,
            DraftField::Date => &self.date,
            DraftField::Professor => &self.professor,
            DraftField::Discipline => &self.discipline,
            DraftField::QtdStudents => &self.qtd_students,
            DraftField::Telephone => &self.telephone,
            DraftField::Materials => &self.materials,
            DraftField::Observations => &self.observations,
        }
    }

    /// Replaces one field, leaving the others untouched.
    pub fn set(
        &mut self,
        field: DraftField,
        value: impl Into<String>,
    ) {
        let slot = match field {
            DraftField::Lab => &mut self.lab,
            DraftField::Date => &mut self.date,
            DraftField::Professor => &mut self.professor,
            DraftField::Discipline => &mut self.discipline,
            DraftField::QtdStudents => &mut self.qtd_students,
            DraftField::Telephone => &mut self.telephone,
            DraftField::Materials => &mut self.materials,
            DraftField::Observations => &mut self.observations,
        };
        *slot = value.into();
    }

    /// Like [`set`](Self::set), addressing the field by its form name.
    pub fn set_field(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), UnknownFieldError> {
        let field: DraftField = name.parse()?;
        self.set(field, value);
        Ok(())
    }

    /// The first required field left blank, in form order.
    pub fn first_missing(&self) -> Option<DraftField> {
        DraftField::ALL
            .into_iter()
            .find(|field| field.is_required() && self.get(*field).trim().is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn set_replaces_only_the_named_field() {
        let mut draft = ReservationDraft {
            professor: "Dr. Silva".to_string(),
            ..Default::default()
        };

        draft.set(DraftField::Discipline, "Bio");

        assert_eq!(draft.discipline, "Bio");
        assert_eq!(draft.professor, "Dr. Silva");
        assert_eq!(draft.lab, "");
    }

    #[test]
    fn set_field_accepts_form_and_snake_case_names() {
        let mut draft = ReservationDraft::default();

        draft.set_field("qtdStudents", "20").unwrap();
        assert_eq!(draft.qtd_students, "20");

        draft.set_field("qtd_students", "25").unwrap();
        assert_eq!(draft.qtd_students, "25");
    }

    #[test]
    fn set_field_rejects_unknown_names_without_touching_the_draft() {
        let mut draft = ReservationDraft::default();

        let err = draft.set_field("room", "Anatomia").unwrap_err();

        assert_eq!(err, UnknownFieldError("room".to_string()));
        assert_eq!(draft, ReservationDraft::default());
    }

    #[test]
    fn set_accepts_empty_values_transiently() {
        let mut draft = ReservationDraft::with_date(NaiveDate::from_ymd_opt(2026, 3, 4).unwrap());
        assert_eq!(draft.date, "2026-03-04");

        draft.set(DraftField::Date, "");
        assert_eq!(draft.date, "");
    }

    #[test]
    fn first_missing_skips_optional_fields() {
        let mut draft = ReservationDraft::default();
        assert_eq!(draft.first_missing(), Some(DraftField::Lab));

        for field in DraftField::ALL.into_iter().filter(DraftField::is_required) {
            draft.set(field, "x");
        }
        assert_eq!(draft.first_missing(), None);

        draft.set(DraftField::Professor, "   ");
        assert_eq!(draft.first_missing(), Some(DraftField::Professor));
    }

    #[test]
    fn every_field_name_round_trips_through_from_str() {
        for field in DraftField::ALL {
            assert_eq!(field.name().parse::<DraftField>(), Ok(field));
        }
    }
}
