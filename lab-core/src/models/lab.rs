use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a name does not match any room in [`Lab::ALL`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown laboratory '{0}'")]
pub struct UnknownLabError(pub String);

/// The closed set of bookable laboratory rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Lab {
    Informatica1,
    Informatica2,
    Informatica3,
    Informatica4,
    Farmacia,
    Enfermagem,
    Fisioterapia,
    EducacaoFisica,
    Multidisciplinar,
    Microscopia,
    Anatomia,
}

impl Lab {
    /// Every room, in the order the form lists them.
    pub const ALL: [Lab; 11] = [
        Lab::Informatica1,
        Lab::Informatica2,
        Lab::Informatica3,
        Lab::Informatica4,
        Lab::Farmacia,
        Lab::Enfermagem,
        Lab::Fisioterapia,
        Lab::EducacaoFisica,
        Lab::Multidisciplinar,
        Lab::Microscopia,
        Lab::Anatomia,
    ];

    /// Display name, also the value stored in forms, CSV files and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Informatica1 => "Informática 1",
            Self::Informatica2 => "Informática 2",
            Self::Informatica3 => "Informática 3",
            Self::Informatica4 => "Informática 4",
            Self::Farmacia => "Farmácia",
            Self::Enfermagem => "Enfermagem",
            Self::Fisioterapia => "Fisioterapia",
            Self::EducacaoFisica => "Educação Física",
            Self::Multidisciplinar => "Multidisciplinar",
            Self::Microscopia => "Microscopia",
            Self::Anatomia => "Anatomia",
        }
    }

    /// Matches a display name, ignoring surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|lab| lab.as_str() == s)
    }
}

impl fmt::Display for Lab {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lab {
    type Err = UnknownLabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownLabError(s.to_string()))
    }
}

impl TryFrom<String> for Lab {
    type Error = UnknownLabError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Lab> for &'static str {
    fn from(lab: Lab) -> Self {
        lab.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn catalogue_has_eleven_distinct_rooms() {
        let mut names: Vec<_> = Lab::ALL.iter().map(Lab::as_str).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 11);
    }

    #[test]
    fn parse_matches_every_display_name() {
        for lab in Lab::ALL {
            assert_eq!(Lab::parse(lab.as_str()), Some(lab));
        }
    }

    #[test]
    fn parse_trims_whitespace_but_keeps_accents_significant() {
        assert_eq!(Lab::parse("  Farmácia "), Some(Lab::Farmacia));
        assert_eq!(Lab::parse("Farmacia"), None);
        assert_eq!(Lab::parse(""), None);
    }

    #[test]
    fn from_str_reports_the_offending_name() {
        let err = "Química".parse::<Lab>().unwrap_err();
        assert_eq!(err, UnknownLabError("Química".to_string()));
        assert_eq!(err.to_string(), "unknown laboratory 'Química'");
    }
}
