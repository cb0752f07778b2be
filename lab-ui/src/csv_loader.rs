//! CSV loader for batches of reservation drafts.
//!
//! ## CSV Format
//!
//! One header row, then one draft per row. Column order does **not** matter
//! (headers are matched by name) and whitespace around values is trimmed.
//!
//! | Column         | Required | Notes                                        |
//! |----------------|----------|----------------------------------------------|
//! | `lab`          | yes      | One of the eleven lab names, e.g. `Farmácia` |
//! | `date`         | yes      | `YYYY-MM-DD`                                 |
//! | `professor`    | yes      |                                              |
//! | `discipline`   | yes      |                                              |
//! | `qtd_students` | yes      | Also accepted as `qtdStudents`               |
//! | `telephone`    | yes      | Digits only                                  |
//! | `materials`    | no       | Column may be omitted                        |
//! | `observations` | no       | Column may be omitted                        |
//!
//! "Required" means the column must exist. Cell contents are not checked
//! here: every row becomes a [`ReservationDraft`] and goes through the same
//! acceptance rules as a draft typed into the form.
//!
//! ### Example
//!
//! ```csv
//! lab,date,professor,discipline,qtd_students,telephone,materials
//! Farmácia,2026-10-22,Dr. Silva,Bio,20,5551234,microscopes
//! ```
use std::{io::Read, path::Path};

use lab_core::ReservationDraft;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CsvRow {
    lab: String,
    date: String,
    professor: String,
    discipline: String,
    #[serde(alias = "qtdStudents")]
    qtd_students: String,
    telephone: String,
    #[serde(default)]
    materials: String,
    #[serde(default)]
    observations: String,
}

impl From<CsvRow> for ReservationDraft {
    fn from(row: CsvRow) -> Self {
        Self {
            lab: row.lab,
            date: row.date,
            professor: row.professor,
            discipline: row.discipline,
            qtd_students: row.qtd_students,
            telephone: row.telephone,
            materials: row.materials,
            observations: row.observations,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// Bad structure, missing column or wrong column count.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reads drafts in file order from any CSV source.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<ReservationDraft>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(reader);

    reader
        .deserialize::<CsvRow>()
        .map(|row| Ok(ReservationDraft::from(row?)))
        .collect()
}

pub fn load_from_str(input: &str) -> Result<Vec<ReservationDraft>, CsvLoadError> {
    load_from_reader(input.as_bytes())
}

pub fn load_from_file(path: &Path) -> Result<Vec<ReservationDraft>, CsvLoadError> {
    let file = std::fs::File::open(path).map_err(|source| CsvLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_reader(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FULL_CSV: &str = "\
lab,date,professor,discipline,qtd_students,telephone,materials,observations
Farmácia,2026-10-22,Dr. Silva,Bio,20,5551234,microscopes,bring gloves
";

    #[test]
    fn full_row_maps_every_column() {
        let drafts = load_from_str(FULL_CSV).expect("should parse full CSV");

        assert_eq!(
            drafts,
            vec![ReservationDraft {
                lab: "Farmácia".to_string(),
                date: "2026-10-22".to_string(),
                professor: "Dr. Silva".to_string(),
                discipline: "Bio".to_string(),
                qtd_students: "20".to_string(),
                telephone: "5551234".to_string(),
                materials: "microscopes".to_string(),
                observations: "bring gloves".to_string(),
            }]
        );
    }

    #[test]
    fn optional_columns_may_be_omitted() {
        let csv = "\
lab,date,professor,discipline,qtd_students,telephone
Anatomia,2026-10-23,Dra. Costa,Anatomia Humana,35,5559876
";
        let drafts = load_from_str(csv).expect("optional columns are optional");
        assert_eq!(drafts[0].materials, "");
        assert_eq!(drafts[0].observations, "");
    }

    #[test]
    fn column_order_and_camel_case_headcount_are_accepted() {
        let csv = "\
telephone , qtdStudents , lab , date , discipline , professor
5551234 , 12 , Microscopia , 2026-11-02 , Histologia , Dr. Lima
";
        let drafts = load_from_str(csv).expect("column order should not matter");
        assert_eq!(drafts[0].lab, "Microscopia");
        assert_eq!(drafts[0].qtd_students, "12");
        assert_eq!(drafts[0].professor, "Dr. Lima");
    }

    #[test]
    fn empty_cells_are_kept_for_the_validator() {
        let csv = "\
lab,date,professor,discipline,qtd_students,telephone
Farmácia,2026-10-22,,Bio,20,5551234
";
        let drafts = load_from_str(csv).unwrap();
        assert_eq!(drafts[0].professor, "");
    }

    #[test]
    fn missing_required_column_is_a_parse_error() {
        let csv = "lab,date,discipline,qtd_students,telephone\nFarmácia,2026-10-22,Bio,20,5551234\n";
        match load_from_str(csv).unwrap_err() {
            CsvLoadError::Parse(_) => {}
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn ragged_row_is_a_parse_error() {
        let csv = "\
lab,date,professor,discipline,qtd_students,telephone
Farmácia,2026-10-22,Dr. Silva,Bio,20
";
        assert!(matches!(load_from_str(csv), Err(CsvLoadError::Parse(_))));
    }

    #[test]
    fn header_only_and_empty_input_yield_no_drafts() {
        assert!(
            load_from_str("lab,date,professor,discipline,qtd_students,telephone\n")
                .unwrap()
                .is_empty()
        );
        assert!(load_from_str("").unwrap().is_empty());
    }
}
