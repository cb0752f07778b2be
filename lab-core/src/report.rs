//! Plain-text report of every stored reservation.
//!
//! ```text
//! Relatório de Reservas de Laboratórios
//!
//! Laboratório: Farmácia
//! Data: 2026-10-22
//! Professor: Dr. Silva
//! Disciplina: Bio
//! Materiais: microscopes
//!
//! ```
//!
//! Field values are written verbatim. A value containing a newline will break
//! the paragraph layout.

use std::fmt::Write;

use crate::models::{DATE_FORMAT, Reservation};

pub const REPORT_FILE_NAME: &str = "relatorio_reservas.txt";
pub const REPORT_MIME_TYPE: &str = "text/plain";
pub const REPORT_HEADER: &str = "Relatório de Reservas de Laboratórios";

/// One paragraph per reservation, in stored order, after a header line.
pub fn generate_report(reservations: &[Reservation]) -> String {
    let mut report = format!("{REPORT_HEADER}\n\n");

    for r in reservations {
        // Writing into a String cannot fail.
        let _ = write!(
            report,
            "Laboratório: {}\nData: {}\nProfessor: {}\nDisciplina: {}\nMateriais: {}\n\n",
            r.lab,
            r.date.format(DATE_FORMAT),
            r.professor,
            r.discipline,
            r.materials,
        );
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Lab;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn reservation(
        lab: Lab,
        professor: &str,
        materials: &str,
    ) -> Reservation {
        Reservation {
            lab,
            date: NaiveDate::from_ymd_opt(2026, 10, 22).unwrap(),
            professor: professor.to_string(),
            discipline: "Bio".to_string(),
            qtd_students: 20,
            telephone: "5551234".to_string(),
            materials: materials.to_string(),
            observations: "not in the report".to_string(),
        }
    }

    #[test]
    fn empty_book_produces_header_only() {
        assert_eq!(
            generate_report(&[]),
            "Relatório de Reservas de Laboratórios\n\n"
        );
    }

    #[test]
    fn each_reservation_becomes_one_paragraph() {
        let report = generate_report(&[
            reservation(Lab::Farmacia, "Dr. Silva", "microscopes"),
            reservation(Lab::Anatomia, "Dra. Costa", ""),
        ]);

        assert_eq!(
            report,
            "Relatório de Reservas de Laboratórios\n\n\
             Laboratório: Farmácia\n\
             Data: 2026-10-22\n\
             Professor: Dr. Silva\n\
             Disciplina: Bio\n\
             Materiais: microscopes\n\n\
             Laboratório: Anatomia\n\
             Data: 2026-10-22\n\
             Professor: Dra. Costa\n\
             Disciplina: Bio\n\
             Materiais: \n\n"
        );
    }

    #[test]
    fn values_are_not_escaped() {
        let report = generate_report(&[reservation(Lab::Farmacia, "Dr. Silva", "a\nb")]);
        assert!(report.contains("Materiais: a\nb\n\n"));
    }
}
