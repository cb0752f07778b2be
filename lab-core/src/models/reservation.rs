use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Lab;

/// An accepted booking of one lab for one calendar date.
///
/// Only [`ReservationBook`](crate::ReservationBook) creates these, and it never
/// hands out mutable access once a reservation is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub lab: Lab,
    pub date: NaiveDate,
    pub professor: String,
    pub discipline: String,
    pub qtd_students: u32,
    pub telephone: String,

    // Optional, may be empty
    pub materials: String,
    pub observations: String,
}

impl Reservation {
    /// True when this reservation occupies `lab` on `date`.
    pub fn occupies(
        &self,
        lab: Lab,
        date: NaiveDate,
    ) -> bool {
        self.lab == lab && self.date == date
    }
}
