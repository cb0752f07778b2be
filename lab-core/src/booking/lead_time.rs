use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::RejectionReason;

pub const DEFAULT_LEAD_TIME_DAYS: u32 = 2;

/// Minimum number of calendar days between today and a reservation date.
///
/// The same offset drives both the submit-time check and the date the form
/// is pre-filled with, so a freshly opened form always holds an acceptable
/// date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadTimeRule {
    pub days: u32,
}

impl Default for LeadTimeRule {
    fn default() -> Self {
        Self::new(DEFAULT_LEAD_TIME_DAYS)
    }
}

impl LeadTimeRule {
    pub const fn new(days: u32) -> Self {
        Self { days }
    }

    /// `today + days`, saturating at the last representable date.
    pub fn earliest_date(
        &self,
        today: NaiveDate,
    ) -> NaiveDate {
        today
            .checked_add_days(Days::new(u64::from(self.days)))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Accepts `date` when it is on or after [`earliest_date`](Self::earliest_date).
    pub fn check(
        &self,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<(), RejectionReason> {
        let earliest = self.earliest_date(today);
        if date < earliest {
            return Err(RejectionReason::LeadTimeViolation {
                days: self.days,
                earliest,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ymd(
        y: i32,
        m: u32,
        d: u32,
    ) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn earliest_date_crosses_month_and_year_boundaries() {
        let rule = LeadTimeRule::default();
        assert_eq!(rule.earliest_date(ymd(2026, 1, 30)), ymd(2026, 2, 1));
        assert_eq!(rule.earliest_date(ymd(2026, 12, 31)), ymd(2027, 1, 2));
    }

    #[test]
    fn check_boundary_is_inclusive() {
        let rule = LeadTimeRule::default();
        let today = ymd(2026, 10, 19);

        assert!(rule.check(ymd(2026, 10, 21), today).is_ok());
        assert!(rule.check(ymd(2026, 11, 1), today).is_ok());
        assert_eq!(
            rule.check(ymd(2026, 10, 20), today),
            Err(RejectionReason::LeadTimeViolation {
                days: 2,
                earliest: ymd(2026, 10, 21)
            })
        );
    }

    #[test]
    fn past_dates_and_today_are_rejected() {
        let rule = LeadTimeRule::default();
        let today = ymd(2026, 10, 19);

        assert!(rule.check(today, today).is_err());
        assert!(rule.check(ymd(2025, 1, 1), today).is_err());
    }

    #[test]
    fn zero_day_rule_accepts_today() {
        let rule = LeadTimeRule::new(0);
        let today = ymd(2026, 10, 19);
        assert!(rule.check(today, today).is_ok());
    }
}
