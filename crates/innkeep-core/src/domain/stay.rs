//! Values derived from a stay's date range.

use chrono::NaiveDate;

/// Nights between check-in and check-out. Zero or negative for inverted ranges.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

/// `nights * price_per_night`.
pub fn total_price(price_per_night: f64, check_in: NaiveDate, check_out: NaiveDate) -> f64 {
    nights_between(check_in, check_out) as f64 * price_per_night
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusSeverity {
    Default,
    Success,
    Primary,
    Warning,
}

/// Reservation status bucket, derived from today relative to the stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    Completed,
    InProgress,
    Upcoming,
    Pending,
}

impl ReservationStatus {
    /// Rules are evaluated in order; the last bucket catches the rest.
    ///
    /// The only combination that reaches `Pending` is the check-out day of a
    /// stay that began earlier (`check_in < today == check_out`).
    pub fn derive(today: NaiveDate, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        if check_out < today {
            ReservationStatus::Completed
        } else if check_in == today || (check_in < today && check_out > today) {
            ReservationStatus::InProgress
        } else if check_in > today {
            ReservationStatus::Upcoming
        } else {
            ReservationStatus::Pending
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReservationStatus::Completed => "Completed",
            ReservationStatus::InProgress => "In Progress",
            ReservationStatus::Upcoming => "Upcoming",
            ReservationStatus::Pending => "Pending",
        }
    }

    pub fn severity(&self) -> StatusSeverity {
        match self {
            ReservationStatus::Completed => StatusSeverity::Default,
            ReservationStatus::InProgress => StatusSeverity::Success,
            ReservationStatus::Upcoming => StatusSeverity::Primary,
            ReservationStatus::Pending => StatusSeverity::Warning,
        }
    }

    pub fn can_cancel(&self) -> bool {
        matches!(
            self,
            ReservationStatus::Upcoming | ReservationStatus::Pending
        )
    }
}
