// Date utility functions
// Pure helpers used by slot metrics and gesture computations

use chrono::{DateTime, Local};

pub fn is_same_day(date1: DateTime<Local>, date2: DateTime<Local>) -> bool {
    date1.date_naive() == date2.date_naive()
}

pub fn start_of_day(date: DateTime<Local>) -> DateTime<Local> {
    date.date_naive()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_local_timezone(date.timezone())
        .unwrap()
}

pub fn end_of_day(date: DateTime<Local>) -> DateTime<Local> {
    date.date_naive()
        .and_hms_opt(23, 59, 59)
        .unwrap()
        .and_local_timezone(date.timezone())
        .unwrap()
}

/// Earlier of two instants.
pub fn min_date(a: DateTime<Local>, b: DateTime<Local>) -> DateTime<Local> {
    if a <= b {
        a
    } else {
        b
    }
}

/// Later of two instants.
pub fn max_date(a: DateTime<Local>, b: DateTime<Local>) -> DateTime<Local> {
    if a >= b {
        a
    } else {
        b
    }
}

/// Inclusive range containment.
pub fn in_range(date: DateTime<Local>, start: DateTime<Local>, end: DateTime<Local>) -> bool {
    start <= date && date <= end
}
