//! Slot metrics: pixel geometry to/from quantized time slots for one column.
//!
//! The container wrappers consume the [`SlotMetrics`] trait read-only; host
//! views with their own grid math implement it themselves.
//! [`TimeColumnMetrics`] is the stock implementation for a uniform day
//! column.

use chrono::{DateTime, Duration, Local, NaiveDate};
use egui::{Pos2, Rect};

use crate::utils::date::{max_date, min_date};

/// A quantized time range plus its vertical geometry within the column.
/// `top` and `height` are percentages of the column height.
#[derive(Clone, Debug, PartialEq)]
pub struct SlotRange {
    pub start_date: DateTime<Local>,
    pub end_date: DateTime<Local>,
    pub top: f32,
    pub height: f32,
}

/// Read-only geometry/time mapping for one grid column.
#[cfg_attr(test, mockall::automock)]
pub trait SlotMetrics {
    /// The slot nearest to a pixel point within the column bounds.
    fn closest_slot_from_point(&self, point: Pos2, bounds: Rect) -> DateTime<Local>;

    /// Quantize an instant to its slot, then step by `offset_slots`.
    fn closest_slot_from_date(&self, date: DateTime<Local>, offset_slots: i32)
        -> DateTime<Local>;

    /// The slot boundary one step after `date`'s slot.
    fn next_slot(&self, date: DateTime<Local>) -> DateTime<Local>;

    /// Range plus pixel-percent geometry. `ignore_min`/`ignore_max` skip
    /// clamping to the column's day window at the respective end.
    fn get_range(
        &self,
        start: DateTime<Local>,
        end: DateTime<Local>,
        ignore_min: bool,
        ignore_max: bool,
    ) -> SlotRange;

    /// True when the instant lies before this column's visible day start.
    fn starts_before_day(&self, date: DateTime<Local>) -> bool;

    /// True when the instant lies after this column's visible day end.
    fn starts_after_day(&self, date: DateTime<Local>) -> bool;
}

/// Metrics for a single uniform day column: a fixed time window divided into
/// equal slots of `slot_interval` minutes.
#[derive(Clone, Debug)]
pub struct TimeColumnMetrics {
    day_start: DateTime<Local>,
    day_end: DateTime<Local>,
    slot_interval: i64,
}

impl TimeColumnMetrics {
    /// Full-day column (midnight to midnight).
    pub fn new(day: NaiveDate, slot_interval: i64) -> Self {
        let day_start = day
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_local_timezone(Local)
            .unwrap();
        Self::with_window(day_start, day_start + Duration::days(1), slot_interval)
    }

    /// Column showing only part of a day (e.g. business hours).
    pub fn with_window(
        day_start: DateTime<Local>,
        day_end: DateTime<Local>,
        slot_interval: i64,
    ) -> Self {
        debug_assert!(day_end > day_start);
        debug_assert!(slot_interval > 0);
        Self {
            day_start,
            day_end,
            slot_interval: slot_interval.max(1),
        }
    }

    pub fn day_start(&self) -> DateTime<Local> {
        self.day_start
    }

    pub fn day_end(&self) -> DateTime<Local> {
        self.day_end
    }

    fn total_minutes(&self) -> i64 {
        (self.day_end - self.day_start).num_minutes().max(1)
    }

    fn slot_count(&self) -> i64 {
        self.total_minutes() / self.slot_interval
    }

    fn slot_at(&self, index: i64) -> DateTime<Local> {
        let index = index.clamp(0, self.slot_count());
        self.day_start + Duration::minutes(index * self.slot_interval)
    }

    fn minutes_from_day_start(&self, date: DateTime<Local>) -> f32 {
        (date - self.day_start).num_minutes() as f32
    }
}

impl SlotMetrics for TimeColumnMetrics {
    fn closest_slot_from_point(&self, point: Pos2, bounds: Rect) -> DateTime<Local> {
        let fraction = ((point.y - bounds.top()) / bounds.height().max(1.0)).clamp(0.0, 1.0);
        let minutes = fraction * self.total_minutes() as f32;
        // Nearest boundary, so half-slot drags already snap forward.
        let index = (minutes / self.slot_interval as f32).round() as i64;
        self.slot_at(index)
    }

    fn closest_slot_from_date(
        &self,
        date: DateTime<Local>,
        offset_slots: i32,
    ) -> DateTime<Local> {
        if date < self.day_start {
            return self.day_start;
        }
        let index = (date - self.day_start).num_minutes() / self.slot_interval;
        self.slot_at(index + offset_slots as i64)
    }

    fn next_slot(&self, date: DateTime<Local>) -> DateTime<Local> {
        self.closest_slot_from_date(date, 1)
    }

    fn get_range(
        &self,
        start: DateTime<Local>,
        end: DateTime<Local>,
        ignore_min: bool,
        ignore_max: bool,
    ) -> SlotRange {
        let start_date = if ignore_min {
            start
        } else {
            min_date(self.day_end, max_date(self.day_start, start))
        };
        let end_date = if ignore_max {
            end
        } else {
            min_date(self.day_end, max_date(self.day_start, end))
        };

        let total = self.total_minutes() as f32;
        let top = self.minutes_from_day_start(start_date) / total * 100.0;
        let height = self.minutes_from_day_start(end_date) / total * 100.0 - top;
        SlotRange {
            start_date,
            end_date,
            top,
            height,
        }
    }

    fn starts_before_day(&self, date: DateTime<Local>) -> bool {
        date < self.day_start
    }

    fn starts_after_day(&self, date: DateTime<Local>) -> bool {
        date > self.day_end
    }
}
