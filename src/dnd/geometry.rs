//! Pixel-to-column containment and event time extraction.
//!
//! Pure functions shared by the container wrappers; no state.

use chrono::{DateTime, Duration, Local};
use egui::{Pos2, Rect};

use crate::models::event::CalendarEvent;

/// Horizontal slop added to the right edge when testing column containment,
/// so a drag hugging the column border is not dropped between columns.
pub const COLUMN_EDGE_SLOP: f32 = 10.0;

/// Is the point inside this column's bounds for gesture purposes?
///
/// The bottom edge is intentionally open: dragging below the visible column
/// still belongs to it (the slot metrics clamp the time).
pub fn point_in_column(bounds: Rect, point: Pos2) -> bool {
    point.x > bounds.left() && point.x < bounds.right() + COLUMN_EDGE_SLOP && point.y > bounds.top()
}

/// Start, end and duration of an event as used by move computations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EventTimes {
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub duration: Duration,
}

/// Extract the effective time range of an event.
///
/// Zero-length all-day events occupy their full day so their duration
/// survives a move.
pub fn event_times(event: &CalendarEvent) -> EventTimes {
    let start = event.start;
    let mut end = event.end;
    if event.all_day && end == start {
        end += Duration::days(1);
    }
    EventTimes {
        start,
        end,
        duration: end - start,
    }
}

/// Find the event rect under the pointer among the rects rendered this
/// frame. Later rects are drawn on top, so they win.
pub fn event_rect_at(rects: &[Rect], point: Pos2) -> Option<Rect> {
    rects.iter().rev().copied().find(|rect| rect.contains(point))
}
