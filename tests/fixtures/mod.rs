// Shared fixtures for integration tests
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use calendar_dnd::dnd::context::{DndCallbacks, DndContext, DropInfo, ResizeInfo};
use calendar_dnd::dnd::TimeColumnMetrics;
use calendar_dnd::models::event::CalendarEvent;
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use egui::{Pos2, Rect, Vec2};

pub const SLOT_INTERVAL: i64 = 15;

pub fn test_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 9).unwrap()
}

pub fn at(hour: u32, min: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 3, 9, hour, min, 0).unwrap()
}

/// A 9:00-10:00 meeting, id 1.
pub fn meeting() -> CalendarEvent {
    CalendarEvent::new("Meeting", at(9, 0), at(10, 0))
        .unwrap()
        .with_id(1)
}

pub fn metrics() -> TimeColumnMetrics {
    TimeColumnMetrics::new(test_day(), SLOT_INTERVAL)
}

/// Column rect sized so one pixel equals one minute of the day.
pub fn column_bounds() -> Rect {
    Rect::from_min_size(Pos2::new(0.0, 0.0), Vec2::new(100.0, 1440.0))
}

/// Pixel y within `column_bounds` for a wall-clock time.
pub fn y_at(hour: u32, min: u32) -> f32 {
    (hour * 60 + min) as f32
}

pub fn point_at(hour: u32, min: u32) -> Pos2 {
    Pos2::new(50.0, y_at(hour, min))
}

/// Commit sinks plus a context wired to record into them.
pub struct Recording {
    pub context: DndContext,
    pub drops: Rc<RefCell<Vec<DropInfo>>>,
    pub resizes: Rc<RefCell<Vec<ResizeInfo>>>,
}

pub fn recording_context() -> Recording {
    let drops: Rc<RefCell<Vec<DropInfo>>> = Default::default();
    let resizes: Rc<RefCell<Vec<ResizeInfo>>> = Default::default();
    let drop_sink = drops.clone();
    let resize_sink = resizes.clone();
    let context = DndContext::new(DndCallbacks {
        on_event_drop: Some(Box::new(move |info| drop_sink.borrow_mut().push(info))),
        on_event_resize: Some(Box::new(move |info| resize_sink.borrow_mut().push(info))),
        ..Default::default()
    });
    Recording {
        context,
        drops,
        resizes,
    }
}
