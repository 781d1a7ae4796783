//! Container wrapper: one selectable region of the grid (a resource column
//! or a day column), translating selection lifecycle events into semantic
//! move/resize preview updates and a final commit or cancel.

use chrono::{DateTime, Local};
use egui::{Pos2, Rect};

use super::context::{
    ActionKind, DndContext, DragAndDropAction, InteractionEnd, OutsideDropInfo, ResizeDirection,
};
use super::geometry::{event_rect_at, event_times, point_in_column};
use super::selection::SelectionHandler;
use super::slot_metrics::{SlotMetrics, SlotRange};
use crate::models::event::CalendarEvent;
use crate::utils::date::{max_date, min_date};

type ConstraintFn = Box<dyn FnMut(DateTime<Local>, DateTime<Local>, &CalendarEvent) -> bool>;
type NotInColumnFn = Box<dyn FnMut(&DragAndDropAction)>;

/// The ghost event for the in-progress gesture within this column:
/// a clone of the manipulated event carrying the proposed range, plus its
/// percent geometry from the slot metrics.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewState {
    pub event: CalendarEvent,
    pub top: f32,
    pub height: f32,
}

/// Per-column owner of the gesture-to-geometry translation.
///
/// Each column holds its own wrapper (previews never leak across columns);
/// all wrappers share one [`DndContext`]. The host updates `set_bounds` and
/// `set_event_rects` every frame from its rendered geometry, then routes
/// selection events here via [`SelectionHandler::dispatch`].
pub struct EventContainerWrapper<M: SlotMetrics> {
    context: DndContext,
    slot_metrics: M,
    resource: Option<i64>,
    bounds: Rect,
    event_rects: Vec<Rect>,
    preview: Option<PreviewState>,
    event_offset_top: f32,
    is_being_dragged: bool,
    on_moving: Option<ConstraintFn>,
    on_resizing: Option<ConstraintFn>,
    handle_not_point_in_column: Option<NotInColumnFn>,
}

impl<M: SlotMetrics> EventContainerWrapper<M> {
    pub fn new(context: DndContext, slot_metrics: M) -> Self {
        Self {
            context,
            slot_metrics,
            resource: None,
            bounds: Rect::NOTHING,
            event_rects: Vec::new(),
            preview: None,
            event_offset_top: 0.0,
            is_being_dragged: false,
            on_moving: None,
            on_resizing: None,
            handle_not_point_in_column: None,
        }
    }

    /// Bind this container to a resource column.
    pub fn with_resource(mut self, resource_id: i64) -> Self {
        self.resource = Some(resource_id);
        self
    }

    /// Constraint hook for move previews. Returning false suppresses the
    /// update for the current pointer frame; the gesture stays live.
    pub fn on_moving(
        mut self,
        callback: impl FnMut(DateTime<Local>, DateTime<Local>, &CalendarEvent) -> bool + 'static,
    ) -> Self {
        self.on_moving = Some(Box::new(callback));
        self
    }

    /// Constraint hook for resize previews; same contract as `on_moving`.
    pub fn on_resizing(
        mut self,
        callback: impl FnMut(DateTime<Local>, DateTime<Local>, &CalendarEvent) -> bool + 'static,
    ) -> Self {
        self.on_resizing = Some(Box::new(callback));
        self
    }

    /// Override for moves that leave this column (the default resets the
    /// preview, keeping cross-column behavior with the host).
    pub fn handle_not_point_in_column(
        mut self,
        callback: impl FnMut(&DragAndDropAction) + 'static,
    ) -> Self {
        self.handle_not_point_in_column = Some(Box::new(callback));
        self
    }

    /// Set this column's pixel bounds for the current frame.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Register the rects of the events rendered in this column this frame,
    /// in paint order.
    pub fn set_event_rects(&mut self, rects: Vec<Rect>) {
        self.event_rects = rects;
    }

    pub fn resource(&self) -> Option<i64> {
        self.resource
    }

    pub fn slot_metrics(&self) -> &M {
        &self.slot_metrics
    }

    /// The current ghost, if a gesture is previewing in this column.
    pub fn preview(&self) -> Option<&PreviewState> {
        self.preview.as_ref()
    }

    /// Clear the ghost.
    pub fn reset(&mut self) {
        if self.preview.is_some() {
            self.preview = None;
        }
    }

    /// Install the proposed range as the new ghost. Idempotent: returns
    /// false without touching state when the held preview already carries
    /// the same start/end, so continuous pointer movement within one slot
    /// does not cause redundant repaints.
    pub fn update(&mut self, event: &CalendarEvent, range: SlotRange) -> bool {
        if let Some(last) = &self.preview {
            if last.event.start == range.start_date && last.event.end == range.end_date {
                return false;
            }
        }
        self.preview = Some(PreviewState {
            event: event.with_times(range.start_date, range.end_date),
            top: range.top,
            height: range.height,
        });
        true
    }

    fn handle_move(&mut self, point: Pos2) {
        if !point_in_column(self.bounds, point) {
            // A time-move must stay within its column; cross-column moves
            // belong to the host's override.
            if self.handle_not_point_in_column.is_some() {
                let action = self.context.action_snapshot();
                if let Some(handler) = self.handle_not_point_in_column.as_mut() {
                    handler(&action);
                }
            } else {
                self.reset();
            }
            return;
        }

        let Some(event) = self.context.current_event() else {
            return;
        };
        // The preview position is a delta from where the pointer first
        // gripped the event, so subtract that grip offset before mapping.
        let grip = Pos2::new(point.x, point.y - self.event_offset_top);
        let new_start = self.slot_metrics.closest_slot_from_point(grip, self.bounds);
        let duration = event_times(&event).duration;
        let new_end = new_start + duration;

        if let Some(on_moving) = self.on_moving.as_mut() {
            if !on_moving(new_start, new_end, &event) {
                return;
            }
        }

        let range = self.slot_metrics.get_range(new_start, new_end, false, true);
        self.update(&event, range);
    }

    fn handle_resize(&mut self, point: Pos2) {
        let action = self.context.action_snapshot();
        let Some(event) = action.event else {
            return;
        };
        let new_time = self.slot_metrics.closest_slot_from_point(point, self.bounds);

        let times = event_times(&event);
        let mut start = times.start;
        let mut end = times.end;
        match action.direction {
            Some(ResizeDirection::Up) => {
                // The start may never cross the end; one slot always remains.
                start = min_date(
                    new_time,
                    self.slot_metrics.closest_slot_from_date(times.end, -1),
                );
            }
            Some(ResizeDirection::Down) => {
                end = max_date(
                    new_time,
                    self.slot_metrics.closest_slot_from_date(times.start, 0),
                );
            }
            _ => {}
        }

        if let Some(on_resizing) = self.on_resizing.as_mut() {
            if !on_resizing(start, end, &event) {
                return;
            }
        }

        let range = self.slot_metrics.get_range(start, end, false, false);
        self.update(&event, range);
    }

    fn handle_drop_from_outside(&mut self, point: Pos2) {
        let start = self.slot_metrics.closest_slot_from_point(point, self.bounds);
        let end = self.slot_metrics.next_slot(start);
        self.context.on_drop_from_outside(OutsideDropInfo {
            start,
            end,
            all_day: false,
            resource: self.resource,
        });
    }

    fn handle_interaction_end(&mut self) {
        let Some(preview) = self.preview.take() else {
            return;
        };
        self.is_being_dragged = false;
        self.context.on_end(Some(InteractionEnd {
            start: preview.event.start,
            end: preview.event.end,
            resource_id: self.resource,
        }));
    }
}

impl<M: SlotMetrics> SelectionHandler for EventContainerWrapper<M> {
    fn on_before_select(&mut self, point: Pos2) -> bool {
        let action = self.context.action_snapshot();
        match action.action {
            ActionKind::None => false,
            ActionKind::Resize => point_in_column(self.bounds, point),
            ActionKind::Move => {
                // Remember the vertical offset between the pointer and the
                // event's top edge; move previews are placed relative to it.
                match event_rect_at(&self.event_rects, point) {
                    Some(rect) => {
                        self.event_offset_top = point.y - rect.top();
                        true
                    }
                    None => false,
                }
            }
        }
    }

    fn on_select_start(&mut self) {
        self.is_being_dragged = true;
        self.context.on_start();
    }

    fn on_selecting(&mut self, point: Pos2) {
        match self.context.action_snapshot().action {
            ActionKind::Move => self.handle_move(point),
            ActionKind::Resize => self.handle_resize(point),
            ActionKind::None => {}
        }
    }

    fn on_select(&mut self, point: Pos2) {
        self.is_being_dragged = false;
        if self.preview.is_none() || !point_in_column(self.bounds, point) {
            return;
        }
        self.handle_interaction_end();
    }

    fn on_click(&mut self, _point: Pos2) {
        if self.is_being_dragged {
            self.reset();
        }
        self.is_being_dragged = false;
        self.context.on_end(None);
    }

    fn on_reset(&mut self) {
        self.reset();
        self.is_being_dragged = false;
        self.context.on_end(None);
    }

    fn on_drop_from_outside(&mut self, point: Pos2) {
        if !self.context.allows_drop_from_outside() {
            return;
        }
        if !point_in_column(self.bounds, point) {
            return;
        }
        self.handle_drop_from_outside(point);
    }

    fn on_drag_over(&mut self, point: Pos2) {
        // Treated as a continuous drop preview while an outside item hovers.
        if self.context.drag_from_outside_item().is_none() {
            return;
        }
        self.handle_drop_from_outside(point);
    }
}
