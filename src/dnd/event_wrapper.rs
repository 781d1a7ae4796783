//! Event wrapper: decorates one rendered event with resize anchors, gesture
//! arming, and in-flight drag styling.
//!
//! The wrapper never mutates shared state directly; a pointer-down resolves
//! to one of the context transitions (`on_begin_action` for move or resize).

use egui::{CursorIcon, PointerButton, Pos2, Rect, Vec2};

use super::context::{ActionKind, DndContext, ResizeDirection};
use crate::models::event::CalendarEvent;

/// Size of an anchor hit zone along its thin axis.
pub const ANCHOR_SIZE: f32 = 8.0;

/// How the wrapped event is laid out in its view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventLayout {
    /// Row-style (date-based, horizontal): all-day ribbons, month rows.
    /// Resizes east-west.
    Date,
    /// Column-style (time-based, vertical): day/week time grids. Resizes
    /// north-south.
    Time,
}

/// Where a pointer-down came from. A mouse press must use the primary
/// button to start a gesture; touch input carries no button to check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerSource {
    Mouse(PointerButton),
    Touch,
}

/// A pointer-down on the wrapped event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    pub pos: Pos2,
    pub source: PointerSource,
}

impl PointerInput {
    pub fn mouse(pos: Pos2) -> Self {
        Self {
            pos,
            source: PointerSource::Mouse(PointerButton::Primary),
        }
    }

    pub fn mouse_button(pos: Pos2, button: PointerButton) -> Self {
        Self {
            pos,
            source: PointerSource::Mouse(button),
        }
    }

    pub fn touch(pos: Pos2) -> Self {
        Self {
            pos,
            source: PointerSource::Touch,
        }
    }

    /// Touch always qualifies; mouse only with the primary button.
    pub fn is_primary(&self) -> bool {
        matches!(
            self.source,
            PointerSource::Touch | PointerSource::Mouse(PointerButton::Primary)
        )
    }
}

/// Anchor hit zones at the event's resizable edges.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnchorRects {
    pub top: Option<Rect>,
    pub bottom: Option<Rect>,
    pub left: Option<Rect>,
    pub right: Option<Rect>,
}

impl AnchorRects {
    /// Which anchor, if any, contains the point.
    pub fn hit_test(&self, pos: Pos2) -> Option<ResizeDirection> {
        if self.top.is_some_and(|r| r.contains(pos)) {
            Some(ResizeDirection::Up)
        } else if self.bottom.is_some_and(|r| r.contains(pos)) {
            Some(ResizeDirection::Down)
        } else if self.left.is_some_and(|r| r.contains(pos)) {
            Some(ResizeDirection::Left)
        } else if self.right.is_some_and(|r| r.contains(pos)) {
            Some(ResizeDirection::Right)
        } else {
            None
        }
    }

    pub fn get(&self, direction: ResizeDirection) -> Option<Rect> {
        match direction {
            ResizeDirection::Up => self.top,
            ResizeDirection::Down => self.bottom,
            ResizeDirection::Left => self.left,
            ResizeDirection::Right => self.right,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.bottom.is_none() && self.left.is_none() && self.right.is_none()
    }
}

/// Loose equality used to match the in-flight event against a rendered one:
/// same id, or same title, or identical start and end.
///
/// The looseness keeps the dragged source visually distinguished even when
/// the host rebuilt the event value between frames. Title matching can
/// over-match two distinct events sharing a title; that behavior is kept
/// as-is.
pub fn is_equal_event(a: &CalendarEvent, b: &CalendarEvent) -> bool {
    (a.id.is_some() && a.id == b.id)
        || a.title == b.title
        || (a.start == b.start && a.end == b.end)
}

/// Decorator for a single rendered event.
pub struct EventWrapper {
    context: DndContext,
    layout: EventLayout,
    continues_prior: bool,
    continues_after: bool,
    resizable: bool,
    is_preview: bool,
}

impl EventWrapper {
    pub fn new(context: DndContext, layout: EventLayout) -> Self {
        Self {
            context,
            layout,
            continues_prior: false,
            continues_after: false,
            resizable: true,
            is_preview: false,
        }
    }

    /// The event visually continues before the rendered boundary, so its
    /// leading edge is not a real interaction boundary.
    pub fn continues_prior(mut self, value: bool) -> Self {
        self.continues_prior = value;
        self
    }

    /// The event visually continues past the rendered boundary.
    pub fn continues_after(mut self, value: bool) -> Self {
        self.continues_after = value;
        self
    }

    /// Whether the view offers resizing at all (e.g. agenda lists do not).
    pub fn resizable(mut self, value: bool) -> Self {
        self.resizable = value;
        self
    }

    /// Mark this wrapper as decorating the ghost copy. The ghost still
    /// shows anchors but never arms a move itself.
    pub fn preview(mut self, value: bool) -> Self {
        self.is_preview = value;
        self
    }

    pub fn is_draggable(&self, event: &CalendarEvent) -> bool {
        self.context.is_draggable(event)
    }

    pub fn is_resizable(&self, event: &CalendarEvent) -> bool {
        self.resizable && self.context.is_resizable(event)
    }

    /// Anchor hit zones for the event's rect.
    ///
    /// Row layouts get left/right anchors, column layouts top/bottom. An
    /// edge that continues beyond the rendered boundary gets none, and a
    /// non-draggable or non-resizable event gets none at all (pass-through).
    pub fn anchors(&self, event: &CalendarEvent, rect: Rect) -> AnchorRects {
        if !self.is_draggable(event) || !self.is_resizable(event) {
            return AnchorRects::default();
        }
        match self.layout {
            EventLayout::Time => {
                // Small events split into halves so both edges stay
                // grabbable; taller ones use a fixed zone at each edge.
                let zone_height = if rect.height() < 50.0 {
                    rect.height() / 2.0
                } else {
                    20.0
                };
                let zone = |y: f32| {
                    Rect::from_min_size(
                        Pos2::new(rect.left(), y),
                        Vec2::new(rect.width(), zone_height),
                    )
                };
                AnchorRects {
                    top: (!self.continues_prior).then(|| zone(rect.top())),
                    bottom: (!self.continues_after).then(|| zone(rect.bottom() - zone_height)),
                    left: None,
                    right: None,
                }
            }
            EventLayout::Date => {
                let zone_height = rect.height().min(20.0);
                let zone = |x: f32| {
                    Rect::from_center_size(
                        Pos2::new(x, rect.center().y),
                        Vec2::new(ANCHOR_SIZE, zone_height),
                    )
                };
                AnchorRects {
                    top: None,
                    bottom: None,
                    left: (!self.continues_prior).then(|| zone(rect.left())),
                    right: (!self.continues_after).then(|| zone(rect.right())),
                }
            }
        }
    }

    /// React to a pointer-down on the event. Returns the action that was
    /// armed, if any.
    ///
    /// Anchors sit inside the event's region, so they are tested first: a
    /// press on a resize anchor must never also arm a move.
    pub fn handle_pointer_down(
        &self,
        event: &CalendarEvent,
        input: PointerInput,
        anchors: &AnchorRects,
    ) -> Option<ActionKind> {
        if !self.is_draggable(event) {
            return None;
        }
        if !input.is_primary() {
            return None;
        }
        if let Some(direction) = anchors.hit_test(input.pos) {
            if self.is_resizable(event) {
                self.context
                    .on_begin_action(event, ActionKind::Resize, Some(direction));
                return Some(ActionKind::Resize);
            }
        }
        if self.is_preview {
            // The ghost is visual feedback, not an interaction target.
            return None;
        }
        self.context.on_begin_action(event, ActionKind::Move, None);
        Some(ActionKind::Move)
    }

    /// True while this event is the one being dragged or resized, so the
    /// view can apply its "dragged" styling (dim/hide the source).
    pub fn is_dragged(&self, event: &CalendarEvent) -> bool {
        let action = self.context.action_snapshot();
        action.interacting
            && action
                .event
                .as_ref()
                .is_some_and(|current| is_equal_event(current, event))
    }

    /// Cursor feedback for a hover position: resize cursors over anchors,
    /// a grab cursor over the draggable body.
    pub fn cursor_icon(
        &self,
        event: &CalendarEvent,
        pos: Pos2,
        anchors: &AnchorRects,
    ) -> Option<CursorIcon> {
        if !self.is_draggable(event) {
            return None;
        }
        if let Some(direction) = anchors.hit_test(pos) {
            return Some(direction.cursor_icon());
        }
        Some(CursorIcon::Grab)
    }
}
