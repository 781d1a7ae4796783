//! Selection service interface.
//!
//! Low-level pointer/touch capture is the host's concern. The host (or a
//! box-selection utility) turns raw input into the lifecycle events below
//! and feeds them to a [`SelectionHandler`] — one per container. For a
//! single gesture the events arrive in the strict order
//!
//! ```text
//! BeforeSelect -> SelectStart -> Selecting* -> Select | Click | Reset
//! ```
//!
//! where `Selecting` may fire zero or many times. `DropFromOutside` and
//! `DragOver` arrive outside that sequence, for drag sources originating
//! beyond the calendar.

use egui::Pos2;

/// One step of a pointer gesture, as reported by the capture service.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SelectionEvent {
    /// Pointer went down; the gesture may be vetoed before it starts.
    BeforeSelect(Pos2),
    /// The pointer has moved enough to count as a drag.
    SelectStart,
    /// Continuous drag update.
    Selecting(Pos2),
    /// Pointer released after a drag.
    Select(Pos2),
    /// Pointer released without a drag.
    Click(Pos2),
    /// The gesture was abandoned (focus loss, escape, programmatic reset).
    Reset,
    /// An external drag source was dropped at the point.
    DropFromOutside(Pos2),
    /// An external drag source is hovering over the point.
    DragOver(Pos2),
}

/// Receiver for selection lifecycle events.
pub trait SelectionHandler {
    /// Gatekeeper for a new gesture. Returning false vetoes it.
    fn on_before_select(&mut self, point: Pos2) -> bool;

    fn on_select_start(&mut self);

    fn on_selecting(&mut self, point: Pos2);

    fn on_select(&mut self, point: Pos2);

    fn on_click(&mut self, point: Pos2);

    fn on_reset(&mut self);

    fn on_drop_from_outside(&mut self, point: Pos2);

    fn on_drag_over(&mut self, point: Pos2);

    /// Route one lifecycle event to its handler method. Returns false only
    /// when a `BeforeSelect` was vetoed.
    fn dispatch(&mut self, event: SelectionEvent) -> bool {
        match event {
            SelectionEvent::BeforeSelect(point) => return self.on_before_select(point),
            SelectionEvent::SelectStart => self.on_select_start(),
            SelectionEvent::Selecting(point) => self.on_selecting(point),
            SelectionEvent::Select(point) => self.on_select(point),
            SelectionEvent::Click(point) => self.on_click(point),
            SelectionEvent::Reset => self.on_reset(),
            SelectionEvent::DropFromOutside(point) => self.on_drop_from_outside(point),
            SelectionEvent::DragOver(point) => self.on_drag_over(point),
        }
        true
    }
}
