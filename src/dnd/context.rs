//! Shared drag-and-drop interaction context.
//!
//! One `DndContext` handle is cloned into every event wrapper and container
//! wrapper of a calendar instance. It is the single source of truth for
//! "what is being dragged right now" and is mutated only through its four
//! transition operations: [`DndContext::on_begin_action`],
//! [`DndContext::on_start`], [`DndContext::on_end`] and
//! [`DndContext::on_drop_from_outside`].

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Local};

use crate::models::event::CalendarEvent;

/// What kind of manipulation the current gesture performs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActionKind {
    #[default]
    None,
    Move,
    Resize,
}

/// Which edge of the event a resize gesture drags.
///
/// `Up`/`Down` adjust times in column (time) layouts, `Left`/`Right` adjust
/// dates in row (date) layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeDirection {
    Up,
    Down,
    Left,
    Right,
}

impl ResizeDirection {
    /// Returns true if this direction adjusts time (vertical drag).
    pub fn is_vertical(&self) -> bool {
        matches!(self, ResizeDirection::Up | ResizeDirection::Down)
    }

    /// Returns true if this direction adjusts date (horizontal drag).
    pub fn is_horizontal(&self) -> bool {
        matches!(self, ResizeDirection::Left | ResizeDirection::Right)
    }

    /// Returns the cursor icon for a resize along this direction.
    pub fn cursor_icon(&self) -> egui::CursorIcon {
        if self.is_vertical() {
            egui::CursorIcon::ResizeVertical
        } else {
            egui::CursorIcon::ResizeHorizontal
        }
    }
}

/// The in-flight gesture.
///
/// `direction` is set only when `action == Resize`; `event` is set whenever
/// `action != None`. `interacting` flips to true once the gesture has
/// visibly started, as opposed to being merely armed by a pointer-down.
#[derive(Clone, Debug, Default)]
pub struct DragAndDropAction {
    pub event: Option<CalendarEvent>,
    pub action: ActionKind,
    pub direction: Option<ResizeDirection>,
    pub interacting: bool,
}

impl DragAndDropAction {
    pub fn is_idle(&self) -> bool {
        self.action == ActionKind::None
    }
}

/// Final range reported by a container when a gesture completes.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractionEnd {
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub resource_id: Option<i64>,
}

/// Payload of a successful move commit.
#[derive(Clone, Debug, PartialEq)]
pub struct DropInfo {
    pub event: CalendarEvent,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub resource_id: Option<i64>,
}

/// Payload of a successful resize commit.
#[derive(Clone, Debug, PartialEq)]
pub struct ResizeInfo {
    pub event: CalendarEvent,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
}

/// Payload for drops originating outside the calendar.
#[derive(Clone, Debug, PartialEq)]
pub struct OutsideDropInfo {
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub all_day: bool,
    pub resource: Option<i64>,
}

type EventPredicate = Box<dyn Fn(&CalendarEvent) -> bool>;
type OutsideItemFn = Box<dyn Fn() -> Option<CalendarEvent>>;

/// Host-supplied callbacks and accessor predicates.
///
/// Absent accessors default to "every event is draggable/resizable". The
/// drop-from-outside and drag-over paths are only active when the
/// corresponding callback/provider is present.
#[derive(Default)]
pub struct DndCallbacks {
    pub on_event_drop: Option<Box<dyn FnMut(DropInfo)>>,
    pub on_event_resize: Option<Box<dyn FnMut(ResizeInfo)>>,
    pub on_drop_from_outside: Option<Box<dyn FnMut(OutsideDropInfo)>>,
    pub drag_from_outside_item: Option<OutsideItemFn>,
    pub draggable_accessor: Option<EventPredicate>,
    pub resizable_accessor: Option<EventPredicate>,
}

struct DndState {
    action: DragAndDropAction,
    callbacks: DndCallbacks,
}

/// Shared handle to the interaction state machine.
///
/// Cloning is cheap; all clones observe and mutate the same state. The
/// handle is UI-thread only (`Rc`), matching the single-threaded,
/// event-driven gesture model.
#[derive(Clone)]
pub struct DndContext {
    inner: Rc<RefCell<DndState>>,
}

impl DndContext {
    pub fn new(callbacks: DndCallbacks) -> Self {
        Self {
            inner: Rc::new(RefCell::new(DndState {
                action: DragAndDropAction::default(),
                callbacks,
            })),
        }
    }

    /// Arm a gesture: `Idle -> Armed`.
    ///
    /// A begin while another gesture is armed or active is a caller contract
    /// violation; it is ignored with a warning rather than propagated, since
    /// failing mid-gesture would break the interaction. The event must pass
    /// the draggable accessor (move) or resizable accessor (resize).
    pub fn on_begin_action(
        &self,
        event: &CalendarEvent,
        action: ActionKind,
        direction: Option<ResizeDirection>,
    ) {
        let mut state = self.inner.borrow_mut();
        if !state.action.is_idle() {
            log::warn!(
                "on_begin_action while a {:?} gesture is in flight; ignoring",
                state.action.action
            );
            return;
        }
        match action {
            ActionKind::None => {
                log::warn!("on_begin_action called with ActionKind::None; ignoring");
                return;
            }
            ActionKind::Move => {
                if !passes(&state.callbacks.draggable_accessor, event) {
                    return;
                }
            }
            ActionKind::Resize => {
                if !passes(&state.callbacks.resizable_accessor, event) {
                    return;
                }
            }
        }
        state.action = DragAndDropAction {
            event: Some(event.clone()),
            action,
            direction: if action == ActionKind::Resize {
                direction
            } else {
                None
            },
            interacting: false,
        };
        log::debug!("armed {:?} gesture on event {:?}", action, event.id);
    }

    /// The gesture has visibly started: `Armed -> Active`.
    ///
    /// Idempotent when already active; a no-op with a warning when idle.
    pub fn on_start(&self) {
        let mut state = self.inner.borrow_mut();
        if state.action.is_idle() {
            log::warn!("on_start without an armed gesture; ignoring");
            return;
        }
        state.action.interacting = true;
    }

    /// Terminal transition: `Armed|Active -> Idle`.
    ///
    /// `None` cancels the gesture without firing any commit callback. With a
    /// result, the move or resize commit callback fires with the final
    /// range. The state resets to idle *before* the callback runs, so a
    /// panicking host callback cannot strand the context mid-gesture.
    pub fn on_end(&self, result: Option<InteractionEnd>) {
        let finished = std::mem::take(&mut self.inner.borrow_mut().action);
        let Some(result) = result else {
            return;
        };
        let Some(event) = finished.event else {
            return;
        };
        match finished.action {
            ActionKind::Move => {
                let taken = self.inner.borrow_mut().callbacks.on_event_drop.take();
                if let Some(mut callback) = taken {
                    callback(DropInfo {
                        event,
                        start: result.start,
                        end: result.end,
                        resource_id: result.resource_id,
                    });
                    self.inner.borrow_mut().callbacks.on_event_drop = Some(callback);
                }
            }
            ActionKind::Resize => {
                let taken = self.inner.borrow_mut().callbacks.on_event_resize.take();
                if let Some(mut callback) = taken {
                    callback(ResizeInfo {
                        event,
                        start: result.start,
                        end: result.end,
                    });
                    self.inner.borrow_mut().callbacks.on_event_resize = Some(callback);
                }
            }
            ActionKind::None => {}
        }
    }

    /// Forward an external drop directly to the host, bypassing the
    /// armed/active machine.
    pub fn on_drop_from_outside(&self, info: OutsideDropInfo) {
        let taken = self.inner.borrow_mut().callbacks.on_drop_from_outside.take();
        if let Some(mut callback) = taken {
            callback(info);
            self.inner.borrow_mut().callbacks.on_drop_from_outside = Some(callback);
        }
    }

    /// Cloned view of the current gesture state.
    pub fn action_snapshot(&self) -> DragAndDropAction {
        self.inner.borrow().action.clone()
    }

    pub fn is_idle(&self) -> bool {
        self.inner.borrow().action.is_idle()
    }

    /// True once a gesture has visibly started.
    pub fn is_interacting(&self) -> bool {
        self.inner.borrow().action.interacting
    }

    /// The event currently being manipulated, if any.
    pub fn current_event(&self) -> Option<CalendarEvent> {
        self.inner.borrow().action.event.clone()
    }

    pub fn is_draggable(&self, event: &CalendarEvent) -> bool {
        passes(&self.inner.borrow().callbacks.draggable_accessor, event)
    }

    pub fn is_resizable(&self, event: &CalendarEvent) -> bool {
        passes(&self.inner.borrow().callbacks.resizable_accessor, event)
    }

    /// True when the host configured a drop-from-outside callback.
    pub fn allows_drop_from_outside(&self) -> bool {
        self.inner.borrow().callbacks.on_drop_from_outside.is_some()
    }

    /// The item currently dragged from outside the calendar, if any.
    pub fn drag_from_outside_item(&self) -> Option<CalendarEvent> {
        let state = self.inner.borrow();
        state
            .callbacks
            .drag_from_outside_item
            .as_ref()
            .and_then(|provider| provider())
    }
}

fn passes(predicate: &Option<EventPredicate>, event: &CalendarEvent) -> bool {
    predicate.as_ref().map_or(true, |p| p(event))
}
