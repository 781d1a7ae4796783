//! Drag-and-drop and resize interaction addons for calendar views.
//!
//! The addon is built from three kinds of components sharing one
//! [`DndContext`] per calendar instance:
//!
//! - [`EventWrapper`] decorates each rendered event with resize anchors and
//!   gesture-start handling.
//! - [`EventContainerWrapper`] owns one selectable column, translating the
//!   selection lifecycle into move/resize preview updates and final commits.
//! - [`PreviewRenderer`](preview::PreviewRenderer) paints the ghost event
//!   while a gesture is in flight.
//!
//! Pointer/touch capture itself is the host's job: the host feeds
//! [`SelectionEvent`](selection::SelectionEvent)s into each container.

pub mod container_wrapper;
pub mod context;
pub mod drawing;
pub mod event_wrapper;
pub mod geometry;
pub mod preview;
pub mod selection;
pub mod slot_metrics;

pub use container_wrapper::{EventContainerWrapper, PreviewState};
pub use context::{ActionKind, DndCallbacks, DndContext, DragAndDropAction, ResizeDirection};
pub use event_wrapper::{EventLayout, EventWrapper, PointerInput};
pub use selection::{SelectionEvent, SelectionHandler};
pub use slot_metrics::{SlotMetrics, SlotRange, TimeColumnMetrics};
