// End-to-end gesture scenarios: full selection lifecycles through the
// shared context, a container, and the commit callbacks.

mod fixtures;

use calendar_dnd::dnd::context::{ActionKind, DndCallbacks, DndContext, ResizeDirection};
use calendar_dnd::dnd::event_wrapper::PointerInput;
use calendar_dnd::dnd::{
    EventContainerWrapper, EventLayout, EventWrapper, SelectionEvent, SelectionHandler,
    TimeColumnMetrics,
};
use egui::{Pos2, Rect, Vec2};
use fixtures::{at, column_bounds, meeting, metrics, point_at, recording_context, y_at};
use pretty_assertions::assert_eq;

fn container(context: &DndContext) -> EventContainerWrapper<TimeColumnMetrics> {
    let mut c = EventContainerWrapper::new(context.clone(), metrics());
    c.set_bounds(column_bounds());
    // the meeting's rendered box: 9:00-10:00, one pixel per minute
    c.set_event_rects(vec![Rect::from_min_size(
        Pos2::new(0.0, y_at(9, 0)),
        Vec2::new(100.0, 60.0),
    )]);
    c
}

#[test]
fn move_gesture_commits_shifted_range_with_preserved_duration() {
    let _ = env_logger::builder().is_test(true).try_init();
    let recording = recording_context();
    let event = meeting();
    let wrapper = EventWrapper::new(recording.context.clone(), EventLayout::Time);
    let mut column = container(&recording.context);

    // pointer down on the event body (center, well away from the anchors)
    let press = Pos2::new(50.0, y_at(9, 30));
    let anchors = wrapper.anchors(
        &event,
        Rect::from_min_size(Pos2::new(0.0, y_at(9, 0)), Vec2::new(100.0, 60.0)),
    );
    wrapper.handle_pointer_down(&event, PointerInput::mouse(press), &anchors);
    assert_eq!(
        recording.context.action_snapshot().action,
        ActionKind::Move
    );

    // gesture: grip the event, drag 30 minutes down, release
    assert!(column.dispatch(SelectionEvent::BeforeSelect(press)));
    column.dispatch(SelectionEvent::SelectStart);
    column.dispatch(SelectionEvent::Selecting(Pos2::new(50.0, y_at(10, 0))));
    column.dispatch(SelectionEvent::Select(Pos2::new(50.0, y_at(10, 0))));

    let drops = recording.drops.borrow();
    assert_eq!(drops.len(), 1);
    assert_eq!(drops[0].start, at(9, 30));
    assert_eq!(drops[0].end, at(10, 30));
    assert_eq!(drops[0].event.id, Some(1));
    assert!(recording.resizes.borrow().is_empty());
    assert!(recording.context.is_idle());
    assert!(column.preview().is_none());
}

#[test]
fn move_gesture_from_anchor_grip_keeps_pointer_delta() {
    let recording = recording_context();
    let mut column = container(&recording.context);
    recording
        .context
        .on_begin_action(&meeting(), ActionKind::Move, None);

    // grip 15 minutes into the event, drag the pointer to 10:00; the event
    // top lands at 9:45
    let press = Pos2::new(50.0, y_at(9, 15));
    assert!(column.dispatch(SelectionEvent::BeforeSelect(press)));
    column.dispatch(SelectionEvent::SelectStart);
    column.dispatch(SelectionEvent::Selecting(point_at(10, 0)));
    column.dispatch(SelectionEvent::Select(point_at(10, 0)));

    let drops = recording.drops.borrow();
    assert_eq!(drops[0].start, at(9, 45));
    assert_eq!(drops[0].end, at(10, 45));
}

#[test]
fn resize_down_two_slots_commits_extended_range() {
    let recording = recording_context();
    let event = meeting();
    let mut column = container(&recording.context);

    recording
        .context
        .on_begin_action(&event, ActionKind::Resize, Some(ResizeDirection::Down));

    let start = point_at(10, 0);
    assert!(column.dispatch(SelectionEvent::BeforeSelect(start)));
    column.dispatch(SelectionEvent::SelectStart);
    column.dispatch(SelectionEvent::Selecting(point_at(10, 15)));
    column.dispatch(SelectionEvent::Selecting(point_at(10, 30)));
    column.dispatch(SelectionEvent::Select(point_at(10, 30)));

    let resizes = recording.resizes.borrow();
    assert_eq!(resizes.len(), 1);
    assert_eq!(resizes[0].start, at(9, 0));
    assert_eq!(resizes[0].end, at(10, 30));
    assert!(recording.drops.borrow().is_empty());
    assert!(recording.context.is_idle());
}

#[test]
fn resize_veto_never_commits_and_never_updates_preview() {
    let recording = recording_context();
    let mut column = EventContainerWrapper::new(recording.context.clone(), metrics())
        .on_resizing(|_start, _end, _event| false);
    column.set_bounds(column_bounds());

    recording
        .context
        .on_begin_action(&meeting(), ActionKind::Resize, Some(ResizeDirection::Down));

    assert!(column.dispatch(SelectionEvent::BeforeSelect(point_at(10, 0))));
    column.dispatch(SelectionEvent::SelectStart);
    for minutes in (15..=120).step_by(15) {
        column.dispatch(SelectionEvent::Selecting(Pos2::new(
            50.0,
            y_at(10, 0) + minutes as f32,
        )));
        assert!(column.preview().is_none(), "vetoed preview must not update");
    }
    // nothing to commit on release; the capture service then resets
    column.dispatch(SelectionEvent::Select(point_at(12, 0)));
    assert!(recording.resizes.borrow().is_empty());

    column.dispatch(SelectionEvent::Reset);
    assert!(recording.context.is_idle());
}

#[test]
fn cancellation_leaves_no_partial_state() {
    let recording = recording_context();
    let mut column = container(&recording.context);
    recording
        .context
        .on_begin_action(&meeting(), ActionKind::Move, None);

    assert!(column.dispatch(SelectionEvent::BeforeSelect(point_at(9, 0))));
    column.dispatch(SelectionEvent::SelectStart);
    for step in 1..=7 {
        column.dispatch(SelectionEvent::Selecting(Pos2::new(
            50.0,
            y_at(9, 0) + step as f32 * 20.0,
        )));
    }
    assert!(column.preview().is_some());

    column.dispatch(SelectionEvent::Reset);

    assert!(column.preview().is_none());
    assert!(recording.context.is_idle());
    assert!(!recording.context.is_interacting());
    assert!(recording.context.current_event().is_none());
    assert!(recording.drops.borrow().is_empty());
    assert!(recording.resizes.borrow().is_empty());
}

#[test]
fn click_without_drag_cancels_armed_gesture() {
    let recording = recording_context();
    let mut column = container(&recording.context);
    recording
        .context
        .on_begin_action(&meeting(), ActionKind::Move, None);

    assert!(column.dispatch(SelectionEvent::BeforeSelect(point_at(9, 30))));
    column.dispatch(SelectionEvent::Click(point_at(9, 30)));

    assert!(recording.context.is_idle());
    assert!(recording.drops.borrow().is_empty());
}

#[test]
fn preview_is_not_committed_by_sibling_column() {
    // Two columns share one context; only the column holding the preview
    // commits on release.
    let recording = recording_context();
    let mut left = container(&recording.context);
    let mut right = EventContainerWrapper::new(recording.context.clone(), metrics());
    right.set_bounds(Rect::from_min_size(
        Pos2::new(200.0, 0.0),
        Vec2::new(100.0, 1440.0),
    ));

    recording
        .context
        .on_begin_action(&meeting(), ActionKind::Move, None);
    assert!(left.dispatch(SelectionEvent::BeforeSelect(point_at(9, 0))));
    left.dispatch(SelectionEvent::SelectStart);
    left.dispatch(SelectionEvent::Selecting(point_at(9, 30)));

    // release lands in the left column; the right one has no preview
    right.dispatch(SelectionEvent::Select(Pos2::new(250.0, y_at(9, 30))));
    assert!(recording.drops.borrow().is_empty());

    left.dispatch(SelectionEvent::Select(point_at(9, 30)));
    assert_eq!(recording.drops.borrow().len(), 1);
}

#[test]
fn drop_from_outside_creates_one_slot_range() {
    let outside: std::rc::Rc<
        std::cell::RefCell<Vec<calendar_dnd::dnd::context::OutsideDropInfo>>,
    > = Default::default();
    let sink = outside.clone();
    let context = DndContext::new(DndCallbacks {
        on_drop_from_outside: Some(Box::new(move |info| sink.borrow_mut().push(info))),
        ..Default::default()
    });
    let mut column = EventContainerWrapper::new(context, metrics()).with_resource(7);
    column.set_bounds(column_bounds());

    column.dispatch(SelectionEvent::DropFromOutside(point_at(14, 0)));

    let drops = outside.borrow();
    assert_eq!(drops.len(), 1);
    assert_eq!(drops[0].start, at(14, 0));
    assert_eq!(drops[0].end, at(14, 15));
    assert_eq!(drops[0].resource, Some(7));
    assert!(!drops[0].all_day);
}
