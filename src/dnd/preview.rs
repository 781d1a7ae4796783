//! Ghost-event rendering for the in-progress gesture.
//!
//! The ghost reuses the same renderer as committed events, tagged as a
//! preview. Label and geometry are computed here; the pixels are the
//! renderer provider's job (see [`drawing`](super::drawing) for the stock
//! implementation).

use chrono::{DateTime, Local};
use egui::{Pos2, Rect, Ui, Vec2};

use super::container_wrapper::PreviewState;
use super::slot_metrics::SlotMetrics;
use crate::models::event::CalendarEvent;

/// Formats displayed time ranges. Localization is the host's concern; the
/// default renders 24-hour clock times.
pub trait RangeFormatter {
    /// Normal "start – end" range.
    fn time_range(&self, start: DateTime<Local>, end: DateTime<Local>) -> String;

    /// Range that continues past the visible day: only the start is shown.
    fn time_range_start(&self, start: DateTime<Local>) -> String;

    /// Range that began before the visible day: only the end is shown.
    fn time_range_end(&self, end: DateTime<Local>) -> String;

    fn all_day(&self) -> String;
}

/// 24-hour clock formatter.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultRangeFormatter;

impl RangeFormatter for DefaultRangeFormatter {
    fn time_range(&self, start: DateTime<Local>, end: DateTime<Local>) -> String {
        format!("{} – {}", start.format("%H:%M"), end.format("%H:%M"))
    }

    fn time_range_start(&self, start: DateTime<Local>) -> String {
        format!("{} –", start.format("%H:%M"))
    }

    fn time_range_end(&self, end: DateTime<Local>) -> String {
        format!("– {}", end.format("%H:%M"))
    }

    fn all_day(&self) -> String {
        "All day".to_string()
    }
}

/// Visual flags handed to an event renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EventStyle {
    pub is_preview: bool,
    pub is_dragged: bool,
    /// The range began before the visible day window.
    pub continues_earlier: bool,
    /// The range ends after the visible day window.
    pub continues_later: bool,
}

/// Renderer provider: hosts plug in their own event visuals; the addon only
/// depends on this interface.
pub trait EventRenderer {
    fn draw_event(
        &self,
        ui: &mut Ui,
        event: &CalendarEvent,
        rect: Rect,
        label: &str,
        style: &EventStyle,
    );
}

/// Renders the ghost for one container.
pub struct PreviewRenderer<R: EventRenderer, F: RangeFormatter> {
    renderer: R,
    formatter: F,
}

impl Default
    for PreviewRenderer<super::drawing::DefaultEventRenderer, DefaultRangeFormatter>
{
    fn default() -> Self {
        Self::new(
            super::drawing::DefaultEventRenderer::default(),
            DefaultRangeFormatter,
        )
    }
}

impl<R: EventRenderer, F: RangeFormatter> PreviewRenderer<R, F> {
    pub fn new(renderer: R, formatter: F) -> Self {
        Self { renderer, formatter }
    }

    /// Label for a previewed range: ranges clipped by the visible day show
    /// only their visible endpoint; fully-clipped ranges read as all-day.
    pub fn label(
        &self,
        metrics: &dyn SlotMetrics,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> String {
        let before = metrics.starts_before_day(start);
        let after = metrics.starts_after_day(end);
        if before && after {
            self.formatter.all_day()
        } else if before {
            self.formatter.time_range_end(end)
        } else if after {
            self.formatter.time_range_start(start)
        } else {
            self.formatter.time_range(start, end)
        }
    }

    /// Pixel rect for the ghost within the container's bounds, from the
    /// preview's percent geometry.
    pub fn ghost_rect(&self, preview: &PreviewState, container_rect: Rect) -> Rect {
        let top = container_rect.top() + container_rect.height() * preview.top / 100.0;
        let height = container_rect.height() * preview.height / 100.0;
        Rect::from_min_size(
            Pos2::new(container_rect.left(), top),
            Vec2::new(container_rect.width(), height.max(0.0)),
        )
    }

    /// Draw the ghost into the container rect.
    ///
    /// Nothing is drawn when the preview belongs to another resource's
    /// column: one column's ghost must not leak into a sibling.
    pub fn show(
        &self,
        ui: &mut Ui,
        preview: &PreviewState,
        metrics: &dyn SlotMetrics,
        container_rect: Rect,
        resource: Option<i64>,
    ) {
        if preview.event.resource_id != resource {
            return;
        }
        let rect = self.ghost_rect(preview, container_rect);
        let label = self.label(metrics, preview.event.start, preview.event.end);
        let style = EventStyle {
            is_preview: true,
            is_dragged: false,
            continues_earlier: metrics.starts_before_day(preview.event.start),
            continues_later: metrics.starts_after_day(preview.event.end),
        };
        self.renderer
            .draw_event(ui, &preview.event, rect, &label, &style);
    }
}
