// Event module
// Calendar event model manipulated by the drag-and-drop layer

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A calendar event as seen by the interaction layer.
///
/// The canonical event list is owned by the host application; this layer only
/// reads events and emits proposed new ranges through commit callbacks. A
/// clone with an updated range (see [`CalendarEvent::with_times`]) backs the
/// in-progress preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: Option<i64>,
    pub title: String,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub all_day: bool,
    /// Column/resource the event belongs to in multi-resource grids.
    pub resource_id: Option<i64>,
    /// Hex color used by the default renderer (#RRGGBB).
    pub color: Option<String>,
}

impl CalendarEvent {
    /// Create a new event with required fields.
    ///
    /// # Arguments
    /// * `title` - Event title (required, non-empty)
    /// * `start` - Event start time
    /// * `end` - Event end time (must not precede `start`)
    ///
    /// # Examples
    /// ```
    /// use calendar_dnd::models::event::CalendarEvent;
    /// use chrono::Local;
    ///
    /// let start = Local::now();
    /// let end = start + chrono::Duration::hours(1);
    /// let event = CalendarEvent::new("Team Meeting", start, end).unwrap();
    /// ```
    pub fn new(
        title: impl Into<String>,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Result<Self, String> {
        let title = title.into();

        if title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        // Zero-length events are allowed (all-day markers); inverted ranges
        // are not.
        if end < start {
            return Err("Event end time must not precede start time".to_string());
        }

        Ok(Self {
            id: None,
            title,
            start,
            end,
            all_day: false,
            resource_id: None,
            color: None,
        })
    }

    /// Set the event id.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the resource column this event belongs to.
    pub fn with_resource(mut self, resource_id: i64) -> Self {
        self.resource_id = Some(resource_id);
        self
    }

    /// Mark the event as all-day.
    pub fn all_day(mut self) -> Self {
        self.all_day = true;
        self
    }

    /// Clone the event with a new time range. Used to build preview ghosts
    /// without touching the host-owned original.
    pub fn with_times(&self, start: DateTime<Local>, end: DateTime<Local>) -> Self {
        let mut clone = self.clone();
        clone.start = start;
        clone.end = end;
        clone
    }

    /// Get the duration of the event.
    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }
}
