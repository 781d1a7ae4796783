//! Anchor and ghost-event drawing.
//!
//! Visual feedback for the interaction layer: handle bars/circles on
//! resizable events and the translucent ghost silhouette painted while a
//! gesture is in flight.

use egui::{Color32, Pos2, Rect, Stroke, Ui, Vec2};

use super::context::ResizeDirection;
use super::event_wrapper::AnchorRects;
use super::preview::{EventRenderer, EventStyle};
use crate::models::event::CalendarEvent;

/// Visual size of the anchor circle.
pub const ANCHOR_VISUAL_SIZE: f32 = 6.0;

/// Parse a `#RRGGBB` hex color.
pub fn parse_color(hex: &str) -> Option<Color32> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}

fn draw_anchor(ui: &mut Ui, rect: Rect, direction: ResizeDirection, is_hovered: bool, color: Color32) {
    let (center, bar_start, bar_end) = if direction.is_vertical() {
        // Top/Bottom anchors carry a horizontal bar
        let center_x = rect.center().x;
        let bar_y = match direction {
            ResizeDirection::Up => rect.top() + 4.0,
            _ => rect.bottom() - 4.0,
        };
        let center_y = match direction {
            ResizeDirection::Up => rect.top() + ANCHOR_VISUAL_SIZE / 2.0 + 4.0,
            _ => rect.bottom() - ANCHOR_VISUAL_SIZE / 2.0 - 4.0,
        };
        let bar_width = rect.width().min(40.0);
        (
            Pos2::new(center_x, center_y),
            Pos2::new(center_x - bar_width / 2.0, bar_y),
            Pos2::new(center_x + bar_width / 2.0, bar_y),
        )
    } else {
        // Left/Right anchors carry a vertical bar
        let center_y = rect.center().y;
        let bar_x = match direction {
            ResizeDirection::Left => rect.left() + 4.0,
            _ => rect.right() - 4.0,
        };
        let center_x = match direction {
            ResizeDirection::Left => rect.left() + ANCHOR_VISUAL_SIZE / 2.0 + 2.0,
            _ => rect.right() - ANCHOR_VISUAL_SIZE / 2.0 - 2.0,
        };
        let bar_height = rect.height().min(20.0);
        (
            Pos2::new(center_x, center_y),
            Pos2::new(bar_x, center_y - bar_height / 2.0),
            Pos2::new(bar_x, center_y + bar_height / 2.0),
        )
    };

    let radius = if is_hovered {
        ANCHOR_VISUAL_SIZE / 2.0 + 2.0
    } else {
        ANCHOR_VISUAL_SIZE / 2.0
    };

    ui.painter().line_segment(
        [bar_start, bar_end],
        Stroke::new(
            if is_hovered { 3.0 } else { 2.0 },
            if is_hovered {
                Color32::WHITE
            } else {
                Color32::from_rgba_unmultiplied(255, 255, 255, 180)
            },
        ),
    );

    ui.painter().circle_filled(
        center,
        radius,
        if is_hovered {
            Color32::WHITE
        } else {
            Color32::from_rgba_unmultiplied(255, 255, 255, 220)
        },
    );
    ui.painter().circle_stroke(
        center,
        radius,
        Stroke::new(
            if is_hovered { 2.0 } else { 1.5 },
            color.linear_multiply(0.8),
        ),
    );
}

/// Draw resize anchors on an event.
pub fn draw_anchors(
    ui: &mut Ui,
    anchors: &AnchorRects,
    hovered: Option<ResizeDirection>,
    color: Color32,
) {
    for direction in [
        ResizeDirection::Up,
        ResizeDirection::Down,
        ResizeDirection::Left,
        ResizeDirection::Right,
    ] {
        if let Some(rect) = anchors.get(direction) {
            draw_anchor(ui, rect, direction, hovered == Some(direction), color);
        }
    }
}

/// Stock event renderer: a filled box with an accent bar and a label, drawn
/// translucent when it is a preview ghost or the dragged source.
#[derive(Clone, Debug)]
pub struct DefaultEventRenderer {
    pub fallback_color: Color32,
}

impl Default for DefaultEventRenderer {
    fn default() -> Self {
        Self {
            fallback_color: Color32::from_rgb(100, 150, 200),
        }
    }
}

impl EventRenderer for DefaultEventRenderer {
    fn draw_event(
        &self,
        ui: &mut Ui,
        event: &CalendarEvent,
        rect: Rect,
        label: &str,
        style: &EventStyle,
    ) {
        let base_color = event
            .color
            .as_deref()
            .and_then(parse_color)
            .unwrap_or(self.fallback_color);

        let (fill_alpha, border_alpha) = if style.is_preview {
            (60, 140)
        } else if style.is_dragged {
            (40, 80)
        } else {
            (220, 255)
        };
        let fill = Color32::from_rgba_unmultiplied(
            base_color.r(),
            base_color.g(),
            base_color.b(),
            fill_alpha,
        );
        let border = Color32::from_rgba_unmultiplied(
            base_color.r(),
            base_color.g(),
            base_color.b(),
            border_alpha,
        );

        ui.painter().rect_filled(rect, 3.0, fill);
        ui.painter().rect_stroke(rect, 3.0, Stroke::new(2.0, border));

        // Accent bar on the left edge
        let bar_rect = Rect::from_min_size(
            Pos2::new(rect.left(), rect.top()),
            Vec2::new(4.0, rect.height()),
        );
        ui.painter().rect_filled(
            bar_rect,
            2.0,
            Color32::from_rgba_unmultiplied(
                base_color.r(),
                base_color.g(),
                base_color.b(),
                border_alpha.min(100),
            ),
        );

        // Clipped edges get no label; the source column shows it
        if rect.height() >= 14.0 && !(style.continues_earlier && style.continues_later) {
            ui.painter().text(
                Pos2::new(rect.left() + 8.0, rect.top() + 2.0),
                egui::Align2::LEFT_TOP,
                format!("{} {}", label, event.title),
                egui::FontId::proportional(11.0),
                Color32::WHITE,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_valid_hex() {
        assert_eq!(parse_color("#6496c8"), Some(Color32::from_rgb(100, 150, 200)));
    }

    #[test]
    fn test_parse_color_rejects_malformed() {
        assert_eq!(parse_color("6496c8"), None);
        assert_eq!(parse_color("#abc"), None);
        assert_eq!(parse_color("#zzzzzz"), None);
    }
}
