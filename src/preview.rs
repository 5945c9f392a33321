//! Hover previews for card rows.
//!
//! [`PreviewController`] owns the lifecycle: it locates the hovered row's
//! anchor, places one preview offset from that anchor and removes it again.
//! Drawing is left to a [`PreviewSurface`], so the same algorithm drives the
//! iced overlay and the recording surface used in tests.

use std::collections::BTreeSet;

use tracing::debug;

use crate::models::Card;

/// Distance between the row's top-right corner and the preview.
pub const PREVIEW_OFFSET: f32 = 10.0;
pub const PREVIEW_MAX_WIDTH: f32 = 200.0;
pub const PREVIEW_MAX_HEIGHT: f32 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub tag: String,
    pub card: Card,
    pub position: Point,
    pub max_size: Size,
}

pub trait PreviewSurface {
    /// Bounds of the rendered row, if it is currently on screen.
    fn anchor_rect_for(&self, row_id: &str) -> Option<Rect>;

    /// Shows the preview, replacing any preview with the same tag.
    fn show_preview(&mut self, preview: Preview);

    fn hide_preview(&mut self, tag: &str);
}

pub fn preview_tag(card: &Card) -> String {
    format!("hover-image-{}", card.name)
}

pub fn anchor_point(rect: Rect) -> Point {
    Point {
        x: rect.right() + PREVIEW_OFFSET,
        y: rect.top() + PREVIEW_OFFSET,
    }
}

/// Pairs every shown preview with its removal.
#[derive(Debug, Default)]
pub struct PreviewController {
    active: BTreeSet<String>,
}

impl PreviewController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the row could not be located and nothing was shown.
    pub fn on_enter<S: PreviewSurface>(
        &mut self,
        surface: &mut S,
        row_id: &str,
        card: &Card,
    ) -> bool {
        let Some(rect) = surface.anchor_rect_for(row_id) else {
            debug!(row_id, "preview anchor not found, skipping");
            return false;
        };

        let tag = preview_tag(card);
        if self.active.contains(&tag) {
            surface.hide_preview(&tag);
        }

        surface.show_preview(Preview {
            tag: tag.clone(),
            card: card.clone(),
            position: anchor_point(rect),
            max_size: Size {
                width: PREVIEW_MAX_WIDTH,
                height: PREVIEW_MAX_HEIGHT,
            },
        });
        debug!(tag = %tag, "preview shown");
        self.active.insert(tag);
        true
    }

    pub fn on_leave<S: PreviewSurface>(&mut self, surface: &mut S, card: &Card) {
        let tag = preview_tag(card);
        surface.hide_preview(&tag);
        if self.active.remove(&tag) {
            debug!(tag = %tag, "preview removed");
        }
    }

    /// Removes every preview still shown, e.g. when the screen goes away.
    pub fn teardown<S: PreviewSurface>(&mut self, surface: &mut S) {
        for tag in std::mem::take(&mut self.active) {
            surface.hide_preview(&tag);
        }
    }

    pub fn active(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(String::as_str)
    }
}
