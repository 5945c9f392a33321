use std::{
    collections::{BTreeMap, HashMap, HashSet},
    path::PathBuf,
};

use bytes::Bytes;
use iced::{
    widget::{self, image::Handle},
    ContentFit, Element, Length,
};
use tracing::warn;

use crate::{
    models::Card,
    preview::{Preview, PreviewSurface, Rect},
};

/// Remote preview image that still has to be downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub card_name: String,
    pub uri: String,
}

/// Preview surface drawn by the app: a lane on the right edge of the window
/// where previews float at their anchor height. Only `position.y` is used by
/// the lane.
#[derive(Debug, Default)]
pub struct OverlayLayer {
    anchors: HashMap<String, Rect>,
    previews: BTreeMap<String, Preview>,
    image_cache: HashMap<String, Bytes>,
    pending_images: HashSet<String>,
}

impl OverlayLayer {
    pub fn track_row(&mut self, row_id: &str, anchor: Rect) {
        self.anchors.insert(row_id.to_owned(), anchor);
    }

    pub fn forget_row(&mut self, row_id: &str) {
        self.anchors.remove(row_id);
    }

    pub fn clear_rows(&mut self) {
        self.anchors.clear();
    }

    pub fn previews(&self) -> impl Iterator<Item = &Preview> {
        self.previews.values()
    }

    /// Asks for a download when the card's image is remote and neither cached
    /// nor already on its way.
    pub fn request_image(&mut self, card: &Card) -> Option<ImageRequest> {
        let uri = card.image_uri.as_deref().filter(|uri| is_remote(uri))?;
        if self.image_cache.contains_key(&card.name)
            || !self.pending_images.insert(card.name.clone())
        {
            return None;
        }

        Some(ImageRequest {
            card_name: card.name.clone(),
            uri: uri.to_owned(),
        })
    }

    /// Records a finished download. A failed one may be requested again.
    pub fn store_image(&mut self, card_name: &str, bytes: Option<Bytes>) {
        self.pending_images.remove(card_name);
        match bytes {
            Some(bytes) => {
                self.image_cache.insert(card_name.to_owned(), bytes);
            }
            None => warn!(card_name, "preview image unavailable"),
        }
    }

    pub fn cached_image(&self, card_name: &str) -> Option<&Bytes> {
        self.image_cache.get(card_name)
    }

    pub fn view<'a, Message: 'a>(&'a self) -> Element<'a, Message> {
        let mut lane: widget::Column<'a, Message> = widget::Column::new().width(Length::Shrink);
        let mut used_height = 0.0;

        for preview in self.previews.values() {
            let gap = (preview.position.y - used_height).max(0.0);
            lane = lane
                .push(widget::Space::with_height(Length::Fixed(gap)))
                .push(self.preview_image(preview));
            used_height = preview.position.y + preview.max_size.height;
        }

        lane.into()
    }
}

impl PreviewSurface for OverlayLayer {
    fn anchor_rect_for(&self, row_id: &str) -> Option<Rect> {
        self.anchors.get(row_id).copied()
    }

    fn show_preview(&mut self, preview: Preview) {
        self.previews.insert(preview.tag.clone(), preview);
    }

    fn hide_preview(&mut self, tag: &str) {
        self.previews.remove(tag);
    }
}

impl OverlayLayer {
    fn preview_image<'a, Message: 'a>(&'a self, preview: &'a Preview) -> Element<'a, Message> {
        let width = Length::Fixed(preview.max_size.width);
        let height = Length::Fixed(preview.max_size.height);

        let handle = match self.cached_image(&preview.card.name) {
            Some(bytes) => Some(Handle::from_memory(bytes.clone())),
            None => preview
                .card
                .image_uri
                .as_deref()
                .and_then(local_image_path)
                .map(Handle::from_path),
        };

        match handle {
            Some(handle) => widget::image::<Handle>(handle)
                .width(width)
                .height(height)
                .content_fit(ContentFit::ScaleDown)
                .into(),
            // still downloading, or no image at all
            None => widget::container(widget::text(&preview.card.name))
                .width(width)
                .padding(8)
                .style(iced::theme::Container::Box)
                .into(),
        }
    }
}

fn is_remote(uri: &str) -> bool {
    uri.starts_with("http://") || uri.starts_with("https://")
}

fn local_image_path(uri: &str) -> Option<PathBuf> {
    if uri.is_empty() || is_remote(uri) {
        return None;
    }
    Some(PathBuf::from(uri.strip_prefix("file://").unwrap_or(uri)))
}
