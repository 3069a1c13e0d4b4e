// Detail view - one content record, its gallery and the lightbox over it
mod controller;
mod render;
mod view;

pub use controller::{DetailController, DetailRequest, FetchTicket};
pub use render::{RenderedImage, RenderedLightbox, RenderedView, render};
pub use view::DetailView;

use crate::{
    content::{ContentRecord, FetchErrorKind},
    gallery::Key,
    presentation::CellState,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "error", rename_all = "snake_case")]
pub enum ViewStatus {
    Idle,
    Loading,
    Ready,
    Failed(FetchErrorKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    OpenAt { index: usize },
    Close,
    Next,
    Prev,
    Select { index: usize },
    Key { key: Key },
    ImageLoaded { index: usize },
    ImageFailed { index: usize },
    Retry,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GallerySnapshot {
    pub images: Vec<String>,
    pub lightbox_open: bool,
    pub current_index: usize,
    pub loaded: Vec<CellState>,
}

/// Read-only copy of a view's state for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailSnapshot {
    pub record: ContentRecord,
    pub gallery: GallerySnapshot,
    pub status: ViewStatus,
    pub error: Option<FetchErrorKind>,
    pub can_retry: bool,
}
