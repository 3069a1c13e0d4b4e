use super::{DetailController, ViewStatus};
use crate::{
    content::{ContentError, FetchErrorKind},
    presentation::{CellState, ImageSource, format_date, photo_count_label, resolve_image_url},
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedImage {
    pub index: usize,
    pub source: ImageSource,
    pub cell: CellState,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedLightbox {
    pub index: usize,
    pub source: ImageSource,
    /// "2 / 5"
    pub position: String,
}

/// What a template needs to draw the detail page, with every URL resolved and
/// every label localized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedView {
    pub id: String,
    pub locale: String,
    pub title: String,
    pub description: Option<String>,
    pub summary: Option<String>,
    pub date: String,
    pub hero: ImageSource,
    pub photo_count: Option<String>,
    pub images: Vec<RenderedImage>,
    pub lightbox: Option<RenderedLightbox>,
    pub status: ViewStatus,
    pub error: Option<FetchErrorKind>,
    pub can_retry: bool,
}

pub fn render(controller: &DetailController) -> RenderedView {
    let record = controller.record();
    let gallery = controller.gallery();
    let loads = controller.loads();
    let host = controller.host();
    let locale = controller.locale();

    let images: Vec<RenderedImage> = gallery
        .images()
        .iter()
        .enumerate()
        .map(|(index, path)| RenderedImage {
            index,
            source: resolve_image_url(Some(path), host),
            cell: loads.cell(index),
        })
        .collect();

    let lightbox = if gallery.is_open() {
        gallery.current_image().map(|path| RenderedLightbox {
            index: gallery.current_index(),
            source: resolve_image_url(Some(path), host),
            position: format!("{} / {}", gallery.current_index() + 1, gallery.len()),
        })
    } else {
        None
    };

    // The gallery strip and its counter are suppressed for an empty gallery.
    let photo_count = if images.is_empty() {
        None
    } else {
        Some(photo_count_label(images.len() as u64, locale))
    };

    let error = controller.error();

    RenderedView {
        id: record.id.to_string(),
        locale: locale.to_string(),
        title: record.title.clone(),
        description: record.display_description().map(str::to_string),
        summary: record.display_summary().map(str::to_string),
        date: format_date(record.display_date(), locale),
        hero: images
            .first()
            .map(|image| image.source.clone())
            .unwrap_or(ImageSource::NoImage),
        photo_count,
        images,
        lightbox,
        status: controller.status(),
        error: error.map(ContentError::kind),
        can_retry: error.is_some_and(ContentError::is_retryable),
    }
}
