// Presentation adapter - pure helpers the renderer leans on
mod i18n;
mod image_url;
mod load;

pub use i18n::{
    PluralCategory, format_date, photo_count_label, plural_category, pluralize_photo_count,
    unknown_date_label,
};
pub use image_url::{AssetHost, ImageSource, is_absolute_reference, resolve_image_url};
pub use load::{CellState, LoadTracker};
