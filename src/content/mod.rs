// Content acquisition - fetch one record and normalize it
mod error;
mod fetch;
mod normalize;
mod source;
mod types;

pub use error::{ContentError, FetchErrorKind};
pub use fetch::{FetchOutcome, fallback_description, fallback_record, fetch_detail};
pub use normalize::{build_gallery_images, normalize_response};
pub use source::{ContentSource, DynContentSource, HttpContentSource, MemoryContentSource};
pub use types::{ContentId, ContentRecord, Photo};
