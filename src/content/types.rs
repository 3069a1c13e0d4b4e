use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a content record. The API hands out both strings and
/// integers; both are kept in their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(String);

impl ContentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parses a route parameter. Blank or absent ids are rejected.
    pub fn from_param(param: Option<&str>) -> Option<Self> {
        param
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for ContentId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for ContentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Photo {
    pub image: String,
}

/// Normalized detail entity for a project, news item or organizational unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentRecord {
    pub id: ContentId,
    pub title: String,
    /// Opaque text/HTML blob.
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub primary_image: Option<String>,
    pub additional_photos: Vec<Photo>,
    /// Kept in the offset the API sent it in.
    pub created_at: Option<DateTime<FixedOffset>>,
    pub published_at: Option<DateTime<FixedOffset>>,
    /// Hero image first, then the remaining photos in API order.
    pub gallery_images: Vec<String>,
}

impl ContentRecord {
    pub fn display_description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .or(self.short_description.as_deref())
    }

    pub fn display_summary(&self) -> Option<&str> {
        self.short_description
            .as_deref()
            .or(self.description.as_deref())
    }

    pub fn display_date(&self) -> Option<&DateTime<FixedOffset>> {
        self.published_at.as_ref().or(self.created_at.as_ref())
    }

    pub fn has_gallery(&self) -> bool {
        !self.gallery_images.is_empty()
    }
}
