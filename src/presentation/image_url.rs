use serde::Serialize;
use url::Url;

const ABSOLUTE_SCHEMES: &[&str] = &["http", "https", "data", "blob"];

/// Base URL that relative image paths from the content API hang off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetHost(String);

impl AssetHost {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self(base.trim().trim_end_matches('/').to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Where the renderer should point an `<img>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "url", rename_all = "snake_case")]
pub enum ImageSource {
    Url(String),
    NoImage,
}

impl ImageSource {
    pub fn url(&self) -> Option<&str> {
        match self {
            ImageSource::Url(url) => Some(url),
            ImageSource::NoImage => None,
        }
    }
}

pub fn is_absolute_reference(path: &str) -> bool {
    if path.starts_with("//") {
        return true;
    }

    match Url::parse(path) {
        Ok(url) => ABSOLUTE_SCHEMES.contains(&url.scheme()),
        Err(_) => false,
    }
}

/// Resolves an image reference from the API against the asset host.
/// Absolute references pass through untouched; blank or missing paths
/// become [`ImageSource::NoImage`].
pub fn resolve_image_url(path: Option<&str>, host: &AssetHost) -> ImageSource {
    let Some(path) = path.map(str::trim).filter(|p| !p.is_empty()) else {
        return ImageSource::NoImage;
    };

    if is_absolute_reference(path) {
        return ImageSource::Url(path.to_string());
    }

    let path = path.trim_start_matches("./");
    if path.starts_with('/') {
        ImageSource::Url(format!("{}{}", host.as_str(), path))
    } else {
        ImageSource::Url(format!("{}/{}", host.as_str(), path))
    }
}
