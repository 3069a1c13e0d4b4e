use super::{ContentError, ContentId, ContentRecord, ContentSource, normalize::normalize_response};
use crate::{locale::Locale, presentation::AssetHost};
use tracing::{debug, error, warn};

/// Result of one acquisition. `record` is always renderable; `error` is set
/// when it is the fallback.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub record: ContentRecord,
    pub error: Option<ContentError>,
}

impl FetchOutcome {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

pub fn fallback_description(locale: Locale) -> &'static str {
    match locale {
        Locale::Ru => "Информация временно недоступна.",
        Locale::Ky => "Маалымат убактылуу жеткиликсиз.",
        Locale::En => "This content is temporarily unavailable.",
    }
}

/// Placeholder record installed whenever acquisition fails.
pub fn fallback_record(id: Option<&ContentId>, locale: Locale) -> ContentRecord {
    ContentRecord {
        id: id.cloned().unwrap_or_else(|| ContentId::new("")),
        title: String::new(),
        description: Some(fallback_description(locale).to_string()),
        short_description: None,
        primary_image: None,
        additional_photos: Vec::new(),
        created_at: None,
        published_at: None,
        gallery_images: Vec::new(),
    }
}

fn log_failure(id: Option<&ContentId>, locale: Locale, err: &ContentError) {
    let id = id.map(ContentId::as_str).unwrap_or("<none>");
    match err {
        ContentError::MissingIdentifier => {
            warn!("Detail view opened without an identifier (locale {})", locale)
        }
        ContentError::NetworkFailure(reason) => {
            warn!("Failed to fetch content {} ({}): {}", id, locale, reason)
        }
        ContentError::InvalidResponseShape(reason) => {
            error!(
                "Content API returned an unusable body for {} ({}): {}",
                id, locale, reason
            )
        }
    }
}

/// Fetches and normalizes one record. Every failure is caught here and turned
/// into the fallback record; a missing id never touches the network.
pub async fn fetch_detail(
    source: &dyn ContentSource,
    id: Option<&ContentId>,
    locale: Locale,
    host: &AssetHost,
) -> FetchOutcome {
    let result = match id {
        None => Err(ContentError::MissingIdentifier),
        Some(id) => {
            debug!("Fetching content {} ({}) via {}", id, locale, source.name());
            match source.fetch_raw(id, locale).await {
                Ok(body) => normalize_response(body, host),
                Err(e) => Err(e),
            }
        }
    };

    match result {
        Ok(record) => FetchOutcome {
            record,
            error: None,
        },
        Err(err) => {
            log_failure(id, locale, &err);
            FetchOutcome {
                record: fallback_record(id, locale),
                error: Some(err),
            }
        }
    }
}
