use super::{ContentError, ContentId, ContentRecord, Photo};
use crate::presentation::{AssetHost, resolve_image_url};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, de::IgnoredAny};
use serde_json::{Number, Value};
use tracing::debug;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPhoto {
    Entry {
        #[serde(default)]
        image: Option<Value>,
        #[serde(default)]
        photo: Option<Value>,
        #[serde(default)]
        url: Option<Value>,
    },
    Bare(String),
    Other(IgnoredAny),
}

/// Every optional field is read as a loose JSON value so one odd field never
/// costs the whole record. Spellings of the same field are kept apart and
/// resolved by precedence, first listed wins.
#[derive(Deserialize)]
struct RawRecord {
    id: Value,
    #[serde(default)]
    title: Option<Value>,
    #[serde(default)]
    description: Option<Value>,
    #[serde(default)]
    short_description: Option<Value>,
    #[serde(default, rename = "shortDescription")]
    short_description_camel: Option<Value>,
    #[serde(default)]
    image: Option<Value>,
    #[serde(default, rename = "primaryImage")]
    primary_image_camel: Option<Value>,
    #[serde(default)]
    primary_image: Option<Value>,
    #[serde(default)]
    photos: Option<Value>,
    #[serde(default, rename = "additionalPhotos")]
    additional_photos_camel: Option<Value>,
    #[serde(default)]
    additional_photos: Option<Value>,
    #[serde(default)]
    created_at: Option<Value>,
    #[serde(default, rename = "createdAt")]
    created_at_camel: Option<Value>,
    #[serde(default)]
    published_at: Option<Value>,
    #[serde(default, rename = "publishedAt")]
    published_at_camel: Option<Value>,
}

fn describe_shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Text out of a loose value. Numbers are accepted as their decimal form;
/// anything else counts as absent.
fn loose_text(field: &str, value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(text) => non_blank(&text),
        Value::Number(n) => Some(n.to_string()),
        Value::Null => None,
        other => {
            debug!("Ignoring {} field '{}'", describe_shape(&other), field);
            None
        }
    }
}

/// First candidate that yields usable text.
fn first_text<const N: usize>(candidates: [(&str, Option<Value>); N]) -> Option<String> {
    candidates
        .into_iter()
        .find_map(|(field, value)| loose_text(field, value))
}

fn number_id(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 9_007_199_254_740_992.0 => format!("{:.0}", f),
        _ => n.to_string(),
    }
}

fn parse_id(value: Value) -> Result<ContentId, ContentError> {
    match value {
        Value::Number(n) => Ok(ContentId::new(number_id(&n))),
        Value::String(text) => ContentId::from_param(Some(&text))
            .ok_or_else(|| ContentError::InvalidResponseShape("record id is empty".to_string())),
        other => Err(ContentError::InvalidResponseShape(format!(
            "record id must be a string or number, got {}",
            describe_shape(&other)
        ))),
    }
}

/// Parses an API timestamp, keeping the offset the publisher sent so dates
/// render on the publisher's calendar day. Values without an offset are UTC.
pub(crate) fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date);
    }

    if let Ok(date) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(date.and_utc().fixed_offset());
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().fixed_offset());
    }

    debug!("Ignoring unparseable timestamp: {}", value);
    None
}

fn first_timestamp<const N: usize>(
    candidates: [(&str, Option<Value>); N],
) -> Option<DateTime<FixedOffset>> {
    first_text(candidates).and_then(|text| parse_timestamp(&text))
}

fn photo_entry(value: Value) -> Option<String> {
    match serde_json::from_value::<RawPhoto>(value).ok()? {
        RawPhoto::Entry { image, photo, url } => {
            first_text([("image", image), ("photo", photo), ("url", url)])
        }
        RawPhoto::Bare(image) => non_blank(&image),
        RawPhoto::Other(_) => None,
    }
}

/// First present photo list; unusable entries inside it are skipped.
fn photo_list<const N: usize>(candidates: [(&str, Option<Value>); N]) -> Vec<Photo> {
    let Some((field, list)) = candidates
        .into_iter()
        .find_map(|(field, value)| value.filter(|v| !v.is_null()).map(|v| (field, v)))
    else {
        return Vec::new();
    };

    match list {
        Value::Array(entries) => entries
            .into_iter()
            .filter_map(photo_entry)
            .map(|image| Photo { image })
            .collect(),
        other => {
            debug!("Ignoring {} field '{}'", describe_shape(&other), field);
            Vec::new()
        }
    }
}

/// Builds the ordered gallery: the hero image first, then every photo whose
/// resolved URL differs from the hero's. Without a hero the first photo
/// takes index 0 and no filtering happens.
pub fn build_gallery_images(
    primary_image: Option<&str>,
    photos: &[Photo],
    host: &AssetHost,
) -> Vec<String> {
    let mut images = Vec::with_capacity(photos.len() + 1);

    match primary_image {
        Some(primary) => {
            let primary_resolved = resolve_image_url(Some(primary), host);
            images.push(primary.to_string());
            images.extend(
                photos
                    .iter()
                    .filter(|photo| resolve_image_url(Some(&photo.image), host) != primary_resolved)
                    .map(|photo| photo.image.clone()),
            );
        }
        None => images.extend(photos.iter().map(|photo| photo.image.clone())),
    }

    images
}

fn parse_record_object(value: Value) -> Result<RawRecord, ContentError> {
    // Serde would happily read a struct out of a JSON array; only objects count.
    if !value.is_object() {
        return Err(ContentError::InvalidResponseShape(format!(
            "expected a record object, got {}",
            describe_shape(&value)
        )));
    }
    serde_json::from_value::<RawRecord>(value)
        .map_err(|e| ContentError::InvalidResponseShape(format!("unreadable record: {}", e)))
}

/// Unwraps either accepted response shape into a canonical record.
pub fn normalize_response(value: Value, host: &AssetHost) -> Result<ContentRecord, ContentError> {
    let raw = match value {
        Value::Object(mut object) => {
            if object.contains_key("id") {
                parse_record_object(Value::Object(object))?
            } else if let Some(data) = object.remove("data") {
                parse_record_object(data).map_err(|e| match e {
                    ContentError::InvalidResponseShape(reason) => {
                        ContentError::InvalidResponseShape(format!("in \"data\": {}", reason))
                    }
                    other => other,
                })?
            } else {
                return Err(ContentError::InvalidResponseShape(
                    "object has neither \"id\" nor a \"data\" wrapper".to_string(),
                ));
            }
        }
        other => {
            return Err(ContentError::InvalidResponseShape(format!(
                "expected a record or a {{\"data\": record}} wrapper, got {}",
                describe_shape(&other)
            )));
        }
    };

    normalize_record(raw, host)
}

fn normalize_record(raw: RawRecord, host: &AssetHost) -> Result<ContentRecord, ContentError> {
    let id = parse_id(raw.id)?;

    let additional_photos = photo_list([
        ("photos", raw.photos),
        ("additionalPhotos", raw.additional_photos_camel),
        ("additional_photos", raw.additional_photos),
    ]);

    let primary_image = first_text([
        ("image", raw.image),
        ("primaryImage", raw.primary_image_camel),
        ("primary_image", raw.primary_image),
    ]);
    let gallery_images = build_gallery_images(primary_image.as_deref(), &additional_photos, host);

    debug!(
        "Normalized record {}: {} additional photos, {} gallery images",
        id,
        additional_photos.len(),
        gallery_images.len()
    );

    Ok(ContentRecord {
        id,
        title: loose_text("title", raw.title).unwrap_or_default(),
        description: loose_text("description", raw.description),
        short_description: first_text([
            ("short_description", raw.short_description),
            ("shortDescription", raw.short_description_camel),
        ]),
        primary_image,
        additional_photos,
        created_at: first_timestamp([
            ("created_at", raw.created_at),
            ("createdAt", raw.created_at_camel),
        ]),
        published_at: first_timestamp([
            ("published_at", raw.published_at),
            ("publishedAt", raw.published_at_camel),
        ]),
        gallery_images,
    })
}
