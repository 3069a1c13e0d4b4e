use crate::locale::Locale;
use chrono::{DateTime, Datelike, FixedOffset};
use serde::Serialize;

const RU_MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

const KY_MONTHS: [&str; 12] = [
    "январь",
    "февраль",
    "март",
    "апрель",
    "май",
    "июнь",
    "июль",
    "август",
    "сентябрь",
    "октябрь",
    "ноябрь",
    "декабрь",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PluralCategory {
    One,
    Few,
    Many,
}

/// Picks the plural category for `count`.
///
/// Russian uses the three-way Slavic rule. Kyrgyz and English only split
/// one from everything else, so any count other than 1 lands in `Many`.
pub fn plural_category(count: u64, locale: Locale) -> PluralCategory {
    match locale {
        Locale::Ru => {
            let tens = count % 100;
            let units = count % 10;
            if units == 1 && tens != 11 {
                PluralCategory::One
            } else if (2..=4).contains(&units) && !(12..=14).contains(&tens) {
                PluralCategory::Few
            } else {
                PluralCategory::Many
            }
        }
        Locale::Ky | Locale::En => {
            if count == 1 {
                PluralCategory::One
            } else {
                PluralCategory::Many
            }
        }
    }
}

/// Noun form for "N photo(s)".
pub fn pluralize_photo_count(count: u64, locale: Locale) -> &'static str {
    match (locale, plural_category(count, locale)) {
        (Locale::Ru, PluralCategory::One) => "фотография",
        (Locale::Ru, PluralCategory::Few) => "фотографии",
        (Locale::Ru, PluralCategory::Many) => "фотографий",
        (Locale::Ky, _) => "сүрөт",
        (Locale::En, PluralCategory::One) => "photo",
        (Locale::En, _) => "photos",
    }
}

pub fn photo_count_label(count: u64, locale: Locale) -> String {
    format!("{} {}", count, pluralize_photo_count(count, locale))
}

pub fn unknown_date_label(locale: Locale) -> &'static str {
    match locale {
        Locale::Ru => "Дата не указана",
        Locale::Ky => "Күнү белгисиз",
        Locale::En => "Date unknown",
    }
}

/// Human-readable date in the given locale, on the calendar day of the
/// timestamp's own offset. Never fails: a missing timestamp renders the
/// locale's "unknown date" label.
pub fn format_date(timestamp: Option<&DateTime<FixedOffset>>, locale: Locale) -> String {
    let Some(timestamp) = timestamp else {
        return unknown_date_label(locale).to_string();
    };

    let month_index = timestamp.month0() as usize;
    match locale {
        Locale::Ru => format!(
            "{} {} {}",
            timestamp.day(),
            RU_MONTHS_GENITIVE[month_index],
            timestamp.year()
        ),
        Locale::Ky => format!(
            "{}-ж., {}-{}",
            timestamp.year(),
            timestamp.day(),
            KY_MONTHS[month_index]
        ),
        Locale::En => timestamp.format("%B %-d, %Y").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_russian_three_way_plurals() {
        assert_eq!(pluralize_photo_count(1, Locale::Ru), "фотография");
        assert_eq!(pluralize_photo_count(3, Locale::Ru), "фотографии");
        assert_eq!(pluralize_photo_count(11, Locale::Ru), "фотографий");
        assert_eq!(pluralize_photo_count(21, Locale::Ru), "фотография");
        assert_eq!(pluralize_photo_count(12, Locale::Ru), "фотографий");
        assert_eq!(pluralize_photo_count(24, Locale::Ru), "фотографии");
        assert_eq!(pluralize_photo_count(0, Locale::Ru), "фотографий");
        assert_eq!(pluralize_photo_count(111, Locale::Ru), "фотографий");
    }

    #[test]
    fn test_two_way_plurals_collapse_to_many() {
        assert_eq!(pluralize_photo_count(1, Locale::En), "photo");
        assert_eq!(pluralize_photo_count(5, Locale::En), "photos");
        assert_eq!(pluralize_photo_count(3, Locale::En), "photos");
        assert_eq!(plural_category(3, Locale::Ky), PluralCategory::Many);
        assert_eq!(plural_category(1, Locale::Ky), PluralCategory::One);
        assert_eq!(pluralize_photo_count(7, Locale::Ky), "сүрөт");
    }

    #[test]
    fn test_photo_count_label() {
        assert_eq!(photo_count_label(2, Locale::En), "2 photos");
        assert_eq!(photo_count_label(22, Locale::Ru), "22 фотографии");
    }

    #[test]
    fn test_format_date_per_locale() {
        let date = Utc
            .with_ymd_and_hms(2024, 3, 12, 10, 30, 0)
            .unwrap()
            .fixed_offset();
        assert_eq!(format_date(Some(&date), Locale::Ru), "12 марта 2024");
        assert_eq!(format_date(Some(&date), Locale::Ky), "2024-ж., 12-март");
        assert_eq!(format_date(Some(&date), Locale::En), "March 12, 2024");
    }

    #[test]
    fn test_format_date_uses_own_offset() {
        // 2024-03-31T18:30:00Z, already April 1st in Bishkek.
        let bishkek = FixedOffset::east_opt(6 * 3600).unwrap();
        let date = bishkek.with_ymd_and_hms(2024, 4, 1, 0, 30, 0).unwrap();

        assert_eq!(format_date(Some(&date), Locale::Ru), "1 апреля 2024");
        assert_eq!(format_date(Some(&date), Locale::Ky), "2024-ж., 1-апрель");
        assert_eq!(format_date(Some(&date), Locale::En), "April 1, 2024");
    }

    #[test]
    fn test_format_missing_date() {
        assert_eq!(format_date(None, Locale::Ru), "Дата не указана");
        assert_eq!(format_date(None, Locale::En), "Date unknown");
        assert_eq!(format_date(None, Locale::Ky), "Күнү белгисиз");
    }
}
