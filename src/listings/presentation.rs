// src/listings/presentation.rs
//
// Display helpers over loosely-typed listing records. None of these affect
// which rows the endpoint returns.
use serde_json::Value;
use tracing::warn;
use url::Url;

use crate::listings::ListingRecord;

pub const CODE_KEY: &str = "CODE";
pub const PLACEHOLDER: &str = "N/A";
pub const AVAILABLE_NOW: &str = "Disponible ahora";

const DRIVE_PREVIEW_BASE: &str = "https://drive.google.com/file/d";

pub fn find_by_code<'a>(records: &'a [ListingRecord], code: &str) -> Option<&'a ListingRecord> {
    records.iter().find(|r| r.get(CODE_KEY) == Some(code))
}

/// The `images` column holds either a JSON array of URLs or one URL.
pub fn first_image_url(images: &str) -> String {
    let images = images.trim();

    if images.starts_with('[') {
        match serde_json::from_str::<Vec<Value>>(images) {
            Ok(urls) => {
                if let Some(Value::String(first)) = urls.into_iter().next() {
                    return first;
                }
            }
            Err(e) => warn!(error = %e, "images column is not a valid JSON array"),
        }
    }

    if images.starts_with("http") {
        return images.to_string();
    }

    String::new()
}

/// Turn a Drive share link (`.../file/d/{ID}/view`) into its preview link.
/// Other URLs pass through untouched.
pub fn video_embed_url(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        return String::new();
    }

    // Links pasted without a scheme don't parse; split the raw text instead.
    let parsed = Url::parse(url).ok();
    let segments: Vec<&str> = match &parsed {
        Some(parsed) => parsed.path_segments().map(|s| s.collect()).unwrap_or_default(),
        None => url.split(&['?', '#'][..]).next().unwrap_or_default().split('/').collect(),
    };

    segments
        .windows(3)
        .find(|w| w[0] == "file" && w[1] == "d" && !w[2].is_empty())
        .map(|w| format!("{DRIVE_PREVIEW_BASE}/{}/preview", w[2]))
        .unwrap_or_else(|| url.to_string())
}

/// Leading number after dropping everything but digits, `.` and `-`.
///
/// Follows the leading-number rule, so `"1.200.000"` reads as `1.2`.
pub fn parse_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    (1..=cleaned.len())
        .rev()
        .find_map(|end| cleaned[..end].parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

/// Euro amount in Spanish formatting, e.g. `"1500"` → `"1500 €"`,
/// `"12500.5"` → `"12.500,5 €"`. Unparsable input is returned as-is.
pub fn format_price_eur(raw: &str) -> String {
    let Some(amount) = parse_price(raw) else {
        return raw.to_string();
    };

    let scaled = (amount.abs() * 100.0).round();
    if scaled >= u64::MAX as f64 {
        warn!(price = raw, "price too large to format");
        return raw.to_string();
    }

    let cents = scaled as u64;
    let (whole, fraction) = (cents / 100, cents % 100);

    let mut out = String::new();
    if amount < 0.0 && cents > 0 {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));
    if fraction > 0 {
        let digits = format!("{fraction:02}");
        out.push(',');
        out.push_str(digits.trim_end_matches('0'));
    }
    out.push_str("\u{a0}€");
    out
}

/// Spanish locale only groups numbers of five or more digits.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() < 5 {
        return digits;
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// `"{Month} {Date}"` when both are filled, else the date alone, else "available now".
pub fn available_date(record: &ListingRecord) -> String {
    match (record.non_empty("Month"), record.non_empty("Date")) {
        (Some(month), Some(date)) => format!("{month} {date}"),
        (_, Some(date)) => date.to_string(),
        _ => AVAILABLE_NOW.to_string(),
    }
}

pub fn display_or_placeholder(value: Option<&str>) -> &str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or(PLACEHOLDER)
}
