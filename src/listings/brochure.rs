// src/listings/brochure.rs
use crate::listings::presentation::{
    available_date, display_or_placeholder, first_image_url, format_price_eur, video_embed_url, CODE_KEY,
};
use crate::listings::ListingRecord;

const DEFAULT_TITLE: &str = "Propiedad";

/// Printable summary of one listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Brochure {
    pub title: String,
    pub code: String,
    pub details: Vec<String>,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub filename: String,
}

impl Brochure {
    pub fn from_record(record: &ListingRecord) -> Self {
        let field = |key: &str| display_or_placeholder(record.get(key)).to_string();

        let street = match record.non_empty("#") {
            Some(number) => format!("{} {number}", field("Street")),
            None => field("Street"),
        };
        let price = format_price_eur(record.non_empty("Price").unwrap_or("0"));

        let details = vec![
            format!("Ubicación: {}", field("Location")),
            format!("Calle: {street}"),
            format!("Precio: {price}"),
            format!("Disponible desde: {}", available_date(record)),
            format!("Habitaciones: {}", field("Beds")),
            format!("Baños: {}", field("Baths")),
            format!("Metros cuadrados: {} m²", field("mts")),
            format!("Servicios: {}", field("Utilities")),
        ];

        let image_url = record
            .non_empty("images")
            .map(first_image_url)
            .filter(|url| !url.is_empty());

        // The sheet has used both spellings for this column.
        let video_url = record
            .non_empty("Video")
            .or_else(|| record.non_empty("video"))
            .map(video_embed_url)
            .filter(|url| !url.is_empty());

        let code = field(CODE_KEY);

        Self {
            title: record
                .non_empty("Location")
                .unwrap_or(DEFAULT_TITLE)
                .to_string(),
            filename: format!("{code}_brochure"),
            code,
            details,
            image_url,
            video_url,
        }
    }
}
