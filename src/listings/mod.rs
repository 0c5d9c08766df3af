pub mod brochure;
pub mod envelope;
pub mod normalizer;
pub mod presentation;
mod record;
pub mod service;

pub use brochure::Brochure;
pub use envelope::{ErrorBody, ListingsResponse};
pub use normalizer::{normalize, NormalizedListings};
pub use record::ListingRecord;
pub use service::{fetch_listings, ListingsError};
