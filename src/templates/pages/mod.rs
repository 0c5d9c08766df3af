pub mod brochure;

pub use brochure::brochure_page;
