pub mod layouts;
pub mod pages;

pub use layouts::print::print_layout;
pub use pages::brochure_page;
