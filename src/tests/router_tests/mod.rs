mod brochure_tests;
mod properties_tests;
