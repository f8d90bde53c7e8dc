//! Output of the accumulated result set

mod json;

pub use json::save_products;
