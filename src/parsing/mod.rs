pub mod bdf;
pub mod cursor;
